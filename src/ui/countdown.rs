use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::state::AppState;
use crate::ui::bigtext::draw_scaled;
use crate::ui::layout::compute_timer_layout;

const OVERTIME_BG: Color = Color::Red;

pub fn draw_countdown(f: &mut Frame, area: Rect, state: &AppState) {
    let layout = compute_timer_layout(area);
    let timer = &state.timer;

    let (question_block, question_style) = if timer.over_time {
        (
            Block::default()
                .borders(Borders::ALL)
                .title(" Question time (over) ")
                .style(Style::default().bg(OVERTIME_BG)),
            Style::default().fg(Color::White).bg(OVERTIME_BG),
        )
    } else {
        (
            Block::default().borders(Borders::ALL).title(" Question time "),
            Style::default().fg(Color::Cyan),
        )
    };
    draw_boxed(
        f,
        layout.question_time,
        question_block,
        &timer.question_time,
        question_style,
    );

    draw_boxed(
        f,
        layout.total_time,
        Block::default().borders(Borders::ALL).title(" Test time "),
        &timer.total_time,
        Style::default().fg(Color::Rgb(200, 200, 120)),
    );

    draw_boxed(
        f,
        layout.questions,
        Block::default()
            .borders(Borders::ALL)
            .title(" Questions remaining "),
        &timer.questions_text,
        Style::default().fg(Color::White),
    );

    draw_buttons(f, layout.buttons, state);
}

fn draw_boxed(f: &mut Frame, area: Rect, block: Block, text: &str, style: Style) {
    let inner = block.inner(area);
    f.render_widget(block, area);
    draw_scaled(f, inner, text, style);
}

fn draw_buttons(f: &mut Frame, area: Rect, state: &AppState) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_button(f, halves[0], "◀ Previous", state.timer.prev_enabled());
    draw_button(f, halves[1], "Next ▶", state.timer.next_enabled());
}

fn draw_button(f: &mut Frame, area: Rect, label: &str, enabled: bool) {
    let style = if enabled {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let widget = Paragraph::new(Line::from(Span::styled(label.to_string(), style)))
        .block(Block::default().borders(Borders::ALL).border_style(style))
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}
