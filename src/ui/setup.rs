use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::state::{AppState, SetupField};

pub fn draw_setup(f: &mut Frame, area: Rect, state: &AppState) {
    let settings = &state.settings;
    let questions = if state.questions_input.is_empty() {
        "_".to_string()
    } else {
        state.questions_input.clone()
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Set up your test",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field_line("Hours", format!("{:>2}", settings.hours), state.focus == SetupField::Hours),
        field_line("Minutes", format!("{:02}", settings.minutes), state.focus == SetupField::Minutes),
        field_line("Questions", questions, state.focus == SetupField::Questions),
        Line::from(""),
        start_line(state),
        Line::from(""),
    ];

    if let Some(err) = &state.error {
        lines.push(Line::from(Span::styled(
            err.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}

fn field_line(label: &str, value: String, focused: bool) -> Line<'static> {
    let value_style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    Line::from(vec![
        Span::styled(format!("{:>10}: ", label), Style::default().fg(Color::Gray)),
        Span::styled(format!(" {} ", value), value_style),
        Span::raw("   "),
    ])
}

fn start_line(state: &AppState) -> Line<'static> {
    let focused = state.focus == SetupField::Start;
    let style = match (state.can_start(), focused) {
        (true, true) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(Color::Green),
        (false, _) => Style::default().fg(Color::DarkGray),
    };
    Line::from(Span::styled("[ Start ]", style))
}
