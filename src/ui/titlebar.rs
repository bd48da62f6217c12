use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::{AppState, Screen};

pub fn draw_titlebar(f: &mut Frame, area: Rect, state: &AppState) {
    let title_text = "[ Test Timer ]".to_string();
    let title_span = Span::styled(
        title_text.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let progress = match state.screen {
        Screen::Running if state.timer.total_questions > 0 => format!(
            " Question {} of {} ",
            state.timer.question_number, state.timer.total_questions
        ),
        _ => String::new(),
    };
    let progress_span = if state.timer.over_time {
        Span::styled(
            progress.clone(),
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(progress.clone(), Style::default().fg(Color::Rgb(200, 200, 120)))
    };

    // Centre the title, keep the progress flush right
    let available = area.width as usize;
    let title_len = title_text.chars().count();
    let progress_len = progress.chars().count();
    let center_pad = available.saturating_sub(title_len) / 2;
    let right_pad = available.saturating_sub(center_pad + title_len + progress_len);

    let line = Line::from(vec![
        Span::raw(" ".repeat(center_pad)),
        title_span,
        Span::raw(" ".repeat(right_pad)),
        progress_span,
    ]);

    let widget = Paragraph::new(line)
        .style(Style::default().bg(Color::DarkGray))
        .alignment(Alignment::Left);
    f.render_widget(widget, area);
}
