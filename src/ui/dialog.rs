use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::state::{AppState, Dialog};

pub fn draw_dialog(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(dialog) = &state.dialog else {
        return;
    };

    match dialog {
        Dialog::Finished {
            completed,
            time_left,
            questions_remaining,
        } => draw_finished(f, area, *completed, time_left, *questions_remaining),
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn draw_finished(
    f: &mut Frame,
    area: Rect,
    completed: bool,
    time_left: &str,
    questions_remaining: u32,
) {
    let detail = if completed {
        "   Time is up.".to_string()
    } else {
        format!("   Finished with {} to spare.", time_left)
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "   Test Complete!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("   The test has ended."),
        Line::from(detail),
    ];
    if questions_remaining > 0 {
        lines.push(Line::from(format!(
            "   {} questions remaining.",
            questions_remaining
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "   [Enter] OK",
        Style::default().fg(Color::Green),
    )));
    lines.push(Line::from(""));

    let rect = centered_rect(42, lines.len() as u16 + 2, area);
    f.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let widget = Paragraph::new(lines).block(block);
    f.render_widget(widget, rect);
}
