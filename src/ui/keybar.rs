use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::{AppState, Screen};

pub fn draw_keybar(f: &mut Frame, area: Rect, state: &AppState) {
    let bindings: Vec<(&str, &str)> = if state.dialog.is_some() {
        vec![("Enter", "back to setup")]
    } else {
        match state.screen {
            Screen::Setup => vec![
                ("Tab", "field"),
                ("↑/↓", "change"),
                ("0-9", "questions"),
                ("Enter", "start"),
                ("q", "quit"),
            ],
            Screen::Running => vec![
                ("→/n", "next question"),
                ("←/p", "previous"),
                ("Esc", "end test"),
                ("Ctrl+C", "quit"),
            ],
        }
    };

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, action)) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}", action)));
    }

    let line = Line::from(spans);
    let widget = Paragraph::new(line).style(Style::default().bg(Color::Rgb(20, 20, 20)));
    f.render_widget(widget, area);
}
