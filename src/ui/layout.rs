use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub titlebar: Rect,
    pub main: Rect,
    pub keybar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // titlebar
            Constraint::Min(5),    // screen content
            Constraint::Length(1), // keybar
        ])
        .split(area);

    AppLayout {
        titlebar: vertical[0],
        main: vertical[1],
        keybar: vertical[2],
    }
}

pub struct TimerLayout {
    pub question_time: Rect,
    pub total_time: Rect,
    pub questions: Rect,
    pub buttons: Rect,
}

pub fn compute_timer_layout(area: Rect) -> TimerLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45), // question time, the one that matters
            Constraint::Percentage(25), // test time
            Constraint::Min(3),         // questions remaining
            Constraint::Length(3),      // prev / next
        ])
        .split(area);

    TimerLayout {
        question_time: vertical[0],
        total_time: vertical[1],
        questions: vertical[2],
        buttons: vertical[3],
    }
}
