use crate::config::{Settings, MAX_HOURS};
use crate::countdown::{format_duration, CountdownEvent, CountdownSession, MAX_QUESTIONS};
use crate::timer::TickSource;

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Setup,
    Running,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    Finished {
        completed: bool,
        time_left: String,
        questions_remaining: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SetupField {
    Hours,
    Minutes,
    Questions,
    Start,
}

impl SetupField {
    pub fn next(self) -> Self {
        match self {
            SetupField::Hours => SetupField::Minutes,
            SetupField::Minutes => SetupField::Questions,
            SetupField::Questions => SetupField::Start,
            SetupField::Start => SetupField::Hours,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SetupField::Hours => SetupField::Start,
            SetupField::Minutes => SetupField::Hours,
            SetupField::Questions => SetupField::Minutes,
            SetupField::Start => SetupField::Questions,
        }
    }
}

/// What the timer screen shows, kept in step with the running session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimerView {
    pub total_time: String,
    pub question_time: String,
    pub questions_text: String,
    pub questions_remaining: u32,
    pub total_questions: u32,
    pub question_number: u32,
    pub over_time: bool,
}

impl TimerView {
    pub fn prev_enabled(&self) -> bool {
        self.total_questions != self.questions_remaining
    }

    pub fn next_enabled(&self) -> bool {
        self.questions_remaining <= self.total_questions
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub settings: Settings,
    pub questions_input: String,
    pub focus: SetupField,
    pub timer: TimerView,
    pub dialog: Option<Dialog>,
    pub error: Option<String>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            screen: Screen::Setup,
            settings,
            questions_input: if settings.questions > 0 {
                settings.questions.to_string()
            } else {
                String::new()
            },
            focus: SetupField::Hours,
            timer: TimerView::default(),
            dialog: None,
            error: None,
            should_quit: false,
        }
    }

    pub fn can_start(&self) -> bool {
        self.settings.is_valid()
    }

    /// Steps the focused picker, wrapping like a number wheel.
    pub fn adjust_focused(&mut self, delta: i32) {
        match self.focus {
            SetupField::Hours => {
                self.settings.hours = wrap(self.settings.hours, delta, MAX_HOURS);
            }
            SetupField::Minutes => {
                self.settings.minutes = wrap(self.settings.minutes, delta, 59);
            }
            SetupField::Questions => {
                let stepped = i64::from(self.settings.questions) + i64::from(delta);
                self.settings.questions = stepped.clamp(0, i64::from(MAX_QUESTIONS)) as u32;
                self.questions_input = if self.settings.questions > 0 {
                    self.settings.questions.to_string()
                } else {
                    String::new()
                };
            }
            SetupField::Start => {}
        }
        self.error = None;
    }

    pub fn type_digit(&mut self, c: char) {
        if self.focus != SetupField::Questions || !c.is_ascii_digit() {
            return;
        }
        if self.questions_input.len() >= MAX_QUESTIONS.to_string().len() {
            return;
        }
        if self.questions_input == "0" {
            self.questions_input.clear();
        }
        self.questions_input.push(c);
        self.sync_questions_input();
    }

    pub fn backspace(&mut self) {
        if self.focus != SetupField::Questions {
            return;
        }
        self.questions_input.pop();
        self.sync_questions_input();
    }

    fn sync_questions_input(&mut self) {
        self.settings.questions = self.questions_input.parse().unwrap_or(0);
        self.error = None;
    }

    /// Switches to the timer screen for a freshly built session.
    pub fn enter_timer<T: TickSource>(&mut self, session: &CountdownSession<T>) {
        self.screen = Screen::Running;
        self.dialog = None;
        self.error = None;
        self.timer = TimerView::default();
        self.sync_session(session);
    }

    pub fn leave_timer(&mut self) {
        self.screen = Screen::Setup;
        self.dialog = None;
        self.timer = TimerView::default();
    }

    /// Refreshes counts and texts after a question command.
    pub fn sync_session<T: TickSource>(&mut self, session: &CountdownSession<T>) {
        self.timer.questions_remaining = session.questions_remaining();
        self.timer.total_questions = session.total_questions();
        self.timer.question_number = session.current_question_number();
        self.timer.over_time = session.is_over_time_for_current_question();
        self.apply_event(&session.snapshot());
    }

    pub fn apply_events(&mut self, events: &[CountdownEvent]) {
        for ev in events {
            self.apply_event(ev);
        }
    }

    pub fn apply_event(&mut self, event: &CountdownEvent) {
        match event {
            CountdownEvent::Updated {
                total_time,
                question_time,
                questions_remaining,
            } => {
                self.timer.total_time = total_time.clone();
                self.timer.question_time = question_time.clone();
                self.timer.questions_text = questions_remaining.clone();
            }
            CountdownEvent::Stopped {
                total_time_remaining,
                completed,
                questions_remaining,
            } => {
                // Only the first stop of a run opens the dialog.
                if self.dialog.is_none() {
                    self.dialog = Some(Dialog::Finished {
                        completed: *completed,
                        time_left: format_duration(*total_time_remaining),
                        questions_remaining: *questions_remaining,
                    });
                }
            }
            CountdownEvent::EnteredOvertime => {
                self.timer.over_time = true;
            }
            CountdownEvent::ExitedOvertime => {
                self.timer.over_time = false;
            }
        }
    }
}

fn wrap(value: u32, delta: i32, max: u32) -> u32 {
    let span = i64::from(max) + 1;
    (i64::from(value) + i64::from(delta)).rem_euclid(span) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(0, -1, 12), 12);
        assert_eq!(wrap(12, 1, 12), 0);
        assert_eq!(wrap(58, 1, 59), 59);
    }

    #[test]
    fn test_focus_cycles() {
        let mut field = SetupField::Hours;
        for _ in 0..4 {
            field = field.next();
        }
        assert_eq!(field, SetupField::Hours);
        assert_eq!(SetupField::Hours.prev(), SetupField::Start);
    }
}
