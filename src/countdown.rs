use chrono::Duration;
use thiserror::Error;

use crate::timer::TickSource;

/// Largest question count the session accepts.
pub const MAX_QUESTIONS: u32 = 9999;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("A test needs at least one question.")]
    NoQuestions,

    #[error("A test cannot have more than 9999 questions (got {0}).")]
    TooManyQuestions(u32),

    #[error("A test needs a duration longer than zero.")]
    NoTime,

    #[error("Minutes must be between 0 and 59 (got {0}).")]
    MinutesOutOfRange(u32),
}

/// Checks a test configuration without building a session.
pub fn validate(hours: u32, minutes: u32, total_questions: u32) -> Result<(), ConfigError> {
    if minutes > 59 {
        return Err(ConfigError::MinutesOutOfRange(minutes));
    }
    if hours == 0 && minutes == 0 {
        return Err(ConfigError::NoTime);
    }
    if total_questions == 0 {
        return Err(ConfigError::NoQuestions);
    }
    if total_questions > MAX_QUESTIONS {
        return Err(ConfigError::TooManyQuestions(total_questions));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Started,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionSign {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CountdownEvent {
    Updated {
        total_time: String,
        question_time: String,
        questions_remaining: String,
    },
    Stopped {
        total_time_remaining: Duration,
        completed: bool,
        questions_remaining: u32,
    },
    EnteredOvertime,
    ExitedOvertime,
}

/// One timed test run.
///
/// Every mutating call returns the notifications it produced, in order.
/// Ticks are ignored unless the session is started, so a tick that was
/// already queued when `stop` ran never changes the counters. Question
/// commands and `stop` work in any state; `Stopped` is sent at most once.
#[derive(Debug)]
pub struct CountdownSession<T: TickSource> {
    hours: u32,
    minutes: u32,
    total_questions: u32,
    questions_remaining: u32,
    questions_digits: usize,
    total_time_remaining: Duration,
    question_time_remaining: Duration,
    over_time: bool,
    state: CountdownState,
    sign: QuestionSign,
    notified: bool,
    ticks: T,
}

impl<T: TickSource> CountdownSession<T> {
    pub fn new(
        hours: u32,
        minutes: u32,
        total_questions: u32,
        ticks: T,
    ) -> Result<Self, ConfigError> {
        validate(hours, minutes, total_questions)?;

        let total_time_remaining =
            Duration::hours(i64::from(hours)) + Duration::minutes(i64::from(minutes));
        let question_time_remaining = time_for_question(total_time_remaining, total_questions);

        Ok(Self {
            hours,
            minutes,
            total_questions,
            questions_remaining: total_questions,
            questions_digits: total_questions.ilog10() as usize + 1,
            total_time_remaining,
            question_time_remaining,
            over_time: false,
            state: CountdownState::Stopped,
            sign: QuestionSign::Positive,
            notified: false,
            ticks,
        })
    }

    pub fn start(&mut self) {
        if self.state == CountdownState::Started {
            return;
        }
        self.ticks.start();
        self.state = CountdownState::Started;
        log::info!(
            "Countdown started: {}h {}m for {} questions",
            self.hours,
            self.minutes,
            self.total_questions
        );
    }

    pub fn stop(&mut self, notify: bool) -> Vec<CountdownEvent> {
        let mut events = Vec::new();
        self.halt(notify, &mut events);
        events
    }

    pub fn on_tick(&mut self) -> Vec<CountdownEvent> {
        let mut events = Vec::new();
        if self.state != CountdownState::Started {
            return events;
        }

        let second = Duration::seconds(1);
        self.total_time_remaining = self.total_time_remaining - second;
        self.question_time_remaining = self.question_time_remaining - second;
        self.track_sign(&mut events);

        if self.total_time_remaining <= Duration::zero() {
            self.halt(true, &mut events);
            return events;
        }

        events.push(self.snapshot());
        events
    }

    pub fn advance_question(&mut self) -> Vec<CountdownEvent> {
        let mut events = Vec::new();
        if self.questions_remaining == 0 {
            return events;
        }

        self.questions_remaining -= 1;
        self.repartition(&mut events);

        if self.questions_remaining == 0 {
            self.halt(true, &mut events);
        }
        events
    }

    pub fn retreat_question(&mut self) -> Vec<CountdownEvent> {
        let mut events = Vec::new();
        if self.questions_remaining >= self.total_questions {
            return events;
        }

        self.questions_remaining += 1;
        self.repartition(&mut events);
        events
    }

    /// The texts an `Updated` notification would carry right now.
    pub fn snapshot(&self) -> CountdownEvent {
        CountdownEvent::Updated {
            total_time: format_duration(self.total_time_remaining),
            question_time: format_duration(self.question_time_remaining),
            questions_remaining: self.questions_remaining_text(),
        }
    }

    pub fn questions_remaining_text(&self) -> String {
        format!(
            "{:0width$}",
            self.questions_remaining,
            width = self.questions_digits
        )
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn question_sign(&self) -> QuestionSign {
        self.sign
    }

    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    pub fn questions_remaining(&self) -> u32 {
        self.questions_remaining
    }

    /// 1-based number of the question being worked on.
    pub fn current_question_number(&self) -> u32 {
        (self.total_questions - self.questions_remaining + 1).min(self.total_questions)
    }

    pub fn total_time_remaining(&self) -> Duration {
        self.total_time_remaining
    }

    pub fn time_remaining_for_current_question(&self) -> Duration {
        self.question_time_remaining
    }

    pub fn is_over_time_for_current_question(&self) -> bool {
        self.over_time
    }

    pub fn ticks(&self) -> &T {
        &self.ticks
    }

    fn halt(&mut self, notify: bool, events: &mut Vec<CountdownEvent>) {
        let completed = self.total_time_remaining <= Duration::zero();

        if self.state == CountdownState::Started {
            self.ticks.stop();
            self.state = CountdownState::Stopped;
            log::info!(
                "Countdown stopped: {} left, {} questions remaining, completed={}",
                format_duration(self.total_time_remaining),
                self.questions_remaining,
                completed
            );
        }

        if notify && !self.notified {
            self.notified = true;
            events.push(CountdownEvent::Stopped {
                total_time_remaining: self.total_time_remaining,
                completed,
                questions_remaining: self.questions_remaining,
            });
        }
    }

    fn repartition(&mut self, events: &mut Vec<CountdownEvent>) {
        self.question_time_remaining =
            time_for_question(self.total_time_remaining, self.questions_remaining);
        log::debug!(
            "Question {} of {}: {} allotted",
            self.current_question_number(),
            self.total_questions,
            format_duration(self.question_time_remaining)
        );
        self.track_sign(events);
    }

    // Edge-triggered: one notification per crossing of zero.
    fn track_sign(&mut self, events: &mut Vec<CountdownEvent>) {
        self.over_time = self.question_time_remaining < Duration::zero();
        match (self.sign, self.over_time) {
            (QuestionSign::Positive, true) => {
                self.sign = QuestionSign::Negative;
                log::info!("Question {} is over time", self.current_question_number());
                events.push(CountdownEvent::EnteredOvertime);
            }
            (QuestionSign::Negative, false) => {
                self.sign = QuestionSign::Positive;
                events.push(CountdownEvent::ExitedOvertime);
            }
            _ => {}
        }
    }
}

/// Even share of `total` for each remaining question, never more than `total`.
pub fn time_for_question(total: Duration, questions_remaining: u32) -> Duration {
    let share = match i32::try_from(questions_remaining) {
        Ok(n) if n > 0 => total / n,
        _ => Duration::zero(),
    };
    share.min(total)
}

/// Renders `HH:MM:SS`, prefixed with `-` when negative.
///
/// Hours are zero-padded to two digits, the way the Android app showed them.
pub fn format_duration(d: Duration) -> String {
    let secs = d.num_seconds().abs();
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    if d < Duration::zero() {
        format!("-{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::seconds(30)), "00:00:30");
        assert_eq!(format_duration(Duration::seconds(3725)), "01:02:05");
        assert_eq!(format_duration(Duration::seconds(-61)), "-00:01:01");
        assert_eq!(format_duration(Duration::zero()), "00:00:00");
        assert_eq!(format_duration(Duration::milliseconds(-500)), "-00:00:00");
    }

    #[test]
    fn test_time_for_question_guards_zero() {
        assert_eq!(
            time_for_question(Duration::minutes(10), 0),
            Duration::zero()
        );
        assert_eq!(
            time_for_question(Duration::minutes(10), 4),
            Duration::seconds(150)
        );
    }

    #[test]
    fn test_time_for_question_never_exceeds_total() {
        assert_eq!(
            time_for_question(Duration::seconds(-10), 2),
            Duration::seconds(-10)
        );
    }

    #[test]
    fn test_validate() {
        assert_eq!(validate(0, 0, 5), Err(ConfigError::NoTime));
        assert_eq!(validate(1, 0, 0), Err(ConfigError::NoQuestions));
        assert_eq!(validate(0, 60, 5), Err(ConfigError::MinutesOutOfRange(60)));
        assert_eq!(
            validate(1, 0, MAX_QUESTIONS + 1),
            Err(ConfigError::TooManyQuestions(MAX_QUESTIONS + 1))
        );
        assert!(validate(0, 1, 1).is_ok());
    }
}
