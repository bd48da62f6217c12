mod common;

use chrono::Duration;

use common::ManualTicks;
use testtimer::config::Settings;
use testtimer::countdown::{CountdownEvent, CountdownSession};
use testtimer::state::{AppState, Dialog, Screen, SetupField};

fn settings(hours: u32, minutes: u32, questions: u32) -> Settings {
    Settings {
        hours,
        minutes,
        questions,
    }
}

#[test]
fn test_setup_requires_time_and_questions() {
    let mut state = AppState::new(settings(0, 0, 5));
    assert!(!state.can_start());

    state.focus = SetupField::Minutes;
    state.adjust_focused(1);
    assert!(state.can_start());

    state.focus = SetupField::Questions;
    state.backspace();
    assert_eq!(state.settings.questions, 0);
    assert!(!state.can_start());

    state.type_digit('1');
    state.type_digit('2');
    assert_eq!(state.questions_input, "12");
    assert_eq!(state.settings.questions, 12);
    assert!(state.can_start());
}

#[test]
fn test_digits_only_go_to_questions_field() {
    let mut state = AppState::new(settings(1, 0, 10));
    state.focus = SetupField::Hours;
    state.type_digit('7');
    assert_eq!(state.questions_input, "10");

    state.focus = SetupField::Questions;
    state.type_digit('x');
    state.type_digit('5');
    state.type_digit('5');
    state.type_digit('5');
    assert_eq!(state.questions_input, "1055");
    assert_eq!(state.settings.questions, 1055);
}

#[test]
fn test_pickers_wrap() {
    let mut state = AppState::new(settings(0, 59, 10));
    state.focus = SetupField::Hours;
    state.adjust_focused(-1);
    assert_eq!(state.settings.hours, 12);

    state.focus = SetupField::Minutes;
    state.adjust_focused(1);
    assert_eq!(state.settings.minutes, 0);
}

#[test]
fn test_enter_timer_shows_initial_split() {
    let mut state = AppState::new(settings(0, 1, 2));
    let mut session = CountdownSession::new(0, 1, 2, ManualTicks::default()).unwrap();
    session.start();
    state.enter_timer(&session);

    assert_eq!(state.screen, Screen::Running);
    assert_eq!(state.timer.total_time, "00:01:00");
    assert_eq!(state.timer.question_time, "00:00:30");
    assert_eq!(state.timer.questions_text, "2");
    assert_eq!(state.timer.question_number, 1);
    assert!(!state.timer.prev_enabled());
    assert!(state.timer.next_enabled());
}

#[test]
fn test_overtime_events_toggle_highlight() {
    let mut state = AppState::new(settings(0, 1, 4));
    let mut session = CountdownSession::new(0, 1, 4, ManualTicks::default()).unwrap();
    session.start();
    state.enter_timer(&session);

    for _ in 0..16 {
        let events = session.on_tick();
        state.apply_events(&events);
    }
    assert!(state.timer.over_time);
    assert_eq!(state.timer.question_time, "-00:00:01");

    let events = session.advance_question();
    state.sync_session(&session);
    state.apply_events(&events);
    assert!(!state.timer.over_time);
    assert!(state.timer.prev_enabled());
    assert_eq!(state.timer.question_number, 2);
}

#[test]
fn test_stop_opens_dialog_once() {
    let mut state = AppState::new(settings(0, 1, 1));
    let mut session = CountdownSession::new(0, 1, 1, ManualTicks::default()).unwrap();
    session.start();
    state.enter_timer(&session);

    let events = session.advance_question();
    state.apply_events(&events);
    assert_eq!(
        state.dialog,
        Some(Dialog::Finished {
            completed: false,
            time_left: "00:01:00".to_string(),
            questions_remaining: 0,
        })
    );

    state.apply_event(&CountdownEvent::Stopped {
        total_time_remaining: Duration::zero(),
        completed: true,
        questions_remaining: 0,
    });
    assert!(matches!(
        state.dialog,
        Some(Dialog::Finished {
            completed: false,
            ..
        })
    ));

    state.leave_timer();
    assert_eq!(state.screen, Screen::Setup);
    assert!(state.dialog.is_none());
}
