use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;

use crate::config;
use crate::countdown::CountdownSession;
use crate::state::*;
use crate::timer::{ThreadTicker, TimerEvent};

type Session = CountdownSession<ThreadTicker>;

/// Options that outlive a single test run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub start_now: bool,
    pub save_to: Option<PathBuf>,
}

pub fn run_tui(mut state: AppState, opts: RunOptions) -> Result<(), String> {
    let (timer_tx, timer_rx) = mpsc::channel::<TimerEvent>();

    // Fail before touching the terminal if the settings cannot start a test.
    let mut session = if opts.start_now {
        Some(start_session(&mut state, &timer_tx, &opts).map_err(|e| e.to_string())?)
    } else {
        None
    };

    enable_raw_mode().map_err(|e| format!("Cannot enable raw mode: {}", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| format!("Cannot enter alternate screen: {}", e))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| format!("Cannot create terminal: {}", e))?;

    let result = main_loop(
        &mut terminal,
        &mut state,
        &mut session,
        &timer_tx,
        &timer_rx,
        &opts,
    );

    // Leaving the app is like leaving the timer screen: no stop dialog.
    if let Some(mut s) = session.take() {
        s.stop(false);
    }

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    session: &mut Option<Session>,
    timer_tx: &mpsc::Sender<TimerEvent>,
    timer_rx: &mpsc::Receiver<TimerEvent>,
    opts: &RunOptions,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|f| crate::ui::draw(f, state))
            .map_err(|e| format!("Draw error: {}", e))?;

        if state.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(100)).map_err(|e| format!("Poll error: {}", e))? {
            if let Event::Key(key) = event::read().map_err(|e| format!("Read error: {}", e))? {
                if key.kind == KeyEventKind::Press {
                    handle_key(key, state, session, timer_tx, opts);
                }
            }
        }

        // Ticks are applied here, on the thread that owns the UI.
        while let Ok(ev) = timer_rx.try_recv() {
            handle_timer(ev, state, session);
        }
    }

    Ok(())
}

fn start_session(
    state: &mut AppState,
    timer_tx: &mpsc::Sender<TimerEvent>,
    opts: &RunOptions,
) -> Result<Session, crate::countdown::ConfigError> {
    let settings = state.settings;
    let mut session = CountdownSession::new(
        settings.hours,
        settings.minutes,
        settings.questions,
        ThreadTicker::new(timer_tx.clone()),
    )?;

    if let Some(path) = &opts.save_to {
        if let Err(e) = config::save_settings(path, &settings) {
            log::warn!("{}", e);
        }
    }

    session.start();
    state.enter_timer(&session);
    Ok(session)
}

fn handle_key(
    key: KeyEvent,
    state: &mut AppState,
    session: &mut Option<Session>,
    timer_tx: &mpsc::Sender<TimerEvent>,
    opts: &RunOptions,
) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.should_quit = true;
        return;
    }

    if state.dialog.is_some() {
        handle_dialog_key(key, state, session);
        return;
    }

    match state.screen {
        Screen::Setup => handle_setup_key(key, state, session, timer_tx, opts),
        Screen::Running => handle_running_key(key, state, session),
    }
}

fn handle_setup_key(
    key: KeyEvent,
    state: &mut AppState,
    session: &mut Option<Session>,
    timer_tx: &mpsc::Sender<TimerEvent>,
    opts: &RunOptions,
) {
    match key.code {
        KeyCode::Tab => {
            state.focus = state.focus.next();
        }
        KeyCode::BackTab => {
            state.focus = state.focus.prev();
        }
        KeyCode::Up | KeyCode::Char('+') => state.adjust_focused(1),
        KeyCode::Down | KeyCode::Char('-') => state.adjust_focused(-1),
        KeyCode::PageUp => state.adjust_focused(10),
        KeyCode::PageDown => state.adjust_focused(-10),
        KeyCode::Backspace => state.backspace(),
        KeyCode::Char(c) if c.is_ascii_digit() => state.type_digit(c),
        KeyCode::Enter => {
            if !state.can_start() {
                return;
            }
            match start_session(state, timer_tx, opts) {
                Ok(s) => *session = Some(s),
                Err(e) => state.error = Some(e.to_string()),
            }
        }
        KeyCode::Esc | KeyCode::Char('q') => {
            state.should_quit = true;
        }
        _ => {}
    }
}

fn handle_running_key(key: KeyEvent, state: &mut AppState, session: &mut Option<Session>) {
    let Some(s) = session.as_mut() else {
        state.leave_timer();
        return;
    };

    match key.code {
        KeyCode::Right | KeyCode::Char('n') | KeyCode::Char(' ') | KeyCode::Enter => {
            if state.timer.next_enabled() {
                let events = s.advance_question();
                state.sync_session(s);
                state.apply_events(&events);
            }
        }
        KeyCode::Left | KeyCode::Char('p') | KeyCode::Backspace => {
            if state.timer.prev_enabled() {
                let events = s.retreat_question();
                state.sync_session(s);
                state.apply_events(&events);
            }
        }
        KeyCode::Esc | KeyCode::Char('q') => {
            s.stop(false);
            *session = None;
            state.leave_timer();
        }
        _ => {}
    }
}

fn handle_dialog_key(key: KeyEvent, state: &mut AppState, session: &mut Option<Session>) {
    match state.dialog {
        Some(Dialog::Finished { .. }) => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                *session = None;
                state.leave_timer();
            }
        }
        None => {}
    }
}

fn handle_timer(event: TimerEvent, state: &mut AppState, session: &mut Option<Session>) {
    match event {
        TimerEvent::Tick(run_id) => {
            // Late ticks from an earlier session are dropped.
            if let Some(s) = session.as_mut().filter(|s| s.ticks().is_current(run_id)) {
                let events = s.on_tick();
                state.apply_events(&events);
            }
        }
    }
}
