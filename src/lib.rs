pub mod cli;
pub mod config;
pub mod countdown;
pub mod logging;
pub mod state;
pub mod timer;
pub mod tui;
pub mod ui;
