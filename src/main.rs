use std::path::PathBuf;

use clap::Parser;

use testtimer::cli::Cli;
use testtimer::config::{self, Settings};
use testtimer::logging;
use testtimer::state::AppState;
use testtimer::tui::{self, RunOptions};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();

    let log_dir = config::data_dir();
    logging::init(log_dir.as_deref(), cli.verbose);

    let config_path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .or_else(config::default_config_path);

    // Load remembered settings
    let stored = match config_path.as_deref().map(config::load_settings) {
        Some(Ok(Some(settings))) => settings,
        Some(Ok(None)) | None => Settings::default(),
        Some(Err(e)) => {
            eprintln!("Warning: {}", e);
            log::warn!("{}", e);
            Settings::default()
        }
    };

    let settings = cli.settings(stored).map_err(|e| e.to_string())?;
    log::info!(
        "Settings: {}h {}m, {} questions",
        settings.hours,
        settings.minutes,
        settings.questions
    );

    let opts = RunOptions {
        start_now: cli.now,
        save_to: if cli.no_save { None } else { config_path },
    };

    tui::run_tui(AppState::new(settings), opts)
}
