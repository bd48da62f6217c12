use std::fs::{self, File};
use std::path::{Path, PathBuf};

use simplelog::{Config, LevelFilter, WriteLogger};

const LOG_FILE: &str = "testtimer.log";

/// Sends log output to `<dir>/testtimer.log`. The terminal belongs to the
/// UI, so nothing is logged there. Returns the log path on success.
pub fn init(dir: Option<&Path>, verbose: bool) -> Option<PathBuf> {
    let dir = dir?;
    if let Err(e) = fs::create_dir_all(dir) {
        eprintln!("Warning: Cannot create log dir {}: {}", dir.display(), e);
        return None;
    }

    let path = dir.join(LOG_FILE);
    let file = match File::create(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Cannot create log file {}: {}", path.display(), e);
            return None;
        }
    };

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if let Err(e) = WriteLogger::init(level, Config::default(), file) {
        eprintln!("Warning: Could not initialize logger: {}", e);
        return None;
    }

    log::info!(
        "Logging for testtimer {} initialized",
        env!("CARGO_PKG_VERSION")
    );
    Some(path)
}
