use clap::Parser;

use crate::config::Settings;
use crate::countdown::ConfigError;

#[derive(Parser, Debug)]
#[command(
    name = "testtimer",
    version,
    about = "Countdown timer that splits a test's time evenly across its questions"
)]
pub struct Cli {
    /// Test length, hours part (0-12)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=12))]
    pub hours: Option<u32>,

    /// Test length, minutes part (0-59)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=59))]
    pub minutes: Option<u32>,

    /// Number of questions in the test
    #[arg(long)]
    pub questions: Option<u32>,

    /// Skip the setup screen and start the countdown right away
    #[arg(long)]
    pub now: bool,

    /// Settings file [default: <config dir>/testtimer/config.yaml]
    #[arg(long, value_name = "path")]
    pub config: Option<String>,

    /// Do not remember the settings used for this run
    #[arg(long)]
    pub no_save: bool,

    /// Write debug output to the log file
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Merges command-line values over the stored settings. With `--now`
    /// there is no setup screen to fix them on, so they must already be valid.
    pub fn settings(&self, stored: Settings) -> Result<Settings, ConfigError> {
        let settings = stored.with_overrides(self.hours, self.minutes, self.questions);
        if self.now {
            settings.validate()?;
        }
        Ok(settings)
    }
}
