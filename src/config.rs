use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::countdown::{self, ConfigError};

/// Upper limit of the hours picker on the setup screen.
pub const MAX_HOURS: u32 = 12;

const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Corrupt {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Test settings remembered between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub hours: u32,
    pub minutes: u32,
    pub questions: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hours: 1,
            minutes: 0,
            questions: 10,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        countdown::validate(self.hours, self.minutes, self.questions)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Command-line values take precedence over the stored ones.
    pub fn with_overrides(
        mut self,
        hours: Option<u32>,
        minutes: Option<u32>,
        questions: Option<u32>,
    ) -> Self {
        if let Some(h) = hours {
            self.hours = h;
        }
        if let Some(m) = minutes {
            self.minutes = m;
        }
        if let Some(q) = questions {
            self.questions = q;
        }
        self
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "testtimer")
}

pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Where the log file goes.
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// `Ok(None)` when no settings have been saved yet.
pub fn load_settings(path: &Path) -> Result<Option<Settings>, ConfigFileError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let settings = serde_yaml::from_str(&content).map_err(|source| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Some(settings))
}

pub fn save_settings(path: &Path, settings: &Settings) -> Result<(), ConfigFileError> {
    let write_err = |source: std::io::Error| ConfigFileError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let yaml = serde_yaml::to_string(settings).map_err(|source| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    atomic_write(path, &yaml).map_err(write_err)
}

fn atomic_write(path: &Path, content: &str) -> std::io::Result<()> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)
}
