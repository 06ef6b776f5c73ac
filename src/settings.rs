//! Game settings and preferences
//!
//! Read from a JSON file named by `BLOCK_BREAKER_SETTINGS`. Gameplay constants
//! are fixed; only presentation and plumbing are configurable.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::error::Error;

/// Environment variable pointing at a settings file
pub const SETTINGS_ENV: &str = "BLOCK_BREAKER_SETTINGS";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("could not read settings file")]
    Io(#[from] std::io::Error),
    #[error("invalid settings JSON")]
    Parse(#[from] serde_json::Error),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Colored output; off renders glyphs only
    pub color: bool,
    /// Minimum frame duration in milliseconds
    pub frame_cap_ms: u64,
    /// Fixed seed for ball respawns (random when unset)
    pub seed: Option<u64>,
    /// Write logs here instead of stderr
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            frame_cap_ms: 10,
            seed: None,
            log_file: None,
        }
    }
}

impl Settings {
    pub fn frame_budget(&self) -> Duration {
        Duration::from_millis(self.frame_cap_ms)
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from the file named by `BLOCK_BREAKER_SETTINGS`, or defaults when unset
    pub fn load() -> Result<Self, Error> {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::load_path(PathBuf::from(path)),
            None => Ok(Self::default()),
        }
    }

    fn load_path(path: PathBuf) -> Result<Self, Error> {
        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(source) => Err(Error::Settings { path, source }),
        }
    }
}
