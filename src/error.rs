use std::path::PathBuf;

use thiserror::Error;

use crate::settings::SettingsError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("terminal is {width}x{height}, need at least {min_width}x{min_height}")]
    PlayfieldTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },
    #[error("failed to load settings from {}", .path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: SettingsError,
    },
}
