//! Platform directories for config and logs.

use crate::error::PrismError;

use common::ErrorLocation;

use std::panic::Location;
use std::path::PathBuf;

const APP_DIR_NAME: &str = "prism";
const LOG_DIR_NAME: &str = "logs";

/// `{config_dir}/prism`, e.g. `~/.config/prism` on Linux.
#[track_caller]
pub fn config_dir() -> Result<PathBuf, PrismError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or_else(|| PrismError::Prism {
            message: String::from("No platform config directory"),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// `{data_local_dir}/prism/logs`, e.g. `~/.local/share/prism/logs` on Linux.
#[track_caller]
pub fn log_dir() -> Result<PathBuf, PrismError> {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_DIR_NAME))
        .ok_or_else(|| PrismError::Prism {
            message: String::from("No platform data directory"),
            location: ErrorLocation::from(Location::caller()),
        })
}
