//! Path helpers for configuration file locations.
//!
//! Responsibilities:
//! - Determine the platform keybinding file path via the `directories` crate.
//!
//! Does NOT handle:
//! - File I/O operations.

use std::path::PathBuf;

use super::error::ConfigError;
use crate::constants::{APP_NAME, KEYBINDINGS_FILE_NAME};

/// Returns the default path to the keybinding file.
///
/// - Linux: `~/.config/gitview/keybindings.json`
/// - macOS: `~/Library/Application Support/gitview/keybindings.json`
/// - Windows: `%AppData%\gitview\config\keybindings.json`
pub fn default_keybindings_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME).ok_or_else(|| {
        ConfigError::ConfigDirUnavailable("no home directory for the current user".to_string())
    })?;

    Ok(proj_dirs.config_dir().join(KEYBINDINGS_FILE_NAME))
}
