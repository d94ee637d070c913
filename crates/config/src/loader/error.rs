//! Error types for configuration loading.
//!
//! Invariants:
//! - Every file-related variant carries the path it was about.

use std::path::PathBuf;

use thiserror::Error;

use crate::keybind::KeybindError;

/// Errors that can occur while loading the keybinding file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to determine config directory: {0}")]
    ConfigDirUnavailable(String),

    #[error("Failed to read config file at {path}")]
    ConfigFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}")]
    ConfigFileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Config file at {path} has version {version}, newest supported is {supported}")]
    UnsupportedVersion {
        path: PathBuf,
        version: u32,
        supported: u32,
    },

    #[error("Invalid keybinding #{index} in {path}")]
    InvalidKeybinding {
        path: PathBuf,
        index: usize,
        #[source]
        source: KeybindError,
    },
}
