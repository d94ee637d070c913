//! Keybinding file loader builder.
//!
//! Invariants / Assumptions:
//! - `with_path` beats `from_env`, which beats the platform default.
//! - Strict loading fails on the first invalid entry; lenient loading leaves
//!   per-entry validation to the caller.

use std::path::{Path, PathBuf};

use super::env::{KEYBINDINGS_PATH_ENV, env_var_or_none};
use super::error::ConfigError;
use super::path::default_keybindings_path;
use crate::constants::CURRENT_VERSION;
use crate::keybind::validate_file;
use crate::types::KeybindingsFile;

/// Loader that locates and reads the keybinding file.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    strict: bool,
}

impl ConfigLoader {
    /// Create a loader that reads from the platform default location.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read from `path` instead of the default location.
    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Use `GITVIEW_KEYBINDINGS_PATH` when no path has been set yet.
    pub fn from_env(mut self) -> Self {
        if self.config_path.is_none()
            && let Some(path) = env_var_or_none(KEYBINDINGS_PATH_ENV)
        {
            self.config_path = Some(PathBuf::from(path));
        }
        self
    }

    /// Reject the whole file if any entry fails syntax validation.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// The explicitly requested path, if any.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// The path `load` will read.
    pub fn resolve_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.config_path {
            Some(path) => Ok(path.clone()),
            None => default_keybindings_path(),
        }
    }

    /// Load the keybinding file.
    ///
    /// Returns `Ok(None)` when no path was requested and the default file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, declares an
    /// unsupported version, or (in strict mode) contains an invalid entry.
    pub fn load(&self) -> Result<Option<KeybindingsFile>, ConfigError> {
        let path = self.resolve_path()?;

        if self.config_path.is_none() && !path.exists() {
            tracing::debug!(path = %path.display(), "no keybinding file found, using defaults");
            return Ok(None);
        }

        let file = load_from_path(&path)?;

        if self.strict
            && let Some((index, source)) = validate_file(&file).into_iter().next()
        {
            return Err(ConfigError::InvalidKeybinding {
                path,
                index,
                source,
            });
        }

        tracing::debug!(
            path = %path.display(),
            entries = file.bindings.len(),
            "loaded keybinding file"
        );
        Ok(Some(file))
    }
}

/// Read and parse the keybinding file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON for the
/// keybinding format, or declares a version newer than this build supports.
pub fn load_from_path(path: &Path) -> Result<KeybindingsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let file: KeybindingsFile =
        serde_json::from_str(&content).map_err(|source| ConfigError::ConfigFileParse {
            path: path.to_path_buf(),
            source,
        })?;

    if file.version > CURRENT_VERSION {
        return Err(ConfigError::UnsupportedVersion {
            path: path.to_path_buf(),
            version: file.version,
            supported: CURRENT_VERSION,
        });
    }

    Ok(file)
}
