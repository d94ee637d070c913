//! Keybinding file types.
//!
//! Invariants:
//! - Entries are applied in file order, so later entries win.
//! - `view` defaults to the catch-all view when omitted.

use serde::{Deserialize, Serialize};

use crate::constants::{CURRENT_VERSION, DEFAULT_VIEW};

fn default_view() -> String {
    DEFAULT_VIEW.to_string()
}

fn default_version() -> u32 {
    CURRENT_VERSION
}

/// One user keybinding directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KeybindingEntry {
    /// Bind `keys` to a canonical action identifier such as `<gv-next-line>`.
    Bind {
        #[serde(default = "default_view")]
        view: String,
        keys: String,
        action: String,
    },
    /// Make `keys` behave like `target`.
    Map {
        #[serde(default = "default_view")]
        view: String,
        keys: String,
        target: String,
    },
    /// Remove whatever `keys` is bound to in `view`.
    Unmap {
        #[serde(default = "default_view")]
        view: String,
        keys: String,
    },
}

impl KeybindingEntry {
    pub fn view(&self) -> &str {
        match self {
            Self::Bind { view, .. } | Self::Map { view, .. } | Self::Unmap { view, .. } => view,
        }
    }

    pub fn keys(&self) -> &str {
        match self {
            Self::Bind { keys, .. } | Self::Map { keys, .. } | Self::Unmap { keys, .. } => keys,
        }
    }

    /// The `kind` tag as written in the file.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bind { .. } => "bind",
            Self::Map { .. } => "map",
            Self::Unmap { .. } => "unmap",
        }
    }
}

/// The keybinding configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeybindingsFile {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub bindings: Vec<KeybindingEntry>,
}

impl Default for KeybindingsFile {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION,
            bindings: Vec::new(),
        }
    }
}

impl KeybindingsFile {
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
