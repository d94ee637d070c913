//! View identifiers used as binding scopes.
//!
//! Responsibilities:
//! - Enumerate the views that can own key bindings.
//! - Reserve [`ViewId::All`] as the catch-all scope consulted last.
//! - Convert between views and their snake_case config names.
//!
//! Invariants:
//! - Views are independent; a view never inherits its parent's bindings
//!   unless the caller lists the parent in the hierarchy it resolves with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KeymapError;

/// A UI view that can own key bindings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum ViewId {
    /// Catch-all scope appended to every lookup
    #[default]
    All,
    Main,
    History,
    Ref,
    Commit,
    Diff,
    GitStatus,
    GitSummary,
    Status,
    ContextMenu,
    CommandOutput,
    Help,
}

impl ViewId {
    /// Every view in declaration order.
    pub const ALL: &'static [ViewId] = &[
        ViewId::All,
        ViewId::Main,
        ViewId::History,
        ViewId::Ref,
        ViewId::Commit,
        ViewId::Diff,
        ViewId::GitStatus,
        ViewId::GitSummary,
        ViewId::Status,
        ViewId::ContextMenu,
        ViewId::CommandOutput,
        ViewId::Help,
    ];

    /// The config-file name of this view.
    pub fn name(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Main => "main",
            Self::History => "history",
            Self::Ref => "ref",
            Self::Commit => "commit",
            Self::Diff => "diff",
            Self::GitStatus => "git_status",
            Self::GitSummary => "git_summary",
            Self::Status => "status",
            Self::ContextMenu => "context_menu",
            Self::CommandOutput => "command_output",
            Self::Help => "help",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ViewId {
    type Err = KeymapError;

    /// Parses a view name case-insensitively; `-` is accepted in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|view| view.name() == normalized)
            .ok_or_else(|| KeymapError::UnknownView(s.to_string()))
    }
}
