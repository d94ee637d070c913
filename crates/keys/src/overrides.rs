//! Applying user keybinding configuration to a binding manager.
//!
//! Responsibilities:
//! - Convert `gitview_config` entries into bind, remap and unbind calls.
//! - Record every user binding with [`BindingOrigin::User`].
//!
//! Does NOT handle:
//! - Reading the configuration file (see `gitview_config::ConfigLoader`).
//!
//! Invariants:
//! - An invalid entry is skipped with a warning; the remaining entries still apply.
//! - Entries apply in file order, so later entries override earlier ones.

use gitview_config::{KeybindingEntry, KeybindingsFile, validate_entry};
use serde::Serialize;

use crate::binding::BindingOrigin;
use crate::catalog::action_for_key;
use crate::error::KeymapError;
use crate::manager::KeyBindingManager;
use crate::sequence::KeySequence;
use crate::view::ViewId;

/// Why one configuration entry was not applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    pub index: usize,
    pub reason: String,
}

/// Summary of an [`apply_overrides`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OverrideReport {
    pub applied: usize,
    pub skipped: Vec<SkippedEntry>,
}

impl OverrideReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Applies every entry of `file` to `manager` as a user binding.
pub fn apply_overrides(manager: &mut KeyBindingManager, file: &KeybindingsFile) -> OverrideReport {
    let mut report = OverrideReport::default();

    for (index, entry) in file.bindings.iter().enumerate() {
        match apply_entry(manager, entry) {
            Ok(()) => report.applied += 1,
            Err(reason) => {
                tracing::warn!(
                    index,
                    kind = entry.kind(),
                    keys = entry.keys(),
                    %reason,
                    "skipping keybinding entry"
                );
                report.skipped.push(SkippedEntry { index, reason });
            }
        }
    }

    tracing::info!(
        applied = report.applied,
        skipped = report.skipped.len(),
        "applied keybinding overrides"
    );
    report
}

fn apply_entry(manager: &mut KeyBindingManager, entry: &KeybindingEntry) -> Result<(), String> {
    validate_entry(entry).map_err(|e| e.to_string())?;
    let view: ViewId = entry.view().parse().map_err(|e: KeymapError| e.to_string())?;
    let keys = KeySequence::parse(entry.keys());

    match entry {
        KeybindingEntry::Bind { action, .. } => {
            let action = action_for_key(action)
                .ok_or_else(|| KeymapError::UnknownAction(action.clone()).to_string())?;
            manager
                .set_action_binding(view, &keys, action, BindingOrigin::User)
                .map_err(|e| e.to_string())
        }
        KeybindingEntry::Map { target, .. } => manager
            .set_remap_binding(view, &keys, &KeySequence::parse(target), BindingOrigin::User)
            .map_err(|e| e.to_string()),
        KeybindingEntry::Unmap { .. } => {
            if !manager.remove_binding(view, &keys) {
                tracing::debug!(%view, %keys, "unmap of unbound key sequence");
            }
            Ok(())
        }
    }
}
