//! Keybinding syntax validation.
//!
//! Responsibilities:
//! - Check key strings for empty input and unterminated `<...>` tokens.
//! - Refuse to rebind reserved keys.
//! - Check that action identifiers are in canonical `<gv-...>` form.
//!
//! Does NOT handle:
//! - Checking that views or actions actually exist (the keys crate knows those).
//! - Runtime key event matching.

use thiserror::Error;

use crate::constants::ACTION_PREFIX;
use crate::types::keybind::{KeybindingEntry, KeybindingsFile};

/// Errors that can occur when validating keybinding entries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeybindError {
    /// Key string is empty
    #[error("Key sequence must not be empty")]
    EmptyKeys,

    /// A `<` starts a key name that is never closed
    #[error("Unterminated key name in '{keys}'. Expected a closing '>' as in '<C-w>'")]
    UnterminatedToken {
        /// The offending key string
        keys: String,
    },

    /// Reserved keybinding
    #[error("Reserved keybinding: '{key}' cannot be overridden")]
    ReservedKey {
        /// The reserved key
        key: String,
    },

    /// Action is not a canonical identifier
    #[error("Invalid action '{action}'. Expected an identifier like '<gv-next-line>'")]
    InvalidAction {
        /// The action as written
        action: String,
    },

    /// Remap target is empty
    #[error("Remap target for '{keys}' must not be empty")]
    EmptyTarget {
        /// The key string being remapped
        keys: String,
    },
}

/// Keys that cannot be bound, remapped or unmapped.
pub const RESERVED_SEQUENCES: &[&str] = &["<C-c>"];

/// Validate the syntax of a single key string.
///
/// # Examples
///
/// ```
/// use gitview_config::keybind::{validate_keys, KeybindError};
///
/// assert!(validate_keys("<C-w>o").is_ok());
/// assert!(validate_keys("<").is_ok());
/// assert!(matches!(validate_keys("<C-w"), Err(KeybindError::UnterminatedToken { .. })));
/// ```
pub fn validate_keys(keys: &str) -> Result<(), KeybindError> {
    if keys.is_empty() {
        return Err(KeybindError::EmptyKeys);
    }

    if RESERVED_SEQUENCES.contains(&keys) {
        return Err(KeybindError::ReservedKey {
            key: keys.to_string(),
        });
    }

    if has_unterminated_token(keys) {
        return Err(KeybindError::UnterminatedToken {
            keys: keys.to_string(),
        });
    }

    Ok(())
}

/// True if some `<` is followed by a name that runs into whitespace, another
/// `<`, or the end of input instead of `>`.
///
/// A `<` followed directly by `>`, whitespace or nothing is a literal key.
fn has_unterminated_token(keys: &str) -> bool {
    keys.match_indices('<').any(|(start, _)| {
        let rest = &keys[start + 1..];
        let name_len = rest
            .find(|c: char| c == '>' || c == '<' || c.is_whitespace())
            .unwrap_or(rest.len());
        name_len > 0 && !rest[name_len..].starts_with('>')
    })
}

/// Validate a canonical action identifier.
pub fn validate_action(action: &str) -> Result<(), KeybindError> {
    let well_formed = action.starts_with(ACTION_PREFIX)
        && action.ends_with('>')
        && action.len() > ACTION_PREFIX.len() + 1
        && !action.contains(char::is_whitespace);

    if well_formed {
        Ok(())
    } else {
        Err(KeybindError::InvalidAction {
            action: action.to_string(),
        })
    }
}

/// Validate one entry from the keybinding file.
pub fn validate_entry(entry: &KeybindingEntry) -> Result<(), KeybindError> {
    validate_keys(entry.keys())?;

    match entry {
        KeybindingEntry::Bind { action, .. } => validate_action(action),
        KeybindingEntry::Map { keys, target, .. } => {
            if target.is_empty() {
                return Err(KeybindError::EmptyTarget { keys: keys.clone() });
            }
            if has_unterminated_token(target) {
                return Err(KeybindError::UnterminatedToken {
                    keys: target.clone(),
                });
            }
            Ok(())
        }
        KeybindingEntry::Unmap { .. } => Ok(()),
    }
}

/// Validate every entry, returning the index and error of each invalid one.
pub fn validate_file(file: &KeybindingsFile) -> Vec<(usize, KeybindError)> {
    file.bindings
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| validate_entry(entry).err().map(|e| (index, e)))
        .collect()
}
