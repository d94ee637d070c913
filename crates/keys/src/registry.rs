//! Help registry: which key sequences are bound to each action, per view.
//!
//! Responsibilities:
//! - Record `(action, view) -> [sequence]` in bind order, with the origin
//!   (default or user) captured at bind time.
//! - Forget entries when bindings are removed or replaced.
//!
//! Does NOT handle:
//! - Resolution (see `index` and `resolver`).
//! - Deduplication or formatting (see `help`).
//!
//! Invariants:
//! - Reserved `<gv-...>` sequences are never recorded.

use std::collections::HashMap;

use serde::Serialize;

use crate::binding::BindingOrigin;
use crate::catalog::ActionType;
use crate::sequence::KeySequence;
use crate::view::ViewId;

/// A key sequence credited to an action in help output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundKeySequence {
    keys: KeySequence,
    origin: BindingOrigin,
}

impl BoundKeySequence {
    pub fn new(keys: KeySequence, origin: BindingOrigin) -> Self {
        Self { keys, origin }
    }

    pub fn keys(&self) -> &KeySequence {
        &self.keys
    }

    pub fn origin(&self) -> BindingOrigin {
        self.origin
    }

    pub fn is_user_defined(&self) -> bool {
        self.origin.is_user_defined()
    }
}

#[derive(Debug, Clone, Default)]
pub struct HelpRegistry {
    entries: HashMap<ActionType, HashMap<ViewId, Vec<BoundKeySequence>>>,
}

impl HelpRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `keys` to the `(action, view)` bucket. Returns false if the
    /// sequence is reserved and was skipped.
    pub fn record(
        &mut self,
        action: ActionType,
        view: ViewId,
        keys: &KeySequence,
        origin: BindingOrigin,
    ) -> bool {
        if keys.is_reserved() {
            return false;
        }

        self.entries
            .entry(action)
            .or_default()
            .entry(view)
            .or_default()
            .push(BoundKeySequence::new(keys.clone(), origin));
        true
    }

    /// Removes every entry for `keys` from the `(action, view)` bucket.
    pub fn forget(&mut self, action: ActionType, view: ViewId, keys: &KeySequence) -> bool {
        let Some(bucket) = self
            .entries
            .get_mut(&action)
            .and_then(|views| views.get_mut(&view))
        else {
            return false;
        };

        let before = bucket.len();
        bucket.retain(|entry| entry.keys != *keys);
        bucket.len() != before
    }

    /// Sequences bound to `action` in exactly `view`, in bind order.
    pub fn key_sequences(&self, action: ActionType, view: ViewId) -> &[BoundKeySequence] {
        self.entries
            .get(&action)
            .and_then(|views| views.get(&view))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
