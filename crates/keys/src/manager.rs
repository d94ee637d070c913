//! Binding manager: the single owner of the binding index and help registry.
//!
//! Responsibilities:
//! - Load the built-in bindings from the action catalog.
//! - Apply binds, remaps and removals to the index and help registry together.
//! - Resolve input against a view hierarchy.
//!
//! Does NOT handle:
//! - Reading configuration files (see `overrides` and `gitview-config`).
//! - Formatting help output (see `help`).
//!
//! Invariants:
//! - Every help entry corresponds to a live binding in the same view.
//! - Built-in and user bindings go through the same mutation methods.

use crate::binding::{Binding, BindingOrigin};
use crate::catalog::{ActionType, action_for_key};
use crate::error::KeymapError;
use crate::index::BindingIndex;
use crate::registry::{BoundKeySequence, HelpRegistry};
use crate::resolver::{self, Resolution};
use crate::sequence::KeySequence;
use crate::view::ViewId;

#[derive(Debug, Clone, Default)]
pub struct KeyBindingManager {
    index: BindingIndex,
    help: HelpRegistry,
}

impl KeyBindingManager {
    /// An empty manager with no bindings at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// A manager populated with every built-in binding.
    pub fn with_defaults() -> Self {
        let mut manager = Self::new();
        manager.load_defaults();
        manager
    }

    /// Binds each canonical action identifier in the catch-all view, then
    /// every default binding from the catalog.
    pub fn load_defaults(&mut self) {
        for &action in ActionType::ALL {
            if let Some(key) = action.action_key() {
                self.bind_default(ViewId::All, &KeySequence::parse(key), action);
            }
        }

        for &action in ActionType::ALL {
            for (view, sequences) in action.descriptor().key_bindings {
                for raw in *sequences {
                    self.bind_default(*view, &KeySequence::parse(raw), action);
                }
            }
        }

        tracing::debug!(
            bindings = self.index.len(ViewId::All),
            "loaded default key bindings"
        );
    }

    fn bind_default(&mut self, view: ViewId, keys: &KeySequence, action: ActionType) {
        // Catalog sequences are never empty; the catalog tests enforce it.
        if let Err(error) = self.set_action_binding(view, keys, action, BindingOrigin::Default) {
            tracing::warn!(%view, %keys, %error, "skipping invalid default binding");
        }
    }

    /// Resolves `input` against `hierarchy` (most specific view first) and
    /// then the catch-all view.
    pub fn resolve(&self, hierarchy: &[ViewId], input: &KeySequence) -> Resolution {
        let resolution = resolver::resolve(&self.index, hierarchy, input);
        tracing::trace!(%input, ?hierarchy, ?resolution, "resolved key sequence");
        resolution
    }

    /// Like [`Self::resolve`], but follows remaps until an action, a pending
    /// prefix or nothing is reached.
    ///
    /// # Errors
    ///
    /// Returns [`KeymapError::RemapDepthExceeded`] when more than `max_depth`
    /// remaps are chained.
    pub fn resolve_remaps(
        &self,
        hierarchy: &[ViewId],
        input: &KeySequence,
        max_depth: usize,
    ) -> Result<Resolution, KeymapError> {
        resolver::resolve_remaps(&self.index, hierarchy, input, max_depth)
    }

    /// Binds `keys` in `view` to `action`, replacing any previous binding.
    ///
    /// # Errors
    ///
    /// Returns [`KeymapError::EmptyKeySequence`] if `keys` is empty.
    pub fn set_action_binding(
        &mut self,
        view: ViewId,
        keys: &KeySequence,
        action: ActionType,
        origin: BindingOrigin,
    ) -> Result<(), KeymapError> {
        if keys.is_empty() {
            return Err(KeymapError::EmptyKeySequence);
        }

        if let Some(previous) = self.index.set(view, keys, Binding::Action(action)) {
            self.forget_help(view, keys, &previous);
        }
        self.help.record(action, view, keys, origin);

        tracing::debug!(%view, %keys, %action, ?origin, "bound key sequence to action");
        Ok(())
    }

    /// Binds `keys` in `view` to stand in for `target`.
    ///
    /// When `target` is a canonical `<gv-...>` identifier the sequence is
    /// credited to that action in help output.
    ///
    /// # Errors
    ///
    /// Returns [`KeymapError::EmptyKeySequence`] if either sequence is empty.
    pub fn set_remap_binding(
        &mut self,
        view: ViewId,
        keys: &KeySequence,
        target: &KeySequence,
        origin: BindingOrigin,
    ) -> Result<(), KeymapError> {
        if keys.is_empty() || target.is_empty() {
            return Err(KeymapError::EmptyKeySequence);
        }

        self.remove_binding(view, keys);
        self.index.set(view, keys, Binding::Remap(target.clone()));

        if let Some(action) = action_for_key(&target.to_string()) {
            self.help.record(action, view, keys, origin);
        }

        tracing::debug!(%view, %keys, %target, ?origin, "remapped key sequence");
        Ok(())
    }

    /// Removes the binding for `keys` in exactly `view`. Returns false if
    /// nothing was bound there.
    pub fn remove_binding(&mut self, view: ViewId, keys: &KeySequence) -> bool {
        let Some(previous) = self.index.lookup(view, keys).cloned() else {
            return false;
        };

        self.index.delete(view, keys);
        self.forget_help(view, keys, &previous);

        tracing::debug!(%view, %keys, "removed key binding");
        true
    }

    fn forget_help(&mut self, view: ViewId, keys: &KeySequence, binding: &Binding) {
        if let Some(action) = binding.help_action() {
            self.help.forget(action, view, keys);
        }
    }

    /// Key sequences bound to `action` in exactly `view`, in bind order.
    pub fn key_sequences(&self, action: ActionType, view: ViewId) -> &[BoundKeySequence] {
        self.help.key_sequences(action, view)
    }

    /// Every binding stored directly in `view`, ordered by key sequence.
    pub fn bindings(&self, view: ViewId) -> Vec<(KeySequence, &Binding)> {
        self.index.entries(view)
    }

    pub fn index(&self) -> &BindingIndex {
        &self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(raw: &str) -> KeySequence {
        KeySequence::parse(raw)
    }

    fn rendered(entries: &[BoundKeySequence]) -> Vec<String> {
        entries.iter().map(|e| e.keys().to_string()).collect()
    }

    #[test]
    fn test_defaults_resolve_in_catch_all() {
        let manager = KeyBindingManager::with_defaults();
        let resolution = manager.resolve(&[ViewId::Diff], &keys("j"));
        assert_eq!(resolution, Resolution::matched(Binding::Action(ActionType::NextLine)));

        let resolution = manager.resolve(&[], &keys("<gv-next-line>"));
        assert_eq!(resolution, Resolution::matched(Binding::Action(ActionType::NextLine)));
    }

    #[test]
    fn test_defaults_respect_view_scoping() {
        let manager = KeyBindingManager::with_defaults();
        assert_eq!(
            manager.resolve(&[ViewId::Ref], &keys("c")).binding,
            Binding::Action(ActionType::CheckoutRef)
        );
        assert_eq!(
            manager.resolve(&[ViewId::Commit], &keys("c")).binding,
            Binding::Action(ActionType::CheckoutCommit)
        );
        assert_eq!(
            manager.resolve(&[ViewId::GitStatus], &keys("c")).binding,
            Binding::Action(ActionType::Commit)
        );
        assert!(manager.resolve(&[ViewId::Diff], &keys("c")).binding.is_none());
    }

    #[test]
    fn test_defaults_report_pending_for_chord_prefixes() {
        let manager = KeyBindingManager::with_defaults();
        assert_eq!(manager.resolve(&[ViewId::Diff], &keys("g")), Resolution::unmatched(true));
        assert_eq!(manager.resolve(&[ViewId::Diff], &keys("<C-w>")), Resolution::unmatched(true));
        assert_eq!(manager.resolve(&[ViewId::Diff], &keys("z")), Resolution::unmatched(true));
    }

    #[test]
    fn test_help_excludes_canonical_identifiers() {
        let manager = KeyBindingManager::with_defaults();
        assert_eq!(
            rendered(manager.key_sequences(ActionType::NextLine, ViewId::All)),
            vec!["<Down>", "j"]
        );
        assert!(manager.key_sequences(ActionType::Exit, ViewId::All).is_empty());
    }

    #[test]
    fn test_empty_sequences_are_rejected() {
        let mut manager = KeyBindingManager::new();
        assert_eq!(
            manager.set_action_binding(ViewId::All, &keys(""), ActionType::Exit, BindingOrigin::User),
            Err(KeymapError::EmptyKeySequence)
        );
        assert_eq!(
            manager.set_remap_binding(ViewId::All, &keys("x"), &keys(""), BindingOrigin::User),
            Err(KeymapError::EmptyKeySequence)
        );
        assert!(manager.index().is_empty());
    }

    #[test]
    fn test_overwrite_moves_help_entry() {
        let mut manager = KeyBindingManager::new();
        manager
            .set_action_binding(ViewId::Main, &keys("x"), ActionType::NextTab, BindingOrigin::Default)
            .unwrap();
        manager
            .set_action_binding(ViewId::Main, &keys("x"), ActionType::PrevTab, BindingOrigin::User)
            .unwrap();

        assert!(manager.key_sequences(ActionType::NextTab, ViewId::Main).is_empty());
        let entries = manager.key_sequences(ActionType::PrevTab, ViewId::Main);
        assert_eq!(rendered(entries), vec!["x"]);
        assert!(entries[0].is_user_defined());
    }

    #[test]
    fn test_remap_to_canonical_identifier_is_credited() {
        let mut manager = KeyBindingManager::with_defaults();
        manager
            .set_remap_binding(ViewId::All, &keys("e"), &keys("<gv-next-line>"), BindingOrigin::User)
            .unwrap();

        let entries = manager.key_sequences(ActionType::NextLine, ViewId::All);
        assert_eq!(rendered(entries), vec!["<Down>", "j", "e"]);
        assert!(entries[2].is_user_defined());
        assert_eq!(
            manager.resolve(&[], &keys("e")).binding,
            Binding::Remap(keys("<gv-next-line>"))
        );
    }

    #[test]
    fn test_remap_over_action_prunes_old_help() {
        let mut manager = KeyBindingManager::with_defaults();
        manager
            .set_remap_binding(ViewId::All, &keys("j"), &keys("k"), BindingOrigin::User)
            .unwrap();

        assert_eq!(
            rendered(manager.key_sequences(ActionType::NextLine, ViewId::All)),
            vec!["<Down>"]
        );
        assert_eq!(manager.resolve(&[], &keys("j")).binding, Binding::Remap(keys("k")));
    }

    #[test]
    fn test_remove_binding_is_scoped_to_one_view() {
        let mut manager = KeyBindingManager::with_defaults();
        assert!(!manager.remove_binding(ViewId::Diff, &keys("j")));
        assert!(manager.remove_binding(ViewId::All, &keys("j")));
        assert!(!manager.remove_binding(ViewId::All, &keys("j")));

        assert!(manager.resolve(&[], &keys("j")).binding.is_none());
        assert_eq!(
            rendered(manager.key_sequences(ActionType::NextLine, ViewId::All)),
            vec!["<Down>"]
        );
    }

    #[test]
    fn test_remove_remap_prunes_credited_help() {
        let mut manager = KeyBindingManager::new();
        manager
            .set_remap_binding(ViewId::Ref, &keys("x"), &keys("<gv-checkout-ref>"), BindingOrigin::User)
            .unwrap();
        assert_eq!(manager.key_sequences(ActionType::CheckoutRef, ViewId::Ref).len(), 1);

        assert!(manager.remove_binding(ViewId::Ref, &keys("x")));
        assert!(manager.key_sequences(ActionType::CheckoutRef, ViewId::Ref).is_empty());
    }

    #[test]
    fn test_follow_remaps_through_manager() {
        let mut manager = KeyBindingManager::with_defaults();
        manager
            .set_remap_binding(ViewId::All, &keys("e"), &keys("<gv-next-line>"), BindingOrigin::User)
            .unwrap();
        let resolution = manager
            .resolve_remaps(&[ViewId::Diff], &keys("e"), crate::DEFAULT_MAX_REMAP_DEPTH)
            .unwrap();
        assert_eq!(resolution.binding, Binding::Action(ActionType::NextLine));
    }

    #[test]
    fn test_bindings_lists_view_contents_in_order() {
        let manager = KeyBindingManager::with_defaults();
        let bindings = manager.bindings(ViewId::Ref);
        let listed: Vec<String> = bindings.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(listed, vec!["b", "c", "<C-q>", "<C-r>"]);
    }
}
