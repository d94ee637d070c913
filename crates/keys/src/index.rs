//! Per-view binding index.
//!
//! Responsibilities:
//! - Store one token trie per view, created lazily on first write.
//! - Answer exact lookups and "could this still grow into a binding" tests.
//!
//! Does NOT handle:
//! - Help bookkeeping (the manager pairs every mutation with the registry).
//! - Walking a view hierarchy (see `resolver`).
//!
//! Invariants:
//! - A view with no trie behaves exactly like a view with an empty trie.

use std::collections::HashMap;

use crate::binding::Binding;
use crate::sequence::KeySequence;
use crate::trie::BindingTrie;
use crate::view::ViewId;

#[derive(Debug, Clone, Default)]
pub struct BindingIndex {
    views: HashMap<ViewId, BindingTrie<Binding>>,
}

impl BindingIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the binding for `(view, keys)`, returning the
    /// binding it replaced.
    pub fn set(&mut self, view: ViewId, keys: &KeySequence, binding: Binding) -> Option<Binding> {
        self.views
            .entry(view)
            .or_insert_with(BindingTrie::new)
            .insert(keys.tokens(), binding)
    }

    /// Exact-match lookup.
    pub fn lookup(&self, view: ViewId, keys: &KeySequence) -> Option<&Binding> {
        self.views.get(&view)?.get(keys.tokens())
    }

    /// True if some binding in `view` starts with `keys`.
    pub fn has_prefix_of(&self, view: ViewId, keys: &KeySequence) -> bool {
        self.views
            .get(&view)
            .is_some_and(|trie| trie.has_subtree(keys.tokens()))
    }

    /// Removes the exact entry for `(view, keys)`.
    pub fn delete(&mut self, view: ViewId, keys: &KeySequence) -> bool {
        self.views
            .get_mut(&view)
            .and_then(|trie| trie.remove(keys.tokens()))
            .is_some()
    }

    /// Every binding in `view`, ordered by key sequence.
    pub fn entries(&self, view: ViewId) -> Vec<(KeySequence, &Binding)> {
        self.views
            .get(&view)
            .map(BindingTrie::entries)
            .unwrap_or_default()
    }

    /// Number of bindings stored for `view`.
    pub fn len(&self, view: ViewId) -> usize {
        self.views.get(&view).map_or(0, BindingTrie::len)
    }

    pub fn is_empty(&self) -> bool {
        self.views.values().all(BindingTrie::is_empty)
    }
}
