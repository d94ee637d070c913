//! Token trie backing each view's binding index.
//!
//! Invariants:
//! - Every non-root node either holds a value or has at least one child;
//!   `remove` prunes branches that become vacant.
//! - Children are ordered, so `entries` is deterministic.

use std::collections::BTreeMap;

use crate::sequence::{KeySequence, KeyToken};

#[derive(Debug, Clone)]
pub(crate) struct BindingTrie<V> {
    root: TrieNode<V>,
    len: usize,
}

#[derive(Debug, Clone)]
struct TrieNode<V> {
    value: Option<V>,
    children: BTreeMap<KeyToken, TrieNode<V>>,
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self {
            value: None,
            children: BTreeMap::new(),
        }
    }
}

impl<V> TrieNode<V> {
    fn is_vacant(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }
}

impl<V> Default for BindingTrie<V> {
    fn default() -> Self {
        Self {
            root: TrieNode::default(),
            len: 0,
        }
    }
}

impl<V> BindingTrie<V> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stores `value` under `sequence`, returning the value it replaced.
    pub(crate) fn insert(&mut self, sequence: &[KeyToken], value: V) -> Option<V> {
        let mut node = &mut self.root;
        for token in sequence {
            node = node.children.entry(token.clone()).or_default();
        }
        let previous = node.value.replace(value);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    pub(crate) fn get(&self, sequence: &[KeyToken]) -> Option<&V> {
        self.node(sequence)?.value.as_ref()
    }

    /// True if any stored sequence starts with `sequence` (including an exact match).
    pub(crate) fn has_subtree(&self, sequence: &[KeyToken]) -> bool {
        self.node(sequence).is_some_and(|node| !node.is_vacant())
    }

    pub(crate) fn remove(&mut self, sequence: &[KeyToken]) -> Option<V> {
        let removed = remove_at(&mut self.root, sequence);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// All stored sequences with their values, in token order.
    pub(crate) fn entries(&self) -> Vec<(KeySequence, &V)> {
        let mut out = Vec::with_capacity(self.len);
        let mut path = Vec::new();
        collect(&self.root, &mut path, &mut out);
        out
    }

    fn node(&self, sequence: &[KeyToken]) -> Option<&TrieNode<V>> {
        let mut node = &self.root;
        for token in sequence {
            node = node.children.get(token)?;
        }
        Some(node)
    }
}

fn remove_at<V>(node: &mut TrieNode<V>, sequence: &[KeyToken]) -> Option<V> {
    let Some((first, rest)) = sequence.split_first() else {
        return node.value.take();
    };

    let child = node.children.get_mut(first)?;
    let removed = remove_at(child, rest);
    if removed.is_some() && child.is_vacant() {
        node.children.remove(first);
    }
    removed
}

fn collect<'a, V>(
    node: &'a TrieNode<V>,
    path: &mut Vec<KeyToken>,
    out: &mut Vec<(KeySequence, &'a V)>,
) {
    if let Some(value) = node.value.as_ref() {
        out.push((KeySequence::from_tokens(path.clone()), value));
    }
    for (token, child) in &node.children {
        path.push(token.clone());
        collect(child, path, out);
        path.pop();
    }
}
