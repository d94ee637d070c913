//! Hierarchy-aware resolution of key sequences.
//!
//! Responsibilities:
//! - Pick the binding for an input sequence given the focused view hierarchy.
//! - Report when the input is an incomplete prefix of a longer binding.
//! - Optionally follow remap chains with a hop limit.
//!
//! Invariants:
//! - The catch-all view is always consulted last.
//! - An exact match in a more specific view wins over any less specific view.
//! - An exact match anywhere wins over a pending prefix anywhere.
//! - The result is never absent: no match yields [`Binding::NONE`].

use serde::Serialize;

use crate::binding::Binding;
use crate::error::KeymapError;
use crate::index::BindingIndex;
use crate::sequence::KeySequence;
use crate::view::ViewId;

/// Hop limit used when following remaps.
pub const DEFAULT_MAX_REMAP_DEPTH: usize = 16;

/// Outcome of resolving one input sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub binding: Binding,
    /// More keystrokes could still complete a longer binding
    pub pending: bool,
}

impl Resolution {
    pub fn matched(binding: Binding) -> Self {
        Self {
            binding,
            pending: false,
        }
    }

    pub fn unmatched(pending: bool) -> Self {
        Self {
            binding: Binding::NONE,
            pending,
        }
    }

    /// True if an exact binding was found.
    pub fn is_match(&self) -> bool {
        !self.binding.is_none()
    }
}

/// Resolves `input` against `hierarchy` (most specific view first), then the
/// catch-all view.
pub fn resolve(index: &BindingIndex, hierarchy: &[ViewId], input: &KeySequence) -> Resolution {
    let mut pending = false;

    for view in hierarchy
        .iter()
        .copied()
        .chain(std::iter::once(ViewId::All))
    {
        if let Some(binding) = index.lookup(view, input) {
            return Resolution::matched(binding.clone());
        }
        if index.has_prefix_of(view, input) {
            pending = true;
        }
    }

    Resolution::unmatched(pending)
}

/// Resolves `input` and keeps re-resolving remap targets until the result is
/// an action, a pending prefix, or nothing.
///
/// # Errors
///
/// Returns [`KeymapError::RemapDepthExceeded`] if more than `max_depth`
/// remaps are followed, which happens for remap cycles.
pub fn resolve_remaps(
    index: &BindingIndex,
    hierarchy: &[ViewId],
    input: &KeySequence,
    max_depth: usize,
) -> Result<Resolution, KeymapError> {
    let mut resolution = resolve(index, hierarchy, input);
    let mut hops = 0;

    while let Binding::Remap(target) = &resolution.binding {
        if hops == max_depth {
            return Err(KeymapError::RemapDepthExceeded {
                sequence: input.to_string(),
                depth: max_depth,
            });
        }
        hops += 1;
        tracing::trace!(from = %input, to = %target, hops, "following remap");
        let next = resolve(index, hierarchy, target);
        resolution = next;
    }

    Ok(resolution)
}
