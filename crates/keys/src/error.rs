//! Error types for the key binding engine.
//!
//! Resolution itself never fails: unknown sequences resolve to the no-op
//! binding. These errors cover malformed bind requests, lookups by name, and
//! remap chains that never settle.

use thiserror::Error;

/// Errors returned by binding mutation and name lookups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeymapError {
    /// A binding was requested for (or remapped onto) an empty key sequence.
    #[error("Key sequence must not be empty")]
    EmptyKeySequence,

    /// Following remaps did not reach an action within the allowed hops.
    #[error("Remap chain starting at '{sequence}' did not settle within {depth} hops")]
    RemapDepthExceeded {
        /// The sequence the chain started from
        sequence: String,
        /// The hop limit that was hit
        depth: usize,
    },

    /// A view name did not match any known view.
    #[error("Unknown view: '{0}'")]
    UnknownView(String),

    /// An action identifier did not match any canonical action key.
    #[error("Unknown action: '{0}'")]
    UnknownAction(String),
}
