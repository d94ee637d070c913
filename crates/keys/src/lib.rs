//! Key binding engine for gitview.
//!
//! This crate turns keystrokes into actions. Bindings live in one prefix
//! index per view; lookups walk the focused view hierarchy and fall back to
//! the catch-all [`ViewId::All`] scope. A binding either names an action or
//! remaps the sequence onto another key sequence.

pub mod binding;
pub mod catalog;
pub mod error;
pub mod event;
pub mod help;
pub mod index;
pub mod manager;
pub mod overrides;
pub mod registry;
pub mod resolver;
pub mod sequence;
mod trie;
pub mod view;

pub use binding::{Binding, BindingOrigin};
pub use catalog::{
    ACTION_KEY_PREFIX, ActionCategory, ActionDescriptor, ActionType, action_for_key,
    is_prompt_action, is_valid_action,
};
pub use error::KeymapError;
pub use event::{KeyBuffer, key_token_from_event};
pub use help::{HelpRow, HelpSection, help_sections, render_help_text};
pub use index::BindingIndex;
pub use manager::KeyBindingManager;
pub use overrides::{OverrideReport, SkippedEntry, apply_overrides};
pub use registry::{BoundKeySequence, HelpRegistry};
pub use resolver::{DEFAULT_MAX_REMAP_DEPTH, Resolution};
pub use sequence::{KeySequence, KeyToken};
pub use view::ViewId;
