//! Configuration type definitions for gitview.
//!
//! Responsibilities:
//! - Define the on-disk shape of the keybinding file.
//!
//! Does NOT handle:
//! - Syntax validation (see `keybind` module at crate root).
//! - Locating or reading the file (see `loader`).

pub mod keybind;

pub use keybind::{KeybindingEntry, KeybindingsFile};
