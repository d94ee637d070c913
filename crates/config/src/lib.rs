//! User configuration for gitview key bindings.
//!
//! This crate owns the keybinding file format, its syntax validation, and
//! where the file lives on disk. It deals in plain strings; turning entries
//! into live bindings is the job of `gitview-keys`.

pub mod constants;
pub mod keybind;
mod loader;
pub mod types;

pub use keybind::{KeybindError, validate_entry, validate_file};
pub use loader::{
    ConfigError, ConfigLoader, KEYBINDINGS_PATH_ENV, default_keybindings_path, load_from_path,
};
pub use types::{KeybindingEntry, KeybindingsFile};
