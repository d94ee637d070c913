//! Keybinding file loader.
//!
//! Responsibilities:
//! - Decide which keybinding file to read (explicit path, environment, platform default).
//! - Read and parse the file, checking its format version.
//!
//! Does NOT handle:
//! - Applying entries to a binding manager (see `gitview-keys`).
//! - Writing configuration back to disk.
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - A missing file at the platform default location means "no overrides".
//! - A missing file at an explicitly requested location is an error.

mod builder;
mod env;
mod error;
mod path;

pub use builder::{ConfigLoader, load_from_path};
pub use env::KEYBINDINGS_PATH_ENV;
pub use error::ConfigError;
pub use path::default_keybindings_path;
