//! Shared test utilities for gitview-keys integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that never reads the host's keybinding file.
//! - Write keybinding files into temporary directories.
//!
//! Invariants / Assumptions:
//! - `GITVIEW_KEYBINDINGS_PATH` is always cleared from the inherited environment.
//! - `HOME` and `XDG_CONFIG_HOME` point into the caller's temp directory.

use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Returns a `gitview-keys` command whose default config directory lives under `home`.
pub fn gitview_cmd(home: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("gitview-keys");

    cmd.env_remove("GITVIEW_KEYBINDINGS_PATH")
        .env_remove("RUST_LOG")
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"));

    cmd
}

/// Writes `contents` as a keybinding file inside `dir` and returns its path.
#[allow(dead_code)]
pub fn write_keybindings(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("keybindings.json");
    std::fs::write(&path, contents).expect("write keybindings file");
    path
}
