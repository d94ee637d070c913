//! Integration tests for locating and loading the keybinding file.
//!
//! These tests cover the path precedence chain (builder > environment >
//! platform default) and the error surface for unreadable, malformed and
//! future-versioned files.

use std::fs;
use std::path::PathBuf;

use gitview_config::{
    ConfigError, ConfigLoader, KEYBINDINGS_PATH_ENV, KeybindingEntry, load_from_path,
};
use serial_test::serial;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const SAMPLE: &str = r#"{
    "version": 1,
    "bindings": [
        {"kind": "bind", "view": "main", "keys": "<C-n>", "action": "<gv-next-tab>"},
        {"kind": "map", "keys": "e", "target": "<gv-next-line>"},
        {"kind": "unmap", "keys": "q"}
    ]
}"#;

#[test]
fn test_load_explicit_path() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "keys.json", SAMPLE);

    let file = ConfigLoader::new().with_path(path).load().unwrap().unwrap();
    assert_eq!(file.version, 1);
    assert_eq!(file.bindings.len(), 3);
    assert!(matches!(file.bindings[2], KeybindingEntry::Unmap { .. }));
}

#[test]
fn test_missing_explicit_path_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.json");

    let err = ConfigLoader::new().with_path(path.clone()).load().unwrap_err();
    match err {
        ConfigError::ConfigFileRead { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn test_malformed_json_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "broken.json", "{ \"bindings\": [ }");

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ConfigFileParse { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn test_future_version_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "future.json", r#"{"version": 99, "bindings": []}"#);

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::UnsupportedVersion {
            version: 99,
            supported: 1,
            ..
        }
    ));
}

#[test]
fn test_strict_loading_rejects_invalid_entries() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "invalid.json",
        r#"{"bindings": [
            {"kind": "bind", "keys": "j", "action": "<gv-next-line>"},
            {"kind": "bind", "keys": "<C-w", "action": "<gv-next-view>"}
        ]}"#,
    );

    let lenient = ConfigLoader::new().with_path(path.clone()).load().unwrap();
    assert_eq!(lenient.map(|f| f.bindings.len()), Some(2));

    let err = ConfigLoader::new()
        .with_path(path)
        .strict(true)
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidKeybinding { index: 1, .. }));
}

#[test]
#[serial]
fn test_env_path_is_used_when_no_builder_path() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "env.json", SAMPLE);

    temp_env::with_var(KEYBINDINGS_PATH_ENV, Some(path.to_str().unwrap()), || {
        let loader = ConfigLoader::new().from_env();
        assert_eq!(loader.config_path(), Some(path.as_path()));
        assert!(loader.load().unwrap().is_some());
    });
}

#[test]
#[serial]
fn test_builder_path_beats_env() {
    let dir = TempDir::new().unwrap();
    let explicit = write_file(&dir, "explicit.json", r#"{"bindings": []}"#);

    temp_env::with_var(KEYBINDINGS_PATH_ENV, Some("/nonexistent/env.json"), || {
        let loader = ConfigLoader::new().with_path(explicit.clone()).from_env();
        assert_eq!(loader.config_path(), Some(explicit.as_path()));
        assert!(loader.load().unwrap().unwrap().is_empty());
    });
}

#[test]
#[serial]
fn test_blank_env_falls_back_to_default_location() {
    temp_env::with_var(KEYBINDINGS_PATH_ENV, Some("  "), || {
        let loader = ConfigLoader::new().from_env();
        assert_eq!(loader.config_path(), None);
        assert!(loader.resolve_path().unwrap().ends_with("keybindings.json"));
    });
}

#[test]
#[serial]
fn test_missing_default_file_means_no_overrides() {
    let home = TempDir::new().unwrap();
    let config_home = home.path().join("config");

    temp_env::with_vars(
        [
            ("HOME", Some(home.path().to_str().unwrap())),
            ("XDG_CONFIG_HOME", Some(config_home.to_str().unwrap())),
        ],
        || {
            let loaded = ConfigLoader::new().load().unwrap();
            assert!(loaded.is_none());
        },
    );
}
