//! Environment variable helpers for configuration.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.

/// Environment variable naming an explicit keybinding file.
pub const KEYBINDINGS_PATH_ENV: &str = "GITVIEW_KEYBINDINGS_PATH";

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_blank_values() {
        temp_env::with_vars(
            [
                ("GITVIEW_TEST_BLANK", Some("   ")),
                ("GITVIEW_TEST_PADDED", Some("  /etc/gitview/keys.json ")),
            ],
            || {
                assert_eq!(env_var_or_none("GITVIEW_TEST_BLANK"), None);
                assert_eq!(
                    env_var_or_none("GITVIEW_TEST_PADDED").as_deref(),
                    Some("/etc/gitview/keys.json")
                );
                assert_eq!(env_var_or_none("GITVIEW_TEST_UNSET_VARIABLE"), None);
            },
        );
    }
}
