//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish outcomes.
//! - Map configuration failures to their own exit code.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 3 is an outcome, not a failure: the command ran but nothing was bound.

use gitview_config::ConfigError;

/// Structured exit codes for gitview-keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - bad arguments, unknown names, remap cycles.
    GeneralError = 1,

    /// Configuration error - the keybinding file is unreadable or invalid.
    ///
    /// Scripts should fix the file rather than retry.
    ConfigError = 2,

    /// No binding - the keys resolved to nothing, or only to a pending prefix.
    NoBinding = 3,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError unless a `ConfigError` is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        if self
            .chain()
            .any(|cause| cause.downcast_ref::<ConfigError>().is_some())
        {
            return ExitCode::ConfigError;
        }

        ExitCode::GeneralError
    }
}
