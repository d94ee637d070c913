//! gitview-keys - inspect and exercise gitview key bindings from the shell.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Build the binding manager from built-in defaults and the user keybinding file.
//! - Report results as text or JSON with structured exit codes.
//!
//! Does NOT handle:
//! - Binding resolution itself (see `crates/keys`).
//! - Keybinding file format and location rules (see `crates/config`).
//!
//! Invariants:
//! - Logs go to stderr so stdout stays machine-readable.

mod args;
mod commands;
mod dispatch;
mod error;
mod output;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
