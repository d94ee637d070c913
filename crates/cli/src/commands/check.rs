//! Check command implementation.
//!
//! Responsibilities:
//! - Load the user keybinding file and report every entry that would be skipped.
//!
//! Does NOT handle:
//! - Modifying the file.
//!
//! Invariants:
//! - A missing default file is not a problem: built-in bindings apply.
//! - Any skipped entry exits with `ConfigError`.

use anyhow::{Context, Result};
use gitview_config::ConfigLoader;
use gitview_keys::{KeyBindingManager, OverrideReport, apply_overrides};
use serde::Serialize;

use crate::error::ExitCode;
use crate::output::{OutputFormat, print_json};

#[derive(Debug, Serialize)]
struct CheckOutput {
    path: String,
    found: bool,
    entries: usize,
    #[serde(flatten)]
    report: OverrideReport,
}

pub fn run(loader: ConfigLoader, format: OutputFormat) -> Result<ExitCode> {
    let path = loader
        .resolve_path()
        .context("Failed to locate keybinding configuration")?;
    let file = loader
        .load()
        .context("Failed to load keybinding configuration")?;

    let output = match file {
        None => CheckOutput {
            path: path.display().to_string(),
            found: false,
            entries: 0,
            report: OverrideReport::default(),
        },
        Some(file) => {
            let mut scratch = KeyBindingManager::with_defaults();
            CheckOutput {
                path: path.display().to_string(),
                found: true,
                entries: file.bindings.len(),
                report: apply_overrides(&mut scratch, &file),
            }
        }
    };

    match format {
        OutputFormat::Json => print_json(&output)?,
        OutputFormat::Text => print_text(&output),
    }

    Ok(if output.report.is_clean() {
        ExitCode::Success
    } else {
        ExitCode::ConfigError
    })
}

fn print_text(output: &CheckOutput) {
    if !output.found {
        println!(
            "No keybinding file at {}; using built-in bindings.",
            output.path
        );
        return;
    }

    println!(
        "{}: {} entries, {} applied",
        output.path, output.entries, output.report.applied
    );
    for skipped in &output.report.skipped {
        println!("  entry {}: {}", skipped.index, skipped.reason);
    }
}
