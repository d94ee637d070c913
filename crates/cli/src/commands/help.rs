//! Help command implementation.

use anyhow::Result;
use gitview_keys::{KeyBindingManager, help_sections, render_help_text};

use crate::error::ExitCode;
use crate::output::{OutputFormat, print_json};

pub fn run(manager: &KeyBindingManager, format: OutputFormat) -> Result<ExitCode> {
    let sections = help_sections(manager);
    match format {
        OutputFormat::Json => print_json(&sections)?,
        OutputFormat::Text => print!("{}", render_help_text(&sections)),
    }
    Ok(ExitCode::Success)
}
