//! List command implementation.

use anyhow::Result;
use gitview_keys::{Binding, KeyBindingManager, KeySequence};
use serde::Serialize;

use crate::commands::parse_view;
use crate::error::ExitCode;
use crate::output::{OutputFormat, print_json};

#[derive(Debug, Serialize)]
struct ListEntry<'a> {
    keys: KeySequence,
    binding: &'a Binding,
}

pub fn run(manager: &KeyBindingManager, view: &str, format: OutputFormat) -> Result<ExitCode> {
    let view = parse_view(view)?;
    let entries: Vec<ListEntry<'_>> = manager
        .bindings(view)
        .into_iter()
        .map(|(keys, binding)| ListEntry { keys, binding })
        .collect();

    match format {
        OutputFormat::Json => print_json(&entries)?,
        OutputFormat::Text => {
            if entries.is_empty() {
                println!("No bindings in view '{}'.", view.name());
            }
            for entry in &entries {
                println!("{:<16} {}", entry.keys.to_string(), describe(entry.binding));
            }
        }
    }

    Ok(ExitCode::Success)
}

fn describe(binding: &Binding) -> String {
    match binding {
        Binding::Action(action) => action.to_string(),
        Binding::Remap(target) => format!("-> {target}"),
    }
}
