//! Bindings command implementation.
//!
//! Lists the key sequences credited to one action, per view, in the order
//! they were bound. User-defined keys are marked with `*` in text output.

use anyhow::Result;
use gitview_keys::{
    BoundKeySequence, HelpRow, KeyBindingManager, KeymapError, ViewId, action_for_key,
};
use serde::Serialize;

use crate::commands::parse_view;
use crate::error::ExitCode;
use crate::output::{OutputFormat, print_json};

#[derive(Debug, Serialize)]
struct ViewBindings {
    view: &'static str,
    keys: Vec<BoundKeySequence>,
}

pub fn run(
    manager: &KeyBindingManager,
    action: &str,
    view: Option<&str>,
    format: OutputFormat,
) -> Result<ExitCode> {
    let action_type =
        action_for_key(action).ok_or_else(|| KeymapError::UnknownAction(action.to_string()))?;

    let views: Vec<ViewId> = match view {
        Some(name) => vec![parse_view(name)?],
        None => ViewId::ALL.to_vec(),
    };

    let listed: Vec<ViewBindings> = views
        .into_iter()
        .map(|view| ViewBindings {
            view: view.name(),
            keys: manager.key_sequences(action_type, view).to_vec(),
        })
        .filter(|entry| !entry.keys.is_empty())
        .collect();

    match format {
        OutputFormat::Json => print_json(&listed)?,
        OutputFormat::Text => {
            let description = action_type.descriptor().description;
            println!("{action}: {description}");
            if listed.is_empty() {
                println!("  No key bindings.");
            }
            for entry in listed {
                let row = HelpRow {
                    keys: entry.keys,
                    action_key: "",
                    description,
                };
                println!("  {:<16} {}", entry.view, row.keys_text());
            }
        }
    }

    Ok(ExitCode::Success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_action_is_an_error() {
        let manager = KeyBindingManager::with_defaults();
        let err = run(&manager, "<gv-teleport>", None, OutputFormat::Text).unwrap_err();
        assert_eq!(err.to_string(), "Unknown action: '<gv-teleport>'");
    }

    #[test]
    fn test_known_action_succeeds() {
        let manager = KeyBindingManager::with_defaults();
        let code = run(&manager, "<gv-next-line>", Some("all"), OutputFormat::Json).unwrap();
        assert_eq!(code, ExitCode::Success);
    }
}
