//! Resolve command implementation.
//!
//! Responsibilities:
//! - Resolve one key sequence against a view hierarchy, optionally following remaps.
//! - Report the binding, or that the keys are a pending prefix or unbound.
//!
//! Invariants:
//! - Exits with `NoBinding` unless the keys resolve to a binding.

use anyhow::{Context, Result};
use gitview_keys::{
    Binding, KeyBindingManager, KeySequence, KeymapError, Resolution, ViewId, is_prompt_action,
};
use serde::Serialize;

use crate::commands::parse_view;
use crate::error::ExitCode;
use crate::output::{OutputFormat, print_json};

#[derive(Debug, Serialize)]
struct ResolveOutput<'a> {
    keys: String,
    hierarchy: Vec<&'static str>,
    binding: Option<&'a Binding>,
    pending: bool,
    prompt_action: bool,
}

pub fn run(
    manager: &KeyBindingManager,
    keys: &str,
    views: &[String],
    follow_depth: Option<usize>,
    format: OutputFormat,
) -> Result<ExitCode> {
    let input = KeySequence::parse(keys);
    if input.is_empty() {
        return Err(KeymapError::EmptyKeySequence.into());
    }

    let hierarchy = views
        .iter()
        .map(|name| parse_view(name))
        .collect::<Result<Vec<ViewId>>>()?;

    let resolution = match follow_depth {
        Some(depth) => manager
            .resolve_remaps(&hierarchy, &input, depth)
            .with_context(|| format!("Failed to follow remaps for '{input}'"))?,
        None => manager.resolve(&hierarchy, &input),
    };

    match format {
        OutputFormat::Json => print_json(&to_output(&input, &hierarchy, &resolution))?,
        OutputFormat::Text => println!("{}", format_text(&resolution)),
    }

    Ok(if resolution.is_match() {
        ExitCode::Success
    } else {
        ExitCode::NoBinding
    })
}

fn to_output<'a>(
    input: &KeySequence,
    hierarchy: &[ViewId],
    resolution: &'a Resolution,
) -> ResolveOutput<'a> {
    let names: Vec<&'static str> = hierarchy
        .iter()
        .chain(std::iter::once(&ViewId::All))
        .map(|view| view.name())
        .collect();

    ResolveOutput {
        keys: input.to_string(),
        hierarchy: names,
        binding: (!resolution.binding.is_none()).then_some(&resolution.binding),
        pending: resolution.pending,
        prompt_action: resolution
            .binding
            .action()
            .is_some_and(is_prompt_action),
    }
}

fn format_text(resolution: &Resolution) -> String {
    match &resolution.binding {
        Binding::Remap(target) => format!("remap: {target}"),
        Binding::Action(action) if !action.is_none() => {
            if is_prompt_action(*action) {
                format!("action: {action} (prompt)")
            } else {
                format!("action: {action}")
            }
        }
        Binding::Action(_) if resolution.pending => "pending".to_string(),
        Binding::Action(_) => "no binding".to_string(),
    }
}
