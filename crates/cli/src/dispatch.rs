//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Build the binding manager from defaults and the user keybinding file.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//!
//! Invariants:
//! - `--no-user-config` leaves the manager with built-in bindings only.
//! - `check` reads the file itself and never builds a manager from it directly.

use anyhow::{Context, Result};
use gitview_config::ConfigLoader;
use gitview_keys::{DEFAULT_MAX_REMAP_DEPTH, KeyBindingManager, apply_overrides};

use crate::args::{Cli, Commands};
use crate::commands;
use crate::error::ExitCode;
use crate::output::OutputFormat;

/// Route the parsed CLI to its command handler.
pub(crate) fn run_command(cli: Cli) -> Result<ExitCode> {
    let format = OutputFormat::from_str(&cli.output)?;
    let loader = config_loader(&cli);
    let use_user_config = !cli.no_user_config;

    match cli.command {
        Commands::Check => commands::check::run(loader, format),
        Commands::Resolve {
            keys,
            views,
            follow,
            max_depth,
        } => {
            let manager = load_manager(loader, use_user_config)?;
            let follow_depth = follow.then(|| max_depth.unwrap_or(DEFAULT_MAX_REMAP_DEPTH));
            commands::resolve::run(&manager, &keys, &views, follow_depth, format)
        }
        Commands::Bindings { action, view } => {
            let manager = load_manager(loader, use_user_config)?;
            commands::bindings::run(&manager, &action, view.as_deref(), format)
        }
        Commands::List { view } => {
            let manager = load_manager(loader, use_user_config)?;
            commands::list::run(&manager, &view, format)
        }
        Commands::Help => {
            let manager = load_manager(loader, use_user_config)?;
            commands::help::run(&manager, format)
        }
    }
}

fn config_loader(cli: &Cli) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if let Some(path) = cli.config_path() {
        loader = loader.with_path(path);
    }
    loader
}

/// Built-in bindings plus the user keybinding file, unless disabled.
fn load_manager(loader: ConfigLoader, use_user_config: bool) -> Result<KeyBindingManager> {
    let mut manager = KeyBindingManager::with_defaults();

    if !use_user_config {
        tracing::debug!("user keybinding file disabled");
        return Ok(manager);
    }

    let file = loader
        .load()
        .context("Failed to load keybinding configuration")?;

    if let Some(file) = file {
        let report = apply_overrides(&mut manager, &file);
        if !report.is_clean() {
            eprintln!(
                "Warning: {} keybinding entr{} skipped (run 'gitview-keys check' for details)",
                report.skipped.len(),
                if report.skipped.len() == 1 { "y" } else { "ies" }
            );
        }
    }

    Ok(manager)
}
