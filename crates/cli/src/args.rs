//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not read the keybinding file (see `gitview_config::ConfigLoader`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitview-keys")]
#[command(about = "Inspect and test gitview key bindings", long_about = None)]
#[command(version)]
#[command(disable_help_subcommand = true)]
#[command(
    after_help = "Examples:\n  gitview-keys resolve gg --view commit\n  gitview-keys resolve '<C-n>' --follow -o json\n  gitview-keys bindings '<gv-next-line>'\n  gitview-keys help\n  gitview-keys check --config-path ./keybindings.json\n"
)]
pub struct Cli {
    /// Path to a keybinding file (overrides default location).
    ///
    /// Can also be set via GITVIEW_KEYBINDINGS_PATH environment variable.
    #[arg(long, global = true, env = "GITVIEW_KEYBINDINGS_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Ignore the user keybinding file and use built-in bindings only
    #[arg(long, global = true)]
    pub no_user_config: bool,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The requested keybinding file, ignoring blank values.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config_path
            .as_ref()
            .filter(|path| !path.as_os_str().to_string_lossy().trim().is_empty())
            .cloned()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a key sequence against a view hierarchy
    Resolve {
        /// Keys to resolve (e.g., 'gg', '<C-n>', '<gv-next-line>')
        keys: String,

        /// View to search, most specific first; repeat for a hierarchy
        #[arg(short, long = "view", value_name = "VIEW")]
        views: Vec<String>,

        /// Follow remaps until an action is reached
        #[arg(long)]
        follow: bool,

        /// Maximum remap hops when following [default: 16]
        #[arg(long, requires = "follow")]
        max_depth: Option<usize>,
    },

    /// Show the key sequences bound to an action
    Bindings {
        /// Canonical action identifier (e.g., '<gv-next-line>')
        action: String,

        /// Only show bindings recorded for this view
        #[arg(short, long)]
        view: Option<String>,
    },

    /// List every binding registered in a view
    List {
        /// View to list
        #[arg(short, long, default_value = "all")]
        view: String,
    },

    /// Print the key binding help table
    Help,

    /// Validate the user keybinding file
    Check,
}
