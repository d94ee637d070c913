//! Shared configuration constants.

/// Directory name used for platform config paths.
pub const APP_NAME: &str = "gitview";

/// File name of the keybinding configuration inside the config directory.
pub const KEYBINDINGS_FILE_NAME: &str = "keybindings.json";

/// Newest keybinding file format this build understands.
pub const CURRENT_VERSION: u32 = 1;

/// View name used when an entry omits `view`.
pub const DEFAULT_VIEW: &str = "all";

/// Prefix every canonical action identifier starts with.
pub const ACTION_PREFIX: &str = "<gv-";
