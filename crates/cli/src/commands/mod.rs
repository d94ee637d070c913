//! CLI command implementations.

pub mod bindings;
pub mod check;
pub mod help;
pub mod list;
pub mod resolve;

use anyhow::Result;
use gitview_keys::ViewId;

/// Parse a user-supplied view name.
pub(crate) fn parse_view(name: &str) -> Result<ViewId> {
    Ok(name.parse::<ViewId>()?)
}
