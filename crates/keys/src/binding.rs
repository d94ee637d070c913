//! Binding values stored in the index.

use serde::Serialize;

use crate::catalog::{ActionType, action_for_key};
use crate::sequence::KeySequence;

/// What a key sequence is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Binding {
    /// Resolves directly to an action
    Action(ActionType),
    /// Resolves to another key sequence that must be fed back through resolution
    Remap(KeySequence),
}

impl Binding {
    /// The sentinel returned when nothing is bound.
    pub const NONE: Binding = Binding::Action(ActionType::None);

    pub fn is_none(&self) -> bool {
        matches!(self, Self::Action(ActionType::None))
    }

    /// The bound action, unless this is a remap or the no-op sentinel.
    pub fn action(&self) -> Option<ActionType> {
        match self {
            Self::Action(action) if !action.is_none() => Some(*action),
            _ => None,
        }
    }

    pub fn remap_target(&self) -> Option<&KeySequence> {
        match self {
            Self::Remap(target) => Some(target),
            Self::Action(_) => None,
        }
    }

    /// The action this binding is credited to in help output.
    ///
    /// Remaps count toward an action only when their target is a canonical
    /// `<gv-...>` identifier.
    pub fn help_action(&self) -> Option<ActionType> {
        match self {
            Self::Action(action) => Some(*action),
            Self::Remap(target) => action_for_key(&target.to_string()),
        }
    }
}

impl Default for Binding {
    fn default() -> Self {
        Self::NONE
    }
}

/// Where a binding came from; recorded with each help entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingOrigin {
    /// Built-in default binding from the action catalog
    #[default]
    Default,
    /// Binding supplied by the user's configuration
    User,
}

impl BindingOrigin {
    pub fn is_user_defined(self) -> bool {
        self == Self::User
    }
}
