//! Built-in action catalog.
//!
//! Responsibilities:
//! - Enumerate the actions gitview can dispatch.
//! - Describe each action (canonical key, category, description, defaults).
//! - Map canonical `<gv-...>` identifiers back to actions.
//!
//! Does NOT handle:
//! - Executing actions (the dispatcher owns that).
//! - Storing bindings (see `manager`).
//!
//! Invariants:
//! - Canonical keys are unique and all start with [`ACTION_KEY_PREFIX`].
//! - `ActionType::ALL` lists every variant exactly once, in declaration order.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;

use crate::view::ViewId;

mod descriptors;

/// Prefix shared by every canonical action identifier.
pub const ACTION_KEY_PREFIX: &str = "<gv-";

/// An action that a key sequence can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    None,
    Exit,
    Suspend,
    RunCommand,
    Prompt,
    SearchPrompt,
    ReverseSearchPrompt,
    FilterPrompt,
    QuestionPrompt,
    BranchNamePrompt,
    Search,
    ReverseSearch,
    SearchFindNext,
    SearchFindPrev,
    ClearSearch,
    ShowStatus,
    NextLine,
    PrevLine,
    NextPage,
    PrevPage,
    NextHalfPage,
    PrevHalfPage,
    ScrollRight,
    ScrollLeft,
    FirstLine,
    LastLine,
    Select,
    NextView,
    PrevView,
    FullScreenView,
    ToggleViewLayout,
    NextTab,
    PrevTab,
    RemoveView,
    AddFilter,
    RemoveFilter,
    CenterView,
    ScrollCursorTop,
    ScrollCursorBottom,
    CursorTopView,
    CursorMiddleView,
    CursorBottomView,
    NewTab,
    RemoveTab,
    AddView,
    SplitView,
    MouseSelect,
    MouseScrollDown,
    MouseScrollUp,
    CheckoutRef,
    CheckoutCommit,
    CreateBranch,
    CreateContextMenu,
    CreateCommandOutputView,
    ShowAvailableActions,
    StageFile,
    UnstageFile,
    Commit,
    ShowHelpView,
}

impl ActionType {
    pub const ALL: &'static [ActionType] = &[
        ActionType::None,
        ActionType::Exit,
        ActionType::Suspend,
        ActionType::RunCommand,
        ActionType::Prompt,
        ActionType::SearchPrompt,
        ActionType::ReverseSearchPrompt,
        ActionType::FilterPrompt,
        ActionType::QuestionPrompt,
        ActionType::BranchNamePrompt,
        ActionType::Search,
        ActionType::ReverseSearch,
        ActionType::SearchFindNext,
        ActionType::SearchFindPrev,
        ActionType::ClearSearch,
        ActionType::ShowStatus,
        ActionType::NextLine,
        ActionType::PrevLine,
        ActionType::NextPage,
        ActionType::PrevPage,
        ActionType::NextHalfPage,
        ActionType::PrevHalfPage,
        ActionType::ScrollRight,
        ActionType::ScrollLeft,
        ActionType::FirstLine,
        ActionType::LastLine,
        ActionType::Select,
        ActionType::NextView,
        ActionType::PrevView,
        ActionType::FullScreenView,
        ActionType::ToggleViewLayout,
        ActionType::NextTab,
        ActionType::PrevTab,
        ActionType::RemoveView,
        ActionType::AddFilter,
        ActionType::RemoveFilter,
        ActionType::CenterView,
        ActionType::ScrollCursorTop,
        ActionType::ScrollCursorBottom,
        ActionType::CursorTopView,
        ActionType::CursorMiddleView,
        ActionType::CursorBottomView,
        ActionType::NewTab,
        ActionType::RemoveTab,
        ActionType::AddView,
        ActionType::SplitView,
        ActionType::MouseSelect,
        ActionType::MouseScrollDown,
        ActionType::MouseScrollUp,
        ActionType::CheckoutRef,
        ActionType::CheckoutCommit,
        ActionType::CreateBranch,
        ActionType::CreateContextMenu,
        ActionType::CreateCommandOutputView,
        ActionType::ShowAvailableActions,
        ActionType::StageFile,
        ActionType::UnstageFile,
        ActionType::Commit,
        ActionType::ShowHelpView,
    ];

    pub fn descriptor(self) -> ActionDescriptor {
        descriptors::descriptor(self)
    }

    /// The canonical `<gv-...>` identifier, if this action can be bound by name.
    pub fn action_key(self) -> Option<&'static str> {
        self.descriptor().action_key
    }

    pub fn is_none(self) -> bool {
        self == ActionType::None
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action_key() {
            Some(key) => f.write_str(key),
            None => write!(f, "{self:?}"),
        }
    }
}

/// Grouping used for help output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionCategory {
    None,
    Movement,
    Search,
    ViewNavigation,
    General,
    ViewSpecific,
}

/// Static metadata describing an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionDescriptor {
    /// Canonical identifier (`<gv-...>`), absent for internal-only actions
    pub action_key: Option<&'static str>,
    pub category: ActionCategory,
    /// The action opens a prompt rather than acting immediately
    pub prompt_action: bool,
    pub description: &'static str,
    /// Built-in bindings per view, in display order
    pub key_bindings: &'static [(ViewId, &'static [&'static str])],
}

fn action_keys() -> &'static HashMap<&'static str, ActionType> {
    static ACTION_KEYS: OnceLock<HashMap<&'static str, ActionType>> = OnceLock::new();
    ACTION_KEYS.get_or_init(|| {
        ActionType::ALL
            .iter()
            .filter_map(|action| action.action_key().map(|key| (key, *action)))
            .collect()
    })
}

/// Looks up the action named by a canonical identifier such as `<gv-next-line>`.
pub fn action_for_key(key: &str) -> Option<ActionType> {
    action_keys().get(key).copied()
}

pub fn is_valid_action(key: &str) -> bool {
    action_for_key(key).is_some()
}

/// True if the action presents a prompt when dispatched.
pub fn is_prompt_action(action: ActionType) -> bool {
    action.descriptor().prompt_action
}
