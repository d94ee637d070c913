//! Descriptor table for the built-in actions.
//!
//! Invariants:
//! - Default binding order here is the order help output lists them in.

use super::{ActionCategory, ActionDescriptor, ActionType};
use crate::view::ViewId;

use ActionCategory::{General, Movement, Search, ViewNavigation, ViewSpecific};
use ViewId::{All, Commit, GitStatus, Main, Ref};

const PROMPT_TEXT: &str = ":";
const SEARCH_PROMPT_TEXT: &str = "/";
const REVERSE_SEARCH_PROMPT_TEXT: &str = "?";

const NO_BINDINGS: &[(ViewId, &[&str])] = &[];

const fn keyed(
    key: &'static str,
    category: ActionCategory,
    description: &'static str,
    key_bindings: &'static [(ViewId, &'static [&'static str])],
) -> ActionDescriptor {
    ActionDescriptor {
        action_key: Some(key),
        category,
        prompt_action: false,
        description,
        key_bindings,
    }
}

const fn prompt(
    key: Option<&'static str>,
    category: ActionCategory,
    description: &'static str,
    key_bindings: &'static [(ViewId, &'static [&'static str])],
) -> ActionDescriptor {
    ActionDescriptor {
        action_key: key,
        category,
        prompt_action: true,
        description,
        key_bindings,
    }
}

/// Actions that are only ever produced internally and cannot be bound by name.
const fn internal(category: ActionCategory, description: &'static str) -> ActionDescriptor {
    ActionDescriptor {
        action_key: None,
        category,
        prompt_action: false,
        description,
        key_bindings: NO_BINDINGS,
    }
}

pub(super) fn descriptor(action: ActionType) -> ActionDescriptor {
    use ActionType as A;

    match action {
        A::None => internal(ActionCategory::None, "Perform no action (NOP)"),
        A::Exit => keyed("<gv-exit>", General, "Exit gitview", NO_BINDINGS),
        A::Suspend => keyed(
            "<gv-suspend>",
            General,
            "Suspend gitview",
            &[(All, &["<C-z>"])],
        ),
        A::RunCommand => internal(General, "Run a shell command"),
        A::Prompt => prompt(
            Some("<gv-prompt>"),
            General,
            "Command prompt",
            &[(Main, &[PROMPT_TEXT])],
        ),
        A::SearchPrompt => prompt(
            Some("<gv-search-prompt>"),
            Search,
            "Search forwards",
            &[(Main, &[SEARCH_PROMPT_TEXT])],
        ),
        A::ReverseSearchPrompt => prompt(
            Some("<gv-reverse-search-prompt>"),
            Search,
            "Search backwards",
            &[(Main, &[REVERSE_SEARCH_PROMPT_TEXT])],
        ),
        A::FilterPrompt => prompt(
            Some("<gv-filter-prompt>"),
            ViewSpecific,
            "Add filter",
            &[(Commit, &["<C-q>"]), (Ref, &["<C-q>"])],
        ),
        A::QuestionPrompt => prompt(None, General, "Prompt the user with a question", NO_BINDINGS),
        A::BranchNamePrompt => prompt(
            Some("<gv-branch-name-prompt>"),
            General,
            "Create a new branch",
            &[(Ref, &["b"]), (Commit, &["b"])],
        ),
        A::Search => internal(Search, "Perform search forwards"),
        A::ReverseSearch => internal(Search, "Perform search backwards"),
        A::SearchFindNext => keyed(
            "<gv-search-find-next>",
            Search,
            "Move to next search match",
            &[(All, &["n"])],
        ),
        A::SearchFindPrev => keyed(
            "<gv-search-find-prev>",
            Search,
            "Move to previous search match",
            &[(All, &["N"])],
        ),
        A::ClearSearch => keyed("<gv-clear-search>", Search, "Clear search", NO_BINDINGS),
        A::ShowStatus => internal(General, "Display message in status bar"),
        A::NextLine => keyed(
            "<gv-next-line>",
            Movement,
            "Move down one line",
            &[(All, &["<Down>", "j"])],
        ),
        A::PrevLine => keyed(
            "<gv-prev-line>",
            Movement,
            "Move up one line",
            &[(All, &["<Up>", "k"])],
        ),
        A::NextPage => keyed(
            "<gv-next-page>",
            Movement,
            "Move one page down",
            &[(All, &["<PageDown>", "<C-f>"])],
        ),
        A::PrevPage => keyed(
            "<gv-prev-page>",
            Movement,
            "Move one page up",
            &[(All, &["<PageUp>", "<C-b>"])],
        ),
        A::NextHalfPage => keyed(
            "<gv-next-half-page>",
            Movement,
            "Move half page down",
            &[(All, &["<C-d>"])],
        ),
        A::PrevHalfPage => keyed(
            "<gv-prev-half-page>",
            Movement,
            "Move half page up",
            &[(All, &["<C-u>"])],
        ),
        A::ScrollRight => keyed(
            "<gv-scroll-right>",
            Movement,
            "Scroll right",
            &[(All, &["<Right>", "l"])],
        ),
        A::ScrollLeft => keyed(
            "<gv-scroll-left>",
            Movement,
            "Scroll left",
            &[(All, &["<Left>", "h"])],
        ),
        A::FirstLine => keyed(
            "<gv-first-line>",
            Movement,
            "Move to first line",
            &[(All, &["gg"])],
        ),
        A::LastLine => keyed(
            "<gv-last-line>",
            Movement,
            "Move to last line",
            &[(All, &["G"])],
        ),
        A::Select => keyed(
            "<gv-select>",
            General,
            "Select item (opens listener view if none exists)",
            &[(All, &["<Enter>"])],
        ),
        A::NextView => keyed(
            "<gv-next-view>",
            ViewNavigation,
            "Move to next view",
            &[(All, &["<C-w>w", "<C-w><C-w>", "<Tab>"])],
        ),
        A::PrevView => keyed(
            "<gv-prev-view>",
            ViewNavigation,
            "Move to previous view",
            &[(All, &["<C-w>W", "<S-Tab>"])],
        ),
        A::FullScreenView => keyed(
            "<gv-full-screen-view>",
            ViewNavigation,
            "Toggle current view full screen",
            &[(All, &["<C-w>o", "<C-w><C-o>", "f"])],
        ),
        A::ToggleViewLayout => keyed(
            "<gv-toggle-view-layout>",
            ViewNavigation,
            "Toggle view layout",
            &[(All, &["<C-w>t"])],
        ),
        A::NextTab => keyed(
            "<gv-next-tab>",
            ViewNavigation,
            "Move to next tab",
            &[(All, &["gt"])],
        ),
        A::PrevTab => keyed(
            "<gv-prev-tab>",
            ViewNavigation,
            "Move to previous tab",
            &[(All, &["gT"])],
        ),
        A::RemoveView => keyed(
            "<gv-remove-view>",
            ViewNavigation,
            "Close view (or close tab if empty)",
            &[(All, &["q"])],
        ),
        A::AddFilter => internal(ViewSpecific, "Add filter"),
        A::RemoveFilter => keyed(
            "<gv-remove-filter>",
            ViewSpecific,
            "Remove filter",
            &[(Commit, &["<C-r>"]), (Ref, &["<C-r>"])],
        ),
        A::CenterView => keyed(
            "<gv-center-view>",
            Movement,
            "Center view",
            &[(All, &["z.", "zz"])],
        ),
        A::ScrollCursorTop => keyed(
            "<gv-scroll-cursor-top>",
            Movement,
            "Scroll the screen so cursor is at the top",
            &[(All, &["zt"])],
        ),
        A::ScrollCursorBottom => keyed(
            "<gv-scroll-cursor-bottom>",
            Movement,
            "Scroll the screen so cursor is at the bottom",
            &[(All, &["zb"])],
        ),
        A::CursorTopView => keyed(
            "<gv-cursor-top-view>",
            Movement,
            "Move to the first line of the page",
            &[(All, &["H"])],
        ),
        A::CursorMiddleView => keyed(
            "<gv-cursor-middle-view>",
            Movement,
            "Move to the middle line of the page",
            &[(All, &["M"])],
        ),
        A::CursorBottomView => keyed(
            "<gv-cursor-bottom-view>",
            Movement,
            "Move to the last line of the page",
            &[(All, &["L"])],
        ),
        A::NewTab => internal(General, "Add a new tab"),
        A::RemoveTab => internal(General, "Remove the active tab"),
        A::AddView => internal(General, "Add a new view"),
        A::SplitView => internal(General, "Split the current view with a new view"),
        A::MouseSelect => internal(General, "Mouse select"),
        A::MouseScrollDown => internal(General, "Mouse scroll down"),
        A::MouseScrollUp => internal(General, "Mouse scroll up"),
        A::CheckoutRef => keyed(
            "<gv-checkout-ref>",
            ViewSpecific,
            "Checkout ref",
            &[(Ref, &["c"])],
        ),
        A::CheckoutCommit => keyed(
            "<gv-checkout-commit>",
            ViewSpecific,
            "Checkout commit",
            &[(Commit, &["c"])],
        ),
        A::CreateBranch => internal(General, "Create a branch"),
        A::CreateContextMenu => internal(General, "Create a context menu"),
        A::CreateCommandOutputView => internal(General, "Create a command output view"),
        A::ShowAvailableActions => keyed(
            "<gv-show-available-actions>",
            General,
            "Show available actions for the selected row",
            &[(All, &["<C-a>"])],
        ),
        A::StageFile => keyed(
            "<gv-stage-file>",
            ViewSpecific,
            "Stage",
            &[(GitStatus, &["a"])],
        ),
        A::UnstageFile => keyed(
            "<gv-unstage-file>",
            ViewSpecific,
            "Unstage",
            &[(GitStatus, &["u"])],
        ),
        A::Commit => keyed(
            "<gv-action-commit>",
            ViewSpecific,
            "Commit",
            &[(GitStatus, &["c"])],
        ),
        A::ShowHelpView => keyed(
            "<gv-show-help>",
            General,
            "Show the help view",
            NO_BINDINGS,
        ),
    }
}
