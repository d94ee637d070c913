//! Help tables built from the live binding state.
//!
//! Responsibilities:
//! - Group bindable actions into help sections by category.
//! - Collect the keys currently bound to each action across its views.
//! - Render the sections as aligned plain text.
//!
//! Non-responsibilities:
//! - Styling or terminal drawing (the help view owns that).
//!
//! Invariants:
//! - Output is deterministic: sections in fixed order, rows sorted by action key.
//! - A key sequence appears at most once per row.

use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::{ActionCategory, ActionType};
use crate::manager::KeyBindingManager;
use crate::registry::BoundKeySequence;
use crate::view::ViewId;

const SECTIONS: &[(&str, ActionCategory)] = &[
    ("Movement", ActionCategory::Movement),
    ("Search", ActionCategory::Search),
    ("View Navigation", ActionCategory::ViewNavigation),
    ("General", ActionCategory::General),
];

const HEADERS: [&str; 3] = ["Key Bindings", "Action", "Description"];
const NO_KEYS: &str = "None";
const USER_DEFINED_MARKER: char = '*';

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelpSection {
    pub title: &'static str,
    pub rows: Vec<HelpRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelpRow {
    pub keys: Vec<BoundKeySequence>,
    pub action_key: &'static str,
    pub description: &'static str,
}

impl HelpRow {
    /// The key column as displayed: comma separated, whitespace sequences
    /// quoted, user-defined keys marked with `*`.
    pub fn keys_text(&self) -> String {
        if self.keys.is_empty() {
            return NO_KEYS.to_string();
        }

        let mut out = String::new();
        for (i, bound) in self.keys.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            if bound.keys().contains_whitespace() {
                out.push_str(&format!("\"{}\"", bound.keys()));
            } else {
                out.push_str(&bound.keys().to_string());
            }
            if bound.is_user_defined() {
                out.push(USER_DEFINED_MARKER);
            }
        }
        out
    }
}

/// Builds the Movement, Search, View Navigation and General tables.
pub fn help_sections(manager: &KeyBindingManager) -> Vec<HelpSection> {
    SECTIONS
        .iter()
        .map(|&(title, category)| HelpSection {
            title,
            rows: rows_for(manager, category),
        })
        .collect()
}

fn rows_for(manager: &KeyBindingManager, category: ActionCategory) -> Vec<HelpRow> {
    let mut rows: Vec<HelpRow> = ActionType::ALL
        .iter()
        .filter_map(|&action| {
            let descriptor = action.descriptor();
            let action_key = descriptor.action_key?;
            (descriptor.category == category).then(|| HelpRow {
                keys: bound_keys(manager, action),
                action_key,
                description: descriptor.description,
            })
        })
        .collect();

    rows.sort_by(|a, b| a.action_key.cmp(b.action_key));
    rows
}

/// Keys bound to `action` in the views its defaults live in (the catch-all
/// view when it has none), deduplicated by rendered text.
fn bound_keys(manager: &KeyBindingManager, action: ActionType) -> Vec<BoundKeySequence> {
    let descriptor = action.descriptor();
    let views: Vec<ViewId> = if descriptor.key_bindings.is_empty() {
        vec![ViewId::All]
    } else {
        descriptor.key_bindings.iter().map(|(view, _)| *view).collect()
    };

    let mut seen = HashSet::new();
    views
        .into_iter()
        .flat_map(|view| manager.key_sequences(action, view))
        .filter(|bound| seen.insert(bound.keys().to_string()))
        .cloned()
        .collect()
}

/// Renders `sections` as plain-text tables with aligned columns.
pub fn render_help_text(sections: &[HelpSection]) -> String {
    let mut out = String::new();

    for section in sections {
        let cells: Vec<[String; 3]> = section
            .rows
            .iter()
            .map(|row| {
                [
                    row.keys_text(),
                    row.action_key.to_string(),
                    row.description.to_string(),
                ]
            })
            .collect();

        let mut widths = HEADERS.map(str::len);
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        out.push_str(section.title);
        out.push_str("\n\n");
        push_row(&mut out, &HEADERS.map(str::to_string), &widths);
        push_row(&mut out, &widths.map(|w| "-".repeat(w)), &widths);
        for row in &cells {
            push_row(&mut out, row, &widths);
        }
        out.push('\n');
    }

    out.push_str(&format!("{USER_DEFINED_MARKER} user-defined binding\n"));
    out
}

fn push_row(out: &mut String, row: &[String; 3], widths: &[usize; 3]) {
    out.push_str(&format!(
        "{:<w0$}  {:<w1$}  {}\n",
        row[0],
        row[1],
        row[2],
        w0 = widths[0],
        w1 = widths[1],
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::BindingOrigin;
    use crate::sequence::KeySequence;

    fn section<'a>(sections: &'a [HelpSection], title: &str) -> &'a HelpSection {
        sections
            .iter()
            .find(|s| s.title == title)
            .unwrap_or_else(|| panic!("missing section {title}"))
    }

    fn row<'a>(section: &'a HelpSection, action_key: &str) -> &'a HelpRow {
        section
            .rows
            .iter()
            .find(|r| r.action_key == action_key)
            .unwrap_or_else(|| panic!("missing row {action_key}"))
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let sections = help_sections(&KeyBindingManager::with_defaults());
        let titles: Vec<_> = sections.iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Movement", "Search", "View Navigation", "General"]);
    }

    #[test]
    fn test_rows_sorted_by_action_key() {
        let sections = help_sections(&KeyBindingManager::with_defaults());
        for section in &sections {
            let keys: Vec<_> = section.rows.iter().map(|r| r.action_key).collect();
            let mut sorted = keys.clone();
            sorted.sort();
            assert_eq!(keys, sorted, "{}", section.title);
        }
    }

    #[test]
    fn test_internal_and_view_specific_actions_are_omitted() {
        let sections = help_sections(&KeyBindingManager::with_defaults());
        let all_keys: Vec<_> = sections
            .iter()
            .flat_map(|s| s.rows.iter().map(|r| r.action_key))
            .collect();
        assert!(!all_keys.contains(&"<gv-checkout-ref>"));
        assert!(all_keys.contains(&"<gv-next-line>"));
    }

    #[test]
    fn test_keys_aggregate_across_declared_views() {
        let manager = KeyBindingManager::with_defaults();
        let sections = help_sections(&manager);
        let branch = row(section(&sections, "General"), "<gv-branch-name-prompt>");
        // Bound to `b` in both Ref and Commit; listed once
        assert_eq!(branch.keys_text(), "b");
    }

    #[test]
    fn test_unbound_action_shows_none() {
        let sections = help_sections(&KeyBindingManager::with_defaults());
        let exit = row(section(&sections, "General"), "<gv-exit>");
        assert!(exit.keys.is_empty());
        assert_eq!(exit.keys_text(), "None");
    }

    #[test]
    fn test_user_bindings_are_marked_and_whitespace_quoted() {
        let mut manager = KeyBindingManager::with_defaults();
        manager
            .set_remap_binding(
                ViewId::All,
                &KeySequence::parse(" j"),
                &KeySequence::parse("<gv-next-line>"),
                BindingOrigin::User,
            )
            .unwrap();

        let sections = help_sections(&manager);
        let next_line = row(section(&sections, "Movement"), "<gv-next-line>");
        assert_eq!(next_line.keys_text(), "<Down>, j, \" j\"*");
    }

    #[test]
    fn test_render_aligns_columns() {
        let text = render_help_text(&help_sections(&KeyBindingManager::with_defaults()));
        assert!(text.starts_with("Movement\n\nKey Bindings"));
        assert!(text.contains("View Navigation\n"));
        assert!(text.contains("<gv-next-line>"));
        assert!(text.trim_end().ends_with("* user-defined binding"));

        let movement: Vec<&str> = text
            .lines()
            .skip(2)
            .take_while(|line| !line.is_empty())
            .collect();
        let action_column = movement[0].find("Action").unwrap();
        for line in &movement[2..] {
            assert_eq!(line.find("<gv-"), Some(action_column), "{line}");
        }
    }
}
