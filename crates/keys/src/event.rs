//! Terminal key events to key tokens, and the pending-keystroke buffer.
//!
//! Responsibilities:
//! - Convert crossterm `KeyEvent`s into [`KeyToken`]s using the same names
//!   as configuration strings (`<C-w>`, `<Enter>`, `<S-Tab>`).
//! - Accumulate keystrokes until they resolve or can no longer resolve.
//!
//! Does NOT handle:
//! - Chord timeouts (the caller decides when to give up on a pending prefix).
//! - Feeding remap targets back into input (the caller decides how).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::manager::KeyBindingManager;
use crate::resolver::Resolution;
use crate::sequence::{KeySequence, KeyToken};
use crate::view::ViewId;

/// Converts a key press into a token. Releases and keys with no binding
/// name (media keys, bare modifiers) yield `None`.
pub fn key_token_from_event(event: KeyEvent) -> Option<KeyToken> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let alt = event.modifiers.contains(KeyModifiers::ALT);
    let shift = event.modifiers.contains(KeyModifiers::SHIFT);

    if let KeyCode::Char(ch) = event.code {
        if !ctrl && !alt {
            return Some(KeyToken::Char(ch));
        }
        let mut name = String::new();
        if ctrl {
            name.push_str("C-");
        }
        if alt {
            name.push_str("M-");
        }
        name.push(if ctrl { ch.to_ascii_lowercase() } else { ch });
        return Some(KeyToken::Named(name));
    }

    let name = match event.code {
        KeyCode::Tab if shift => "S-Tab".to_string(),
        KeyCode::BackTab => "S-Tab".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Insert => "Insert".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => return None,
    };

    Some(KeyToken::Named(name))
}

/// Keystrokes typed so far that form an incomplete binding.
#[derive(Debug, Clone, Default)]
pub struct KeyBuffer {
    pending: KeySequence,
}

impl KeyBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `token` and resolves the buffered sequence.
    ///
    /// The buffer is kept only while the result is pending. When the
    /// buffered keys lead nowhere, the new keystroke is retried on its own so
    /// a mistyped chord does not swallow the next command.
    pub fn push(
        &mut self,
        manager: &KeyBindingManager,
        hierarchy: &[ViewId],
        token: KeyToken,
    ) -> Resolution {
        let had_pending = !self.pending.is_empty();
        self.pending.push(token.clone());

        let resolution = manager.resolve(hierarchy, &self.pending);
        if resolution.is_match() || !had_pending {
            return self.settle(resolution);
        }
        if resolution.pending {
            return resolution;
        }

        tracing::trace!(abandoned = %self.pending, "abandoning key prefix");
        self.pending = KeySequence::from_tokens(vec![token]);
        let retry = manager.resolve(hierarchy, &self.pending);
        self.settle(retry)
    }

    fn settle(&mut self, resolution: Resolution) -> Resolution {
        if resolution.is_match() || !resolution.pending {
            self.pending.clear();
        }
        resolution
    }

    pub fn pending(&self) -> &KeySequence {
        &self.pending
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
