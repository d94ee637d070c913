//! Key sequences and their tokenizer.
//!
//! Responsibilities:
//! - Split key strings such as `gg`, `<C-w>w` or `<gv-next-line>` into tokens.
//! - Compare sequences token by token (equality and prefix tests).
//! - Render sequences back into the same string form.
//!
//! Invariants:
//! - `<` opens a symbolic token only when a `>` follows with at least one
//!   character in between and no whitespace or `<` inside. Otherwise `<` is
//!   a literal key.
//! - Rendering a parsed sequence reproduces the string it was parsed from.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Token name prefix reserved for canonical action identifiers.
pub const RESERVED_TOKEN_PREFIX: &str = "gv-";

/// A single keystroke within a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyToken {
    /// A literal character key (including whitespace)
    Char(char),
    /// A bracketed symbolic key, stored without the brackets (e.g. `C-w`)
    Named(String),
}

impl KeyToken {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }
}

impl fmt::Display for KeyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{c}"),
            Self::Named(name) => write!(f, "<{name}>"),
        }
    }
}

/// An ordered list of keystrokes treated as a single lookup key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeySequence {
    tokens: Vec<KeyToken>,
}

impl KeySequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize a key string. Every string is a valid sequence.
    pub fn parse(raw: &str) -> Self {
        let mut tokens = Vec::new();
        let mut rest = raw;

        while let Some(ch) = rest.chars().next() {
            if ch == '<'
                && let Some(name) = bracketed_name(&rest[1..])
            {
                tokens.push(KeyToken::Named(name.to_string()));
                rest = &rest[name.len() + 2..];
                continue;
            }
            tokens.push(KeyToken::Char(ch));
            rest = &rest[ch.len_utf8()..];
        }

        Self { tokens }
    }

    pub fn from_tokens(tokens: Vec<KeyToken>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[KeyToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn push(&mut self, token: KeyToken) {
        self.tokens.push(token);
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// True if `self` is a (non-strict) token prefix of `other`.
    pub fn is_prefix_of(&self, other: &KeySequence) -> bool {
        other.tokens.starts_with(&self.tokens)
    }

    /// True if the sequence begins with a reserved `<gv-...>` token.
    ///
    /// Such sequences are canonical action identifiers and are kept out of
    /// help output.
    pub fn is_reserved(&self) -> bool {
        matches!(
            self.tokens.first(),
            Some(KeyToken::Named(name)) if name.starts_with(RESERVED_TOKEN_PREFIX)
        )
    }

    /// True if the rendered form contains whitespace (help output quotes these).
    pub fn contains_whitespace(&self) -> bool {
        self.tokens
            .iter()
            .any(|token| matches!(token, KeyToken::Char(c) if c.is_whitespace()))
    }
}

/// Returns the name inside a `<name>` token at the start of `after_open`
/// (the text following the `<`), if it forms one.
fn bracketed_name(after_open: &str) -> Option<&str> {
    let end = after_open.find(|c: char| c == '>' || c == '<' || c.is_whitespace())?;
    if end == 0 || !after_open[end..].starts_with('>') {
        return None;
    }
    Some(&after_open[..end])
}

impl fmt::Display for KeySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

impl From<&str> for KeySequence {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for KeySequence {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl FromIterator<KeyToken> for KeySequence {
    fn from_iter<I: IntoIterator<Item = KeyToken>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl Serialize for KeySequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for KeySequence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
