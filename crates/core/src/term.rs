//! Terms: the labelled tiles the player moves around.
//!
//! A term is identified by its id alone. Name, sign and markup describe how
//! the tile is presented; the core never interprets markup beyond checking that
//! it is well formed.

use std::borrow::Borrow;
use std::fmt;

use crate::error::MarkupError;
use crate::types::Sign;

/// Unique identifier of a term within an equation set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TermId(String);

impl TermId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for TermId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for TermId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TermId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Render descriptor: LaTeX-like source for a tile face.
///
/// Only structure is validated (non-empty, balanced braces, nothing dangling at
/// the end). Turning it into glyphs is the renderer's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Markup(String);

impl Markup {
    pub fn parse(source: &str) -> Result<Self, MarkupError> {
        let trimmed = source.trim();
        if trimmed.is_empty() {
            return Err(MarkupError::Empty);
        }

        let mut open: Vec<usize> = Vec::new();
        let mut escaped = false;
        for (offset, ch) in trimmed.char_indices() {
            if escaped {
                escaped = false;
                continue;
            }
            match ch {
                '\\' => escaped = true,
                '{' => open.push(offset),
                '}' => {
                    if open.pop().is_none() {
                        return Err(MarkupError::UnexpectedBrace { offset });
                    }
                }
                _ => {}
            }
        }

        if escaped {
            return Err(MarkupError::Dangling { symbol: '\\' });
        }
        if let Some(&offset) = open.first() {
            return Err(MarkupError::UnclosedBrace { offset });
        }
        if let Some(symbol) = trimmed.chars().last().filter(|c| matches!(c, '^' | '_')) {
            return Err(MarkupError::Dangling { symbol });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn source(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single tile: one symbol group of a physical equation.
#[derive(Debug, Clone)]
pub struct Term {
    id: TermId,
    name: String,
    markup: Markup,
    sign: Sign,
}

impl Term {
    pub fn new(id: impl Into<TermId>, name: impl Into<String>, markup: Markup, sign: Sign) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            markup,
            sign,
        }
    }

    pub fn id(&self) -> &TermId {
        &self.id
    }

    /// Human-readable description (e.g. "vertical pressure gradient").
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn markup(&self) -> &Markup {
        &self.markup
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }
}

// Identity is the id; two declarations with equal markup are still distinct tiles.
impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Term {}

impl std::hash::Hash for Term {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.sign.as_str(), self.markup)
    }
}
