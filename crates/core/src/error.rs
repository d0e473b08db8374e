//! Errors raised while loading an equation set.
//!
//! Every variant names the structural constraint that was violated. Loading is
//! all-or-nothing: the first violation aborts the load and no partial set is
//! ever returned.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::Side;

/// Structural problem in term markup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    #[error("markup is empty")]
    Empty,

    #[error("unbalanced '{{' at byte {offset}")]
    UnclosedBrace { offset: usize },

    #[error("unexpected '}}' at byte {offset}")]
    UnexpectedBrace { offset: usize },

    #[error("dangling '{symbol}' at end of markup")]
    Dangling { symbol: char },
}

/// Malformed or constraint-violating equation-set data.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read equation set {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid equation set JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("equation set contains no equations")]
    Empty,

    #[error("term id '{term}' is declared more than once")]
    DuplicateTermId { term: String },

    #[error("equation id '{equation}' is declared more than once")]
    DuplicateEquationId { equation: String },

    #[error("term '{term}' has invalid sign '{sign}' (expected \"+\" or \"-\")")]
    InvalidSign { term: String, sign: String },

    #[error("term '{term}' has malformed markup: {source}")]
    InvalidMarkup {
        term: String,
        #[source]
        source: MarkupError,
    },

    #[error("equation '{equation}' references unknown term '{term}'")]
    UnknownTerm { equation: String, term: String },

    #[error("equation '{equation}' lists term '{term}' more than once")]
    RepeatedTerm { equation: String, term: String },

    #[error("term '{term}' is used by both '{first}' and '{second}'")]
    TermReused {
        term: String,
        first: String,
        second: String,
    },

    #[error("term '{term}' does not belong to any equation")]
    UnusedTerm { term: String },

    #[error("equation '{equation}' has an empty {side} side")]
    EmptySide { equation: String, side: Side },

    #[error("equation '{equation}' has {len} terms on its {side} side (at most {max} fit)")]
    SideTooLarge {
        equation: String,
        side: Side,
        len: usize,
        max: usize,
    },
}
