//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data with no external dependencies, so they can be used
//! by the domain core, the input mapping and the terminal renderer alike.
//!
//! # Equation Bar
//!
//! The bar has two physical sides of [`SLOTS_PER_SIDE`] slots each, separated
//! by an `=` glyph:
//!
//! | Slot index | Side |
//! |------------|------|
//! | `0..4` | left |
//! | `4..8` | right |
//!
//! # Examples
//!
//! ```
//! use equatio_types::{Side, Sign, SLOT_COUNT};
//!
//! assert_eq!(Side::Left.slots(), 0..4);
//! assert_eq!(Side::Right.slots().end, SLOT_COUNT);
//!
//! assert_eq!(Sign::from_str("-"), Some(Sign::Minus));
//! ```

/// Slots on each side of the equation bar.
pub const SLOTS_PER_SIDE: usize = 4;

/// Total number of slots on the equation bar.
pub const SLOT_COUNT: usize = 2 * SLOTS_PER_SIDE;

/// Largest number of terms one side of an equation may hold.
///
/// Bound to the bar layout: a side with more terms could never be placed.
pub const MAX_SIDE_TERMS: usize = SLOTS_PER_SIDE;

/// Term count of the shipped standard set (a 4x4 pool).
pub const STANDARD_TERM_COUNT: usize = 16;

/// Input poll interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Physical side of the equation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Slot indices belonging to this side.
    pub fn slots(&self) -> std::ops::Range<usize> {
        match self {
            Side::Left => 0..SLOTS_PER_SIDE,
            Side::Right => SLOTS_PER_SIDE..SLOT_COUNT,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sign carried by a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sign {
    #[default]
    Plus,
    Minus,
}

impl Sign {
    /// Parse from the configuration form (`"+"` or `"-"`).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "+" => Some(Sign::Plus),
            "-" => Some(Sign::Minus),
            _ => None,
        }
    }

    /// Configuration form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sign::Plus => "+",
            Sign::Minus => "-",
        }
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, Sign::Minus)
    }
}

/// Screen region that accepts pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hotspot {
    /// Pool grid cell (row-major index).
    PoolCell(usize),
    /// Equation bar slot (see [`Side::slots`]).
    Slot(usize),
    CheckButton,
    QuitButton,
}

/// Pointer button phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Primary button pressed.
    Down,
    /// Pointer moved with the primary button held.
    Drag,
    /// Primary button released.
    Up,
}

/// Raw pointer event in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: u16,
    pub y: u16,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, x: u16, y: u16) -> Self {
        Self { kind, x, y }
    }
}

/// Keyboard-level game actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Validate the current slot assignment.
    Check,
    /// Drop the dragged tile back where it came from.
    CancelDrag,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_layout_constants() {
        assert_eq!(SLOTS_PER_SIDE, 4);
        assert_eq!(SLOT_COUNT, 8);
        assert_eq!(MAX_SIDE_TERMS, SLOTS_PER_SIDE);
    }

    #[test]
    fn side_slot_ranges_partition_the_bar() {
        assert_eq!(Side::Left.slots().end, Side::Right.slots().start);
        assert_eq!(Side::Left.slots().len() + Side::Right.slots().len(), SLOT_COUNT);
        assert_eq!(Side::Right.to_string(), "right");
    }

    #[test]
    fn sign_parsing_rejects_other_symbols() {
        assert_eq!(Sign::from_str("+"), Some(Sign::Plus));
        assert_eq!(Sign::from_str(" - "), Some(Sign::Minus));
        assert_eq!(Sign::from_str("*"), None);
        assert_eq!(Sign::from_str("1"), None);
        assert_eq!(Sign::from_str("a"), None);
        assert_eq!(Sign::default(), Sign::Plus);
    }
}
