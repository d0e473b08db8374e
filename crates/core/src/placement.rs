//! Slot assignment and placement validation ("check").
//!
//! The equation bar has [`SLOT_COUNT`] slots split into two physical sides.
//! A check compares what sits on each side against the equations of the set:
//!
//! - ordering inside a side is irrelevant
//! - the two sides may be swapped (`b = a` matches `a = b`)
//! - every term of the equation must be placed; partial sides never match
//!
//! Since each term belongs to exactly one equation, the only candidate is the
//! owner of any placed term, which keeps the check a single lookup.

use std::collections::BTreeSet;

use crate::equation::EquationId;
use crate::equation_set::EquationSet;
use crate::term::TermId;
use crate::types::{Side, SLOT_COUNT};

/// Result of validating a slot assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The placed terms form exactly this equation.
    Matched(EquationId),
    /// Both sides hold terms but they form no equation.
    NoMatch,
    /// At least one side is empty: nothing to check.
    Incomplete,
}

/// Terms currently sitting on the equation bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotAssignment {
    slots: [Option<TermId>; SLOT_COUNT],
}

impl SlotAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: usize) -> Option<&TermId> {
        self.slots.get(slot).and_then(|s| s.as_ref())
    }

    /// Whether `slot` exists and holds nothing.
    pub fn is_free(&self, slot: usize) -> bool {
        matches!(self.slots.get(slot), Some(None))
    }

    /// Put a term into an empty slot. Returns false if the slot is out of range
    /// or occupied.
    pub fn place(&mut self, slot: usize, term: TermId) -> bool {
        match self.slots.get_mut(slot) {
            Some(cell) if cell.is_none() => {
                *cell = Some(term);
                true
            }
            _ => false,
        }
    }

    pub fn take(&mut self, slot: usize) -> Option<TermId> {
        self.slots.get_mut(slot).and_then(|s| s.take())
    }

    /// Empty every slot, returning the terms in slot order.
    pub fn drain(&mut self) -> Vec<TermId> {
        self.slots.iter_mut().filter_map(|s| s.take()).collect()
    }

    pub fn slot_of(&self, term: &TermId) -> Option<usize> {
        self.slots.iter().position(|s| s.as_ref() == Some(term))
    }

    pub fn side_terms(&self, side: Side) -> BTreeSet<TermId> {
        self.slots[side.slots()].iter().flatten().cloned().collect()
    }

    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.filled() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &TermId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|t| (i, t)))
    }
}

/// Validate a slot assignment against the set.
pub fn check(set: &EquationSet, slots: &SlotAssignment) -> CheckOutcome {
    let left = slots.side_terms(Side::Left);
    let right = slots.side_terms(Side::Right);
    if left.is_empty() || right.is_empty() {
        return CheckOutcome::Incomplete;
    }

    let Some(candidate) = left.iter().next().and_then(|t| set.equation_of(t)) else {
        return CheckOutcome::NoMatch;
    };

    if candidate.matches(&left, &right) {
        CheckOutcome::Matched(candidate.id().clone())
    } else {
        CheckOutcome::NoMatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_refuses_occupied_and_out_of_range_slots() {
        let mut slots = SlotAssignment::new();
        assert!(slots.place(0, TermId::from("a")));
        assert!(!slots.place(0, TermId::from("b")));
        assert!(!slots.place(SLOT_COUNT, TermId::from("b")));
        assert!(!slots.is_free(0));
        assert!(slots.is_free(1));
        assert!(!slots.is_free(SLOT_COUNT));
        assert_eq!(slots.slot_of(&TermId::from("a")), Some(0));
    }

    #[test]
    fn side_terms_follow_physical_sides() {
        let mut slots = SlotAssignment::new();
        slots.place(3, TermId::from("a"));
        slots.place(4, TermId::from("b"));
        slots.place(7, TermId::from("c"));

        let left: Vec<_> = slots.side_terms(Side::Left).into_iter().collect();
        let right: Vec<_> = slots.side_terms(Side::Right).into_iter().collect();
        assert_eq!(left, vec![TermId::from("a")]);
        assert_eq!(right, vec![TermId::from("b"), TermId::from("c")]);
        assert_eq!(slots.filled(), 3);
    }

    #[test]
    fn drain_empties_in_slot_order() {
        let mut slots = SlotAssignment::new();
        slots.place(5, TermId::from("x"));
        slots.place(1, TermId::from("y"));
        assert_eq!(slots.drain(), vec![TermId::from("y"), TermId::from("x")]);
        assert!(slots.is_empty());
    }
}
