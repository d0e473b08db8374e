//! Equations: a left-hand and a right-hand side of term ids.
//!
//! Sides are sets, so ordering within a side never matters. Construction checks
//! the per-equation invariants (non-empty sides, side size bound, disjointness);
//! set-wide invariants live in [`crate::equation_set`].

use std::collections::BTreeSet;
use std::fmt;

use crate::error::ConfigError;
use crate::term::TermId;
use crate::types::{Side, MAX_SIDE_TERMS};

/// Unique identifier of an equation within a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EquationId(String);

impl EquationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EquationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EquationId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One physical law, split into two sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    id: EquationId,
    name: String,
    left: BTreeSet<TermId>,
    right: BTreeSet<TermId>,
}

impl Equation {
    /// Build an equation from ordered side lists.
    ///
    /// Fails when a side is empty, exceeds [`MAX_SIDE_TERMS`], or when any term
    /// is listed twice (on the same side or on both).
    pub fn new<L, R>(
        id: impl Into<String>,
        name: impl Into<String>,
        left: L,
        right: R,
    ) -> Result<Self, ConfigError>
    where
        L: IntoIterator,
        L::Item: Into<TermId>,
        R: IntoIterator,
        R::Item: Into<TermId>,
    {
        let id = EquationId::new(id);
        let left = collect_side(&id, Side::Left, left)?;
        let right = collect_side(&id, Side::Right, right)?;

        if let Some(shared) = left.intersection(&right).next() {
            return Err(ConfigError::RepeatedTerm {
                equation: id.to_string(),
                term: shared.to_string(),
            });
        }

        Ok(Self {
            id,
            name: name.into(),
            left,
            right,
        })
    }

    pub fn id(&self) -> &EquationId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn left(&self) -> &BTreeSet<TermId> {
        &self.left
    }

    pub fn right(&self) -> &BTreeSet<TermId> {
        &self.right
    }

    pub fn side(&self, side: Side) -> &BTreeSet<TermId> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// All terms of both sides, left first.
    pub fn all_terms(&self) -> impl Iterator<Item = &TermId> + '_ {
        self.left.iter().chain(self.right.iter())
    }

    pub fn contains(&self, term: &TermId) -> bool {
        self.left.contains(term) || self.right.contains(term)
    }

    /// Whether two physical sides hold exactly this equation.
    ///
    /// `{a, b}` must equal `{left, right}` as an unordered pair, so writing the
    /// equation mirrored still matches.
    pub fn matches(&self, a: &BTreeSet<TermId>, b: &BTreeSet<TermId>) -> bool {
        (*a == self.left && *b == self.right) || (*a == self.right && *b == self.left)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\": ", self.name)?;
        write_side(f, &self.left)?;
        f.write_str(" = ")?;
        write_side(f, &self.right)
    }
}

fn write_side(f: &mut fmt::Formatter<'_>, side: &BTreeSet<TermId>) -> fmt::Result {
    for (i, term) in side.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", term)?;
    }
    Ok(())
}

fn collect_side<I>(id: &EquationId, side: Side, terms: I) -> Result<BTreeSet<TermId>, ConfigError>
where
    I: IntoIterator,
    I::Item: Into<TermId>,
{
    let mut out = BTreeSet::new();
    for term in terms {
        let term = term.into();
        if out.contains(&term) {
            return Err(ConfigError::RepeatedTerm {
                equation: id.to_string(),
                term: term.to_string(),
            });
        }
        out.insert(term);
    }

    if out.is_empty() {
        return Err(ConfigError::EmptySide {
            equation: id.to_string(),
            side,
        });
    }
    if out.len() > MAX_SIDE_TERMS {
        return Err(ConfigError::SideTooLarge {
            equation: id.to_string(),
            side,
            len: out.len(),
            max: MAX_SIDE_TERMS,
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[&str]) -> BTreeSet<TermId> {
        ids.iter().map(|s| TermId::from(*s)).collect()
    }

    fn ideal_gas() -> Equation {
        Equation::new("ideal_gas", "ideal gas law", ["P", "V"], ["n", "R", "T"]).unwrap()
    }

    #[test]
    fn matches_in_either_orientation() {
        let eq = ideal_gas();
        assert!(eq.matches(&set(&["V", "P"]), &set(&["T", "n", "R"])));
        assert!(eq.matches(&set(&["n", "R", "T"]), &set(&["P", "V"])));
    }

    #[test]
    fn mixed_sides_never_match() {
        let eq = ideal_gas();
        assert!(!eq.matches(&set(&["P", "n"]), &set(&["V", "R", "T"])));
        assert!(!eq.matches(&set(&["P", "V"]), &set(&["n", "R"])));
        assert!(!eq.matches(&set(&["P", "V", "n", "R", "T"]), &set(&[])));
    }

    #[test]
    fn rejects_terms_on_both_sides() {
        let err = Equation::new("bad", "bad", ["a", "b"], ["b"]).unwrap_err();
        assert!(matches!(err, ConfigError::RepeatedTerm { ref term, .. } if term == "b"));
    }

    #[test]
    fn rejects_repeats_within_a_side() {
        let err = Equation::new("bad", "bad", ["a", "a"], ["b"]).unwrap_err();
        assert!(matches!(err, ConfigError::RepeatedTerm { .. }));
    }

    #[test]
    fn rejects_empty_and_oversized_sides() {
        let err = Equation::new("e", "e", Vec::<&str>::new(), ["b"]).unwrap_err();
        assert!(matches!(err, ConfigError::EmptySide { side: Side::Left, .. }));

        let err = Equation::new("e", "e", ["a"], ["b", "c", "d", "f", "g"]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::SideTooLarge {
                side: Side::Right,
                len: 5,
                max: 4,
                ..
            }
        ));
    }

    #[test]
    fn display_lists_both_sides() {
        let eq = Equation::new("first_law", "first law", ["dU"], ["dW", "dQ"]).unwrap();
        assert_eq!(eq.to_string(), "\"first law\": dU = dQ dW");
        assert_eq!(eq.all_terms().count(), 3);
        assert!(eq.contains(&TermId::from("dQ")));
    }
}
