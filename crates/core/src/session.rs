//! Game session - pool, equation bar and progress for one play-through.
//!
//! A session is created from an [`EquationSet`] and owned by the interaction
//! loop; dropping it is the only "quit" semantics there are. It enforces:
//!
//! - every unsolved term is in exactly one place (a pool cell or a slot)
//! - terms of solved equations are gone for good
//! - a failed check sends every placed term back to the pool

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::equation::EquationId;
use crate::equation_set::EquationSet;
use crate::placement::{self, CheckOutcome, SlotAssignment};
use crate::pool::Pool;
use crate::rng::SimpleRng;
use crate::term::TermId;
use crate::types::Hotspot;

/// Where a tile can rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    Pool(usize),
    Slot(usize),
}

impl Location {
    /// Tile location under a hotspot; buttons are not locations.
    pub fn from_hotspot(hotspot: Hotspot) -> Option<Self> {
        match hotspot {
            Hotspot::PoolCell(cell) => Some(Location::Pool(cell)),
            Hotspot::Slot(slot) => Some(Location::Slot(slot)),
            Hotspot::CheckButton | Hotspot::QuitButton => None,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Pool(cell) => write!(f, "pool[{}]", cell),
            Location::Slot(slot) => write!(f, "slot[{}]", slot),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    set: EquationSet,
    pool: Pool,
    slots: SlotAssignment,
    solved: BTreeSet<EquationId>,
    /// Last pool cell of every unsolved term, so failed checks put tiles back
    /// where the player left them.
    home: HashMap<TermId, usize>,
    last_outcome: Option<CheckOutcome>,
}

impl Session {
    /// Start a session with the pool shuffled by `seed`.
    pub fn new(set: EquationSet, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let terms: Vec<TermId> = set.all_terms().map(|t| t.id().clone()).collect();
        let pool = Pool::shuffled(terms, &mut rng);
        let home = pool.iter().map(|(cell, term)| (term.clone(), cell)).collect();

        log::info!(
            "session started: \"{}\" with {} equations (seed {})",
            set.name(),
            set.len(),
            seed
        );

        Self {
            set,
            pool,
            slots: SlotAssignment::new(),
            solved: BTreeSet::new(),
            home,
            last_outcome: None,
        }
    }

    pub fn set(&self) -> &EquationSet {
        &self.set
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    pub fn slots(&self) -> &SlotAssignment {
        &self.slots
    }

    pub fn solved(&self) -> &BTreeSet<EquationId> {
        &self.solved
    }

    /// Outcome of the last check that did something (`Matched` or `NoMatch`).
    pub fn last_outcome(&self) -> Option<&CheckOutcome> {
        self.last_outcome.as_ref()
    }

    /// `(solved, total)` equation counts.
    pub fn progress(&self) -> (usize, usize) {
        (self.solved.len(), self.set.len())
    }

    pub fn is_complete(&self) -> bool {
        self.solved.len() == self.set.len()
    }

    pub fn term_at(&self, location: Location) -> Option<&TermId> {
        match location {
            Location::Pool(cell) => self.pool.get(cell),
            Location::Slot(slot) => self.slots.get(slot),
        }
    }

    /// Whether `location` exists and is empty.
    pub fn is_free(&self, location: Location) -> bool {
        match location {
            Location::Pool(cell) => self.pool.is_free(cell),
            Location::Slot(slot) => self.slots.is_free(slot),
        }
    }

    pub fn location_of(&self, term: &TermId) -> Option<Location> {
        self.pool
            .cell_of(term)
            .map(Location::Pool)
            .or_else(|| self.slots.slot_of(term).map(Location::Slot))
    }

    /// Move the tile at `from` to the empty location `to`.
    ///
    /// Returns false (and changes nothing) when `from` is empty or `to` is
    /// occupied or out of range. Moving a tile onto itself is a successful no-op.
    pub fn relocate(&mut self, from: Location, to: Location) -> bool {
        if from == to {
            return self.term_at(from).is_some();
        }
        if !self.is_free(to) {
            return false;
        }
        let Some(term) = self.take(from) else {
            return false;
        };

        log::trace!("{} moved {} -> {}", term, from, to);
        match to {
            Location::Pool(cell) => {
                self.home.insert(term.clone(), cell);
                self.pool.put(cell, term)
            }
            Location::Slot(slot) => self.slots.place(slot, term),
        }
    }

    /// Validate the equation bar and apply the result.
    ///
    /// - `Matched`: the equation is solved and its terms leave the game.
    /// - `NoMatch`: every placed term goes back to the pool.
    /// - `Incomplete`: nothing happens.
    pub fn check(&mut self) -> CheckOutcome {
        let outcome = placement::check(&self.set, &self.slots);
        match &outcome {
            CheckOutcome::Matched(id) => {
                for term in self.slots.drain() {
                    self.home.remove(&term);
                }
                self.solved.insert(id.clone());
                let (solved, total) = self.progress();
                log::info!("matched {} ({}/{})", id, solved, total);
            }
            CheckOutcome::NoMatch => {
                log::debug!("no match for {} placed terms", self.slots.filled());
                self.return_slots_to_pool();
            }
            CheckOutcome::Incomplete => {
                log::debug!("check ignored: a side of the bar is empty");
                return outcome;
            }
        }
        self.last_outcome = Some(outcome.clone());
        outcome
    }

    fn take(&mut self, location: Location) -> Option<TermId> {
        match location {
            Location::Pool(cell) => self.pool.take(cell),
            Location::Slot(slot) => self.slots.take(slot),
        }
    }

    fn return_slots_to_pool(&mut self) {
        for term in self.slots.drain() {
            let cell = self
                .home
                .get(&term)
                .copied()
                .filter(|&cell| self.pool.is_free(cell))
                .or_else(|| self.pool.first_free());
            match cell {
                Some(cell) => {
                    self.home.insert(term.clone(), cell);
                    self.pool.put(cell, term);
                }
                // Cells == terms, so a free cell always exists for a placed term.
                None => log::error!("no free pool cell for {}", term),
            }
        }
    }
}
