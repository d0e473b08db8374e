//! Pool module - the grid of free tiles
//!
//! The pool is a near-square grid; every cell holds at most one term.
//! Uses a flat row-major vector: cell index = row * cols + col.
//! A 16-term set yields the classic 4x4 board.

use crate::rng::SimpleRng;
use crate::term::TermId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    /// Flat cells, row-major order (row * cols + col)
    cells: Vec<Option<TermId>>,
    cols: usize,
}

impl Pool {
    /// Create an empty pool of the given size.
    pub fn new(cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        Self {
            cells: vec![None; cols * rows],
            cols,
        }
    }

    /// Grid shape used for `count` terms: `ceil(sqrt(count))` columns.
    pub fn dimensions_for(count: usize) -> (usize, usize) {
        let mut cols = 1;
        while cols * cols < count {
            cols += 1;
        }
        let rows = count.div_ceil(cols);
        (cols, rows)
    }

    /// Lay out `terms` in a seeded random order, one per cell.
    pub fn shuffled(mut terms: Vec<TermId>, rng: &mut SimpleRng) -> Self {
        rng.shuffle(&mut terms);
        let (cols, rows) = Self::dimensions_for(terms.len());
        let mut pool = Self::new(cols, rows);
        for (cell, term) in terms.into_iter().enumerate() {
            pool.cells[cell] = Some(term);
        }
        pool
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.cells.len() / self.cols
    }

    pub fn get(&self, cell: usize) -> Option<&TermId> {
        self.cells.get(cell).and_then(|c| c.as_ref())
    }

    /// Check if a cell exists and is empty
    pub fn is_free(&self, cell: usize) -> bool {
        matches!(self.cells.get(cell), Some(None))
    }

    /// Put a term into an empty cell.
    /// Returns false if the cell is out of range or occupied
    pub fn put(&mut self, cell: usize, term: TermId) -> bool {
        match self.cells.get_mut(cell) {
            Some(slot) if slot.is_none() => {
                *slot = Some(term);
                true
            }
            _ => false,
        }
    }

    pub fn take(&mut self, cell: usize) -> Option<TermId> {
        self.cells.get_mut(cell).and_then(|c| c.take())
    }

    pub fn first_free(&self) -> Option<usize> {
        self.cells.iter().position(|c| c.is_none())
    }

    pub fn cell_of(&self, term: &TermId) -> Option<usize> {
        self.cells.iter().position(|c| c.as_ref() == Some(term))
    }

    pub fn contains(&self, term: &TermId) -> bool {
        self.cell_of(term).is_some()
    }

    /// Terms still in the pool.
    pub fn remaining(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &TermId)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.as_ref().map(|t| (i, t)))
    }
}
