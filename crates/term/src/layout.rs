//! Screen layout and hit testing.
//!
//! Rows, top to bottom: header (title + quit button), the pool grid, the
//! equation bar (`4 slots = 4 slots`), the check button, and a status row
//! pinned to the bottom of the viewport.

use crate::fb::Rect;
use crate::types::{Hotspot, SLOTS_PER_SIDE, SLOT_COUNT};

/// Tile size in terminal cells (pool cells and slots share it).
pub const TILE_W: u16 = 9;
pub const TILE_H: u16 = 3;
/// Horizontal gap between pool columns.
pub const POOL_GAP: u16 = 1;
/// Width of the `=` separator on the bar.
pub const EQUALS_W: u16 = 3;

pub const QUIT_LABEL: &str = "[ Quit ]";
pub const CHECK_LABEL: &str = "[ Check ]";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLayout {
    pub viewport: Viewport,
    pub header: Rect,
    pub quit: Rect,
    pub pool_cols: usize,
    pub pool_rows: usize,
    /// One rect per pool cell, row-major like [`Pool`](crate::core::Pool).
    pub pool_cells: Vec<Rect>,
    pub slots: [Rect; SLOT_COUNT],
    pub equals: Rect,
    pub check: Rect,
    pub status: Rect,
}

fn label_w(label: &str) -> u16 {
    label.chars().count() as u16
}

impl BoardLayout {
    pub fn compute(viewport: Viewport, pool_cols: usize, pool_rows: usize) -> Self {
        let width = viewport.width;
        let cols = pool_cols as u16;
        let rows = pool_rows as u16;

        let header = Rect::new(0, 0, width, 1);
        let quit_w = label_w(QUIT_LABEL);
        let quit = Rect::new(width.saturating_sub(quit_w), 0, quit_w, 1);

        // Pool grid, horizontally centered below the header.
        let pool_w = (cols * TILE_W + cols.saturating_sub(1) * POOL_GAP).min(width);
        let pool_x = (width - pool_w) / 2;
        let pool_y = header.bottom() + 1;
        let mut pool_cells = Vec::with_capacity(pool_cols * pool_rows);
        for row in 0..rows {
            for col in 0..cols {
                pool_cells.push(Rect::new(
                    pool_x + col * (TILE_W + POOL_GAP),
                    pool_y + row * TILE_H,
                    TILE_W,
                    TILE_H,
                ));
            }
        }

        // Equation bar: left slots, '=', right slots.
        let side_w = SLOTS_PER_SIDE as u16 * TILE_W;
        let bar_w = (2 * side_w + EQUALS_W).min(width);
        let bar_x = (width - bar_w) / 2;
        let bar_y = pool_y + rows * TILE_H + 1;
        let equals = Rect::new(bar_x + side_w, bar_y, EQUALS_W, TILE_H);
        let slots = std::array::from_fn(|slot| {
            let slot = slot as u16;
            let x = if (slot as usize) < SLOTS_PER_SIDE {
                bar_x + slot * TILE_W
            } else {
                equals.right() + (slot - SLOTS_PER_SIDE as u16) * TILE_W
            };
            Rect::new(x, bar_y, TILE_W, TILE_H)
        });

        let check_w = label_w(CHECK_LABEL);
        let check = Rect::new(
            width.saturating_sub(check_w) / 2,
            bar_y + TILE_H + 1,
            check_w,
            1,
        );

        let status_y = viewport.height.saturating_sub(1).max(check.bottom() + 1);
        let status = Rect::new(0, status_y, width, 1);

        Self {
            viewport,
            header,
            quit,
            pool_cols,
            pool_rows,
            pool_cells,
            slots,
            equals,
            check,
            status,
        }
    }

    /// Smallest viewport that shows everything.
    pub fn required_size(&self) -> (u16, u16) {
        let bar_right = self.slots[SLOT_COUNT - 1].right();
        let pool_right = self.pool_cells.iter().map(Rect::right).max().unwrap_or(0);
        let width = bar_right.max(pool_right).max(self.quit.w + 1);
        (width, self.check.bottom() + 2)
    }

    pub fn fits(&self) -> bool {
        let (w, h) = self.required_size();
        self.viewport.width >= w && self.viewport.height >= h
    }

    pub fn slot(&self, slot: usize) -> Option<Rect> {
        self.slots.get(slot).copied()
    }

    /// Hotspot under a screen position.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<Hotspot> {
        if self.quit.contains(x, y) {
            return Some(Hotspot::QuitButton);
        }
        if self.check.contains(x, y) {
            return Some(Hotspot::CheckButton);
        }
        if let Some(slot) = self.slots.iter().position(|r| r.contains(x, y)) {
            return Some(Hotspot::Slot(slot));
        }
        self.pool_cells
            .iter()
            .position(|r| r.contains(x, y))
            .map(Hotspot::PoolCell)
    }
}
