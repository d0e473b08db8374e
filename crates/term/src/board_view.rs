//! BoardView: maps a [`Game`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::collections::HashMap;

use crate::core::{CheckOutcome, EquationSet, Game, Phase, TermId};
use crate::fb::{CellStyle, FrameBuffer, Rect, Rgb};
use crate::layout::{BoardLayout, CHECK_LABEL, QUIT_LABEL, TILE_H, TILE_W};
use crate::markup::term_label;

const BG: Rgb = Rgb::new(30, 30, 40);
const PANEL: Rgb = Rgb::new(0, 0, 0);
const TILE_BG: Rgb = Rgb::new(60, 60, 80);
const DRAG_BG: Rgb = Rgb::new(90, 90, 130);
const OK: Rgb = Rgb::new(0, 200, 0);
const ERR: Rgb = Rgb::new(230, 60, 60);

/// Terminal renderer for the puzzle board.
///
/// Tile labels are rendered once from the set's markup, not every frame.
pub struct BoardView {
    title: String,
    labels: HashMap<TermId, String>,
}

impl BoardView {
    pub fn new(set: &EquationSet) -> Self {
        let labels = set
            .all_terms()
            .map(|term| (term.id().clone(), term_label(term)))
            .collect();
        Self {
            title: format!("Equatio · {}", set.name()),
            labels,
        }
    }

    /// Rendered label of `term`, or its raw id when the set does not know it.
    pub fn label<'a>(&'a self, term: &'a TermId) -> &'a str {
        self.labels
            .get(term)
            .map(String::as_str)
            .unwrap_or_else(|| term.as_str())
    }

    /// Render the game into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// layout's viewport.
    pub fn render_into(&self, game: &Game, layout: &BoardLayout, fb: &mut FrameBuffer) {
        let viewport = layout.viewport;
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(Rgb::new(220, 220, 220), BG).into_cell(' '));

        if !layout.fits() {
            let (w, h) = layout.required_size();
            let msg = format!("Terminal too small: need {}x{}", w, h);
            let style = CellStyle::new(Rgb::new(255, 255, 255), BG).bold();
            fb.put_str_centered(Rect::new(0, 0, viewport.width, viewport.height), &msg, style);
            return;
        }

        self.draw_header(fb, layout);
        self.draw_pool(fb, game, layout);
        self.draw_bar(fb, game, layout);
        self.draw_status(fb, game, layout);

        if let Some(drag) = game.drag() {
            let rect = Rect::new(0, 0, TILE_W, TILE_H).centered_at(drag.x, drag.y);
            let style = CellStyle::new(Rgb::new(255, 255, 255), DRAG_BG).bold();
            self.draw_tile(fb, rect, self.label(&drag.term), style);
        }

        if game.phase() == Phase::Complete {
            self.draw_overlay(fb, layout, game);
        }
    }

    fn draw_header(&self, fb: &mut FrameBuffer, layout: &BoardLayout) {
        let header = CellStyle::new(Rgb::new(255, 255, 255), PANEL);
        fb.fill_rect(layout.header, ' ', header);
        fb.put_str_clipped(1, 0, &self.title, layout.quit.x.saturating_sub(2), header.bold());
        let quit = CellStyle::new(Rgb::new(255, 255, 255), ERR).bold();
        fb.put_str(layout.quit.x, layout.quit.y, QUIT_LABEL, quit);
    }

    fn draw_pool(&self, fb: &mut FrameBuffer, game: &Game, layout: &BoardLayout) {
        let pool = game.session().pool();
        let empty = CellStyle::new(Rgb::new(90, 90, 100), BG).dim();

        for (cell, &rect) in layout.pool_cells.iter().enumerate() {
            match pool.get(cell) {
                Some(term) => {
                    let style = tile_style(is_dragged(game, term));
                    self.draw_tile(fb, rect, self.label(term), style);
                }
                None => fb.draw_frame(rect, empty),
            }
        }
    }

    fn draw_bar(&self, fb: &mut FrameBuffer, game: &Game, layout: &BoardLayout) {
        let slots = game.session().slots();
        let empty = CellStyle::new(Rgb::new(160, 160, 160), BG);

        for (slot, &rect) in layout.slots.iter().enumerate() {
            match slots.get(slot) {
                Some(term) => {
                    let style = tile_style(is_dragged(game, term));
                    self.draw_tile(fb, rect, self.label(term), style);
                }
                None => fb.draw_frame(rect, empty),
            }
        }

        let bold = CellStyle::new(Rgb::new(255, 255, 255), BG).bold();
        fb.put_str_centered(layout.equals, "=", bold);
        let check = CellStyle::new(Rgb::new(255, 255, 255), OK).bold();
        fb.put_str(layout.check.x, layout.check.y, CHECK_LABEL, check);
    }

    fn draw_status(&self, fb: &mut FrameBuffer, game: &Game, layout: &BoardLayout) {
        let session = game.session();
        let (solved, total) = session.progress();
        let text = CellStyle::new(Rgb::new(220, 220, 220), PANEL);
        let y = layout.status.y;
        fb.fill_rect(layout.status, ' ', text);

        let progress = format!("Solved {}/{}", solved, total);
        fb.put_str(1, y, &progress, text.bold());
        let mut x = 1 + progress.chars().count() as u16 + 3;

        match session.last_outcome() {
            Some(CheckOutcome::Matched(id)) => {
                let name = session
                    .set()
                    .equation(id)
                    .map(|e| e.name())
                    .unwrap_or(id.as_str());
                let msg = format!("✓ {}", name);
                fb.put_str(x, y, &msg, CellStyle::new(OK, PANEL).bold());
                x += msg.chars().count() as u16 + 3;
            }
            Some(CheckOutcome::NoMatch) => {
                let msg = "✗ no match";
                fb.put_str(x, y, msg, CellStyle::new(ERR, PANEL).bold());
                x += msg.chars().count() as u16 + 3;
            }
            Some(CheckOutcome::Incomplete) | None => {}
        }

        let hint = "drag tiles · c check · esc cancel · q quit";
        let hint_w = hint.chars().count() as u16;
        if x + hint_w < layout.status.right() {
            fb.put_str(layout.status.right() - hint_w - 1, y, hint, text.dim());
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, layout: &BoardLayout, game: &Game) {
        let (_, total) = game.session().progress();
        let line1 = format!("All {} equations solved!", total);
        let line2 = "press q to quit";
        let w = (line1.chars().count() as u16 + 4).min(layout.viewport.width);
        let rect = Rect::new(0, 0, w, 5)
            .centered_at(layout.viewport.width / 2, layout.viewport.height / 2);

        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL).bold();
        fb.fill_rect(rect, ' ', style);
        fb.draw_frame(rect, CellStyle::new(OK, PANEL));
        fb.put_str_centered(Rect::new(rect.x, rect.y + 1, rect.w, 1), &line1, style);
        fb.put_str_centered(Rect::new(rect.x, rect.y + 3, rect.w, 1), line2, style.dim());
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, rect: Rect, label: &str, style: CellStyle) {
        fb.fill_rect(rect, ' ', style);
        fb.draw_frame(rect, style);
        let inner = Rect::new(rect.x + 1, rect.y, rect.w.saturating_sub(2), rect.h);
        fb.put_str_centered(inner, label, style);
    }
}

/// The pointer holds this tile; its resting place is drawn dimmed.
fn is_dragged(game: &Game, term: &TermId) -> bool {
    game.tile_state(term).is_some_and(|state| state.is_dragging())
}

fn tile_style(dragged: bool) -> CellStyle {
    let style = CellStyle::new(Rgb::new(240, 240, 240), TILE_BG);
    if dragged {
        style.dim()
    } else {
        style.bold()
    }
}
