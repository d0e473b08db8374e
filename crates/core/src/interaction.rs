//! Interaction module - drag & drop as an explicit state machine
//!
//! Each tile is either at rest ([`TileState::InPool`], [`TileState::InSlot`])
//! or held by the pointer ([`TileState::Dragging`]). Transitions are pure: a
//! dragged tile stays attached to its origin until a release lands on a valid
//! target, so there is never a moment where the tile lives nowhere.
//!
//! [`Game`] feeds pointer and keyboard input through that machine and applies
//! the result to its [`Session`]. It does no I/O, so the whole loop can be
//! driven from tests without a terminal.

use crate::equation::EquationId;
use crate::placement::CheckOutcome;
use crate::session::{Location, Session};
use crate::term::TermId;
use crate::types::{GameAction, Hotspot, PointerEvent, PointerKind};

/// Per-tile state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileState {
    InPool(usize),
    InSlot(usize),
    Dragging { origin: Location, x: u16, y: u16 },
}

/// Input consumed by [`TileState::next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileInput {
    Press { x: u16, y: u16 },
    Move { x: u16, y: u16 },
    /// Pointer released over `target` (`None`: outside every drop target).
    Release { target: Option<Location> },
    Cancel,
}

impl TileState {
    /// Resting state at `location`.
    pub fn at(location: Location) -> Self {
        match location {
            Location::Pool(cell) => TileState::InPool(cell),
            Location::Slot(slot) => TileState::InSlot(slot),
        }
    }

    /// Resting location, `None` while dragging.
    pub fn location(&self) -> Option<Location> {
        match *self {
            TileState::InPool(cell) => Some(Location::Pool(cell)),
            TileState::InSlot(slot) => Some(Location::Slot(slot)),
            TileState::Dragging { .. } => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, TileState::Dragging { .. })
    }

    /// Apply one input.
    ///
    /// A release lands on `target` only when `is_free(target)` holds or the
    /// target is the origin itself; every other release (occupied, outside,
    /// cancelled) goes back to the origin. Inputs that make no sense in the
    /// current state leave it unchanged.
    pub fn next(self, input: TileInput, is_free: impl Fn(Location) -> bool) -> Self {
        match (self, input) {
            (TileState::InPool(cell), TileInput::Press { x, y }) => TileState::Dragging {
                origin: Location::Pool(cell),
                x,
                y,
            },
            (TileState::InSlot(slot), TileInput::Press { x, y }) => TileState::Dragging {
                origin: Location::Slot(slot),
                x,
                y,
            },
            (TileState::Dragging { origin, .. }, TileInput::Move { x, y }) => {
                TileState::Dragging { origin, x, y }
            }
            (TileState::Dragging { origin, .. }, TileInput::Release { target }) => match target {
                Some(target) if target == origin || is_free(target) => TileState::at(target),
                _ => TileState::at(origin),
            },
            (TileState::Dragging { origin, .. }, TileInput::Cancel) => TileState::at(origin),
            (state, _) => state,
        }
    }
}

/// Tile currently held by the pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drag {
    pub term: TermId,
    pub origin: Location,
    /// Pointer position in screen cells.
    pub x: u16,
    pub y: u16,
}

impl Drag {
    fn state(&self) -> TileState {
        TileState::Dragging {
            origin: self.origin,
            x: self.x,
            y: self.y,
        }
    }
}

/// Pointer event plus whatever hotspot lies under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerInput {
    pub event: PointerEvent,
    pub target: Option<Hotspot>,
}

impl PointerInput {
    pub fn new(event: PointerEvent, target: Option<Hotspot>) -> Self {
        Self { event, target }
    }
}

/// What an input did, for the status line and the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    PickedUp(TermId),
    Moved {
        term: TermId,
        from: Location,
        to: Location,
    },
    /// A drag ended without moving the tile.
    Returned { term: TermId, to: Location },
    Checked(CheckOutcome),
    /// The last equation was solved.
    Completed(EquationId),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Complete,
    Quit,
}

/// Session plus the pointer interaction on top of it.
#[derive(Debug, Clone)]
pub struct Game {
    session: Session,
    drag: Option<Drag>,
    phase: Phase,
}

impl Game {
    pub fn new(session: Session) -> Self {
        let phase = if session.is_complete() {
            Phase::Complete
        } else {
            Phase::Playing
        };
        Self {
            session,
            drag: None,
            phase,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn drag(&self) -> Option<&Drag> {
        self.drag.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// False once the player quit.
    pub fn is_running(&self) -> bool {
        self.phase != Phase::Quit
    }

    /// State of a tile; `None` for terms of solved equations.
    pub fn tile_state(&self, term: &TermId) -> Option<TileState> {
        if let Some(drag) = self.drag.as_ref().filter(|d| &d.term == term) {
            return Some(drag.state());
        }
        self.session.location_of(term).map(TileState::at)
    }

    pub fn handle_pointer(&mut self, input: PointerInput) -> Option<GameEvent> {
        if self.phase == Phase::Quit {
            return None;
        }
        let PointerEvent { kind, x, y } = input.event;

        match kind {
            PointerKind::Down => match input.target? {
                Hotspot::QuitButton => self.quit(),
                Hotspot::CheckButton => self.check(),
                hotspot => self.pick_up(Location::from_hotspot(hotspot)?, x, y),
            },
            PointerKind::Drag => {
                let drag = self.drag.as_mut()?;
                if let TileState::Dragging { x, y, .. } =
                    drag.state().next(TileInput::Move { x, y }, |_| false)
                {
                    drag.x = x;
                    drag.y = y;
                }
                None
            }
            PointerKind::Up => {
                let drag = self.drag.take()?;
                let target = input.target.and_then(Location::from_hotspot);
                Some(self.finish_drag(drag, TileInput::Release { target }))
            }
        }
    }

    pub fn apply_action(&mut self, action: GameAction) -> Option<GameEvent> {
        if self.phase == Phase::Quit {
            return None;
        }
        match action {
            GameAction::Check => self.check(),
            GameAction::CancelDrag => {
                let drag = self.drag.take()?;
                Some(self.finish_drag(drag, TileInput::Cancel))
            }
            GameAction::Quit => self.quit(),
        }
    }

    fn pick_up(&mut self, location: Location, x: u16, y: u16) -> Option<GameEvent> {
        if self.phase != Phase::Playing || self.drag.is_some() {
            return None;
        }
        let term = self.session.term_at(location)?.clone();
        let TileState::Dragging { origin, x, y } =
            TileState::at(location).next(TileInput::Press { x, y }, |_| false)
        else {
            return None;
        };

        log::trace!("picked up {} from {}", term, origin);
        self.drag = Some(Drag {
            term: term.clone(),
            origin,
            x,
            y,
        });
        Some(GameEvent::PickedUp(term))
    }

    fn finish_drag(&mut self, drag: Drag, input: TileInput) -> GameEvent {
        let session = &self.session;
        let landed = drag
            .state()
            .next(input, |loc| session.is_free(loc))
            .location()
            .unwrap_or(drag.origin);

        if landed != drag.origin && self.session.relocate(drag.origin, landed) {
            GameEvent::Moved {
                term: drag.term,
                from: drag.origin,
                to: landed,
            }
        } else {
            log::trace!("{} returned to {}", drag.term, drag.origin);
            GameEvent::Returned {
                term: drag.term,
                to: drag.origin,
            }
        }
    }

    fn check(&mut self) -> Option<GameEvent> {
        if self.phase != Phase::Playing {
            return None;
        }
        if let Some(drag) = self.drag.take() {
            self.finish_drag(drag, TileInput::Cancel);
        }

        match self.session.check() {
            CheckOutcome::Incomplete => None,
            CheckOutcome::Matched(id) if self.session.is_complete() => {
                self.phase = Phase::Complete;
                log::info!("all {} equations solved", self.session.set().len());
                Some(GameEvent::Completed(id))
            }
            outcome => Some(GameEvent::Checked(outcome)),
        }
    }

    fn quit(&mut self) -> Option<GameEvent> {
        self.drag = None;
        self.phase = Phase::Quit;
        log::info!("quit");
        Some(GameEvent::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn never(_: Location) -> bool {
        false
    }

    fn always(_: Location) -> bool {
        true
    }

    #[test]
    fn press_starts_dragging_from_rest() {
        let s = TileState::InPool(3).next(TileInput::Press { x: 4, y: 5 }, never);
        assert_eq!(
            s,
            TileState::Dragging {
                origin: Location::Pool(3),
                x: 4,
                y: 5
            }
        );
        assert_eq!(s.location(), None);
    }

    #[test]
    fn release_on_free_target_lands_there() {
        let s = TileState::InPool(0)
            .next(TileInput::Press { x: 0, y: 0 }, never)
            .next(TileInput::Move { x: 9, y: 9 }, never)
            .next(
                TileInput::Release {
                    target: Some(Location::Slot(2)),
                },
                always,
            );
        assert_eq!(s, TileState::InSlot(2));
    }

    #[test]
    fn release_on_occupied_or_nothing_returns_to_origin() {
        let dragging = TileState::InSlot(6).next(TileInput::Press { x: 1, y: 1 }, never);
        let occupied = dragging.next(
            TileInput::Release {
                target: Some(Location::Pool(1)),
            },
            never,
        );
        assert_eq!(occupied, TileState::InSlot(6));

        let outside = dragging.next(TileInput::Release { target: None }, always);
        assert_eq!(outside, TileState::InSlot(6));

        let cancelled = dragging.next(TileInput::Cancel, always);
        assert_eq!(cancelled, TileState::InSlot(6));
    }

    #[test]
    fn release_on_origin_is_allowed_even_though_occupied() {
        let s = TileState::InSlot(1)
            .next(TileInput::Press { x: 0, y: 0 }, never)
            .next(
                TileInput::Release {
                    target: Some(Location::Slot(1)),
                },
                never,
            );
        assert_eq!(s, TileState::InSlot(1));
    }

    #[test]
    fn inputs_out_of_place_are_ignored() {
        assert_eq!(
            TileState::InPool(2).next(TileInput::Move { x: 1, y: 1 }, always),
            TileState::InPool(2)
        );
        assert_eq!(
            TileState::InSlot(0).next(
                TileInput::Release {
                    target: Some(Location::Slot(3))
                },
                always
            ),
            TileState::InSlot(0)
        );
        assert_eq!(
            TileState::InPool(2).next(TileInput::Cancel, always),
            TileState::InPool(2)
        );
    }
}
