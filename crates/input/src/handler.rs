//! Pointer press/release bookkeeping for terminal environments.
//!
//! Some terminals (and most multiplexers) drop the button-up report when the
//! pointer leaves the window. The tracker keeps the stream balanced: every
//! `Down` is eventually followed by exactly one `Up`.

use arrayvec::ArrayVec;

use crate::types::{PointerEvent, PointerKind};

#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    /// Last position seen while the button is held.
    held_at: Option<(u16, u16)>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw pointer event; returns the balanced events to dispatch.
    ///
    /// - a `Down` while already pressed first yields a synthetic `Up` at the
    ///   last known position
    /// - `Drag` and `Up` without a preceding `Down` are dropped
    pub fn feed(&mut self, event: PointerEvent) -> ArrayVec<PointerEvent, 2> {
        let mut out = ArrayVec::<PointerEvent, 2>::new();

        match event.kind {
            PointerKind::Down => {
                if let Some((x, y)) = self.held_at.take() {
                    out.push(PointerEvent::new(PointerKind::Up, x, y));
                }
                self.held_at = Some((event.x, event.y));
                out.push(event);
            }
            PointerKind::Drag => {
                if self.held_at.is_some() {
                    self.held_at = Some((event.x, event.y));
                    out.push(event);
                }
            }
            PointerKind::Up => {
                if self.held_at.take().is_some() {
                    out.push(event);
                }
            }
        }

        out
    }

    /// Release a held button, e.g. when the terminal loses focus.
    pub fn release(&mut self) -> Option<PointerEvent> {
        self.held_at
            .take()
            .map(|(x, y)| PointerEvent::new(PointerKind::Up, x, y))
    }
}
