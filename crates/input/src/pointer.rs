//! Mouse mapping from terminal events to pointer events.

use crate::types::{PointerEvent, PointerKind};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Map a left-button mouse event to a pointer event.
///
/// Other buttons, plain motion and scrolling are ignored.
pub fn map_mouse_event(mouse: MouseEvent) -> Option<PointerEvent> {
    let kind = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => PointerKind::Down,
        MouseEventKind::Drag(MouseButton::Left) => PointerKind::Drag,
        MouseEventKind::Up(MouseButton::Left) => PointerKind::Up,
        _ => return None,
    };
    Some(PointerEvent::new(kind, mouse.column, mouse.row))
}
