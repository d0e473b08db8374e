//! Terminal input module.
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`], left-button mouse events into
//! [`crate::types::PointerEvent`], and provides a [`PointerTracker`] that keeps
//! press/release pairs balanced on terminals that drop button-up reports.

pub mod handler;
pub mod map;
pub mod pointer;

pub use equatio_types as types;

pub use handler::PointerTracker;
pub use map::{handle_key_event, should_quit};
pub use pointer::map_mouse_event;
