//! Terminal front end for the equation puzzle.
//!
//! A small, game-oriented rendering layer: the board is drawn into a plain
//! framebuffer and flushed to the terminal as diffs, without any widget
//! toolkit in between.
//!
//! - [`layout`] places the pool, the equation bar and the buttons, and maps
//!   screen positions back to [`Hotspot`](crate::types::Hotspot)s
//! - [`markup`] turns term markup into a line of Unicode glyphs
//! - [`board_view`] renders a [`Game`](crate::core::Game) (pure, testable)
//! - [`renderer`] owns the real terminal

pub mod board_view;
pub mod fb;
pub mod layout;
pub mod markup;
pub mod renderer;

pub use equatio_core as core;
pub use equatio_types as types;

pub use board_view::BoardView;
pub use fb::{Cell, CellStyle, FrameBuffer, Rect, Rgb};
pub use layout::{BoardLayout, Viewport};
pub use markup::{render_markup, term_label};
pub use renderer::{encode_frame, FrameStats, TerminalRenderer};
