//! Core puzzle logic - pure, deterministic, and testable
//!
//! This crate holds the equation model, the placement rules and the drag &
//! drop state machine. It has **no dependencies** on the terminal, so every
//! rule can be exercised headlessly:
//!
//! - **Deterministic**: the same seed lays out the same pool
//! - **Validated up front**: a malformed set is rejected with a [`ConfigError`]
//!   before any session exists
//! - **Portable**: the terminal front end is just one consumer of [`Game`]
//!
//! # Module Structure
//!
//! - [`term`]: term ids, markup and signs
//! - [`equation`]: equations as two unordered sides
//! - [`config`] / [`equation_set`]: JSON set files and their validation
//! - [`placement`]: the eight-slot equation bar and the check rule
//! - [`pool`]: the grid of free tiles
//! - [`session`]: one play-through (pool, bar, solved equations)
//! - [`interaction`]: per-tile state machine and the [`Game`] driver
//!
//! # Example
//!
//! ```
//! use equatio_core::{CheckOutcome, EquationSet, Location, Session, TermId};
//!
//! let json = r#"{
//!     "terms": [
//!         {"id": "F", "latex": "F"},
//!         {"id": "m", "latex": "m"},
//!         {"id": "a", "latex": "a"}
//!     ],
//!     "equations": [{"id": "newton", "left": ["F"], "right": ["m", "a"]}]
//! }"#;
//! let set = EquationSet::from_json_str(json, "demo").unwrap();
//! let mut session = Session::new(set, 1);
//!
//! // m a = F, written backwards on purpose.
//! for (term, slot) in [("m", 0), ("a", 1), ("F", 4)] {
//!     let from = session.location_of(&TermId::from(term)).unwrap();
//!     assert!(session.relocate(from, Location::Slot(slot)));
//! }
//!
//! assert_eq!(session.check(), CheckOutcome::Matched("newton".into()));
//! assert!(session.is_complete());
//! ```

pub mod config;
pub mod equation;
pub mod equation_set;
pub mod error;
pub mod interaction;
pub mod placement;
pub mod pool;
pub mod rng;
pub mod session;
pub mod term;

pub use equatio_types as types;

// Re-export commonly used types for convenience
pub use config::{EquationConfig, SetConfig, TermConfig};
pub use equation::{Equation, EquationId};
pub use equation_set::{EquationSet, DEFAULT_SET_NAME};
pub use error::{ConfigError, MarkupError};
pub use interaction::{Drag, Game, GameEvent, Phase, PointerInput, TileInput, TileState};
pub use placement::{check, CheckOutcome, SlotAssignment};
pub use pool::Pool;
pub use rng::SimpleRng;
pub use session::{Location, Session};
pub use term::{Markup, Term, TermId};
