//! Equatio (workspace facade crate).
//!
//! Re-exports the workspace crates as `equatio::{core,input,term,types}` and
//! holds what only the binary needs: launch configuration and logging setup.

pub mod config;
pub mod logging;

pub use equatio_core as core;
pub use equatio_input as input;
pub use equatio_term as term;
pub use equatio_types as types;

pub use config::LaunchConfig;
