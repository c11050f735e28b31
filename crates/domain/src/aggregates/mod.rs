//! Aggregates - consistency boundaries with their own invariants
//!
//! `Game` owns the roster, the phase/round machine, and end-condition
//! detection; `Snapshot` is its immutable point-in-time capture.

pub mod game;
pub mod snapshot;

pub use game::Game;
pub use snapshot::{PlayerSnapshot, Snapshot};
