//! Value objects for the game core
//!
//! Closed taxonomies (roles, teams, phases), validated newtypes, and the
//! regulation quota. All of these are immutable values; mutation lives in
//! the entities and the `Game` aggregate.

pub mod names;
pub mod phase;
pub mod regulation;
pub mod role;
pub mod team_counts;

pub use names::PlayerName;
pub use phase::GamePhase;
pub use regulation::Regulation;
pub use role::{Role, Team};
pub use team_counts::TeamCounts;
