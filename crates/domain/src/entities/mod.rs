//! Entities - objects with identity and a lifecycle
//!
//! The only entity in this core is `Player`; everything else is a value
//! object or the `Game` aggregate that owns the players.

pub mod player;

pub use player::{LifeStatus, Player, StatusRecord};
