extern crate self as wolfmoot_domain;

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod value_objects;

// Re-export the aggregate and its snapshot types
pub use aggregates::{Game, PlayerSnapshot, Snapshot};

// Re-export entities
pub use entities::{LifeStatus, Player, StatusRecord};

pub use error::DomainError;

// Re-export events, the bus, and mutation outcomes
pub use events::{
    EventBus, EventEnvelope, EventSource, GameEvent, GameOutcome, KillOutcome, KillReport,
    ListenerError, PhaseChange, ResurrectOutcome, SubscriptionId,
};

// Re-export ID types
pub use ids::{EventId, GameId};

// Re-export value objects
pub use value_objects::{GamePhase, PlayerName, Regulation, Role, Team, TeamCounts};
