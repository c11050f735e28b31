//! Game Events
//!
//! Coarse-grained events representing significant state changes in the
//! game. Each mutation on the `Game` aggregate publishes one or more of
//! these to the injected `EventBus`; observers (logging, a future UI)
//! subscribe there.
//!
//! ## Mutation Outcomes
//!
//! The `game_events` and `player_events` submodules contain return types
//! from aggregate and entity mutations, communicating what happened when
//! state was modified.

pub mod bus;
pub mod game_events;
pub mod player_events;

pub use bus::{EventBus, ListenerError, SubscriptionId};
pub use game_events::{KillReport, PhaseChange};
pub use player_events::{KillOutcome, ResurrectOutcome};

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::EventId;
use crate::value_objects::{GamePhase, Role, Team, TeamCounts};

/// How a finished game ended
///
/// Simultaneous elimination of both teams is a draw, a distinct outcome
/// that never collapses into a winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameOutcome {
    VillageWins,
    WerewolvesWin,
    Draw,
}

impl GameOutcome {
    /// The winning team, if the game was not a draw.
    #[inline]
    pub fn winning_team(self) -> Option<Team> {
        match self {
            GameOutcome::VillageWins => Some(Team::Village),
            GameOutcome::WerewolvesWin => Some(Team::Werewolves),
            GameOutcome::Draw => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::VillageWins => write!(f, "village wins"),
            GameOutcome::WerewolvesWin => write!(f, "werewolves win"),
            GameOutcome::Draw => write!(f, "draw"),
        }
    }
}

/// Game event for significant state changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameEvent {
    // Registration
    PlayerAdded {
        name: String,
        number: u32,
    },
    PlayerRemoved {
        name: String,
        number: u32,
    },
    RegulationChanged {
        total_players: u32,
    },

    // Game progression
    GameStarted {
        player_count: u32,
        round: u32,
        phase: GamePhase,
    },
    RoleAssigned {
        name: String,
        role: Role,
    },
    PhaseChanged {
        from: GamePhase,
        to: GamePhase,
        round: u32,
    },
    RoundAdvanced {
        round: u32,
    },
    PlayerDied {
        name: String,
        team: Team,
        round: u32,
        phase: GamePhase,
    },
    GameEnded {
        outcome: GameOutcome,
        final_round: u32,
        counts: TeamCounts,
    },
    GameReset,
}

impl GameEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::PlayerAdded { .. } => "player_added",
            Self::PlayerRemoved { .. } => "player_removed",
            Self::RegulationChanged { .. } => "regulation_changed",
            Self::GameStarted { .. } => "game_started",
            Self::RoleAssigned { .. } => "role_assigned",
            Self::PhaseChanged { .. } => "phase_changed",
            Self::RoundAdvanced { .. } => "round_advanced",
            Self::PlayerDied { .. } => "player_died",
            Self::GameEnded { .. } => "game_ended",
            Self::GameReset => "game_reset",
        }
    }
}

/// The component that published an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventSource {
    Game,
    Player,
}

impl fmt::Display for EventSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventSource::Game => write!(f, "game"),
            EventSource::Player => write!(f, "player"),
        }
    }
}

/// A published event plus its delivery metadata
///
/// Envelopes are value objects: once published they are never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventEnvelope {
    pub event_id: EventId,
    pub source: EventSource,
    pub at: DateTime<Utc>,
    pub event: GameEvent,
}

impl EventEnvelope {
    /// Wrap an event for publication, stamping id and time.
    pub fn new(source: EventSource, event: GameEvent) -> Self {
        Self {
            event_id: EventId::new(),
            source,
            at: Utc::now(),
            event,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_types_are_stable_wire_names() {
        let event = GameEvent::PhaseChanged {
            from: GamePhase::DayVote,
            to: GamePhase::Night,
            round: 2,
        };
        assert_eq!(event.event_type(), "phase_changed");
        assert_eq!(GameEvent::GameReset.event_type(), "game_reset");
    }

    #[test]
    fn outcome_reports_the_winning_team() {
        assert_eq!(GameOutcome::VillageWins.winning_team(), Some(Team::Village));
        assert_eq!(
            GameOutcome::WerewolvesWin.winning_team(),
            Some(Team::Werewolves)
        );
        assert_eq!(GameOutcome::Draw.winning_team(), None);
    }

    #[test]
    fn envelope_serializes_with_camel_case_payload() {
        let envelope = EventEnvelope::new(
            EventSource::Game,
            GameEvent::PlayerDied {
                name: "Ada".to_string(),
                team: Team::Village,
                round: 1,
                phase: GamePhase::Night,
            },
        );
        let json = serde_json::to_string(&envelope).unwrap();
        assert!(json.contains("\"eventId\""));
        assert!(json.contains("\"playerDied\""));
        assert!(json.contains("\"village\""));

        let back: EventEnvelope = serde_json::from_str(&json).unwrap();
        assert_eq!(back, envelope);
    }
}
