//! Game phase state machine
//!
//! # Legal Transitions
//!
//! ```text
//! Setup -> DayDiscussion            (only via Game::start_game)
//! DayDiscussion -> DayVote -> Night -> DayDiscussion (loop)
//! ```
//!
//! The Night -> DayDiscussion edge is the round boundary; Setup is never
//! re-entered once left.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The current stage of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// Pre-game: registration and regulation editing
    Setup,
    /// Open table talk
    DayDiscussion,
    /// Execution vote
    DayVote,
    /// Night actions (attack, divination, guard)
    Night,
}

impl GamePhase {
    /// The single legal successor in the day/night cycle.
    ///
    /// Setup has no successor here: it is left only through
    /// `Game::start_game`, never through a phase change.
    #[inline]
    pub fn successor(self) -> Option<GamePhase> {
        match self {
            GamePhase::Setup => None,
            GamePhase::DayDiscussion => Some(GamePhase::DayVote),
            GamePhase::DayVote => Some(GamePhase::Night),
            GamePhase::Night => Some(GamePhase::DayDiscussion),
        }
    }

    /// Returns true if stepping from `self` to its successor starts a new
    /// round (the Night -> DayDiscussion edge).
    #[inline]
    pub fn ends_round(self) -> bool {
        matches!(self, GamePhase::Night)
    }

    /// Returns true while the game is still being set up.
    #[inline]
    pub fn is_setup(self) -> bool {
        matches!(self, GamePhase::Setup)
    }

    /// Human-readable phase name for GM-facing surfaces.
    pub fn display_name(self) -> &'static str {
        match self {
            GamePhase::Setup => "Setup",
            GamePhase::DayDiscussion => "Day (discussion)",
            GamePhase::DayVote => "Day (vote)",
            GamePhase::Night => "Night",
        }
    }

    /// Wire name used in events and snapshots.
    pub fn as_str(self) -> &'static str {
        match self {
            GamePhase::Setup => "setup",
            GamePhase::DayDiscussion => "day_discussion",
            GamePhase::DayVote => "day_vote",
            GamePhase::Night => "night",
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================
