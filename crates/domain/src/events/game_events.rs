//! Game-level mutation outcomes
//!
//! Phase changes and kills on an inactive game are deliberate no-ops, not
//! errors: a caller can race end-condition detection (executing the last
//! werewolf and then unconditionally scheduling the night phase). The
//! `IgnoredInactive` variants are that guard; each one is warn-logged
//! where it fires.

use crate::events::GameOutcome;
use crate::value_objects::{GamePhase, Team};

/// Outcome of a phase-change or round-advance request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseChange {
    /// The transition was applied
    Applied {
        from: GamePhase,
        to: GamePhase,
        /// Round after the transition (incremented when a round boundary
        /// was crossed)
        round: u32,
    },
    /// The game is no longer active; nothing changed
    IgnoredInactive,
}

/// Outcome of a kill request against the game roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KillReport {
    /// The player died; `ended` carries the outcome if this death ended
    /// the game
    Died {
        name: String,
        team: Team,
        ended: Option<GameOutcome>,
    },
    /// The player was already dead; nothing changed, no event published
    AlreadyDead,
    /// The game is no longer active; nothing changed
    IgnoredInactive,
}
