//! Player-related mutation outcomes
//!
//! These enums communicate what happened when player state was modified,
//! allowing callers to react appropriately instead of treating idempotent
//! no-ops as errors.

/// Outcome of killing a player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KillOutcome {
    /// Player was alive and is now dead
    Killed,
    /// Player was already dead, no effect
    AlreadyDead,
}

/// Outcome of resurrecting a player (test scaffolding)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResurrectOutcome {
    /// Player was dead and is now alive
    Resurrected,
    /// Player was already alive, no effect
    AlreadyAlive,
}
