//! Player entity - seat, identity, hidden role, and survival status
//!
//! Players are created at registration, receive a role exactly once when
//! the game starts, and die at most once. Every survival change is
//! appended to an audit history; the history is never rewritten.

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::events::{KillOutcome, ResurrectOutcome};
use crate::value_objects::{GamePhase, PlayerName, Role, Team};

/// Alive/dead marker recorded in the status history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeStatus {
    Alive,
    Dead,
}

/// One entry in a player's append-only status history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRecord {
    /// Round in which the change happened (0 during setup)
    pub round: u32,
    /// Phase in which the change happened
    pub phase: GamePhase,
    /// The status after the change
    pub status: LifeStatus,
    /// Wall-clock time of the change
    pub at: DateTime<Utc>,
}

/// A seated participant in one game
///
/// # Invariants
///
/// - `number` is immutable after creation and unique within a game
///   (uniqueness is the game's responsibility)
/// - `role` is assigned at most once per game; only the game may clear it
///   when returning to setup
/// - `status_history` is append-only and readable but never writable from
///   outside
#[derive(Debug, Clone)]
pub struct Player {
    // Identity
    number: u32,
    name: PlayerName,

    // Hidden role, unassigned until distribution runs
    role: Option<Role>,

    // Survival
    alive: bool,
    status_history: Vec<StatusRecord>,
}

impl Player {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a new alive, roleless player on the given seat.
    pub fn new(number: u32, name: PlayerName) -> Self {
        let mut player = Self {
            number,
            name,
            role: None,
            alive: true,
            status_history: Vec::new(),
        };
        player.record_status(0, GamePhase::Setup);
        player
    }

    /// Rebuild a player from snapshot data.
    ///
    /// The history starts fresh with one entry describing the restored
    /// status at the restore point; snapshots do not carry history.
    pub(crate) fn restored(
        number: u32,
        name: PlayerName,
        role: Option<Role>,
        alive: bool,
        round: u32,
        phase: GamePhase,
    ) -> Self {
        let mut player = Self {
            number,
            name,
            role,
            alive,
            status_history: Vec::new(),
        };
        player.record_status(round, phase);
        player
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    /// Returns the player's stable seat number.
    #[inline]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Returns the player's display name.
    #[inline]
    pub fn name(&self) -> &PlayerName {
        &self.name
    }

    /// Returns the player's role, if one has been dealt.
    #[inline]
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Returns the team derived from the player's role.
    #[inline]
    pub fn team(&self) -> Option<Team> {
        self.role.map(Role::team)
    }

    /// Returns true while the player is alive.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Returns the append-only status history, oldest first.
    #[inline]
    pub fn status_history(&self) -> &[StatusRecord] {
        &self.status_history
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Deal a role to this player.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidState` if the player is dead or already
    /// holds a role. Re-dealing during setup goes through the game, which
    /// clears roles first.
    pub fn assign_role(&mut self, role: Role) -> Result<(), DomainError> {
        if !self.alive {
            return Err(DomainError::invalid_state(format!(
                "Cannot assign a role to dead player {}",
                self.name
            )));
        }
        if let Some(current) = self.role {
            return Err(DomainError::invalid_state(format!(
                "Player {} already holds role {}",
                self.name, current
            )));
        }
        self.role = Some(role);
        Ok(())
    }

    /// Clear the role ahead of a fresh deal. Setup-time only; the game
    /// enforces that.
    pub(crate) fn clear_role(&mut self) {
        self.role = None;
    }

    /// Return the player to a pre-game state: alive, roleless, history
    /// restarted. Used by the game's reset.
    pub(crate) fn reset_for_new_game(&mut self) {
        self.role = None;
        self.alive = true;
        self.status_history.clear();
        self.record_status(0, GamePhase::Setup);
    }

    /// Mark the player dead.
    ///
    /// Idempotent: killing a dead player reports `AlreadyDead` and appends
    /// nothing.
    pub fn kill(&mut self, round: u32, phase: GamePhase) -> KillOutcome {
        if !self.alive {
            return KillOutcome::AlreadyDead;
        }
        self.alive = false;
        self.record_status(round, phase);
        KillOutcome::Killed
    }

    /// Bring the player back to life.
    ///
    /// Test scaffolding only; normal play never revives anyone.
    pub fn resurrect(&mut self, round: u32, phase: GamePhase) -> ResurrectOutcome {
        if self.alive {
            return ResurrectOutcome::AlreadyAlive;
        }
        self.alive = true;
        self.record_status(round, phase);
        ResurrectOutcome::Resurrected
    }

    fn record_status(&mut self, round: u32, phase: GamePhase) {
        let status = if self.alive {
            LifeStatus::Alive
        } else {
            LifeStatus::Dead
        };
        self.status_history.push(StatusRecord {
            round,
            phase,
            status,
            at: Utc::now(),
        });
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str) -> Player {
        Player::new(1, PlayerName::new(name).unwrap())
    }

    mod construction {
        use super::*;

        #[test]
        fn new_player_is_alive_and_roleless() {
            let player = player("Ada");
            assert_eq!(player.number(), 1);
            assert_eq!(player.name().as_str(), "Ada");
            assert!(player.is_alive());
            assert_eq!(player.role(), None);
            assert_eq!(player.team(), None);
        }

        #[test]
        fn history_opens_with_an_alive_record() {
            let player = player("Ada");
            let history = player.status_history();
            assert_eq!(history.len(), 1);
            assert_eq!(history[0].status, LifeStatus::Alive);
            assert_eq!(history[0].round, 0);
            assert_eq!(history[0].phase, GamePhase::Setup);
        }
    }

    mod role_assignment {
        use super::*;

        #[test]
        fn role_and_team_derive_after_assignment() {
            let mut player = player("Ada");
            player.assign_role(Role::Madman).unwrap();
            assert_eq!(player.role(), Some(Role::Madman));
            assert_eq!(player.team(), Some(Team::Werewolves));
        }

        #[test]
        fn second_assignment_is_an_invalid_state() {
            let mut player = player("Ada");
            player.assign_role(Role::Villager).unwrap();
            let err = player.assign_role(Role::Seer).unwrap_err();
            assert!(matches!(err, DomainError::InvalidState(_)));
            assert_eq!(player.role(), Some(Role::Villager));
        }

        #[test]
        fn dead_players_cannot_receive_a_role() {
            let mut player = player("Ada");
            player.kill(1, GamePhase::Night);
            let err = player.assign_role(Role::Villager).unwrap_err();
            assert!(matches!(err, DomainError::InvalidState(_)));
        }

        #[test]
        fn clearing_allows_a_fresh_deal() {
            let mut player = player("Ada");
            player.assign_role(Role::Villager).unwrap();
            player.clear_role();
            assert!(player.assign_role(Role::Seer).is_ok());
        }
    }

    mod survival {
        use super::*;

        #[test]
        fn kill_flips_alive_and_appends_history() {
            let mut player = player("Ada");
            let outcome = player.kill(2, GamePhase::DayVote);

            assert_eq!(outcome, KillOutcome::Killed);
            assert!(!player.is_alive());
            let last = player.status_history().last().unwrap();
            assert_eq!(last.status, LifeStatus::Dead);
            assert_eq!(last.round, 2);
            assert_eq!(last.phase, GamePhase::DayVote);
        }

        #[test]
        fn kill_is_idempotent() {
            let mut player = player("Ada");
            player.kill(1, GamePhase::Night);
            let before = player.status_history().len();

            let outcome = player.kill(1, GamePhase::Night);
            assert_eq!(outcome, KillOutcome::AlreadyDead);
            assert_eq!(player.status_history().len(), before);
        }

        #[test]
        fn resurrect_restores_life_for_test_setups() {
            let mut player = player("Ada");
            player.kill(1, GamePhase::Night);
            assert_eq!(
                player.resurrect(1, GamePhase::Night),
                ResurrectOutcome::Resurrected
            );
            assert!(player.is_alive());
            assert_eq!(
                player.resurrect(1, GamePhase::Night),
                ResurrectOutcome::AlreadyAlive
            );
        }
    }
}
