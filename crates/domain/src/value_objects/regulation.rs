//! Regulation - the role quota for a game
//!
//! A regulation maps each role to its required head-count for a given game
//! size. It is read-only to the game once play begins and is validated
//! against the roster exactly once, at `Game::start_game`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Role;

/// Role quota configuration for one game
///
/// Counts are unsigned, so a negative quota is unrepresentable. Roles with
/// a zero count are dropped rather than stored.
///
/// # Example
///
/// ```
/// use wolfmoot_domain::{Regulation, Role};
///
/// let regulation = Regulation::new()
///     .with_role(Role::Werewolf, 1)
///     .with_role(Role::Seer, 1)
///     .with_role(Role::Villager, 3);
///
/// assert_eq!(regulation.total_players(), 5);
/// assert_eq!(regulation.role_count(Role::Werewolf), 1);
/// assert!(regulation.validate_player_count(5).is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Regulation {
    // BTreeMap keeps the multiset build order deterministic
    roles: BTreeMap<Role, u32>,
}

impl Regulation {
    /// Create an empty regulation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the required count for a role. A count of zero removes the role.
    pub fn with_role(mut self, role: Role, count: u32) -> Self {
        if count == 0 {
            self.roles.remove(&role);
        } else {
            self.roles.insert(role, count);
        }
        self
    }

    /// Returns the required count for a role (zero if absent).
    #[inline]
    pub fn role_count(&self, role: Role) -> u32 {
        self.roles.get(&role).copied().unwrap_or(0)
    }

    /// Iterate over (role, count) pairs in quota-table order.
    pub fn roles(&self) -> impl Iterator<Item = (Role, u32)> + '_ {
        self.roles.iter().map(|(role, count)| (*role, *count))
    }

    /// Total number of players this regulation is sized for.
    pub fn total_players(&self) -> usize {
        self.roles.values().map(|count| *count as usize).sum()
    }

    /// Returns true if no roles are configured.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Expand the quota into one role token per seat, in quota-table order.
    ///
    /// The caller shuffles this multiset before dealing.
    pub fn role_multiset(&self) -> Vec<Role> {
        let mut tokens = Vec::with_capacity(self.total_players());
        for (role, count) in self.roles() {
            for _ in 0..count {
                tokens.push(role);
            }
        }
        tokens
    }

    /// Check this regulation against the registered roster size.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Configuration` if the regulation is empty or
    /// the roster size does not exactly match the quota total.
    pub fn validate_player_count(&self, player_count: usize) -> Result<(), DomainError> {
        if self.is_empty() {
            return Err(DomainError::configuration("Regulation has no roles"));
        }
        let required = self.total_players();
        if player_count != required {
            return Err(DomainError::configuration(format!(
                "{} players registered, regulation needs {}",
                player_count, required
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
