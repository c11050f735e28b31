//! Role and team taxonomies
//!
//! Roles form a closed set; a player's team is never stored, it is derived
//! from the role. Adding a role variant forces every consumer to handle it
//! via exhaustive matching.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A hidden role dealt to a player at game start
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Ordinary villager with no special ability
    Villager,
    /// Kills at night, wins by eliminating the village
    Werewolf,
    /// Protects one player from the night attack
    Guard,
    /// Learns each night whether one player is a werewolf
    Seer,
    /// Learns whether the executed player was a werewolf
    Medium,
    /// Human who sides with the werewolves
    Madman,
}

impl Role {
    /// Every role, in quota-table order.
    pub const ALL: [Role; 6] = [
        Role::Villager,
        Role::Werewolf,
        Role::Guard,
        Role::Seer,
        Role::Medium,
        Role::Madman,
    ];

    /// Returns the team this role fights for.
    ///
    /// The madman is human but sides with the werewolves.
    #[inline]
    pub fn team(self) -> Team {
        match self {
            Role::Werewolf | Role::Madman => Team::Werewolves,
            Role::Villager | Role::Guard | Role::Seer | Role::Medium => Team::Village,
        }
    }

    /// Human-readable role name for GM-facing surfaces.
    pub fn display_name(self) -> &'static str {
        match self {
            Role::Villager => "Villager",
            Role::Werewolf => "Werewolf",
            Role::Guard => "Guard",
            Role::Seer => "Seer",
            Role::Medium => "Medium",
            Role::Madman => "Madman",
        }
    }

    /// Wire name used in events and stored regulations.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Villager => "villager",
            Role::Werewolf => "werewolf",
            Role::Guard => "guard",
            Role::Seer => "seer",
            Role::Medium => "medium",
            Role::Madman => "madman",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "villager" => Ok(Role::Villager),
            "werewolf" => Ok(Role::Werewolf),
            "guard" => Ok(Role::Guard),
            "seer" => Ok(Role::Seer),
            "medium" => Ok(Role::Medium),
            "madman" => Ok(Role::Madman),
            other => Err(DomainError::validation(format!("Unknown role: {}", other))),
        }
    }
}

/// One of the two sides a game can be won by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Village,
    Werewolves,
}

impl Team {
    /// The opposing team.
    #[inline]
    pub fn opponent(self) -> Team {
        match self {
            Team::Village => Team::Werewolves,
            Team::Werewolves => Team::Village,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Village => write!(f, "village"),
            Team::Werewolves => write!(f, "werewolves"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod team_mapping {
        use super::*;

        #[test]
        fn werewolf_and_madman_side_with_werewolves() {
            assert_eq!(Role::Werewolf.team(), Team::Werewolves);
            assert_eq!(Role::Madman.team(), Team::Werewolves);
        }

        #[test]
        fn everyone_else_sides_with_the_village() {
            assert_eq!(Role::Villager.team(), Team::Village);
            assert_eq!(Role::Guard.team(), Team::Village);
            assert_eq!(Role::Seer.team(), Team::Village);
            assert_eq!(Role::Medium.team(), Team::Village);
        }

        #[test]
        fn opponent_is_symmetric() {
            assert_eq!(Team::Village.opponent(), Team::Werewolves);
            assert_eq!(Team::Werewolves.opponent(), Team::Village);
        }
    }

    mod parsing {
        use super::*;

        #[test]
        fn round_trips_through_str() {
            for role in Role::ALL {
                let parsed: Role = role.as_str().parse().unwrap();
                assert_eq!(parsed, role);
            }
        }

        #[test]
        fn parse_is_case_insensitive_and_trimmed() {
            assert_eq!(" Werewolf ".parse::<Role>().unwrap(), Role::Werewolf);
            assert_eq!("SEER".parse::<Role>().unwrap(), Role::Seer);
        }

        #[test]
        fn unknown_role_fails_validation() {
            let err = "bard".parse::<Role>().unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
        }
    }

    mod serde_format {
        use super::*;

        #[test]
        fn roles_serialize_to_lowercase() {
            assert_eq!(serde_json::to_string(&Role::Werewolf).unwrap(), "\"werewolf\"");
            assert_eq!(serde_json::to_string(&Role::Madman).unwrap(), "\"madman\"");
        }

        #[test]
        fn teams_serialize_to_lowercase() {
            assert_eq!(serde_json::to_string(&Team::Village).unwrap(), "\"village\"");
            assert_eq!(
                serde_json::to_string(&Team::Werewolves).unwrap(),
                "\"werewolves\""
            );
        }

        #[test]
        fn roles_deserialize_from_wire_names() {
            let role: Role = serde_json::from_str("\"guard\"").unwrap();
            assert_eq!(role, Role::Guard);
        }
    }
}
