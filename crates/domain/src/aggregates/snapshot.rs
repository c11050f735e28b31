//! Snapshot - immutable point-in-time capture of a game
//!
//! Snapshots are the currency of the save/restore contract: a deep,
//! independent copy of everything mutable in a `Game`. Mutating the live
//! game after taking one never affects it. Status histories are not
//! captured; a restored player's history restarts at the restore point.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{GamePhase, PlayerName, Role};

/// Captured state of one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub number: u32,
    pub name: PlayerName,
    pub role: Option<Role>,
    pub is_alive: bool,
}

/// Captured state of one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    players: Vec<PlayerSnapshot>,
    phase: GamePhase,
    round: u32,
    active: bool,
    taken_at: DateTime<Utc>,
}

impl Snapshot {
    pub(crate) fn new(
        players: Vec<PlayerSnapshot>,
        phase: GamePhase,
        round: u32,
        active: bool,
    ) -> Self {
        Self {
            players,
            phase,
            round,
            active,
            taken_at: Utc::now(),
        }
    }

    /// Captured players, in roster order.
    #[inline]
    pub fn players(&self) -> &[PlayerSnapshot] {
        &self.players
    }

    /// Captured phase.
    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Captured round counter.
    #[inline]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Whether the game was active when captured.
    #[inline]
    pub fn active(&self) -> bool {
        self.active
    }

    /// Wall-clock time of the capture.
    #[inline]
    pub fn taken_at(&self) -> DateTime<Utc> {
        self.taken_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;

    fn sample() -> Result<Snapshot, DomainError> {
        Ok(Snapshot::new(
            vec![
                PlayerSnapshot {
                    number: 1,
                    name: PlayerName::new("Ada")?,
                    role: Some(Role::Werewolf),
                    is_alive: true,
                },
                PlayerSnapshot {
                    number: 2,
                    name: PlayerName::new("Brie")?,
                    role: Some(Role::Villager),
                    is_alive: false,
                },
            ],
            GamePhase::Night,
            3,
            true,
        ))
    }

    #[test]
    fn serde_round_trip() {
        let snapshot = sample().unwrap();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"isAlive\""));
        assert!(json.contains("\"takenAt\""));

        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn accessors_expose_the_capture() {
        let snapshot = sample().unwrap();
        assert_eq!(snapshot.players().len(), 2);
        assert_eq!(snapshot.phase(), GamePhase::Night);
        assert_eq!(snapshot.round(), 3);
        assert!(snapshot.active());
    }
}
