//! Alive head-counts per team

use serde::{Deserialize, Serialize};

use crate::value_objects::Team;

/// Count of alive players on each team
///
/// Derived by the game from the roster; embedded in the game-ended event
/// payload so observers see the final tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamCounts {
    pub village: u32,
    pub werewolves: u32,
}

impl TeamCounts {
    /// Count for a specific team.
    #[inline]
    pub fn for_team(&self, team: Team) -> u32 {
        match team {
            Team::Village => self.village,
            Team::Werewolves => self.werewolves,
        }
    }

    /// Total alive players across both teams.
    #[inline]
    pub fn total_alive(&self) -> u32 {
        self.village + self.werewolves
    }

    /// Record one alive player for a team.
    pub(crate) fn record(&mut self, team: Team) {
        match team {
            Team::Village => self.village += 1,
            Team::Werewolves => self.werewolves += 1,
        }
    }
}
