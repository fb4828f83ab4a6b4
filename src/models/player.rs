//! Roster players for the two competing teams.

use crate::models::game::Team;
use serde::{Deserialize, Serialize};

/// Roster slot id within a team: 1-6. Slots 1-3 are women, 4-6 are men.
pub type PlayerId = u8;

/// Players per team roster.
pub const ROSTER_SIZE: usize = 6;

/// Women occupy the first three roster slots, men the last three.
pub const WOMEN_PER_TEAM: usize = 3;

/// Player gender (decides which doubles disciplines a slot plays).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Woman,
    Man,
}

/// A player on one team's roster. Fixed once the tournament is created.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamPlayer {
    pub id: PlayerId,
    pub name: String,
    pub gender: Gender,
    pub team: Team,
}

impl TeamPlayer {
    /// Build the player for a 1-based roster slot; gender follows the slot range.
    pub fn for_slot(slot: PlayerId, name: impl Into<String>, team: Team) -> Self {
        let gender = if (slot as usize) <= WOMEN_PER_TEAM {
            Gender::Woman
        } else {
            Gender::Man
        };
        Self {
            id: slot,
            name: name.into(),
            gender,
            team,
        }
    }
}
