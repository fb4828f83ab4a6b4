//! Match, SetScore, and Team for the 9-match fixture.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// Fixture match id: 1-9, fixed at creation, doubles as the display order.
pub type MatchId = u8;

/// One of the two competing teams.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    One,
    Two,
}

impl Team {
    /// 1 or 2, for messages and display.
    pub fn number(self) -> u8 {
        match self {
            Team::One => 1,
            Team::Two => 2,
        }
    }
}

/// Discipline of a fixture match.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    MixedDoubles,
    MensDoubles,
    WomensDoubles,
}

/// Which of a match's two sets a score submission targets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SetNumber {
    First,
    Second,
}

impl SetNumber {
    /// Convert the wire representation (1 or 2); anything else is rejected.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(SetNumber::First),
            2 => Some(SetNumber::Second),
            _ => None,
        }
    }
}

/// A recorded set. Only built from a validated score pair, so the winner is always known.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SetScore {
    pub team1_score: u32,
    pub team2_score: u32,
    pub winner: Team,
}

/// A single fixture match: one pair per team, best of two sets.
/// Pairs are roster slot ids; type and pairings never change after creation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub match_type: MatchType,
    pub team1_players: [PlayerId; 2],
    pub team2_players: [PlayerId; 2],
    pub set1: Option<SetScore>,
    pub set2: Option<SetScore>,
    /// True exactly when both sets are present.
    pub completed: bool,
    /// Present exactly when completed.
    pub match_winner: Option<Team>,
}

impl GameMatch {
    pub fn new(
        id: MatchId,
        match_type: MatchType,
        team1_players: [PlayerId; 2],
        team2_players: [PlayerId; 2],
    ) -> Self {
        Self {
            id,
            match_type,
            team1_players,
            team2_players,
            set1: None,
            set2: None,
            completed: false,
            match_winner: None,
        }
    }

    /// The pair fielded by the given team.
    pub fn pair(&self, team: Team) -> [PlayerId; 2] {
        match team {
            Team::One => self.team1_players,
            Team::Two => self.team2_players,
        }
    }

    /// Sets recorded so far, in order.
    pub fn sets(&self) -> impl Iterator<Item = &SetScore> {
        self.set1.iter().chain(self.set2.iter())
    }
}
