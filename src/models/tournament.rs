//! Tournament and TournamentError.

use crate::models::game::{GameMatch, MatchId, MatchType, Team};
use crate::models::player::{PlayerId, TeamPlayer, ROSTER_SIZE};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors from the creation and finalize workflows.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// A roster does not have exactly 6 players.
    WrongRosterSize { team: Team, actual: usize },
    /// A roster slot has a blank name.
    EmptyPlayerName { team: Team, slot: PlayerId },
    /// The same name appears twice (case-insensitive), within or across teams.
    DuplicatePlayerName(String),
    /// Not every match has both sets scored.
    IncompleteResults,
    /// The tournament is already finalized; results are permanent.
    AlreadyFinalized,
    /// A non-finalized tournament already exists.
    ActiveTournamentExists,
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::WrongRosterSize { team, actual } => {
                write!(
                    f,
                    "Team {} must have exactly {} players (got {})",
                    team.number(),
                    ROSTER_SIZE,
                    actual
                )
            }
            TournamentError::EmptyPlayerName { team, slot } => {
                write!(f, "Team {} slot {} has an empty player name", team.number(), slot)
            }
            TournamentError::DuplicatePlayerName(name) => {
                write!(f, "Player name '{}' is used more than once", name)
            }
            TournamentError::IncompleteResults => {
                write!(f, "Not all matches have both sets scored")
            }
            TournamentError::AlreadyFinalized => write!(f, "Tournament is already finalized"),
            TournamentError::ActiveTournamentExists => {
                write!(f, "An active tournament already exists; finalize it before creating a new one")
            }
        }
    }
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Full tournament state: rosters, the 9-match fixture, and derived aggregates.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    /// Human-entered join code.
    pub access_code: String,
    pub date: NaiveDate,
    pub team1_name: String,
    pub team2_name: String,
    /// 6 players: slots 1-3 women, 4-6 men.
    pub team1_players: Vec<TeamPlayer>,
    pub team2_players: Vec<TeamPlayer>,
    /// The 9 matches in fixture order.
    pub matches: Vec<GameMatch>,
    /// Derived: sets won per team across all matches.
    pub team1_sets_won: u32,
    pub team2_sets_won: u32,
    /// Derived: points scored per team across every recorded set.
    pub team1_total_points: u32,
    pub team2_total_points: u32,
    /// Set once a team has 9 set wins and is strictly ahead; points break a 9-9 tie.
    pub tournament_winner: Option<Team>,
    /// Once true, results are permanent and no score may change.
    pub is_finalized: bool,
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    /// Assemble a new tournament with zeroed aggregates. Rosters and matches
    /// come from the creation workflow, which validates them.
    pub fn new(
        access_code: impl Into<String>,
        date: NaiveDate,
        team1_name: impl Into<String>,
        team2_name: impl Into<String>,
        team1_players: Vec<TeamPlayer>,
        team2_players: Vec<TeamPlayer>,
        matches: Vec<GameMatch>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            access_code: access_code.into(),
            date,
            team1_name: team1_name.into(),
            team2_name: team2_name.into(),
            team1_players,
            team2_players,
            matches,
            team1_sets_won: 0,
            team2_sets_won: 0,
            team1_total_points: 0,
            team2_total_points: 0,
            tournament_winner: None,
            is_finalized: false,
            created_at: Utc::now(),
        }
    }

    /// The given team's roster.
    pub fn roster(&self, team: Team) -> &[TeamPlayer] {
        match team {
            Team::One => &self.team1_players,
            Team::Two => &self.team2_players,
        }
    }

    /// Look up a roster player by team and slot id.
    pub fn player(&self, team: Team, id: PlayerId) -> Option<&TeamPlayer> {
        self.roster(team).iter().find(|p| p.id == id)
    }

    /// A match by fixture id.
    pub fn find_match(&self, id: MatchId) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.id == id)
    }

    /// Matches of one discipline, in fixture order.
    pub fn matches_of_type(&self, match_type: MatchType) -> impl Iterator<Item = &GameMatch> {
        self.matches.iter().filter(move |m| m.match_type == match_type)
    }
}
