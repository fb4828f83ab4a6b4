//! Data structures for the badminton team tournament: rosters, matches, tournament state.

mod game;
mod player;
mod tournament;

pub use game::{GameMatch, MatchId, MatchType, SetNumber, SetScore, Team};
pub use player::{Gender, PlayerId, TeamPlayer, ROSTER_SIZE, WOMEN_PER_TEAM};
pub use tournament::{Tournament, TournamentError, TournamentId};
