//! Badminton team tournament web app: library with models and scoring logic.

pub mod logic;
pub mod models;

pub use logic::{
    apply_score, create_tournament, determine_set_winner, distinct_years, finalize_tournament,
    generate_access_code, generate_fixture, is_complete, partnership_records, player_names,
    player_records, recompute_stats, validate_set_score, PartnershipRecord, PlayerRecord,
};
pub use models::{
    GameMatch, Gender, MatchId, MatchType, PlayerId, SetNumber, SetScore, Team, TeamPlayer,
    Tournament, TournamentError, TournamentId, ROSTER_SIZE, WOMEN_PER_TEAM,
};
