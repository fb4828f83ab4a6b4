//! Tournament business logic: fixtures, scoring, creation, statistics.

mod fixtures;
mod scoring;
mod setup;
mod statistics;

pub use fixtures::generate_fixture;
pub use scoring::{
    apply_score, determine_set_winner, is_complete, recompute_stats, validate_set_score,
};
pub use setup::{create_tournament, finalize_tournament, generate_access_code};
pub use statistics::{
    distinct_years, partnership_records, player_names, player_records, PartnershipRecord,
    PlayerRecord,
};
