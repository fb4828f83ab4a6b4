//! Tournament creation and the finalize workflow.

use crate::logic::fixtures::generate_fixture;
use crate::logic::scoring::is_complete;
use crate::models::{PlayerId, Team, TeamPlayer, Tournament, TournamentError, ROSTER_SIZE};
use chrono::{NaiveDate, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of a generated join code.
const ACCESS_CODE_LEN: usize = 6;

/// Create a tournament from two 6-name rosters, each in slot order W1-W3, M1-M3.
///
/// Names are trimmed and must be non-empty and case-insensitively unique
/// within and across both rosters. The fixture and zeroed aggregates are
/// wired in; `date` defaults to today (UTC).
pub fn create_tournament(
    access_code: impl Into<String>,
    team1_name: impl Into<String>,
    team2_name: impl Into<String>,
    team1_names: &[String],
    team2_names: &[String],
    date: Option<NaiveDate>,
) -> Result<Tournament, TournamentError> {
    let team1_players = build_roster(team1_names, Team::One)?;
    let team2_players = build_roster(team2_names, Team::Two)?;
    for player in &team1_players {
        if team2_players
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(&player.name))
        {
            return Err(TournamentError::DuplicatePlayerName(player.name.clone()));
        }
    }

    Ok(Tournament::new(
        access_code,
        date.unwrap_or_else(|| Utc::now().date_naive()),
        team1_name,
        team2_name,
        team1_players,
        team2_players,
        generate_fixture(),
    ))
}

/// Validate and build one team's roster from its slot-ordered names.
fn build_roster(names: &[String], team: Team) -> Result<Vec<TeamPlayer>, TournamentError> {
    if names.len() != ROSTER_SIZE {
        return Err(TournamentError::WrongRosterSize {
            team,
            actual: names.len(),
        });
    }
    let mut roster: Vec<TeamPlayer> = Vec::with_capacity(ROSTER_SIZE);
    for (i, raw) in names.iter().enumerate() {
        let slot = (i + 1) as PlayerId;
        let name = raw.trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyPlayerName { team, slot });
        }
        if roster.iter().any(|p| p.name.eq_ignore_ascii_case(name)) {
            return Err(TournamentError::DuplicatePlayerName(name.to_string()));
        }
        roster.push(TeamPlayer::for_slot(slot, name, team));
    }
    Ok(roster)
}

/// Mark a fully played tournament as permanent. One-way: a finalized
/// tournament rejects every further mutation, including a second finalize.
pub fn finalize_tournament(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if tournament.is_finalized {
        return Err(TournamentError::AlreadyFinalized);
    }
    if !is_complete(tournament) {
        return Err(TournamentError::IncompleteResults);
    }
    tournament.is_finalized = true;
    Ok(())
}

/// A 6-character uppercase join code for hosts that don't pick their own.
pub fn generate_access_code() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ACCESS_CODE_LEN)
        .map(|b| (b as char).to_ascii_uppercase())
        .collect()
}
