//! Score engine: set validation, winner derivation, and tournament aggregates.

use crate::models::{MatchId, SetNumber, SetScore, Team, Tournament};
use std::cmp::Ordering;

/// Points at which a set ends outright, regardless of margin.
const SET_CAP: u32 = 30;

/// Minimum points to win a set.
const SET_TARGET: u32 = 21;

/// Set wins that take the tournament: a majority of the 18 played.
const SETS_TO_WIN: u32 = 9;

/// Badminton set validity:
/// - no score may exceed 30, and the winner reaches at least 21;
/// - reaching 30 ends the set whatever the margin (29-29 ends 30-29 at best);
/// - otherwise the winner leads by at least 2, and a winner past 21 (a deuce
///   finish) leads by exactly 2.
///
/// Equal scores never validate, so every valid pair has a winner.
pub fn validate_set_score(team1_score: u32, team2_score: u32) -> bool {
    if team1_score == team2_score {
        return false;
    }
    let (hi, lo) = if team1_score > team2_score {
        (team1_score, team2_score)
    } else {
        (team2_score, team1_score)
    };
    if hi > SET_CAP || hi < SET_TARGET {
        return false;
    }
    if hi == SET_CAP {
        return true;
    }
    let margin = hi - lo;
    margin >= 2 && (hi == SET_TARGET || margin == 2)
}

/// The set winner, or `None` when the pair is not a valid set score.
pub fn determine_set_winner(team1_score: u32, team2_score: u32) -> Option<Team> {
    if !validate_set_score(team1_score, team2_score) {
        return None;
    }
    Some(if team1_score > team2_score {
        Team::One
    } else {
        Team::Two
    })
}

/// Apply one set score to a match and return the updated tournament.
///
/// An unknown match id or an invalid score pair returns the tournament
/// unchanged; callers that need a user-facing error validate first. The
/// targeted set slot is replaced wholesale, the match winner is derived once
/// both sets exist, and every aggregate is recomputed from scratch.
pub fn apply_score(
    mut tournament: Tournament,
    match_id: MatchId,
    set_number: SetNumber,
    team1_score: u32,
    team2_score: u32,
) -> Tournament {
    let winner = match determine_set_winner(team1_score, team2_score) {
        Some(w) => w,
        None => return tournament,
    };
    let idx = match tournament.matches.iter().position(|m| m.id == match_id) {
        Some(i) => i,
        None => return tournament,
    };

    let game = &mut tournament.matches[idx];
    let set = SetScore {
        team1_score,
        team2_score,
        winner,
    };
    match set_number {
        SetNumber::First => game.set1 = Some(set),
        SetNumber::Second => game.set2 = Some(set),
    }

    if let (Some(s1), Some(s2)) = (game.set1, game.set2) {
        let team1_sets = [s1.winner, s2.winner]
            .iter()
            .filter(|w| **w == Team::One)
            .count();
        let team2_sets = 2 - team1_sets;
        game.match_winner = Some(if team1_sets > team2_sets {
            Team::One
        } else {
            Team::Two
        });
        game.completed = true;
    }

    recompute_stats(tournament)
}

/// Recompute every aggregate from the matches alone. Idempotent; runs after
/// every score change instead of nudging counters incrementally.
pub fn recompute_stats(mut tournament: Tournament) -> Tournament {
    let mut team1_sets_won: u32 = 0;
    let mut team2_sets_won: u32 = 0;
    let mut team1_total_points: u32 = 0;
    let mut team2_total_points: u32 = 0;

    for game in &tournament.matches {
        for set in game.sets() {
            match set.winner {
                Team::One => team1_sets_won += 1,
                Team::Two => team2_sets_won += 1,
            }
            team1_total_points += set.team1_score;
            team2_total_points += set.team2_score;
        }
    }

    tournament.team1_sets_won = team1_sets_won;
    tournament.team2_sets_won = team2_sets_won;
    tournament.team1_total_points = team1_total_points;
    tournament.team2_total_points = team2_total_points;
    tournament.tournament_winner = if team1_sets_won >= SETS_TO_WIN && team1_sets_won > team2_sets_won
    {
        Some(Team::One)
    } else if team2_sets_won >= SETS_TO_WIN && team2_sets_won > team1_sets_won {
        Some(Team::Two)
    } else if team1_sets_won == SETS_TO_WIN && team2_sets_won == SETS_TO_WIN {
        // 9-9: total points break the tie; dead even stays undecided.
        match team1_total_points.cmp(&team2_total_points) {
            Ordering::Greater => Some(Team::One),
            Ordering::Less => Some(Team::Two),
            Ordering::Equal => None,
        }
    } else {
        None
    };

    tournament
}

/// True once every match in the fixture has both sets recorded.
pub fn is_complete(tournament: &Tournament) -> bool {
    tournament.matches.iter().all(|m| m.completed)
}
