//! Cross-tournament analytics: per-player and per-partnership records.

use crate::models::{Team, Tournament};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Win/loss record for one player across finalized tournaments.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
}

impl PlayerRecord {
    /// Percentage of completed matches won (0 when none played).
    pub fn win_rate(&self) -> f64 {
        win_rate(self.wins, self.losses)
    }
}

/// Win/loss record for a same-team pair across finalized tournaments.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PartnershipRecord {
    /// The two partners, name-ordered.
    pub names: [String; 2],
    pub wins: u32,
    pub losses: u32,
}

impl PartnershipRecord {
    pub fn win_rate(&self) -> f64 {
        win_rate(self.wins, self.losses)
    }
}

fn win_rate(wins: u32, losses: u32) -> f64 {
    let total = wins + losses;
    if total == 0 {
        0.0
    } else {
        f64::from(wins) * 100.0 / f64::from(total)
    }
}

/// Visit each scored pair outcome: for every completed match of every
/// finalized tournament, both teams' pairs resolved to player names, with
/// whether that pair won.
fn for_each_scored_pair<F: FnMut([&str; 2], bool)>(tournaments: &[Tournament], mut visit: F) {
    for tournament in tournaments.iter().filter(|t| t.is_finalized) {
        for game in tournament.matches.iter().filter(|m| m.completed) {
            let winner = match game.match_winner {
                Some(w) => w,
                None => continue,
            };
            for team in [Team::One, Team::Two] {
                let [a, b] = game.pair(team);
                if let (Some(p1), Some(p2)) = (tournament.player(team, a), tournament.player(team, b)) {
                    visit([p1.name.as_str(), p2.name.as_str()], team == winner);
                }
            }
        }
    }
}

/// Per-player records over every completed match of finalized tournaments,
/// best win rate first (ties broken by name for a stable order).
pub fn player_records(tournaments: &[Tournament]) -> Vec<PlayerRecord> {
    let mut tally: HashMap<String, (u32, u32)> = HashMap::new();
    for_each_scored_pair(tournaments, |names, won| {
        for name in names {
            let entry = tally.entry(name.to_string()).or_default();
            if won {
                entry.0 += 1;
            } else {
                entry.1 += 1;
            }
        }
    });
    let mut records: Vec<PlayerRecord> = tally
        .into_iter()
        .map(|(name, (wins, losses))| PlayerRecord { name, wins, losses })
        .collect();
    records.sort_by(|a, b| {
        b.win_rate()
            .total_cmp(&a.win_rate())
            .then_with(|| a.name.cmp(&b.name))
    });
    records
}

/// Per-partnership records (unordered same-team pairs), best win rate first.
pub fn partnership_records(tournaments: &[Tournament]) -> Vec<PartnershipRecord> {
    let mut tally: HashMap<[String; 2], (u32, u32)> = HashMap::new();
    for_each_scored_pair(tournaments, |names, won| {
        let mut key = [names[0].to_string(), names[1].to_string()];
        key.sort();
        let entry = tally.entry(key).or_default();
        if won {
            entry.0 += 1;
        } else {
            entry.1 += 1;
        }
    });
    let mut records: Vec<PartnershipRecord> = tally
        .into_iter()
        .map(|(names, (wins, losses))| PartnershipRecord { names, wins, losses })
        .collect();
    records.sort_by(|a, b| {
        b.win_rate()
            .total_cmp(&a.win_rate())
            .then_with(|| a.names.cmp(&b.names))
    });
    records
}

/// Every distinct player name seen in any tournament, ascending.
pub fn player_names(tournaments: &[Tournament]) -> Vec<String> {
    let mut names: Vec<String> = tournaments
        .iter()
        .flat_map(|t| t.team1_players.iter().chain(t.team2_players.iter()))
        .map(|p| p.name.clone())
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Years with at least one finalized tournament, newest first.
pub fn distinct_years(tournaments: &[Tournament]) -> Vec<i32> {
    let mut years: Vec<i32> = tournaments
        .iter()
        .filter(|t| t.is_finalized)
        .map(|t| t.date.year())
        .collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}
