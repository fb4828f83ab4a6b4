//! The fixed 9-match fixture chart.

use crate::models::{GameMatch, MatchId, MatchType, PlayerId};

/// Matchup chart by roster slot: women are slots 1-3, men 4-6.
/// Row order is match id order and the display order of the match list.
const FIXTURE_CHART: [(MatchType, [PlayerId; 2], [PlayerId; 2]); 9] = [
    (MatchType::MixedDoubles, [1, 4], [1, 4]),
    (MatchType::MixedDoubles, [2, 5], [2, 5]),
    (MatchType::MixedDoubles, [3, 6], [3, 6]),
    (MatchType::MensDoubles, [4, 5], [5, 6]),
    (MatchType::WomensDoubles, [1, 2], [2, 3]),
    (MatchType::MensDoubles, [5, 6], [4, 6]),
    (MatchType::WomensDoubles, [2, 3], [1, 3]),
    (MatchType::MensDoubles, [4, 6], [4, 5]),
    (MatchType::WomensDoubles, [1, 3], [1, 2]),
];

/// Build the 9 fixture matches, ids 1-9 in chart order, with no sets recorded.
/// The chart pairs roster slots, so the same rosters always yield the same list.
pub fn generate_fixture() -> Vec<GameMatch> {
    FIXTURE_CHART
        .iter()
        .enumerate()
        .map(|(i, &(match_type, team1_players, team2_players))| {
            GameMatch::new((i + 1) as MatchId, match_type, team1_players, team2_players)
        })
        .collect()
}
