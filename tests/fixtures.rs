//! Integration tests for fixture generation: the fixed 9-match chart.

use badminton_team_web::{generate_fixture, MatchType};

#[test]
fn fixture_has_nine_fresh_matches_in_id_order() {
    let matches = generate_fixture();
    assert_eq!(matches.len(), 9);
    for (i, m) in matches.iter().enumerate() {
        assert_eq!(m.id as usize, i + 1);
        assert!(m.set1.is_none());
        assert!(m.set2.is_none());
        assert!(!m.completed);
        assert!(m.match_winner.is_none());
    }
}

#[test]
fn fixture_matches_the_matchup_chart() {
    let expected: [(MatchType, [u8; 2], [u8; 2]); 9] = [
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
    let matches = generate_fixture();
    for (m, (match_type, team1, team2)) in matches.iter().zip(expected) {
        assert_eq!(m.match_type, match_type, "match {}", m.id);
        assert_eq!(m.team1_players, team1, "match {}", m.id);
        assert_eq!(m.team2_players, team2, "match {}", m.id);
    }
}

#[test]
fn fixture_generation_is_deterministic() {
    assert_eq!(generate_fixture(), generate_fixture());
}

#[test]
fn first_mens_doubles_is_match_4_pairing_m1_m2_vs_m2_m3() {
    let matches = generate_fixture();
    let first_mens = matches
        .iter()
        .find(|m| m.match_type == MatchType::MensDoubles)
        .unwrap();
    assert_eq!(first_mens.id, 4);
    assert_eq!(first_mens.team1_players, [4, 5]);
    assert_eq!(first_mens.team2_players, [5, 6]);
}
