//! Integration tests for tournament creation and the finalize workflow.

use badminton_team_web::{
    apply_score, create_tournament, finalize_tournament, generate_access_code, Gender, MatchType,
    SetNumber, Team, Tournament, TournamentError, ROSTER_SIZE,
};

fn names(list: [&str; 6]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn red_names() -> Vec<String> {
    names(["Ada", "Grace", "Mary", "Alan", "Edsger", "Donald"])
}

fn blue_names() -> Vec<String> {
    names(["Rosalind", "Marie", "Lise", "Niels", "Erwin", "Paul"])
}

fn fresh_tournament() -> Tournament {
    create_tournament("JOIN42", "Reds", "Blues", &red_names(), &blue_names(), None).unwrap()
}

#[test]
fn creates_rosters_with_slots_and_genders() {
    let t = fresh_tournament();
    assert_eq!(t.team1_players.len(), ROSTER_SIZE);
    assert_eq!(t.team2_players.len(), ROSTER_SIZE);
    assert_eq!(t.matches.len(), 9);
    assert_eq!(t.access_code, "JOIN42");
    for (i, p) in t.team1_players.iter().enumerate() {
        assert_eq!(p.id as usize, i + 1);
        assert_eq!(p.team, Team::One);
        assert_eq!(p.gender, if i < 3 { Gender::Woman } else { Gender::Man });
    }
    for p in &t.team2_players {
        assert_eq!(p.team, Team::Two);
    }
    assert_eq!(t.team1_sets_won, 0);
    assert_eq!(t.team2_sets_won, 0);
    assert_eq!(t.team1_total_points, 0);
    assert_eq!(t.team2_total_points, 0);
    assert_eq!(t.tournament_winner, None);
    assert!(!t.is_finalized);
}

#[test]
fn matches_are_grouped_by_discipline() {
    let t = fresh_tournament();
    let mixed: Vec<u8> = t.matches_of_type(MatchType::MixedDoubles).map(|m| m.id).collect();
    let mens: Vec<u8> = t.matches_of_type(MatchType::MensDoubles).map(|m| m.id).collect();
    let womens: Vec<u8> = t.matches_of_type(MatchType::WomensDoubles).map(|m| m.id).collect();
    assert_eq!(mixed, vec![1, 2, 3]);
    assert_eq!(mens, vec![4, 6, 8]);
    assert_eq!(womens, vec![5, 7, 9]);
}

#[test]
fn trims_player_names() {
    let t = create_tournament(
        "C",
        "A",
        "B",
        &names(["  Ada ", "Grace", "Mary", "Alan", "Edsger", "Donald"]),
        &blue_names(),
        None,
    )
    .unwrap();
    assert_eq!(t.team1_players[0].name, "Ada");
}

#[test]
fn rejects_wrong_roster_size() {
    let err =
        create_tournament("C", "A", "B", &red_names()[..5], &blue_names(), None).unwrap_err();
    assert_eq!(
        err,
        TournamentError::WrongRosterSize {
            team: Team::One,
            actual: 5
        }
    );
}

#[test]
fn rejects_blank_names() {
    let err = create_tournament(
        "C",
        "A",
        "B",
        &names(["Ada", "  ", "Mary", "Alan", "Edsger", "Donald"]),
        &blue_names(),
        None,
    )
    .unwrap_err();
    assert_eq!(
        err,
        TournamentError::EmptyPlayerName {
            team: Team::One,
            slot: 2
        }
    );
}

#[test]
fn rejects_duplicate_names_within_a_team_case_insensitively() {
    let err = create_tournament(
        "C",
        "A",
        "B",
        &names(["Ada", "ada", "Mary", "Alan", "Edsger", "Donald"]),
        &blue_names(),
        None,
    )
    .unwrap_err();
    assert_eq!(err, TournamentError::DuplicatePlayerName("ada".to_string()));
}

#[test]
fn rejects_duplicate_names_across_teams() {
    let mut blues = blue_names();
    blues[3] = "alan".to_string();
    let err = create_tournament("C", "A", "B", &red_names(), &blues, None).unwrap_err();
    assert_eq!(err, TournamentError::DuplicatePlayerName("Alan".to_string()));
}

#[test]
fn finalize_requires_every_match_completed() {
    let mut t = fresh_tournament();
    assert_eq!(finalize_tournament(&mut t), Err(TournamentError::IncompleteResults));

    for id in 1..=9u8 {
        t = apply_score(t, id, SetNumber::First, 21, 12);
        t = apply_score(t, id, SetNumber::Second, 21, 14);
    }
    assert_eq!(finalize_tournament(&mut t), Ok(()));
    assert!(t.is_finalized);
    assert_eq!(finalize_tournament(&mut t), Err(TournamentError::AlreadyFinalized));
}

#[test]
fn one_unfinished_match_blocks_finalize() {
    let mut t = fresh_tournament();
    for id in 1..=8u8 {
        t = apply_score(t, id, SetNumber::First, 21, 12);
        t = apply_score(t, id, SetNumber::Second, 21, 14);
    }
    t = apply_score(t, 9, SetNumber::First, 21, 12);
    assert_eq!(finalize_tournament(&mut t), Err(TournamentError::IncompleteResults));
    assert!(!t.is_finalized);
}

#[test]
fn generated_access_codes_are_six_uppercase_alphanumerics() {
    for _ in 0..20 {
        let code = generate_access_code();
        assert_eq!(code.len(), 6);
        assert!(code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }
}
