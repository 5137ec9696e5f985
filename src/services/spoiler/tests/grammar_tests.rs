use super::*;

fn grammar(players: &[&str]) -> LineGrammar {
    build_line_grammar(players.iter().copied()).unwrap()
}

#[test]
fn test_key_and_value_are_captured_and_trimmed() {
    let line = grammar(&["Alice"]).match_line("Foo (Alice) :   Sword  ").unwrap();
    assert_eq!(line.key, "Foo (Alice)");
    assert_eq!(line.value, "Sword");
}

#[test]
fn test_value_is_optional() {
    let line = grammar(&["Alice"]).match_line("Victory (Alice)").unwrap();
    assert_eq!(line.key, "Victory (Alice)");
    assert_eq!(line.value, "");
}

#[test]
fn test_key_anchors_on_player_parenthetical() {
    let g = grammar(&["Alice", "Bob"]);

    let line = g
        .match_line("Cave (Upper Ledge) (Alice): Hookshot (Bob)")
        .unwrap();
    assert_eq!(line.key, "Cave (Upper Ledge) (Alice)");
    assert_eq!(line.value, "Hookshot (Bob)");
}

#[test]
fn test_key_stops_at_first_player_parenthetical() {
    let line = grammar(&["Alice", "Bob"])
        .match_line("Chest (Alice): Key (Bob)")
        .unwrap();
    assert_eq!(line.key, "Chest (Alice)");
    assert_eq!(line.value, "Key (Bob)");
}

#[test]
fn test_unknown_owner_stretches_key_to_next_known_player() {
    let line = grammar(&["Alice", "Bob"])
        .match_line("Chest (Carol): Key (Bob)")
        .unwrap();
    assert_eq!(line.key, "Chest (Carol): Key (Bob)");
    assert_eq!(line.value, "");
}

#[test]
fn test_line_without_player_is_rejected() {
    let g = grammar(&["Alice"]);
    assert!(g.match_line("Chest (Carol): Sword").is_none());
    assert!(g.match_line("Chest: Sword").is_none());
}

#[test]
fn test_player_match_is_case_sensitive() {
    assert!(grammar(&["Alice"]).match_line("Chest (alice): Sword").is_none());
}

#[test]
fn test_player_names_are_escaped() {
    let g = grammar(&["A.B+(1)"]);
    assert!(g.match_line("Chest (A.B+(1)): Sword").is_some());
    assert!(g.match_line("Chest (AxBB(1)): Sword").is_none());
}

#[test]
fn test_empty_player_set_is_an_error() {
    let err = build_line_grammar(Vec::<String>::new()).unwrap_err();
    assert!(matches!(err, GrammarError::NoPlayers));

    let err = build_line_grammar([""]).unwrap_err();
    assert!(matches!(err, GrammarError::NoPlayers));
}

#[test]
fn test_same_roster_compiles_to_same_pattern() {
    let a = grammar(&["Bob", "Alice"]);
    let b = grammar(&["Alice", "Bob", "Alice"]);
    assert_eq!(a.as_str(), b.as_str());
}
