use super::*;

#[test]
fn test_missing_marker_yields_empty_block() {
    let lines = ["Seed: 12345", "1: {", "  Chest (Alice): Sword", "}"];
    assert!(extract_playthrough_block(&lines).is_empty());
}

#[test]
fn test_marker_without_spheres_yields_empty_block() {
    let lines = ["Playthrough:", "", "Paths:", "  Something"];
    assert!(extract_playthrough_block(&lines).is_empty());
}

#[test]
fn test_extracts_until_first_line_outside_a_block() {
    let lines = [
        "Options:",
        "  Goal: Beat the game",
        "",
        "Playthrough:",
        "",
        "0: {",
        "",
        "  Start (Alice): Boots (Alice)   ",
        "}",
        "1: {",
        "  Chest (Alice): Sword (Bob)",
        "}",
        "",
        "Unreachable Items:",
        "1: {",
        "}",
    ];

    let block = extract_playthrough_block(&lines);
    assert_eq!(
        block,
        vec![
            "0: {",
            "  Start (Alice): Boots (Alice)",
            "}",
            "1: {",
            "  Chest (Alice): Sword (Bob)",
            "}",
        ]
    );
}

#[test]
fn test_nested_braces_balance_within_one_entry() {
    let lines = [
        "Playthrough:",
        "1: {",
        "  Odd {Room} (Alice): Key {A} (Bob)",
        "}",
        "Paths:",
        "2: {",
        "}",
    ];

    let block = extract_playthrough_block(&lines);
    assert_eq!(
        block,
        vec!["1: {", "  Odd {Room} (Alice): Key {A} (Bob)", "}"]
    );
}

#[test]
fn test_unbalanced_open_brace_keeps_block_open() {
    let lines = [
        "Playthrough:",
        "1: {",
        "  Vault { (Alice): Gem (Bob)",
        "}",
        "  Cellar (Alice): Torch (Bob)",
        "}",
        "Paths:",
    ];

    let block = extract_playthrough_block(&lines);
    assert_eq!(block.len(), 5);
    assert_eq!(block[4], "}");
}

#[test]
fn test_header_spacing_is_flexible() {
    let lines = ["  Playthrough:  ", "3 :   {", "}", "12:{", "}", "End"];
    let block = extract_playthrough_block(&lines);
    assert_eq!(block, vec!["3 :   {", "}", "12:{", "}"]);
}
