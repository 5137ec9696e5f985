use super::*;

#[test]
fn test_strips_owner_and_punctuation() {
    assert_eq!(
        normalize_item_name("Progressive_Sword.2 (Player1)"),
        "progressive sword 2"
    );
}

#[test]
fn test_removes_every_parenthesized_segment() {
    assert_eq!(
        normalize_item_name("Key (Bob) of (the) Castle"),
        "key of castle"
    );
}

#[test]
fn test_collapses_whitespace() {
    assert_eq!(normalize_item_name("  Big\t\tKey   "), "big key");
}

#[test]
fn test_empty_and_parens_only() {
    assert_eq!(normalize_item_name(""), "");
    assert_eq!(normalize_item_name("(Alice)"), "");
}

#[test]
fn test_nested_parens_strip_to_first_close() {
    // Only the innermost-first closing paren ends a segment
    assert_eq!(normalize_item_name("a(b(c)d)e"), "ad)e");
}

#[test]
fn test_normalize_is_idempotent() {
    let samples = [
        "Progressive_Sword.2 (Player1)",
        "a(b(c)d)e",
        "((x)) y",
        "Unclosed (paren",
        "close) only (",
        "MiXeD___CaSe...Name",
        "  tabs\tand\nnewlines ",
        "Ünïcödé Ĳ (Ωmega)",
        "",
    ];

    for sample in samples {
        let once = normalize_item_name(sample);
        assert_eq!(normalize_item_name(&once), once, "not idempotent for {sample:?}");
    }
}

#[test]
fn test_tokenize_splits_on_whitespace() {
    assert_eq!(tokenize("progressive sword 2"), vec!["progressive", "sword", "2"]);
    assert!(tokenize("").is_empty());
}
