use super::*;

#[test]
fn test_ratio_identical_and_empty() {
    assert_eq!(ratio("key", "key"), 100);
    assert_eq!(ratio("", "key"), 0);
    assert_eq!(ratio("key", ""), 0);
    assert_eq!(ratio("", ""), 0);
}

#[test]
fn test_ratio_single_substitution() {
    // LCS 5 over 12 chars → 83.3%
    assert_eq!(ratio("hammer", "hammar"), 83);
}

#[test]
fn test_ratio_counts_transposition_as_one_lost_char() {
    // LCS "swod" → 2 * 4 / 10
    assert_eq!(ratio("swrod", "sword"), 80);
    assert_eq!(best_similarity("swrod", "sword"), 80);
}

#[test]
fn test_ratio_rounds_half_to_even() {
    // LCS 3 over 16 chars → 37.5%
    assert_eq!(ratio("abcxxxxx", "abcyyyyy"), 38);
    // LCS 1 over 16 chars → 12.5%
    assert_eq!(ratio("axxxxxxx", "ayyyyyyy"), 12);
}

#[test]
fn test_partial_ratio_finds_embedded_substring() {
    assert_eq!(partial_ratio("sword", "master sword"), 100);
    assert_eq!(partial_ratio("master sword", "sword"), 100);
}

#[test]
fn test_partial_ratio_tries_windows_clipped_at_either_end() {
    assert_eq!(partial_ratio("master", "aster sword"), 91);
    assert_eq!(partial_ratio("aster sword", "master"), 91);
    assert_eq!(partial_ratio("sword", "big swor"), 89);
}

#[test]
fn test_partial_ratio_equal_length_checks_both_directions() {
    assert_eq!(partial_ratio("hammer", "hammar"), ratio("hammer", "hammar"));
    // "bcd" is a clipped prefix of the second string
    assert_eq!(partial_ratio("abcd", "bcdx"), 86);
    assert_eq!(partial_ratio("bcdx", "abcd"), 86);
}

#[test]
fn test_token_sort_ignores_order_but_counts_duplicates() {
    assert_eq!(token_sort_ratio("sword master", "master sword"), 100);
    assert!(token_sort_ratio("sword sword master", "master sword") < 100);
}

#[test]
fn test_token_set_ignores_order_and_duplicates() {
    assert_eq!(token_set_ratio("sword sword master", "master sword"), 100);
    assert_eq!(token_set_ratio("master sword upgrade", "master sword"), 100);
}

#[test]
fn test_token_scorers_split_on_punctuation() {
    assert_eq!(token_sort_ratio("hookshot-upgrade", "upgrade hookshot"), 100);
    assert_eq!(token_set_ratio("mirror's shield", "shield mirror s"), 100);
}

#[test]
fn test_token_set_without_shared_tokens_compares_leftovers() {
    assert_eq!(token_set_ratio("hammer", "hammar"), 83);
}

#[test]
fn test_best_similarity_takes_maximum() {
    assert_eq!(best_similarity("hammer", "hammar"), 83);
    assert_eq!(best_similarity("sword", "progressive sword"), 100);
    assert_eq!(best_similarity("bow", ""), 0);
}

#[test]
fn test_all_scores_stay_in_range() {
    let pairs = [
        ("a", "zzzzzzzzzz"),
        ("progressive sword", "sword progressive progressive"),
        ("x y z", "z"),
    ];
    for (a, b) in pairs {
        for similarity in SIMILARITY_FNS {
            assert!(similarity(a, b) <= 100);
        }
    }
}
