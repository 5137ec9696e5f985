//! Text normalization for item and location names.
//! Strips ownership qualifiers and punctuation noise before fuzzy comparison.

use regex::Regex;
use std::sync::LazyLock;

/// Compiled regex for parenthesized segments (non-nested).
static RE_PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("Invalid regex"));

/// Normalize a free-text name into its comparison form.
///
/// Pipeline:
/// 1. Drop every `(...)` segment (player and location qualifiers)
/// 2. Replace `_` and `.` with spaces
/// 3. Lowercase
/// 4. Collapse and trim whitespace
///
/// `Progressive_Sword.2 (Player1)` → `progressive sword 2`
pub fn normalize_item_name(text: &str) -> String {
    let without_parens = RE_PARENTHESIZED.replace_all(text, "");
    let spaced = without_parens.replace(['_', '.'], " ");
    let lower = spaced.to_lowercase();
    lower.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split a normalized name into whitespace tokens.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

#[cfg(test)]
#[path = "tests/normalizer_tests.rs"]
mod tests;
