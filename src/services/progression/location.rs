use regex::Regex;
use std::sync::LazyLock;

/// Trailing `(qualifier)` at the end of a location key, with its leading spaces.
static RE_TRAILING_QUALIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^()]*\)$").expect("Invalid regex"));

/// Strip the trailing parenthetical (usually the owning player) from a location key.
///
/// `Cave (Upper) (Alice)` → `Cave (Upper)`. Keys without one come back unchanged.
pub fn canonical_location_name(location: &str) -> String {
    RE_TRAILING_QUALIFIER.replace(location, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_only_the_last_parenthetical() {
        assert_eq!(canonical_location_name("Cave (Upper) (Alice)"), "Cave (Upper)");
        assert_eq!(canonical_location_name("Chest (Alice)"), "Chest");
    }

    #[test]
    fn test_without_trailing_parenthetical_is_unchanged() {
        assert_eq!(canonical_location_name("Chest"), "Chest");
        assert_eq!(canonical_location_name("(Alice) Chest"), "(Alice) Chest");
    }
}
