//! Human-readable and JSON rendering of analysis results.

use serde::Serialize;

use crate::services::matching::item_matcher::group_matches;
use crate::types::spoiler::{GroupedMatch, ItemMatches, ObserverProgress};

/// One line per (wishlist item, matched text), spheres merged.
///
/// `Desired: bow, Matched: Bow (Bob) (confidence 100%) → Sphere 2`
pub fn format_match_lines(results: &[ItemMatches]) -> Vec<String> {
    let mut output = Vec::new();

    for item in results {
        for group in group_matches(&item.matches) {
            let spheres = group
                .spheres
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            let label = if group.spheres.len() > 1 {
                "Sphere(s)"
            } else {
                "Sphere"
            };
            output.push(format!(
                "Desired: {}, Matched: {} (confidence {}%) → {} {}",
                item.item, group.matched_item, group.confidence, label, spheres
            ));
        }
    }

    output
}

/// One line per (observer, slot) pair.
pub fn format_progress_lines(progress: &[ObserverProgress]) -> Vec<String> {
    let mut output = Vec::new();

    for observer in progress {
        for slot in &observer.slots {
            let prefix = format!(
                "{} → {} ({})",
                observer.player.name, slot.owner.name, slot.owner.game
            );
            let line = match &slot.earliest {
                Some(hit) => format!(
                    "{prefix}: sphere {}, {} needs {}",
                    hit.sphere, hit.location, hit.unlock
                ),
                None => format!("{prefix}: nothing pending"),
            };
            output.push(line);
        }
    }

    output
}

#[derive(Debug, Serialize)]
struct JsonItemReport<'a> {
    item: &'a str,
    matches: Vec<GroupedMatch>,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    wishlist: Vec<JsonItemReport<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    progression: Option<&'a [ObserverProgress]>,
}

/// Pretty JSON with grouped wishlist matches and, when available, progression.
pub fn to_json(
    results: &[ItemMatches],
    progress: Option<&[ObserverProgress]>,
) -> Result<String, serde_json::Error> {
    let report = JsonReport {
        wishlist: results
            .iter()
            .map(|item| JsonItemReport {
                item: &item.item,
                matches: group_matches(&item.matches),
            })
            .collect(),
        progression: progress,
    };
    serde_json::to_string_pretty(&report)
}

#[cfg(test)]
#[path = "tests/report_tests.rs"]
mod tests;
