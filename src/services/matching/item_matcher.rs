//! Fuzzy wishlist matcher: finds the spheres whose unlocks look like wanted items.
//!
//! **Algorithm:**
//! 1. Normalize every wishlist item once
//! 2. For each non-empty unlock in every sphere, normalize the unlock once
//! 3. Score item vs unlock with [`best_similarity`] (max of four metrics)
//! 4. Keep the pair if `score >= threshold`
//!
//! Matches are not deduplicated here: the same unlock text can match from several
//! spheres. Use [`group_matches`] before display.

use crate::services::matching::normalizer::normalize_item_name;
use crate::services::matching::similarity::best_similarity;
use crate::types::spoiler::{GroupedMatch, ItemMatches, MatchResult, SphereIndex};

/// Default minimum confidence for a wishlist match.
pub const DEFAULT_FUZZY_THRESHOLD: u8 = 80;

/// Fuzzy-match wishlist `items` against every unlock description in `spheres`.
///
/// Returns one entry per distinct wishlist item, in wishlist order; items without
/// matches carry an empty list. Within an item, matches follow log order.
pub fn find_item_spheres_fuzzy<S: AsRef<str>>(
    spheres: &SphereIndex,
    items: &[S],
    threshold: u8,
) -> Vec<ItemMatches> {
    let mut results: Vec<ItemMatches> = Vec::new();
    let mut normalized_items: Vec<String> = Vec::new();

    for item in items {
        let item = item.as_ref();
        if results.iter().any(|existing| existing.item == item) {
            continue;
        }
        results.push(ItemMatches {
            item: item.to_string(),
            matches: Vec::new(),
        });
        normalized_items.push(normalize_item_name(item));
    }

    for (sphere_id, sphere) in spheres.iter() {
        for (_, raw_unlock) in sphere.iter() {
            if raw_unlock.is_empty() {
                continue;
            }
            let normalized_unlock = normalize_item_name(raw_unlock);

            for (entry, normalized_item) in results.iter_mut().zip(&normalized_items) {
                let confidence = best_similarity(normalized_item, &normalized_unlock);
                if confidence >= threshold {
                    entry.matches.push(MatchResult {
                        matched_item: raw_unlock.to_string(),
                        sphere: sphere_id.clone(),
                        confidence,
                    });
                }
            }
        }
    }

    log::debug!(
        "Fuzzy match: {} item(s), {} match(es) at threshold {}",
        results.len(),
        results.iter().map(|r| r.matches.len()).sum::<usize>(),
        threshold
    );

    results
}

/// Merge matches that share the same raw unlock text.
///
/// Groups keep first-seen order; spheres are unioned and sorted numerically,
/// confidence is the maximum across the group.
pub fn group_matches(matches: &[MatchResult]) -> Vec<GroupedMatch> {
    let mut grouped: Vec<GroupedMatch> = Vec::new();

    for m in matches {
        let index = match grouped
            .iter()
            .position(|g| g.matched_item == m.matched_item)
        {
            Some(index) => index,
            None => {
                grouped.push(GroupedMatch {
                    matched_item: m.matched_item.clone(),
                    spheres: Vec::new(),
                    confidence: 0,
                });
                grouped.len() - 1
            }
        };

        let group = &mut grouped[index];
        if !group.spheres.contains(&m.sphere) {
            group.spheres.push(m.sphere.clone());
        }
        group.confidence = group.confidence.max(m.confidence);
    }

    for group in &mut grouped {
        group.spheres.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    }

    grouped
}

#[cfg(test)]
#[path = "tests/item_matcher_tests.rs"]
mod tests;
