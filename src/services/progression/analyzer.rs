//! Progression analyzer — earliest still-open unlock per (observer, slot) pair.
//!
//! For an observer `P` and a slot `G`, a location qualifies when its unlock text
//! names `P`, its key names `G`, and its canonical name resolves to an id that `G`
//! has not checked yet. Spheres are scanned in ascending numeric order, so the
//! first hit is the answer for the pair.
//!
//! Name tests are plain substring checks. A player whose name is contained in
//! another's (`Al` / `Alice`) will also pick up the longer name's entries.

use rayon::prelude::*;

use crate::services::progression::location::canonical_location_name;
use crate::services::progression::tracker::{CheckedLocations, LocationIdTable};
use crate::types::spoiler::{
    EarliestUnlock, ObserverProgress, PlayerRecord, SlotProgress, Sphere, SphereId, SphereIndex,
};

/// Find, for every observer and every slot (including their own), the earliest
/// unchecked location gated behind one of the observer's items.
///
/// Results follow roster order on both axes. Locations missing from the id
/// table are skipped, never fatal.
pub fn find_earliest_unlocks(
    roster: &[PlayerRecord],
    spheres: &SphereIndex,
    locations: &LocationIdTable,
    checked: &CheckedLocations,
) -> Vec<ObserverProgress> {
    let ordered = spheres.ascending();

    let results: Vec<(ObserverProgress, usize)> = roster
        .par_iter()
        .map(|observer| {
            let mut lookup_misses = 0;
            let slots = roster
                .iter()
                .map(|owner| SlotProgress {
                    owner: owner.clone(),
                    earliest: earliest_for_slot(
                        observer,
                        owner,
                        &ordered,
                        locations,
                        checked,
                        &mut lookup_misses,
                    ),
                })
                .collect();
            (
                ObserverProgress {
                    player: observer.clone(),
                    slots,
                },
                lookup_misses,
            )
        })
        .collect();

    let total_misses: usize = results.iter().map(|(_, misses)| misses).sum();
    if total_misses > 0 {
        log::info!(
            "Progression scan skipped {} candidate(s) with no location id (default unlocks?)",
            total_misses
        );
    }

    results.into_iter().map(|(progress, _)| progress).collect()
}

/// Scan `ordered` spheres for the first qualifying location of `owner` gated
/// behind `observer`.
fn earliest_for_slot(
    observer: &PlayerRecord,
    owner: &PlayerRecord,
    ordered: &[(&SphereId, &Sphere)],
    locations: &LocationIdTable,
    checked: &CheckedLocations,
    lookup_misses: &mut usize,
) -> Option<EarliestUnlock> {
    for (sphere_id, sphere) in ordered {
        for (location, unlock) in sphere.iter() {
            if unlock.is_empty()
                || !unlock.contains(observer.name.as_str())
                || !location.contains(owner.name.as_str())
            {
                continue;
            }

            let canonical = canonical_location_name(location);
            let Some(location_id) = locations.location_id(&owner.game, &canonical) else {
                log::debug!(
                    "No location id for '{}' in {}; maybe a default unlock?",
                    canonical,
                    owner.game
                );
                *lookup_misses += 1;
                continue;
            };

            if checked.is_checked(owner.number, location_id) {
                continue;
            }

            return Some(EarliestUnlock {
                sphere: (*sphere_id).clone(),
                location: location.to_string(),
                unlock: unlock.to_string(),
            });
        }
    }
    None
}

#[cfg(test)]
#[path = "tests/analyzer_tests.rs"]
mod tests;
