//! One consistent set of room documents for a progression query.

use std::collections::HashMap;

use super::client::ArchipelagoClient;
use super::models::{Datapackage, LiveTracker, RoomStatus, StaticTracker};
use crate::services::progression::tracker::{CheckedLocations, LocationIdTable};
use crate::types::errors::FetchError;
use crate::types::spoiler::PlayerRecord;

/// Roster, location ids and checked locations captured for a single analysis run.
#[derive(Debug, Clone, Default)]
pub struct RoomSnapshot {
    pub roster: Vec<PlayerRecord>,
    pub locations: LocationIdTable,
    pub checked: CheckedLocations,
}

impl RoomSnapshot {
    /// Fetch every document a progression query needs for `room_id`, reading
    /// checks for `team`.
    pub fn fetch(
        client: &ArchipelagoClient,
        room_id: &str,
        team: u32,
    ) -> Result<Self, FetchError> {
        let room = client.room_status(room_id)?;
        let tracker_id = room.tracker_id()?.to_string();
        let static_tracker = client.static_tracker(&tracker_id)?;
        let live_tracker = client.tracker(&tracker_id)?;

        let mut datapackages = HashMap::new();
        for (game, checksum) in static_tracker.checksums()? {
            datapackages.insert(game.to_string(), client.datapackage(checksum)?);
        }

        Ok(Self::from_documents(
            &room,
            &static_tracker,
            &live_tracker,
            &datapackages,
            team,
        ))
    }

    /// Assemble a snapshot from already-fetched documents.
    ///
    /// A slot whose game is listed in the static tracker under a different name
    /// than in the room roster uses the static tracker's name for id lookups.
    pub fn from_documents(
        room: &RoomStatus,
        static_tracker: &StaticTracker,
        live_tracker: &LiveTracker,
        datapackages: &HashMap<String, Datapackage>,
        team: u32,
    ) -> Self {
        let roster: Vec<PlayerRecord> = room
            .roster()
            .into_iter()
            .map(|mut player| {
                if let Some(game) = static_tracker.game_for_player(player.number) {
                    player.game = game.to_string();
                }
                player
            })
            .collect();

        let mut locations = LocationIdTable::new();
        for (game, package) in datapackages {
            locations.insert_game(game.clone(), package.location_ids());
        }

        let checked = live_tracker.checked_locations(team);

        for player in &roster {
            if !locations.has_game(&player.game) {
                log::warn!(
                    "No datapackage for {} ({}); its locations cannot be resolved",
                    player.name,
                    player.game
                );
            }
            log::debug!(
                "{} (team {}, slot {}): {} location(s) checked",
                player.name,
                team,
                player.number,
                checked.checked_count(player.number)
            );
        }

        Self {
            roster,
            locations,
            checked,
        }
    }
}
