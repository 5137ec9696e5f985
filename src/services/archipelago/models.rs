//! Typed views of the Archipelago web API documents.
//!
//! Only the fields the analysis reads are modelled; unknown fields are ignored.
//! Location ids arrive as JSON numbers (or strings on some hosts) and are carried
//! as opaque strings.

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

use crate::services::progression::tracker::CheckedLocations;
use crate::types::errors::FetchError;
use crate::types::spoiler::PlayerRecord;

/// Pseudo-game every room lists in its datapackage section.
pub const ARCHIPELAGO_GAME: &str = "Archipelago";

/// A location id as found in API JSON.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    pub fn into_id(self) -> String {
        match self {
            RawId::Number(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

// ─── room_status ─────────────────────────────────────────────────────────────

/// `GET /room_status/<room>`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomStatus {
    #[serde(default)]
    pub tracker: String,
    /// `[name, game]` pairs in slot order.
    #[serde(default)]
    pub players: Vec<(String, String)>,
}

impl RoomStatus {
    pub fn tracker_id(&self) -> Result<&str, FetchError> {
        if self.tracker.is_empty() {
            return Err(FetchError::MissingTracker);
        }
        Ok(&self.tracker)
    }

    /// Roster with 1-based slot numbers by list position.
    pub fn roster(&self) -> Vec<PlayerRecord> {
        self.players
            .iter()
            .zip(1u32..)
            .map(|((name, game), number)| PlayerRecord::new(name, game, number))
            .collect()
    }
}

// ─── static_tracker ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatapackageRef {
    #[serde(default)]
    pub checksum: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerGame {
    pub player: u32,
    pub game: String,
}

/// `GET /static_tracker/<tracker>`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaticTracker {
    #[serde(default)]
    pub datapackage: BTreeMap<String, DatapackageRef>,
    #[serde(default)]
    pub player_game: Vec<PlayerGame>,
}

impl StaticTracker {
    /// Datapackage checksum per game, without the `Archipelago` pseudo-game.
    pub fn checksums(&self) -> Result<BTreeMap<&str, &str>, FetchError> {
        if self.datapackage.is_empty() {
            return Err(FetchError::MissingDatapackage);
        }
        Ok(self
            .datapackage
            .iter()
            .filter(|(game, package)| {
                game.as_str() != ARCHIPELAGO_GAME && !package.checksum.is_empty()
            })
            .map(|(game, package)| (game.as_str(), package.checksum.as_str()))
            .collect())
    }

    /// Game played by a slot, when the tracker lists it.
    pub fn game_for_player(&self, player_number: u32) -> Option<&str> {
        self.player_game
            .iter()
            .find(|entry| entry.player == player_number)
            .map(|entry| entry.game.as_str())
    }
}

// ─── tracker ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerChecks {
    #[serde(default)]
    pub team: u32,
    pub player: u32,
    #[serde(default)]
    pub locations: Vec<RawId>,
}

/// `GET /tracker/<tracker>`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LiveTracker {
    #[serde(default)]
    pub player_checks_done: Vec<PlayerChecks>,
}

impl LiveTracker {
    /// Checked location ids per slot for one team. Slot numbers repeat across
    /// teams, so other teams' entries are ignored.
    pub fn checked_locations(&self, team: u32) -> CheckedLocations {
        let mut checked = CheckedLocations::new();
        for entry in self.player_checks_done.iter().filter(|e| e.team == team) {
            checked.extend(
                entry.player,
                entry.locations.iter().cloned().map(RawId::into_id),
            );
        }
        checked
    }
}

// ─── datapackage ─────────────────────────────────────────────────────────────

/// `GET /datapackage/<checksum>`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Datapackage {
    #[serde(default)]
    pub location_name_to_id: HashMap<String, RawId>,
}

impl Datapackage {
    pub fn location_ids(&self) -> HashMap<String, String> {
        self.location_name_to_id
            .iter()
            .map(|(name, id)| (name.clone(), id.clone().into_id()))
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/models_tests.rs"]
mod tests;
