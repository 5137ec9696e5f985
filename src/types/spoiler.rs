//! Structured view of a spoiler log playthrough and the results derived from it.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

// ─── Spheres ─────────────────────────────────────────────────────────────────

/// Sphere identifier, kept as the decimal token from the log (`"07"` stays `"07"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SphereId(String);

impl SphereId {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the token. `None` only when it overflows `u64`.
    pub fn number(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    /// Ascending numeric order; unparseable tokens sort last, ties by token text.
    pub fn sort_key(&self) -> (u64, &str) {
        (self.number().unwrap_or(u64::MAX), &self.0)
    }
}

impl std::fmt::Display for SphereId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Location → unlock description pairs of one sphere, in log order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sphere {
    entries: Vec<(String, String)>,
}

impl Sphere {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a location. A repeated key keeps its position and takes the new value.
    pub fn insert(&mut self, location: String, unlock: String) {
        match self.entries.iter_mut().find(|(key, _)| *key == location) {
            Some(entry) => entry.1 = unlock,
            None => self.entries.push((location, unlock)),
        }
    }

    pub fn get(&self, location: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == location)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Sphere {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut sphere = Sphere::new();
        for (key, value) in iter {
            sphere.insert(key.into(), value.into());
        }
        sphere
    }
}

impl Serialize for Sphere {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// All spheres of a playthrough, in the order they appear in the log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SphereIndex {
    spheres: Vec<(SphereId, Sphere)>,
}

impl SphereIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh sphere under `id`, replacing any earlier sphere with the same token.
    pub fn open(&mut self, id: SphereId) -> &mut Sphere {
        let index = match self.spheres.iter().position(|(existing, _)| *existing == id) {
            Some(index) => {
                self.spheres[index].1 = Sphere::new();
                index
            }
            None => {
                self.spheres.push((id, Sphere::new()));
                self.spheres.len() - 1
            }
        };
        &mut self.spheres[index].1
    }

    pub fn get(&self, token: &str) -> Option<&Sphere> {
        self.spheres
            .iter()
            .find(|(id, _)| id.as_str() == token)
            .map(|(_, sphere)| sphere)
    }

    pub fn get_mut(&mut self, token: &str) -> Option<&mut Sphere> {
        self.spheres
            .iter_mut()
            .find(|(id, _)| id.as_str() == token)
            .map(|(_, sphere)| sphere)
    }

    /// Spheres in log order.
    pub fn iter(&self) -> impl Iterator<Item = (&SphereId, &Sphere)> {
        self.spheres.iter().map(|(id, sphere)| (id, sphere))
    }

    /// Spheres in ascending numeric order.
    pub fn ascending(&self) -> Vec<(&SphereId, &Sphere)> {
        let mut ordered: Vec<_> = self.iter().collect();
        ordered.sort_by(|a, b| a.0.sort_key().cmp(&b.0.sort_key()));
        ordered
    }

    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }
}

impl Serialize for SphereIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.spheres.len()))?;
        for (id, sphere) in &self.spheres {
            map.serialize_entry(id, sphere)?;
        }
        map.end()
    }
}

// ─── Players ─────────────────────────────────────────────────────────────────

/// One roster slot of a multiworld room.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub game: String,
    /// 1-based slot number, assigned by roster order.
    pub number: u32,
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>, game: impl Into<String>, number: u32) -> Self {
        Self {
            name: name.into(),
            game: game.into(),
            number,
        }
    }
}

// ─── Fuzzy matches ───────────────────────────────────────────────────────────

/// A single unlock description that matched a wishlist item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// Raw unlock text as it appears in the log.
    pub matched_item: String,
    pub sphere: SphereId,
    /// Best similarity in 0..=100.
    pub confidence: u8,
}

/// All matches for one wishlist item, ungrouped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemMatches {
    pub item: String,
    pub matches: Vec<MatchResult>,
}

/// Matches for one raw unlock text, merged across spheres.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupedMatch {
    pub matched_item: String,
    /// Unique spheres in ascending numeric order.
    pub spheres: Vec<SphereId>,
    pub confidence: u8,
}

// ─── Progression ─────────────────────────────────────────────────────────────

/// Earliest unchecked location that an observer's item unlocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EarliestUnlock {
    pub sphere: SphereId,
    pub location: String,
    pub unlock: String,
}

/// Result for one (observer, owning slot) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotProgress {
    pub owner: PlayerRecord,
    pub earliest: Option<EarliestUnlock>,
}

/// Results for one observer across every slot in roster order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObserverProgress {
    pub player: PlayerRecord,
    pub slots: Vec<SlotProgress>,
}

impl ObserverProgress {
    pub fn slot(&self, owner_name: &str) -> Option<&SlotProgress> {
        self.slots.iter().find(|slot| slot.owner.name == owner_name)
    }
}

#[cfg(test)]
#[path = "tests/spoiler_tests.rs"]
mod tests;
