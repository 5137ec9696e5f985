//! Typed lookups over live-run data: location ids per game and checked ids per slot.

use std::collections::{HashMap, HashSet};

/// Canonical location name → opaque id, per game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationIdTable {
    games: HashMap<String, HashMap<String, String>>,
}

impl LocationIdTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the name → id table for `game`.
    pub fn insert_game(&mut self, game: impl Into<String>, table: HashMap<String, String>) {
        self.games.insert(game.into(), table);
    }

    /// Add a single entry, creating the game's table on first use.
    pub fn insert(
        &mut self,
        game: impl Into<String>,
        location: impl Into<String>,
        id: impl Into<String>,
    ) {
        self.games
            .entry(game.into())
            .or_default()
            .insert(location.into(), id.into());
    }

    /// Id for a canonical location name in `game`, if the game knows it.
    pub fn location_id(&self, game: &str, location: &str) -> Option<&str> {
        self.games
            .get(game)
            .and_then(|table| table.get(location))
            .map(String::as_str)
    }

    pub fn has_game(&self, game: &str) -> bool {
        self.games.contains_key(game)
    }
}

/// Location ids already claimed in the live run, per 1-based slot number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckedLocations {
    by_player: HashMap<u32, HashSet<String>>,
}

impl CheckedLocations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, player_number: u32, location_id: impl Into<String>) {
        self.by_player
            .entry(player_number)
            .or_default()
            .insert(location_id.into());
    }

    pub fn extend<I, S>(&mut self, player_number: u32, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.by_player
            .entry(player_number)
            .or_default()
            .extend(ids.into_iter().map(Into::into));
    }

    pub fn is_checked(&self, player_number: u32, location_id: &str) -> bool {
        self.by_player
            .get(&player_number)
            .is_some_and(|ids| ids.contains(location_id))
    }

    pub fn checked_count(&self, player_number: u32) -> usize {
        self.by_player.get(&player_number).map_or(0, HashSet::len)
    }
}
