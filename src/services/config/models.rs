use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::services::archipelago::DEFAULT_API_BASE_URL;
use crate::services::matching::item_matcher::DEFAULT_FUZZY_THRESHOLD;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ScoutSettings {
    /// Download link for the spoiler log.
    pub spoiler_url: Option<String>,
    /// Local spoiler log, used when no URL is set.
    pub spoiler_path: Option<PathBuf>,
    /// Room to pull roster and live tracker data from.
    pub room_id: Option<String>,
    /// Team whose checks count as done in a multi-team room.
    pub team: u32,
    /// Slot names as they appear in the spoiler log (ignored when a room is set).
    pub players: Vec<String>,
    /// Items to look for; case, underscores and owner tags don't matter.
    pub wishlist: Vec<String>,
    pub fuzzy_threshold: u8,
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub output: OutputFormat,
}

impl Default for ScoutSettings {
    fn default() -> Self {
        Self {
            spoiler_url: None,
            spoiler_path: None,
            room_id: None,
            team: 0,
            players: Vec::new(),
            wishlist: Vec::new(),
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            api_base_url: DEFAULT_API_BASE_URL.into(),
            request_timeout_secs: 30,
            output: OutputFormat::Text,
        }
    }
}
