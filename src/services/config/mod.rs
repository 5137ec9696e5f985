pub mod models;

pub use models::*;

use std::path::{Path, PathBuf};

use crate::types::errors::ConfigError;

/// Config file read when no path is given on the command line.
pub const DEFAULT_CONFIG_FILE: &str = "spherescout.json";

pub const ENV_SPOILER_URL: &str = "SPHERESCOUT_SPOILER_URL";
pub const ENV_ROOM_ID: &str = "SPHERESCOUT_ROOM_ID";
pub const ENV_THRESHOLD: &str = "SPHERESCOUT_THRESHOLD";
pub const ENV_API_BASE_URL: &str = "SPHERESCOUT_API_BASE_URL";

impl ScoutSettings {
    /// Reject settings the analysis cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fuzzy_threshold > 100 {
            return Err(ConfigError::InvalidThreshold(self.fuzzy_threshold));
        }
        if self.spoiler_url.is_none() && self.spoiler_path.is_none() {
            return Err(ConfigError::MissingSource);
        }
        Ok(())
    }

    /// Override fields from environment-style key lookups.
    ///
    /// An unparseable threshold is logged and ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_SPOILER_URL) {
            self.spoiler_url = Some(url);
        }
        if let Some(room) = lookup(ENV_ROOM_ID) {
            self.room_id = Some(room);
        }
        if let Some(base) = lookup(ENV_API_BASE_URL) {
            self.api_base_url = base;
        }
        if let Some(raw) = lookup(ENV_THRESHOLD) {
            match raw.trim().parse::<u8>() {
                Ok(threshold) => self.fuzzy_threshold = threshold,
                Err(e) => log::warn!("Ignoring {ENV_THRESHOLD}='{raw}': {e}"),
            }
        }
    }
}

/// Read settings from a JSON file. A missing file yields defaults.
pub fn load_settings_file(path: &Path) -> Result<ScoutSettings, ConfigError> {
    if !path.exists() {
        log::warn!("Config file {} not found, using defaults", path.display());
        return Ok(ScoutSettings::default());
    }

    let contents = std::fs::read_to_string(path)?;
    let settings = serde_json::from_str(&contents)?;
    log::info!("Loaded settings from {}", path.display());
    Ok(settings)
}

/// Load the file, apply `.env` and process environment overrides, validate.
pub fn load_settings(path: &Path) -> Result<ScoutSettings, ConfigError> {
    let mut settings = load_settings_file(path)?;

    let _ = dotenvy::dotenv(); // Try to load .env, ignore if missing
    settings.apply_overrides(|key| std::env::var(key).ok());

    settings.validate()?;
    Ok(settings)
}

/// Config path from the first CLI argument, else [`DEFAULT_CONFIG_FILE`].
pub fn config_path_from_args<I: IntoIterator<Item = String>>(args: I) -> PathBuf {
    args.into_iter()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
