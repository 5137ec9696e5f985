use thiserror::Error;

/// Failure to compile the spoiler line grammar from a player set.
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("Cannot build a line grammar without any player names")]
    NoPlayers,
    #[error("Invalid grammar pattern: {0}")]
    Build(#[from] regex::Error),
}

/// Fatal failure while turning a playthrough block into spheres.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unparseable line: {line}")]
    GrammarMismatch { line: String },
}

/// Failure while retrieving or decoding collaborator documents.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP {status} while downloading {url}")]
    Status { url: String, status: u16 },
    #[error("Rate limited after {attempts} attempts: {url}")]
    RateLimited { url: String, attempts: u32 },
    #[error("JSON parse failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not find tracker id in room status")]
    MissingTracker,
    #[error("Could not find datapackage in static tracker JSON")]
    MissingDatapackage,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Fuzzy threshold must be within 0..=100, got {0}")]
    InvalidThreshold(u8),
    #[error("Neither spoiler_url nor spoiler_path is configured")]
    MissingSource,
}

/// Umbrella error for library entry points.
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error(transparent)]
    Grammar(#[from] GrammarError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type ScoutResult<T> = Result<T, ScoutError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
