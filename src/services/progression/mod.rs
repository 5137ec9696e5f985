//! Cross-player progression hints built on the parsed playthrough and live tracker data.

pub mod analyzer;
pub mod location;
pub mod tracker;
