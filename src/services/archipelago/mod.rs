//! Archipelago web API boundary.
//!
//! Fetches the spoiler log and the room / static tracker / datapackage / live
//! tracker documents, and exposes them through typed accessors so the analysis
//! code never touches raw JSON.

pub mod client;
pub mod models;
pub mod snapshot;

pub use client::{ArchipelagoClient, DEFAULT_API_BASE_URL};
pub use snapshot::RoomSnapshot;
