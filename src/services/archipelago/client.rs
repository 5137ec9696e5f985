//! Blocking HTTP client for the Archipelago web API and spoiler downloads.

use log::{info, warn};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::models::{Datapackage, LiveTracker, RoomStatus, StaticTracker};
use crate::types::errors::FetchError;

/// Public Archipelago API root.
pub const DEFAULT_API_BASE_URL: &str = "https://archipelago.gg/api";

const MAX_RETRIES: u32 = 3;
const INITIAL_BACKOFF: Duration = Duration::from_millis(500);

pub struct ArchipelagoClient {
    client: Client,
    base_url: String,
}

impl ArchipelagoClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `<base>/<endpoint>/<id>` with the id percent-encoded.
    pub fn endpoint_url(&self, endpoint: &str, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, endpoint, urlencoding::encode(id))
    }

    /// Download a spoiler log and split it into lines.
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn fetch_spoiler_lines(&self, url: &str) -> Result<Vec<String>, FetchError> {
        let response = self.get(url)?;
        let bytes = response.bytes()?;
        let text = String::from_utf8_lossy(&bytes);
        Ok(text.lines().map(str::to_string).collect())
    }

    pub fn room_status(&self, room_id: &str) -> Result<RoomStatus, FetchError> {
        self.get_json(&self.endpoint_url("room_status", room_id))
    }

    pub fn static_tracker(&self, tracker_id: &str) -> Result<StaticTracker, FetchError> {
        self.get_json(&self.endpoint_url("static_tracker", tracker_id))
    }

    pub fn tracker(&self, tracker_id: &str) -> Result<LiveTracker, FetchError> {
        self.get_json(&self.endpoint_url("tracker", tracker_id))
    }

    pub fn datapackage(&self, checksum: &str) -> Result<Datapackage, FetchError> {
        self.get_json(&self.endpoint_url("datapackage", checksum))
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self.get(url)?;
        let bytes = response.bytes()?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// GET with exponential backoff on 429; any other non-success status fails.
    fn get(&self, url: &str) -> Result<Response, FetchError> {
        let mut delay = INITIAL_BACKOFF;

        for attempt in 0..=MAX_RETRIES {
            info!("Downloading {}", url);
            let response = self.client.get(url).send()?;
            let status = response.status();

            if status == StatusCode::TOO_MANY_REQUESTS {
                if attempt < MAX_RETRIES {
                    warn!(
                        "Rate limited (429), retry {}/{} in {:?}",
                        attempt + 1,
                        MAX_RETRIES,
                        delay
                    );
                    std::thread::sleep(delay);
                    delay *= 2;
                    continue;
                }
                break;
            }

            if !status.is_success() {
                return Err(FetchError::Status {
                    url: url.to_string(),
                    status: status.as_u16(),
                });
            }

            return Ok(response);
        }

        Err(FetchError::RateLimited {
            url: url.to_string(),
            attempts: MAX_RETRIES + 1,
        })
    }
}
