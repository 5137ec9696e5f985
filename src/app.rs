//! End-to-end orchestration: settings → documents → spheres → matches and hints.

use anyhow::Context;
use serde::Serialize;
use std::time::Duration;

use crate::services::archipelago::{ArchipelagoClient, RoomSnapshot};
use crate::services::config::{self, OutputFormat, ScoutSettings};
use crate::services::matching::item_matcher::find_item_spheres_fuzzy;
use crate::services::progression::analyzer::find_earliest_unlocks;
use crate::services::report;
use crate::services::spoiler::parse_spoiler;
use crate::types::errors::ScoutResult;
use crate::types::spoiler::{ItemMatches, ObserverProgress, SphereIndex};

/// Everything one analysis run produces.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub spheres: SphereIndex,
    pub matches: Vec<ItemMatches>,
    /// Present only when room data was available.
    pub progression: Option<Vec<ObserverProgress>>,
}

/// Analyze an already-fetched spoiler document.
///
/// `players` feeds the line grammar. With a `snapshot`, the progression query
/// runs against its roster and tracker data.
pub fn analyze_document<S, P>(
    document: &[S],
    players: &[P],
    wishlist: &[String],
    threshold: u8,
    snapshot: Option<&RoomSnapshot>,
) -> ScoutResult<Analysis>
where
    S: AsRef<str>,
    P: AsRef<str>,
{
    let spheres = parse_spoiler(document, players)?;
    let matches = find_item_spheres_fuzzy(&spheres, wishlist, threshold);
    let progression = snapshot.map(|room| {
        find_earliest_unlocks(&room.roster, &spheres, &room.locations, &room.checked)
    });

    Ok(Analysis {
        spheres,
        matches,
        progression,
    })
}

/// Fetch everything `settings` points at and analyze it.
pub fn analyze(settings: &ScoutSettings) -> anyhow::Result<Analysis> {
    let client = ArchipelagoClient::new(
        &settings.api_base_url,
        Duration::from_secs(settings.request_timeout_secs),
    )?;

    let document = load_document(settings, &client)?;

    let snapshot = match settings.room_id.as_deref() {
        Some(room_id) => Some(
            RoomSnapshot::fetch(&client, room_id, settings.team)
                .with_context(|| format!("Failed to fetch room data for {room_id}"))?,
        ),
        None => None,
    };

    let players: Vec<String> = match &snapshot {
        Some(room) => room.roster.iter().map(|p| p.name.clone()).collect(),
        None => settings.players.clone(),
    };

    let analysis = analyze_document(
        &document,
        &players,
        &settings.wishlist,
        settings.fuzzy_threshold,
        snapshot.as_ref(),
    )?;

    log::info!(
        "Analyzed {} sphere(s) for {} player(s)",
        analysis.spheres.len(),
        players.len()
    );
    Ok(analysis)
}

fn load_document(
    settings: &ScoutSettings,
    client: &ArchipelagoClient,
) -> anyhow::Result<Vec<String>> {
    if let Some(url) = &settings.spoiler_url {
        return client
            .fetch_spoiler_lines(url)
            .with_context(|| format!("Failed to download spoiler log from {url}"));
    }

    let path = settings
        .spoiler_path
        .as_ref()
        .context("No spoiler source configured")?;
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read spoiler log {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::to_string)
        .collect())
}

/// Render an analysis in the configured format.
pub fn render(analysis: &Analysis, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(report::to_json(
            &analysis.matches,
            analysis.progression.as_deref(),
        )?),
        OutputFormat::Text => {
            let mut lines = report::format_match_lines(&analysis.matches);
            if let Some(progress) = &analysis.progression {
                lines.extend(report::format_progress_lines(progress));
            }
            Ok(lines.join("\n"))
        }
    }
}

/// Binary entry point.
pub fn run() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = config::config_path_from_args(std::env::args());
    let settings = config::load_settings(&path)
        .with_context(|| format!("Invalid settings in {}", path.display()))?;

    let analysis = analyze(&settings)?;
    println!("{}", render(&analysis, settings.output)?);
    Ok(())
}
