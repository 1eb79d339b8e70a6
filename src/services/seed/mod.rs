//! Static seed data loaded once at startup.
//!
//! The seed is a JSON array of `{title, time, duration, date}` objects. A copy
//! ships inside the binary; a file configured in settings replaces it.

use crate::models::event::EventDraft;
use crate::services::event::EventStore;
use crate::utils::date::parse_iso;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const BUILTIN_SEED: &str = include_str!("../../../assets/events.json");

/// One record as it appears in the seed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedRecord {
    pub title: String,
    pub time: String,
    #[serde(default)]
    pub duration: String,
    pub date: String,
}

/// Parse seed JSON into a store.
///
/// Records without a title or with a date that is not a real "YYYY-MM-DD"
/// day are skipped and logged; malformed JSON fails the whole load.
pub fn parse_seed(json: &str) -> Result<EventStore> {
    let records: Vec<SeedRecord> =
        serde_json::from_str(json).context("Failed to parse seed events JSON")?;

    let total = records.len();
    let mut skipped = 0;
    let mut accepted = Vec::with_capacity(total);

    for (index, record) in records.into_iter().enumerate() {
        if record.title.trim().is_empty() {
            log::warn!("Skipping seed record {}: empty title", index);
            skipped += 1;
            continue;
        }

        let Some(date) = parse_iso(&record.date) else {
            log::warn!(
                "Skipping seed record {} ('{}'): invalid date '{}'",
                index,
                record.title,
                record.date
            );
            skipped += 1;
            continue;
        };

        accepted.push((
            EventDraft::new(record.title, record.time, record.duration),
            date,
        ));
    }

    log::info!(
        "Seed load complete: {} events loaded, {} skipped",
        total - skipped,
        skipped
    );

    Ok(EventStore::from_records(accepted))
}

/// Load the configured seed file, or the built-in seed when none is set.
pub fn load_seed(path: Option<&Path>) -> Result<EventStore> {
    match path {
        Some(path) => {
            log::info!("Loading seed events from {}", path.display());
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read seed file {}", path.display()))?;
            parse_seed(&json)
                .with_context(|| format!("Invalid seed file {}", path.display()))
        }
        None => parse_seed(BUILTIN_SEED),
    }
}

/// The embedded dataset; an empty store if it cannot be parsed.
pub fn builtin_store() -> EventStore {
    parse_seed(BUILTIN_SEED).unwrap_or_else(|err| {
        log::error!("Built-in seed is unusable, starting empty: {:#}", err);
        EventStore::new()
    })
}
