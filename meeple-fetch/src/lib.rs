//! Catalog download and decoding.
//!
//! The upstream catalog is a single JSON array of loosely-shaped game
//! objects. Fetching pulls the whole document in one request; decoding
//! runs each element through the adapter so oddly-shaped entries degrade
//! field by field instead of failing the load.

pub mod error;

pub use error::FetchError;

use std::time::Duration;

use meeple_catalog::{GameRecord, adapt_value};
use serde_json::Value;

/// Catalog used when no `--url` is given.
pub const DEFAULT_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/cederdorff/race/master/data/games.json";

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Download the catalog at `url` and decode it into game records.
pub async fn fetch_catalog(url: &str) -> Result<Vec<GameRecord>, FetchError> {
    let http = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;

    let resp = http.get(url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let text = resp.text().await?;
    parse_catalog(&text)
}

/// Decode a catalog document. Elements that are not JSON objects are
/// dropped with a warning; everything else adapts into a record.
pub fn parse_catalog(text: &str) -> Result<Vec<GameRecord>, FetchError> {
    let entries: Vec<Value> = serde_json::from_str(text)?;

    let mut games = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        match adapt_value(entry) {
            Some(record) => games.push(record),
            None => log::warn!("Dropping catalog entry {i}: not an object"),
        }
    }
    Ok(games)
}
