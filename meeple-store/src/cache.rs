//! On-disk catalog cache, so every command after `fetch` works offline.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use meeple_catalog::GameRecord;
use serde::{Deserialize, Serialize};

use crate::StoreError;

/// Default cache file: `<cache_dir>/meeple/catalog.json`.
pub fn default_path() -> Result<PathBuf, StoreError> {
    let base = dirs::cache_dir().ok_or(StoreError::NoBaseDir("cache"))?;
    Ok(base.join("meeple").join("catalog.json"))
}

/// A fetched catalog together with where and when it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedCatalog {
    pub url: String,
    pub fetched_at: DateTime<Utc>,
    pub games: Vec<GameRecord>,
}

impl CachedCatalog {
    pub fn new(url: impl Into<String>, games: Vec<GameRecord>) -> Self {
        Self {
            url: url.into(),
            fetched_at: Utc::now(),
            games,
        }
    }

    /// Load the cache from `path`. Returns `Ok(None)` if no cache exists
    /// yet, or if the existing file fails to parse; a re-fetch rewrites a
    /// bad cache, so it is never worth failing a command over.
    pub fn load(path: &Path) -> Result<Option<Self>, StoreError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&contents) {
            Ok(cached) => Ok(Some(cached)),
            Err(e) => {
                log::debug!(
                    "Ignoring unreadable catalog cache {}: {}",
                    path.display(),
                    e,
                );
                Ok(None)
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        crate::write_json_atomic(path, self)
    }
}
