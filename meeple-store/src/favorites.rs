//! Persisted favorites overlay.
//!
//! Favorites are full [`GameRecord`] snapshots keyed by [`GameId`], so a
//! favorite stays self-contained even if the catalog changes or disappears.
//! Every mutation rewrites the whole sequence on save.

use std::path::{Path, PathBuf};

use meeple_catalog::{GameId, GameRecord};

use crate::StoreError;

/// Default favorites file: `<data_dir>/meeple/favorites.json`.
pub fn default_path() -> Result<PathBuf, StoreError> {
    let base = dirs::data_dir().ok_or(StoreError::NoBaseDir("data"))?;
    Ok(base.join("meeple").join("favorites.json"))
}

/// The user's favorite games, in insertion order, unique by id.
#[derive(Debug, Default, Clone)]
pub struct Favorites {
    games: Vec<GameRecord>,
}

impl Favorites {
    /// Load favorites from `path`. A missing or unreadable file, or one
    /// that fails to parse, loads as an empty set.
    pub fn load(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str::<Vec<GameRecord>>(&contents) {
            Ok(games) => Self { games },
            Err(e) => {
                log::debug!(
                    "Ignoring unreadable favorites file {}: {}",
                    path.display(),
                    e,
                );
                Self::default()
            }
        }
    }

    /// Write the full sequence to `path`.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        crate::write_json_atomic(path, &self.games)
    }

    pub fn is_favorite(&self, id: &GameId) -> bool {
        self.games.iter().any(|g| g.id == *id)
    }

    /// Toggle a record in the set; returns the new favorite state.
    pub fn toggle(&mut self, record: &GameRecord) -> bool {
        if self.is_favorite(&record.id) {
            self.games.retain(|g| g.id != record.id);
            false
        } else {
            self.games.push(record.clone());
            true
        }
    }

    /// Add a record; returns false if it was already a favorite.
    pub fn add(&mut self, record: &GameRecord) -> bool {
        if self.is_favorite(&record.id) {
            return false;
        }
        self.games.push(record.clone());
        true
    }

    /// Remove by id; returns false if it was not a favorite.
    pub fn remove(&mut self, id: &GameId) -> bool {
        let before = self.games.len();
        self.games.retain(|g| g.id != *id);
        self.games.len() != before
    }

    pub fn clear(&mut self) {
        self.games.clear();
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
