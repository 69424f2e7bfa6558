//! Canonical data model types for the board-game catalog.
//!
//! Every upstream field has been coalesced and normalized exactly once by
//! the adapter, so downstream filtering and rendering never re-derive it.
//! Records are immutable after adaptation; filtering produces new derived
//! sequences and never mutates a record in place.

use serde::{Deserialize, Serialize};

use crate::normalize::norm_text;

// ── Identity ────────────────────────────────────────────────────────────────

/// Identity of a game record.
///
/// Uses the upstream id when the source provides one, otherwise a slug of
/// the title. Two distinct records that share a title and carry no upstream
/// id therefore collide; the favorites overlay treats them as the same game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Categorical values ──────────────────────────────────────────────────────

/// A categorical value: lowercased/trimmed comparison key plus the
/// original-case label kept for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyed {
    pub key: String,
    pub label: String,
}

impl Keyed {
    /// Build from a raw label. Returns `None` for blank input.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }
        Some(Self {
            key: norm_text(label),
            label: label.to_string(),
        })
    }
}

// ── Player counts ───────────────────────────────────────────────────────────

/// Player count range; `min` is the representative value used for bucket
/// matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRange {
    pub min: u32,
    pub max: u32,
}

impl PlayerRange {
    /// Human display string: a single number, or `"min-max"` when they differ.
    pub fn display(&self) -> String {
        if self.min == self.max {
            self.min.to_string()
        } else {
            format!("{}-{}", self.min, self.max)
        }
    }
}

// ── Game records ────────────────────────────────────────────────────────────

/// A canonical game record. `Serialize` because the favorites overlay
/// persists full snapshots, not just ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    pub title: String,
    #[serde(default)]
    pub genres: Vec<Keyed>,
    #[serde(default)]
    pub players: Option<PlayerRange>,
    /// Playtime in minutes; 0 means unknown (unconstrained-low when filtering).
    #[serde(default)]
    pub playtime_minutes: u32,
    /// Minimum recommended age; 0 means unknown.
    #[serde(default)]
    pub min_age: u32,
    #[serde(default)]
    pub location: Option<Keyed>,
    #[serde(default)]
    pub difficulty: Option<Keyed>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl GameRecord {
    /// True if any genre key equals `key` (already-normalized comparison key).
    pub fn has_genre(&self, key: &str) -> bool {
        self.genres.iter().any(|g| g.key == key)
    }

    /// Representative minimum player count; 0 when unknown.
    pub fn min_players(&self) -> u32 {
        self.players.map(|p| p.min).unwrap_or(0)
    }
}
