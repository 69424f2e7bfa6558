//! Field-coalescing adapter: converts arbitrary upstream JSON into the
//! canonical [`GameRecord`] shape once, at load time.
//!
//! Upstream sources disagree on field names (`genre`/`genres`/`category`,
//! `playtime`/`duration`, `min_age`/`age`, ...) and on field shapes. All of
//! that duck-typing lives here so downstream logic sees one shape only.
//! Adaptation degrades rather than fails: a record with every field missing
//! still adapts, to a placeholder-titled empty record.

use serde::Deserialize;
use serde_json::Value;

use crate::normalize::{self, slugify};
use crate::types::{GameId, GameRecord, Keyed};

/// A raw upstream record carrying every known field spelling. Polymorphic
/// fields stay as `serde_json::Value` so a malformed value degrades at the
/// field level instead of rejecting the whole record.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawGameRecord {
    pub id: Option<Value>,
    pub title: Option<Value>,
    pub name: Option<Value>,
    pub genre: Option<Value>,
    pub genres: Option<Value>,
    pub category: Option<Value>,
    pub categories: Option<Value>,
    pub players: Option<Value>,
    #[serde(alias = "minPlayers")]
    pub min_players: Option<Value>,
    pub min_player: Option<Value>,
    pub playtime: Option<Value>,
    pub duration: Option<Value>,
    pub min_age: Option<Value>,
    pub age: Option<Value>,
    pub location: Option<Value>,
    pub store: Option<Value>,
    pub place: Option<Value>,
    pub difficulty: Option<Value>,
    pub level: Option<Value>,
    pub difficulty_level: Option<Value>,
    pub rating: Option<Value>,
    pub description: Option<Value>,
    pub image: Option<Value>,
    pub image_url: Option<Value>,
}

impl RawGameRecord {
    /// Adapt this raw record into the canonical shape.
    pub fn adapt(&self) -> GameRecord {
        let title = normalize::text_value(self.title.as_ref().or(self.name.as_ref()))
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "Untitled".to_string());

        let id = normalize::text_value(self.id.as_ref())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(GameId::new)
            .unwrap_or_else(|| GameId::new(slugify(&title)));

        let genres = normalize::normalize_genres(
            self.genre
                .as_ref()
                .or(self.genres.as_ref())
                .or(self.category.as_ref())
                .or(self.categories.as_ref()),
        );

        let players = normalize::normalize_players(
            self.players.as_ref(),
            self.min_players.as_ref().or(self.min_player.as_ref()),
        );

        let playtime_minutes =
            normalize::normalize_number(self.playtime.as_ref().or(self.duration.as_ref()));
        let min_age = normalize::normalize_number(self.min_age.as_ref().or(self.age.as_ref()));

        let location = normalize::text_value(
            self.location
                .as_ref()
                .or(self.store.as_ref())
                .or(self.place.as_ref()),
        )
        .as_deref()
        .and_then(Keyed::from_label);

        let difficulty = normalize::text_value(
            self.difficulty
                .as_ref()
                .or(self.level.as_ref())
                .or(self.difficulty_level.as_ref()),
        )
        .as_deref()
        .and_then(Keyed::from_label);

        let rating = self.rating.as_ref().and_then(normalize::number_value);

        let description = normalize::text_value(self.description.as_ref())
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        let image_url = normalize::text_value(self.image.as_ref().or(self.image_url.as_ref()))
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());

        GameRecord {
            id,
            title,
            genres,
            players,
            playtime_minutes,
            min_age,
            location,
            difficulty,
            rating,
            description,
            image_url,
        }
    }
}

/// Adapt a single JSON value; returns `None` when it is not an object.
pub fn adapt_value(v: &Value) -> Option<GameRecord> {
    if !v.is_object() {
        return None;
    }
    let raw: RawGameRecord = serde_json::from_value(v.clone()).ok()?;
    Some(raw.adapt())
}
