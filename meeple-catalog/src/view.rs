//! Declarative view-models for rendering.
//!
//! Render functions take a [`GameRecord`] and return a structured
//! description with the display strings already computed, decoupled from
//! any output surface. Missing fields degrade to placeholder values.

use crate::types::GameRecord;

/// Card summary for list output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub title: String,
    pub rating: String,
    pub genres: String,
    pub playtime: String,
    pub players: String,
    pub description: String,
    pub favorite: bool,
}

impl CardView {
    pub fn from_record(record: &GameRecord, favorite: bool) -> Self {
        Self {
            title: record.title.clone(),
            rating: record
                .rating
                .map(format_rating)
                .unwrap_or_else(|| "N/A".to_string()),
            genres: genre_label(record),
            playtime: playtime_label(record, "-"),
            players: record
                .players
                .map(|p| p.display())
                .unwrap_or_else(|| "-".to_string()),
            description: record.description.clone().unwrap_or_default(),
            favorite,
        }
    }
}

/// Full detail view (the equivalent of the browser's detail modal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub rating: String,
    pub genres: String,
    pub players: String,
    pub playtime: String,
    pub min_age: String,
    pub location: String,
    pub difficulty: String,
    pub description: String,
    pub image_url: Option<String>,
    pub favorite: bool,
}

impl DetailView {
    pub fn from_record(record: &GameRecord, favorite: bool) -> Self {
        Self {
            title: record.title.clone(),
            rating: record
                .rating
                .map(format_rating)
                .unwrap_or_else(|| "N/A".to_string()),
            genres: genre_label(record),
            players: record
                .players
                .map(|p| p.display())
                .unwrap_or_else(|| "Unknown".to_string()),
            playtime: playtime_label(record, "Unknown"),
            min_age: if record.min_age > 0 {
                format!("{}+", record.min_age)
            } else {
                "Unknown".to_string()
            },
            location: record
                .location
                .as_ref()
                .map(|k| k.label.clone())
                .unwrap_or_else(|| "Unknown".to_string()),
            difficulty: record
                .difficulty
                .as_ref()
                .map(|k| k.label.clone())
                .unwrap_or_else(|| "Unknown".to_string()),
            description: record.description.clone().unwrap_or_default(),
            image_url: record.image_url.clone(),
            favorite,
        }
    }
}

fn format_rating(r: f64) -> String {
    if r.fract() == 0.0 {
        format!("{r:.0}")
    } else {
        format!("{r:.1}")
    }
}

fn genre_label(record: &GameRecord) -> String {
    if record.genres.is_empty() {
        "-".to_string()
    } else {
        record
            .genres
            .iter()
            .map(|g| g.label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn playtime_label(record: &GameRecord, fallback: &str) -> String {
    if record.playtime_minutes > 0 {
        format!("{} min", record.playtime_minutes)
    } else {
        fallback.to_string()
    }
}
