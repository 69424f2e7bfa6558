//! Option populators: derive the distinct selectable values for each filter
//! field from the catalog, for building selection menus.
//!
//! Every list gets a synthetic `all` (no-constraint) entry prepended.
//! Categorical fields dedupe case-insensitively and keep the first-seen
//! original-case label as display text.

use crate::types::{GameRecord, Keyed};

/// One selectable filter value: stable comparison key plus display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub key: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Distinct genres present in the catalog.
pub fn genre_options(catalog: &[GameRecord]) -> Vec<SelectOption> {
    keyed_options(
        catalog.iter().flat_map(|r| r.genres.iter()),
        "All genres",
    )
}

/// Distinct locations present in the catalog.
pub fn location_options(catalog: &[GameRecord]) -> Vec<SelectOption> {
    keyed_options(
        catalog.iter().filter_map(|r| r.location.as_ref()),
        "All locations",
    )
}

/// Distinct difficulties present in the catalog.
pub fn difficulty_options(catalog: &[GameRecord]) -> Vec<SelectOption> {
    keyed_options(
        catalog.iter().filter_map(|r| r.difficulty.as_ref()),
        "Any difficulty",
    )
}

/// Distinct minimum player counts, ascending. Falls back to a fixed default
/// set when the catalog yields none; an open-ended `5+` bucket is always
/// appended.
pub fn player_options(catalog: &[GameRecord]) -> Vec<SelectOption> {
    let mut counts: Vec<u32> = catalog
        .iter()
        .filter_map(|r| r.players.map(|p| p.min))
        .filter(|n| *n > 0)
        .collect();
    counts.sort_unstable();
    counts.dedup();
    if counts.is_empty() {
        counts = vec![1, 2, 3, 4];
    }

    let mut out = vec![SelectOption::new("all", "Any player count")];
    out.extend(
        counts
            .iter()
            .map(|n| SelectOption::new(n.to_string(), n.to_string())),
    );
    out.push(SelectOption::new("5+", "5+"));
    out
}

/// Fixed playtime buckets; deliberately not data-derived.
pub fn playtime_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("all", "Any playtime"),
        SelectOption::new("0-15", "<15 min"),
        SelectOption::new("15-30", "15-30 min"),
        SelectOption::new("30-60", "30-60 min"),
        SelectOption::new("60+", "60+ min"),
    ]
}

/// Distinct positive minimum ages, ascending; falls back to {6, 8, 10} when
/// the catalog yields none.
pub fn age_options(catalog: &[GameRecord]) -> Vec<SelectOption> {
    let mut ages: Vec<u32> = catalog
        .iter()
        .map(|r| r.min_age)
        .filter(|a| *a > 0)
        .collect();
    ages.sort_unstable();
    ages.dedup();
    if ages.is_empty() {
        ages = vec![6, 8, 10];
    }

    let mut out = vec![SelectOption::new("all", "Any age")];
    out.extend(
        ages.iter()
            .map(|a| SelectOption::new(a.to_string(), format!("{a}+"))),
    );
    out
}

/// Dedupe by key (first-seen label wins), sort case-insensitively by label,
/// prepend the no-constraint entry.
fn keyed_options<'a>(
    values: impl Iterator<Item = &'a Keyed>,
    all_label: &str,
) -> Vec<SelectOption> {
    let mut distinct: Vec<SelectOption> = Vec::new();
    for keyed in values {
        if !distinct.iter().any(|o| o.key == keyed.key) {
            distinct.push(SelectOption::new(&keyed.key, &keyed.label));
        }
    }
    distinct.sort_by(|a, b| a.label.to_lowercase().cmp(&b.label.to_lowercase()));

    let mut out = vec![SelectOption::new("all", all_label)];
    out.extend(distinct);
    out
}
