//! Filter engine: predicate composition over the catalog.
//!
//! A record is retained iff ALL active criteria match. Filtering is stable
//! (original relative order preserved) and idempotent; the all-defaults
//! criteria returns the full catalog unchanged.

use std::cmp::Ordering;
use std::str::FromStr;

use thiserror::Error;

use crate::normalize::norm_text;
use crate::types::GameRecord;

// ── Range options ───────────────────────────────────────────────────────────

/// A bucket/range filter value used by the player and playtime filters:
/// always-match, open-ended lower bound, inclusive range, or exact match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeOption {
    /// `"all"`: no constraint.
    #[default]
    All,
    /// `"N+"`: value >= N.
    AtLeast(u32),
    /// `"a-b"`: a <= value <= b, inclusive.
    Between(u32, u32),
    /// `"N"`: value == N.
    Exactly(u32),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid range option {0:?} (expected \"all\", \"N\", \"N+\", or \"a-b\")")]
pub struct ParseRangeOptionError(pub String);

impl FromStr for RangeOption {
    type Err = ParseRangeOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ParseRangeOptionError(s.to_string());
        let t = s.trim();
        if t.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        if let Some(prefix) = t.strip_suffix('+') {
            return prefix.trim().parse().map(Self::AtLeast).map_err(|_| bad());
        }
        if let Some((lo, hi)) = t.split_once('-') {
            let lo = lo.trim().parse().map_err(|_| bad())?;
            let hi = hi.trim().parse().map_err(|_| bad())?;
            return Ok(Self::Between(lo, hi));
        }
        t.parse().map(Self::Exactly).map_err(|_| bad())
    }
}

impl std::fmt::Display for RangeOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::AtLeast(n) => write!(f, "{n}+"),
            Self::Between(lo, hi) => write!(f, "{lo}-{hi}"),
            Self::Exactly(n) => write!(f, "{n}"),
        }
    }
}

impl RangeOption {
    /// The range-bucket matching rule shared by the player and playtime
    /// filters.
    pub fn matches(&self, value: u32) -> bool {
        match *self {
            Self::All => true,
            Self::AtLeast(n) => value >= n,
            Self::Between(lo, hi) => value >= lo && value <= hi,
            Self::Exactly(n) => value == n,
        }
    }
}

// ── Criteria ────────────────────────────────────────────────────────────────

/// A snapshot of active filter controls. `Default` is the no-constraint
/// criteria: filtering with it returns the full catalog in original order.
///
/// Categorical selections (`genre`, `location`, `difficulty`) compare
/// against normalized keys; `None`, blank, and the literal `"all"` sentinel
/// all mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Free-text query matched case-insensitively against title or description.
    pub query: Option<String>,
    pub genre: Option<String>,
    pub players: RangeOption,
    pub playtime: RangeOption,
    pub location: Option<String>,
    pub difficulty: Option<String>,
    /// Minimum recommended age threshold; records below it are excluded.
    pub min_age: Option<u32>,
}

impl FilterCriteria {
    /// True when every active criterion matches `record`.
    pub fn matches(&self, record: &GameRecord) -> bool {
        if let Some(q) = active(&self.query) {
            let title = record.title.to_lowercase();
            let desc = record
                .description
                .as_deref()
                .unwrap_or("")
                .to_lowercase();
            if !title.contains(&q) && !desc.contains(&q) {
                return false;
            }
        }

        if let Some(genre) = active(&self.genre)
            && !record.has_genre(&genre)
        {
            return false;
        }

        if !self.players.matches(record.min_players()) {
            return false;
        }
        if !self.playtime.matches(record.playtime_minutes) {
            return false;
        }

        if let Some(location) = active(&self.location)
            && !record
                .location
                .as_ref()
                .is_some_and(|k| k.key == location)
        {
            return false;
        }

        if let Some(difficulty) = active(&self.difficulty)
            && !record
                .difficulty
                .as_ref()
                .is_some_and(|k| k.key == difficulty)
        {
            return false;
        }

        if let Some(age) = self.min_age
            && record.min_age < age
        {
            return false;
        }

        true
    }
}

/// Normalize a selection; `None` when it imposes no constraint.
fn active(selection: &Option<String>) -> Option<String> {
    let normalized = norm_text(selection.as_deref()?);
    if normalized.is_empty() || normalized == "all" {
        None
    } else {
        Some(normalized)
    }
}

// ── Filtering and sorting ───────────────────────────────────────────────────

/// Apply `criteria` to `catalog`, preserving original relative order.
pub fn filter<'a>(catalog: &'a [GameRecord], criteria: &FilterCriteria) -> Vec<&'a GameRecord> {
    catalog.iter().filter(|r| criteria.matches(r)).collect()
}

/// Sort criterion for a filtered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Rating,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid sort key {0:?} (expected \"title\" or \"rating\")")]
pub struct ParseSortKeyError(pub String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "rating" => Ok(Self::Rating),
            _ => Err(ParseSortKeyError(s.to_string())),
        }
    }
}

/// Stable sort of a filtered listing. Title sorts ascending,
/// case-insensitively; rating sorts descending with missing ratings treated
/// as 0. Ties keep original relative order.
pub fn sort_records(records: &mut [&GameRecord], key: SortKey) {
    match key {
        SortKey::Title => {
            records.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        }
        SortKey::Rating => {
            records.sort_by(|a, b| {
                let ra = a.rating.unwrap_or(0.0);
                let rb = b.rating.unwrap_or(0.0);
                rb.partial_cmp(&ra).unwrap_or(Ordering::Equal)
            });
        }
    }
}
