//! Defensive normalization of loosely-typed upstream fields.
//!
//! The upstream catalog is schema-inconsistent: genre may be a string, an
//! array, an object, or an array of objects; players may be a number, a
//! numeric string, a `"min-max"` range, or a `{min, max}` object. These
//! functions coerce each shape into a canonical comparable form and never
//! fail; malformed input degrades to empty/zero/dropped.

use serde_json::Value;

use crate::types::{Keyed, PlayerRange};

/// Normalize text for comparison: trim and lowercase.
pub fn norm_text(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Extract display text from a JSON value: strings pass through, numbers
/// and bools are stringified, everything else yields `None`.
pub fn text_value(v: Option<&Value>) -> Option<String> {
    match v? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Coerce a JSON value to a number: numbers directly, numeric strings parsed.
pub fn number_value(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Flatten any accepted genre shape into key/label pairs: a single string,
/// an array of strings, an object with a `name`/`title`/`value` field, or
/// an array of such objects. Unknown or empty values are dropped silently.
pub fn normalize_genres(raw: Option<&Value>) -> Vec<Keyed> {
    let mut out = Vec::new();
    let Some(raw) = raw else {
        return out;
    };
    match raw {
        Value::Array(items) => {
            for item in items {
                push_genre(&mut out, item);
            }
        }
        other => push_genre(&mut out, other),
    }
    out
}

fn push_genre(out: &mut Vec<Keyed>, v: &Value) {
    let label = match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => ["name", "title", "value"]
            .iter()
            .find_map(|k| map.get(*k))
            .and_then(|inner| text_value(Some(inner))),
        _ => None,
    };
    if let Some(keyed) = label.as_deref().and_then(Keyed::from_label)
        && !out.iter().any(|g| g.key == keyed.key)
    {
        out.push(keyed);
    }
}

/// Normalize a players field: a plain number, a numeric string, a
/// `"min-max"` range string, or an object with `min`/`minimum` and optional
/// `max`/`maximum`. Falls back to a separate min-players value when the
/// primary field yields nothing usable.
pub fn normalize_players(
    players: Option<&Value>,
    min_players: Option<&Value>,
) -> Option<PlayerRange> {
    if let Some(v) = players {
        let parsed = match v {
            Value::Number(_) => number_value(v)
                .and_then(positive_int)
                .map(|n| PlayerRange { min: n, max: n }),
            Value::String(s) => parse_range_str(s),
            Value::Object(map) => {
                let min = map
                    .get("min")
                    .or_else(|| map.get("minimum"))
                    .and_then(number_value)
                    .and_then(positive_int);
                let max = map
                    .get("max")
                    .or_else(|| map.get("maximum"))
                    .and_then(number_value)
                    .and_then(positive_int);
                min.map(|min| PlayerRange {
                    min,
                    max: max.map_or(min, |m| m.max(min)),
                })
            }
            _ => None,
        };
        if parsed.is_some() {
            return parsed;
        }
    }
    min_players
        .and_then(number_value)
        .and_then(positive_int)
        .map(|n| PlayerRange { min: n, max: n })
}

/// Coerce an age or playtime value to a non-negative integer. Non-numeric
/// or non-positive values become 0 (unconstrained-low when filtering).
pub fn normalize_number(v: Option<&Value>) -> u32 {
    v.and_then(number_value)
        .filter(|n| n.is_finite() && *n > 0.0)
        .map(|n| n as u32)
        .unwrap_or(0)
}

/// Slugify a title for use as a fallback id: lowercased, with punctuation
/// dropped and whitespace runs collapsed to `-`.
pub fn slugify(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_dash = false;
    for ch in s.trim().to_lowercase().chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch);
        } else {
            pending_dash = true;
        }
    }
    out
}

fn positive_int(n: f64) -> Option<u32> {
    if n.is_finite() && n > 0.0 {
        Some(n as u32)
    } else {
        None
    }
}

fn parse_range_str(s: &str) -> Option<PlayerRange> {
    let s = s.trim();
    if let Some((lo, hi)) = s.split_once('-') {
        let min = lo.trim().parse::<f64>().ok().and_then(positive_int)?;
        let max = hi
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(positive_int)
            .map_or(min, |m| m.max(min));
        return Some(PlayerRange { min, max });
    }
    let n = s.parse::<f64>().ok().and_then(positive_int)?;
    Some(PlayerRange { min: n, max: n })
}
