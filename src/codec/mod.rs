//! JSON import and export of the entry map.
//!
//! Exports are a pretty-printed JSON object mapping `YYYY-MM-DD` to score.
//! Imports accept that object form or the legacy array-of-dates form. Decoding
//! is strict: anything that is not a canonical date key, or a value that is not
//! an integer score, is dropped rather than coerced.

use crate::constants::DEFAULT_SCORE;
use crate::entry::{DateKey, EntryMap, Score};
use crate::errors::ImportError;
use serde_json::{Map, Value};
use tracing::debug;

/// Serializes the full map as a JSON object with two-space indentation.
///
/// # Examples
///
/// ```
/// use moodtrack::codec::export_json;
/// use moodtrack::entry::{DateKey, EntryMap};
///
/// let mut entries = EntryMap::new();
/// entries.insert(DateKey::from_ymd(2024, 1, 1).unwrap(), 3);
///
/// let json = export_json(&entries).unwrap();
/// assert_eq!(json, "{\n  \"2024-01-01\": 3\n}");
/// ```
pub fn export_json(entries: &EntryMap) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(entries)
}

/// Parses user-supplied import text into a fresh entry map.
///
/// An array is read as the legacy list of dates, each receiving the default
/// score of 5. An object is read as date → score. Entries that do not decode
/// are dropped silently; scores are not range-checked.
///
/// # Errors
///
/// - `ImportError::InvalidJson` if the text is not JSON
/// - `ImportError::UnsupportedFormat` if the JSON is neither an object nor an array
///
/// # Examples
///
/// ```
/// use moodtrack::codec::import_json;
///
/// let entries = import_json(r#"["2024-01-01", "garbage"]"#).unwrap();
/// assert_eq!(entries.len(), 1);
///
/// assert!(import_json("{").is_err());
/// assert!(import_json("42").is_err());
/// ```
pub fn import_json(text: &str) -> Result<EntryMap, ImportError> {
    let parsed: Value = serde_json::from_str(text).map_err(ImportError::InvalidJson)?;

    match parsed {
        Value::Array(items) => Ok(decode_legacy(&items)),
        Value::Object(fields) => Ok(decode_current(&fields)),
        _ => Err(ImportError::UnsupportedFormat),
    }
}

/// Decodes the legacy list-of-dates format.
pub(crate) fn decode_legacy(items: &[Value]) -> EntryMap {
    let entries: EntryMap = items
        .iter()
        .filter_map(Value::as_str)
        .filter_map(DateKey::parse_canonical)
        .map(|key| (key, DEFAULT_SCORE))
        .collect();

    if entries.len() != items.len() {
        debug!(
            "Dropped {} legacy items that are not date keys",
            items.len() - entries.len()
        );
    }
    entries
}

/// Decodes the current date → score object format.
pub(crate) fn decode_current(fields: &Map<String, Value>) -> EntryMap {
    let mut entries = EntryMap::new();
    for (key, value) in fields {
        let Some(date) = DateKey::parse_canonical(key) else {
            debug!("Dropping entry with non-date key");
            continue;
        };
        match decode_score(value) {
            Some(score) => {
                entries.insert(date, score);
            }
            None => debug!("Dropping entry for {} with non-integer score", date),
        }
    }
    entries
}

/// Accepts JSON integers, integral floats, and strings holding an integer.
fn decode_score(value: &Value) -> Option<Score> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<Score>().ok(),
        _ => None,
    }
}
