//! Projection of entries into calendar display events.

use crate::constants::{EVENT_CLASS_NAME, EVENT_DISPLAY_MODE, EVENT_ID_PREFIX};
use crate::entry::{DateKey, EntryMap, Score};
use crate::presentation::{mood_face, mood_to_color, Rgb};
use serde::Serialize;

/// A check-in as the calendar collaborator consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayEvent {
    /// Stable id, `checkin-<date>`.
    pub id: String,
    /// Face followed by the raw score, e.g. `😕 5`.
    pub label: String,
    pub date: DateKey,
    pub color_hint: Rgb,
    pub all_day: bool,
    pub display: &'static str,
    pub class_names: Vec<&'static str>,
}

impl DisplayEvent {
    pub fn new(date: DateKey, score: Score) -> Self {
        DisplayEvent {
            id: format!("{}{}", EVENT_ID_PREFIX, date),
            label: format!("{} {}", mood_face(score), score),
            date,
            color_hint: mood_to_color(score),
            all_day: true,
            display: EVENT_DISPLAY_MODE,
            class_names: vec![EVENT_CLASS_NAME],
        }
    }
}

/// Builds a fresh event list, one event per entry, in date order.
///
/// # Examples
///
/// ```
/// use moodtrack::entry::{DateKey, EntryMap};
/// use moodtrack::events::to_display_events;
///
/// let mut entries = EntryMap::new();
/// entries.insert(DateKey::from_ymd(2024, 1, 1).unwrap(), 0);
///
/// let events = to_display_events(&entries);
/// assert_eq!(events[0].id, "checkin-2024-01-01");
/// assert_eq!(events[0].label, "😀 0");
/// ```
pub fn to_display_events(entries: &EntryMap) -> Vec<DisplayEvent> {
    entries
        .iter()
        .map(|(&date, &score)| DisplayEvent::new(date, score))
        .collect()
}
