//! Check-in statistics derived from the entry map.
//!
//! All functions take "today" as a parameter instead of reading the clock, so
//! the results depend only on their inputs.

use crate::entry::{DateKey, EntryMap};
use serde::Serialize;

/// Current and best streak lengths, in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Streaks {
    /// Consecutive checked-in days ending today.
    pub current: usize,
    /// Longest run of consecutive checked-in days anywhere in history.
    pub best: usize,
}

/// Whether today has a check-in.
pub fn is_checked_in_today(entries: &EntryMap, today: DateKey) -> bool {
    entries.contains_key(&today)
}

/// Computes the current and best streaks.
///
/// Days are consecutive when the later one is the calendar day after the
/// earlier one. The current streak counts backwards from `today` and is 0 when
/// today has no check-in; the best streak need not touch today.
///
/// # Examples
///
/// ```
/// use moodtrack::entry::{DateKey, EntryMap};
/// use moodtrack::stats::compute_streaks;
///
/// let mut entries = EntryMap::new();
/// for day in [1, 2, 3, 5] {
///     entries.insert(DateKey::from_ymd(2024, 3, day).unwrap(), 4);
/// }
///
/// let today = DateKey::from_ymd(2024, 3, 5).unwrap();
/// let streaks = compute_streaks(&entries, today);
/// assert_eq!(streaks.current, 1);
/// assert_eq!(streaks.best, 3);
/// ```
pub fn compute_streaks(entries: &EntryMap, today: DateKey) -> Streaks {
    if entries.is_empty() {
        return Streaks::default();
    }

    Streaks {
        current: current_streak(entries, today),
        best: best_streak(entries),
    }
}

fn best_streak(entries: &EntryMap) -> usize {
    // BTreeMap keys are already in ascending date order
    let mut dates = entries.keys();
    let Some(mut previous) = dates.next().copied() else {
        return 0;
    };

    let mut best = 1;
    let mut run = 1;
    for &date in dates {
        if previous.next_day() == Some(date) {
            run += 1;
        } else {
            run = 1;
        }
        best = best.max(run);
        previous = date;
    }
    best
}

fn current_streak(entries: &EntryMap, today: DateKey) -> usize {
    let mut count = 0;
    let mut cursor = Some(today);
    while let Some(day) = cursor.filter(|d| entries.contains_key(d)) {
        count += 1;
        cursor = day.previous_day();
    }
    count
}

/// The figures shown in the summary panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub checked_in_today: bool,
    pub streaks: Streaks,
}

impl Summary {
    pub fn compute(entries: &EntryMap, today: DateKey) -> Self {
        Summary {
            checked_in_today: is_checked_in_today(entries, today),
            streaks: compute_streaks(entries, today),
        }
    }

    /// Status text for today.
    pub fn today_label(&self) -> &'static str {
        if self.checked_in_today {
            "Checked in"
        } else {
            "Not checked in"
        }
    }

    /// Label of the primary action for today.
    pub fn action_label(&self) -> &'static str {
        if self.checked_in_today {
            "Undo Today"
        } else {
            "Check-in Today"
        }
    }
}
