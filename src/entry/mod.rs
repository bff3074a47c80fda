//! Entry data model without I/O operations.
//!
//! An entry is a calendar date paired with a mood score. Dates are held as
//! `DateKey`, a local calendar date whose string form is the canonical
//! `YYYY-MM-DD` used in persisted state, exports, and display events.

use crate::constants::{DATE_FORMAT_COMPACT, DATE_FORMAT_ISO, MAX_SCORE, MIN_SCORE};
use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A raw mood score.
///
/// Nominally 0 (best) to 10 (worst). Imported values are stored verbatim, so a
/// score held in an `EntryMap` may fall outside that range; presentation clamps.
pub type Score = i64;

/// All recorded check-ins, keyed by date. Iteration is chronological.
pub type EntryMap = BTreeMap<DateKey, Score>;

/// A calendar day in the user's local calendar, without a time component.
///
/// # Examples
///
/// ```
/// use moodtrack::entry::DateKey;
///
/// let key: DateKey = "2024-03-05".parse().unwrap();
/// assert_eq!(key.to_string(), "2024-03-05");
///
/// // Only the canonical form is a date key
/// assert!(DateKey::parse_canonical("2024-3-5").is_none());
/// assert!(DateKey::parse_canonical("2024-02-30").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Wraps a calendar date.
    pub fn new(date: NaiveDate) -> Self {
        DateKey(date)
    }

    /// Builds a key from year/month/day, `None` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(DateKey)
    }

    /// Today's date in the local timezone.
    pub fn today() -> Self {
        DateKey(Local::now().date_naive())
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Parses a canonical `YYYY-MM-DD` key.
    ///
    /// The string must name a real calendar date and format back to exactly the
    /// same text, so padded-less months, trailing characters, and impossible days
    /// are all rejected. Years are exactly four digits; chrono's `%Y` alone would
    /// also round-trip signed and five-digit years.
    pub fn parse_canonical(s: &str) -> Option<Self> {
        if s.len() != 10 || !s.bytes().take(4).all(|b| b.is_ascii_digit()) {
            return None;
        }
        let date = NaiveDate::parse_from_str(s, DATE_FORMAT_ISO).ok()?;
        if date.format(DATE_FORMAT_ISO).to_string() == s {
            Some(DateKey(date))
        } else {
            None
        }
    }

    /// Parses a date typed by the user: `YYYY-MM-DD` or `YYYYMMDD`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidDate` if neither format matches.
    pub fn parse_user_input(s: &str) -> AppResult<Self> {
        let trimmed = s.trim();
        Self::parse_canonical(trimmed)
            .or_else(|| {
                if trimmed.len() != 8 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                NaiveDate::parse_from_str(trimmed, DATE_FORMAT_COMPACT)
                    .ok()
                    .map(DateKey)
            })
            .ok_or_else(|| AppError::InvalidDate(s.to_string()))
    }

    /// The following calendar day.
    pub fn next_day(&self) -> Option<Self> {
        self.0.succ_opt().map(DateKey)
    }

    /// The preceding calendar day.
    pub fn previous_day(&self) -> Option<Self> {
        self.0.pred_opt().map(DateKey)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        DateKey(date)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT_ISO))
    }
}

impl FromStr for DateKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_canonical(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Checks that a user check-in score is one of the selectable levels.
///
/// # Errors
///
/// Returns `AppError::InvalidScore` for anything outside 0..=10.
pub fn validate_score(score: Score) -> AppResult<Score> {
    if (MIN_SCORE..=MAX_SCORE).contains(&score) {
        Ok(score)
    } else {
        Err(AppError::InvalidScore(score))
    }
}
