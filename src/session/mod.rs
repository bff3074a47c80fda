//! The check-in session: the single owner of tracker state.
//!
//! A `Session` holds the entry store and is the only place mutations happen.
//! Every mutation persists before returning, and summaries and display events
//! are derived on demand from the same store, so a caller that re-renders after
//! a mutation always sees its effect.
//!
//! The calendar collaborator calls [`Session::display_events`] to render and
//! [`Session::select_date`] when the user picks a day; the score picker answers
//! with [`Session::apply_selection`].

use crate::codec::{export_json, import_json};
use crate::entry::{validate_score, DateKey, EntryMap, Score};
use crate::errors::{AppResult, ImportError};
use crate::events::{to_display_events, DisplayEvent};
use crate::presentation::MoodDetail;
use crate::stats::Summary;
use crate::store::{EntryStore, Storage};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// What the user chose in the score picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Record this score for the date.
    Score(Score),
    /// Delete the date's check-in.
    Remove,
}

/// State the score picker opens with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerState {
    pub date: DateKey,
    /// The existing score, preselected when the date already has a check-in.
    pub selected: Option<Score>,
}

/// A check-in session: the entry store plus every operation the calendar,
/// picker and CLI perform on it.
///
/// Mutations update the in-memory entries first; a failed write is logged and
/// the session keeps working from memory.
pub struct Session {
    store: EntryStore,
}

impl Session {
    /// Opens a session over `storage`, loading persisted entries.
    pub fn open(storage: Box<dyn Storage>) -> Self {
        let store = EntryStore::open(storage);
        info!("Session opened with {} entries", store.entries().len());
        Session { store }
    }

    pub fn entries(&self) -> &EntryMap {
        self.store.entries()
    }

    /// Records `score` for `date`, replacing any earlier check-in that day.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidScore` if `score` is outside 0..=10; the store is
    /// not touched in that case.
    pub fn check_in(&mut self, date: DateKey, score: Score) -> AppResult<()> {
        let score = validate_score(score)?;
        debug!("Check-in for {}", date);
        if !self.store.upsert(date, score) {
            debug!("Check-in for {} kept in memory only", date);
        }
        Ok(())
    }

    /// Deletes the check-in for `date`. Returns whether one existed.
    pub fn remove(&mut self, date: &DateKey) -> bool {
        if self.store.get(date).is_none() {
            return false;
        }
        debug!("Removing check-in for {}", date);
        if !self.store.remove(date) {
            debug!("Removal of {} kept in memory only", date);
        }
        true
    }

    /// Deletes every check-in and returns how many there were.
    ///
    /// An empty store is left alone.
    pub fn clear(&mut self) -> usize {
        let count = self.store.entries().len();
        if count > 0 {
            info!("Clearing {} check-ins", count);
            if !self.store.clear() {
                debug!("Clear kept in memory only");
            }
        }
        count
    }

    /// Replaces all entries with the contents of an import document.
    ///
    /// Returns the number of imported entries.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Import` if the text is rejected; existing entries are
    /// left untouched.
    pub fn import(&mut self, text: &str) -> AppResult<usize> {
        let entries = import_json(text)?;
        let count = entries.len();
        if !self.store.replace(entries) {
            debug!("Imported check-ins kept in memory only");
        }
        info!("Imported {} check-ins", count);
        Ok(count)
    }

    /// Reads an import document from `path` and imports it.
    ///
    /// The file is read completely before the store is touched.
    pub fn import_file(&mut self, path: &Path) -> AppResult<usize> {
        let text = fs::read_to_string(path).map_err(|source| ImportError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.import(&text)
    }

    /// Serializes all entries as an export document.
    pub fn export(&self) -> AppResult<String> {
        Ok(export_json(self.store.entries())?)
    }

    pub fn summary(&self, today: DateKey) -> Summary {
        Summary::compute(self.store.entries(), today)
    }

    pub fn display_events(&self) -> Vec<DisplayEvent> {
        to_display_events(self.store.entries())
    }

    /// Hover details for a date, `None` if it has no check-in.
    pub fn detail(&self, date: &DateKey) -> Option<MoodDetail> {
        self.store.get(date).map(MoodDetail::for_score)
    }

    /// Handles the calendar's date-selection notification.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidDate` if `date` is not a `YYYY-MM-DD` date.
    pub fn select_date(&self, date: &str) -> AppResult<PickerState> {
        let date: DateKey = date.parse()?;
        Ok(PickerState {
            date,
            selected: self.store.get(&date),
        })
    }

    /// Applies the score picker's answer for `date`.
    pub fn apply_selection(&mut self, date: DateKey, selection: Selection) -> AppResult<()> {
        match selection {
            Selection::Score(score) => self.check_in(date, score),
            Selection::Remove => {
                self.remove(&date);
                Ok(())
            }
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("entries", &self.store.entries().len())
            .finish()
    }
}
