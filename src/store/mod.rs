//! Entry store: the in-memory entry map and its persisted representation.
//!
//! Persisted state lives in a key-value `Storage` with two slots:
//!
//! - `daily-checkin-dates-v1` (legacy): a JSON array of date strings
//! - `daily-checkin-entries-v2` (current): a JSON object of date → score
//!
//! Loading prefers the current slot and otherwise migrates the legacy slot.
//! Storage failures never reach the caller: the in-memory map stays the source
//! of truth for the rest of the process and the failure is logged.

mod file;
mod memory;

pub use file::{ensure_data_directory_exists, FileStorage};
pub use memory::MemoryStorage;

use crate::codec::{decode_current, decode_legacy};
use crate::constants::{STORAGE_KEY_V1, STORAGE_KEY_V2};
use crate::entry::{DateKey, EntryMap, Score};
use crate::errors::StorageError;
use serde_json::Value;
use tracing::{debug, info, warn};

/// A key-value slot store, modeled on browser local storage.
pub trait Storage {
    /// Returns the slot's contents, or `None` if the slot does not exist.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the slot's contents.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Deletes the slot. Removing a missing slot is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Loads the entry map from storage, migrating the legacy format if needed.
///
/// Never fails: unreadable or corrupt slots are treated as absent, and if
/// neither slot yields data the result is empty.
///
/// When the legacy slot is migrated, the migrated map is written to the current
/// slot and the legacy slot is removed. If writing the current slot fails the
/// legacy slot is left in place so the next start can migrate again.
pub fn load(storage: &dyn Storage) -> EntryMap {
    if let Some(entries) = read_current(storage) {
        debug!("Loaded {} entries from current record", entries.len());
        return entries;
    }

    let Some(migrated) = read_legacy(storage) else {
        debug!("No persisted entries found");
        return EntryMap::new();
    };

    info!("Migrating {} legacy entries", migrated.len());
    match try_save(storage, &migrated) {
        Ok(()) => {
            if let Err(e) = storage.remove_item(STORAGE_KEY_V1) {
                warn!("Migrated legacy record could not be removed: {}", e);
            }
        }
        Err(e) => warn!("Migrated entries could not be persisted: {}", e),
    }
    migrated
}

/// Writes the full map as the current record, swallowing failures.
///
/// Returns whether the write succeeded so callers can report it; the entry
/// map remains authoritative either way.
pub fn save(storage: &dyn Storage, entries: &EntryMap) -> bool {
    match try_save(storage, entries) {
        Ok(()) => true,
        Err(e) => {
            warn!("Entries were not persisted: {}", e);
            false
        }
    }
}

fn try_save(storage: &dyn Storage, entries: &EntryMap) -> Result<(), StorageError> {
    let serialized = serde_json::to_string(entries).map_err(|e| StorageError::Write {
        key: STORAGE_KEY_V2.to_string(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
    })?;
    storage.set_item(STORAGE_KEY_V2, &serialized)
}

fn read_current(storage: &dyn Storage) -> Option<EntryMap> {
    let raw = read_slot(storage, STORAGE_KEY_V2)?;
    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(fields)) => Some(decode_current(&fields)),
        Ok(_) => {
            warn!("Current record is not a JSON object, ignoring it");
            None
        }
        Err(e) => {
            warn!("Current record is corrupt, ignoring it: {}", e);
            None
        }
    }
}

fn read_legacy(storage: &dyn Storage) -> Option<EntryMap> {
    let raw = read_slot(storage, STORAGE_KEY_V1)?;
    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Array(items)) => Some(decode_legacy(&items)),
        Ok(_) => {
            warn!("Legacy record is not a JSON array, ignoring it");
            None
        }
        Err(e) => {
            warn!("Legacy record is corrupt, ignoring it: {}", e);
            None
        }
    }
}

/// Reads a slot, treating empty contents and read failures as absent.
fn read_slot(storage: &dyn Storage, key: &str) -> Option<String> {
    match storage.get_item(key) {
        Ok(Some(raw)) if !raw.trim().is_empty() => Some(raw),
        Ok(_) => None,
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

/// Owns the entry map and persists it after every mutation.
///
/// Every mutating method returns whether the new map was persisted. The
/// in-memory map is updated either way.
pub struct EntryStore {
    storage: Box<dyn Storage>,
    entries: EntryMap,
}

impl EntryStore {
    /// Opens the store, loading (and if necessary migrating) persisted state.
    pub fn open(storage: Box<dyn Storage>) -> Self {
        let entries = load(storage.as_ref());
        EntryStore { storage, entries }
    }

    /// The current entries.
    pub fn entries(&self) -> &EntryMap {
        &self.entries
    }

    /// The score recorded for `date`, if any.
    pub fn get(&self, date: &DateKey) -> Option<Score> {
        self.entries.get(date).copied()
    }

    /// Sets the score for `date`, replacing any previous check-in.
    pub fn upsert(&mut self, date: DateKey, score: Score) -> bool {
        self.entries.insert(date, score);
        self.save()
    }

    /// Deletes the check-in for `date`.
    pub fn remove(&mut self, date: &DateKey) -> bool {
        self.entries.remove(date);
        self.save()
    }

    /// Drops every entry.
    pub fn clear(&mut self) -> bool {
        self.entries.clear();
        self.save()
    }

    /// Replaces the whole map, as an import does.
    pub fn replace(&mut self, entries: EntryMap) -> bool {
        self.entries = entries;
        self.save()
    }

    /// Persists the current map. See [`save`].
    pub fn save(&self) -> bool {
        save(self.storage.as_ref(), &self.entries)
    }
}
