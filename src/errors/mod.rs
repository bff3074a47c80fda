//! Error handling utilities for the moodtrack application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! Storage and persisted-state parse failures are recovered inside the entry store
//! and never reach the caller of `load`/`save`; they still have a typed
//! representation (`StorageError`) so the backends can report what went wrong.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents failures of the key-value storage backing the entry store.
///
/// # Examples
///
/// ```
/// use moodtrack::errors::StorageError;
/// use std::io::{self, ErrorKind};
///
/// let error = StorageError::Write {
///     key: "daily-checkin-entries-v2".to_string(),
///     source: io::Error::new(ErrorKind::Other, "disk full"),
/// };
///
/// assert!(format!("{}", error).contains("daily-checkin-entries-v2"));
/// assert!(format!("{}", error).contains("disk full"));
/// ```
#[derive(Debug, Error)]
pub enum StorageError {
    /// The storage location does not exist or is not a directory.
    #[error("Storage is unavailable at {path}")]
    Unavailable {
        /// The directory that was expected to hold the storage slots
        path: PathBuf,
    },

    /// Reading a slot failed for a reason other than it being absent.
    #[error("Failed to read storage slot '{key}': {source}")]
    Read {
        /// The slot key
        key: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Writing a slot failed (disk full, permissions, read-only filesystem).
    #[error("Failed to write storage slot '{key}': {source}")]
    Write {
        /// The slot key
        key: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Removing a slot failed.
    #[error("Failed to remove storage slot '{key}': {source}")]
    Remove {
        /// The slot key
        key: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents the ways a user-supplied import can be rejected.
///
/// A rejected import never touches the entry store.
///
/// # Examples
///
/// ```
/// use moodtrack::errors::ImportError;
///
/// let error = ImportError::UnsupportedFormat;
/// assert!(format!("{}", error).contains("object or an array"));
/// ```
#[derive(Debug, Error)]
pub enum ImportError {
    /// The import text is not valid JSON.
    #[error("Import file is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The import text is valid JSON but neither an object nor an array.
    #[error("Import file must contain a JSON object or an array of dates")]
    UnsupportedFormat,

    /// The import file could not be read.
    #[error("Failed to read import file {path}: {source}")]
    Read {
        /// The path that was being read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents all possible errors that can occur in the moodtrack application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use moodtrack::errors::AppError;
///
/// let error = AppError::Config("Missing data directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing data directory");
/// ```
///
/// Converting from an IO error:
/// ```
/// use moodtrack::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Error related to configuration (invalid settings, missing values).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from an I/O operation.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A date string that is not a valid `YYYY-MM-DD` (or `YYYYMMDD`) calendar date.
    #[error("Invalid date format: '{0}'. Expected YYYY-MM-DD or YYYYMMDD")]
    InvalidDate(String),

    /// A check-in score outside the selectable 0..=10 range.
    #[error("Invalid mood score: {0}. Scores range from 0 (best) to 10 (worst)")]
    InvalidScore(i64),

    /// A destructive operation that was not confirmed.
    #[error("Operation cancelled: {0}")]
    Cancelled(String),

    /// A rejected import.
    #[error("Import failed: {0}")]
    Import(#[from] ImportError),

    /// Error encoding data for output.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;
