//! Constants used throughout the application.
//!
//! This module contains all constants used in the moodtrack application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "moodtrack";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A daily check-in tracker for mood scores and streaks";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Log level used when `--verbose` is passed.
pub const VERBOSE_LOG_LEVEL: &str = "debug";
/// Default file name for exports.
pub const DEFAULT_EXPORT_FILENAME: &str = "checkins.json";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the data directory.
pub const ENV_VAR_MOODTRACK_DIR: &str = "MOODTRACK_DIR";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for persisted state within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".moodtrack";

// Storage Slots
/// Legacy record: a JSON array of date strings, no scores.
pub const STORAGE_KEY_V1: &str = "daily-checkin-dates-v1";
/// Current record: a JSON object mapping date strings to scores.
pub const STORAGE_KEY_V2: &str = "daily-checkin-entries-v2";
/// File extension of a storage slot on disk.
pub const STORAGE_SLOT_EXTENSION: &str = ".json";
/// Default POSIX permissions for the data directory (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;
/// Default POSIX permissions for slot files (owner read/write).
#[cfg(unix)]
pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o600;

// Mood Scale
/// Lowest (best) mood score.
pub const MIN_SCORE: i64 = 0;
/// Highest (worst) mood score.
pub const MAX_SCORE: i64 = 10;
/// Score assigned to dates that come from the legacy list format.
pub const DEFAULT_SCORE: i64 = 5;
/// Color for score 0, as (r, g, b).
pub const GOOD_COLOR: (u8, u8, u8) = (0x2e, 0xcc, 0x71);
/// Color for score 10, as (r, g, b).
pub const BAD_COLOR: (u8, u8, u8) = (0xff, 0x5c, 0x5c);
/// Legend shown beneath the selectable levels.
pub const SCALE_LEGEND: &str = "0 = best, 10 = worst";

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";

// Display Events
/// Prefix of every display event id.
pub const EVENT_ID_PREFIX: &str = "checkin-";
/// Calendar display mode for check-in events.
pub const EVENT_DISPLAY_MODE: &str = "background";
/// CSS class attached to check-in events.
pub const EVENT_CLASS_NAME: &str = "checkin-event";

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "moodtrack";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
