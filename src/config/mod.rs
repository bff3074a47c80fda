//! Configuration management for the moodtrack application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults.
//!
//! # Environment Variables
//!
//! - `MOODTRACK_DIR`: Directory holding persisted check-ins (defaults to ~/.moodtrack)
//! - `HOME`: Used for the default data directory path

use crate::constants::{DEFAULT_DATA_SUBDIR, ENV_VAR_HOME, ENV_VAR_MOODTRACK_DIR};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the moodtrack application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use moodtrack::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/path/to/data"),
/// };
/// assert!(config.validate().is_ok());
/// ```
pub struct Config {
    /// Directory where the storage slots are kept.
    ///
    /// Loaded from `MOODTRACK_DIR` with a fallback to `~/.moodtrack`.
    pub data_dir: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &"[REDACTED_PATH]")
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The data directory is expanded with `shellexpand`, so `~` and
    /// `$VARIABLE` references are resolved.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if path expansion fails or yields an empty path.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use moodtrack::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Loaded config: {:?}", config),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        let data_dir_str = env::var(ENV_VAR_MOODTRACK_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
        });

        let expanded_path = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;

        let data_dir = PathBuf::from(expanded_path.into_owned());

        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        Ok(Config { data_dir })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the data directory path is empty or relative.
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        Ok(())
    }
}
