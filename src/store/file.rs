//! File-backed storage: one `<key>.json` file per slot in the data directory.

use super::Storage;
use crate::constants::STORAGE_SLOT_EXTENSION;
#[cfg(unix)]
use crate::constants::{DEFAULT_DIR_PERMISSIONS, DEFAULT_FILE_PERMISSIONS};
use crate::errors::{AppError, AppResult, StorageError};
use std::fs;
#[cfg(unix)]
use std::fs::Permissions;
use std::io::{self, Write};
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Ensures the data directory exists, creating it if necessary.
///
/// # Errors
///
/// Returns:
/// - `AppError::Config` if the provided path is not an absolute path
/// - `AppError::Io` if the directory creation fails due to permission issues,
///   invalid paths, or other filesystem errors
pub fn ensure_data_directory_exists(data_dir: &Path) -> AppResult<()> {
    if !data_dir.is_absolute() {
        return Err(AppError::Config(format!(
            "Data directory path must be absolute: {}",
            data_dir.display()
        )));
    }

    if !data_dir.exists() {
        fs::create_dir_all(data_dir).map_err(|e| {
            AppError::Io(io::Error::new(
                e.kind(),
                format!("Failed to create data directory: {}", e),
            ))
        })?;

        #[cfg(unix)]
        {
            let permissions = Permissions::from_mode(DEFAULT_DIR_PERMISSIONS);
            fs::set_permissions(data_dir, permissions).map_err(|e| {
                AppError::Io(io::Error::new(
                    e.kind(),
                    format!("Failed to set secure permissions on data directory: {}", e),
                ))
            })?;
            debug!("Set 0o700 permissions on data directory");
        }
    }
    Ok(())
}

/// Storage slots kept as files in a single directory.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the slot, so a slot is never observed half-written.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    /// Path of the file backing `key`.
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}{}", key, STORAGE_SLOT_EXTENSION))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if !self.dir.is_dir() {
            return Err(StorageError::Unavailable {
                path: self.dir.clone(),
            });
        }

        let write_err = |source: io::Error| StorageError::Write {
            key: key.to_string(),
            source,
        };

        let mut file = NamedTempFile::new_in(&self.dir).map_err(write_err)?;
        file.write_all(value.as_bytes()).map_err(write_err)?;
        file.as_file().sync_all().map_err(write_err)?;

        #[cfg(unix)]
        file.as_file()
            .set_permissions(Permissions::from_mode(DEFAULT_FILE_PERMISSIONS))
            .map_err(write_err)?;

        file.persist(self.slot_path(key))
            .map_err(|e| write_err(e.error))?;
        debug!("Wrote storage slot {} ({} bytes)", key, value.len());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Remove {
                key: key.to_string(),
                source,
            }),
        }
    }
}
