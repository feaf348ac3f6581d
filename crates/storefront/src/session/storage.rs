//! Secure key-value storage collaborators.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;

/// Secure storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Secure storage is unavailable on this platform.
    #[error("secure storage unavailable: {0}")]
    Unavailable(String),

    /// Access was denied by the platform (permissions/ACL).
    #[error("secure storage access denied: {0}")]
    PermissionDenied(String),

    /// Stored data is corrupt or invalid.
    #[error("secure storage data corrupt: {0}")]
    Corrupt(String),

    /// Other storage failures.
    #[error("secure storage failed: {0}")]
    Other(String),
}

/// Asynchronous, fallible get/set/delete by key.
///
/// Platform secure storage sits behind this trait. Deleting a missing key
/// is not an error.
#[async_trait]
pub trait SecureStorage: Send + Sync {
    /// Get a value by key.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Set a value by key, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a value by key.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process storage for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemorySecureStorage {
    data: Mutex<HashMap<String, String>>,
}

impl MemorySecureStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SecureStorage for MemorySecureStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.data.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.data
            .lock()
            .await
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.data.lock().await.remove(key);
        Ok(())
    }
}

/// File-backed storage for development and headless environments.
///
/// One file per key under `<base_dir>`, written atomically through a temp
/// file and restricted to the owner on unix.
#[derive(Debug, Clone)]
pub struct FileSecureStorage {
    base_dir: PathBuf,
}

impl FileSecureStorage {
    /// Create storage rooted at `<data_dir>/keyring`, creating the directory.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the directory cannot be created.
    pub async fn open(data_dir: &Path) -> Result<Self, io::Error> {
        let base_dir = data_dir.join("keyring");
        tokio::fs::create_dir_all(&base_dir).await?;
        Ok(Self { base_dir })
    }

    /// Construct with a concrete, already existing base directory.
    #[must_use]
    pub const fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    fn file_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || "-_.".contains(c)) {
            return Err(StorageError::Other(format!("invalid storage key: {key:?}")));
        }
        Ok(self.base_dir.join(format!("{key}.json")))
    }

    fn map_io_error(context: &str, err: &io::Error) -> StorageError {
        match err.kind() {
            io::ErrorKind::PermissionDenied => {
                StorageError::PermissionDenied(format!("{context}: {err}"))
            }
            io::ErrorKind::InvalidData => StorageError::Corrupt(format!("{context}: {err}")),
            _ => StorageError::Other(format!("{context}: {err}")),
        }
    }
}

#[async_trait]
impl SecureStorage for FileSecureStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.file_path(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Self::map_io_error("failed to read secure storage file", &err)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.file_path(key)?;
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, value)
            .await
            .map_err(|err| Self::map_io_error("failed to write secure storage temp file", &err))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tokio::fs::set_permissions(&temp_path, std::fs::Permissions::from_mode(0o600))
                .await
                .map_err(|err| {
                    Self::map_io_error("failed to set secure storage permissions", &err)
                })?;
        }

        tokio::fs::rename(&temp_path, &path)
            .await
            .map_err(|err| Self::map_io_error("failed to rename secure storage file", &err))
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let path = self.file_path(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Self::map_io_error("failed to delete secure storage file", &err)),
        }
    }
}
