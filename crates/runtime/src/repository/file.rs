//! File-based SelectionStore implementation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::repository::{RepositoryError, Result, SelectionStore};

/// File-based implementation of SelectionStore.
///
/// Each key is stored as `{key}.dat` under the base directory. Writes go to a
/// temporary file first and are renamed into place.
pub struct FileSelectionStore {
    base_dir: PathBuf,
}

impl FileSelectionStore {
    /// Create a new file-based store, creating `base_dir` if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a key's file. Keys are plain identifiers.
    fn key_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(RepositoryError::InvalidKey(key.to_owned()));
        }
        Ok(self.base_dir.join(format!("{}.dat", key)))
    }
}

impl SelectionStore for FileSelectionStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.key_path(key)?;

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(RepositoryError::Io)?;
        tracing::debug!("Loaded {} from {}", key, path.display());

        Ok(Some(bytes))
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        let path = self.key_path(key)?;
        let temp_path = path.with_extension("dat.tmp");

        // Write to temp file
        fs::write(&temp_path, value).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved {} to {}", key, path.display());

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted {}", key);
        }

        Ok(())
    }
}
