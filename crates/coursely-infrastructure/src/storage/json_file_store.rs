//! File-backed key-value store.
//!
//! All keys live in a single JSON object file. Writes go through a temp file
//! and an atomic rename while holding an exclusive lock.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use coursely_core::error::{CourselyError, Result};
use coursely_core::storage::PersistenceAdapter;

type Entries = BTreeMap<String, String>;

/// A [`PersistenceAdapter`] over one JSON file.
///
/// Provides:
/// - **Atomicity**: Updates are all-or-nothing via tmp file + atomic rename
/// - **Isolation**: File locking prevents concurrent modifications
/// - **Durability**: Explicit fsync before rename
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store handle. The file is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all entries. A missing or empty file has no entries.
    fn read_entries(&self) -> Result<Entries> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(Entries::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    /// Writes all entries atomically.
    fn write_entries(&self, entries: &Entries) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(entries)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(json.as_bytes())?;

        // Ensure data is written to disk
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| CourselyError::io("Store path has no parent directory"))?;
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| CourselyError::io("Store path has no file name"))?;

        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(parent.join(tmp_name))
    }
}

impl PersistenceAdapter for JsonFileStore {
    fn try_load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn try_save(&self, key: &str, value: &str) -> Result<()> {
        let _lock = FileLock::acquire(&self.path)?;

        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(e @ CourselyError::Serialization { .. }) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Store file is corrupt, starting a fresh one"
                );
                Entries::new()
            }
            Err(e) => return Err(e),
        };

        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)?;

        tracing::debug!(key, path = %self.path.display(), "Saved store entry");
        Ok(())
    }
}

/// A file lock guard that releases the lock when dropped.
///
/// The lock file itself stays on disk so every process locks the same inode.
struct FileLock {
    #[allow(dead_code)]
    file: File,
}

impl FileLock {
    /// Acquires an exclusive lock next to `path`.
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| CourselyError::io(format!("Failed to acquire lock: {}", e)))?;
        }

        // Unlock is automatic when the file handle is dropped
        Ok(FileLock { file })
    }
}
