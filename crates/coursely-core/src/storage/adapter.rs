//! Persistence adapter trait.
//!
//! Defines the interface for the key-value store that holds the serialized
//! profile, decoupling the editor from the storage mechanism (JSON file,
//! embedded database, in-memory map).

use crate::error::Result;

/// Key under which the encoded user profile is stored.
pub const PROFILE_KEY: &str = "user_profile_v1";

/// A synchronous string key-value store.
///
/// Implementors provide the fallible `try_*` operations. Callers use
/// [`load`](PersistenceAdapter::load) and [`save`](PersistenceAdapter::save),
/// which never fail: storage problems are logged and swallowed so the editor
/// keeps running.
pub trait PersistenceAdapter: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))`: Key present
    /// - `Ok(None)`: Key absent
    /// - `Err(_)`: The backing store could not be read
    fn try_load(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn try_save(&self, key: &str, value: &str) -> Result<()>;

    /// Reads `key`, treating storage failures as an absent key.
    fn load(&self, key: &str) -> Option<String> {
        match self.try_load(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read from storage, treating key as absent");
                None
            }
        }
    }

    /// Writes `key`, logging and discarding storage failures.
    fn save(&self, key: &str, value: &str) {
        if let Err(e) = self.try_save(key, value) {
            tracing::warn!(key, error = %e, "Failed to write to storage, change kept in memory only");
        }
    }
}
