//! In-process key-value store for tests and ephemeral hosts.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use coursely_core::error::{CourselyError, Result};
use coursely_core::storage::PersistenceAdapter;

/// A [`PersistenceAdapter`] backed by a shared map.
///
/// Clones share the same entries, so a test can keep one handle to inspect
/// what the profile store wrote through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `value` under `key`.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.write() {
            entries.insert(key.into(), value.into());
        }
        store
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PersistenceAdapter for MemoryStore {
    fn try_load(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| CourselyError::io("memory store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn try_save(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| CourselyError::io("memory store lock poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_key() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.load("missing"), None);
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let observer = store.clone();

        store.save("k", "v");

        assert_eq!(observer.load("k").as_deref(), Some("v"));
        assert_eq!(observer.len(), 1);
    }

    #[test]
    fn test_with_entry() {
        let store = MemoryStore::with_entry("user_profile_v1", "{}");
        assert_eq!(store.try_load("user_profile_v1").unwrap().as_deref(), Some("{}"));
    }
}
