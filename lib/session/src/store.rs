//! Persistent key-value stores backing the session marker.
//!
//! All stores take `&self` for writes so that one store can be shared
//! between the navigation guard, which only reads, and the sign-in and
//! sign-out flows, which write.

use crate::error::StoreError;
use daily_verse_core::Result;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A string key-value store that survives page reloads.
pub trait SessionStore {
    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Returns true if a value is stored under `key`.
    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some())
    }
}

impl<S: SessionStore + ?Sized> SessionStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// In-process store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // Entries stay consistent even if a holder panicked mid-insert.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries().remove(key);
        Ok(())
    }
}

/// Store persisted as a JSON object in a file.
///
/// Every operation reads the file afresh, so values written by another
/// process or an earlier run are visible. A missing file is an empty store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl FileStore {
    /// Creates a store backed by `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(StoreError::Io {
                    path: self.path.display().to_string(),
                    details: e.to_string(),
                }
                .into());
            }
        };

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents).map_err(|e| {
            StoreError::Corrupt {
                path: self.path.display().to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(entries).map_err(|e| StoreError::Serialization {
            details: e.to_string(),
        })?;

        std::fs::write(&self.path, json).map_err(|e| StoreError::Io {
            path: self.path.display().to_string(),
            details: e.to_string(),
        })?;
        Ok(())
    }

    fn modify<F>(&self, f: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.read()?;
        f(&mut entries);
        self.write(&entries)
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.modify(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.modify(|entries| {
            entries.remove(key);
        })
    }
}

/// Store backed by the browser's `window.localStorage`.
#[cfg(feature = "local-storage")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

#[cfg(feature = "local-storage")]
impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window().ok_or_else(|| StoreError::Unavailable {
            details: "no window".to_string(),
        })?;

        let storage = window
            .local_storage()
            .map_err(|e| StoreError::Unavailable {
                details: format!("{e:?}"),
            })?
            .ok_or_else(|| StoreError::Unavailable {
                details: "localStorage is disabled".to_string(),
            })?;
        Ok(storage)
    }
}

#[cfg(feature = "local-storage")]
impl SessionStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = Self::storage()?
            .get_item(key)
            .map_err(|e| StoreError::Unavailable {
                details: format!("{e:?}"),
            })?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Unavailable {
                details: format!("{e:?}"),
            })?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StoreError::Unavailable {
                details: format!("{e:?}"),
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("user").expect("get"), None);

        store.set("user", "li_bai").expect("set");
        assert_eq!(store.get("user").expect("get").as_deref(), Some("li_bai"));
        assert!(store.contains("user").expect("contains"));

        store.remove("user").expect("remove");
        assert!(!store.contains("user").expect("contains"));
    }

    #[test]
    fn memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();
        other.set("user", "du_fu").expect("set");
        assert!(store.contains("user").expect("contains"));
    }

    #[test]
    fn removing_missing_key_is_ok() {
        let store = MemoryStore::new();
        store.remove("user").expect("remove");
    }

    #[test]
    fn file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path().join("session.json"));
        assert_eq!(store.get("user").expect("get"), None);
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");

        FileStore::new(&path)
            .set("user", r#"{"username":"wang_wei"}"#)
            .expect("set");

        let reopened = FileStore::new(&path);
        assert_eq!(
            reopened.get("user").expect("get").as_deref(),
            Some(r#"{"username":"wang_wei"}"#)
        );
        assert_eq!(reopened.path(), path.as_path());
    }

    #[test]
    fn file_store_remove_keeps_other_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path().join("session.json"));
        store.set("user", "a").expect("set");
        store.set("theme", "ink").expect("set");

        store.remove("user").expect("remove");
        assert_eq!(store.get("user").expect("get"), None);
        assert_eq!(store.get("theme").expect("get").as_deref(), Some("ink"));
    }

    #[test]
    fn file_store_empty_file_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");
        std::fs::write(&path, "").expect("write");
        assert_eq!(FileStore::new(&path).get("user").expect("get"), None);
    }

    #[test]
    fn file_store_reports_corrupt_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").expect("write");

        let err = FileStore::new(&path).get("user").unwrap_err();
        assert!(err.to_string().contains("corrupt"));
    }

    #[test]
    fn arc_store_delegates() {
        let store = Arc::new(MemoryStore::new());
        store.set("user", "x").expect("set");
        assert!(SessionStore::contains(&store, "user").expect("contains"));
    }
}
