//! Key-Value Storage
//!
//! Abstract string store used for draft persistence.
//! `BrowserStorage` talks to `window.localStorage`, `MemoryStore` keeps
//! everything in a map (tests, or browsers with storage disabled).

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{js_reason, StorageError, StorageResult};

/// Minimal string key-value store
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, `None` if absent or unreadable
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

// ========================
// Browser local storage
// ========================

/// `window.localStorage`
///
/// Holds no handle: the `Storage` object is looked up on every call, so the
/// type stays `Send + Sync` and can live in the Leptos context.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> StorageResult<web_sys::Storage> {
        let window = web_sys::window().ok_or(StorageError::NoWindow)?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(js_reason(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is null".to_string()))
    }

    /// Whether local storage can be reached at all
    pub fn is_available() -> bool {
        Self::storage().is_ok()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = match Self::storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("[STORAGE] read of `{}` skipped: {}", key, e);
                return None;
            }
        };
        storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: js_reason(&e),
            })
    }
}

// ========================
// In-memory store
// ========================

/// Map-backed store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries: Mutex::new(entries) }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.entries.lock().map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_missing() {
        let store = MemoryStore::new();
        assert_eq!(store.get("text"), None);
    }

    #[test]
    fn test_memory_store_set_overwrites() {
        let store = MemoryStore::with_entry("text", "\"old\"");
        store.set("text", "\"new\"").unwrap();
        assert_eq!(store.get("text").as_deref(), Some("\"new\""));
    }

    #[test]
    fn test_memory_store_poisoned_write_fails() {
        let store = MemoryStore::new();
        let holder = std::thread::scope(|s| {
            s.spawn(|| {
                let _guard = store.entries.lock().unwrap();
                panic!("writer died holding the lock");
            })
            .join()
        });
        assert!(holder.is_err());

        let err = store.set("text", "\"x\"").unwrap_err();
        assert!(matches!(err, StorageError::Write { ref key, .. } if key == "text"));
    }

    #[test]
    fn test_memory_store_keys_are_independent() {
        let store = MemoryStore::new();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        assert_eq!(store.get("a").as_deref(), Some("1"));
        assert_eq!(store.get("b").as_deref(), Some("2"));
    }
}
