//! Persistent key-value session storage.
//!
//! The front end keeps exactly one persisted value today (the API base URL),
//! but the store is a plain string map so later settings need no new format.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read session store {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write session store {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("session store {path} is not valid TOML: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("session store lock poisoned")]
    Poisoned,
    #[error("failed to serialize session store: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// String values persisted across restarts.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value could not be persisted.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .ok()
            .and_then(|values| values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.lock().map_err(|_| StoreError::Poisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a TOML file of string keys and values.
///
/// The whole file is rewritten on every `set`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let values = match std::fs::read_to_string(&path) {
            Ok(text) => toml::from_str(&text).map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StoreError::Read { path, source }),
        };

        debug!(path = %path.display(), entries = values.len(), "Session store opened");

        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, values: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let text = toml::to_string(values)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        std::fs::write(&self.path, text).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .ok()
            .and_then(|values| values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.lock().map_err(|_| StoreError::Poisoned)?;
        values.insert(key.to_string(), value.to_string());
        self.persist(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::TempDir;

    type Values = Mutex<BTreeMap<String, String>>;

    /// Panic on another thread while holding the store's lock.
    fn poison<S: Send + Sync + 'static>(store: &Arc<S>, values: fn(&S) -> &Values) {
        let store = Arc::clone(store);
        let _ = std::thread::spawn(move || {
            let _guard = values(&store).lock().unwrap();
            panic!("writer died");
        })
        .join();
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("apiBaseUrl"), None);
        store.set("apiBaseUrl", "http://localhost:5002/api").unwrap();
        assert_eq!(
            store.get("apiBaseUrl").as_deref(),
            Some("http://localhost:5002/api")
        );
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path().join("session.toml")).unwrap();
        assert_eq!(store.get("apiBaseUrl"), None);
    }

    #[test]
    fn test_file_store_persists_across_opens() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("session.toml");

        let store = FileStore::open(&path).unwrap();
        store.set("apiBaseUrl", "http://example.com/api").unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("apiBaseUrl").as_deref(),
            Some("http://example.com/api")
        );
    }

    #[test]
    fn test_file_store_rejects_garbage() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, "this is = = not toml").unwrap();
        assert!(matches!(
            FileStore::open(&path),
            Err(StoreError::Parse { .. })
        ));
    }

    #[test]
    fn test_memory_store_poisoned_write_fails() {
        let store = Arc::new(MemoryStore::new());
        poison(&store, |s| &s.values);
        assert!(matches!(
            store.set("apiBaseUrl", "http://example.com/api"),
            Err(StoreError::Poisoned)
        ));
        assert_eq!(store.get("apiBaseUrl"), None);
    }

    #[test]
    fn test_file_store_poisoned_write_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.toml");
        let store = Arc::new(FileStore::open(&path).unwrap());
        poison(&store, |s| &s.values);
        assert!(matches!(
            store.set("apiBaseUrl", "http://example.com/api"),
            Err(StoreError::Poisoned)
        ));
        assert!(!path.exists());
    }
}
