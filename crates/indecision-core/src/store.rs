//! Key-value string stores used to persist the option list.
//!
//! The manager only ever talks to a [`KeyValueStore`]: a get/set map of
//! strings, the same contract as a browser's local storage. Two backends are
//! provided: [`MemoryStore`] for tests and embedding, and [`FileStore`],
//! which keeps the map in a JSON file on disk.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::warn;

use crate::error::{StoreError, StoreResult};

/// A string key-value store.
pub trait KeyValueStore {
    /// Fetch the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }
}

/// An in-memory store.
///
/// Counts writes so callers can observe when persistence was triggered.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an entry (not counted as a write).
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Number of successful `set` calls since creation.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Borrow the raw value under `key`.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// A store backed by a JSON object file, e.g. `{"options": "[\"a\"]"}`.
///
/// The file is read on every `get` and rewritten on every `set`, so several
/// processes sharing a file see each other's writes. A missing file reads as
/// an empty store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store at `path`. Nothing is touched until the first access.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.display_path(),
            source,
        }
    }

    fn read_map(&self) -> StoreResult<BTreeMap<String, String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(self.io_error(e)),
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|source| StoreError::Format {
            path: self.display_path(),
            source,
        })
    }

    /// Path the unreadable file is moved to before it is replaced.
    pub fn backup_path(&self) -> PathBuf {
        let mut bak = self.path.clone().into_os_string();
        bak.push(".bak");
        PathBuf::from(bak)
    }

    /// Current map for a write. An unreadable file is moved aside and
    /// replaced, so a corrupt store never blocks saving.
    fn map_for_write(&self) -> StoreResult<BTreeMap<String, String>> {
        match self.read_map() {
            Err(e @ StoreError::Format { .. }) => {
                let bak = self.backup_path();
                match fs::rename(&self.path, &bak) {
                    Ok(()) => warn!("{e}; moved it to {} and starting over", bak.display()),
                    Err(io) => warn!("{e}; overwriting it (backup failed: {io})"),
                }
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let json = serde_json::to_string_pretty(map).map_err(|source| StoreError::Format {
            path: self.display_path(),
            source,
        })?;

        // Write-then-rename so a crash never leaves a half-written map.
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, json).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        let mut map = self.map_for_write()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn memory_get_set() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("options").unwrap(), None);
        store.set("options", "[]").unwrap();
        assert_eq!(store.get("options").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn memory_seed_is_not_a_write() {
        let store = MemoryStore::new().with_entry("options", "[\"a\"]");
        assert_eq!(store.raw("options"), Some("[\"a\"]"));
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn borrowed_store_writes_through() {
        fn write<S: KeyValueStore>(mut store: S) {
            store.set("k", "v").unwrap();
        }

        let mut store = MemoryStore::new();
        write(&mut store);
        assert_eq!(store.raw("k"), Some("v"));
    }

    #[test]
    fn file_missing_reads_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("nope.json"));
        assert_eq!(store.get("options").unwrap(), None);
    }

    #[test]
    fn file_set_creates_parents_and_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/dir/store.json");
        let mut store = FileStore::new(&path);
        store.set("options", "[\"a\"]").unwrap();
        store.set("other", "x").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("options").unwrap().as_deref(), Some("[\"a\"]"));
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("x"));
        assert!(!dir.path().join("nested/dir/store.json.tmp").exists());
    }

    #[test]
    fn file_with_garbage_is_format_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();
        let store = FileStore::new(&path);
        assert!(matches!(
            store.get("options"),
            Err(StoreError::Format { .. })
        ));
    }

    #[test]
    fn file_with_garbage_is_replaced_on_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();

        let mut store = FileStore::new(&path);
        store.set("options", "[\"x\"]").unwrap();

        assert_eq!(store.get("options").unwrap().as_deref(), Some("[\"x\"]"));
        assert_eq!(fs::read_to_string(store.backup_path()).unwrap(), "not json");
    }

    #[test]
    fn file_blank_reads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "  \n").unwrap();
        assert_eq!(FileStore::new(&path).get("options").unwrap(), None);
    }
}
