//! Key-value persistence for selected puzzles
//!
//! Keys are `"{prefix}{day}"` and values are algorithm strings. Each puzzle day
//! gets its own key, so nothing ever expires.

use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for store reads and writes
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("store file {path} is not a JSON object of strings: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Synchronous string key-value store
pub trait PuzzleStore {
    /// Read a value, `Ok(None)` when the key was never written
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any previous one
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store, forgotten on exit
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PuzzleStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a single JSON object file
///
/// The file is read on every `get` and rewritten on every `set`; it holds one
/// short entry per day played.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `<data dir>/algle/puzzles.json`
    ///
    /// Returns `None` when the platform has no data directory.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("algle").join("puzzles.json"))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<serde_json::Map<String, serde_json::Value>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(serde_json::Map::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl PuzzleStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self.read_all()?;
        Ok(values
            .get(key)
            .and_then(serde_json::Value::as_str)
            .map(str::to_string))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // A corrupt file is replaced rather than blocking today's puzzle
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(StoreError::Json { .. }) => serde_json::Map::new(),
            Err(e) => return Err(e),
        };
        values.insert(key.to_string(), serde_json::Value::from(value));

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let content = serde_json::to_string_pretty(&values).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, content).map_err(|e| self.io_error(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "R U").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("R U"));

        store.set("k", "F R").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("F R"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("puzzles.json"));
        assert_eq!(store.get("algle:1").unwrap(), None);
    }

    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("puzzles.json");

        let mut first = FileStore::new(&path);
        first.set("algle:1", "R U R' U'").unwrap();
        first.set("algle:2", "R' F R F'").unwrap();

        let second = FileStore::new(&path);
        assert_eq!(second.get("algle:1").unwrap().as_deref(), Some("R U R' U'"));
        assert_eq!(second.get("algle:2").unwrap().as_deref(), Some("R' F R F'"));
        assert_eq!(second.path(), path.as_path());
    }

    #[test]
    fn file_store_corrupt_file_errors_on_get() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("puzzles.json");
        fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.get("k"), Err(StoreError::Json { .. })));
    }

    #[test]
    fn file_store_set_replaces_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("puzzles.json");
        fs::write(&path, "not json").unwrap();

        let mut store = FileStore::new(&path);
        store.set("k", "U2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("U2"));
    }

    #[test]
    fn file_store_ignores_non_string_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("puzzles.json");
        fs::write(&path, r#"{"k": 5}"#).unwrap();

        let store = FileStore::new(&path);
        assert_eq!(store.get("k").unwrap(), None);
    }
}
