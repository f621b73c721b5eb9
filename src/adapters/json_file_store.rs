//! JSON file-backed key-value store.
//!
//! All keys live in a single JSON object on disk:
//!
//! ```json
//! { "pokemons": "[{\"name\":\"bulbasaur\",\"image\":null}]" }
//! ```
//!
//! The whole file is rewritten on every `set`/`remove`, via a sibling
//! `storage.json.tmp` that is renamed into place.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::traits::{KeyValueStore, StoreError};

/// The storage file name inside the data directory.
pub const STORAGE_FILE: &str = "storage.json";

type Entries = BTreeMap<String, String>;

/// Key-value store persisted as a JSON object file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Create a store backed by `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Create a store at `<data_dir>/storage.json`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(STORAGE_FILE))
    }

    /// Get the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries, StoreError> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }
        let reader = BufReader::new(File::open(&self.path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        // Write to a temporary file first, then rename over the real one so a
        // crash mid-write never leaves a truncated storage file.
        let temp_path = self.path.with_extension("json.tmp");
        let mut writer = BufWriter::new(File::create(&temp_path)?);
        serde_json::to_writer_pretty(&mut writer, entries)?;
        writer.flush()?;
        drop(writer);
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        // A corrupt file is replaced rather than blocking every future write.
        let mut entries = self.read_entries().unwrap_or_else(|err| {
            tracing::warn!("Discarding unreadable storage file {:?}: {}", self.path, err);
            Entries::new()
        });
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store(temp_dir: &TempDir) -> JsonFileStore {
        JsonFileStore::in_dir(&temp_dir.path().join("nested"))
    }

    #[test]
    fn test_get_missing_file_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        assert!(store.get("pokemons").unwrap().is_none());
    }

    #[test]
    fn test_set_creates_parent_dirs_and_persists() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        store.set("pokemons", "[]").unwrap();
        assert!(store.path().exists());

        let reopened = create_test_store(&temp_dir);
        assert_eq!(reopened.get("pokemons").unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_set_overwrites_and_keeps_other_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.set("a", "3").unwrap();

        assert_eq!(store.get("a").unwrap(), Some("3".to_string()));
        assert_eq!(store.get("b").unwrap(), Some("2".to_string()));
    }

    #[test]
    fn test_remove() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        store.set("pokemons", "[]").unwrap();
        store.remove("pokemons").unwrap();
        assert!(store.get("pokemons").unwrap().is_none());

        // Removing again is fine
        store.remove("pokemons").unwrap();
    }

    #[test]
    fn test_corrupt_file_reports_error_on_get_and_is_replaced_on_set() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "not json").unwrap();

        assert!(matches!(store.get("pokemons"), Err(StoreError::Json(_))));

        store.set("pokemons", "[]").unwrap();
        assert_eq!(store.get("pokemons").unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_interrupted_write_leaves_previous_contents() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        store.set("pokemons", "[]").unwrap();

        let temp_path = store.path().with_extension("json.tmp");
        assert!(!temp_path.exists());

        // A crash mid-write only ever leaves a partial temp file behind.
        fs::write(&temp_path, "{\"pokem").unwrap();
        assert_eq!(store.get("pokemons").unwrap(), Some("[]".to_string()));

        store.set("pokemons", "[1]").unwrap();
        assert!(!temp_path.exists());
        assert_eq!(store.get("pokemons").unwrap(), Some("[1]".to_string()));
    }
}
