// JSON file-backed key-value store
use crate::application::view_state_store::KeyValueStore;
use crate::domain::errors::StoreError;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Keeps every entry in memory and rewrites the whole file on each `set_raw`.
/// The file is a JSON object mapping key to the JSON-encoded value.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`. A missing file starts empty, as does one
    /// that cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::read_entries(&path);
        tracing::info!("Opened view state store at {} ({} keys)", path.display(), entries.len());

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    fn read_entries(path: &Path) -> BTreeMap<String, String> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                tracing::warn!("Could not read {}: {}", path.display(), e);
                return BTreeMap::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!("Discarding malformed store file {}: {}", path.display(), e);
            BTreeMap::new()
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let io_error = |source| StoreError::Io {
            path: self.path.display().to_string(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }

        let contents = serde_json::to_string_pretty(entries).map_err(|source| StoreError::Encode {
            key: "*".to_string(),
            source,
        })?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents).map_err(io_error)?;
        fs::rename(&tmp, &self.path).map_err(io_error)
    }
}

impl KeyValueStore for FileStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.set_raw_many(vec![(key, value)])
    }

    /// The in-memory entries only change once the file write has succeeded
    fn set_raw_many(&self, values: Vec<(&str, String)>) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let mut updated = entries.clone();
        for (key, value) in values {
            updated.insert(key.to_string(), value);
        }

        self.write_entries(&updated).inspect_err(|e| {
            tracing::error!("View state write failed: {}", e);
        })?;
        *entries = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let store = FileStore::open(&path);
        assert_eq!(store.get_raw("dashboard-page"), None);
        store.set_raw("dashboard-page", "2".to_string()).unwrap();
        store.set_raw("dashboard-search", "\"foo\"".to_string()).unwrap();
        drop(store);

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get_raw("dashboard-page").as_deref(), Some("2"));
        assert_eq!(reopened.get_raw("dashboard-search").as_deref(), Some("\"foo\""));
    }

    #[test]
    fn test_malformed_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "not json at all").unwrap();

        let store = FileStore::open(&path);
        assert_eq!(store.get_raw("dashboard-page"), None);

        store.set_raw("dashboard-page", "1".to_string()).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        let parsed: BTreeMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.get("dashboard-page").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_failed_write_leaves_entries_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "regular file").unwrap();

        let store = FileStore::open(blocker.join("state.json"));
        assert!(store.set_raw("dashboard-page", "7".to_string()).is_err());
        assert_eq!(store.get_raw("dashboard-page"), None);

        let pair = vec![
            ("dashboard-sortColumn", "\"name\"".to_string()),
            ("dashboard-sortDirection", "\"asc\"".to_string()),
        ];
        assert!(store.set_raw_many(pair).is_err());
        assert_eq!(store.get_raw("dashboard-sortColumn"), None);
        assert_eq!(store.get_raw("dashboard-sortDirection"), None);
    }

    #[test]
    fn test_set_many_writes_all_keys_together() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let store = FileStore::open(&path);
        store
            .set_raw_many(vec![
                ("dashboard-sortColumn", "\"email\"".to_string()),
                ("dashboard-sortDirection", "\"desc\"".to_string()),
            ])
            .unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get_raw("dashboard-sortColumn").as_deref(), Some("\"email\""));
        assert_eq!(reopened.get_raw("dashboard-sortDirection").as_deref(), Some("\"desc\""));
    }
}
