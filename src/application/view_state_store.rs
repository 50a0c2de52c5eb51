// Persisted view state - one store key per ViewState field
use crate::domain::errors::StoreError;
use crate::domain::view_state::{
    DEFAULT_PAGE, DEFAULT_PAGE_SIZE, Sort, SortColumn, SortDirection, ViewState,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

pub const SEARCH_KEY: &str = "dashboard-search";
pub const PAGE_KEY: &str = "dashboard-page";
pub const PAGE_SIZE_KEY: &str = "dashboard-pageSize";
pub const SORT_COLUMN_KEY: &str = "dashboard-sortColumn";
pub const SORT_DIRECTION_KEY: &str = "dashboard-sortDirection";

/// String key-value storage that survives restarts. Values are JSON text.
pub trait KeyValueStore: Send + Sync {
    fn get_raw(&self, key: &str) -> Option<String>;

    fn set_raw(&self, key: &str, value: String) -> Result<(), StoreError>;

    /// Write several keys as one update. Backends that can fail part-way
    /// override this so that either every key is stored or none is.
    fn set_raw_many(&self, values: Vec<(&str, String)>) -> Result<(), StoreError> {
        for (key, value) in values {
            self.set_raw(key, value)?;
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct ViewStateStore {
    store: Arc<dyn KeyValueStore>,
}

impl ViewStateStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Decoded value for `key`, or `default` when the key is absent or its
    /// value does not decode as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let Some(raw) = self.store.get_raw(key) else {
            return default;
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Ignoring unreadable value for {}: {}", key, e);
                default
            }
        }
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        self.store.set_raw(key, encode(key, value)?)
    }

    /// Rehydrate the dashboard view state, normalising out-of-range values
    pub fn load(&self) -> ViewState {
        let search_term: String = self.get(SEARCH_KEY, String::new());

        let current_page = match self.get::<i64>(PAGE_KEY, DEFAULT_PAGE as i64) {
            page if page >= 1 => page as usize,
            _ => DEFAULT_PAGE,
        };

        let page_size = match self.get::<i64>(PAGE_SIZE_KEY, DEFAULT_PAGE_SIZE as i64) {
            size if size > 0 => size as usize,
            _ => DEFAULT_PAGE_SIZE,
        };

        let column: Option<SortColumn> = self.get(SORT_COLUMN_KEY, None);
        let direction: Option<SortDirection> = self.get(SORT_DIRECTION_KEY, None);

        ViewState {
            search_term,
            current_page,
            page_size,
            sort: Sort::from_parts(column, direction),
        }
    }

    pub fn save_search_term(&self, term: &str) -> Result<(), StoreError> {
        self.set(SEARCH_KEY, &term)
    }

    pub fn save_current_page(&self, page: usize) -> Result<(), StoreError> {
        self.set(PAGE_KEY, &page)
    }

    pub fn save_page_size(&self, page_size: usize) -> Result<(), StoreError> {
        self.set(PAGE_SIZE_KEY, &page_size)
    }

    /// Column and direction are written as two keys, `null` when unsorted
    pub fn save_sort(&self, sort: Option<Sort>) -> Result<(), StoreError> {
        let column = encode(SORT_COLUMN_KEY, &sort.map(|s| s.column))?;
        let direction = encode(SORT_DIRECTION_KEY, &sort.map(|s| s.direction))?;
        self.store.set_raw_many(vec![
            (SORT_COLUMN_KEY, column),
            (SORT_DIRECTION_KEY, direction),
        ])
    }
}

fn encode<T: Serialize>(key: &str, value: &T) -> Result<String, StoreError> {
    serde_json::to_string(value).map_err(|source| StoreError::Encode {
        key: key.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory_store::MemoryStore;

    fn store() -> (Arc<MemoryStore>, ViewStateStore) {
        let memory = Arc::new(MemoryStore::new());
        let view_store = ViewStateStore::new(memory.clone());
        (memory, view_store)
    }

    #[test]
    fn test_missing_keys_load_defaults() {
        let (_, view_store) = store();
        assert_eq!(view_store.load(), ViewState::default());
    }

    #[test]
    fn test_round_trips_each_field() {
        let (memory, view_store) = store();
        view_store.save_search_term("foo").unwrap();
        view_store.save_current_page(2).unwrap();
        view_store.save_page_size(20).unwrap();
        view_store
            .save_sort(Some(Sort::new(SortColumn::Email, SortDirection::Desc)))
            .unwrap();

        assert_eq!(memory.get_raw(SEARCH_KEY).as_deref(), Some("\"foo\""));
        assert_eq!(memory.get_raw(SORT_COLUMN_KEY).as_deref(), Some("\"email\""));

        let state = view_store.load();
        assert_eq!(state.search_term, "foo");
        assert_eq!(state.current_page, 2);
        assert_eq!(state.page_size, 20);
        assert_eq!(state.sort, Some(Sort::new(SortColumn::Email, SortDirection::Desc)));
    }

    #[test]
    fn test_clearing_sort_writes_null() {
        let (memory, view_store) = store();
        view_store.save_sort(None).unwrap();
        assert_eq!(memory.get_raw(SORT_COLUMN_KEY).as_deref(), Some("null"));
        assert_eq!(memory.get_raw(SORT_DIRECTION_KEY).as_deref(), Some("null"));
        assert_eq!(view_store.load().sort, None);
    }

    #[test]
    fn test_corrupt_key_does_not_affect_others() {
        let (memory, view_store) = store();
        view_store.save_search_term("kept").unwrap();
        memory.set_raw(PAGE_SIZE_KEY, "{not json".to_string()).unwrap();
        memory.set_raw(PAGE_KEY, "3".to_string()).unwrap();

        let state = view_store.load();
        assert_eq!(state.search_term, "kept");
        assert_eq!(state.current_page, 3);
        assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_out_of_range_values_are_normalised() {
        let (memory, view_store) = store();
        memory.set_raw(PAGE_KEY, "0".to_string()).unwrap();
        memory.set_raw(PAGE_SIZE_KEY, "-5".to_string()).unwrap();
        memory.set_raw(SORT_COLUMN_KEY, "\"name\"".to_string()).unwrap();

        let state = view_store.load();
        assert_eq!(state.current_page, DEFAULT_PAGE);
        assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(state.sort, None);
    }

    #[test]
    fn test_get_returns_default_for_absent_key() {
        let (_, view_store) = store();
        assert_eq!(view_store.get("missing", 42u32), 42);
    }

    #[test]
    fn test_failed_save_is_not_served_by_load() {
        use crate::infrastructure::file_store::FileStore;

        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "regular file").unwrap();
        let view_store = ViewStateStore::new(Arc::new(FileStore::open(blocker.join("state.json"))));

        assert!(view_store.save_current_page(7).is_err());
        assert!(view_store
            .save_sort(Some(Sort::new(SortColumn::Name, SortDirection::Asc)))
            .is_err());

        let state = view_store.load();
        assert_eq!(state.current_page, DEFAULT_PAGE);
        assert_eq!(state.sort, None);
    }
}
