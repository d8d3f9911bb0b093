//! Persisted UI preferences (language, per-table paging and search). Values are
//! stored as JSON strings in `localStorage`. A missing or corrupt entry is never
//! an error for the caller: it is logged and the supplied default is used.

use super::errors::AppError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::{cell::RefCell, collections::HashMap};
use tracing::warn;

/// Storage key for the interface language.
pub const LANGUAGE_KEY: &str = "alenna-language";

/// Minimal string key/value store; `localStorage` in the browser, a map in tests.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
}

/// In-memory store used when `localStorage` is unavailable (private mode, tests).
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Browser `window.localStorage`.
#[cfg(target_arch = "wasm32")]
pub struct BrowserStore {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    pub fn open() -> Result<Self, AppError> {
        web_sys::window()
            .ok_or_else(|| AppError::Storage("Window not found".to_string()))?
            .local_storage()
            .map_err(|_| AppError::Storage("localStorage is not accessible".to_string()))?
            .map(|storage| Self { storage })
            .ok_or_else(|| AppError::Storage("localStorage is not available".to_string()))
    }

    /// `localStorage` when usable, otherwise an in-memory store for this page view.
    pub fn open_or_memory() -> Box<dyn KeyValueStore> {
        match Self::open() {
            Ok(store) => Box::new(store),
            Err(err) => {
                warn!("Preferences will not persist: {err}");
                Box::new(MemoryStore::default())
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        self.storage
            .get_item(key)
            .map_err(|_| AppError::Storage(format!("Failed to read {key}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.storage
            .set_item(key, value)
            .map_err(|_| AppError::Storage(format!("Failed to write {key}")))
    }
}

/// Reads and decodes `key`, returning `default` when absent or unreadable.
pub fn load_json_or<T: DeserializeOwned>(
    store: &(impl KeyValueStore + ?Sized),
    key: &str,
    default: T,
) -> T {
    match store.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!("Ignoring corrupt stored value for {key}: {err}");
                default
            }
        },
        Ok(None) => default,
        Err(err) => {
            warn!("Falling back to default for {key}: {err}");
            default
        }
    }
}

/// Encodes and writes `value`; failures are logged and swallowed.
pub fn save_json<T: Serialize>(
    store: &(impl KeyValueStore + ?Sized),
    key: &str,
    value: &T,
) {
    let encoded = match serde_json::to_string(value) {
        Ok(encoded) => encoded,
        Err(err) => {
            warn!("Failed to encode value for {key}: {err}");
            return;
        }
    };
    if let Err(err) = store.set(key, &encoded) {
        warn!("Failed to persist {key}: {err}");
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }
}

pub fn load_language(store: &(impl KeyValueStore + ?Sized)) -> Language {
    load_json_or(store, LANGUAGE_KEY, Language::default())
}

pub fn save_language(store: &(impl KeyValueStore + ?Sized), language: Language) {
    save_json(store, LANGUAGE_KEY, &language);
}

/// Paging, sorting and search state remembered per table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableState {
    pub page: usize,
    pub page_size: usize,
    pub search: String,
    pub sort_by: Option<String>,
    pub sort_desc: bool,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: 10,
            search: String::new(),
            sort_by: None,
            sort_desc: false,
        }
    }
}

impl TableState {
    /// Number of pages needed for `total` rows; at least one.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size.max(1)).max(1)
    }

    /// Row range of the current page, clamped to `total`.
    pub fn page_range(&self, total: usize) -> std::ops::Range<usize> {
        let size = self.page_size.max(1);
        let page = self.page.min(self.page_count(total) - 1);
        let start = (page * size).min(total);
        start..(start + size).min(total)
    }
}

/// Storage key for one table's state, e.g. `alenna-table-students-main`.
pub fn table_state_key(key: &str, table_id: &str) -> String {
    format!("alenna-table-{key}-{table_id}")
}

pub fn load_table_state(
    store: &(impl KeyValueStore + ?Sized),
    key: &str,
    table_id: &str,
) -> TableState {
    load_json_or(store, &table_state_key(key, table_id), TableState::default())
}

pub fn save_table_state(
    store: &(impl KeyValueStore + ?Sized),
    key: &str,
    table_id: &str,
    state: &TableState,
) {
    save_json(store, &table_state_key(key, table_id), state);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, AppError> {
            Err(AppError::Storage("quota".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), AppError> {
            Err(AppError::Storage("quota".to_string()))
        }
    }

    #[test]
    fn language_defaults_to_spanish_and_persists() {
        let store = MemoryStore::default();
        assert_eq!(load_language(&store), Language::Es);

        save_language(&store, Language::En);
        assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("\"en\""));
        assert_eq!(load_language(&store), Language::En);
    }

    #[test]
    fn corrupt_entries_fall_back_to_default() {
        let store = MemoryStore::default();
        store.set(LANGUAGE_KEY, "{not json").unwrap();
        assert_eq!(load_language(&store), Language::Es);

        store.set(&table_state_key("students", "main"), "[]").unwrap();
        assert_eq!(
            load_table_state(&store, "students", "main"),
            TableState::default()
        );
    }

    #[test]
    fn boxed_store_is_accepted() {
        let store: Box<dyn KeyValueStore> = Box::new(MemoryStore::default());
        save_language(&*store, Language::En);
        assert_eq!(load_language(&*store), Language::En);
    }

    #[test]
    fn failing_store_never_raises() {
        save_language(&FailingStore, Language::En);
        assert_eq!(load_language(&FailingStore), Language::Es);
    }

    #[test]
    fn table_state_round_trips_under_namespaced_key() {
        let store = MemoryStore::default();
        let state = TableState {
            page: 2,
            search: "dámaso".to_string(),
            ..TableState::default()
        };
        save_table_state(&store, "students", "main", &state);

        assert!(store.get("alenna-table-students-main").unwrap().is_some());
        assert_eq!(load_table_state(&store, "students", "main"), state);
        assert_eq!(
            load_table_state(&store, "students", "other"),
            TableState::default()
        );
    }

    #[test]
    fn partial_table_state_fills_missing_fields() {
        let store = MemoryStore::default();
        store
            .set(&table_state_key("groups", "main"), r#"{"page":1}"#)
            .unwrap();
        let state = load_table_state(&store, "groups", "main");
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, 10);
    }

    #[test]
    fn page_range_clamps_to_total() {
        let state = TableState {
            page: 5,
            page_size: 10,
            ..TableState::default()
        };
        assert_eq!(state.page_count(25), 3);
        assert_eq!(state.page_range(25), 20..25);
        assert_eq!(state.page_range(0), 0..0);
    }
}
