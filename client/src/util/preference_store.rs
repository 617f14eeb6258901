//! Durable per-browser preference storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme controller persists the active mode through a
//! [`PreferenceStore`]. In the browser this is `localStorage`; without the
//! `hydrate` feature (SSR, native tests) the browser store is unavailable and
//! reads fall back to defaults.
//!
//! TRADE-OFFS
//! ==========
//! Writes are best effort. A full or blocked storage quota leaves the
//! in-memory mode correct for the session and the next load starts light.

#[cfg(test)]
#[path = "preference_store_test.rs"]
mod preference_store_test;

use catalog::{THEME_STORAGE_KEY, ThemeMode};

/// Raw string key/value storage.
pub trait PreferenceStore {
    /// Stored value for `key`, or `None` if absent or storage is unavailable.
    fn read_raw(&self, key: &str) -> Option<String>;

    /// Persist `raw` under `key`. Failures are ignored.
    fn write_raw(&self, key: &str, raw: &str);
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl PreferenceStore for BrowserStorage {
    fn read_raw(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn write_raw(&self, key: &str, raw: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            let _ = storage.set_item(key, raw);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, raw);
        }
    }
}

/// Read the persisted theme mode, defaulting to light.
pub fn read_theme_mode(store: &impl PreferenceStore) -> ThemeMode {
    ThemeMode::from_stored(store.read_raw(THEME_STORAGE_KEY).as_deref())
}

/// Persist `mode` as its JSON string form.
pub fn write_theme_mode(store: &impl PreferenceStore, mode: ThemeMode) {
    store.write_raw(THEME_STORAGE_KEY, &mode.to_stored());
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct MemoryStore {
    values: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl PreferenceStore for MemoryStore {
    fn read_raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn write_raw(&self, key: &str, raw: &str) {
        self.values.borrow_mut().insert(key.to_owned(), raw.to_owned());
    }
}
