//! `localStorage`-backed preference store.

use web_sys::Storage;

use crate::state::prefs::PreferenceStore;

/// Preference store over `window.localStorage`.
///
/// When storage is unavailable (privacy mode, sandboxed iframe) reads return
/// nothing and writes are dropped, so the page falls back to defaults.
#[derive(Debug, Clone)]
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable; preferences will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if storage.set_item(key, value).is_err() {
                log::warn!("failed to persist preference {key}");
            }
        }
    }
}
