//! Browser `localStorage` backend for the config store.

use leptos::*;
use storefront::{AppConfig, ConfigStore, StorageBackend, StorageError};
use wasm_bindgen::JsValue;

/// `window.localStorage` as a [`StorageBackend`].
///
/// The storage handle is looked up on every call, so a missing window or
/// disabled storage surfaces as [`StorageError::Unavailable`] instead of a
/// panic.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

fn js_error(e: JsValue) -> StorageError {
    StorageError::Unavailable(format!("{:?}", e))
}

impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?.remove_item(key).map_err(js_error)
    }
}

/// Config store backed by `localStorage`.
pub fn browser_store() -> ConfigStore<LocalStorage> {
    ConfigStore::new(LocalStorage)
}

/// Replace the in-memory config and write it back in full.
///
/// This is the only way the UI mutates store state.
pub fn commit_config(set_config: WriteSignal<AppConfig>, next: AppConfig) {
    browser_store().save(&next);
    set_config.set(next);
}
