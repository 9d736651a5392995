//! Config store: load and save the whole [`AppConfig`] through a
//! key-value backend.
//!
//! The document lives under a single key. Loading never fails the caller:
//! a missing or unreadable document yields [`default_config`]. Saving is
//! best-effort and logs failures.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::defaults::default_config;
use crate::error::{StorageError, StorageResult};
use crate::models::AppConfig;

/// Key the config document is stored under.
pub const STORAGE_KEY: &str = "storefront_config";

/// Minimal string key-value store (browser `localStorage`, a directory,
/// or memory).
pub trait StorageBackend {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&self, key: &str) -> StorageResult<()>;
}

// =============================================================================
// Memory backend
// =============================================================================

/// In-memory backend, used by tests and as a fallback when no persistent
/// storage is reachable.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // a poisoned map is still a valid map
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries().remove(key);
        Ok(())
    }
}

// =============================================================================
// File backend
// =============================================================================

/// One `<key>.json` file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

// =============================================================================
// Config store
// =============================================================================

/// Reads and writes the config aggregate as one JSON document.
#[derive(Debug)]
pub struct ConfigStore<B> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> ConfigStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, STORAGE_KEY)
    }

    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Stored config, or the defaults when absent or corrupt.
    pub fn load(&self) -> AppConfig {
        match self.backend.get(&self.key) {
            Ok(Some(raw)) => match serde_json::from_str::<AppConfig>(&raw) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("Stored config is unreadable, using defaults: {}", e);
                    default_config()
                }
            },
            Ok(None) => {
                log::debug!("No stored config under '{}', using defaults", self.key);
                default_config()
            }
            Err(e) => {
                log::warn!("Could not read stored config, using defaults: {}", e);
                default_config()
            }
        }
    }

    /// Write the whole document, reporting failures.
    pub fn try_save(&self, config: &AppConfig) -> Result<(), StorageError> {
        let json = serde_json::to_string(config)?;
        self.backend.set(&self.key, &json)
    }

    /// Best-effort write: failures are logged, not returned.
    pub fn save(&self, config: &AppConfig) {
        if let Err(e) = self.try_save(config) {
            log::error!("Failed to save config: {}", e);
        }
    }

    /// Drop the stored document so the next load yields defaults.
    pub fn reset(&self) -> StorageResult<()> {
        self.backend.remove(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    struct BrokenStorage;

    impl StorageBackend for BrokenStorage {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Unavailable("disabled".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Unavailable("quota exceeded".into()))
        }

        fn remove(&self, _key: &str) -> StorageResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_absent_document_loads_defaults() {
        let store = ConfigStore::new(MemoryStorage::new());
        assert_eq!(store.load(), default_config());
    }

    #[test]
    fn test_corrupt_document_loads_defaults() {
        let backend = MemoryStorage::new();
        backend.set(STORAGE_KEY, "{not json").unwrap();
        let store = ConfigStore::new(backend);
        assert_eq!(store.load(), default_config());

        // valid JSON, wrong shape
        store.backend().set(STORAGE_KEY, r#"{"reviews": 3}"#).unwrap();
        assert_eq!(store.load(), default_config());
    }

    #[test]
    fn test_save_then_load_returns_saved_config() {
        let store = ConfigStore::new(MemoryStorage::new());
        let mut config = default_config();
        config.discord_link = "https://discord.gg/miuw".into();
        store.save(&config);
        assert_eq!(store.load().discord_link, "https://discord.gg/miuw");
    }

    #[test]
    fn test_saved_document_uses_browser_field_names() {
        let store = ConfigStore::new(MemoryStorage::new());
        store.save(&default_config());
        let raw = store.backend().get(STORAGE_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["adminAuth"]["password"], "92668751");
        assert!(value["overrides"]["Melonity_1 Day"]["fiatWorld"].is_string());
        assert!(value.get("productStyles").is_some());
    }

    #[test]
    fn test_unreachable_backend_never_fails_caller() {
        let store = ConfigStore::new(BrokenStorage);
        assert_eq!(store.load(), default_config());
        store.save(&default_config());
        assert!(store.try_save(&default_config()).is_err());
    }

    #[test]
    fn test_file_storage_roundtrip_and_reset() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(FileStorage::new(dir.path().join("data")));

        let mut config = default_config();
        config.whatsapp_number = "6281234".into();
        store.try_save(&config).unwrap();
        assert!(dir.path().join("data/storefront_config.json").exists());
        assert_eq!(store.load().whatsapp_number, "6281234");

        store.reset().unwrap();
        assert_eq!(store.load(), default_config());
        // resetting twice is fine
        store.reset().unwrap();
    }
}
