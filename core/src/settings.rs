//! Settings for the command-line tool.
//!
//! The data directory is resolved from, in order: an explicit value (the
//! `--data-dir` flag), the `STOREFRONT_DATA_DIR` environment variable
//! (a `.env` file is honored by the CLI), then [`DEFAULT_DATA_DIR`].

use std::path::PathBuf;

use crate::store::{ConfigStore, FileStorage};

/// Environment variable naming the data directory.
pub const DATA_DIR_ENV: &str = "STOREFRONT_DATA_DIR";

/// Data directory relative to the current directory.
pub const DEFAULT_DATA_DIR: &str = ".storefront";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: PathBuf,
}

impl Settings {
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        Self::resolve_with(explicit, std::env::var(DATA_DIR_ENV).ok())
    }

    fn resolve_with(explicit: Option<PathBuf>, from_env: Option<String>) -> Self {
        let data_dir = explicit
            .or_else(|| from_env.filter(|v| !v.trim().is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        Self { data_dir }
    }

    pub fn config_store(&self) -> ConfigStore<FileStorage> {
        ConfigStore::new(FileStorage::new(&self.data_dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_wins() {
        let settings = Settings::resolve_with(Some("/tmp/a".into()), Some("/tmp/b".into()));
        assert_eq!(settings.data_dir, PathBuf::from("/tmp/a"));
    }

    #[test]
    fn test_env_then_default() {
        let settings = Settings::resolve_with(None, Some("/srv/store".into()));
        assert_eq!(settings.data_dir, PathBuf::from("/srv/store"));

        let settings = Settings::resolve_with(None, Some("  ".into()));
        assert_eq!(settings.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    }
}
