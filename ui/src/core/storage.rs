//! Local persistence for client settings (currently the display language).
//!
//! - Web/WASM: `window.localStorage`.
//! - Desktop: a small JSON map in the OS config directory.
//! - Tests: [`MemoryStorage`].

use std::collections::BTreeMap;

use crate::core::config;
use crate::i18n::Language;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage backend is unavailable")]
    Unavailable,
    #[error("storage write rejected: {0}")]
    Rejected(String),
    #[error("settings file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Minimal string key/value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Stored language preference, or the configured default (French) when absent
/// or unsupported.
pub fn load_language(store: &impl KeyValueStore) -> Language {
    let config = config::config();
    match store.get(&config.storage_key) {
        Some(saved) => match saved.parse::<Language>() {
            Ok(language) => language,
            Err(err) => {
                tracing::warn!(%err, "ignoring stored language preference");
                config.default_language
            }
        },
        None => config.default_language,
    }
}

pub fn save_language(store: &mut impl KeyValueStore, language: Language) -> Result<(), StorageError> {
    store.set(&config::config().storage_key, language.code())
}

/// In-memory store, used by tests and as a stand-in when no backend exists.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStorage as DefaultStore;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage as DefaultStore;

/// Platform store for the running target.
pub fn default_store() -> DefaultStore {
    DefaultStore::open()
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{KeyValueStore, StorageError};

    /// `window.localStorage`, looked up on every call.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct BrowserStorage;

    impl BrowserStorage {
        pub fn open() -> Self {
            Self
        }

        fn local() -> Option<web_sys::Storage> {
            web_sys::window()?.local_storage().ok().flatten()
        }
    }

    impl KeyValueStore for BrowserStorage {
        fn get(&self, key: &str) -> Option<String> {
            Self::local()?.get_item(key).ok().flatten()
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            let storage = Self::local().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|err| StorageError::Rejected(format!("{err:?}")))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::collections::BTreeMap;
    use std::fs;
    use std::path::PathBuf;

    use super::{KeyValueStore, StorageError};

    const SETTINGS_FILE: &str = "settings.json";

    /// JSON object persisted at `<config dir>/settings.json`.
    #[derive(Debug, Clone)]
    pub struct FileStorage {
        path: Option<PathBuf>,
    }

    impl FileStorage {
        pub fn open() -> Self {
            Self {
                path: crate::core::config::config_dir().map(|dir| dir.join(SETTINGS_FILE)),
            }
        }

        pub fn at(path: PathBuf) -> Self {
            Self { path: Some(path) }
        }

        fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
            let path = self.path.as_ref().ok_or(StorageError::Unavailable)?;
            if !path.exists() {
                return Ok(BTreeMap::new());
            }
            let raw = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&raw)?)
        }
    }

    impl KeyValueStore for FileStorage {
        fn get(&self, key: &str) -> Option<String> {
            match self.read_all() {
                Ok(mut entries) => entries.remove(key),
                Err(err) => {
                    tracing::debug!(%err, "settings unavailable");
                    None
                }
            }
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            let path = self.path.clone().ok_or(StorageError::Unavailable)?;
            // A corrupt file is replaced rather than blocking the write.
            let mut entries = self.read_all().unwrap_or_default();
            entries.insert(key.to_string(), value.to_string());
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, serde_json::to_string_pretty(&entries)?)?;
            Ok(())
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_french_when_nothing_saved() {
        assert_eq!(load_language(&MemoryStorage::default()), Language::Fr);
    }

    #[test]
    fn round_trips_saved_language() {
        let mut store = MemoryStorage::default();
        save_language(&mut store, Language::Ar).unwrap();
        assert_eq!(store.get("language").as_deref(), Some("ar"));
        assert_eq!(load_language(&store), Language::Ar);
    }

    #[test]
    fn ignores_unsupported_saved_value() {
        let mut store = MemoryStorage::default();
        store.set("language", "de").unwrap();
        assert_eq!(load_language(&store), Language::Fr);
    }
}
