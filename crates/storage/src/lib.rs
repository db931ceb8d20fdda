//! Per-key JSON persistence for the ledger.
//!
//! Each record collection lives under its own key and is stored as a single
//! JSON document (`<key>.json`) inside the store directory. Writes always
//! replace the whole collection; there are no partial updates and no
//! transactions. A missing or unreadable document never fails a load: the
//! caller-supplied default is returned instead, since persisted-state
//! integrity is external to the ledger core.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub mod keys;
mod settings;

pub use settings::Settings;

/// Storage errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

/// File-backed key-value store holding one JSON document per key.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Opens the store described by `settings`.
    pub fn from_settings(settings: &Settings) -> Result<Self, StoreError> {
        Self::open(&settings.data_dir)
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Loads the collection stored under `key`.
    ///
    /// A missing key yields `default()`. A document that fails to parse
    /// also yields `default()` after logging a warning.
    pub fn load_or<T, F>(&self, key: &str, default: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        let path = self.path_for(key);
        let raw = match fs::read(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return default(),
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to read persisted collection");
                return default();
            }
        };
        match serde_json::from_slice(&raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, error = %err, "malformed persisted collection");
                default()
            }
        }
    }

    /// Loads the collection stored under `key`, defaulting via [`Default`].
    pub fn load<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        self.load_or(key, T::default)
    }

    /// Overwrites the collection stored under `key`.
    ///
    /// The document is written to a temporary file and renamed into place
    /// so a crash mid-write cannot leave a half-written collection behind.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let tmp = self.root.join(format!("{key}.json.tmp"));
        let raw = serde_json::to_vec_pretty(value)?;
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &path)?;
        tracing::debug!(key, "collection saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> JsonStore {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../target/test_data")
            .join(uuid::Uuid::new_v4().to_string());
        JsonStore::open(root).unwrap()
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = store();
        let records = vec!["coffee".to_string(), "rent".to_string()];

        store.save("honey-test", &records).unwrap();

        let loaded: Vec<String> = store.load("honey-test");
        assert_eq!(loaded, records);
    }

    #[test]
    fn missing_key_yields_default() {
        let store = store();

        let loaded: Vec<String> = store.load("honey-missing");
        assert!(loaded.is_empty());

        let seeded = store.load_or("honey-missing", || vec![1, 2, 3]);
        assert_eq!(seeded, vec![1, 2, 3]);
    }

    #[test]
    fn malformed_document_yields_default() {
        let store = store();
        fs::write(store.path_for("honey-broken"), b"{not json!").unwrap();

        let loaded: Vec<String> = store.load("honey-broken");
        assert!(loaded.is_empty());
    }

    #[test]
    fn save_overwrites_previous_collection() {
        let store = store();
        store.save("honey-test", &vec![1, 2, 3]).unwrap();
        store.save("honey-test", &vec![9]).unwrap();

        let loaded: Vec<i32> = store.load("honey-test");
        assert_eq!(loaded, vec![9]);
    }
}
