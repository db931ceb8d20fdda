use serde::Deserialize;

use crate::StoreError;

const DEFAULT_CONFIG_PATH: &str = "config/honeymoney.toml";

/// Storage settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the per-key JSON documents.
    pub data_dir: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from the optional TOML file and `HONEYMONEY_*`
    /// environment overrides.
    pub fn new() -> Result<Self, StoreError> {
        Self::from_path(DEFAULT_CONFIG_PATH)
    }

    pub fn from_path(path: &str) -> Result<Self, StoreError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("HONEYMONEY"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
