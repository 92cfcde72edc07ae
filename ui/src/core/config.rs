//! Storefront configuration: currency label, language defaults and the form
//! endpoints orders and contact messages are posted to.
//!
//! The TOML file at the crate root is embedded at compile time. Desktop builds
//! additionally honour `<config dir>/storefront.toml` when present.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::i18n::Language;

const EMBEDDED_CONFIG: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/storefront.toml"));

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid storefront config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not read config override: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    pub currency: String,
    pub default_language: Language,
    pub storage_key: String,
    pub forms: FormsConfig,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            currency: "MAD".to_string(),
            default_language: Language::Fr,
            storage_key: "language".to_string(),
            forms: FormsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormsConfig {
    pub order: FormEndpoint,
    pub contact: FormEndpoint,
}

/// A Google Form: its public id plus field-name -> `entry.NNN` mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormEndpoint {
    pub form_id: String,
    pub entries: BTreeMap<String, String>,
}

impl FormEndpoint {
    pub fn response_url(&self) -> String {
        format!("https://docs.google.com/forms/d/{}/formResponse", self.form_id)
    }

    pub fn entry_for(&self, field: &str) -> Option<&str> {
        self.entries.get(field).map(String::as_str)
    }
}

impl StorefrontConfig {
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml(EMBEDDED_CONFIG)
    }

    /// Embedded config, replaced by the on-disk override when one parses.
    pub fn load() -> Self {
        let embedded = Self::embedded().unwrap_or_else(|err| {
            tracing::error!(%err, "embedded storefront config is invalid; using defaults");
            Self::default()
        });
        match read_override() {
            Ok(Some(config)) => {
                tracing::info!("using storefront config override");
                config
            }
            Ok(None) => embedded,
            Err(err) => {
                tracing::warn!(%err, "ignoring storefront config override");
                embedded
            }
        }
    }
}

static CONFIG: Lazy<StorefrontConfig> = Lazy::new(StorefrontConfig::load);

pub fn config() -> &'static StorefrontConfig {
    &CONFIG
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn config_dir() -> Option<std::path::PathBuf> {
    directories::ProjectDirs::from("com", "SaShop", "SaShop").map(|dirs| dirs.config_dir().to_path_buf())
}

#[cfg(not(target_arch = "wasm32"))]
fn read_override() -> Result<Option<StorefrontConfig>, ConfigError> {
    let Some(path) = config_dir().map(|dir| dir.join("storefront.toml")) else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(path)?;
    StorefrontConfig::from_toml(&raw).map(Some)
}

#[cfg(target_arch = "wasm32")]
fn read_override() -> Result<Option<StorefrontConfig>, ConfigError> {
    Ok(None)
}
