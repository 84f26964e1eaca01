//! Configuration types for confenv
//!
//! This module defines the configuration record that can be loaded from a
//! file and then overridden from environment variables.

use confenv_macros::EnvOverlay;
use serde::{Deserialize, Serialize};

/// Root configuration record
///
/// Every field is a flat string. The serialized key is the same in all
/// supported formats; the environment variable is derived from the field
/// name (`base_url` is read from `BASE_URL`).
///
/// Deserialization goes through [`ConfigPatch`], so keys that are missing or
/// null keep their default value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnvOverlay)]
#[serde(from = "ConfigPatch")]
pub struct ConfigRecord {
    /// Application name
    pub name: String,

    /// Base URL the application talks to
    pub base_url: String,

    /// Storage driver
    pub driver: String,
}

impl Default for ConfigRecord {
    fn default() -> Self {
        Self {
            name: "No name".to_string(),
            base_url: "No base url".to_string(),
            driver: "No Driver".to_string(),
        }
    }
}

/// Values present in a config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigPatch {
    pub name: Option<String>,
    pub base_url: Option<String>,
    pub driver: Option<String>,
}

impl ConfigRecord {
    /// Overwrite the fields that are present in `patch`
    pub fn merge(&mut self, patch: ConfigPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(base_url) = patch.base_url {
            self.base_url = base_url;
        }
        if let Some(driver) = patch.driver {
            self.driver = driver;
        }
    }
}

impl From<ConfigPatch> for ConfigRecord {
    fn from(patch: ConfigPatch) -> Self {
        let mut record = Self::default();
        record.merge(patch);
        record
    }
}
