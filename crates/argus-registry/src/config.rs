//! Storage configuration file model.
//!
//! The configuration file is YAML with a `storage:` section mapping a single
//! driver name to its parameter table, in the style of registry storage
//! configuration files:
//!
//! ```yaml
//! version: "0.1"
//! storage:
//!   filesystem:
//!     rootdirectory: /var/lib/argus/registry
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::RegistryError;

/// Parameter table for a storage driver.
pub type Parameters = BTreeMap<String, serde_yaml::Value>;

/// Top-level registry storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Configuration format version.
    #[serde(default)]
    pub version: String,

    /// Storage driver selection and parameters.
    pub storage: Storage,
}

impl Config {
    /// Loads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ConfigRead`] if the file cannot be read and
    /// [`RegistryError::ConfigParse`] if it is not valid configuration YAML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| RegistryError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&raw)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ConfigParse`] if the document is not valid
    /// configuration YAML.
    pub fn from_yaml(raw: &str) -> Result<Self, RegistryError> {
        serde_yaml::from_str(raw).map_err(|source| RegistryError::ConfigParse { source })
    }
}

/// The `storage:` section: exactly one driver name mapped to its parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Storage(BTreeMap<String, Parameters>);

impl Storage {
    /// Returns the configured driver name and its parameter table.
    ///
    /// Returns `None` unless exactly one driver section is present.
    #[must_use]
    pub fn driver(&self) -> Option<(&str, &Parameters)> {
        if self.0.len() == 1 {
            self.0.iter().next().map(|(name, params)| (name.as_str(), params))
        } else {
            None
        }
    }
}
