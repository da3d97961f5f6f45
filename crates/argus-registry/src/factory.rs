//! Storage driver construction.
//!
//! Maps the driver name in a [`Config`] to a concrete [`Namespace`]. Driver
//! selection happens once at startup; a name this build does not provide is
//! a fatal setup error, never something the scan works around.

use std::sync::Arc;

use crate::config::Config;
use crate::error::RegistryError;
use crate::filesystem::FilesystemNamespace;
use crate::inmemory::InMemoryNamespace;
use crate::namespace::Namespace;

/// Constructs a [`Namespace`] from a parsed configuration.
///
/// # Errors
///
/// Returns [`RegistryError::InvalidParameters`] when the `storage:` section
/// does not name exactly one driver or a driver parameter is missing, and
/// [`RegistryError::UnsupportedDriver`] for driver names this build does not
/// provide.
pub fn create(config: &Config) -> Result<Arc<dyn Namespace>, RegistryError> {
    let Some((driver, parameters)) = config.storage.driver() else {
        return Err(RegistryError::InvalidParameters {
            driver: "storage".to_string(),
            message: "exactly one storage driver section is required".to_string(),
        });
    };

    match driver {
        "inmemory" => Ok(Arc::new(InMemoryNamespace::new())),
        "filesystem" => {
            let root = parameters
                .get("rootdirectory")
                .and_then(serde_yaml::Value::as_str)
                .ok_or_else(|| RegistryError::InvalidParameters {
                    driver: driver.to_string(),
                    message: "'rootdirectory' is required".to_string(),
                })?;
            Ok(Arc::new(FilesystemNamespace::new(root)))
        }
        other => Err(RegistryError::UnsupportedDriver {
            name: other.to_string(),
        }),
    }
}
