//! Error types for registry access and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading configuration or talking to a
/// storage driver.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Configuration file could not be read.
    #[error("Failed to read configuration at {path}: {source}")]
    ConfigRead {
        /// Configuration file path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration: {source}")]
    ConfigParse {
        /// Underlying error.
        #[source]
        source: serde_yaml::Error,
    },

    /// Configuration names a storage driver this build does not provide.
    #[error("Unsupported storage driver: {name}")]
    UnsupportedDriver {
        /// Driver name from the configuration.
        name: String,
    },

    /// A driver's parameter table is missing or malformed.
    #[error("Invalid configuration for driver '{driver}': {message}")]
    InvalidParameters {
        /// Driver name.
        driver: String,
        /// What is wrong with the parameters.
        message: String,
    },

    /// Repository does not exist in the namespace.
    #[error("Unknown repository: {name}")]
    UnknownRepository {
        /// Repository name.
        name: String,
    },

    /// No manifest is stored under the requested tag.
    #[error("Unknown manifest: {repository}:{tag}")]
    UnknownManifest {
        /// Repository name.
        repository: String,
        /// Requested tag.
        tag: String,
    },

    /// Driver I/O failure.
    #[error("Storage I/O error at {path}: {source}")]
    Io {
        /// Path the driver was touching.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A stored manifest document could not be decoded.
    #[error("Malformed manifest document for {repository}:{tag}: {source}")]
    MalformedManifest {
        /// Repository name.
        repository: String,
        /// Tag the document was stored under.
        tag: String,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// Repository enumeration failed partway through.
    #[error("Failed to enumerate repositories: {message}")]
    Enumeration {
        /// What went wrong.
        message: String,
    },
}
