//! Error types for the scan pipeline.

use std::path::PathBuf;

use thiserror::Error;

use argus_registry::RegistryError;

/// Errors raised while resolving repository names or scanning a repository.
///
/// Per-repository variants (`OpenRepository`, `ListTags`, `GetManifest`) are
/// logged by the coordinator and only abandon that repository; the list
/// resolution variants are fatal to the whole scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Repository could not be opened; the repository is skipped.
    #[error("unexpected error getting repository {name}: {source}")]
    OpenRepository {
        /// Repository name.
        name: String,
        /// Underlying error.
        #[source]
        source: RegistryError,
    },

    /// Tag listing failed; the repository is skipped.
    #[error("unexpected error getting tags for {name}: {source}")]
    ListTags {
        /// Repository name.
        name: String,
        /// Underlying error.
        #[source]
        source: RegistryError,
    },

    /// Manifest fetch failed; the repository's remaining tags are skipped.
    #[error("unexpected error getting manifest {name}:{tag}: {source}")]
    GetManifest {
        /// Repository name.
        name: String,
        /// Tag whose manifest was requested.
        tag: String,
        /// Underlying error.
        #[source]
        source: RegistryError,
    },

    /// Repository list file could not be read.
    #[error("could not read repository list at {path}: {source}")]
    RepositoryFile {
        /// Repository list file path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Live repository enumeration failed.
    #[error("unexpected error enumerating repositories: {source}")]
    Enumerate {
        /// Underlying error.
        #[source]
        source: RegistryError,
    },

    /// The registry holds at least as many repositories as the ceiling.
    #[error("too many repositories (limit {limit})")]
    TooManyRepositories {
        /// Configured repository ceiling.
        limit: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_open_repository() {
        let err = ScanError::OpenRepository {
            name: "acme/api".to_string(),
            source: RegistryError::UnknownRepository {
                name: "acme/api".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "unexpected error getting repository acme/api: Unknown repository: acme/api"
        );
    }

    #[test]
    fn test_error_display_overflow() {
        let err = ScanError::TooManyRepositories { limit: 500_000 };
        assert_eq!(err.to_string(), "too many repositories (limit 500000)");
    }
}
