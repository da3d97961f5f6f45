//! The registry collaborator seam.
//!
//! The scan pipeline consumes registries exclusively through these traits,
//! which keeps the pipeline testable against in-memory doubles and keeps
//! real storage backends out of this codebase.

use async_trait::async_trait;

use argus_core::Manifest;

use crate::error::RegistryError;

/// Read access to the manifests of a single repository.
#[async_trait]
pub trait Repository: std::fmt::Debug + Send + Sync {
    /// Returns the repository name.
    fn name(&self) -> &str;

    /// Lists all tags in the repository.
    ///
    /// No ordering is promised beyond whatever the driver returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag listing cannot be produced.
    async fn tags(&self) -> Result<Vec<String>, RegistryError>;

    /// Fetches the manifest stored under the given tag.
    ///
    /// # Errors
    ///
    /// Returns an error if no manifest is stored under the tag or the stored
    /// document cannot be decoded.
    async fn manifest(&self, tag: &str) -> Result<Manifest, RegistryError>;
}

/// A registry namespace: the collection of repositories a scan walks.
///
/// Namespaces are shared read-only across all scan workers and must be safe
/// for concurrent invocation.
#[async_trait]
pub trait Namespace: std::fmt::Debug + Send + Sync {
    /// Opens the named repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository does not exist or cannot be
    /// opened.
    async fn repository(&self, name: &str) -> Result<Box<dyn Repository>, RegistryError>;

    /// Enumerates repository names, up to `limit`.
    ///
    /// A result shorter than `limit` means the listing is complete; a result
    /// of exactly `limit` entries means it may have been truncated and the
    /// caller should treat the namespace as larger than it can handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing fails partway through.
    async fn repositories(&self, limit: usize) -> Result<Vec<String>, RegistryError>;
}
