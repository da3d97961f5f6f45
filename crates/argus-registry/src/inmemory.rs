//! In-memory namespace for tests and local development.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use argus_core::Manifest;

use crate::error::RegistryError;
use crate::namespace::{Namespace, Repository};

type RepoMap = BTreeMap<String, BTreeMap<String, Manifest>>;

/// A [`Namespace`] backed by process memory.
///
/// Selected by the `inmemory` storage driver; also the standard test double
/// for the scan pipeline. Cloning shares the underlying store.
///
/// # Examples
///
/// ```
/// use argus_core::Manifest;
/// use argus_registry::{InMemoryNamespace, Namespace, Repository};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), argus_registry::RegistryError> {
/// let namespace = InMemoryNamespace::new();
/// namespace
///     .put_manifest("library/ubuntu", "latest", Manifest::new(vec![], vec![]))
///     .await;
///
/// let repo = namespace.repository("library/ubuntu").await?;
/// assert_eq!(repo.tags().await?, vec!["latest".to_string()]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryNamespace {
    repositories: Arc<RwLock<RepoMap>>,
}

impl InMemoryNamespace {
    /// Creates an empty namespace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a manifest under `repository:tag`, creating the repository if
    /// needed.
    pub async fn put_manifest(&self, repository: &str, tag: &str, manifest: Manifest) {
        self.repositories
            .write()
            .await
            .entry(repository.to_string())
            .or_default()
            .insert(tag.to_string(), manifest);
    }
}

#[async_trait]
impl Namespace for InMemoryNamespace {
    async fn repository(&self, name: &str) -> Result<Box<dyn Repository>, RegistryError> {
        let repositories = self.repositories.read().await;
        let manifests = repositories
            .get(name)
            .ok_or_else(|| RegistryError::UnknownRepository {
                name: name.to_string(),
            })?
            .clone();

        Ok(Box::new(InMemoryRepository {
            name: name.to_string(),
            manifests,
        }))
    }

    async fn repositories(&self, limit: usize) -> Result<Vec<String>, RegistryError> {
        Ok(self
            .repositories
            .read()
            .await
            .keys()
            .take(limit)
            .cloned()
            .collect())
    }
}

/// Snapshot of one repository's manifests at open time.
#[derive(Debug)]
struct InMemoryRepository {
    name: String,
    manifests: BTreeMap<String, Manifest>,
}

#[async_trait]
impl Repository for InMemoryRepository {
    fn name(&self) -> &str {
        &self.name
    }

    async fn tags(&self) -> Result<Vec<String>, RegistryError> {
        Ok(self.manifests.keys().cloned().collect())
    }

    async fn manifest(&self, tag: &str) -> Result<Manifest, RegistryError> {
        self.manifests
            .get(tag)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownManifest {
                repository: self.name.clone(),
                tag: tag.to_string(),
            })
    }
}
