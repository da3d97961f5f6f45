//! Filesystem-backed namespace over a local audit tree.
//!
//! Each repository is a directory under the root; its manifests live as JSON
//! documents in a `_tags` subdirectory, one file per tag. Repository names
//! may contain slashes, so discovery walks the whole tree:
//!
//! ```text
//! <root>/library/ubuntu/_tags/latest.json
//! <root>/library/ubuntu/_tags/24.04.json
//! <root>/acme/api/_tags/v1.json
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use argus_core::Manifest;

use crate::error::RegistryError;
use crate::namespace::{Namespace, Repository};

const TAGS_DIR: &str = "_tags";

/// A read-only [`Namespace`] over a directory tree of manifest documents.
#[derive(Debug, Clone)]
pub struct FilesystemNamespace {
    root: PathBuf,
}

impl FilesystemNamespace {
    /// Creates a namespace rooted at the given directory.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl Namespace for FilesystemNamespace {
    async fn repository(&self, name: &str) -> Result<Box<dyn Repository>, RegistryError> {
        let tags_dir = self.root.join(name).join(TAGS_DIR);
        if !tags_dir.is_dir() {
            return Err(RegistryError::UnknownRepository {
                name: name.to_string(),
            });
        }

        Ok(Box::new(FilesystemRepository {
            name: name.to_string(),
            tags_dir,
        }))
    }

    async fn repositories(&self, limit: usize) -> Result<Vec<String>, RegistryError> {
        let mut names = Vec::new();
        for entry in walkdir::WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(|err| RegistryError::Enumeration {
                message: err.to_string(),
            })?;

            if entry.file_type().is_dir() && entry.file_name() == TAGS_DIR {
                if let Some(name) = repository_name(&self.root, entry.path()) {
                    names.push(name);
                    if names.len() == limit {
                        break;
                    }
                }
            }
        }
        Ok(names)
    }
}

/// Derives the repository name from a `_tags` directory path.
fn repository_name(root: &Path, tags_dir: &Path) -> Option<String> {
    let relative = tags_dir.parent()?.strip_prefix(root).ok()?;
    let name = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    (!name.is_empty()).then_some(name)
}

#[derive(Debug)]
struct FilesystemRepository {
    name: String,
    tags_dir: PathBuf,
}

#[async_trait]
impl Repository for FilesystemRepository {
    fn name(&self) -> &str {
        &self.name
    }

    async fn tags(&self) -> Result<Vec<String>, RegistryError> {
        let io_err = |source| RegistryError::Io {
            path: self.tags_dir.clone(),
            source,
        };

        let mut tags = Vec::new();
        for entry in std::fs::read_dir(&self.tags_dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem() {
                    tags.push(stem.to_string_lossy().into_owned());
                }
            }
        }
        tags.sort();
        Ok(tags)
    }

    async fn manifest(&self, tag: &str) -> Result<Manifest, RegistryError> {
        let path = self.tags_dir.join(format!("{tag}.json"));
        let raw = std::fs::read_to_string(&path).map_err(|source| RegistryError::Io {
            path: path.clone(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| RegistryError::MalformedManifest {
            repository: self.name.clone(),
            tag: tag.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_manifest(root: &Path, repository: &str, tag: &str, document: &str) {
        let dir = root.join(repository).join(TAGS_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(format!("{tag}.json")), document).unwrap();
    }

    const VALID_DOC: &str = r#"{
        "schemaVersion": 1,
        "fsLayers": [{"blobSum": "sha256:aaa"}],
        "history": [{"v1Compatibility": "{\"id\":\"root\"}"}]
    }"#;

    #[tokio::test]
    async fn test_discovers_nested_repository_names() {
        let dir = tempfile::tempdir().unwrap();
        write_manifest(dir.path(), "library/ubuntu", "latest", VALID_DOC);
        write_manifest(dir.path(), "acme/api", "v1", VALID_DOC);

        let namespace = FilesystemNamespace::new(dir.path());
        let names = namespace.repositories(100).await.unwrap();
        assert_eq!(
            names,
            vec!["acme/api".to_string(), "library/ubuntu".to_string()]
        );
    }

    #[tokio::test]
    async fn test_enumeration_respects_limit() {
        let dir = tempfile::tempdir().unwrap();
        write_manifest(dir.path(), "a", "v1", VALID_DOC);
        write_manifest(dir.path(), "b", "v1", VALID_DOC);
        write_manifest(dir.path(), "c", "v1", VALID_DOC);

        let namespace = FilesystemNamespace::new(dir.path());
        assert_eq!(namespace.repositories(2).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_lists_tags_and_fetches_manifest() {
        let dir = tempfile::tempdir().unwrap();
        write_manifest(dir.path(), "library/ubuntu", "latest", VALID_DOC);
        write_manifest(dir.path(), "library/ubuntu", "24.04", VALID_DOC);

        let namespace = FilesystemNamespace::new(dir.path());
        let repo = namespace.repository("library/ubuntu").await.unwrap();

        assert_eq!(
            repo.tags().await.unwrap(),
            vec!["24.04".to_string(), "latest".to_string()]
        );

        let manifest = repo.manifest("latest").await.unwrap();
        assert_eq!(manifest.fs_layers.len(), 1);
        assert_eq!(manifest.history.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_repository_errors() {
        let dir = tempfile::tempdir().unwrap();
        let namespace = FilesystemNamespace::new(dir.path());
        let err = namespace.repository("missing/repo").await.unwrap_err();
        assert!(matches!(err, RegistryError::UnknownRepository { .. }));
    }

    #[tokio::test]
    async fn test_malformed_document_errors() {
        let dir = tempfile::tempdir().unwrap();
        write_manifest(dir.path(), "acme/api", "bad", "not a manifest");

        let namespace = FilesystemNamespace::new(dir.path());
        let repo = namespace.repository("acme/api").await.unwrap();
        let err = repo.manifest("bad").await.unwrap_err();
        assert!(matches!(err, RegistryError::MalformedManifest { .. }));
    }
}
