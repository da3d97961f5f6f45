//! Schema1-style image manifest types.
//!
//! These types speak the wire names of the schema1 manifest format
//! (`fsLayers`, `blobSum`, `v1Compatibility`) so stored manifest documents
//! deserialize directly.

use serde::{Deserialize, Serialize};

/// Reference to one filesystem layer blob within a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FsLayer {
    /// Content-addressable digest of the layer blob.
    pub blob_sum: String,
}

impl FsLayer {
    /// Creates a layer reference with the given blob digest.
    #[must_use]
    pub fn new(blob_sum: impl Into<String>) -> Self {
        Self {
            blob_sum: blob_sum.into(),
        }
    }
}

/// One historical build-step record.
///
/// The compatibility payload is an opaque JSON document describing the image
/// produced by that build step; the validator decodes only the ancestry
/// fields out of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Raw compatibility JSON for the image at this position.
    pub v1_compatibility: String,
}

impl HistoryEntry {
    /// Creates a history entry wrapping the given compatibility JSON.
    #[must_use]
    pub fn new(v1_compatibility: impl Into<String>) -> Self {
        Self {
            v1_compatibility: v1_compatibility.into(),
        }
    }
}

/// A schema1 image manifest: a layer stack plus index-aligned build history.
///
/// A well-formed manifest carries at least one layer and exactly one history
/// entry per layer; [`crate::validate_manifest`] reports violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Schema version (1 for this manifest format).
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Repository name recorded in the manifest, if any.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Tag recorded in the manifest, if any.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tag: String,

    /// Layer references, most recent first.
    #[serde(default)]
    pub fs_layers: Vec<FsLayer>,

    /// Build history, index-aligned with `fs_layers`.
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

const fn default_schema_version() -> u32 {
    1
}

impl Manifest {
    /// Creates a manifest from a layer stack and its build history.
    ///
    /// # Examples
    ///
    /// ```
    /// use argus_core::{FsLayer, HistoryEntry, Manifest};
    ///
    /// let manifest = Manifest::new(
    ///     vec![FsLayer::new("sha256:abc")],
    ///     vec![HistoryEntry::new(r#"{"id":"root"}"#)],
    /// );
    /// assert_eq!(manifest.schema_version, 1);
    /// ```
    #[must_use]
    pub const fn new(fs_layers: Vec<FsLayer>, history: Vec<HistoryEntry>) -> Self {
        Self {
            schema_version: 1,
            name: String::new(),
            tag: String::new(),
            fs_layers,
            history,
        }
    }

    /// Sets the repository name recorded in the manifest.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the tag recorded in the manifest.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }
}
