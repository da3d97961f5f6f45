//! Manifest integrity checks.
//!
//! The validator inspects a single manifest for three classes of anomaly:
//! an empty layer stack, a layer/history length mismatch, and broken parent
//! links in the embedded image history. History is ordered child before
//! parent, so every non-root image must find its parent's ID at or after its
//! own position.
//!
//! Validation is total: malformed content, including history entries whose
//! compatibility blob does not decode, produces findings and the walk keeps
//! going.

use serde::Deserialize;

use crate::finding::Finding;
use crate::manifest::Manifest;

/// Image record decoded from a history entry's compatibility blob.
///
/// Only the ancestry fields matter to the validator; everything else in the
/// blob is ignored.
#[derive(Debug, Default, Deserialize)]
struct Image {
    #[serde(default)]
    id: String,
    #[serde(default)]
    parent: String,
}

/// Validates the internal consistency of a manifest.
///
/// Returns zero or more findings in manifest order: the layer/history shape
/// checks first, then per-entry decode findings, then parent-link findings
/// in position order. Never fails; an undecodable entry contributes an
/// empty-field image so the ancestry walk stays index-aligned.
///
/// An image's parent must appear at or after the image's own position. The
/// last entry can therefore never satisfy a non-empty parent link: there is
/// nothing after it to serve as its ancestor.
///
/// # Examples
///
/// ```
/// use argus_core::{validate_manifest, FsLayer, HistoryEntry, Manifest};
///
/// let manifest = Manifest::new(vec![], vec![]);
/// let findings = validate_manifest("library/scratch", &manifest);
/// assert_eq!(findings[0].message, "no layers present");
/// ```
#[must_use]
pub fn validate_manifest(repo_name: &str, manifest: &Manifest) -> Vec<Finding> {
    let mut findings = Vec::new();

    if manifest.fs_layers.is_empty() || manifest.history.is_empty() {
        findings.push(Finding::new(repo_name, "no layers present"));
    }

    if manifest.fs_layers.len() != manifest.history.len() {
        findings.push(Finding::new(repo_name, "mismatched layers and history"));
    }

    // Decode every entry up front; a malformed one still occupies its
    // position so the walk below stays aligned with the manifest.
    let mut images = Vec::with_capacity(manifest.history.len());
    for entry in &manifest.history {
        let image = match serde_json::from_str::<Image>(&entry.v1_compatibility) {
            Ok(image) => image,
            Err(err) => {
                findings.push(Finding::new(
                    repo_name,
                    format!("json unmarshal error: {err}"),
                ));
                Image::default()
            }
        };
        images.push(image);
    }

    // Each non-root image must find its parent at or below its own position.
    for (i, image) in images.iter().enumerate() {
        if image.parent.is_empty() {
            continue;
        }

        let mut last_id = "";
        for candidate in &images[i..] {
            last_id = &candidate.id;
            if image.parent == last_id {
                break;
            }
        }

        if image.parent != last_id {
            findings.push(Finding::new(
                repo_name,
                format!("parent not below in manifest (parent ID {})", image.parent),
            ));
        }
    }

    findings
}
