//! # Argus Core
//!
//! Manifest data model and integrity validator for the Argus registry
//! auditor.
//!
//! This crate holds the two pieces of Argus that are pure computation: the
//! schema1-style manifest types and the validator that checks a manifest's
//! embedded image history for a well-formed ancestor chain. There is no I/O
//! and no concurrency here; anomalies surface as advisory [`Finding`] values,
//! never as errors.
//!
//! ## Quick Start
//!
//! ```rust
//! use argus_core::{validate_manifest, FsLayer, HistoryEntry, Manifest};
//!
//! let manifest = Manifest::new(
//!     vec![FsLayer::new("sha256:aaa")],
//!     vec![HistoryEntry::new(r#"{"id":"root"}"#)],
//! );
//!
//! let findings = validate_manifest("library/ubuntu", &manifest);
//! assert!(findings.is_empty());
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod finding;
mod manifest;
mod validator;

pub use finding::Finding;
pub use manifest::{FsLayer, HistoryEntry, Manifest};
pub use validator::validate_manifest;
