//! # Argus Scanner
//!
//! Concurrent repository scan pipeline for the Argus manifest auditor.
//!
//! The pipeline resolves a repository-name list (from a supplied file or by
//! enumerating the registry), pushes every name through a shared FIFO queue
//! drained by a fixed pool of workers, and routes each fetched manifest
//! through the validator in `argus-core`. Findings land in a [`ReportSink`];
//! per-repository failures are logged and skipped, never fatal.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use argus_registry::InMemoryNamespace;
//! use argus_scanner::{scan_repositories, ScanConfig, StdoutSink};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let namespace = Arc::new(InMemoryNamespace::new());
//! let config = ScanConfig::default();
//!
//! scan_repositories(
//!     namespace,
//!     vec!["library/ubuntu".to_string()],
//!     Arc::new(StdoutSink),
//!     &config,
//! )
//! .await;
//! # }
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod config;
mod coordinator;
mod error;
mod report;
mod source;

pub use config::{ScanConfig, ScanConfigBuilder};
pub use coordinator::scan_repositories;
pub use error::ScanError;
pub use report::{MemorySink, ReportSink, StdoutSink};
pub use source::{read_repository_file, resolve_repositories};
