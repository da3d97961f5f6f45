//! # Argus Registry
//!
//! Registry namespace abstraction and storage drivers for the Argus
//! manifest auditor.
//!
//! The scan pipeline only ever talks to a registry through the [`Namespace`]
//! and [`Repository`] traits: list repositories, open one, list its tags,
//! fetch a manifest by tag. Which concrete driver sits behind that seam is
//! decided by a storage configuration file and the [`factory`] module.
//!
//! Two drivers ship with this crate:
//!
//! - `inmemory` — process-memory namespace for tests and local development
//! - `filesystem` — read-only namespace over a local audit tree of manifest
//!   documents
//!
//! Full registry storage backends (blob stores, caches, the registry wire
//! protocol) are deliberately not implemented here; an unknown driver name
//! in the configuration is a fatal setup error.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use argus_registry::{factory, Config};
//!
//! # fn main() -> Result<(), argus_registry::RegistryError> {
//! let config = Config::from_file("config.yml")?;
//! let namespace = factory::create(&config)?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod config;
mod error;
pub mod factory;
mod filesystem;
mod inmemory;
mod namespace;

pub use config::{Config, Parameters, Storage};
pub use error::RegistryError;
pub use filesystem::FilesystemNamespace;
pub use inmemory::InMemoryNamespace;
pub use namespace::{Namespace, Repository};
