//! Repository-name source resolution.
//!
//! A scan takes its repository list either from a newline-delimited file or
//! from live enumeration of the registry. The file always takes precedence;
//! enumeration is bounded by the configured ceiling and refuses to start a
//! scan that would only cover a truncated listing.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use argus_registry::Namespace;

use crate::config::ScanConfig;
use crate::error::ScanError;

/// Reads a newline-delimited repository list.
///
/// Blank lines are skipped. A leading `+` (legacy export marker with no
/// semantic effect) is stripped; the name is otherwise taken verbatim.
///
/// # Errors
///
/// Returns [`ScanError::RepositoryFile`] if the file cannot be opened or
/// read.
pub fn read_repository_file(path: &Path) -> Result<Vec<String>, ScanError> {
    let file_err = |source| ScanError::RepositoryFile {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(file_err)?;
    let mut names = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(file_err)?;
        let name = line.strip_prefix('+').unwrap_or(&line);
        if !name.is_empty() {
            names.push(name.to_string());
        }
    }
    Ok(names)
}

/// Resolves the repository list for a scan.
///
/// A supplied file takes precedence over live enumeration. An enumeration
/// that fills the ceiling is treated as overflow rather than a complete
/// listing.
///
/// # Errors
///
/// Returns [`ScanError::RepositoryFile`] for an unreadable list file,
/// [`ScanError::Enumerate`] when live enumeration fails, and
/// [`ScanError::TooManyRepositories`] on ceiling overflow. All are fatal to
/// the scan.
pub async fn resolve_repositories(
    namespace: &dyn Namespace,
    repos_file: Option<&Path>,
    config: &ScanConfig,
) -> Result<Vec<String>, ScanError> {
    if let Some(path) = repos_file {
        return read_repository_file(path);
    }

    let names = namespace
        .repositories(config.max_repositories)
        .await
        .map_err(|source| ScanError::Enumerate { source })?;

    if names.len() >= config.max_repositories {
        return Err(ScanError::TooManyRepositories {
            limit: config.max_repositories,
        });
    }

    Ok(names)
}
