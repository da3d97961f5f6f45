//! The concurrent repository scan pipeline.
//!
//! Repository names flow through a shared FIFO channel drained by a fixed
//! pool of workers. Workers race for names, so findings from different
//! repositories may interleave in the sink; within one repository, tag
//! iteration and validation are sequential.

use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;
use tracing::{error, info};

use argus_core::validate_manifest;
use argus_registry::Namespace;

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::report::ReportSink;

/// Runs the scan over a resolved list of repository names.
///
/// Every name is visited exactly once by some worker. Per-repository
/// failures are logged and that repository is abandoned; they never abort
/// the scan. Returns once the queue is drained and every worker has exited.
pub async fn scan_repositories(
    namespace: Arc<dyn Namespace>,
    repositories: Vec<String>,
    sink: Arc<dyn ReportSink>,
    config: &ScanConfig,
) {
    let workers = config.workers.max(1);
    let (tx, rx) = mpsc::channel::<String>(workers);
    let rx = Arc::new(Mutex::new(rx));

    let mut pool = JoinSet::new();
    for _ in 0..workers {
        let rx = Arc::clone(&rx);
        let namespace = Arc::clone(&namespace);
        let sink = Arc::clone(&sink);
        pool.spawn(async move {
            loop {
                // The dequeue lock is released before the repository is
                // processed, so workers only serialize on claiming a name.
                let name = rx.lock().await.recv().await;
                let Some(name) = name else { break };

                if let Err(err) = scan_repository(namespace.as_ref(), &name, sink.as_ref()).await {
                    error!(repository = %name, "{err}");
                }
            }
        });
    }

    for name in repositories {
        // Send only fails once every receiver is gone, and workers hold the
        // receiver until the channel closes.
        if tx.send(name).await.is_err() {
            break;
        }
    }
    drop(tx);

    while pool.join_next().await.is_some() {}
}

/// Scans one repository: opens it, lists its tags, validates every manifest.
///
/// # Errors
///
/// Open and tag-list failures abandon the repository; a manifest fetch
/// failure abandons the repository's remaining tags. Errors are returned to
/// the caller for logging, never escalated past it.
async fn scan_repository(
    namespace: &dyn Namespace,
    name: &str,
    sink: &dyn ReportSink,
) -> Result<(), ScanError> {
    let repository = namespace
        .repository(name)
        .await
        .map_err(|source| ScanError::OpenRepository {
            name: name.to_string(),
            source,
        })?;

    let tags = repository
        .tags()
        .await
        .map_err(|source| ScanError::ListTags {
            name: name.to_string(),
            source,
        })?;

    info!(repository = %name, tags = tags.len(), "checking repository");

    for tag in &tags {
        let manifest = repository
            .manifest(tag)
            .await
            .map_err(|source| ScanError::GetManifest {
                name: name.to_string(),
                tag: tag.clone(),
                source,
            })?;

        for finding in validate_manifest(name, &manifest) {
            sink.report(&finding);
        }
    }

    Ok(())
}
