//! Integration tests for the scan coordinator.
//!
//! These exercise the worker pool end to end against in-memory registry
//! doubles: full visitation under per-repository failures, tag-abort
//! semantics, and finding delivery to the sink.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use argus_core::{FsLayer, HistoryEntry, Manifest};
use argus_registry::{InMemoryNamespace, Namespace, RegistryError, Repository};
use argus_scanner::{scan_repositories, MemorySink, ScanConfig};

fn valid_manifest() -> Manifest {
    Manifest::new(
        vec![FsLayer::new("sha256:aaa")],
        vec![HistoryEntry::new(r#"{"id":"root"}"#)],
    )
}

/// A manifest that yields exactly one finding ("no layers present").
fn empty_manifest() -> Manifest {
    Manifest::new(vec![], vec![])
}

/// Counts repository opens and fails one configured name.
#[derive(Debug)]
struct FlakyNamespace {
    inner: InMemoryNamespace,
    fail_open: String,
    opens: AtomicUsize,
}

#[async_trait]
impl Namespace for FlakyNamespace {
    async fn repository(&self, name: &str) -> Result<Box<dyn Repository>, RegistryError> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        if name == self.fail_open {
            return Err(RegistryError::UnknownRepository {
                name: name.to_string(),
            });
        }
        self.inner.repository(name).await
    }

    async fn repositories(&self, limit: usize) -> Result<Vec<String>, RegistryError> {
        self.inner.repositories(limit).await
    }
}

// =============================================================================
// Worker Pool Tests
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_scan_visits_all_repositories_despite_one_failure() {
    let inner = InMemoryNamespace::new();
    let names: Vec<String> = (0..100).map(|i| format!("acme/repo-{i:03}")).collect();
    for name in &names {
        // Every repository carries one manifest that produces exactly one
        // finding, so the sink doubles as a visitation record.
        inner.put_manifest(name, "v1", empty_manifest()).await;
    }

    let namespace = Arc::new(FlakyNamespace {
        inner,
        fail_open: "acme/repo-042".to_string(),
        opens: AtomicUsize::new(0),
    });
    let sink = Arc::new(MemorySink::new());
    let config = ScanConfig::default();

    let dyn_namespace: Arc<dyn Namespace> = namespace.clone();
    scan_repositories(dyn_namespace, names.clone(), sink.clone(), &config).await;

    // Every name was claimed by some worker, including the failing one.
    assert_eq!(namespace.opens.load(Ordering::SeqCst), 100);

    // The failing repository was skipped; all 99 others were validated.
    let findings = sink.findings();
    assert_eq!(findings.len(), 99);
    let mut scanned: Vec<&str> = findings.iter().map(|f| f.repository.as_str()).collect();
    scanned.sort_unstable();
    scanned.dedup();
    assert_eq!(scanned.len(), 99);
    assert!(!scanned.contains(&"acme/repo-042"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_scan_with_small_pool_drains_queue() {
    let inner = InMemoryNamespace::new();
    let names: Vec<String> = (0..20).map(|i| format!("acme/repo-{i:02}")).collect();
    for name in &names {
        inner.put_manifest(name, "v1", empty_manifest()).await;
    }

    let sink = Arc::new(MemorySink::new());
    let config = ScanConfig::builder().workers(3).build();
    scan_repositories(Arc::new(inner), names, sink.clone(), &config).await;

    assert_eq!(sink.findings().len(), 20);
}

// =============================================================================
// Per-Repository Semantics
// =============================================================================

/// Repository whose manifest fetch fails for one tag.
#[derive(Debug)]
struct BrokenTagRepository;

#[async_trait]
impl Repository for BrokenTagRepository {
    fn name(&self) -> &str {
        "acme/broken"
    }

    async fn tags(&self) -> Result<Vec<String>, RegistryError> {
        Ok(vec![
            "1-first".to_string(),
            "2-broken".to_string(),
            "3-after".to_string(),
        ])
    }

    async fn manifest(&self, tag: &str) -> Result<Manifest, RegistryError> {
        if tag == "2-broken" {
            return Err(RegistryError::UnknownManifest {
                repository: "acme/broken".to_string(),
                tag: tag.to_string(),
            });
        }
        Ok(empty_manifest())
    }
}

#[derive(Debug)]
struct BrokenTagNamespace;

#[async_trait]
impl Namespace for BrokenTagNamespace {
    async fn repository(&self, _name: &str) -> Result<Box<dyn Repository>, RegistryError> {
        Ok(Box::new(BrokenTagRepository))
    }

    async fn repositories(&self, _limit: usize) -> Result<Vec<String>, RegistryError> {
        Ok(vec!["acme/broken".to_string()])
    }
}

#[tokio::test]
async fn test_manifest_fetch_failure_skips_remaining_tags() {
    let sink = Arc::new(MemorySink::new());
    let config = ScanConfig::builder().workers(1).build();

    scan_repositories(
        Arc::new(BrokenTagNamespace),
        vec!["acme/broken".to_string()],
        sink.clone(),
        &config,
    )
    .await;

    // Only the tag before the broken one was validated; the tag after it
    // was never fetched.
    let findings = sink.findings();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].repository, "acme/broken");
}

// =============================================================================
// Finding Delivery
// =============================================================================

#[tokio::test]
async fn test_findings_carry_repository_and_message() {
    let namespace = InMemoryNamespace::new();
    namespace
        .put_manifest("library/scratch", "empty", empty_manifest())
        .await;
    namespace
        .put_manifest("library/ok", "good", valid_manifest())
        .await;

    let sink = Arc::new(MemorySink::new());
    let config = ScanConfig::builder().workers(2).build();
    scan_repositories(
        Arc::new(namespace),
        vec!["library/scratch".to_string(), "library/ok".to_string()],
        sink.clone(),
        &config,
    )
    .await;

    let findings = sink.findings();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].repository, "library/scratch");
    assert_eq!(findings[0].message, "no layers present");
    assert_eq!(
        findings[0].to_string(),
        "library/scratch: no layers present"
    );
}
