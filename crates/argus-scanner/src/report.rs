//! Finding sinks.
//!
//! The coordinator never writes findings directly; it hands them to a
//! [`ReportSink`] shared across all workers. The stdout sink is what the
//! binary uses; the memory sink exists so tests can assert on reported
//! findings without scraping process output.

use std::fmt::Debug;
use std::io::Write;
use std::sync::Mutex;

use argus_core::Finding;

/// Destination for validator findings.
///
/// Shared across all scan workers, so implementations must tolerate
/// concurrent reporting. Each finding must land as one complete output line;
/// no ordering across workers is required.
pub trait ReportSink: Send + Sync + Debug {
    /// Reports a single finding.
    fn report(&self, finding: &Finding);
}

/// Writes findings to standard output, one line per finding.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn report(&self, finding: &Finding) {
        // One locked writeln per finding keeps lines whole across workers.
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        let _ = writeln!(handle, "{finding}");
    }
}

/// Collects findings in memory.
///
/// Test support: lets assertions run against exactly what the pipeline
/// reported.
#[derive(Debug, Default)]
pub struct MemorySink {
    findings: Mutex<Vec<Finding>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything reported so far.
    ///
    /// # Panics
    ///
    /// Panics if a previous reporter panicked while holding the lock.
    #[must_use]
    pub fn findings(&self) -> Vec<Finding> {
        self.findings.lock().expect("finding sink poisoned").clone()
    }
}

impl ReportSink for MemorySink {
    fn report(&self, finding: &Finding) {
        self.findings
            .lock()
            .expect("finding sink poisoned")
            .push(finding.clone());
    }
}
