//! Advisory diagnostics emitted by the manifest validator.

use std::fmt;

/// An advisory diagnostic about manifest malformation.
///
/// Findings are not errors: they describe content anomalies in a manifest
/// and never interrupt a scan, no matter how many accumulate. A finding is
/// purely human-readable text tagged with the repository it came from.
///
/// # Examples
///
/// ```
/// use argus_core::Finding;
///
/// let finding = Finding::new("library/ubuntu", "no layers present");
/// assert_eq!(finding.to_string(), "library/ubuntu: no layers present");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Repository the manifest belongs to.
    pub repository: String,

    /// Human-readable description of the anomaly.
    pub message: String,
}

impl Finding {
    /// Creates a finding for the given repository.
    #[must_use]
    pub fn new(repository: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.repository, self.message)
    }
}
