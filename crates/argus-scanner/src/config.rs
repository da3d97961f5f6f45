//! Scan pipeline configuration.

/// Configuration for the scan coordinator.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Number of parallel scan workers draining the repository queue.
    pub workers: usize,

    /// Hard ceiling on the number of repositories a scan will accept.
    ///
    /// Live enumeration that fills this ceiling is treated as overflow: the
    /// real repository count is assumed larger than the scan can safely
    /// handle, and the scan refuses to start.
    pub max_repositories: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            workers: 30,
            max_repositories: 500_000,
        }
    }
}

impl ScanConfig {
    /// Creates a configuration builder.
    #[must_use]
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }
}

/// Builder for [`ScanConfig`].
#[derive(Debug, Default)]
pub struct ScanConfigBuilder {
    workers: Option<usize>,
    max_repositories: Option<usize>,
}

impl ScanConfigBuilder {
    /// Sets the worker pool width.
    #[must_use]
    pub const fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Sets the repository ceiling.
    #[must_use]
    pub const fn max_repositories(mut self, max_repositories: usize) -> Self {
        self.max_repositories = Some(max_repositories);
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> ScanConfig {
        let defaults = ScanConfig::default();
        ScanConfig {
            workers: self.workers.unwrap_or(defaults.workers).max(1),
            max_repositories: self
                .max_repositories
                .unwrap_or(defaults.max_repositories),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScanConfig::default();
        assert_eq!(config.workers, 30);
        assert_eq!(config.max_repositories, 500_000);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ScanConfig::builder()
            .workers(4)
            .max_repositories(10)
            .build();
        assert_eq!(config.workers, 4);
        assert_eq!(config.max_repositories, 10);
    }

    #[test]
    fn test_builder_clamps_zero_workers() {
        let config = ScanConfig::builder().workers(0).build();
        assert_eq!(config.workers, 1);
    }
}
