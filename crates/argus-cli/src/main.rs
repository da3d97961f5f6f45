//! Argus - manifest integrity auditor for container image registries.
//!
//! Walks every repository and tag reachable through the configured storage
//! driver, validates each manifest's embedded image history, and prints
//! findings to standard output. Diagnostics and per-repository errors go to
//! standard error; only setup failures abort the process.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use argus_registry::{factory, Config};
use argus_scanner::{resolve_repositories, scan_repositories, ScanConfig, StdoutSink};

/// Audits container image repositories for manifest integrity.
#[derive(Parser)]
#[command(name = "argus")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the registry storage configuration file
    #[arg(short, long, env = "ARGUS_CONFIG")]
    config: PathBuf,

    /// Newline-delimited file of repository names to audit instead of
    /// enumerating the registry
    #[arg(short, long)]
    repos: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; diagnostics belong on stderr so findings on
    // stdout stay machine-separable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "argus_cli=info,argus_scanner=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    run(&cli).await
}

async fn run(cli: &Cli) -> Result<()> {
    let config = Config::from_file(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;

    let namespace = factory::create(&config).context("Failed to construct storage driver")?;

    let scan_config = ScanConfig::default();
    let repositories = resolve_repositories(namespace.as_ref(), cli.repos.as_deref(), &scan_config)
        .await
        .context("Failed to resolve repository list")?;

    info!(
        repositories = repositories.len(),
        workers = scan_config.workers,
        "starting scan"
    );

    scan_repositories(namespace, repositories, Arc::new(StdoutSink), &scan_config).await;

    Ok(())
}
