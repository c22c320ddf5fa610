// Investor Pages - Web Server entry point

use anyhow::{bail, Context, Result};
use clap::Parser;
use investor_pages::server::{serve, AppState};
use investor_pages::telemetry::{default_level, init_tracing, LogTarget};
use investor_pages::{load_registry, PagesConfig};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "investor-server", version, about = "Serve the investor pages over HTTP")]
struct Args {
    /// Configuration file (defaults to ./investor-pages.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override
    #[arg(short, long)]
    port: Option<u16>,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(default_level(args.quiet, args.verbose), LogTarget::Stderr)?;

    let mut config = PagesConfig::load_from(args.config.as_deref()).context("failed to load configuration")?;
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let registry = load_registry(&config).context("failed to load site content")?;
    if !registry.contains(&config.default_site) {
        bail!(
            "default site '{}' is not registered (available: {})",
            config.default_site,
            registry.slugs().join(", ")
        );
    }

    info!(sites = ?registry.slugs(), default = %config.default_site, "sites loaded");

    let state = AppState::new(registry, &config.default_site);
    serve(state, &config.server.address()).await
}
