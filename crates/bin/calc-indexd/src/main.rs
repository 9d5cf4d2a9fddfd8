//! Daemon entry point for the calculator directory.
//!
//! Loads configuration from the command line and environment, checks the tool
//! catalog, and serves the rendered index over HTTP.

mod config;

use calc_core::ToolCatalog;
use calc_web::{IndexServer, IndexServerConfig};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::IndexConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = IndexConfig::from_args()?;
    init_logging(&config.log_filter)?;

    let catalog = ToolCatalog::default();
    catalog.validate()?;
    info!(tools = catalog.len(), "tool catalog loaded");

    let server_config = IndexServerConfig::new(config.addr).with_api_enabled(config.api_enabled);
    IndexServer::new(catalog, server_config).serve().await
}

fn init_logging(default_filter: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let format = fmt::format().with_target(true).compact();

    // RUST_LOG wins over the configured filter when set.
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;

    tracing_subscriber::registry()
        .with(fmt::layer().event_format(format))
        .with(filter)
        .try_init()?;
    Ok(())
}
