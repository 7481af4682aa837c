//! GrubDash API server
//!
//! Reads configuration from `GRUBDASH_CONFIG` (YAML) and `GRUBDASH_PORT`,
//! seeds the in-memory stores and serves until Ctrl+C or SIGTERM.

use anyhow::{Context, Result};
use grubdash::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env().context("failed to load configuration")?;

    // Initialize tracing; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log level")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let module = RestaurantModule::in_memory();
    SeedData::load(config.seed_file.as_deref())?
        .apply(module.dishes.as_ref(), module.orders.as_ref())
        .await?;

    tracing::info!(
        module = module.name(),
        version = module.version(),
        "starting service"
    );

    ServerBuilder::new()
        .register_module(module)
        .serve(&config.bind_address())
        .await
}
