//! Shipyard API binary.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `shipyard-config.yaml` (defaults if absent)
//! 2. Initialize structured logging (tracing)
//! 3. Build shared state from the configured rules and catalog
//! 4. Serve HTTP until `Ctrl-C`

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use shipyard_api::config::{LogFormat, LoggingConfig};
use shipyard_api::{AppState, ShipyardConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

const CONFIG_PATH: &str = "shipyard-config.yaml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration.
    let config = ShipyardConfig::load_or_default(Path::new(CONFIG_PATH))
        .with_context(|| format!("loading {CONFIG_PATH}"))?;

    // 2. Initialize structured logging.
    init_tracing(&config.logging);
    info!(
        host = config.server.host,
        port = config.server.port,
        max_takeoff_mass = config.rules.max_takeoff_mass,
        wings = config.catalog.wings.len(),
        weapons = config.catalog.weapons.len(),
        "Configuration loaded"
    );

    // 3. Build shared state.
    let state = Arc::new(AppState::from_config(&config));

    // 4. Serve.
    shipyard_api::start_server(&config.server, state)
        .await
        .context("running HTTP server")?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    match logging.format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
