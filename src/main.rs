//! Cadastro Server - Main entry point
//!
//! Starts the HTTP service that registers customers and their contacts.

use anyhow::Result;
use cadastro_server::server::{self, AppState};
use cadastro_server::Config;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can drive the filter
    let config = Config::from_env();

    let level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let state = AppState::in_memory()?;

    if config.seed_demo {
        server::seed_demo(&state).await;
    }

    info!("Starting Cadastro server on {}", config.bind_addr);
    server::run_server(&config, state).await?;

    info!("Cadastro server shutdown complete");
    Ok(())
}
