//! ROI engine HTTP server
//!
//! Serves the ROI calculator API for the marketing site.
//!
//! Environment:
//! - `ROI_CONFIG_DIR` - configuration directory (default `./config/standard`)
//! - `ROI_BIND_ADDR` - listen address (default `127.0.0.1:3000`)
//! - `RUST_LOG` - tracing filter (default `info`)

use std::path::Path;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use va_roi_engine::api::{AppState, create_router};
use va_roi_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/standard";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir = std::env::var("ROI_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let config = load_config(&config_dir)?;

    let bind_addr = std::env::var("ROI_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!(addr = %bind_addr, "ROI engine listening");

    axum::serve(listener, create_router(AppState::new(config)))
        .await
        .context("server error")?;

    Ok(())
}

/// Loads configuration from `dir`, falling back to the standard values when
/// the directory does not exist. A directory that exists but is broken is an
/// error.
fn load_config(dir: &str) -> anyhow::Result<ConfigLoader> {
    if !Path::new(dir).exists() {
        tracing::warn!(dir = %dir, "Config directory not found - using standard assumptions");
        return Ok(ConfigLoader::standard());
    }

    let config = ConfigLoader::load(dir)
        .with_context(|| format!("failed to load configuration from {}", dir))?;
    tracing::info!(dir = %dir, "Loaded calculator configuration");
    Ok(config)
}
