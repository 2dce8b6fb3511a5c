//! HTTP server for the Timecard Engine.
//!
//! Environment:
//! - `TIMECARD_CONFIG_DIR`: directory holding `engine.yaml` (default `./config`)
//! - `TIMECARD_BIND_ADDR`: listen address (default `0.0.0.0:8080`)
//! - `RUST_LOG`: tracing filter (default `info`)

use std::env;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use timecard_engine::api::{AppState, create_router};
use timecard_engine::config::ConfigLoader;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir = env::var("TIMECARD_CONFIG_DIR").unwrap_or_else(|_| "./config".to_string());
    let bind_addr = env::var("TIMECARD_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let config = match ConfigLoader::load(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, config_dir = %config_dir, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(error = %err, bind_addr = %bind_addr, "Failed to bind listener");
            std::process::exit(1);
        }
    };

    info!(bind_addr = %bind_addr, "Timecard engine listening");
    if let Err(err) = axum::serve(listener, create_router(AppState::new(config))).await {
        error!(error = %err, "Server terminated");
        std::process::exit(1);
    }
}
