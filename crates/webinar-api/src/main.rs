//! Webinar API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p webinar-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env` if present).

use tracing::{error, info};
use webinar_common::{init_tracing, AppConfig, TracingConfig};

#[tokio::main]
async fn main() {
    // Configuration decides the log format, so it is loaded before tracing
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_tracing(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {}", e);
    }

    if let Err(e) = run(config).await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        name = %config.app.name,
        env = ?config.app.env,
        port = config.api.port,
        storage = ?config.storage,
        "Starting Webinar API Server..."
    );

    webinar_api::run(config).await?;

    Ok(())
}
