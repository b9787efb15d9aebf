//! UMKM Forecast Server - sales tracking and revenue prediction API
//!
//! # Usage
//! ```sh
//! DATABASE_URL=sqlite://data/umkm.db PORT=8000 cargo run --bin server
//! ```
//!
//! # Environment Variables
//! - `HOST` / `PORT` - Bind address (default: 0.0.0.0:8000)
//! - `DATABASE_URL` - SQLite URL, or `memory`; unset runs without storage
//! - `DATABASE_NAME` - Name reported by `/test` (default: umkm)
//! - `DATABASE_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `RUST_LOG` - Log filter (default: info)

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::prelude::*;
use umkm_forecast::application::Application;
use umkm_forecast::config::Config;
use umkm_forecast::interfaces::router;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .with(stdout_layer)
        .init();

    info!("UMKM Forecast Server {} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: bind={}, storage={}",
        config.server.bind_address(),
        config.database.url.as_deref().unwrap_or("none")
    );

    let app = Application::build(config.clone()).await?;

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, router(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutdown complete.");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received. Exiting...");
    }
}
