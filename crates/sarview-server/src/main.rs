//! SARView Server
//!
//! Serves the Trunk-built SPA. Static files are embedded in the binary via
//! rust-embed; unknown paths fall back to `index.html` for client-side routing.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

mod assets;
mod config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let addr = config.addr;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("Server listening on {addr}");
    tracing::info!("  - SPA (embedded): http://{addr}/");
    tracing::info!("  - Historical:     http://{addr}/historical");

    axum::serve(listener, assets::router())
        .await
        .context("server error")?;

    Ok(())
}
