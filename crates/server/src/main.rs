//! HTTP entry point for the awards interval service.
//!
//! Loads the dataset once at startup and serves
//! `GET /movie/awards-result` until interrupted.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use server::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();
    info!("Starting awards server with {:?}", config);

    server::run(config).await
}
