//! Server crate for the awards interval service.
//!
//! This crate wires the record store, the aggregation and the HTTP layer
//! together:
//! - **store**: the `RecordStore` read contract, implemented by `AwardIndex`
//! - **service**: `AwardsService`, one store read + one aggregation per query
//! - **presenter**: the JSON response contract
//! - **routes**: the axum router exposing `GET /movie/awards-result`
//! - **config**: flags and environment variables

pub mod config;
pub mod error;
pub mod presenter;
pub mod routes;
pub mod service;
pub mod store;

pub use config::{DatasetArgs, ServerConfig};
pub use error::{ServiceError, StoreError};
pub use presenter::{AwardsResultResponse, YearFormat};
pub use routes::{router, AppState};
pub use service::AwardsService;
pub use store::RecordStore;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use data_loader::AwardIndex;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Load the dataset, falling back to an empty store if the file is unusable.
///
/// Startup never fails because of the data: malformed rows are skipped by
/// the parser, and a missing or unreadable file leaves the store empty.
pub fn load_index_best_effort(path: &Path, delimiter: u8) -> AwardIndex {
    match AwardIndex::load_from_file(path, delimiter) {
        Ok(index) => {
            if index.skipped_rows() > 0 {
                warn!(
                    "Skipped {} malformed rows in {:?} (run with RUST_LOG=debug for details)",
                    index.skipped_rows(),
                    path
                );
            }
            index
        }
        Err(e) => {
            warn!("Could not load dataset: {}. Starting with an empty store", e);
            AwardIndex::new()
        }
    }
}

/// Load the dataset and serve the HTTP API until Ctrl-C.
pub async fn run(config: ServerConfig) -> Result<()> {
    let delimiter = config
        .dataset
        .delimiter_byte()
        .context("Invalid dataset delimiter")?;

    let index = Arc::new(load_index_best_effort(&config.dataset.data_file, delimiter));
    let state = AppState {
        service: AwardsService::new(index),
        year_format: config.year_format,
    };

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
