//! Error types for the awards service.

use thiserror::Error;

/// Failures of a [`RecordStore`](crate::store::RecordStore) read
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing store could not be reached or read
    #[error("Record store unavailable: {0}")]
    Unavailable(String),
}

/// Failures while answering an awards query
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Failed to read winning records: {0}")]
    Store(#[from] StoreError),

    /// The blocking aggregation task panicked or was cancelled
    #[error("Aggregation task failed: {0}")]
    Aggregation(#[from] tokio::task::JoinError),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
