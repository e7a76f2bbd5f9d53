//! Error types for the data-loader crate.
//!
//! Row-level problems never show up here: a malformed row is recorded in
//! the [`LoadReport`](crate::parser::LoadReport) and the load keeps going.
//! These variants cover the failures that stop a load before it starts.

use thiserror::Error;

/// Errors that can occur during data loading and parsing
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The delimited-text reader could not make sense of the input
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Field delimiters must be a single ASCII byte
    #[error("Invalid delimiter {0:?}: expected a single ASCII character")]
    InvalidDelimiter(char),

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
