//! # Data Loader Crate
//!
//! This crate handles loading the Golden Raspberry awards dataset and
//! holding it in memory.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (AwardRecord, AwardIndex)
//! - **parser**: Parse the delimited dataset into records, best-effort
//! - **index**: Build the AwardIndex from a parsed dataset
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{AwardIndex, DEFAULT_DELIMITER};
//! use std::path::Path;
//!
//! let index = AwardIndex::load_from_file(Path::new("data/movielist.csv"), DEFAULT_DELIMITER)?;
//! let winners = index.winning_records();
//!
//! println!("{} winning films, {} rows skipped", winners.len(), index.skipped_rows());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use parser::{
    DEFAULT_DELIMITER,
    LoadReport,
    SkippedRow,
    parse_awards,
    parse_awards_file,
    parse_delimiter,
};
pub use types::{
    // Type aliases
    Year,
    // Core types
    AwardRecord,
    AwardIndex,
};
