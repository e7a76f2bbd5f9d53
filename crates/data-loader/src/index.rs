//! AwardIndex building logic.
//!
//! Turns a [`LoadReport`] into the in-memory store and keeps count of what
//! the loader dropped along the way.

use crate::error::Result;
use crate::parser::{self, LoadReport};
use crate::types::*;
use std::path::Path;

impl AwardIndex {
    /// Load an awards dataset file into a new index.
    ///
    /// Malformed rows are skipped (see [`AwardIndex::skipped_rows`]); only a
    /// file that cannot be opened is an error.
    pub fn load_from_file(path: &Path, delimiter: u8) -> Result<Self> {
        tracing::info!("Loading awards dataset from {:?}", path);

        let report = parser::parse_awards_file(path, delimiter)?;
        let index = Self::from_report(report);

        let (records, winners, producers) = index.counts();
        tracing::info!(
            "Loaded {} records ({} winners, {} winning producers), skipped {} rows",
            records,
            winners,
            producers,
            index.skipped_rows()
        );
        Ok(index)
    }

    /// Build an index from an already-parsed report
    pub fn from_report(report: LoadReport) -> Self {
        let mut index = Self::new();
        index.skipped_rows = report.skipped.len();
        for record in report.records {
            index.insert_record(record);
        }
        index
    }
}

impl FromIterator<AwardRecord> for AwardIndex {
    fn from_iter<I: IntoIterator<Item = AwardRecord>>(iter: I) -> Self {
        let mut index = Self::new();
        for record in iter {
            index.insert_record(record);
        }
        index
    }
}
