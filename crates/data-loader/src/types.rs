//! Core domain types for the Golden Raspberry awards dataset.
//!
//! This module defines the record type produced by the loader and the
//! in-memory [`AwardIndex`] that serves it back to the rest of the system.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

// =============================================================================
// Type Aliases
// =============================================================================

/// Release/ceremony year of a nomination
pub type Year = u16;

// =============================================================================
// Award Records
// =============================================================================

/// One nomination row: one film in one year.
///
/// `producer` is the raw producers column. Datasets often join co-producers
/// into one field ("Allan Carr and Jerry Weintraub"); that whole string is
/// the producer identity, it is never split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardRecord {
    pub year: Year,
    pub title: String,
    pub studios: String,
    pub producer: String,
    pub winner: bool,
}

impl AwardRecord {
    /// Shorthand for a winning record with empty title and studios.
    pub fn winner(producer: impl Into<String>, year: Year) -> Self {
        Self {
            year,
            title: String::new(),
            studios: String::new(),
            producer: producer.into(),
            winner: true,
        }
    }

    /// Shorthand for a non-winning nomination.
    pub fn nominee(producer: impl Into<String>, year: Year) -> Self {
        Self {
            winner: false,
            ..Self::winner(producer, year)
        }
    }
}

// =============================================================================
// AwardIndex - The In-Memory Record Store
// =============================================================================

/// Holds every loaded record plus a year-ordered index of the winners.
///
/// Records are immutable once inserted; the index only ever grows during
/// loading and is read-only afterwards, so it can be shared behind an `Arc`.
#[derive(Debug, Default)]
pub struct AwardIndex {
    pub(crate) records: Vec<AwardRecord>,

    /// Positions into `records` of winning rows, grouped by year (sorted).
    /// Within a year positions stay in insertion order.
    pub(crate) winners_by_year: BTreeMap<Year, Vec<usize>>,

    /// Number of wins per producer key
    pub(crate) producer_wins: HashMap<String, usize>,

    /// Rows the loader had to skip
    pub(crate) skipped_rows: usize,
}

impl AwardIndex {
    /// Creates a new, empty AwardIndex
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record and update the winner indices
    pub fn insert_record(&mut self, record: AwardRecord) {
        let position = self.records.len();
        if record.winner {
            self.winners_by_year
                .entry(record.year)
                .or_insert_with(Vec::new)
                .push(position);

            *self
                .producer_wins
                .entry(record.producer.clone())
                .or_insert(0) += 1;
        }
        self.records.push(record);
    }

    /// All records, winners and nominees, in load order
    pub fn records(&self) -> &[AwardRecord] {
        &self.records
    }

    /// All winning records ordered by year.
    ///
    /// Records sharing a year come back in the order they were inserted.
    pub fn winning_records(&self) -> Vec<AwardRecord> {
        self.winners_by_year
            .values()
            .flatten()
            .map(|&position| self.records[position].clone())
            .collect()
    }

    /// Number of wins recorded for a producer key (0 if unknown)
    pub fn producer_win_count(&self, producer: &str) -> usize {
        self.producer_wins.get(producer).copied().unwrap_or(0)
    }

    /// Number of rows the loader skipped as malformed
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    /// Get counts for debugging/validation: (records, winners, winning producers)
    pub fn counts(&self) -> (usize, usize, usize) {
        let winners = self.winners_by_year.values().map(|v| v.len()).sum();
        (self.records.len(), winners, self.producer_wins.len())
    }
}
