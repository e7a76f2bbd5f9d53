//! Producer-interval aggregation for the awards dataset.
//!
//! This crate provides:
//! - ProducerGroups for partitioning winners by producer
//! - Consecutive-win interval derivation
//! - Global minimum/maximum selection into an AwardsSummary
//!
//! ## Architecture
//! The aggregation runs in stages over an already-loaded record set:
//! 1. Grouping keeps winners only and buckets them by raw producer string
//! 2. Producers with fewer than two wins are dropped, the rest sorted by year
//! 3. Each adjacent pair of wins becomes an IntervalResult
//! 4. The shortest and longest intervals (with ties) form the summary
//!
//! Everything is pure: no state survives between calls.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::compute_awards_summary;
//!
//! let winners = index.winning_records();
//! let summary = compute_awards_summary(&winners);
//!
//! for result in &summary.min {
//!     println!("{} won in {} and {}", result.producer, result.previous_win, result.following_win);
//! }
//! ```

pub mod grouping;
pub mod intervals;
pub mod summary;

// Re-export main types
pub use grouping::{ProducerGroup, ProducerGroups};
pub use intervals::{derive_intervals, IntervalResult};
pub use summary::{compute_awards_summary, select_extremes, AwardsSummary};
