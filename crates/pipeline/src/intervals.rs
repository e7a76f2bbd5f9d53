//! Consecutive-win intervals.
//!
//! A producer with wins `w0 < w1 < ... < wn` yields one interval per
//! adjacent pair, never one spanning the whole career.

use crate::grouping::ProducerGroup;
use data_loader::Year;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Gap between two successive wins of the same producer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntervalResult {
    pub producer: String,
    pub interval: u16,
    pub previous_win: Year,
    pub following_win: Year,
}

impl IntervalResult {
    pub fn new(producer: impl Into<String>, previous_win: Year, following_win: Year) -> Self {
        Self {
            producer: producer.into(),
            interval: following_win.saturating_sub(previous_win),
            previous_win,
            following_win,
        }
    }
}

/// Intervals for one year-sorted group, in chronological order.
pub fn consecutive_intervals(group: &ProducerGroup<'_>) -> Vec<IntervalResult> {
    group
        .wins
        .windows(2)
        .map(|pair| IntervalResult::new(group.producer, pair[0].year, pair[1].year))
        .collect()
}

/// Intervals for every eligible group.
///
/// Groups are processed in parallel; the output is still ordered by group
/// and then chronologically within each group.
pub fn derive_intervals(groups: &[ProducerGroup<'_>]) -> Vec<IntervalResult> {
    groups
        .par_iter()
        .flat_map_iter(consecutive_intervals)
        .collect()
}
