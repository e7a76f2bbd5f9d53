//! Global extremum selection and the end-to-end aggregation.

use crate::grouping::ProducerGroups;
use crate::intervals::{derive_intervals, IntervalResult};
use data_loader::AwardRecord;
use serde::{Deserialize, Serialize};

/// Shortest and longest consecutive-win intervals across all producers.
///
/// Both lists carry every tie. They are empty when no producer won twice,
/// and both are populated when every interval has the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardsSummary {
    pub min: Vec<IntervalResult>,
    pub max: Vec<IntervalResult>,
}

impl AwardsSummary {
    pub fn is_empty(&self) -> bool {
        self.min.is_empty() && self.max.is_empty()
    }
}

/// Pick every interval equal to the global minimum and the global maximum.
///
/// Input order is kept within each list.
pub fn select_extremes(intervals: &[IntervalResult]) -> AwardsSummary {
    let lengths = intervals.iter().map(|r| r.interval);
    let (Some(shortest), Some(longest)) = (lengths.clone().min(), lengths.max()) else {
        return AwardsSummary::default();
    };

    let matching = |target: u16| -> Vec<IntervalResult> {
        intervals
            .iter()
            .filter(|r| r.interval == target)
            .cloned()
            .collect()
    };

    AwardsSummary {
        min: matching(shortest),
        max: matching(longest),
    }
}

/// Compute the awards summary from any set of records.
///
/// ## Algorithm
/// 1. Group winners by producer (non-winners are dropped here)
/// 2. Keep producers with at least two wins, sort their wins by year
/// 3. Emit one interval per pair of adjacent wins
/// 4. Select the global minimum and maximum, with ties
///
/// The input needs no particular order and is never modified.
pub fn compute_awards_summary(records: &[AwardRecord]) -> AwardsSummary {
    let groups = ProducerGroups::group_winners(records);
    let producers = groups.len();

    let eligible = groups.into_eligible();
    let intervals = derive_intervals(&eligible);
    tracing::debug!(
        "{} records, {} winning producers, {} with repeat wins, {} intervals",
        records.len(),
        producers,
        eligible.len(),
        intervals.len()
    );

    select_extremes(&intervals)
}
