//! Record store abstraction.
//!
//! The service only needs one capability from storage: list every winning
//! record. Ordering is not part of the contract; the aggregation sorts per
//! producer on its own.

use async_trait::async_trait;
use data_loader::{AwardIndex, AwardRecord};

use crate::error::StoreResult;

/// Read side of the award record storage.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All records flagged as winners
    async fn list_winning_records(&self) -> StoreResult<Vec<AwardRecord>>;
}

#[async_trait]
impl RecordStore for AwardIndex {
    async fn list_winning_records(&self) -> StoreResult<Vec<AwardRecord>> {
        Ok(self.winning_records())
    }
}
