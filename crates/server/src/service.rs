//! # Awards Service
//!
//! Answers the awards query for one request:
//! 1. Read the winning records from the store (once)
//! 2. Run the aggregation on a blocking task
//! 3. Return the summary for the presenter
//!
//! Store failures are passed through untouched; retrying is the store's
//! business, not ours.

use std::sync::Arc;
use std::time::Instant;

use pipeline::{compute_awards_summary, AwardsSummary};
use tracing::info;

use crate::error::ServiceError;
use crate::store::RecordStore;

/// Stateless query service shared by all request handlers
#[derive(Clone)]
pub struct AwardsService {
    store: Arc<dyn RecordStore>,
}

impl AwardsService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Compute the producer interval summary from a fresh store snapshot.
    pub async fn awards_summary(&self) -> Result<AwardsSummary, ServiceError> {
        let start_time = Instant::now();

        let records = self.store.list_winning_records().await?;
        let fetched = records.len();

        let summary =
            tokio::task::spawn_blocking(move || compute_awards_summary(&records)).await?;

        info!(
            "Computed awards summary from {} winners ({} min, {} max) in {:.2?}",
            fetched,
            summary.min.len(),
            summary.max.len(),
            start_time.elapsed()
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{StoreError, StoreResult};
    use async_trait::async_trait;
    use data_loader::{AwardIndex, AwardRecord};
    use pipeline::IntervalResult;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ============================================================================
    // Test Fakes
    // ============================================================================

    /// Store that counts how often it is read
    struct CountingStore {
        records: Vec<AwardRecord>,
        reads: AtomicUsize,
    }

    #[async_trait]
    impl RecordStore for CountingStore {
        async fn list_winning_records(&self) -> StoreResult<Vec<AwardRecord>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(self.records.clone())
        }
    }

    /// Store that is always down
    struct UnavailableStore;

    #[async_trait]
    impl RecordStore for UnavailableStore {
        async fn list_winning_records(&self) -> StoreResult<Vec<AwardRecord>> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
    }

    // ============================================================================
    // Unit Tests
    // ============================================================================

    #[tokio::test]
    async fn test_summary_reads_store_once() {
        let store = Arc::new(CountingStore {
            records: vec![
                AwardRecord::winner("Producer A", 2000),
                AwardRecord::winner("Producer A", 2001),
                AwardRecord::winner("Producer B", 1990),
                AwardRecord::winner("Producer B", 2003),
            ],
            reads: AtomicUsize::new(0),
        });
        let service = AwardsService::new(store.clone());

        let summary = service.awards_summary().await.unwrap();

        assert_eq!(store.reads.load(Ordering::SeqCst), 1);
        assert_eq!(summary.min, vec![IntervalResult::new("Producer A", 2000, 2001)]);
        assert_eq!(summary.max, vec![IntervalResult::new("Producer B", 1990, 2003)]);
    }

    #[tokio::test]
    async fn test_summary_defends_against_non_winners() {
        let store = Arc::new(CountingStore {
            records: vec![
                AwardRecord::winner("Producer A", 2000),
                AwardRecord::nominee("Producer A", 2001),
            ],
            reads: AtomicUsize::new(0),
        });

        let summary = AwardsService::new(store).awards_summary().await.unwrap();
        assert!(summary.is_empty());
    }

    #[tokio::test]
    async fn test_summary_from_index() {
        let index: AwardIndex = vec![
            AwardRecord::winner("Producer A", 2005),
            AwardRecord::winner("Producer A", 2006),
        ]
        .into_iter()
        .collect();

        let summary = AwardsService::new(Arc::new(index))
            .awards_summary()
            .await
            .unwrap();
        assert_eq!(summary.min, summary.max);
        assert_eq!(summary.min.len(), 1);
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let service = AwardsService::new(Arc::new(UnavailableStore));

        let result = service.awards_summary().await;
        assert!(matches!(
            result,
            Err(ServiceError::Store(StoreError::Unavailable(_)))
        ));
    }

    #[tokio::test]
    async fn test_concurrent_requests_agree() {
        let index: AwardIndex = vec![
            AwardRecord::winner("Producer A", 1980),
            AwardRecord::winner("Producer A", 1981),
            AwardRecord::winner("Producer B", 1982),
            AwardRecord::winner("Producer B", 1995),
        ]
        .into_iter()
        .collect();
        let service = AwardsService::new(Arc::new(index));

        let mut handles = vec![];
        for _ in 0..8 {
            let service = service.clone();
            handles.push(tokio::spawn(async move { service.awards_summary().await }));
        }

        let mut summaries = vec![];
        for handle in handles {
            summaries.push(handle.await.unwrap().unwrap());
        }
        assert!(summaries.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
