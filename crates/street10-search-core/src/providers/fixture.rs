//! In-memory fixture providers
//!
//! Orders, products, categories, finance records, and auction listings are
//! served from read-only in-memory datasets in this deployment. A real
//! rollout would swap each for a REST provider behind the same trait; the
//! aggregator cannot tell the difference.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{ResultKind, SearchHit};
use crate::error::Result;

/// A record type that can be scanned and normalized by a [`FixtureProvider`]
pub trait FixtureRecord: Send + Sync {
    /// Text fields the case-insensitive substring match runs over
    fn search_fields(&self) -> Vec<&str>;

    /// Normalize into the canonical hit shape
    fn to_hit(&self) -> SearchHit;
}

/// Provider over a fixed, read-only record set for one category
pub struct FixtureProvider<R: FixtureRecord> {
    kind: ResultKind,
    records: Arc<Vec<R>>,
}

impl<R: FixtureRecord> FixtureProvider<R> {
    /// Create a provider serving `kind` from the given records
    pub fn new(kind: ResultKind, records: Vec<R>) -> Self {
        Self {
            kind,
            records: Arc::new(records),
        }
    }

    /// Number of records in the dataset
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: FixtureRecord> Clone for FixtureProvider<R> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            records: Arc::clone(&self.records),
        }
    }
}

#[async_trait]
impl<R: FixtureRecord> super::SearchProvider for FixtureProvider<R> {
    fn kind(&self) -> ResultKind {
        self.kind
    }

    /// Full scan of the record set. The page-size hint is ignored: grouped
    /// results need the true match total, and the aggregator truncates flat
    /// results and group previews itself.
    async fn search(&self, query: &str, _limit: usize) -> Result<Vec<SearchHit>> {
        let needle = query.to_lowercase();

        let hits = self
            .records
            .iter()
            .filter(|record| {
                record
                    .search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .map(FixtureRecord::to_hit)
            .collect();

        Ok(hits)
    }
}
