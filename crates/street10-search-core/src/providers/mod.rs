//! Data providers queried by the aggregator
//!
//! Every source - live REST endpoint or in-memory fixture set - hides behind
//! the [`SearchProvider`] trait so the aggregator has no knowledge of where
//! a category's data comes from and each source can be mocked on its own.

use async_trait::async_trait;

use crate::domain::{ResultKind, SearchHit};
use crate::error::Result;

pub mod fixture;
pub mod fixtures;
pub mod rest;

pub use fixture::{FixtureProvider, FixtureRecord};
pub use rest::{RestClient, UsersProvider, VendorsProvider};

/// A read-only data source for one result category
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Category this provider serves
    fn kind(&self) -> ResultKind;

    /// Return the hits matching `query`.
    ///
    /// Matching is case-insensitive substring over the provider's configured
    /// fields, keeping the provider's scan order. `limit` is the page size
    /// for sources that fetch remotely; in-memory sources scan their full
    /// record set so grouped results can report true totals. The query is
    /// guaranteed non-empty; the aggregator short-circuits blank input
    /// before calling any provider.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>>;
}
