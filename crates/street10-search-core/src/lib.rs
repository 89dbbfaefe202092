//! Street10 Search Core Library
//!
//! This crate provides the grouped global-search aggregator behind the
//! Street10 admin back office, including:
//! - Domain types (result categories, hits, grouped results)
//! - Providers (live REST for users/vendors, in-memory fixtures for the rest)
//! - The aggregator (fan-out, merge, failure isolation, grouping/ranking)
//! - Query sessions (last-query-wins stale-response discarding)
//! - Configuration management

pub mod aggregator;
pub mod config;
pub mod domain;
pub mod error;
pub mod providers;
pub mod session;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::aggregator::SearchAggregator;
    pub use crate::config::Config;
    pub use crate::domain::{GroupedHits, ResultKind, SearchHit};
    pub use crate::error::{Error, Result};
    pub use crate::providers::SearchProvider;
    pub use crate::session::{QuerySession, QueryTicket};
}
