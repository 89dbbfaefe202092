//! Global-search aggregator
//!
//! Fans a query out to every registered provider, merges the hits, and
//! returns them flat or grouped by category. A failing provider contributes
//! zero hits and is logged; it never aborts the query, so the dropdown keeps
//! showing whatever the healthy categories found.

use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{debug, warn};

use crate::domain::{GroupedHits, ResultKind, SearchHit};
use crate::error::Result;
use crate::providers::{SearchProvider, fixtures};

/// Default cap for flat `search` results
pub const DEFAULT_FLAT_LIMIT: usize = 10;

/// Default per-group cap for `search_grouped` previews
pub const DEFAULT_GROUP_LIMIT: usize = 5;

/// Page size requested from each provider per query
const PROVIDER_PAGE_SIZE: usize = 10;

/// Aggregates search hits across an ordered list of providers
///
/// Stateless per call: no caching, no retries. Identical provider state
/// yields identical results.
#[derive(Clone)]
pub struct SearchAggregator {
    providers: Vec<Arc<dyn SearchProvider>>,
    page_size: usize,
}

impl std::fmt::Debug for SearchAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kinds: Vec<&str> = self.providers.iter().map(|p| p.kind().as_str()).collect();
        f.debug_struct("SearchAggregator")
            .field("providers", &kinds)
            .field("page_size", &self.page_size)
            .finish()
    }
}

impl Default for SearchAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchAggregator {
    /// Create an aggregator with no providers
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            page_size: PROVIDER_PAGE_SIZE,
        }
    }

    /// Register a provider. Registration order fixes the merge order across
    /// providers and the tie-break order of equal-count groups.
    pub fn with_provider(mut self, provider: impl SearchProvider + 'static) -> Self {
        self.providers.push(Arc::new(provider));
        self
    }

    /// Register an already-shared provider
    pub fn with_shared_provider(mut self, provider: Arc<dyn SearchProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Register the demo fixture providers for the five categories without
    /// a live endpoint: orders, products, categories, finance, auctions.
    pub fn with_demo_fixtures(self) -> Self {
        self.with_provider(fixtures::orders())
            .with_provider(fixtures::products())
            .with_provider(fixtures::categories())
            .with_provider(fixtures::finance())
            .with_provider(fixtures::bidding_products())
    }

    /// Override the per-provider page size
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Categories served, in registration order
    pub fn kinds(&self) -> Vec<ResultKind> {
        self.providers.iter().map(|p| p.kind()).collect()
    }

    /// Flat search: merged hits across all providers, truncated to `limit`
    /// (default 10). Blank queries return no hits and call no provider.
    pub async fn search(&self, query: &str, limit: Option<usize>) -> Result<Vec<SearchHit>> {
        let limit = limit.unwrap_or(DEFAULT_FLAT_LIMIT);

        let mut hits = self.fan_out(query).await?;
        hits.truncate(limit);
        Ok(hits)
    }

    /// Grouped search: hits partitioned by category, each group truncated to
    /// `limit_per_group` (default 5) with its true total recorded, sorted by
    /// total descending. Equal totals keep first-encounter order.
    pub async fn search_grouped(
        &self,
        query: &str,
        limit_per_group: Option<usize>,
    ) -> Result<Vec<GroupedHits>> {
        let limit_per_group = limit_per_group.unwrap_or(DEFAULT_GROUP_LIMIT);

        let merged = self.fan_out(query).await?;

        // Partition preserving first-encounter group order; counts come from
        // the untruncated merge.
        let mut buckets: Vec<(ResultKind, Vec<SearchHit>)> = Vec::new();
        for hit in merged {
            match buckets.iter_mut().find(|(kind, _)| *kind == hit.kind) {
                Some((_, bucket)) => bucket.push(hit),
                None => buckets.push((hit.kind, vec![hit])),
            }
        }

        let mut groups: Vec<GroupedHits> = buckets
            .into_iter()
            .map(|(kind, hits)| GroupedHits::new(kind, hits, limit_per_group))
            .collect();

        // Stable: ties keep the bucket order established above
        groups.sort_by(|a, b| b.count.cmp(&a.count));

        Ok(groups)
    }

    /// Query every provider and merge the hits in registration order.
    ///
    /// Provider failures are isolated here: an `Err` from one provider is
    /// logged and skipped so the remaining categories still render.
    async fn fan_out(&self, query: &str) -> Result<Vec<SearchHit>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        debug!(query = %query, providers = self.providers.len(), "Dispatching search");

        // Independent, side-effect-free calls; join_all preserves
        // registration order in the output.
        let calls = self
            .providers
            .iter()
            .map(|provider| provider.search(query, self.page_size));
        let responses = join_all(calls).await;

        let mut merged = Vec::new();
        for (provider, response) in self.providers.iter().zip(responses) {
            match response {
                Ok(hits) => merged.extend(hits),
                Err(e) => {
                    warn!(
                        provider = %provider.kind(),
                        code = e.code(),
                        error = %e,
                        "Provider failed, serving remaining categories"
                    );
                }
            }
        }

        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Stub provider returning canned titles and counting its calls
    struct StaticProvider {
        kind: ResultKind,
        titles: Vec<&'static str>,
        calls: Arc<AtomicUsize>,
    }

    impl StaticProvider {
        fn new(kind: ResultKind, titles: Vec<&'static str>) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    kind,
                    titles,
                    calls: Arc::clone(&calls),
                },
                calls,
            )
        }
    }

    #[async_trait]
    impl SearchProvider for StaticProvider {
        fn kind(&self) -> ResultKind {
            self.kind
        }

        async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let needle = query.to_lowercase();
            Ok(self
                .titles
                .iter()
                .filter(|t| t.to_lowercase().contains(&needle))
                .take(limit)
                .enumerate()
                .map(|(i, t)| SearchHit::new(self.kind, format!("{}-{i}", self.kind), *t))
                .collect())
        }
    }

    /// Stub provider that always fails
    struct FailingProvider {
        kind: ResultKind,
    }

    #[async_trait]
    impl SearchProvider for FailingProvider {
        fn kind(&self) -> ResultKind {
            self.kind
        }

        async fn search(&self, _query: &str, _limit: usize) -> Result<Vec<SearchHit>> {
            Err(Error::provider_unavailable(
                self.kind.as_str(),
                "503 Service Unavailable",
            ))
        }
    }

    #[tokio::test]
    async fn test_blank_query_calls_no_provider() {
        let (users, user_calls) = StaticProvider::new(ResultKind::User, vec!["Jane"]);
        let (orders, order_calls) = StaticProvider::new(ResultKind::Order, vec!["Order ORD-001"]);
        let aggregator = SearchAggregator::new()
            .with_provider(users)
            .with_provider(orders);

        assert!(aggregator.search("", None).await.unwrap().is_empty());
        assert!(aggregator.search("   \t", None).await.unwrap().is_empty());
        assert!(
            aggregator
                .search_grouped("  ", None)
                .await
                .unwrap()
                .is_empty()
        );

        assert_eq!(user_calls.load(Ordering::SeqCst), 0);
        assert_eq!(order_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_flat_search_respects_limit() {
        let (products, _) = StaticProvider::new(
            ResultKind::Product,
            vec!["widget a", "widget b", "widget c", "widget d"],
        );
        let aggregator = SearchAggregator::new().with_provider(products);

        let hits = aggregator.search("widget", Some(3)).await.unwrap();
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].title, "widget a");
    }

    #[tokio::test]
    async fn test_merge_preserves_registration_order() {
        let (users, _) = StaticProvider::new(ResultKind::User, vec!["match u"]);
        let (orders, _) = StaticProvider::new(ResultKind::Order, vec!["match o"]);
        let aggregator = SearchAggregator::new()
            .with_provider(users)
            .with_provider(orders);

        let hits = aggregator.search("match", None).await.unwrap();
        assert_eq!(hits[0].kind, ResultKind::User);
        assert_eq!(hits[1].kind, ResultKind::Order);
    }

    #[tokio::test]
    async fn test_grouped_invariants_and_order() {
        let (users, _) = StaticProvider::new(ResultKind::User, vec!["x1"]);
        let (products, _) = StaticProvider::new(
            ResultKind::Product,
            vec!["x one", "x two", "x three", "x four"],
        );
        let aggregator = SearchAggregator::new()
            .with_provider(users)
            .with_provider(products);

        let groups = aggregator.search_grouped("x", Some(2)).await.unwrap();

        // Sorted by count descending: products (4) before users (1)
        assert_eq!(groups[0].kind, ResultKind::Product);
        assert_eq!(groups[0].count, 4);
        assert_eq!(groups[0].hits.len(), 2);
        assert_eq!(groups[1].kind, ResultKind::User);
        assert_eq!(groups[1].count, 1);

        for group in &groups {
            assert!(group.hits.len() <= 2);
            assert!(group.hits.len() <= group.count);
        }
    }

    #[tokio::test]
    async fn test_grouped_count_is_true_total_beyond_page_size() {
        use crate::providers::{FixtureProvider, FixtureRecord};

        struct WidgetRecord {
            id: String,
            name: String,
        }

        impl FixtureRecord for WidgetRecord {
            fn search_fields(&self) -> Vec<&str> {
                vec![&self.name]
            }

            fn to_hit(&self) -> SearchHit {
                SearchHit::new(ResultKind::Product, self.id.clone(), self.name.clone())
            }
        }

        // More matches than the per-provider page size (10)
        let records: Vec<WidgetRecord> = (0..12)
            .map(|i| WidgetRecord {
                id: format!("w{i}"),
                name: format!("Widget {i}"),
            })
            .collect();
        let aggregator = SearchAggregator::new()
            .with_provider(FixtureProvider::new(ResultKind::Product, records));

        let groups = aggregator.search_grouped("widget", Some(5)).await.unwrap();
        assert_eq!(groups.len(), 1);
        // True total before truncation, not the page-size cap
        assert_eq!(groups[0].count, 12);
        assert_eq!(groups[0].hits.len(), 5);
    }

    #[tokio::test]
    async fn test_grouped_tie_keeps_registration_order() {
        let (vendors, _) = StaticProvider::new(ResultKind::Vendor, vec!["tie a", "tie b"]);
        let (finance, _) = StaticProvider::new(ResultKind::Finance, vec!["tie c", "tie d"]);
        let aggregator = SearchAggregator::new()
            .with_provider(vendors)
            .with_provider(finance);

        let groups = aggregator.search_grouped("tie", None).await.unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].kind, ResultKind::Vendor);
        assert_eq!(groups[1].kind, ResultKind::Finance);
    }

    #[tokio::test]
    async fn test_failing_provider_is_isolated() {
        let (orders, _) = StaticProvider::new(ResultKind::Order, vec!["touseef's order"]);
        let aggregator = SearchAggregator::new()
            .with_provider(FailingProvider {
                kind: ResultKind::Vendor,
            })
            .with_provider(orders);

        let hits = aggregator.search("touseef", None).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].kind, ResultKind::Order);

        let groups = aggregator.search_grouped("touseef", None).await.unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].kind, ResultKind::Order);
    }

    #[tokio::test]
    async fn test_all_providers_failing_yields_empty() {
        let aggregator = SearchAggregator::new()
            .with_provider(FailingProvider {
                kind: ResultKind::User,
            })
            .with_provider(FailingProvider {
                kind: ResultKind::Vendor,
            });

        let hits = aggregator.search("anything", None).await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_idempotent_over_unchanged_providers() {
        let aggregator = SearchAggregator::new().with_demo_fixtures();

        let first = aggregator.search("a", None).await.unwrap();
        let second = aggregator.search("a", None).await.unwrap();

        let ids = |hits: &[SearchHit]| -> Vec<(ResultKind, String)> {
            hits.iter().map(|h| (h.kind, h.id.clone())).collect()
        };
        assert_eq!(ids(&first), ids(&second));
    }

    #[tokio::test]
    async fn test_case_insensitive_across_fixtures() {
        let aggregator = SearchAggregator::new().with_demo_fixtures();

        let lower = aggregator.search("touseef", None).await.unwrap();
        let upper = aggregator.search("TOUSEEF", None).await.unwrap();
        assert!(!lower.is_empty());
        assert_eq!(lower.len(), upper.len());
    }

    #[tokio::test]
    async fn test_demo_fixture_ord_002_end_to_end() {
        let aggregator = SearchAggregator::new().with_demo_fixtures();

        let groups = aggregator.search_grouped("ORD-002", None).await.unwrap();
        let orders = groups
            .iter()
            .find(|g| g.kind == ResultKind::Order)
            .expect("orders group");
        assert_eq!(orders.count, 1);
        assert_eq!(orders.hits[0].title, "Order ORD-002");
        assert_eq!(
            orders.hits[0].subtitle.as_deref(),
            Some("Jane Smith - $2,500.00")
        );
    }

    #[tokio::test]
    async fn test_air_query_groups() {
        let aggregator = SearchAggregator::new().with_demo_fixtures();

        let groups = aggregator.search_grouped("air", None).await.unwrap();
        let auctions = groups
            .iter()
            .find(|g| g.kind == ResultKind::BiddingProduct)
            .expect("auctions group");
        assert_eq!(auctions.hits[0].title, "Air Jordan 1 Retro");

        // No live providers registered, so no user/vendor group
        assert!(groups.iter().all(|g| g.kind != ResultKind::User));
        assert!(groups.iter().all(|g| g.kind != ResultKind::Vendor));
    }
}
