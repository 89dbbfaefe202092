//! Search hit and grouped-result types
//!
//! A `SearchHit` is the canonical shape every provider normalizes into; it
//! lives only for the duration of one query response and is never persisted.

use serde::{Deserialize, Serialize};

use super::kind::ResultKind;

/// A single normalized search result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// Identifier of the matched entity, as issued by its provider
    pub id: String,

    /// Category the hit belongs to; `(kind, id)` is the hit's identity
    pub kind: ResultKind,

    /// Primary display line
    pub title: String,

    /// Secondary display line, if the provider has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Admin route the hit navigates to
    pub route: String,

    /// Additional provider-specific fields for the detail view
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl SearchHit {
    /// Create a new hit routed to `{kind.route_base()}/{id}`
    pub fn new(kind: ResultKind, id: impl Into<String>, title: impl Into<String>) -> Self {
        let id = id.into();
        let route = format!("{}/{}", kind.route_base(), id);
        Self {
            id,
            kind,
            title: title.into(),
            subtitle: None,
            route,
            metadata: None,
        }
    }

    /// Set the secondary display line
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Override the navigation route
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = route.into();
        self
    }

    /// Attach provider-specific metadata
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// One rendered section of the search dropdown: a category with a truncated
/// preview of its hits and the true total before truncation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupedHits {
    /// Category of every hit in this group
    pub kind: ResultKind,

    /// Section label shown above the group
    pub label: String,

    /// Preview hits, truncated to the per-group limit
    pub hits: Vec<SearchHit>,

    /// True number of hits before truncation; always >= `hits.len()`
    pub count: usize,
}

impl GroupedHits {
    /// Build a group from the full hit list for one category, keeping at
    /// most `limit` hits and recording the untruncated total.
    pub fn new(kind: ResultKind, mut hits: Vec<SearchHit>, limit: usize) -> Self {
        let count = hits.len();
        hits.truncate(limit);
        Self {
            kind,
            label: kind.label().to_string(),
            hits,
            count,
        }
    }

    /// "View all" route for this group, carrying the query as a filter
    pub fn view_all_route(&self, query: &str) -> String {
        format!("{}?search={}", self.kind.route_base(), query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_builder() {
        let hit = SearchHit::new(ResultKind::Order, "ORD-002", "Order ORD-002")
            .with_subtitle("Jane Smith - $2,500.00")
            .with_metadata(serde_json::json!({"status": "shipped"}));

        assert_eq!(hit.route, "/orders/ORD-002");
        assert_eq!(hit.subtitle.as_deref(), Some("Jane Smith - $2,500.00"));
        assert!(hit.metadata.is_some());
    }

    #[test]
    fn test_hit_serde_omits_empty_fields() {
        let hit = SearchHit::new(ResultKind::User, "u1", "Jane");
        let json = serde_json::to_value(&hit).unwrap();
        assert!(json.get("subtitle").is_none());
        assert!(json.get("metadata").is_none());
        assert_eq!(json["kind"], "user");
    }

    #[test]
    fn test_group_truncates_and_counts() {
        let hits: Vec<SearchHit> = (0..8)
            .map(|i| SearchHit::new(ResultKind::Product, format!("p{i}"), format!("Product {i}")))
            .collect();

        let group = GroupedHits::new(ResultKind::Product, hits, 5);
        assert_eq!(group.count, 8);
        assert_eq!(group.hits.len(), 5);
        assert_eq!(group.label, "Products");
        // Truncation keeps provider scan order
        assert_eq!(group.hits[0].id, "p0");
    }

    #[test]
    fn test_group_smaller_than_limit() {
        let hits = vec![SearchHit::new(ResultKind::Vendor, "v1", "Acme")];
        let group = GroupedHits::new(ResultKind::Vendor, hits, 5);
        assert_eq!(group.count, 1);
        assert_eq!(group.hits.len(), 1);
    }

    #[test]
    fn test_view_all_route() {
        let group = GroupedHits::new(ResultKind::Finance, Vec::new(), 5);
        assert_eq!(group.view_all_route("refund"), "/finance?search=refund");
    }
}
