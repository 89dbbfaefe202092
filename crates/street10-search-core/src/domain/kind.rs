//! Result categories for the admin global search
//!
//! The back office searches seven fixed categories. Each maps to the admin
//! route its "view all" link navigates to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categories of entities the global search can return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResultKind {
    /// Marketplace customers
    User,
    /// Registered vendors / businesses
    Vendor,
    /// Fixed-price orders
    Order,
    /// Fixed-price products
    Product,
    /// Product categories
    Category,
    /// Finance / wallet records
    Finance,
    /// Auction listings
    BiddingProduct,
}

impl ResultKind {
    /// Convert to the wire string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Vendor => "vendor",
            Self::Order => "order",
            Self::Product => "product",
            Self::Category => "category",
            Self::Finance => "finance",
            Self::BiddingProduct => "bidding-product",
        }
    }

    /// Create from the wire string representation
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "user" => Some(Self::User),
            "vendor" => Some(Self::Vendor),
            "order" => Some(Self::Order),
            "product" => Some(Self::Product),
            "category" => Some(Self::Category),
            "finance" => Some(Self::Finance),
            "bidding-product" => Some(Self::BiddingProduct),
            _ => None,
        }
    }

    /// Human-readable section label shown above each result group
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "Users",
            Self::Vendor => "Vendors",
            Self::Order => "Orders",
            Self::Product => "Products",
            Self::Category => "Categories",
            Self::Finance => "Finance",
            Self::BiddingProduct => "Auctions",
        }
    }

    /// Admin route base for this category; "view all" links append
    /// `?search=<query>` to it.
    pub fn route_base(&self) -> &'static str {
        match self {
            Self::User => "/users",
            Self::Vendor => "/vendors",
            Self::Order => "/orders",
            Self::Product => "/products",
            Self::Category => "/categories",
            Self::Finance => "/finance",
            Self::BiddingProduct => "/bidding-products",
        }
    }

    /// All categories, in the order the search box renders them by default
    pub fn all() -> Vec<Self> {
        vec![
            Self::User,
            Self::Vendor,
            Self::Order,
            Self::Product,
            Self::Category,
            Self::Finance,
            Self::BiddingProduct,
        ]
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
