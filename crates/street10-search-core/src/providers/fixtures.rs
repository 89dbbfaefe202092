//! Demo datasets for the fixture-backed categories
//!
//! These mirror the seed data the admin back office ships for environments
//! without a full backend. Read-only; page components never mutate them.

use serde_json::json;

use super::fixture::{FixtureProvider, FixtureRecord};
use crate::domain::{ResultKind, SearchHit};

/// A fixed-price order
pub struct OrderRecord {
    pub number: String,
    pub customer: String,
    pub total: String,
    pub status: String,
}

impl FixtureRecord for OrderRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.number, &self.customer]
    }

    fn to_hit(&self) -> SearchHit {
        SearchHit::new(
            ResultKind::Order,
            self.number.clone(),
            format!("Order {}", self.number),
        )
        .with_subtitle(format!("{} - {}", self.customer, self.total))
        .with_metadata(json!({ "status": self.status }))
    }
}

/// A fixed-price product listing
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: String,
}

impl FixtureRecord for ProductRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.sku, &self.category]
    }

    fn to_hit(&self) -> SearchHit {
        SearchHit::new(ResultKind::Product, self.id.clone(), self.name.clone())
            .with_subtitle(format!("{} - {}", self.sku, self.price))
            .with_metadata(json!({ "category": self.category }))
    }
}

/// A product category
pub struct CategoryRecord {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl FixtureRecord for CategoryRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.description]
    }

    fn to_hit(&self) -> SearchHit {
        SearchHit::new(ResultKind::Category, self.id.clone(), self.name.clone())
            .with_subtitle(self.description.clone())
    }
}

/// A finance / wallet ledger entry
pub struct FinanceRecord {
    pub id: String,
    pub description: String,
    pub entry_type: String,
    pub amount: String,
}

impl FixtureRecord for FinanceRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.id, &self.description, &self.entry_type]
    }

    fn to_hit(&self) -> SearchHit {
        SearchHit::new(
            ResultKind::Finance,
            self.id.clone(),
            self.description.clone(),
        )
        .with_subtitle(format!("{} - {}", self.entry_type, self.amount))
    }
}

/// An auction listing
pub struct BiddingProductRecord {
    pub id: String,
    pub name: String,
    pub seller: String,
    pub current_bid: String,
}

impl FixtureRecord for BiddingProductRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.seller]
    }

    fn to_hit(&self) -> SearchHit {
        SearchHit::new(ResultKind::BiddingProduct, self.id.clone(), self.name.clone())
            .with_subtitle(format!("{} - current bid {}", self.seller, self.current_bid))
    }
}

/// Demo orders provider
pub fn orders() -> FixtureProvider<OrderRecord> {
    FixtureProvider::new(
        ResultKind::Order,
        vec![
            OrderRecord {
                number: "ORD-001".into(),
                customer: "Touseef Ahmed".into(),
                total: "$1,200.00".into(),
                status: "delivered".into(),
            },
            OrderRecord {
                number: "ORD-002".into(),
                customer: "Jane Smith".into(),
                total: "$2,500.00".into(),
                status: "processing".into(),
            },
            OrderRecord {
                number: "ORD-003".into(),
                customer: "Omar Ali".into(),
                total: "$349.99".into(),
                status: "shipped".into(),
            },
            OrderRecord {
                number: "ORD-004".into(),
                customer: "Sara Khan".into(),
                total: "$89.50".into(),
                status: "cancelled".into(),
            },
        ],
    )
}

/// Demo products provider
pub fn products() -> FixtureProvider<ProductRecord> {
    FixtureProvider::new(
        ResultKind::Product,
        vec![
            ProductRecord {
                id: "PRD-101".into(),
                name: "MacBook Air 13\"".into(),
                sku: "SKU-MBA-13".into(),
                category: "Laptops".into(),
                price: "$999.00".into(),
            },
            ProductRecord {
                id: "PRD-102".into(),
                name: "AirPods Pro".into(),
                sku: "SKU-APP-2".into(),
                category: "Audio".into(),
                price: "$249.00".into(),
            },
            ProductRecord {
                id: "PRD-103".into(),
                name: "Galaxy S24".into(),
                sku: "SKU-GS24".into(),
                category: "Phones".into(),
                price: "$799.00".into(),
            },
            ProductRecord {
                id: "PRD-104".into(),
                name: "Mechanical Keyboard".into(),
                sku: "SKU-MKB-87".into(),
                category: "Accessories".into(),
                price: "$129.00".into(),
            },
        ],
    )
}

/// Demo categories provider
pub fn categories() -> FixtureProvider<CategoryRecord> {
    FixtureProvider::new(
        ResultKind::Category,
        vec![
            CategoryRecord {
                id: "CAT-01".into(),
                name: "Laptops".into(),
                description: "Notebooks and ultrabooks".into(),
            },
            CategoryRecord {
                id: "CAT-02".into(),
                name: "Audio".into(),
                description: "Headphones and speakers".into(),
            },
            CategoryRecord {
                id: "CAT-03".into(),
                name: "Phones".into(),
                description: "Smartphones and accessories".into(),
            },
        ],
    )
}

/// Demo finance provider
pub fn finance() -> FixtureProvider<FinanceRecord> {
    FixtureProvider::new(
        ResultKind::Finance,
        vec![
            FinanceRecord {
                id: "FIN-9001".into(),
                description: "Vendor payout - Desert Electronics".into(),
                entry_type: "payout".into(),
                amount: "$4,100.00".into(),
            },
            FinanceRecord {
                id: "FIN-9002".into(),
                description: "Refund for ORD-004".into(),
                entry_type: "refund".into(),
                amount: "$89.50".into(),
            },
            FinanceRecord {
                id: "FIN-9003".into(),
                description: "Wallet top-up - Touseef Ahmed".into(),
                entry_type: "deposit".into(),
                amount: "$500.00".into(),
            },
        ],
    )
}

/// Demo auction-listings provider
pub fn bidding_products() -> FixtureProvider<BiddingProductRecord> {
    FixtureProvider::new(
        ResultKind::BiddingProduct,
        vec![
            BiddingProductRecord {
                id: "BID-501".into(),
                name: "Vintage Rolex Datejust".into(),
                seller: "Gulf Traders".into(),
                current_bid: "$6,400.00".into(),
            },
            BiddingProductRecord {
                id: "BID-502".into(),
                name: "Air Jordan 1 Retro".into(),
                seller: "Sneaker Vault".into(),
                current_bid: "$820.00".into(),
            },
            BiddingProductRecord {
                id: "BID-503".into(),
                name: "Signed Cricket Bat".into(),
                seller: "Sports Attic".into(),
                current_bid: "$310.00".into(),
            },
        ],
    )
}
