//! Domain types for the admin global search

pub mod hit;
pub mod kind;

pub use hit::{GroupedHits, SearchHit};
pub use kind::ResultKind;
