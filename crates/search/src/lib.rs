//! Article search and bundle assembly.
//!
//! Given a validated [`SearchQuery`](stromlager_articles::SearchQuery), this
//! crate builds a filter predicate over the catalog, looks for up to three
//! single articles that satisfy it on their own, and falls back to
//! synthesizing same-location bundles of shorter articles when a length
//! requirement cannot be met by singles alone. The engine is stateless and
//! read-only: each invocation is a pure function of (query, catalog snapshot).

pub mod bundle;
pub mod catalog;
pub mod engine;
pub mod predicate;

pub use catalog::{ArticleCatalog, LengthFilter, LengthOrder};
pub use engine::{SearchEngine, SearchError, RESULT_SLOTS};
pub use predicate::{AmpacityBound, ArticlePredicate};
