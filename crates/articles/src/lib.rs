//! Article domain module.
//!
//! This crate contains the read model and query types for electrical
//! equipment articles, implemented purely as deterministic domain data
//! (no IO, no HTTP, no storage).

pub mod article;
pub mod query;

pub use article::{AmpacityClass, Article, Connector, EquipmentType, Tag};
pub use query::{Bundle, SearchQuery, SearchResponse};
