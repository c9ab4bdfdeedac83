//! Catalog storage implementations.
//!
//! The search engine consumes the [`ArticleCatalog`](stromlager_search::ArticleCatalog)
//! trait; this crate provides the in-memory implementation used by the API
//! and by tests. Article mutation workflows (take-out, return, edits) live
//! with the surrounding application, not here.

pub mod memory;

pub use memory::InMemoryArticleStore;
