//! Catalog read abstraction consumed by the search engine.
//!
//! The engine does not prescribe a storage technology; any store offering
//! filtered, ordered, limited reads can implement this trait.

use std::sync::Arc;

use stromlager_articles::Article;
use stromlager_core::ArticleId;

use crate::predicate::ArticlePredicate;

/// Length band applied on top of the predicate for one read.
///
/// Banding is a read parameter rather than predicate state because the
/// engine issues up to three differently-banded reads per request over a
/// single predicate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LengthFilter {
    Any,
    AtLeast(f64),
    Below(f64),
}

impl LengthFilter {
    pub fn admits(self, length_m: f64) -> bool {
        match self {
            LengthFilter::Any => true,
            LengthFilter::AtLeast(min) => length_m >= min,
            LengthFilter::Below(max) => length_m < max,
        }
    }
}

/// Sort direction over `length_m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthOrder {
    Ascending,
    Descending,
}

/// Read-only catalog interface.
pub trait ArticleCatalog: Send + Sync {
    /// Articles matching `predicate`, optionally restricted to those
    /// currently in storage, banded by length, sorted by length in the given
    /// direction, and truncated to `limit` when present.
    fn find_matching(
        &self,
        predicate: &ArticlePredicate,
        in_storage_only: bool,
        length: LengthFilter,
        order: LengthOrder,
        limit: Option<usize>,
    ) -> Vec<Article>;

    /// Re-hydrate articles by id with full detail. Unknown ids are skipped.
    fn find_by_ids(&self, ids: &[ArticleId]) -> Vec<Article>;
}

impl<S> ArticleCatalog for Arc<S>
where
    S: ArticleCatalog + ?Sized,
{
    fn find_matching(
        &self,
        predicate: &ArticlePredicate,
        in_storage_only: bool,
        length: LengthFilter,
        order: LengthOrder,
        limit: Option<usize>,
    ) -> Vec<Article> {
        (**self).find_matching(predicate, in_storage_only, length, order, limit)
    }

    fn find_by_ids(&self, ids: &[ArticleId]) -> Vec<Article> {
        (**self).find_by_ids(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_band_is_exclusive_at_least_inclusive() {
        assert!(LengthFilter::AtLeast(18.0).admits(18.0));
        assert!(!LengthFilter::AtLeast(18.0).admits(17.99));
        assert!(LengthFilter::Below(18.0).admits(17.99));
        assert!(!LengthFilter::Below(18.0).admits(18.0));
        assert!(LengthFilter::Any.admits(0.0));
    }
}
