//! The search engine: singles first, bundles as a fallback.

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, warn};

use stromlager_articles::{Article, Bundle, SearchQuery, SearchResponse};
use stromlager_core::ArticleId;

use crate::bundle;
use crate::catalog::{ArticleCatalog, LengthFilter, LengthOrder};
use crate::predicate::ArticlePredicate;

/// Combined cap on single items plus bundles in one response.
pub const RESULT_SLOTS: usize = 3;

/// The engine's only failure mode. Malformed queries are rejected before
/// the engine runs (see [`SearchQuery::validate`]).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("no matching items")]
    NoMatch,
}

/// Stateless per-request search over a catalog snapshot.
pub struct SearchEngine<C> {
    catalog: C,
}

impl<C: ArticleCatalog> SearchEngine<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Answer a validated query.
    ///
    /// With no length requirement, returns up to three in-storage matches,
    /// shortest first (prefer not to waste long cable on an
    /// unspecified-length job). With a length requirement, returns up to
    /// three individually sufficient articles, topped up with
    /// same-location bundles of shorter ones when fewer than three exist.
    pub fn search(&self, query: &SearchQuery) -> Result<SearchResponse, SearchError> {
        let predicate = ArticlePredicate::from_query(query);

        if !query.length_matters() {
            let items = self.catalog.find_matching(
                &predicate,
                true,
                LengthFilter::Any,
                LengthOrder::Ascending,
                Some(RESULT_SLOTS),
            );
            if items.is_empty() {
                return Err(SearchError::NoMatch);
            }
            return Ok(SearchResponse::items_only(items));
        }

        let min_length_m = query.min_length_m;
        let items = self.catalog.find_matching(
            &predicate,
            true,
            LengthFilter::AtLeast(min_length_m),
            LengthOrder::Ascending,
            Some(RESULT_SLOTS),
        );
        if items.len() >= RESULT_SLOTS {
            return Ok(SearchResponse::items_only(items));
        }

        // Shortfall pool, longest first; the real ranking happens on the
        // candidate combinations.
        let pool = self.catalog.find_matching(
            &predicate,
            true,
            LengthFilter::Below(min_length_m),
            LengthOrder::Descending,
            None,
        );
        let needed = RESULT_SLOTS - items.len();
        let combos = bundle::assemble(&pool, min_length_m, needed);
        debug!(
            singles = items.len(),
            pool = pool.len(),
            bundles = combos.len(),
            "bundle assembly finished"
        );

        if combos.is_empty() {
            if items.is_empty() {
                return Err(SearchError::NoMatch);
            }
            // Partial single-item results still have value even without a
            // full-length guarantee.
            return Ok(SearchResponse::items_only(items));
        }

        let bundles = self.hydrate_bundles(combos);
        if bundles.is_empty() {
            if items.is_empty() {
                return Err(SearchError::NoMatch);
            }
            return Ok(SearchResponse::items_only(items));
        }

        Ok(SearchResponse { items, bundles })
    }

    /// Re-fetch winning bundle members with full detail.
    fn hydrate_bundles(&self, combos: Vec<Vec<ArticleId>>) -> Vec<Bundle> {
        let mut wanted: Vec<ArticleId> = combos.iter().flatten().copied().collect();
        wanted.sort_unstable();
        wanted.dedup();

        let by_id: HashMap<ArticleId, Article> = self
            .catalog
            .find_by_ids(&wanted)
            .into_iter()
            .map(|a| (a.id, a))
            .collect();

        let mut bundles = Vec::with_capacity(combos.len());
        for combo in combos {
            let members: Vec<Article> = combo
                .iter()
                .filter_map(|id| by_id.get(id).cloned())
                .collect();
            if members.len() != combo.len() {
                // A member vanished between pool read and re-fetch; the
                // snapshot is no longer coherent for this combination.
                warn!(members = combo.len(), found = members.len(), "dropping bundle after re-fetch");
                continue;
            }
            match Bundle::new(members) {
                Ok(bundle) => bundles.push(bundle),
                Err(e) => {
                    warn!(error = %e, "dropping malformed bundle");
                }
            }
        }
        bundles
    }
}
