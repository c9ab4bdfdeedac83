use std::collections::HashMap;
use std::sync::RwLock;

use stromlager_articles::Article;
use stromlager_core::ArticleId;
use stromlager_search::{ArticleCatalog, ArticlePredicate, LengthFilter, LengthOrder};

/// In-memory article store for the API and tests.
///
/// Safe for concurrent readers; writes take the lock exclusively. Equal
/// lengths are tie-broken by ascending id so limited, ordered reads stay
/// reproducible.
#[derive(Debug, Default)]
pub struct InMemoryArticleStore {
    inner: RwLock<HashMap<ArticleId, Article>>,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Insert or replace an article.
    pub fn upsert(&self, article: Article) {
        self.inner
            .write()
            .expect("article store lock poisoned")
            .insert(article.id, article);
    }

    pub fn remove(&self, id: &ArticleId) -> Option<Article> {
        self.inner
            .write()
            .expect("article store lock poisoned")
            .remove(id)
    }

    pub fn get(&self, id: &ArticleId) -> Option<Article> {
        self.inner
            .read()
            .expect("article store lock poisoned")
            .get(id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .expect("article store lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ArticleCatalog for InMemoryArticleStore {
    fn find_matching(
        &self,
        predicate: &ArticlePredicate,
        in_storage_only: bool,
        length: LengthFilter,
        order: LengthOrder,
        limit: Option<usize>,
    ) -> Vec<Article> {
        let guard = self.inner.read().expect("article store lock poisoned");
        let mut matches: Vec<Article> = guard
            .values()
            .filter(|a| !in_storage_only || a.is_in_storage())
            .filter(|a| length.admits(a.length_m))
            .filter(|a| predicate.matches(a))
            .cloned()
            .collect();
        drop(guard);

        matches.sort_by(|a, b| {
            let by_length = match order {
                LengthOrder::Ascending => a.length_m.total_cmp(&b.length_m),
                LengthOrder::Descending => b.length_m.total_cmp(&a.length_m),
            };
            by_length.then_with(|| a.id.cmp(&b.id))
        });

        if let Some(limit) = limit {
            matches.truncate(limit);
        }
        matches
    }

    fn find_by_ids(&self, ids: &[ArticleId]) -> Vec<Article> {
        let guard = self.inner.read().expect("article store lock poisoned");
        ids.iter().filter_map(|id| guard.get(id).cloned()).collect()
    }
}
