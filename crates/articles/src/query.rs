use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use stromlager_core::{DomainError, DomainResult};

use crate::article::{AmpacityClass, Article, Connector, EquipmentType, Tag};

/// Structured search request for usable equipment.
///
/// JSON field names follow the legacy request body (`type`, `sockets`,
/// `length`, ...). A `length` of 0 means length is irrelevant and must be
/// ignored entirely, not treated as a real constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(rename = "type")]
    pub equipment_type: EquipmentType,
    /// Rating tier, or `None` for "any".
    #[serde(default)]
    pub ampacity: Option<AmpacityClass>,
    /// Plug type, or `None` for "any".
    #[serde(default)]
    pub connector: Option<Connector>,
    /// Minimum output-socket counts per connector type.
    #[serde(default)]
    pub sockets: BTreeMap<Connector, u32>,
    /// Every listed tag must be present on a match (AND semantics).
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
    /// Minimum combined length in metres; 0 disables the length dimension.
    #[serde(rename = "length")]
    pub min_length_m: f64,
}

impl SearchQuery {
    /// Validate well-formedness. Runs at the request boundary, before the
    /// search engine; the engine itself assumes a validated query.
    pub fn validate(&self) -> DomainResult<()> {
        if !self.min_length_m.is_finite() {
            return Err(DomainError::validation("length must be a finite number"));
        }
        if self.min_length_m < 0.0 {
            return Err(DomainError::validation("length cannot be negative"));
        }
        Ok(())
    }

    /// Whether length participates in matching at all.
    pub fn length_matters(&self) -> bool {
        self.min_length_m > 0.0
    }
}

/// A same-location group of 2–3 shorter articles whose combined length
/// covers a shortfall against the requested minimum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bundle {
    articles: Vec<Article>,
}

impl Bundle {
    /// Bundles hold exactly two or three articles.
    pub fn new(articles: Vec<Article>) -> DomainResult<Self> {
        if !(2..=3).contains(&articles.len()) {
            return Err(DomainError::validation(
                "a bundle must contain two or three articles",
            ));
        }
        Ok(Self { articles })
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn total_length_m(&self) -> f64 {
        self.articles.iter().map(|a| a.length_m).sum()
    }
}

/// Outcome of a successful search.
///
/// `bundles` is only ever populated when fewer than three sufficient single
/// items exist for a positive length requirement; it is omitted from the
/// JSON when empty (legacy responses carry no `bundles` key in that case).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub items: Vec<Article>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bundles: Vec<Bundle>,
}

impl SearchResponse {
    pub fn items_only(items: Vec<Article>) -> Self {
        Self {
            items,
            bundles: Vec::new(),
        }
    }
}
