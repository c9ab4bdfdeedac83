//! Predicate construction: one explicit filter value per search request.
//!
//! The six filter dimensions of a query are combined into an
//! [`ArticlePredicate`] that is evaluated uniformly, whether the backing
//! catalog is an in-memory slice or a real database.

use std::collections::{BTreeMap, BTreeSet};

use stromlager_articles::{AmpacityClass, Article, Connector, EquipmentType, SearchQuery, Tag};

/// Numeric rating constraint derived from a query tier.
///
/// The lowest tier of the ladder is a catch-all for everything at or under
/// its boundary, the highest for everything at or above; interior tiers
/// require the exact boundary rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmpacityBound {
    AtMost(u32),
    Exactly(u32),
    AtLeast(u32),
}

impl AmpacityBound {
    pub fn for_class(class: AmpacityClass) -> Self {
        let boundary = class.boundary_amperes();
        match class {
            AmpacityClass::UpTo13 => AmpacityBound::AtMost(boundary),
            AmpacityClass::AtLeast125 => AmpacityBound::AtLeast(boundary),
            _ => AmpacityBound::Exactly(boundary),
        }
    }

    pub fn admits(self, amperes: u32) -> bool {
        match self {
            AmpacityBound::AtMost(boundary) => amperes <= boundary,
            AmpacityBound::Exactly(boundary) => amperes == boundary,
            AmpacityBound::AtLeast(boundary) => amperes >= boundary,
        }
    }
}

/// Conjunctive filter over articles, built once per request.
///
/// Length and the structural in-storage condition are not part of the
/// predicate: the engine varies both per step over one predicate value (see
/// [`ArticleCatalog::find_matching`](crate::catalog::ArticleCatalog)).
#[derive(Debug, Clone, PartialEq)]
pub struct ArticlePredicate {
    equipment_type: EquipmentType,
    ampacity: Option<AmpacityBound>,
    connector: Option<Connector>,
    min_outputs: BTreeMap<Connector, u32>,
    required_tags: BTreeSet<Tag>,
}

impl ArticlePredicate {
    pub fn from_query(query: &SearchQuery) -> Self {
        Self {
            equipment_type: query.equipment_type,
            ampacity: query.ampacity.map(AmpacityBound::for_class),
            connector: query.connector,
            min_outputs: query.sockets.clone(),
            required_tags: query.tags.clone(),
        }
    }

    /// Evaluate all filter dimensions conjunctively.
    pub fn matches(&self, article: &Article) -> bool {
        if article.equipment_type != self.equipment_type {
            return false;
        }
        if let Some(bound) = self.ampacity {
            if !bound.admits(article.ampacity_amperes) {
                return false;
            }
        }
        if let Some(connector) = self.connector {
            if article.connector != Some(connector) {
                return false;
            }
        }
        for (&connector, &min_count) in &self.min_outputs {
            if article.output_count(connector) < min_count {
                return false;
            }
        }
        self.required_tags.is_subset(&article.tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use stromlager_core::{ArticleId, LocationId};

    fn article(equipment_type: EquipmentType, amperes: u32) -> Article {
        let storage = LocationId::new();
        Article {
            id: ArticleId::new(),
            equipment_type,
            ampacity_amperes: amperes,
            connector: None,
            outputs: BTreeMap::new(),
            tags: BTreeSet::new(),
            length_m: 10.0,
            storage_location_id: storage,
            current_location_id: storage,
            storage_section: None,
            created_at: Utc::now(),
        }
    }

    fn query(equipment_type: EquipmentType) -> SearchQuery {
        SearchQuery {
            equipment_type,
            ampacity: None,
            connector: None,
            sockets: BTreeMap::new(),
            tags: BTreeSet::new(),
            min_length_m: 0.0,
        }
    }

    #[test]
    fn type_must_match_exactly() {
        let predicate = ArticlePredicate::from_query(&query(EquipmentType::Kabel));
        assert!(predicate.matches(&article(EquipmentType::Kabel, 16)));
        assert!(!predicate.matches(&article(EquipmentType::Verteiler, 16)));
    }

    #[test]
    fn lowest_tier_admits_anything_at_or_under_boundary() {
        let bound = AmpacityBound::for_class(AmpacityClass::UpTo13);
        assert!(bound.admits(13));
        assert!(bound.admits(10));
        assert!(bound.admits(0));
        assert!(!bound.admits(14));
    }

    #[test]
    fn highest_tier_admits_anything_at_or_above_boundary() {
        let bound = AmpacityBound::for_class(AmpacityClass::AtLeast125);
        assert!(bound.admits(125));
        assert!(bound.admits(400));
        assert!(!bound.admits(124));
    }

    #[test]
    fn interior_tiers_require_exact_boundary() {
        for class in [AmpacityClass::A16, AmpacityClass::A32, AmpacityClass::A63] {
            let bound = AmpacityBound::for_class(class);
            let boundary = class.boundary_amperes();
            assert!(bound.admits(boundary));
            assert!(!bound.admits(boundary - 1));
            assert!(!bound.admits(boundary + 1));
        }
    }

    #[test]
    fn null_ampacity_leaves_rating_unconstrained() {
        let predicate = ArticlePredicate::from_query(&query(EquipmentType::Kabel));
        assert!(predicate.matches(&article(EquipmentType::Kabel, 5)));
        assert!(predicate.matches(&article(EquipmentType::Kabel, 400)));
    }

    #[test]
    fn connector_is_exact_when_present() {
        let mut q = query(EquipmentType::Kabel);
        q.connector = Some(Connector::Cee32);
        let predicate = ArticlePredicate::from_query(&q);

        let mut a = article(EquipmentType::Kabel, 32);
        assert!(!predicate.matches(&a), "connector-less article must not match");

        a.connector = Some(Connector::Cee32);
        assert!(predicate.matches(&a));

        a.connector = Some(Connector::Cee16);
        assert!(!predicate.matches(&a));
    }

    #[test]
    fn missing_output_key_fails_any_positive_minimum() {
        let mut q = query(EquipmentType::Verteiler);
        q.sockets.insert(Connector::T13, 1);
        let predicate = ArticlePredicate::from_query(&q);

        let mut a = article(EquipmentType::Verteiler, 32);
        assert!(!predicate.matches(&a));

        a.outputs.insert(Connector::T13, 1);
        assert!(predicate.matches(&a));

        q.sockets.insert(Connector::T13, 2);
        let predicate = ArticlePredicate::from_query(&q);
        assert!(!predicate.matches(&a));
    }

    #[test]
    fn required_tags_use_and_semantics() {
        let mut q = query(EquipmentType::Verteiler);
        q.tags.insert(Tag::Hauptschalter);
        q.tags.insert(Tag::Zaehler);
        let predicate = ArticlePredicate::from_query(&q);

        let mut a = article(EquipmentType::Verteiler, 32);
        a.tags.insert(Tag::Hauptschalter);
        assert!(!predicate.matches(&a), "one of two required tags is not enough");

        a.tags.insert(Tag::Zaehler);
        assert!(predicate.matches(&a));

        a.tags.insert(Tag::Defekt);
        assert!(predicate.matches(&a), "extra tags on the article are fine");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_tagset() -> impl Strategy<Value = BTreeSet<Tag>> {
            proptest::collection::btree_set(
                prop_oneof![
                    Just(Tag::Zaehler),
                    Just(Tag::Hauptschalter),
                    Just(Tag::Defekt),
                ],
                0..=3,
            )
        }

        proptest! {
            /// Adding a required tag never widens the match set.
            #[test]
            fn tag_narrowing_is_monotonic(
                article_tags in arb_tagset(),
                required in arb_tagset(),
                extra in prop_oneof![
                    Just(Tag::Zaehler),
                    Just(Tag::Hauptschalter),
                    Just(Tag::Defekt),
                ],
            ) {
                let mut a = article(EquipmentType::Box, 16);
                a.tags = article_tags;

                let mut q = query(EquipmentType::Box);
                q.tags = required.clone();
                let before = ArticlePredicate::from_query(&q).matches(&a);

                q.tags.insert(extra);
                let after = ArticlePredicate::from_query(&q).matches(&a);

                prop_assert!(!after || before);
            }

            /// The three tier bounds partition the rating axis consistently.
            #[test]
            fn every_rating_matches_lowest_or_highest_tier_side(amperes in 0u32..=500) {
                let low = AmpacityBound::for_class(AmpacityClass::UpTo13);
                let high = AmpacityBound::for_class(AmpacityClass::AtLeast125);
                prop_assert_eq!(low.admits(amperes), amperes <= 13);
                prop_assert_eq!(high.admits(amperes), amperes >= 125);
            }
        }
    }
}
