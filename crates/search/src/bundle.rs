//! Bundle candidate generation and greedy selection.
//!
//! Works on the shortfall pool: in-storage articles that match the
//! predicate but are individually too short for the requested minimum
//! length. Combinations never mix storage locations, since a bundle must be
//! physically collectible from one place.
//!
//! Selection is deliberately a minimal-local-overrun greedy cover, not an
//! exact set-partition optimizer. That approximation is part of the
//! engine's observable contract and must stay reproducible.

use std::collections::{BTreeMap, HashSet};

use stromlager_articles::Article;
use stromlager_core::{ArticleId, LocationId};

/// One qualifying combination, before selection.
#[derive(Debug, Clone)]
struct Candidate {
    member_ids: Vec<ArticleId>,
    overrun_m: f64,
    /// Smallest member id, the final tie-break key.
    min_member_id: ArticleId,
}

/// Build up to `needed` non-overlapping bundles from `pool`.
///
/// Every 2- and 3-article combination per storage location whose summed
/// length reaches `min_length_m` becomes a candidate; candidates are ranked
/// by ascending overrun (tie-break: smaller bundle first, then ascending
/// smallest member id) and accepted greedily, first fit, skipping any
/// candidate that reuses an already-accepted article.
///
/// The enumeration is exhaustive per location. Shortfall pools are small in
/// practice; revisit with a bounded formulation before reusing this at
/// larger scale.
pub fn assemble(pool: &[Article], min_length_m: f64, needed: usize) -> Vec<Vec<ArticleId>> {
    if needed == 0 || pool.len() < 2 {
        return Vec::new();
    }

    // BTreeMap keeps location iteration deterministic.
    let mut by_location: BTreeMap<LocationId, Vec<&Article>> = BTreeMap::new();
    for article in pool {
        by_location
            .entry(article.storage_location_id)
            .or_default()
            .push(article);
    }

    let mut candidates: Vec<Candidate> = Vec::new();
    for group in by_location.values_mut() {
        group.sort_by(|a, b| {
            b.length_m
                .total_cmp(&a.length_m)
                .then_with(|| a.id.cmp(&b.id))
        });

        for i in 0..group.len() {
            let first = group[i];
            for j in (i + 1)..group.len() {
                let second = group[j];

                let two_sum = first.length_m + second.length_m;
                if two_sum >= min_length_m {
                    candidates.push(Candidate {
                        member_ids: vec![first.id, second.id],
                        overrun_m: two_sum - min_length_m,
                        min_member_id: first.id.min(second.id),
                    });
                }

                for k in (j + 1)..group.len() {
                    let third = group[k];
                    let three_sum = two_sum + third.length_m;
                    if three_sum >= min_length_m {
                        candidates.push(Candidate {
                            member_ids: vec![first.id, second.id, third.id],
                            overrun_m: three_sum - min_length_m,
                            min_member_id: first.id.min(second.id).min(third.id),
                        });
                    }
                }
            }
        }
    }

    candidates.sort_by(|a, b| {
        a.overrun_m
            .total_cmp(&b.overrun_m)
            .then_with(|| a.member_ids.len().cmp(&b.member_ids.len()))
            .then_with(|| a.min_member_id.cmp(&b.min_member_id))
    });

    let mut accepted: Vec<Vec<ArticleId>> = Vec::new();
    let mut used: HashSet<ArticleId> = HashSet::new();
    for candidate in candidates {
        if accepted.len() >= needed {
            break;
        }
        if candidate.member_ids.iter().any(|id| used.contains(id)) {
            continue;
        }
        used.extend(candidate.member_ids.iter().copied());
        accepted.push(candidate.member_ids);
    }

    accepted
}
