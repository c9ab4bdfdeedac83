use chrono::Utc;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::{BTreeMap, BTreeSet};

use stromlager_articles::{Article, Connector, EquipmentType};
use stromlager_core::{ArticleId, LocationId};
use stromlager_search::bundle;

fn shortfall_pool(locations: usize, per_location: usize, min_length_m: f64) -> Vec<Article> {
    let location_ids: Vec<LocationId> = (1..=locations as u128)
        .map(|n| LocationId::from_uuid(uuid::Uuid::from_u128(n)))
        .collect();

    let mut pool = Vec::with_capacity(locations * per_location);
    for (li, &location) in location_ids.iter().enumerate() {
        for i in 0..per_location {
            // Spread lengths below the minimum so plenty of 2/3-combos qualify.
            let length_m = min_length_m * (0.3 + 0.65 * (i as f64 / per_location as f64));
            pool.push(Article {
                id: ArticleId::from_uuid(uuid::Uuid::from_u128(
                    (li * per_location + i + 1) as u128,
                )),
                equipment_type: EquipmentType::Kabel,
                ampacity_amperes: 16,
                connector: Some(Connector::Cee16),
                outputs: BTreeMap::new(),
                tags: BTreeSet::new(),
                length_m,
                storage_location_id: location,
                current_location_id: location,
                storage_section: None,
                created_at: Utc::now(),
            });
        }
    }
    pool
}

fn bench_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("bundle_assemble");
    for per_location in [8usize, 16, 32] {
        let pool = shortfall_pool(4, per_location, 50.0);
        group.bench_with_input(
            BenchmarkId::from_parameter(per_location),
            &pool,
            |b, pool| b.iter(|| bundle::assemble(pool, 50.0, 3)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_assemble);
criterion_main!(benches);
