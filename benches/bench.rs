// Criterion benchmarks for Materia Search

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use materia_search::core::{distance::distance_miles, filter_and_sort, geo::resolve_zip};
use materia_search::models::{Coordinates, FilterCriteria, Listing, LocationData, SortKey};

const ZIPS: &[&str] = &["49503", "48201", "60601", "98101", "30301", "75201", "10001", "90001"];

fn create_listing(id: usize) -> Listing {
    let zip = ZIPS[id % ZIPS.len()];
    Listing {
        id: id.to_string(),
        title: format!("Listing {}", id),
        description: "Salvaged structural lumber, mixed lengths".to_string(),
        category: if id % 2 == 0 { "Lumber" } else { "Masonry" }.to_string(),
        condition: "Good".to_string(),
        price: 50.0 + (id % 40) as f64 * 25.0,
        bulk_pricing: vec![],
        trade_available: id % 5 == 0,
        verified: id % 3 == 0,
        location: "Somewhere, MI".to_string(),
        location_data: Some(LocationData {
            city: None,
            state: None,
            zip_code: Some(zip.to_string()),
        }),
        posted_date: Utc::now(),
        seller_id: None,
        image_urls: vec![],
    }
}

fn create_criteria() -> FilterCriteria {
    FilterCriteria {
        category: Some("Lumber".to_string()),
        price_range: Some((0.0, 800.0)),
        user_coordinates: Some(Coordinates {
            lat: 42.9634,
            lng: -85.6681,
        }),
        max_distance_miles: Some(500.0),
        sort_by: Some(SortKey::Distance),
        ..Default::default()
    }
}

fn bench_distance(c: &mut Criterion) {
    c.bench_function("distance_miles", |b| {
        b.iter(|| {
            distance_miles(
                black_box(42.9634),
                black_box(-85.6681),
                black_box(41.8781),
                black_box(-87.6298),
            )
        });
    });
}

fn bench_resolve_zip(c: &mut Criterion) {
    c.bench_function("resolve_zip", |b| {
        b.iter(|| resolve_zip(black_box("49503")));
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let criteria = create_criteria();

    let mut group = c.benchmark_group("pipeline");

    for listing_count in [10, 50, 100, 500, 1000].iter() {
        let listings: Vec<Listing> = (0..*listing_count).map(create_listing).collect();

        group.bench_with_input(
            BenchmarkId::new("filter_and_sort", listing_count),
            listing_count,
            |b, _| {
                b.iter(|| filter_and_sort(black_box(listings.clone()), black_box(&criteria)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_distance, bench_resolve_zip, bench_pipeline);

criterion_main!(benches);
