use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use meteomap::{
    point_in_polygon, LatLon, Region, RegionId, RegionRegistry, SeriesStore, TimelineCursor,
    TimelineMode,
};

fn octagon() -> Vec<LatLon> {
    (0..8)
        .map(|i| {
            let angle = i as f64 / 8.0 * std::f64::consts::TAU;
            LatLon(52.5 + angle.cos(), 13.4 + angle.sin())
        })
        .collect()
}

fn two_week_store() -> SeriesStore {
    let n = 336;
    let base = NaiveDate::from_ymd_opt(2026, 8, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let timestamps = (0..n).map(|i| base + Duration::hours(i as i64)).collect();
    let samples: Vec<Option<f64>> = (0..n).map(|i| Some((i % 30) as f64)).collect();
    SeriesStore::new(
        52.5,
        13.4,
        None,
        None,
        timestamps,
        samples.clone(),
        samples.clone(),
        samples.clone(),
        samples,
    )
    .unwrap()
}

fn bench_point_in_polygon(c: &mut Criterion) {
    let polygon = octagon();
    c.bench_function("point_in_polygon", |b| {
        b.iter(|| point_in_polygon(black_box(LatLon(52.7, 13.5)), black_box(&polygon)))
    });
}

fn bench_recompute_all(c: &mut Criterion) {
    let store = two_week_store();
    let mut registry = RegionRegistry::new();
    for i in 0..10 {
        registry.add(Region::new(RegionId(i), octagon(), "#ff6b6b", None));
    }
    let mut cursor = TimelineCursor::new(store.len());
    cursor.set_range(0, store.len() - 1);
    cursor.set_mode(TimelineMode::Range);

    c.bench_function("recompute_all_full_range", |b| {
        b.iter(|| registry.recompute_all(black_box(&store), black_box(&cursor)))
    });
}

criterion_group!(benches, bench_point_in_polygon, bench_recompute_all);
criterion_main!(benches);
