use criterion::{Criterion, criterion_group, criterion_main};
use railmap::{
    catalog::StationRecord,
    proximity::{BandSet, classify},
    shared::geo::GeoPoint,
};
use std::hint::black_box;

/// A city-sized grid of stations around the map center, roughly 400 m
/// apart.
fn synthetic_stations(count: usize) -> Vec<StationRecord> {
    (0..count)
        .map(|i| {
            let name = format!("Station {i}");
            let longitude = 80.15 + (i % 64) as f64 * 0.004;
            let latitude = 12.95 + (i / 64) as f64 * 0.004;
            StationRecord {
                id: format!("S{i}").into(),
                normalized_name: name.to_lowercase().into(),
                name: name.into(),
                location: Some(GeoPoint::new(longitude, latitude)),
                ..Default::default()
            }
        })
        .collect()
}

fn classify_city(stations: &[StationRecord], bands: &BandSet) {
    let origin = GeoPoint::new(80.237617, 13.067439);
    let _ = black_box(classify(&origin, stations, bands));
}

fn criterion_benchmark(c: &mut Criterion) {
    let bands = BandSet::default();

    let stations = synthetic_stations(2_000);
    c.bench_function("classify 2k stations", |b| {
        b.iter(|| classify_city(&stations, &bands))
    });

    let stations = synthetic_stations(20_000);
    c.bench_function("classify 20k stations", |b| {
        b.iter(|| classify_city(&stations, &bands))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
