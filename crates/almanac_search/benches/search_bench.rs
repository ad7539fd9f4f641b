use chrono::{NaiveDate, TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use almanac_core::{AlmanacConfig, GeoPosition};
use almanac_search::{
    moon_illumination, moon_rise_set, next_lunar_eclipse, next_solar_eclipse, perigee_events,
    solar_day_events,
};

fn riseset_bench(c: &mut Criterion) {
    let day = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
    let position = GeoPosition::new(51.48, 0.0);
    let config = AlmanacConfig::default();

    let mut group = c.benchmark_group("search_riseset");
    group.bench_function("solar_day_events", |b| {
        b.iter(|| solar_day_events(black_box(day), black_box(&position), &config, None))
    });
    group.bench_function("moon_rise_set", |b| {
        b.iter(|| moon_rise_set(black_box(day), black_box(&position), &config, None))
    });
    group.finish();
}

fn lunar_bench(c: &mut Criterion) {
    let t = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
    let offset = chrono::FixedOffset::east_opt(0).unwrap();

    let mut group = c.benchmark_group("search_lunar");
    group.bench_function("moon_illumination", |b| {
        b.iter(|| moon_illumination(black_box(&t), offset))
    });
    group.bench_function("perigee_events", |b| b.iter(|| perigee_events(black_box(&t))));
    group.finish();
}

fn eclipse_bench(c: &mut Criterion) {
    let t = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
    let position = GeoPosition::new(40.71, -74.01);
    let config = AlmanacConfig::default();
    // Generate the century table outside the timed loop.
    let _ = next_solar_eclipse(&t, &position, &config);

    let mut group = c.benchmark_group("search_eclipse");
    group.sample_size(20);
    group.bench_function("next_solar_eclipse", |b| {
        b.iter(|| next_solar_eclipse(black_box(&t), black_box(&position), &config))
    });
    group.bench_function("next_lunar_eclipse", |b| {
        b.iter(|| next_lunar_eclipse(black_box(&t), black_box(&position), &config))
    });
    group.finish();
}

criterion_group!(benches, riseset_bench, lunar_bench, eclipse_bench);
criterion_main!(benches);
