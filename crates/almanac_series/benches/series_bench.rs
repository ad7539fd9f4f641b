use almanac_series::{ApsisKind, apsis, moon_ecliptic};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn lunar_series_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("series");
    group.bench_function("moon_ecliptic", |b| {
        b.iter(|| moon_ecliptic(black_box(0.182_3)))
    });
    group.bench_function("perigee", |b| {
        b.iter(|| apsis(black_box(240.0), ApsisKind::Perigee))
    });
    group.finish();
}

criterion_group!(benches, lunar_series_bench);
criterion_main!(benches);
