//! Benchmarks for mock inventory generation and dashboard assembly
//!
//! Run with: cargo bench

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use medilabel::dashboard::{build_dashboard, DashboardOptions, WidgetTheme};
use medilabel::inventory::generate_medication_rows_with;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_generator(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator");
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    for size in [10, 100, 500] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("rows_{}", size), |b| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| generate_medication_rows_with(&mut rng, now, black_box(size)))
        });
    }

    group.finish();
}

fn bench_dashboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard");

    for theme in [WidgetTheme::Garden, WidgetTheme::Classic] {
        let options = DashboardOptions {
            theme,
            ..Default::default()
        };

        group.bench_function(format!("build_{:?}", theme).to_lowercase(), |b| {
            b.iter(|| build_dashboard(black_box(&options)))
        });
    }

    group.bench_function("serialize_layout", |b| {
        let layout = build_dashboard(&DashboardOptions::default());
        b.iter(|| serde_json::to_string(black_box(&layout)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_generator, bench_dashboard);
criterion_main!(benches);
