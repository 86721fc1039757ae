//! # Evolution Benchmarks
//!
//! End-to-end runs of both driver modes with a fixed seed.
//!
//! Run: `cargo bench --bench evolution_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hawking_evolution::EntropyEvolutionDriver;

fn bench_fixed_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_schedule");
    group.sample_size(20);

    for max_pairs in [2, 4, 6] {
        group.bench_with_input(BenchmarkId::new("timesteps_5", max_pairs), &max_pairs, |b, &n| {
            b.iter(|| {
                let mut driver = EntropyEvolutionDriver::seeded(42);
                black_box(driver.run_fixed_schedule(n, 5).unwrap())
            })
        });
    }

    group.finish();
}

fn bench_continuous(c: &mut Criterion) {
    let mut group = c.benchmark_group("continuous_emission");
    group.sample_size(20);

    for total_time in [8, 12] {
        group.bench_with_input(BenchmarkId::new("rate_0.5", total_time), &total_time, |b, &t| {
            b.iter(|| {
                let mut driver = EntropyEvolutionDriver::seeded(42);
                black_box(driver.run_continuous_emission(t, 0.5).unwrap())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fixed_schedule, bench_continuous);
criterion_main!(benches);
