//! # Reduction Benchmarks
//!
//! Partial trace and von Neumann entropy over the exterior half of n
//! Bell pairs.
//!
//! Run: `cargo bench --bench reduction_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hawking_reduction::{ReductionEngine, von_neumann_entropy};
use hawking_state::{StateEngine, exterior_indices};

fn bell_pairs(n: usize) -> StateEngine {
    let mut engine = StateEngine::initialize(2 * n).unwrap();
    for i in 0..n {
        engine.create_pair(i).unwrap();
    }
    engine
}

fn bench_partial_trace(c: &mut Criterion) {
    let mut group = c.benchmark_group("partial_trace");
    let reduction = ReductionEngine::new();

    for n in [2, 4, 6, 8] {
        let engine = bell_pairs(n);
        let exterior = exterior_indices(n);

        group.bench_with_input(BenchmarkId::new("exterior", n), &n, |b, _| {
            b.iter(|| black_box(reduction.partial_trace(engine.state(), &exterior).unwrap()))
        });
    }

    group.finish();
}

fn bench_entropy(c: &mut Criterion) {
    let mut group = c.benchmark_group("von_neumann_entropy");
    let reduction = ReductionEngine::new();

    for n in [2, 4, 6] {
        let engine = bell_pairs(n);
        let rho = reduction.partial_trace(engine.state(), &exterior_indices(n)).unwrap();

        group.bench_with_input(BenchmarkId::new("exterior", n), &n, |b, _| {
            b.iter(|| black_box(von_neumann_entropy(&rho).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_partial_trace, bench_entropy);
criterion_main!(benches);
