//! # State Engine Benchmarks
//!
//! Measures gate application cost as the register grows: single-qubit
//! broadcast, fused rotation, CNOT and register extension.
//!
//! Run: `cargo bench --bench state_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hawking_state::{Hadamard, StateEngine};

fn paired(num_qubits: usize) -> StateEngine {
    let mut engine = StateEngine::initialize(num_qubits).unwrap();
    for i in 0..num_qubits / 2 {
        engine.create_pair(i).unwrap();
    }
    engine
}

fn bench_single_qubit(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_qubit");

    for m in [4, 8, 12, 16] {
        let mut engine = paired(m);

        group.bench_with_input(BenchmarkId::new("hadamard", m), &m, |b, _| {
            b.iter(|| engine.apply_gate(black_box(0), &Hadamard).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("rotation", m), &m, |b, _| {
            b.iter(|| engine.apply_rotation(black_box(m - 2), 0.3, 0.3).unwrap())
        });
    }

    group.finish();
}

fn bench_interaction(c: &mut Criterion) {
    let mut group = c.benchmark_group("interaction");

    for m in [4, 8, 12, 16] {
        let mut engine = paired(m);
        group.bench_with_input(BenchmarkId::new("cnot_rz", m), &m, |b, _| {
            b.iter(|| engine.apply_entangling_interaction(0, 2, black_box(0.1)).unwrap())
        });
    }

    group.finish();
}

fn bench_extend(c: &mut Criterion) {
    let mut group = c.benchmark_group("extend_register");

    for m in [4, 8, 12] {
        let engine = paired(m);
        group.bench_with_input(BenchmarkId::new("emit_pair", m), &m, |b, _| {
            b.iter(|| {
                let mut engine = engine.clone();
                black_box(engine.emit_pair().unwrap())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_qubit, bench_interaction, bench_extend);
criterion_main!(benches);
