//! Testes integrados para hawking-reduction

use crate::*;
use hawking_state::{Complex64, Hadamard, PauliX, StateEngine, StateVector, exterior_indices};

fn bell_pairs(n: usize) -> StateEngine {
    let mut engine = StateEngine::initialize(2 * n).unwrap();
    for i in 0..n {
        engine.create_pair(i).unwrap();
    }
    engine
}

fn scrambled(n: usize) -> StateEngine {
    let mut engine = bell_pairs(n);
    for t in 0..4 {
        for i in 0..n {
            engine.apply_rotation(2 * i, 0.3 * t as f64, 0.3 * t as f64).unwrap();
        }
        for i in 0..n.saturating_sub(1) {
            engine.apply_entangling_interaction(2 * i, 2 * i + 2, 0.17 * (i + t) as f64).unwrap();
        }
    }
    engine
}

fn assert_close(a: &DensityMatrix, b: &DensityMatrix) {
    assert_eq!(a.dim(), b.dim());
    for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
        assert!((x - y).norm() < 1e-12, "{x} != {y}");
    }
}

#[test]
fn test_bell_pair_half_is_maximally_mixed() {
    let engine = bell_pairs(1);

    for retained in [[0], [1]] {
        let rho = partial_trace(engine.state(), &retained).unwrap();
        assert_close(&rho, &DensityMatrix::maximally_mixed(1));

        let entropy = von_neumann_entropy(&rho).unwrap();
        assert!((entropy - 1.0).abs() < 1e-9);
    }
}

#[test]
fn test_full_trace_is_pure_projector() {
    let engine = scrambled(2);
    let all: Vec<usize> = (0..4).collect();

    let rho = partial_trace(engine.state(), &all).unwrap();
    assert_close(&rho, &DensityMatrix::from_pure_state(engine.state()));
    assert!((rho.purity() - 1.0).abs() < 1e-9);
    assert_eq!(von_neumann_entropy(&rho).unwrap(), 0.0);
}

#[test]
fn test_product_state_has_zero_entropy() {
    let mut engine = StateEngine::initialize(3).unwrap();
    engine.apply_gate(0, &Hadamard).unwrap();
    engine.apply_gate(2, &PauliX).unwrap();

    let entropy = entanglement_entropy(engine.state(), &[0, 1]).unwrap();
    assert_eq!(entropy, 0.0);
}

#[test]
fn test_exterior_entropy_counts_bell_pairs() {
    // Pares independentes: cada metade exterior contribui 1 bit
    for n in 1..=4 {
        let engine = bell_pairs(n);
        let entropy = entanglement_entropy(engine.state(), &exterior_indices(n)).unwrap();
        assert!((entropy - n as f64).abs() < 1e-9, "n = {n}: {entropy}");
    }
}

#[test]
fn test_bell_pair_unaffected_by_spectator_qubits() {
    let mut engine = StateEngine::initialize(4).unwrap();
    engine.create_pair(1).unwrap();
    engine.apply_gate(0, &Hadamard).unwrap();

    let rho = partial_trace(engine.state(), &[2]).unwrap();
    assert_close(&rho, &DensityMatrix::maximally_mixed(1));
}

#[test]
fn test_retained_order_defines_basis() {
    // |q0 = 1, q1 = 0⟩ = índice 0b01
    let mut engine = StateEngine::initialize(2).unwrap();
    engine.apply_gate(0, &PauliX).unwrap();

    let forward = partial_trace(engine.state(), &[0, 1]).unwrap();
    let reversed = partial_trace(engine.state(), &[1, 0]).unwrap();

    // Ordem [0, 1]: q0 é o bit menos significativo → ρ[1,1] = 1
    assert!((forward.get(0b01, 0b01).re - 1.0).abs() < 1e-12);
    // Ordem [1, 0]: q0 vira o bit 1 → ρ[2,2] = 1
    assert!((reversed.get(0b10, 0b10).re - 1.0).abs() < 1e-12);
}

#[test]
fn test_complementary_subsystems_share_entropy() {
    let engine = scrambled(3);
    let exterior = exterior_indices(3);
    let interior = complement(&exterior, 6);

    let s_ext = entanglement_entropy(engine.state(), &exterior).unwrap();
    let s_int = entanglement_entropy(engine.state(), &interior).unwrap();
    assert!((s_ext - s_int).abs() < 1e-8);
}

#[test]
fn test_reduced_matrix_invariants() {
    let engine = scrambled(3);
    let reduction = ReductionEngine::new();

    for retained in [vec![0], vec![0, 2], vec![4, 0, 2], vec![1, 3, 5], vec![5, 0]] {
        let rho = reduction.partial_trace(engine.state(), &retained).unwrap();
        let k = retained.len();

        assert_eq!(rho.dim(), 1 << k);
        assert!(rho.is_hermitian(1e-12));
        assert!((rho.trace().re - 1.0).abs() < 1e-9);

        let purity = rho.purity();
        assert!(purity <= 1.0 + 1e-9);
        assert!(purity >= 1.0 / (1 << k) as f64 - 1e-9);

        for lambda in rho.eigenvalues().unwrap() {
            assert!(lambda > -1e-9 && lambda < 1.0 + 1e-9);
        }

        let entropy = reduction.von_neumann_entropy(&rho).unwrap();
        assert!(entropy >= 0.0);
        assert!(entropy <= k as f64 + 1e-9);
    }
}

#[test]
fn test_invalid_subset_out_of_range() {
    let engine = bell_pairs(1);
    assert!(matches!(
        partial_trace(engine.state(), &[2]),
        Err(ReductionError::InvalidSubset(_))
    ));
}

#[test]
fn test_invalid_subset_duplicates() {
    let engine = bell_pairs(2);
    assert!(matches!(
        partial_trace(engine.state(), &[0, 2, 0]),
        Err(ReductionError::InvalidSubset(_))
    ));
}

#[test]
fn test_empty_subset() {
    let engine = bell_pairs(2);

    let rho = partial_trace(engine.state(), &[]).unwrap();
    assert_eq!(rho.dim(), 1);
    assert!((rho.get(0, 0).re - 1.0).abs() < 1e-12);
    assert_eq!(von_neumann_entropy(&rho).unwrap(), 0.0);

    assert_eq!(entanglement_entropy(engine.state(), &[]).unwrap(), 0.0);
}

#[test]
fn test_partially_entangled_state() {
    // cos(a)|00⟩ + sin(a)|11⟩ → espectro {cos², sin²}
    let a: f64 = 0.4;
    let zero = Complex64::new(0.0, 0.0);
    let state = StateVector::from_amplitudes(vec![
        Complex64::new(a.cos(), 0.0),
        zero,
        zero,
        Complex64::new(a.sin(), 0.0),
    ])
    .unwrap();

    let p = a.cos().powi(2);
    let expected = -p * p.log2() - (1.0 - p) * (1.0 - p).log2();
    let entropy = entanglement_entropy(&state, &[1]).unwrap();
    assert!((entropy - expected).abs() < 1e-9);
}

#[test]
fn test_custom_cutoff() {
    let config = ReductionConfig {
        tolerance: 1e-9,
        eigen_cutoff: 0.3,
    };
    let reduction = ReductionEngine::with_config(config);

    let rho = DensityMatrix::new(
        2,
        vec![
            Complex64::new(0.8, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.2, 0.0),
        ],
    )
    .unwrap();

    // λ = 0.2 descartado pelo cutoff
    let entropy = reduction.von_neumann_entropy(&rho).unwrap();
    let expected = -0.8 * 0.8f64.log2();
    assert!((entropy - expected).abs() < 1e-9);
}
