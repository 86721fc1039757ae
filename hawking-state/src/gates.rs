//! # Quantum Gates — Portas Quânticas de um qubit
//!
//! Matrizes 2x2 aplicadas pelo [`StateEngine`](crate::StateEngine) via
//! expansão tensorial (pares de amplitudes que diferem só no bit do qubit).
//!
//! Só o necessário para criar pares e evoluí-los: H, X, Ry e Rz.

use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Tolerância de `M·M† = I` antes de aplicar uma matriz
pub const UNITARY_TOLERANCE: f64 = 1e-10;

/// Matriz 2x2 complexa para gates single-qubit
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix2x2 {
    /// Elementos: [[a, b], [c, d]]
    pub elements: [[Complex64; 2]; 2],
}

impl Matrix2x2 {
    pub const fn new(elements: [[Complex64; 2]; 2]) -> Self {
        Self { elements }
    }

    /// Aplica a um par de amplitudes [alpha, beta]
    #[inline]
    pub fn apply(&self, state: [Complex64; 2]) -> [Complex64; 2] {
        let [alpha, beta] = state;
        let [[a, b], [c, d]] = self.elements;

        [a * alpha + b * beta, c * alpha + d * beta]
    }

    /// `self · other` (aplica `other` primeiro)
    pub fn mul(&self, other: &Matrix2x2) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        let [[e, f], [g, h]] = other.elements;

        Matrix2x2::new([
            [a * e + b * g, a * f + b * h],
            [c * e + d * g, c * f + d * h],
        ])
    }

    /// Maior desvio de `M·M†` em relação à identidade
    pub fn unitarity_error(&self) -> f64 {
        let [[a, b], [c, d]] = self.elements;

        // M·M† = [[|a|²+|b|², a c̄ + b d̄], [c ā + d b̄, |c|²+|d|²]]
        let top = (a.norm_sqr() + b.norm_sqr() - 1.0).abs();
        let bottom = (c.norm_sqr() + d.norm_sqr() - 1.0).abs();
        let off = (a * c.conj() + b * d.conj()).norm();

        top.max(bottom).max(off)
    }

    /// Verifica `M·M† = I` dentro da tolerância
    pub fn is_unitary(&self, tolerance: f64) -> bool {
        self.unitarity_error() <= tolerance
    }
}

/// Porta de um qubit descrita por sua matriz
pub trait QuantumGate {
    fn matrix(&self) -> Matrix2x2;
}

/// Porta Hadamard: cria superposição
#[derive(Clone, Copy, Debug, Default)]
pub struct Hadamard;

impl QuantumGate for Hadamard {
    fn matrix(&self) -> Matrix2x2 {
        let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
        Matrix2x2::new([[h, h], [h, -h]])
    }
}

/// Porta Pauli-X (NOT quântico)
#[derive(Clone, Copy, Debug, Default)]
pub struct PauliX;

impl QuantumGate for PauliX {
    fn matrix(&self) -> Matrix2x2 {
        Matrix2x2::new([[ZERO, ONE], [ONE, ZERO]])
    }
}

/// Rotação em Y
#[derive(Clone, Copy, Debug)]
pub struct RotationY {
    pub theta: f64,
}

impl RotationY {
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }
}

impl QuantumGate for RotationY {
    fn matrix(&self) -> Matrix2x2 {
        let c = (self.theta / 2.0).cos();
        let s = (self.theta / 2.0).sin();
        Matrix2x2::new([
            [Complex64::new(c, 0.0), Complex64::new(-s, 0.0)],
            [Complex64::new(s, 0.0), Complex64::new(c, 0.0)],
        ])
    }
}

/// Rotação em Z: diag(e^{-iθ/2}, e^{iθ/2})
#[derive(Clone, Copy, Debug)]
pub struct RotationZ {
    pub theta: f64,
}

impl RotationZ {
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }
}

impl QuantumGate for RotationZ {
    fn matrix(&self) -> Matrix2x2 {
        let half = self.theta / 2.0;
        Matrix2x2::new([
            [Complex64::from_polar(1.0, -half), ZERO],
            [ZERO, Complex64::from_polar(1.0, half)],
        ])
    }
}
