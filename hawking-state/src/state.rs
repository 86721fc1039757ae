//! Vetor de estado denso
//!
//! Convenção little-endian: o qubit `q` é o bit `q` do índice da base.
//! Um registrador de zero qubits é o escalar `[1]`.

use num_complex::Complex64;
use crate::error::{StateError, StateResult};

/// Maior registrador aceito (2^30 amplitudes complexas = 16 GiB)
pub const MAX_QUBITS: usize = 30;

/// Tolerância da invariante de normalização
pub const NORM_TOLERANCE: f64 = 1e-9;

/// Amplitudes de um estado puro sobre `num_qubits` qubits
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    amplitudes: Vec<Complex64>,
    num_qubits: usize,
}

impl StateVector {
    /// Estado |0…0⟩ com `num_qubits` qubits
    pub fn zero(num_qubits: usize) -> StateResult<Self> {
        check_size(num_qubits)?;

        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
        amplitudes[0] = Complex64::new(1.0, 0.0);

        Ok(Self { amplitudes, num_qubits })
    }

    /// Registrador sem qubits: o escalar `[1]`
    pub fn empty() -> Self {
        Self {
            amplitudes: vec![Complex64::new(1.0, 0.0)],
            num_qubits: 0,
        }
    }

    /// Constrói a partir de amplitudes arbitrárias (comprimento potência de 2, normalizadas)
    pub fn from_amplitudes(amplitudes: Vec<Complex64>) -> StateResult<Self> {
        let len = amplitudes.len();
        if !len.is_power_of_two() {
            return Err(StateError::InvalidSize(format!(
                "{len} amplitudes is not a power of two"
            )));
        }

        let num_qubits = len.trailing_zeros() as usize;
        check_size(num_qubits)?;

        let state = Self { amplitudes, num_qubits };
        state.check_normalized()?;
        Ok(state)
    }

    /// Número de qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Dimensão do espaço (2^m)
    #[inline]
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Amplitudes em ordem de índice da base
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    #[inline]
    pub(crate) fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        &mut self.amplitudes
    }

    /// Amplitude de um estado da base
    pub fn amplitude(&self, basis: usize) -> Option<Complex64> {
        self.amplitudes.get(basis).copied()
    }

    /// Probabilidade de medir o estado da base
    pub fn probability(&self, basis: usize) -> f64 {
        self.amplitude(basis).map_or(0.0, |a| a.norm_sqr())
    }

    /// Σ|a|²
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Probabilidade de o qubit estar em |1⟩
    pub fn excitation(&self, qubit: usize) -> f64 {
        let bit = 1usize << qubit;
        self.amplitudes
            .iter()
            .enumerate()
            .filter(|(i, _)| i & bit != 0)
            .map(|(_, a)| a.norm_sqr())
            .sum()
    }

    /// Verifica Σ|a|² = 1 dentro de [`NORM_TOLERANCE`]
    pub fn check_normalized(&self) -> StateResult<()> {
        let norm = self.norm_sqr();
        if (norm - 1.0).abs() > NORM_TOLERANCE || !norm.is_finite() {
            return Err(StateError::NumericDivergence(norm));
        }
        Ok(())
    }

    /// Embute o estado em um registrador maior: |ψ⟩ ⊗ |0…0⟩
    ///
    /// Os novos qubits são os bits mais significativos, então cada amplitude
    /// antiga permanece no mesmo índice; o restante do buffer novo é zero.
    pub(crate) fn embed(&self, extra_qubits: usize) -> StateResult<Self> {
        let num_qubits = self
            .num_qubits
            .checked_add(extra_qubits)
            .ok_or_else(|| StateError::InvalidSize("register size overflow".into()))?;
        check_size(num_qubits)?;

        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
        amplitudes[..self.amplitudes.len()].copy_from_slice(&self.amplitudes);

        Ok(Self { amplitudes, num_qubits })
    }
}

fn check_size(num_qubits: usize) -> StateResult<()> {
    if num_qubits > MAX_QUBITS {
        return Err(StateError::InvalidSize(format!(
            "{num_qubits} qubits exceeds the maximum of {MAX_QUBITS}"
        )));
    }
    Ok(())
}
