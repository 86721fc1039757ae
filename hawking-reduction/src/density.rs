//! Matriz densidade reduzida

use hawking_state::StateVector;
use nalgebra::DMatrix;
use num_complex::Complex64;
use crate::error::{ReductionError, ReductionResult};

/// Matriz densidade `2^k × 2^k`, row-major
///
/// Derivada por medição e consumida em seguida pelo cálculo de entropia.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityMatrix {
    dim: usize,
    data: Vec<Complex64>,
}

impl DensityMatrix {
    /// Cria a partir de dados row-major (`data.len()` = dim²)
    pub fn new(dim: usize, data: Vec<Complex64>) -> ReductionResult<Self> {
        if data.len() != dim * dim {
            return Err(ReductionError::NumericDivergence(format!(
                "{} entries cannot form a {dim}x{dim} matrix",
                data.len()
            )));
        }
        Ok(Self { dim, data })
    }

    #[inline]
    pub(crate) fn from_parts(dim: usize, data: Vec<Complex64>) -> Self {
        debug_assert_eq!(data.len(), dim * dim);
        Self { dim, data }
    }

    /// Matriz sem dimensão (subsistema vazio sem representação)
    pub fn empty() -> Self {
        Self { dim: 0, data: Vec::new() }
    }

    /// Projetor |ψ⟩⟨ψ| de um estado puro
    pub fn from_pure_state(state: &StateVector) -> Self {
        let amps = state.amplitudes();
        let dim = amps.len();
        let mut data = Vec::with_capacity(dim * dim);
        for a in amps {
            for b in amps {
                data.push(a * b.conj());
            }
        }
        Self { dim, data }
    }

    /// Estado maximamente misturado I / 2^k
    pub fn maximally_mixed(num_qubits: usize) -> Self {
        let dim = 1usize << num_qubits;
        let mut data = vec![Complex64::new(0.0, 0.0); dim * dim];
        let p = 1.0 / dim as f64;
        for i in 0..dim {
            data[i * dim + i] = Complex64::new(p, 0.0);
        }
        Self { dim, data }
    }

    /// Dimensão (2^k)
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Número de qubits retidos (k)
    pub fn num_qubits(&self) -> usize {
        if self.dim <= 1 { 0 } else { self.dim.trailing_zeros() as usize }
    }

    /// Elemento ρ[row, col]
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.data[row * self.dim + col]
    }

    /// Dados row-major
    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }

    /// tr ρ
    pub fn trace(&self) -> Complex64 {
        (0..self.dim).map(|i| self.get(i, i)).sum()
    }

    /// tr ρ² (1 para estados puros, 1/2^k para o maximamente misturado)
    pub fn purity(&self) -> f64 {
        // tr(ρ²) = Σ_ij ρ_ij ρ_ji = Σ_ij |ρ_ij|² para ρ hermitiana
        self.data.iter().map(|z| z.norm_sqr()).sum()
    }

    /// Verifica ρ = ρ† elemento a elemento
    pub fn is_hermitian(&self, tolerance: f64) -> bool {
        (0..self.dim).all(|i| {
            (i..self.dim).all(|j| (self.get(i, j) - self.get(j, i).conj()).norm() <= tolerance)
        })
    }

    /// Verifica as invariantes hermitiana e traço 1
    pub fn validate(&self, tolerance: f64) -> ReductionResult<()> {
        if self.dim == 0 {
            return Ok(());
        }
        if !self.is_hermitian(tolerance) {
            return Err(ReductionError::NumericDivergence("matrix is not Hermitian".into()));
        }
        let trace = self.trace();
        if (trace.re - 1.0).abs() > tolerance || trace.im.abs() > tolerance {
            return Err(ReductionError::NumericDivergence(format!(
                "trace is {trace}, expected 1"
            )));
        }
        Ok(())
    }

    /// Autovalores reais, em ordem crescente
    pub fn eigenvalues(&self) -> ReductionResult<Vec<f64>> {
        if self.dim == 0 {
            return Ok(Vec::new());
        }

        let matrix = DMatrix::from_row_slice(self.dim, self.dim, &self.data);
        let mut values: Vec<f64> = matrix.symmetric_eigenvalues().iter().copied().collect();

        if values.iter().any(|v| !v.is_finite()) {
            return Err(ReductionError::Eigen(format!("non-finite eigenvalues: {values:?}")));
        }

        values.sort_by(f64::total_cmp);
        Ok(values)
    }
}
