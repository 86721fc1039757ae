//! Motor de redução: traço parcial + entropia com invariantes checadas

use hawking_state::StateVector;
use crate::density::DensityMatrix;
use crate::entropy::{EIGEN_CUTOFF, von_neumann_entropy_with_cutoff};
use crate::error::ReductionResult;
use crate::trace::{reduce, validate_subset};

/// Configuração do motor de redução
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReductionConfig {
    /// Tolerância para hermiticidade e traço 1
    pub tolerance: f64,
    /// Autovalores abaixo deste valor são descartados
    pub eigen_cutoff: f64,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-9,
            eigen_cutoff: EIGEN_CUTOFF,
        }
    }
}

/// Calcula matrizes reduzidas e suas entropias
#[derive(Debug, Clone, Default)]
pub struct ReductionEngine {
    config: ReductionConfig,
}

impl ReductionEngine {
    /// Cria motor com configuração padrão
    pub fn new() -> Self {
        Self::default()
    }

    /// Cria motor com configuração customizada
    pub fn with_config(config: ReductionConfig) -> Self {
        Self { config }
    }

    /// Configuração atual
    pub fn config(&self) -> &ReductionConfig {
        &self.config
    }

    /// Matriz densidade sobre `retained` (a ordem define a base de saída)
    ///
    /// Falha com `InvalidSubset` para índices repetidos ou fora do registrador
    /// e com `NumericDivergence` se o resultado não for hermitiano de traço 1.
    pub fn partial_trace(&self, state: &StateVector, retained: &[usize]) -> ReductionResult<DensityMatrix> {
        validate_subset(retained, state.num_qubits())?;

        let rho = reduce(state, retained);
        rho.validate(self.config.tolerance)?;
        Ok(rho)
    }

    /// Entropia de von Neumann em bits
    pub fn von_neumann_entropy(&self, rho: &DensityMatrix) -> ReductionResult<f64> {
        von_neumann_entropy_with_cutoff(rho, self.config.eigen_cutoff)
    }

    /// Entropia de emaranhamento do subsistema `retained`
    pub fn entanglement_entropy(&self, state: &StateVector, retained: &[usize]) -> ReductionResult<f64> {
        if retained.is_empty() {
            validate_subset(retained, state.num_qubits())?;
            return Ok(0.0);
        }

        let rho = self.partial_trace(state, retained)?;
        self.von_neumann_entropy(&rho)
    }
}

/// Traço parcial com configuração padrão
pub fn partial_trace(state: &StateVector, retained: &[usize]) -> ReductionResult<DensityMatrix> {
    ReductionEngine::new().partial_trace(state, retained)
}

/// Entropia de emaranhamento com configuração padrão
pub fn entanglement_entropy(state: &StateVector, retained: &[usize]) -> ReductionResult<f64> {
    ReductionEngine::new().entanglement_entropy(state, retained)
}
