//! Tipos de erro para hawking-reduction

use thiserror::Error;

/// Resultado customizado para operações de redução
pub type ReductionResult<T> = Result<T, ReductionError>;

/// Erros que podem ocorrer no traço parcial e no cálculo de entropia
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReductionError {
    #[error("Invalid subset: {0}")]
    InvalidSubset(String),

    #[error("Numeric divergence: {0}")]
    NumericDivergence(String),

    #[error("Eigendecomposition failed: {0}")]
    Eigen(String),
}
