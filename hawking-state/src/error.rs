//! Tipos de erro para hawking-state

use thiserror::Error;

/// Resultado customizado para operações sobre o vetor de estado
pub type StateResult<T> = Result<T, StateError>;

/// Erros que podem ocorrer no motor de estado
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StateError {
    #[error("Invalid register size: {0}")]
    InvalidSize(String),

    #[error("Invalid qubit {index} for a register of {num_qubits} qubits")]
    InvalidQubit { index: usize, num_qubits: usize },

    #[error("Pair {0} is not in the zero state")]
    PairNotFresh(usize),

    #[error("Matrix is not unitary: max |M·M† - I| = {0}")]
    NonUnitary(f64),

    #[error("Numeric divergence: norm² = {0}")]
    NumericDivergence(f64),
}
