//! Erros do driver de evolução

use hawking_reduction::ReductionError;
use hawking_state::StateError;
use thiserror::Error;

pub type EvolutionResult<T> = Result<T, EvolutionError>;

/// Erros de evolução
///
/// Qualquer erro aborta a execução inteira: um registro omitido quebraria a
/// correspondência índice → passo da sequência de saída.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvolutionError {
    /// Erro do motor de estado
    #[error("State error: {0}")]
    State(#[from] StateError),

    /// Erro do motor de redução
    #[error("Reduction error: {0}")]
    Reduction(#[from] ReductionError),

    /// Parâmetros inválidos
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
}
