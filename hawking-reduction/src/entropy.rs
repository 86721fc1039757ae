//! Entropia de von Neumann
//!
//! ```text
//! S(ρ) = -Σ λ_i log2 λ_i     (λ_i > cutoff)
//! ```

use crate::density::DensityMatrix;
use crate::error::ReductionResult;

/// Autovalores abaixo deste valor são descartados (evita log(0))
pub const EIGEN_CUTOFF: f64 = 1e-12;

/// Entropias abaixo deste valor são reportadas como exatamente 0.0
pub const ENTROPY_FLOOR: f64 = 1e-10;

/// `-Σ λ log2 λ` sobre os autovalores acima de `cutoff`
pub fn entropy_from_eigenvalues(eigenvalues: &[f64], cutoff: f64) -> f64 {
    let entropy: f64 = eigenvalues
        .iter()
        .filter(|&&lambda| lambda > cutoff)
        .map(|&lambda| -lambda * lambda.log2())
        .sum();

    // Estado puro: λ = 1 - ε produz resíduos de arredondamento (inclusive -0.0)
    if entropy < ENTROPY_FLOOR { 0.0 } else { entropy }
}

/// Entropia de von Neumann em bits
///
/// Matrizes de dimensão 0 ou 1 (subsistema vazio) retornam 0.0 sem
/// decomposição espectral.
pub fn von_neumann_entropy(rho: &DensityMatrix) -> ReductionResult<f64> {
    von_neumann_entropy_with_cutoff(rho, EIGEN_CUTOFF)
}

/// Entropia de von Neumann com cutoff explícito
pub fn von_neumann_entropy_with_cutoff(rho: &DensityMatrix, cutoff: f64) -> ReductionResult<f64> {
    if rho.dim() <= 1 {
        return Ok(0.0);
    }

    let eigenvalues = rho.eigenvalues()?;
    Ok(entropy_from_eigenvalues(&eigenvalues, cutoff))
}
