//! # 🔗 hawking-reduction — Reduced States & Entropy
//!
//! Reduz um estado puro a um subconjunto de qubits via traço parcial e
//! mede o emaranhamento do subsistema pela entropia de von Neumann.
//!
//! ## Computational Complexity
//!
//! **partial_trace — O(4^k × 2^(m-k)):**
//! - k = qubits retidos, m = qubits do registrador
//! - só o triângulo superior é somado; o inferior é o conjugado
//!
//! **von_neumann_entropy — O(8^k):** decomposição espectral hermitiana
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │         ReductionEngine                         │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Subset validation                        │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Partial trace → DensityMatrix            │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Eigenvalues → -Σ λ log2 λ                │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use hawking_state::StateEngine;
//! use hawking_reduction::{partial_trace, von_neumann_entropy};
//!
//! let mut engine = StateEngine::initialize(2).unwrap();
//! engine.create_pair(0).unwrap();
//!
//! let rho = partial_trace(engine.state(), &[0]).unwrap();
//! let entropy = von_neumann_entropy(&rho).unwrap();
//! assert!((entropy - 1.0).abs() < 1e-9);
//! ```

pub mod error;
pub mod density;
pub mod trace;
pub mod entropy;
pub mod engine;

pub use error::{ReductionError, ReductionResult};
pub use density::DensityMatrix;
pub use trace::{complement, validate_subset};
pub use entropy::{EIGEN_CUTOFF, ENTROPY_FLOOR, entropy_from_eigenvalues, von_neumann_entropy, von_neumann_entropy_with_cutoff};
pub use engine::{ReductionConfig, ReductionEngine, entanglement_entropy, partial_trace};

#[cfg(test)]
mod tests;
