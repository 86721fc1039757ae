//! # ⚛️ hawking-state — Statevector Engine
//!
//! Mantém um estado puro denso sobre um registrador de qubits que cresce
//! em pares (exterior, interior) e aplica unitárias de um e dois qubits.
//!
//! ## Computational Complexity
//!
//! **Gate de um qubit — O(2^m):**
//! - m = número de qubits do registrador
//! - cada par de amplitudes que difere só no bit do qubit passa pela matriz 2x2
//!
//! **CNOT — O(2^m):** troca de amplitudes com controle = 1
//!
//! **extend_register — O(2^(m+k)):** nova alocação + cópia do bloco antigo
//!
//! **Memória:** 16 bytes × 2^m (Complex64). Com m = 24 são 256 MiB.
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          StateEngine                            │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  StateVector (2^m amplitudes, LE bits)    │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Gates 2x2 + CNOT (broadcast tensorial)   │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Tensor embedding (extend_register)       │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use hawking_state::StateEngine;
//!
//! let mut engine = StateEngine::initialize(2).unwrap();
//! engine.create_pair(0).unwrap();
//! engine.apply_rotation(0, 0.1, 0.1).unwrap();
//!
//! engine.extend_register(2).unwrap();
//! engine.create_pair(1).unwrap();
//! assert_eq!(engine.num_qubits(), 4);
//! ```

pub mod error;
pub mod gates;
pub mod register;
pub mod state;
pub mod engine;

pub use error::{StateError, StateResult};
pub use gates::{Hadamard, Matrix2x2, PauliX, QuantumGate, RotationY, RotationZ, UNITARY_TOLERANCE};
pub use register::{PairSlots, exterior_indices, interior_indices, pairs_in, qubits_for_pairs};
pub use state::{StateVector, MAX_QUBITS, NORM_TOLERANCE};
pub use engine::StateEngine;
pub use num_complex::Complex64;
