//! # ⏳ hawking-evolution — Page-Curve Drivers
//!
//! Orquestra o motor de estado e o motor de redução ao longo do tempo,
//! produzindo a curva de entropia do subsistema exterior (radiação).
//!
//! ## Modos
//!
//! - **Agenda fixa**: para n = 1..=N, n pares frescos, T rodadas de evolução,
//!   uma entropia por n.
//! - **Emissão contínua**: registrador persistente; a cada passo, com
//!   probabilidade p, um par novo é emitido; uma entropia por passo.
//!
//! ## Computational Complexity
//!
//! **evolve_round — O(n × 2^m):** n rotações + (n-1) interações, cada uma
//! percorrendo o vetor de estado inteiro (m = 2n).
//!
//! **run_fixed_schedule — O(N × T × N × 4^N + N × 8^N):** dominado pela
//! última iteração; a decomposição espectral do subsistema exterior custa
//! O(8^N).
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              EntropyEvolutionDriver                         │
//! │  ┌───────────────────────────────────────────────────────┐  │
//! │  │  EvolutionParameters (k1, k2, p, max_qubits, seed)    │  │
//! │  └───────────────────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────────────────┐  │
//! │  │  StateEngine: create_pair | rotation | interaction    │  │
//! │  └───────────────────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────────────────┐  │
//! │  │  ReductionEngine: exterior entropy                    │  │
//! │  └───────────────────────────────────────────────────────┘  │
//! │                          ↓                                  │
//! │                  Vec<EntropyRecord>                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use hawking_evolution::EntropyEvolutionDriver;
//!
//! let mut driver = EntropyEvolutionDriver::seeded(42);
//! let curve = driver.run_fixed_schedule(3, 0).unwrap();
//!
//! assert_eq!(curve.len(), 3);
//! assert!((curve[2] - 3.0).abs() < 1e-9);
//! ```

pub mod error;
pub mod config;
pub mod record;
pub mod driver;

pub use error::{EvolutionError, EvolutionResult};
pub use config::{
    EvolutionParameters, DEFAULT_ANGLE_SCALE, DEFAULT_EMISSION_RATE, DEFAULT_MAX_QUBITS,
    DEFAULT_PHASE_SCALE,
};
pub use record::{EntropyRecord, RecordContext, entropy_values};
pub use driver::EntropyEvolutionDriver;
