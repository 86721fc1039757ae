//! Parâmetros de evolução
//!
//! Imutáveis durante uma execução. Podem vir de código, de JSON (serde) ou
//! do ambiente (`.env` + variáveis `HAWKING_*`).

use std::env;
use std::str::FromStr;
use hawking_state::MAX_QUBITS;
use serde::{Deserialize, Serialize};
use crate::error::{EvolutionError, EvolutionResult};

/// Escala linear do ângulo de rotação: `angle = k1 · t`
pub const DEFAULT_ANGLE_SCALE: f64 = 0.1;

/// Escala da fase de interação: `phase = k2 · u`, `u ∈ [0, 1)`
pub const DEFAULT_PHASE_SCALE: f64 = 0.2;

/// Probabilidade de emissão por passo no modo contínuo
pub const DEFAULT_EMISSION_RATE: f64 = 0.5;

/// Limite padrão do registrador (2^24 amplitudes = 256 MiB)
pub const DEFAULT_MAX_QUBITS: usize = 24;

/// Configuração de uma execução
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionParameters {
    /// k1: rotação de cada qubit exterior no passo t é k1 · t
    pub angle_scale: f64,
    /// k2: fase de cada interação vizinha é k2 · u
    pub phase_scale: f64,
    /// Probabilidade de emitir um par por passo, usada por
    /// [`run_emission`](crate::EntropyEvolutionDriver::run_emission);
    /// `run_continuous_emission` recebe a sua explicitamente
    pub emission_rate: f64,
    /// Limite de qubits do registrador
    pub max_qubits: usize,
    /// Seed do gerador (None = entropia do sistema)
    pub seed: Option<u64>,
}

impl Default for EvolutionParameters {
    fn default() -> Self {
        Self {
            angle_scale: DEFAULT_ANGLE_SCALE,
            phase_scale: DEFAULT_PHASE_SCALE,
            emission_rate: DEFAULT_EMISSION_RATE,
            max_qubits: DEFAULT_MAX_QUBITS,
            seed: None,
        }
    }
}

impl EvolutionParameters {
    /// Parâmetros padrão com seed fixa
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Define a seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Define as escalas de rotação e interação
    pub fn with_scales(mut self, angle_scale: f64, phase_scale: f64) -> Self {
        self.angle_scale = angle_scale;
        self.phase_scale = phase_scale;
        self
    }

    /// Carrega do ambiente, com `.env` se existir
    ///
    /// Variáveis ausentes ou ilegíveis mantêm o valor padrão.
    pub fn from_env() -> Self {
        let _ = dotenv::dotenv();

        let defaults = Self::default();
        Self {
            angle_scale: env_or("HAWKING_ANGLE_SCALE", defaults.angle_scale),
            phase_scale: env_or("HAWKING_PHASE_SCALE", defaults.phase_scale),
            emission_rate: env_or("HAWKING_EMISSION_RATE", defaults.emission_rate),
            max_qubits: env_or("HAWKING_MAX_QUBITS", defaults.max_qubits),
            seed: env::var("HAWKING_SEED").ok().and_then(|v| v.parse().ok()),
        }
    }

    /// Valida os parâmetros antes de uma execução
    pub fn validate(&self) -> EvolutionResult<()> {
        if !self.angle_scale.is_finite() {
            return Err(EvolutionError::InvalidParameters(format!(
                "angle_scale must be finite, got {}",
                self.angle_scale
            )));
        }
        if !self.phase_scale.is_finite() {
            return Err(EvolutionError::InvalidParameters(format!(
                "phase_scale must be finite, got {}",
                self.phase_scale
            )));
        }
        validate_emission_rate(self.emission_rate)?;
        if self.max_qubits > MAX_QUBITS {
            return Err(EvolutionError::InvalidParameters(format!(
                "max_qubits {} exceeds the engine limit of {MAX_QUBITS}",
                self.max_qubits
            )));
        }
        Ok(())
    }
}

/// Probabilidade de emissão em [0, 1]
pub(crate) fn validate_emission_rate(rate: f64) -> EvolutionResult<()> {
    if !(0.0..=1.0).contains(&rate) {
        return Err(EvolutionError::InvalidParameters(format!(
            "emission_rate must be in [0, 1], got {rate}"
        )));
    }
    Ok(())
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
