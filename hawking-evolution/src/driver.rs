//! Driver de evolução da entropia
//!
//! Dois modos sobre o mesmo passo de evolução:
//!
//! - **Agenda fixa**: para cada n em 1..=N, registrador novo com n pares,
//!   `timesteps` rodadas, entropia dos qubits exteriores.
//! - **Emissão contínua**: um registrador persistente que ganha um par com
//!   probabilidade `emission_rate` a cada passo; entropia medida todo passo.

use std::ops::ControlFlow;
use hawking_reduction::ReductionEngine;
use hawking_state::{StateEngine, StateError, exterior_indices, qubits_for_pairs};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, info_span};
use crate::config::{EvolutionParameters, validate_emission_rate};
use crate::error::{EvolutionError, EvolutionResult};
use crate::record::{EntropyRecord, RecordContext, entropy_values};

/// Orquestra StateEngine + ReductionEngine ao longo dos passos
#[derive(Debug, Clone)]
pub struct EntropyEvolutionDriver<R = StdRng> {
    params: EvolutionParameters,
    rng: R,
    reduction: ReductionEngine,
}

impl EntropyEvolutionDriver<StdRng> {
    /// Cria driver; usa `params.seed` se houver, senão entropia do sistema
    pub fn new(params: EvolutionParameters) -> EvolutionResult<Self> {
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(params, rng)
    }

    /// Driver com parâmetros padrão e seed explícita
    pub fn seeded(seed: u64) -> Self {
        Self {
            params: EvolutionParameters::seeded(seed),
            rng: StdRng::seed_from_u64(seed),
            reduction: ReductionEngine::new(),
        }
    }
}

impl<R: Rng> EntropyEvolutionDriver<R> {
    /// Cria driver com gerador injetado (a seed de `params` é ignorada)
    pub fn with_rng(params: EvolutionParameters, rng: R) -> EvolutionResult<Self> {
        params.validate()?;
        Ok(Self {
            params,
            rng,
            reduction: ReductionEngine::new(),
        })
    }

    /// Parâmetros da execução
    pub fn params(&self) -> &EvolutionParameters {
        &self.params
    }

    /// Uma rodada de evolução no passo `timestep` sobre todos os pares
    ///
    /// 1. Rz(k1·t) e Ry(k1·t) em cada qubit exterior
    /// 2. CNOT(2i → 2i+2) + Rz(k2·u) em cada par de exteriores vizinhos
    pub fn evolve_round(&mut self, engine: &mut StateEngine, timestep: usize) -> EvolutionResult<()> {
        let num_pairs = engine.num_pairs();
        let angle = self.params.angle_scale * timestep as f64;

        for exterior in exterior_indices(num_pairs) {
            engine.apply_rotation(exterior, angle, angle)?;
        }

        for i in 0..num_pairs.saturating_sub(1) {
            let phase = self.params.phase_scale * self.rng.gen_range(0.0..1.0);
            engine.apply_entangling_interaction(2 * i, 2 * i + 2, phase)?;
        }

        Ok(())
    }

    /// Entropia de von Neumann dos qubits exteriores
    pub fn exterior_entropy(&self, engine: &StateEngine) -> EvolutionResult<f64> {
        let exterior = exterior_indices(engine.num_pairs());
        Ok(self.reduction.entanglement_entropy(engine.state(), &exterior)?)
    }

    /// Agenda fixa: uma entropia por número de pares, n = 1..=`max_pairs`
    pub fn run_fixed_schedule(&mut self, max_pairs: usize, timesteps: usize) -> EvolutionResult<Vec<f64>> {
        let records = self.run_fixed_schedule_with(max_pairs, timesteps, |_| ControlFlow::Continue(()))?;
        Ok(entropy_values(&records))
    }

    /// Agenda fixa com observador; `Break` interrompe entre dois valores de n
    pub fn run_fixed_schedule_with<F>(
        &mut self,
        max_pairs: usize,
        timesteps: usize,
        mut observer: F,
    ) -> EvolutionResult<Vec<EntropyRecord>>
    where
        F: FnMut(&EntropyRecord) -> ControlFlow<()>,
    {
        if max_pairs == 0 {
            return Err(EvolutionError::InvalidParameters("max_pairs must be positive".into()));
        }
        self.check_capacity(qubits_for_pairs(max_pairs))?;

        let _span = info_span!("fixed_schedule", max_pairs, timesteps).entered();
        info!("starting fixed-schedule run");

        let mut records = Vec::with_capacity(max_pairs);
        for n in 1..=max_pairs {
            let mut engine = StateEngine::initialize(qubits_for_pairs(n))?;
            for i in 0..n {
                engine.create_pair(i)?;
            }

            for t in 0..timesteps {
                self.evolve_round(&mut engine, t)?;
            }

            let entropy = self.exterior_entropy(&engine)?;
            let record = EntropyRecord::new(RecordContext::Pairs(n), entropy, engine.num_qubits());
            debug!(pairs = n, entropy, "recorded");

            records.push(record);
            if observer(&record).is_break() {
                info!(recorded = records.len(), "stopped by observer");
                break;
            }
        }

        info!(recorded = records.len(), "fixed-schedule run finished");
        Ok(records)
    }

    /// Emissão contínua: uma entropia por passo, `total_time` valores
    pub fn run_continuous_emission(&mut self, total_time: usize, emission_rate: f64) -> EvolutionResult<Vec<f64>> {
        let records =
            self.run_continuous_emission_with(total_time, emission_rate, |_| ControlFlow::Continue(()))?;
        Ok(entropy_values(&records))
    }

    /// Emissão contínua com a probabilidade de `params.emission_rate`
    pub fn run_emission(&mut self, total_time: usize) -> EvolutionResult<Vec<f64>> {
        self.run_continuous_emission(total_time, self.params.emission_rate)
    }

    /// Emissão contínua com observador; `Break` interrompe entre dois passos
    pub fn run_continuous_emission_with<F>(
        &mut self,
        total_time: usize,
        emission_rate: f64,
        mut observer: F,
    ) -> EvolutionResult<Vec<EntropyRecord>>
    where
        F: FnMut(&EntropyRecord) -> ControlFlow<()>,
    {
        validate_emission_rate(emission_rate)?;

        let _span = info_span!("continuous_emission", total_time, emission_rate).entered();
        info!("starting continuous-emission run");

        let mut engine = StateEngine::empty();
        let mut records = Vec::with_capacity(total_time);

        for t in 0..total_time {
            if self.rng.gen_range(0.0..1.0) < emission_rate {
                self.check_capacity(engine.num_qubits() + 2)?;
                let pair = engine.emit_pair()?;
                debug!(timestep = t, pair, "pair emitted");
            }

            let entropy = if engine.num_qubits() > 0 {
                self.evolve_round(&mut engine, t)?;
                self.exterior_entropy(&engine)?
            } else {
                0.0
            };

            let record = EntropyRecord::new(RecordContext::Timestep(t), entropy, engine.num_qubits());
            debug!(timestep = t, pairs = record.num_pairs(), entropy, "recorded");

            records.push(record);
            if observer(&record).is_break() {
                info!(recorded = records.len(), "stopped by observer");
                break;
            }
        }

        info!(
            recorded = records.len(),
            pairs = engine.num_pairs(),
            "continuous-emission run finished"
        );
        Ok(records)
    }

    fn check_capacity(&self, num_qubits: usize) -> EvolutionResult<()> {
        if num_qubits > self.params.max_qubits {
            return Err(StateError::InvalidSize(format!(
                "{num_qubits} qubits exceeds the configured limit of {}",
                self.params.max_qubits
            ))
            .into());
        }
        Ok(())
    }
}
