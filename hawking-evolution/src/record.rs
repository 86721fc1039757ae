//! Registros de entropia

use std::fmt;
use serde::{Deserialize, Serialize};

/// Contexto que gerou um registro
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordContext {
    /// Número de pares (modo de agenda fixa)
    Pairs(usize),
    /// Passo de tempo (modo de emissão contínua)
    Timestep(usize),
}

impl fmt::Display for RecordContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pairs(n) => write!(f, "n={n}"),
            Self::Timestep(t) => write!(f, "t={t}"),
        }
    }
}

/// Entropia do subsistema exterior em um ponto da curva
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntropyRecord {
    /// Pares ou passo de tempo
    pub context: RecordContext,
    /// Entropia de von Neumann em bits
    pub entropy: f64,
    /// Qubits no registrador no momento da medição
    pub num_qubits: usize,
}

impl EntropyRecord {
    pub fn new(context: RecordContext, entropy: f64, num_qubits: usize) -> Self {
        Self { context, entropy, num_qubits }
    }

    /// Número de pares presentes na medição
    pub fn num_pairs(&self) -> usize {
        self.num_qubits / 2
    }
}

/// Extrai só os valores de entropia, na ordem dos registros
pub fn entropy_values(records: &[EntropyRecord]) -> Vec<f64> {
    records.iter().map(|r| r.entropy).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_pairs() {
        let record = EntropyRecord::new(RecordContext::Timestep(3), 1.5, 6);
        assert_eq!(record.num_pairs(), 3);
        assert_eq!(record.context.to_string(), "t=3");
    }

    #[test]
    fn test_entropy_values_keep_order() {
        let records = vec![
            EntropyRecord::new(RecordContext::Pairs(1), 1.0, 2),
            EntropyRecord::new(RecordContext::Pairs(2), 0.5, 4),
        ];
        assert_eq!(entropy_values(&records), vec![1.0, 0.5]);
    }

    #[test]
    fn test_record_serialization() {
        let record = EntropyRecord::new(RecordContext::Pairs(2), 2.0, 4);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""pairs":2"#));

        let back: EntropyRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
