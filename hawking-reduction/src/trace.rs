//! Traço parcial de um estado puro
//!
//! ```text
//! ρ_R[i, j] = Σ_e ψ(i, e) · conj(ψ(j, e))
//! ```
//!
//! `i`, `j` percorrem as configurações dos qubits retidos; `e` percorre as
//! dos qubits descartados. O bit `b` de `i` corresponde a `retained[b]`.

use hawking_state::StateVector;
use num_complex::Complex64;
use crate::density::DensityMatrix;
use crate::error::{ReductionError, ReductionResult};

/// Valida o subconjunto retido: índices distintos dentro de `[0, m)`
pub fn validate_subset(retained: &[usize], num_qubits: usize) -> ReductionResult<()> {
    let mut seen = vec![false; num_qubits];
    for &q in retained {
        if q >= num_qubits {
            return Err(ReductionError::InvalidSubset(format!(
                "qubit {q} is outside a register of {num_qubits} qubits"
            )));
        }
        if seen[q] {
            return Err(ReductionError::InvalidSubset(format!("qubit {q} is repeated")));
        }
        seen[q] = true;
    }
    Ok(())
}

/// Qubits descartados (complemento de `retained`), em ordem crescente
pub fn complement(retained: &[usize], num_qubits: usize) -> Vec<usize> {
    (0..num_qubits).filter(|q| !retained.contains(q)).collect()
}

/// Offsets no vetor completo para cada configuração dos qubits dados
///
/// `offsets[c]` espalha os bits de `c` nas posições `qubits[b]`.
fn scatter_offsets(qubits: &[usize]) -> Vec<usize> {
    let mut offsets = vec![0usize; 1 << qubits.len()];
    for (c, offset) in offsets.iter_mut().enumerate() {
        *offset = qubits
            .iter()
            .enumerate()
            .filter(|(b, _)| c & (1 << b) != 0)
            .fold(0, |acc, (_, &q)| acc | (1 << q));
    }
    offsets
}

/// Matriz densidade reduzida sobre `retained`, sem checar invariantes
pub(crate) fn reduce(state: &StateVector, retained: &[usize]) -> DensityMatrix {
    let amps = state.amplitudes();
    let traced = complement(retained, state.num_qubits());

    let row_offsets = scatter_offsets(retained);
    let env_offsets = scatter_offsets(&traced);
    let dim = row_offsets.len();

    let mut data = vec![Complex64::new(0.0, 0.0); dim * dim];

    // Triângulo superior + espelho conjugado: ρ sai hermitiana por construção
    for i in 0..dim {
        for j in i..dim {
            let sum: Complex64 = env_offsets
                .iter()
                .map(|&e| amps[row_offsets[i] | e] * amps[row_offsets[j] | e].conj())
                .sum();
            data[i * dim + j] = sum;
            data[j * dim + i] = sum.conj();
        }
    }

    // Diagonal é real
    for i in 0..dim {
        data[i * dim + i].im = 0.0;
    }

    DensityMatrix::from_parts(dim, data)
}
