//! Motor de estado: aplica unitárias ao vetor de estado completo
//!
//! Cada gate é aplicada por atualização direta de pares de amplitudes,
//! sem materializar o operador 2^m × 2^m.

use num_complex::Complex64;
use crate::error::{StateError, StateResult};
use crate::gates::{Hadamard, Matrix2x2, QuantumGate, RotationY, RotationZ, UNITARY_TOLERANCE};
use crate::register::PairSlots;
use crate::state::{NORM_TOLERANCE, StateVector};

/// Dono exclusivo do [`StateVector`] de uma simulação
#[derive(Debug, Clone)]
pub struct StateEngine {
    state: StateVector,
}

impl StateEngine {
    /// Cria registrador de `num_qubits` no estado |0…0⟩
    pub fn initialize(num_qubits: usize) -> StateResult<Self> {
        Ok(Self {
            state: StateVector::zero(num_qubits)?,
        })
    }

    /// Registrador vazio (zero qubits)
    pub fn empty() -> Self {
        Self {
            state: StateVector::empty(),
        }
    }

    /// Envolve um estado já construído
    pub fn from_state(state: StateVector) -> StateResult<Self> {
        state.check_normalized()?;
        Ok(Self { state })
    }

    /// Tamanho atual do registrador
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.state.num_qubits()
    }

    /// Número de pares completos
    #[inline]
    pub fn num_pairs(&self) -> usize {
        crate::register::pairs_in(self.num_qubits())
    }

    /// Estado atual
    #[inline]
    pub fn state(&self) -> &StateVector {
        &self.state
    }

    /// Consome o motor devolvendo o estado
    pub fn into_state(self) -> StateVector {
        self.state
    }

    /// Aplica uma gate de um qubit
    pub fn apply_gate<G: QuantumGate + ?Sized>(&mut self, qubit: usize, gate: &G) -> StateResult<()> {
        self.apply_matrix(qubit, &gate.matrix())
    }

    /// Aplica uma matriz 2x2 ao qubit, combinando cada par (i, i | bit)
    ///
    /// Matrizes não unitárias são rejeitadas com `NonUnitary` antes de
    /// tocar nas amplitudes.
    pub fn apply_matrix(&mut self, qubit: usize, matrix: &Matrix2x2) -> StateResult<()> {
        self.check_qubit(qubit)?;
        let deviation = matrix.unitarity_error();
        if !(deviation <= UNITARY_TOLERANCE) {
            return Err(StateError::NonUnitary(deviation));
        }

        apply_single_qubit(self.state.amplitudes_mut(), matrix, qubit);
        self.state.check_normalized()
    }

    /// CNOT: inverte `target` quando `control` = 1
    pub fn apply_cnot(&mut self, control: usize, target: usize) -> StateResult<()> {
        self.check_qubit(control)?;
        self.check_qubit(target)?;
        if control == target {
            return Err(StateError::InvalidQubit {
                index: target,
                num_qubits: self.num_qubits(),
            });
        }

        apply_cnot(self.state.amplitudes_mut(), control, target);
        self.state.check_normalized()
    }

    /// Cria o estado de Bell |Φ+⟩ no par `index`: H(ext) seguido de CNOT(ext → int)
    ///
    /// Os dois slots precisam estar alocados e em |0⟩.
    pub fn create_pair(&mut self, index: usize) -> StateResult<()> {
        let pair = PairSlots::new(index);
        self.check_qubit(pair.interior())?;

        let occupied = self.state.excitation(pair.exterior()) + self.state.excitation(pair.interior());
        if occupied > NORM_TOLERANCE {
            return Err(StateError::PairNotFresh(index));
        }

        self.apply_gate(pair.exterior(), &Hadamard)?;
        self.apply_cnot(pair.exterior(), pair.interior())
    }

    /// Rz(`angle_z`) seguido de Ry(`angle_y`) no qubit
    pub fn apply_rotation(&mut self, qubit: usize, angle_z: f64, angle_y: f64) -> StateResult<()> {
        let rz = RotationZ::new(angle_z).matrix();
        let ry = RotationY::new(angle_y).matrix();

        // Ry · Rz: Rz age primeiro
        self.apply_matrix(qubit, &ry.mul(&rz))
    }

    /// Mistura caótica entre vizinhos: CNOT(a → b) seguido de Rz(`phase`) em `a`
    pub fn apply_entangling_interaction(&mut self, qubit_a: usize, qubit_b: usize, phase: f64) -> StateResult<()> {
        self.apply_cnot(qubit_a, qubit_b)?;
        self.apply_gate(qubit_a, &RotationZ::new(phase))
    }

    /// Acrescenta `extra_qubits` slots em |0⟩: |ψ⟩ → |ψ⟩ ⊗ |0…0⟩
    pub fn extend_register(&mut self, extra_qubits: usize) -> StateResult<()> {
        if extra_qubits == 0 {
            return Ok(());
        }

        let grown = self.state.embed(extra_qubits)?;
        grown.check_normalized()?;
        self.state = grown;
        Ok(())
    }

    /// Acrescenta um novo par no topo do registrador e o emaranha
    ///
    /// Retorna o índice do par criado.
    pub fn emit_pair(&mut self) -> StateResult<usize> {
        let index = self.num_pairs();
        self.extend_register(2)?;
        self.create_pair(index)?;
        Ok(index)
    }

    fn check_qubit(&self, index: usize) -> StateResult<()> {
        let num_qubits = self.num_qubits();
        if index >= num_qubits {
            return Err(StateError::InvalidQubit { index, num_qubits });
        }
        Ok(())
    }
}

impl Default for StateEngine {
    fn default() -> Self {
        Self::empty()
    }
}

/// Expansão tensorial de uma gate 2x2 sobre o vetor completo
fn apply_single_qubit(amplitudes: &mut [Complex64], matrix: &Matrix2x2, qubit: usize) {
    let stride = 1usize << qubit;
    let block = stride << 1;

    for base in (0..amplitudes.len()).step_by(block) {
        for i in base..base + stride {
            let j = i | stride;
            let [a0, a1] = matrix.apply([amplitudes[i], amplitudes[j]]);
            amplitudes[i] = a0;
            amplitudes[j] = a1;
        }
    }
}

fn apply_cnot(amplitudes: &mut [Complex64], control: usize, target: usize) {
    let control_bit = 1usize << control;
    let target_bit = 1usize << target;

    for i in 0..amplitudes.len() {
        if i & control_bit != 0 && i & target_bit == 0 {
            amplitudes.swap(i, i | target_bit);
        }
    }
}
