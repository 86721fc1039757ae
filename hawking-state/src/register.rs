//! Layout do registrador em pares (exterior, interior)
//!
//! ```text
//! slot:   0    1    2    3    4    5   ...
//! par:   [ 0 ext | 0 int ][ 1 ext | 1 int ][ 2 ext | 2 int ]
//! ```

/// Slots ocupados por um par de Hawking
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PairSlots {
    /// Índice do par
    pub index: usize,
}

impl PairSlots {
    pub const fn new(index: usize) -> Self {
        Self { index }
    }

    /// Qubit exterior (radiação emitida): `2i`
    #[inline]
    pub const fn exterior(&self) -> usize {
        2 * self.index
    }

    /// Qubit interior (parceiro atrás do horizonte): `2i + 1`
    #[inline]
    pub const fn interior(&self) -> usize {
        2 * self.index + 1
    }
}

/// Número de qubits necessários para `num_pairs` pares
#[inline]
pub const fn qubits_for_pairs(num_pairs: usize) -> usize {
    2 * num_pairs
}

/// Número de pares completos em um registrador de `num_qubits`
#[inline]
pub const fn pairs_in(num_qubits: usize) -> usize {
    num_qubits / 2
}

/// Índices exteriores `{0, 2, ..., 2(n-1)}`
pub fn exterior_indices(num_pairs: usize) -> Vec<usize> {
    (0..num_pairs).map(|i| PairSlots::new(i).exterior()).collect()
}

/// Índices interiores `{1, 3, ..., 2n-1}`
pub fn interior_indices(num_pairs: usize) -> Vec<usize> {
    (0..num_pairs).map(|i| PairSlots::new(i).interior()).collect()
}
