//! Shared statevector harness for the decomposition tests.
//!
//! Wires are mapped onto local qubit indices through an explicit wire order:
//! the first wire is the most significant bit, matching the dense-matrix
//! convention of `Operator::matrix`.

#![allow(dead_code)]

use ctrlq_ir::{Operation, QubitId, Unitary2x2};
use num_complex::Complex64;
use tracing_subscriber::EnvFilter;

/// Install a test subscriber honoring `RUST_LOG`; repeated calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A statevector over `order.len()` wires.
pub struct Statevector {
    amplitudes: Vec<Complex64>,
    order: Vec<QubitId>,
}

impl Statevector {
    /// |0...0⟩ over the given wires.
    pub fn new(order: &[QubitId]) -> Self {
        Self::basis(order, 0)
    }

    /// Computational basis state `index` over the given wires.
    pub fn basis(order: &[QubitId], index: usize) -> Self {
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << order.len()];
        amplitudes[index] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            order: order.to_vec(),
        }
    }

    fn mask(&self, wire: QubitId) -> usize {
        let pos = self
            .order
            .iter()
            .position(|w| *w == wire)
            .unwrap_or_else(|| panic!("wire {wire} is not part of the statevector"));
        1 << (self.order.len() - 1 - pos)
    }

    /// Apply `m` to `target` on the subspace where every control is |1⟩.
    pub fn apply_controlled(&mut self, controls: &[QubitId], target: QubitId, m: &Unitary2x2) {
        let ctrl_mask = controls.iter().fold(0, |acc, c| acc | self.mask(*c));
        let tgt_mask = self.mask(target);
        for i in 0..self.amplitudes.len() {
            if i & tgt_mask == 0 && i & ctrl_mask == ctrl_mask {
                let j = i | tgt_mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = m.data[0] * a + m.data[1] * b;
                self.amplitudes[j] = m.data[2] * a + m.data[3] * b;
            }
        }
    }

    /// Apply an elementary operation. Work wires are left untouched.
    pub fn apply(&mut self, op: &Operation) {
        self.apply_controlled(op.controls(), op.target(), &op.base_matrix());
    }

    /// Apply a Hadamard to `wire`.
    pub fn apply_h(&mut self, wire: QubitId) {
        self.apply_controlled(&[], wire, &Unitary2x2::h());
    }

    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Computational-basis probabilities.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }
}

/// Dense row-major matrix of an operation sequence in the given wire order.
pub fn circuit_matrix(ops: &[Operation], order: &[QubitId]) -> Vec<Complex64> {
    let dim = 1 << order.len();
    let mut matrix = vec![Complex64::new(0.0, 0.0); dim * dim];
    for col in 0..dim {
        let mut sv = Statevector::basis(order, col);
        for op in ops {
            sv.apply(op);
        }
        for (row, amp) in sv.amplitudes().iter().enumerate() {
            matrix[row * dim + col] = *amp;
        }
    }
    matrix
}

/// Identity with `u` in the bottom-right block: `u` on the last wire when all
/// `num_controls` preceding wires are |1⟩.
pub fn controlled_matrix(u: &Unitary2x2, num_controls: usize) -> Vec<Complex64> {
    let dim = 1 << (num_controls + 1);
    let mut matrix = vec![Complex64::new(0.0, 0.0); dim * dim];
    for i in 0..dim - 2 {
        matrix[i * dim + i] = Complex64::new(1.0, 0.0);
    }
    let base = dim - 2;
    for r in 0..2 {
        for c in 0..2 {
            matrix[(base + r) * dim + base + c] = u.data[r * 2 + c];
        }
    }
    matrix
}

/// Probabilities after preparing the controls in uniform superposition and
/// running `ops`, with the target starting in |0⟩.
pub fn superposed_probabilities(
    ops: &[Operation],
    controls: &[QubitId],
    target: QubitId,
) -> Vec<f64> {
    let order = wire_order(controls, target);
    let mut sv = Statevector::new(&order);
    for c in controls {
        sv.apply_h(*c);
    }
    for op in ops {
        sv.apply(op);
    }
    sv.probabilities()
}

/// Reference probabilities of the exact controlled operator.
pub fn expected_probabilities(u: &Unitary2x2, controls: &[QubitId], target: QubitId) -> Vec<f64> {
    let order = wire_order(controls, target);
    let mut sv = Statevector::new(&order);
    for c in controls {
        sv.apply_h(*c);
    }
    sv.apply_controlled(controls, target, u);
    sv.probabilities()
}

/// `controls + [target]`.
pub fn wire_order(controls: &[QubitId], target: QubitId) -> Vec<QubitId> {
    let mut order = controls.to_vec();
    order.push(target);
    order
}

/// Largest entry-wise distance between two equally sized matrices or vectors.
pub fn max_distance(lhs: &[Complex64], rhs: &[Complex64]) -> f64 {
    assert_eq!(lhs.len(), rhs.len(), "size mismatch");
    lhs.iter()
        .zip(rhs)
        .map(|(a, b)| (a - b).norm())
        .fold(0.0, f64::max)
}

/// Assert two probability vectors agree within `tol`.
pub fn assert_probabilities_close(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(actual.len(), expected.len(), "size mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() <= tol, "probability {i}: got {a}, expected {e}");
    }
}
