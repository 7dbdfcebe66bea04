//! The operator capability consumed by decompositions.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::qubit::QubitId;

/// ZYZ Euler angles of a single-qubit operator.
///
/// The operator applies `RZ(phi)`, then `RY(theta)`, then `RZ(omega)`, so
/// its matrix equals `RZ(omega) * RY(theta) * RZ(phi)` up to global phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EulerAngles {
    /// First Z rotation.
    pub phi: f64,
    /// Middle Y rotation.
    pub theta: f64,
    /// Last Z rotation.
    pub omega: f64,
}

impl EulerAngles {
    /// Create a new set of Euler angles.
    pub fn new(phi: f64, theta: f64, omega: f64) -> Self {
        Self { phi, theta, omega }
    }
}

/// A quantum operator that can be decomposed.
///
/// Implementors expose the wires they act on and a dense matrix. Single-qubit
/// rotations may also report their Euler angles directly, which lets
/// decompositions skip the matrix-based angle extraction.
pub trait Operator: std::fmt::Debug {
    /// Display name of this instance, which may be a user label.
    fn name(&self) -> &str;

    /// Name of the operator kind, independent of any label. Used in error messages.
    fn kind_name(&self) -> &str {
        self.name()
    }

    /// Wires the operator acts on, in matrix order (first wire most significant).
    fn wires(&self) -> &[QubitId];

    /// Dense row-major matrix of dimension `2^n x 2^n` for `n = wires().len()`.
    fn matrix(&self) -> Vec<Complex64>;

    /// Euler angles, when the operator knows them without a matrix decomposition.
    fn single_qubit_rot_angles(&self) -> Option<EulerAngles> {
        None
    }

    /// Number of wires the operator acts on.
    fn num_wires(&self) -> usize {
        self.wires().len()
    }
}

impl<T: Operator + ?Sized> Operator for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn kind_name(&self) -> &str {
        (**self).kind_name()
    }

    fn wires(&self) -> &[QubitId] {
        (**self).wires()
    }

    fn matrix(&self) -> Vec<Complex64> {
        (**self).matrix()
    }

    fn single_qubit_rot_angles(&self) -> Option<EulerAngles> {
        (**self).single_qubit_rot_angles()
    }
}

impl<T: Operator + ?Sized> Operator for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn kind_name(&self) -> &str {
        (**self).kind_name()
    }

    fn wires(&self) -> &[QubitId] {
        (**self).wires()
    }

    fn matrix(&self) -> Vec<Complex64> {
        (**self).matrix()
    }

    fn single_qubit_rot_angles(&self) -> Option<EulerAngles> {
        (**self).single_qubit_rot_angles()
    }
}
