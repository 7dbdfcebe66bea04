//! 2x2 complex matrix algebra for single-qubit operators.
//!
//! Provides the standard single-qubit matrices, products, adjoints and
//! tolerance-based comparisons used by the decompositions.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

use crate::error::{IrError, IrResult};

/// Tolerance for floating point comparisons.
pub const EPSILON: f64 = 1e-10;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// A 2x2 complex matrix in row-major order.
///
/// Most constructors produce unitaries, but the type itself does not
/// enforce unitarity: [`Unitary2x2::is_unitary`] checks it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Unitary2x2 {
    /// The matrix elements in row-major order: [[a, b], [c, d]].
    pub data: [Complex64; 4],
}

impl Unitary2x2 {
    /// Create a new 2x2 matrix.
    pub fn new(a: Complex64, b: Complex64, c: Complex64, d: Complex64) -> Self {
        Self { data: [a, b, c, d] }
    }

    /// Create a matrix from a row-major slice of exactly four entries.
    pub fn from_slice(entries: &[Complex64]) -> IrResult<Self> {
        match entries {
            [a, b, c, d] => Ok(Self::new(*a, *b, *c, *d)),
            _ => Err(IrError::MatrixShape {
                len: entries.len(),
                dim: 2,
            }),
        }
    }

    /// Create the identity matrix.
    pub fn identity() -> Self {
        Self::new(ONE, ZERO, ZERO, ONE)
    }

    /// Create a Hadamard matrix.
    pub fn h() -> Self {
        let s = Complex64::new(1.0 / 2.0_f64.sqrt(), 0.0);
        Self::new(s, s, s, -s)
    }

    /// Create a Pauli-X matrix.
    pub fn x() -> Self {
        Self::new(ZERO, ONE, ONE, ZERO)
    }

    /// Create a Pauli-Y matrix.
    pub fn y() -> Self {
        Self::new(
            ZERO,
            Complex64::new(0.0, -1.0),
            Complex64::new(0.0, 1.0),
            ZERO,
        )
    }

    /// Create a Pauli-Z matrix.
    pub fn z() -> Self {
        Self::new(ONE, ZERO, ZERO, -ONE)
    }

    /// Create an S gate (sqrt(Z)).
    pub fn s() -> Self {
        Self::p(PI / 2.0)
    }

    /// Create an S-dagger gate.
    pub fn sdg() -> Self {
        Self::p(-PI / 2.0)
    }

    /// Create a T gate (fourth root of Z).
    pub fn t() -> Self {
        Self::p(PI / 4.0)
    }

    /// Create a T-dagger gate.
    pub fn tdg() -> Self {
        Self::p(-PI / 4.0)
    }

    /// Create an SX gate (sqrt(X)).
    pub fn sx() -> Self {
        let half = Complex64::new(0.5, 0.0);
        let half_i = Complex64::new(0.0, 0.5);
        Self::new(half + half_i, half - half_i, half - half_i, half + half_i)
    }

    /// Create an RX rotation matrix.
    pub fn rx(theta: f64) -> Self {
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        Self::new(
            Complex64::new(c, 0.0),
            Complex64::new(0.0, -s),
            Complex64::new(0.0, -s),
            Complex64::new(c, 0.0),
        )
    }

    /// Create an RY rotation matrix.
    pub fn ry(theta: f64) -> Self {
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        Self::new(
            Complex64::new(c, 0.0),
            Complex64::new(-s, 0.0),
            Complex64::new(s, 0.0),
            Complex64::new(c, 0.0),
        )
    }

    /// Create an RZ rotation matrix.
    pub fn rz(theta: f64) -> Self {
        Self::new(
            Complex64::from_polar(1.0, -theta / 2.0),
            ZERO,
            ZERO,
            Complex64::from_polar(1.0, theta / 2.0),
        )
    }

    /// Create a phase gate P(lambda).
    pub fn p(lambda: f64) -> Self {
        Self::diagonal(ONE, Complex64::from_polar(1.0, lambda))
    }

    /// Create a general rotation applying RZ(phi), RY(theta), RZ(omega) in turn.
    ///
    /// As a matrix this is `RZ(omega) * RY(theta) * RZ(phi)`.
    pub fn rot(phi: f64, theta: f64, omega: f64) -> Self {
        Self::rz(omega) * Self::ry(theta) * Self::rz(phi)
    }

    /// Create a diagonal matrix.
    pub fn diagonal(d0: Complex64, d1: Complex64) -> Self {
        Self::new(d0, ZERO, ZERO, d1)
    }

    /// Multiply this matrix by another: self * other.
    #[allow(clippy::many_single_char_names)]
    pub fn mul(&self, other: &Self) -> Self {
        let [a, b, c, d] = self.data;
        let [e, f, g, h] = other.data;
        Self::new(a * e + b * g, a * f + b * h, c * e + d * g, c * f + d * h)
    }

    /// Multiply every entry by a scalar.
    pub fn scale(&self, factor: Complex64) -> Self {
        let [a, b, c, d] = self.data;
        Self::new(a * factor, b * factor, c * factor, d * factor)
    }

    /// Get the conjugate transpose (dagger).
    pub fn dagger(&self) -> Self {
        Self::new(
            self.data[0].conj(),
            self.data[2].conj(),
            self.data[1].conj(),
            self.data[3].conj(),
        )
    }

    /// Determinant of the matrix.
    pub fn det(&self) -> Complex64 {
        self.data[0] * self.data[3] - self.data[1] * self.data[2]
    }

    /// Check whether `U† U` is the identity within `tol`.
    pub fn is_unitary(&self, tol: f64) -> bool {
        self.dagger().mul(self).approx_eq(&Self::identity(), tol)
    }

    /// Entry-wise comparison within an absolute tolerance.
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).norm() <= tol)
    }

    /// Check if this is approximately identity (up to global phase).
    pub fn is_identity(&self) -> bool {
        let [a, b, c, d] = self.data;
        if b.norm() > EPSILON || c.norm() > EPSILON {
            return false;
        }
        (a - d).norm() < EPSILON && (a.norm() - 1.0).abs() < EPSILON
    }

    /// Row-major entries as a vector.
    pub fn to_vec(&self) -> Vec<Complex64> {
        self.data.to_vec()
    }
}

impl Default for Unitary2x2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Unitary2x2 {
    type Output = Self;

    #[allow(clippy::needless_pass_by_value)]
    fn mul(self, rhs: Self) -> Self::Output {
        Unitary2x2::mul(&self, &rhs)
    }
}

impl fmt::Display for Unitary2x2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.data;
        write!(f, "[[{a:.8}, {b:.8}], [{c:.8}, {d:.8}]]")
    }
}
