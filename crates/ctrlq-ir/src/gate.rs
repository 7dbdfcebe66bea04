//! Standard quantum operators.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::operator::{EulerAngles, Operator};
use crate::qubit::QubitId;
use crate::unitary::Unitary2x2;

/// Unitarity tolerance for user-supplied matrices.
const UNITARY_TOLERANCE: f64 = 1e-8;

/// Standard operators with known semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    // Single-qubit Pauli gates
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,

    // Single-qubit Clifford gates
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,
    /// sqrt(X) gate.
    SX,

    // Single-qubit rotation gates
    /// Rotation around X axis.
    Rx(f64),
    /// Rotation around Y axis.
    Ry(f64),
    /// Rotation around Z axis.
    Rz(f64),
    /// Phase shift gate.
    P(f64),
    /// General rotation: RZ(phi), then RY(theta), then RZ(omega).
    Rot(f64, f64, f64),

    // Single-qubit matrix gates
    /// Arbitrary single-qubit unitary.
    Unitary(Unitary2x2),
    /// Diagonal single-qubit unitary.
    Diagonal(Complex64, Complex64),

    // Multi-qubit gates
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Z gate.
    CZ,
    /// SWAP gate.
    Swap,
    /// Toffoli gate (CCX).
    CCX,
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::I => "id",
            StandardGate::X => "x",
            StandardGate::Y => "y",
            StandardGate::Z => "z",
            StandardGate::H => "h",
            StandardGate::S => "s",
            StandardGate::Sdg => "sdg",
            StandardGate::T => "t",
            StandardGate::Tdg => "tdg",
            StandardGate::SX => "sx",
            StandardGate::Rx(_) => "rx",
            StandardGate::Ry(_) => "ry",
            StandardGate::Rz(_) => "rz",
            StandardGate::P(_) => "p",
            StandardGate::Rot(..) => "rot",
            StandardGate::Unitary(_) => "unitary",
            StandardGate::Diagonal(..) => "diagonal",
            StandardGate::CX => "cx",
            StandardGate::CZ => "cz",
            StandardGate::Swap => "swap",
            StandardGate::CCX => "ccx",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        match self {
            StandardGate::CX | StandardGate::CZ | StandardGate::Swap => 2,
            StandardGate::CCX => 3,
            _ => 1,
        }
    }

    /// The 2x2 matrix of a single-qubit gate, `None` for multi-qubit gates.
    pub fn single_qubit_matrix(&self) -> Option<Unitary2x2> {
        let m = match self {
            StandardGate::I => Unitary2x2::identity(),
            StandardGate::X => Unitary2x2::x(),
            StandardGate::Y => Unitary2x2::y(),
            StandardGate::Z => Unitary2x2::z(),
            StandardGate::H => Unitary2x2::h(),
            StandardGate::S => Unitary2x2::s(),
            StandardGate::Sdg => Unitary2x2::sdg(),
            StandardGate::T => Unitary2x2::t(),
            StandardGate::Tdg => Unitary2x2::tdg(),
            StandardGate::SX => Unitary2x2::sx(),
            StandardGate::Rx(t) => Unitary2x2::rx(*t),
            StandardGate::Ry(t) => Unitary2x2::ry(*t),
            StandardGate::Rz(t) => Unitary2x2::rz(*t),
            StandardGate::P(l) => Unitary2x2::p(*l),
            StandardGate::Rot(phi, theta, omega) => Unitary2x2::rot(*phi, *theta, *omega),
            StandardGate::Unitary(u) => *u,
            StandardGate::Diagonal(d0, d1) => Unitary2x2::diagonal(*d0, *d1),
            StandardGate::CX | StandardGate::CZ | StandardGate::Swap | StandardGate::CCX => {
                return None;
            }
        };
        Some(m)
    }

    /// Dense row-major matrix of the gate.
    pub fn matrix(&self) -> Vec<Complex64> {
        if let Some(m) = self.single_qubit_matrix() {
            return m.to_vec();
        }
        match self {
            StandardGate::CX => multi_controlled_x_matrix(1),
            StandardGate::CCX => multi_controlled_x_matrix(2),
            StandardGate::CZ => {
                let mut m = identity_matrix(4);
                m[15] = Complex64::new(-1.0, 0.0);
                m
            }
            StandardGate::Swap => {
                let mut m = vec![Complex64::new(0.0, 0.0); 16];
                for (row, col) in [(0, 0), (1, 2), (2, 1), (3, 3)] {
                    m[row * 4 + col] = Complex64::new(1.0, 0.0);
                }
                m
            }
            _ => unreachable!("single-qubit gates handled above"),
        }
    }

    /// Euler angles for rotation gates that carry them directly.
    pub fn rot_angles(&self) -> Option<EulerAngles> {
        use std::f64::consts::FRAC_PI_2;

        match self {
            StandardGate::Rx(t) => Some(EulerAngles::new(FRAC_PI_2, *t, -FRAC_PI_2)),
            StandardGate::Ry(t) => Some(EulerAngles::new(0.0, *t, 0.0)),
            StandardGate::Rz(t) => Some(EulerAngles::new(*t, 0.0, 0.0)),
            StandardGate::Rot(phi, theta, omega) => Some(EulerAngles::new(*phi, *theta, *omega)),
            _ => None,
        }
    }
}

/// A standard gate applied to concrete wires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// The kind of gate.
    pub kind: StandardGate,
    /// Wires the gate acts on.
    wires: Vec<QubitId>,
    /// Optional label for the gate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Gate {
    /// Create a gate on the given wires.
    ///
    /// Fails if the wire count does not match the gate, if a wire repeats,
    /// or if a matrix gate was given a non-unitary matrix.
    pub fn new(kind: StandardGate, wires: impl IntoIterator<Item = QubitId>) -> IrResult<Self> {
        let wires: Vec<QubitId> = wires.into_iter().collect();
        if wires.len() != kind.num_qubits() {
            return Err(IrError::WireCountMismatch {
                name: kind.name().to_string(),
                expected: kind.num_qubits(),
                got: wires.len(),
            });
        }
        for (i, w) in wires.iter().enumerate() {
            if wires[..i].contains(w) {
                return Err(IrError::DuplicateQubit {
                    qubit: *w,
                    op_name: Some(kind.name().to_string()),
                });
            }
        }
        if matches!(kind, StandardGate::Unitary(_) | StandardGate::Diagonal(..)) {
            let unitary = kind
                .single_qubit_matrix()
                .is_some_and(|m| m.is_unitary(UNITARY_TOLERANCE));
            if !unitary {
                return Err(IrError::NotUnitary {
                    name: kind.name().to_string(),
                });
            }
        }
        Ok(Self {
            kind,
            wires,
            label: None,
        })
    }

    /// Create a single-qubit gate. Only fails for non-unitary matrix gates.
    pub fn single(kind: StandardGate, wire: QubitId) -> IrResult<Self> {
        Self::new(kind, [wire])
    }

    /// Create an RX gate.
    pub fn rx(theta: f64, wire: QubitId) -> Self {
        Self::fixed(StandardGate::Rx(theta), vec![wire])
    }

    /// Create an RY gate.
    pub fn ry(theta: f64, wire: QubitId) -> Self {
        Self::fixed(StandardGate::Ry(theta), vec![wire])
    }

    /// Create an RZ gate.
    pub fn rz(theta: f64, wire: QubitId) -> Self {
        Self::fixed(StandardGate::Rz(theta), vec![wire])
    }

    /// Create a general rotation gate.
    pub fn rot(phi: f64, theta: f64, omega: f64, wire: QubitId) -> Self {
        Self::fixed(StandardGate::Rot(phi, theta, omega), vec![wire])
    }

    /// Create a phase shift gate.
    pub fn phase_shift(lambda: f64, wire: QubitId) -> Self {
        Self::fixed(StandardGate::P(lambda), vec![wire])
    }

    /// Create an arbitrary single-qubit unitary gate.
    pub fn unitary(matrix: Unitary2x2, wire: QubitId) -> IrResult<Self> {
        Self::single(StandardGate::Unitary(matrix), wire)
    }

    /// Create a diagonal single-qubit unitary gate.
    pub fn diagonal(d0: Complex64, d1: Complex64, wire: QubitId) -> IrResult<Self> {
        Self::single(StandardGate::Diagonal(d0, d1), wire)
    }

    /// Create a CNOT gate.
    pub fn cx(control: QubitId, target: QubitId) -> IrResult<Self> {
        Self::new(StandardGate::CX, [control, target])
    }

    /// Add a label to the gate.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    fn fixed(kind: StandardGate, wires: Vec<QubitId>) -> Self {
        Self {
            kind,
            wires,
            label: None,
        }
    }
}

impl Operator for Gate {
    fn name(&self) -> &str {
        self.label.as_deref().unwrap_or_else(|| self.kind.name())
    }

    fn kind_name(&self) -> &str {
        self.kind.name()
    }

    fn wires(&self) -> &[QubitId] {
        &self.wires
    }

    fn matrix(&self) -> Vec<Complex64> {
        self.kind.matrix()
    }

    fn single_qubit_rot_angles(&self) -> Option<EulerAngles> {
        self.kind.rot_angles()
    }
}

/// Dense identity matrix of dimension `dim`.
pub(crate) fn identity_matrix(dim: usize) -> Vec<Complex64> {
    let mut m = vec![Complex64::new(0.0, 0.0); dim * dim];
    for i in 0..dim {
        m[i * dim + i] = Complex64::new(1.0, 0.0);
    }
    m
}

/// Dense matrix of an X on the last wire controlled by all preceding wires.
pub(crate) fn multi_controlled_x_matrix(num_controls: usize) -> Vec<Complex64> {
    let dim = 1usize << (num_controls + 1);
    let mut m = identity_matrix(dim);
    let (a, b) = (dim - 2, dim - 1);
    m[a * dim + a] = Complex64::new(0.0, 0.0);
    m[b * dim + b] = Complex64::new(0.0, 0.0);
    m[a * dim + b] = Complex64::new(1.0, 0.0);
    m[b * dim + a] = Complex64::new(1.0, 0.0);
    m
}
