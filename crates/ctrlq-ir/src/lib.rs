//! Operator IR for controlled-gate decompositions
//!
//! This crate provides the data types shared by the decomposition algorithms
//! in `ctrlq-decompose`: what an operator to decompose looks like, and what
//! the decompositions emit.
//!
//! # Core Components
//!
//! - **Wires**: [`QubitId`] labels the qubits operations act on
//! - **Matrices**: [`Unitary2x2`] for single-qubit matrix algebra
//! - **Operators**: the [`Operator`] capability (wires, dense matrix, optional
//!   Euler angles) and the [`Gate`]/[`StandardGate`] library implementing it
//! - **Elementary operations**: [`Operation`] (RZ, RY, multiply-controlled X,
//!   single-qubit unitary and its adjoint)
//! - **Recording**: [`QueuingContext`] with scoped suppression
//!
//! # Example
//!
//! ```rust
//! use ctrlq_ir::{Gate, Operator, QubitId, Unitary2x2};
//!
//! let rx = Gate::rx(0.5, QubitId(0));
//! assert_eq!(rx.wires(), &[QubitId(0)]);
//!
//! let angles = rx.single_qubit_rot_angles().unwrap();
//! let m = Unitary2x2::rot(angles.phi, angles.theta, angles.omega);
//! assert!(m.approx_eq(&Unitary2x2::rx(0.5), 1e-12));
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `X`, `Y`, `Z` | 1 | Pauli gates |
//! | `H`, `S`, `T`, `SX` | 1 | Clifford+T gates |
//! | `Rx`, `Ry`, `Rz` | 1 | Rotation gates |
//! | `P` | 1 | Phase shift |
//! | `Rot` | 1 | RZ, RY, RZ rotation with known Euler angles |
//! | `Unitary`, `Diagonal` | 1 | Matrix-defined gates |
//! | `CX`, `CZ`, `Swap` | 2 | Two-qubit gates |
//! | `CCX` | 3 | Toffoli gate |

pub mod error;
pub mod gate;
pub mod operation;
pub mod operator;
pub mod queuing;
pub mod qubit;
pub mod unitary;

pub use error::{IrError, IrResult};
pub use gate::{Gate, StandardGate};
pub use operation::{Operation, OperationOperator};
pub use operator::{EulerAngles, Operator};
pub use queuing::QueuingContext;
pub use qubit::{QubitId, wires};
pub use unitary::Unitary2x2;
