//! Elementary operations emitted by decompositions.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::gate::multi_controlled_x_matrix;
use crate::operator::{EulerAngles, Operator};
use crate::qubit::QubitId;
use crate::unitary::Unitary2x2;

/// An elementary operation.
///
/// Every variant is a (possibly controlled) single-qubit matrix on one
/// target wire, which keeps consumers simple: apply [`Operation::base_matrix`]
/// to [`Operation::target`] when all [`Operation::controls`] are active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operation {
    /// Rotation around the Z axis.
    Rz {
        /// Rotation angle.
        angle: f64,
        /// Wire the rotation acts on.
        wire: QubitId,
    },
    /// Rotation around the Y axis.
    Ry {
        /// Rotation angle.
        angle: f64,
        /// Wire the rotation acts on.
        wire: QubitId,
    },
    /// Bit flip on `target` when every control wire is active.
    ///
    /// Work wires are scratch space an implementation may borrow to build
    /// the condition; they are returned in their original state.
    MultiControlledX {
        /// Control wires.
        controls: Vec<QubitId>,
        /// Target wire.
        target: QubitId,
        /// Auxiliary work wires.
        work_wires: Vec<QubitId>,
    },
    /// Arbitrary single-qubit unitary, or its adjoint.
    QubitUnitary {
        /// The (non-adjointed) matrix.
        matrix: Unitary2x2,
        /// Wire the unitary acts on.
        wire: QubitId,
        /// Whether the conjugate transpose is applied instead.
        adjoint: bool,
    },
}

impl Operation {
    /// Create an RZ rotation.
    pub fn rz(angle: f64, wire: QubitId) -> Self {
        Operation::Rz { angle, wire }
    }

    /// Create an RY rotation.
    pub fn ry(angle: f64, wire: QubitId) -> Self {
        Operation::Ry { angle, wire }
    }

    /// Create a multiply-controlled X without work wires.
    pub fn mcx(controls: impl Into<Vec<QubitId>>, target: QubitId) -> Self {
        Self::mcx_with_work(controls, target, Vec::new())
    }

    /// Create a multiply-controlled X with auxiliary work wires.
    pub fn mcx_with_work(
        controls: impl Into<Vec<QubitId>>,
        target: QubitId,
        work_wires: impl Into<Vec<QubitId>>,
    ) -> Self {
        Operation::MultiControlledX {
            controls: controls.into(),
            target,
            work_wires: work_wires.into(),
        }
    }

    /// Create a single-qubit unitary.
    pub fn unitary(matrix: Unitary2x2, wire: QubitId) -> Self {
        Operation::QubitUnitary {
            matrix,
            wire,
            adjoint: false,
        }
    }

    /// The adjoint of this operation.
    #[must_use]
    pub fn adjoint(&self) -> Self {
        match self {
            Operation::Rz { angle, wire } => Operation::rz(-angle, *wire),
            Operation::Ry { angle, wire } => Operation::ry(-angle, *wire),
            Operation::MultiControlledX { .. } => self.clone(),
            Operation::QubitUnitary {
                matrix,
                wire,
                adjoint,
            } => Operation::QubitUnitary {
                matrix: *matrix,
                wire: *wire,
                adjoint: !adjoint,
            },
        }
    }

    /// Get the name of the operation.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Rz { .. } => "rz",
            Operation::Ry { .. } => "ry",
            Operation::MultiControlledX { .. } => "mcx",
            Operation::QubitUnitary { adjoint: false, .. } => "unitary",
            Operation::QubitUnitary { adjoint: true, .. } => "unitary_dg",
        }
    }

    /// The wire the single-qubit matrix acts on.
    pub fn target(&self) -> QubitId {
        match self {
            Operation::Rz { wire, .. }
            | Operation::Ry { wire, .. }
            | Operation::QubitUnitary { wire, .. } => *wire,
            Operation::MultiControlledX { target, .. } => *target,
        }
    }

    /// Control wires, empty for uncontrolled operations.
    pub fn controls(&self) -> &[QubitId] {
        match self {
            Operation::MultiControlledX { controls, .. } => controls,
            _ => &[],
        }
    }

    /// Work wires, empty unless this is a multiply-controlled X that has some.
    pub fn work_wires(&self) -> &[QubitId] {
        match self {
            Operation::MultiControlledX { work_wires, .. } => work_wires,
            _ => &[],
        }
    }

    /// The single-qubit matrix applied to the target when all controls are active.
    pub fn base_matrix(&self) -> Unitary2x2 {
        match self {
            Operation::Rz { angle, .. } => Unitary2x2::rz(*angle),
            Operation::Ry { angle, .. } => Unitary2x2::ry(*angle),
            Operation::MultiControlledX { .. } => Unitary2x2::x(),
            Operation::QubitUnitary {
                matrix, adjoint, ..
            } => {
                if *adjoint {
                    matrix.dagger()
                } else {
                    *matrix
                }
            }
        }
    }

    /// Rotation angle, for `Rz` and `Ry`.
    pub fn angle(&self) -> Option<f64> {
        match self {
            Operation::Rz { angle, .. } | Operation::Ry { angle, .. } => Some(*angle),
            _ => None,
        }
    }

    /// Check if this is a multiply-controlled X.
    pub fn is_mcx(&self) -> bool {
        matches!(self, Operation::MultiControlledX { .. })
    }

    /// Check if this is a Z or Y rotation.
    pub fn is_rotation(&self) -> bool {
        matches!(self, Operation::Rz { .. } | Operation::Ry { .. })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Rz { angle, wire } => write!(f, "rz({angle:.6}) {wire}"),
            Operation::Ry { angle, wire } => write!(f, "ry({angle:.6}) {wire}"),
            Operation::MultiControlledX {
                controls,
                target,
                work_wires,
            } => {
                write!(f, "mcx [")?;
                for (i, c) in controls.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{c}")?;
                }
                write!(f, "] -> {target}")?;
                if !work_wires.is_empty() {
                    write!(f, " (work: {} wires)", work_wires.len())?;
                }
                Ok(())
            }
            Operation::QubitUnitary { wire, .. } => write!(f, "{} {wire}", self.name()),
        }
    }
}

/// Elementary operations are operators too, so an emitted rotation can
/// itself be the target of a further controlled decomposition.
///
/// The dense matrix of a multiply-controlled X uses wire order
/// `controls + [target]`; work wires are not part of its matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationOperator {
    op: Operation,
    wires: Vec<QubitId>,
}

impl From<Operation> for OperationOperator {
    fn from(op: Operation) -> Self {
        let mut wires = op.controls().to_vec();
        wires.push(op.target());
        Self { op, wires }
    }
}

impl OperationOperator {
    /// The wrapped operation.
    pub fn operation(&self) -> &Operation {
        &self.op
    }
}

impl Operator for OperationOperator {
    fn name(&self) -> &str {
        self.op.name()
    }

    fn wires(&self) -> &[QubitId] {
        &self.wires
    }

    fn matrix(&self) -> Vec<Complex64> {
        match &self.op {
            Operation::MultiControlledX { controls, .. } if !controls.is_empty() => {
                multi_controlled_x_matrix(controls.len())
            }
            op => op.base_matrix().to_vec(),
        }
    }

    fn single_qubit_rot_angles(&self) -> Option<EulerAngles> {
        match &self.op {
            Operation::Rz { angle, .. } => Some(EulerAngles::new(*angle, 0.0, 0.0)),
            Operation::Ry { angle, .. } => Some(EulerAngles::new(0.0, *angle, 0.0)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjoint_of_unitary() {
        let u = Unitary2x2::rot(0.3, 0.2, 0.1);
        let op = Operation::unitary(u, QubitId(0));
        let adj = op.adjoint();
        assert_eq!(adj.name(), "unitary_dg");
        assert!((op.base_matrix() * adj.base_matrix()).is_identity());
        assert_eq!(adj.adjoint(), op);
    }

    #[test]
    fn test_mcx_accessors() {
        let op =
            Operation::mcx_with_work(vec![QubitId(1), QubitId(2)], QubitId(0), vec![QubitId(3)]);
        assert!(op.is_mcx());
        assert!(!op.is_rotation());
        assert_eq!(op.controls(), &[QubitId(1), QubitId(2)]);
        assert_eq!(op.work_wires(), &[QubitId(3)]);
        assert_eq!(op.target(), QubitId(0));
        assert_eq!(op.to_string(), "mcx [q1, q2] -> q0 (work: 1 wires)");
    }

    #[test]
    fn test_rotation_accessors() {
        let op = Operation::ry(0.5, QubitId(4));
        assert_eq!(op.angle(), Some(0.5));
        assert!(op.controls().is_empty());
        assert_eq!(op.adjoint().angle(), Some(-0.5));
        assert!(Operation::mcx(vec![QubitId(1)], QubitId(0)).angle().is_none());
    }

    #[test]
    fn test_operation_as_operator() {
        let as_op = OperationOperator::from(Operation::mcx(vec![QubitId(1)], QubitId(0)));
        assert_eq!(as_op.wires(), &[QubitId(1), QubitId(0)]);
        assert_eq!(as_op.matrix().len(), 16);

        let ry = OperationOperator::from(Operation::ry(0.25, QubitId(3)));
        assert_eq!(ry.num_wires(), 1);
        assert_eq!(ry.single_qubit_rot_angles(), Some(EulerAngles::new(0.0, 0.25, 0.0)));
    }

    #[test]
    fn test_serde_shape() {
        let op = Operation::rz(1.5, QubitId(2));
        let json = serde_json::to_value(&op).unwrap();
        assert_eq!(json["Rz"]["angle"], 1.5);
        assert_eq!(json["Rz"]["wire"], 2);
    }
}
