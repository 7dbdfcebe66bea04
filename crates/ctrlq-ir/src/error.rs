//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Operator requires a different number of wires.
    #[error("Operator '{name}' requires {expected} wires, got {got}")]
    WireCountMismatch {
        /// Name of the operator.
        name: String,
        /// Expected number of wires.
        expected: usize,
        /// Actual number of wires provided.
        got: usize,
    },

    /// Duplicate wire in an operation or wire list.
    #[error("Duplicate qubit {qubit} in operation{}", format_op_context(.op_name))]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Optional operation name for context.
        op_name: Option<String>,
    },

    /// The target wire also appears among the control wires.
    #[error("Target qubit {qubit} is also listed as a control wire")]
    TargetInControls {
        /// The offending qubit.
        qubit: QubitId,
    },

    /// Matrix supplied for an operator is not unitary.
    #[error("Matrix for operator '{name}' is not unitary")]
    NotUnitary {
        /// Name of the operator.
        name: String,
    },

    /// Dense matrix has the wrong number of entries.
    #[error("Matrix with {len} entries is not a {dim}x{dim} matrix")]
    MatrixShape {
        /// Number of entries supplied.
        len: usize,
        /// Expected dimension.
        dim: usize,
    },
}

/// Helper function to format optional operation context.
#[allow(clippy::ref_option)]
fn format_op_context(op_name: &Option<String>) -> String {
    match op_name {
        Some(name) => format!(" (op: {name})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
