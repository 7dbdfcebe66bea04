//! Error types for the decomposition crate.

use ctrlq_ir::Unitary2x2;
use num_complex::Complex64;
use thiserror::Error;

/// Errors that can occur during decomposition.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DecomposeError {
    /// Error from the IR crate (wire validation, malformed matrices).
    #[error("IR error: {0}")]
    Ir(#[from] ctrlq_ir::IrError),

    /// The target operator acts on more than one wire.
    #[error("The target operation must be a single-qubit operation, instead got {name}.")]
    NotSingleQubit {
        /// Name of the rejected operator.
        name: String,
        /// Number of wires it acts on.
        num_wires: usize,
    },

    /// The SU(2)-normalized matrix has a complex off-diagonal.
    #[error("Target operation's matrix must have real off-diagonal, but it is {matrix}")]
    NonRealOffDiagonal {
        /// The normalized matrix.
        matrix: Unitary2x2,
    },

    /// The bisection root-finder did not converge.
    #[error("Unable to compute A matrix for U matrix {matrix} (no convergence after {iterations} iterations)")]
    NoConvergence {
        /// The target matrix of the search.
        matrix: Unitary2x2,
        /// Iterations spent before giving up.
        iterations: usize,
    },

    /// The solved bisection factor is not in SU(2).
    #[error("A matrix is not SU(2): {matrix} (det = {determinant})")]
    NotSu2 {
        /// The solved factor.
        matrix: Unitary2x2,
        /// Its determinant.
        determinant: Complex64,
    },

    /// Invalid configuration.
    #[error("Invalid decomposition configuration: {0}")]
    InvalidConfiguration(String),
}

impl DecomposeError {
    /// Whether the error reports bad caller input rather than a numerical failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            DecomposeError::Ir(_)
                | DecomposeError::NotSingleQubit { .. }
                | DecomposeError::NonRealOffDiagonal { .. }
        )
    }
}

/// Result type for decomposition operations.
pub type DecomposeResult<T> = Result<T, DecomposeError>;
