//! Controlled decomposition for SU(2) operators with a real off-diagonal.
//!
//! The controls are split into two halves `L` and `R`, and the operator is
//! factored as `U = A† X A X A† X A X` with `A` in SU(2). Replacing each X by
//! a multiply-controlled X on one half yields an 8-operation circuit whose
//! X gates only fire together when both halves are active. Each half serves
//! as work space for the other's MCX.

use ctrlq_ir::{Operation, Operator, QubitId, QueuingContext};
use num_complex::Complex64;
use tracing::{debug, instrument};

use crate::bisect_factor::compute_bisection_factor;
use crate::config::DecomposeConfig;
use crate::error::{DecomposeError, DecomposeResult};
use crate::euler::to_su2;
use crate::validate;

/// Bisection decomposition for operators whose SU(2) form has a real off-diagonal.
#[derive(Debug, Clone, Default)]
pub struct BisectOdDecomposer {
    config: DecomposeConfig,
}

impl BisectOdDecomposer {
    /// Create a decomposer with the default tolerances and solver settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decomposer with the given configuration.
    pub fn with_config(config: DecomposeConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &DecomposeConfig {
        &self.config
    }

    /// Decompose `target` controlled on `controls` into exactly 8 operations.
    #[instrument(skip(self, target), fields(op = target.name()))]
    pub fn decompose(
        &self,
        target: &dyn Operator,
        controls: &[QubitId],
    ) -> DecomposeResult<Vec<Operation>> {
        let wire = validate::single_qubit_wire(target)?;
        validate::control_wires(wire, controls)?;

        let mut u = to_su2(&validate::single_qubit_matrix(target)?);
        let tol = self.config.off_diagonal_tolerance;
        if u.data[1].im.abs() > tol || u.data[2].im.abs() > tol {
            return Err(DecomposeError::NonRealOffDiagonal { matrix: u });
        }
        u.data[1] = Complex64::new(u.data[1].re, 0.0);
        u.data[2] = Complex64::new(u.data[2].re, 0.0);

        let a = compute_bisection_factor(&u, &self.config.solver)?;

        let (left, right) = controls.split_at(controls.len() / 2);
        let mcx_left = Operation::mcx_with_work(left, wire, right);
        let mcx_right = Operation::mcx_with_work(right, wire, left);
        let a_op = Operation::unitary(a, wire);
        let a_dg = a_op.adjoint();

        let ops = vec![
            mcx_left.clone(),
            a_op.clone(),
            mcx_right.clone(),
            a_dg.clone(),
            mcx_left,
            a_op,
            mcx_right,
            a_dg,
        ];
        debug!(left = left.len(), right = right.len(), "decomposed controlled operator");
        Ok(ops)
    }

    /// Like [`decompose`](Self::decompose), also recording the result into `ctx`.
    pub fn decompose_queued(
        &self,
        ctx: &mut QueuingContext,
        target: &dyn Operator,
        controls: &[QubitId],
    ) -> DecomposeResult<Vec<Operation>> {
        let ops = self.decompose(target, controls)?;
        ctx.extend(ops.iter().cloned());
        Ok(ops)
    }
}

/// Decompose a single-qubit operator with a real off-diagonal (after SU(2)
/// normalization) controlled on `controls` into 8 operations.
///
/// Fails when the operator acts on more than one wire, when its normalized
/// off-diagonal is not real, or when no SU(2) bisection factor is found.
pub fn ctrl_decomp_bisect_od(
    target: &dyn Operator,
    controls: &[QubitId],
) -> DecomposeResult<Vec<Operation>> {
    BisectOdDecomposer::new().decompose(target, controls)
}

/// [`ctrl_decomp_bisect_od`], recording exactly the returned operations into `ctx`.
pub fn ctrl_decomp_bisect_od_queued(
    ctx: &mut QueuingContext,
    target: &dyn Operator,
    controls: &[QubitId],
) -> DecomposeResult<Vec<Operation>> {
    BisectOdDecomposer::new().decompose_queued(ctx, target, controls)
}
