//! Controlled decomposition through ZYZ Euler angles.
//!
//! For `U = RZ(ω) RY(θ) RZ(φ)` the controlled operation is realized as
//!
//! ```text
//! RZ(φ) · RY(θ/2) · MCX · RY(-θ/2) · RZ(-(φ+ω)/2) · MCX · RZ((ω-φ)/2)
//! ```
//!
//! in application order, where both MCX gates are controlled by all control
//! wires. With the controls inactive the rotations cancel; with all controls
//! active the two X conjugations flip the signs in between and the sequence
//! multiplies out to `U`. Operators outside SU(2) are matched only up to
//! their global phase, which becomes a relative phase under control.

use ctrlq_ir::{EulerAngles, Operation, Operator, QubitId, QueuingContext};
use tracing::{debug, instrument};

use crate::config::DecomposeConfig;
use crate::error::DecomposeResult;
use crate::euler::zyz_decomposition;
use crate::validate;

/// ZYZ-based controlled decomposition with configurable omission thresholds.
#[derive(Debug, Clone, Default)]
pub struct ZyzDecomposer {
    config: DecomposeConfig,
}

impl ZyzDecomposer {
    /// Create a decomposer with the default tolerances.
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

    /// Decompose `target` controlled on `controls` into 2 to 7 operations.
    pub fn decompose(
        &self,
        target: &dyn Operator,
        controls: &[QubitId],
    ) -> DecomposeResult<Vec<Operation>> {
        let mut scratch = QueuingContext::new();
        self.decompose_in(&mut scratch, target, controls)
    }

    /// Like [`decompose`](Self::decompose), also recording the result into `ctx`.
    pub fn decompose_queued(
        &self,
        ctx: &mut QueuingContext,
        target: &dyn Operator,
        controls: &[QubitId],
    ) -> DecomposeResult<Vec<Operation>> {
        let ops = self.decompose_in(ctx, target, controls)?;
        ctx.extend(ops.iter().cloned());
        Ok(ops)
    }

    #[instrument(skip(self, ctx, target), fields(op = target.name()))]
    fn decompose_in(
        &self,
        ctx: &mut QueuingContext,
        target: &dyn Operator,
        controls: &[QubitId],
    ) -> DecomposeResult<Vec<Operation>> {
        let wire = validate::single_qubit_wire(target)?;
        validate::control_wires(wire, controls)?;

        let angles = match target.single_qubit_rot_angles() {
            Some(angles) => angles,
            None => {
                let matrix = validate::single_qubit_matrix(target)?;
                ctx.stop_recording(|ctx| zyz_decomposition(&matrix, wire, ctx))
            }
        };

        let ops = self.emit(angles, wire, controls);
        debug!(num_ops = ops.len(), "decomposed controlled operator");
        Ok(ops)
    }

    fn emit(&self, angles: EulerAngles, target: QubitId, controls: &[QubitId]) -> Vec<Operation> {
        let EulerAngles { phi, theta, omega } = angles;
        let tol = self.config.angle_tolerance;
        let mcx = || Operation::mcx(controls, target);
        let mut ops = Vec::with_capacity(7);

        if phi.abs() > tol {
            ops.push(Operation::rz(phi, target));
        }

        let half_theta = theta / 2.0;
        if half_theta.abs() > tol {
            ops.push(Operation::ry(half_theta, target));
            ops.push(mcx());
            ops.push(Operation::ry(-half_theta, target));
        } else {
            ops.push(mcx());
        }

        let middle = -(phi + omega) / 2.0;
        if middle.abs() > self.config.middle_angle_tolerance {
            ops.push(Operation::rz(middle, target));
        }

        ops.push(mcx());

        let last = (omega - phi) / 2.0;
        if last.abs() > tol {
            ops.push(Operation::rz(last, target));
        }

        ops
    }
}

/// Decompose a single-qubit operator controlled on `controls` using ZYZ
/// Euler angles and two multiply-controlled X gates.
///
/// Fails with [`DecomposeError::NotSingleQubit`](crate::DecomposeError::NotSingleQubit)
/// when `target` acts on more than one wire.
///
/// # Example
///
/// ```rust
/// use ctrlq_decompose::ctrl_decomp_zyz;
/// use ctrlq_ir::{Gate, QubitId, wires};
///
/// let ops = ctrl_decomp_zyz(&Gate::rot(0.123, 0.456, 0.789, QubitId(0)), &wires([1, 2, 3]))?;
/// assert_eq!(ops.len(), 7);
/// # Ok::<(), ctrlq_decompose::DecomposeError>(())
/// ```
pub fn ctrl_decomp_zyz(
    target: &dyn Operator,
    controls: &[QubitId],
) -> DecomposeResult<Vec<Operation>> {
    ZyzDecomposer::new().decompose(target, controls)
}

/// [`ctrl_decomp_zyz`], recording exactly the returned operations into `ctx`.
pub fn ctrl_decomp_zyz_queued(
    ctx: &mut QueuingContext,
    target: &dyn Operator,
    controls: &[QubitId],
) -> DecomposeResult<Vec<Operation>> {
    ZyzDecomposer::new().decompose_queued(ctx, target, controls)
}
