//! Single-qubit Euler-angle extraction and SU(2) normalization.

use std::f64::consts::PI;

use ctrlq_ir::unitary::EPSILON;
use ctrlq_ir::{EulerAngles, Operation, QubitId, QueuingContext, Unitary2x2};
use num_complex::Complex64;
use tracing::trace;

/// Divide a 2x2 unitary by the square root of its determinant.
///
/// The result has determinant 1. Which of the two square roots is used is
/// unspecified; both differ only by a global sign.
pub fn to_su2(u: &Unitary2x2) -> Unitary2x2 {
    u.scale(u.det().sqrt().inv())
}

/// ZYZ Euler angles of a single-qubit unitary.
///
/// Returns `(phi, theta, omega)` with `theta` in `[0, π]` such that
/// `U = e^{iα} RZ(omega) RY(theta) RZ(phi)`; for a matrix already in SU(2)
/// the product matches `U` exactly, not only up to phase.
pub fn zyz_angles(u: &Unitary2x2) -> EulerAngles {
    let su = to_su2(u);
    let [a, b, c, _] = su.data;

    // SU(2): [[cos(t/2) e^{-i(w+p)/2}, -sin(t/2) e^{-i(w-p)/2}],
    //         [sin(t/2) e^{ i(w-p)/2},  cos(t/2) e^{ i(w+p)/2}]]
    let theta = 2.0 * a.norm().min(1.0).acos();

    if theta.abs() < EPSILON {
        // Pure Z rotation, only the sum of the outer angles is defined.
        let sum = -2.0 * a.arg();
        return EulerAngles::new(sum / 2.0, 0.0, sum / 2.0);
    }

    if (theta - PI).abs() < EPSILON {
        // Only the difference of the outer angles is defined.
        let diff = -2.0 * (-b).arg();
        return EulerAngles::new(-diff / 2.0, PI, diff / 2.0);
    }

    let sum = -2.0 * a.arg();
    let diff = 2.0 * c.arg();
    let omega = f64::midpoint(sum, diff);
    let phi = (sum - diff) / 2.0;
    EulerAngles::new(phi, theta, omega)
}

/// Decompose `u` into `RZ(phi) RY(theta) RZ(omega)` on `wire`.
///
/// The synthesized rotations are recorded into `ctx`; callers that only want
/// the angles run this inside [`QueuingContext::stop_recording`].
pub fn zyz_decomposition(u: &Unitary2x2, wire: QubitId, ctx: &mut QueuingContext) -> EulerAngles {
    let angles = zyz_angles(u);
    trace!(
        phi = angles.phi,
        theta = angles.theta,
        omega = angles.omega,
        recording = ctx.is_recording(),
        "extracted ZYZ angles"
    );
    ctx.extend([
        Operation::rz(angles.phi, wire),
        Operation::ry(angles.theta, wire),
        Operation::rz(angles.omega, wire),
    ]);
    angles
}

/// Check whether two unitaries agree up to a global phase.
pub fn equal_up_to_phase(lhs: &Unitary2x2, rhs: &Unitary2x2, tol: f64) -> bool {
    // Align phases on the largest entry of `rhs` to avoid dividing by ~0.
    let (idx, pivot) = rhs
        .data
        .iter()
        .enumerate()
        .max_by(|(_, x), (_, y)| x.norm().total_cmp(&y.norm()))
        .map(|(i, v)| (i, *v))
        .unwrap_or((0, Complex64::new(1.0, 0.0)));
    if lhs.data[idx].norm() < EPSILON {
        return false;
    }
    let phase = pivot / lhs.data[idx];
    lhs.scale(phase).approx_eq(rhs, tol)
}
