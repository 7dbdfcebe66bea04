//! Root-finder for the bisection factor.
//!
//! Given a target `U` in SU(2) with a real off-diagonal, find `A` in SU(2)
//! with `A† X A X A† X A X = U`. `A` is parametrized by four reals through
//! [`param_su2`] and the first row of the residual is driven to zero with a
//! damped Gauss-Newton (Levenberg-Marquardt) iteration starting at the
//! identity. The product always has a real `(0, 1)` entry, so the Jacobian
//! never has full rank and plain Newton steps are not usable.

use ctrlq_ir::Unitary2x2;
use nalgebra::{Matrix4, Vector4};
use tracing::{debug, instrument, warn};

use crate::config::SolverConfig;
use crate::error::{DecomposeError, DecomposeResult};
use crate::su2::param_su2;

/// Damping above which the iteration is considered stalled.
const MAX_DAMPING: f64 = 1e16;

/// Smallest damping, keeps the damped normal matrix positive definite.
const MIN_DAMPING: f64 = 1e-10;

/// `A† X A X A† X A X`.
pub fn conjugation_square(a: &Unitary2x2) -> Unitary2x2 {
    let x = Unitary2x2::x();
    let half = a.dagger() * x * *a * x;
    half * half
}

fn factor(params: &Vector4<f64>) -> Unitary2x2 {
    param_su2(params[0], params[1], params[2], params[3])
}

/// First row of `conjugation_square(A) - U`, real parts then imaginary parts.
fn residual(params: &Vector4<f64>, target: &Unitary2x2) -> Vector4<f64> {
    let p = conjugation_square(&factor(params));
    let d0 = p.data[0] - target.data[0];
    let d1 = p.data[1] - target.data[1];
    Vector4::new(d0.re, d1.re, d0.im, d1.im)
}

fn jacobian(params: &Vector4<f64>, target: &Unitary2x2, step: f64) -> Matrix4<f64> {
    let mut jac = Matrix4::zeros();
    for k in 0..4 {
        let mut forward = *params;
        let mut backward = *params;
        forward[k] += step;
        backward[k] -= step;
        let column = (residual(&forward, target) - residual(&backward, target)) / (2.0 * step);
        jac.set_column(k, &column);
    }
    jac
}

/// Solve for the bisection factor `A` of `u`.
///
/// `u` must already be normalized to SU(2) with a real off-diagonal. Fails
/// with [`DecomposeError::NoConvergence`] when the residual does not reach
/// `config.residual_tolerance`, and with [`DecomposeError::NotSu2`] when the
/// solution's determinant is further than `config.su2_tolerance` from 1.
#[instrument(skip_all)]
pub fn compute_bisection_factor(
    u: &Unitary2x2,
    config: &SolverConfig,
) -> DecomposeResult<Unitary2x2> {
    let mut params = Vector4::new(1.0, 0.0, 0.0, 0.0);
    let mut f = residual(&params, u);
    let mut cost = f.norm_squared();
    let mut damping = config.initial_damping;
    let mut iterations = 0;

    while f.norm() > config.residual_tolerance {
        if iterations == config.max_iterations || damping > MAX_DAMPING {
            warn!(
                iterations,
                residual = f.norm(),
                damping,
                "bisection factor search did not converge"
            );
            return Err(DecomposeError::NoConvergence {
                matrix: *u,
                iterations,
            });
        }
        iterations += 1;

        let jac = jacobian(&params, u, config.jacobian_step);
        let jt = jac.transpose();
        let gradient = jt * f;
        let normal = jt * jac + Matrix4::identity() * damping;

        let Some(step) = normal.cholesky().map(|c| c.solve(&(-gradient))) else {
            damping *= 10.0;
            continue;
        };

        let candidate = params + step;
        let candidate_f = residual(&candidate, u);
        let candidate_cost = candidate_f.norm_squared();
        if candidate_cost < cost {
            params = candidate;
            f = candidate_f;
            cost = candidate_cost;
            damping = (damping / 10.0).max(MIN_DAMPING);
        } else {
            damping *= 10.0;
        }
    }

    let a = ensure_su2(factor(&params), config.su2_tolerance)?;
    debug!(iterations, residual = f.norm(), "solved bisection factor");
    Ok(a)
}

/// Reject `a` unless its determinant is within `tol` of 1.
fn ensure_su2(a: Unitary2x2, tol: f64) -> DecomposeResult<Unitary2x2> {
    let determinant = a.det();
    if (determinant - 1.0).norm() > tol {
        return Err(DecomposeError::NotSu2 {
            matrix: a,
            determinant,
        });
    }
    Ok(a)
}
