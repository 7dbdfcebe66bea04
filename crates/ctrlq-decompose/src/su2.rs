//! SU(2) parametrization.

use ctrlq_ir::Unitary2x2;
use num_complex::Complex64;

/// Build `[[ar + i·ai, -br + i·bi], [br + i·bi, ar - i·ai]]`.
///
/// The result lies in SU(2) only when `ar² + ai² + br² + bi² = 1`; nothing is
/// checked here, callers verify the determinant when it matters.
pub fn param_su2(ar: f64, ai: f64, br: f64, bi: f64) -> Unitary2x2 {
    Unitary2x2::new(
        Complex64::new(ar, ai),
        Complex64::new(-br, bi),
        Complex64::new(br, bi),
        Complex64::new(ar, -ai),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_parameters() {
        assert!(param_su2(1.0, 0.0, 0.0, 0.0).approx_eq(&Unitary2x2::identity(), 0.0));
    }

    #[test]
    fn test_unit_sphere_is_su2() {
        let (ar, ai, br, bi) = (0.5, -0.5, 0.5, 0.5);
        let m = param_su2(ar, ai, br, bi);
        assert!((m.det() - Complex64::new(1.0, 0.0)).norm() < 1e-12);
        assert!(m.is_unitary(1e-12));
    }

    #[test]
    fn test_determinant_is_squared_norm() {
        let m = param_su2(1.0, 1.0, 1.0, 1.0);
        assert!((m.det() - Complex64::new(4.0, 0.0)).norm() < 1e-12);
        assert!(!m.is_unitary(1e-8));
    }

    #[test]
    fn test_rotations_in_parametrized_form() {
        let t: f64 = 0.7;
        let ry = param_su2((t / 2.0).cos(), 0.0, (t / 2.0).sin(), 0.0);
        assert!(ry.approx_eq(&Unitary2x2::ry(t), 1e-12));
        let rz = param_su2((t / 2.0).cos(), -(t / 2.0).sin(), 0.0, 0.0);
        assert!(rz.approx_eq(&Unitary2x2::rz(t), 1e-12));
    }
}
