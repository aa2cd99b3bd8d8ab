//! Small linear-system helpers on top of glam.

use crate::{Mat3, Vec3};

/// Determinants with a smaller magnitude than this are treated as singular.
pub const DETERMINANT_EPSILON: f32 = 1e-8;

/// Solve `m * x = rhs` for `x` using Cramer's rule.
///
/// Each component of the solution is the determinant of `m` with the
/// matching column replaced by `rhs`, divided by the determinant of `m`.
/// Returns `None` when `|det(m)| < epsilon`.
pub fn solve_cramer(m: Mat3, rhs: Vec3, epsilon: f32) -> Option<Vec3> {
    let det = m.determinant();
    if det.is_nan() || det.abs() < epsilon {
        return None;
    }

    let x = Mat3::from_cols(rhs, m.y_axis, m.z_axis).determinant() / det;
    let y = Mat3::from_cols(m.x_axis, rhs, m.z_axis).determinant() / det;
    let z = Mat3::from_cols(m.x_axis, m.y_axis, rhs).determinant() / det;

    Some(Vec3::new(x, y, z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_identity() {
        let rhs = Vec3::new(1.0, -2.0, 3.5);
        let x = solve_cramer(Mat3::IDENTITY, rhs, DETERMINANT_EPSILON).unwrap();
        assert_eq!(x, rhs);
    }

    #[test]
    fn test_solve_matches_product() {
        let m = Mat3::from_cols(
            Vec3::new(2.0, 0.0, 1.0),
            Vec3::new(-1.0, 3.0, 0.0),
            Vec3::new(0.5, 1.0, 4.0),
        );
        let expected = Vec3::new(0.25, -1.5, 2.0);
        let rhs = m * expected;

        let x = solve_cramer(m, rhs, DETERMINANT_EPSILON).unwrap();
        assert!((x - expected).length() < 1e-5, "got {:?}", x);
    }

    #[test]
    fn test_solve_singular() {
        // Two identical columns
        let m = Mat3::from_cols(Vec3::X, Vec3::X, Vec3::Z);
        assert!(solve_cramer(m, Vec3::ONE, DETERMINANT_EPSILON).is_none());
    }

    #[test]
    fn test_solve_nan_is_singular() {
        let m = Mat3::from_cols(Vec3::splat(f32::NAN), Vec3::Y, Vec3::Z);
        assert!(solve_cramer(m, Vec3::ONE, DETERMINANT_EPSILON).is_none());
    }
}
