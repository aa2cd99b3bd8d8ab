//! Triangle intersection.
//!
//! Solves `e + t·d = a + β(b − a) + γ(c − a)` for `(β, γ, t)` with Cramer's
//! rule, i.e. the 3×3 system with columns `(a − b)`, `(a − c)`, `d` and
//! right-hand side `(a − e)`.

use crate::hittable::{Hit, Hittable};
use prism_core::Triangle;
use prism_math::{solve_cramer, Interval, Mat3, Ray, Vec3, DETERMINANT_EPSILON};

/// Accepted ray parameters for a triangle hit.
const TRIANGLE_DEPTH: Interval = Interval::new(0.0, 1e4);

impl Hittable for Triangle {
    fn hit(&self, ray: &Ray) -> Option<Hit> {
        let m = Mat3::from_cols(self.a - self.b, self.a - self.c, ray.direction());
        let rhs = self.a - ray.origin();

        // Ray parallel to the triangle, or a zero-area triangle
        let solution = solve_cramer(m, rhs, DETERMINANT_EPSILON)?;
        let (beta, gamma, t) = (solution.x, solution.y, solution.z);

        if !TRIANGLE_DEPTH.contains_above_min(t) {
            return None;
        }
        if !Interval::UNIT.contains(gamma) {
            return None;
        }
        if !Interval::new(0.0, 1.0 - gamma).contains(beta) {
            return None;
        }

        Some(Hit::with_uv(t, beta, gamma))
    }

    /// Face normal `(b − a) × (c − a)`, independent of the point.
    fn normal_at(&self, _p: Vec3) -> Vec3 {
        (self.b - self.a).cross(self.c - self.a).normalize_or_zero()
    }
}
