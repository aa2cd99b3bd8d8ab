//! Sphere intersection.

use crate::hittable::{Hit, Hittable};
use prism_core::Sphere;
use prism_math::{Ray, Vec3};

/// Rays with a squared direction length below this cannot be intersected.
const MIN_DIRECTION_LENGTH_SQUARED: f32 = 1e-12;

impl Hittable for Sphere {
    /// Substitutes the ray into |p - c|² = R² and solves the quadratic.
    ///
    /// Reports the smaller root. When that root is not positive (ray starts
    /// inside the sphere, or points away from it) the sphere is a miss.
    fn hit(&self, ray: &Ray) -> Option<Hit> {
        let d = ray.direction();
        let ec = ray.origin() - self.center;

        let a = d.length_squared();
        if a < MIN_DIRECTION_LENGTH_SQUARED {
            return None;
        }

        let half_b = d.dot(ec);
        let c = ec.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let t = (-half_b - discriminant.sqrt()) / a;
        if t > 0.0 {
            Some(Hit::new(t))
        } else {
            None
        }
    }

    fn normal_at(&self, p: Vec3) -> Vec3 {
        ((p - self.center) / self.radius).normalize_or_zero()
    }
}
