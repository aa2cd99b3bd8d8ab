//! Infinite plane intersection.

use crate::hittable::{Hit, Hittable};
use prism_core::Plane;
use prism_math::{Ray, Vec3};

/// Rays with |direction · normal| below this are treated as parallel.
const PARALLEL_EPSILON: f32 = 1e-5;

impl Hittable for Plane {
    fn hit(&self, ray: &Ray) -> Option<Hit> {
        let denom = ray.direction().dot(self.normal);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.origin - ray.origin()).dot(self.normal) / denom;
        if t < 0.0 {
            return None;
        }

        Some(Hit::new(t))
    }

    /// The configured normal, whichever side the point is seen from.
    fn normal_at(&self, _p: Vec3) -> Vec3 {
        self.normal.normalize_or_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::Color;

    fn ground() -> Plane {
        Plane::new(Vec3::Y, Vec3::ZERO, Color::splat(0.4))
    }

    #[test]
    fn test_plane_hit_from_above() {
        let ray = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let hit = ground().hit(&ray).unwrap();
        assert!((hit.t - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_plane_hit_from_below() {
        let ray = Ray::new(Vec3::new(1.0, -3.0, 1.0), Vec3::new(0.0, 1.0, 0.0));
        let hit = ground().hit(&ray).unwrap();
        assert!((hit.t - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_plane_hit_oblique() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, -1.0, 0.0));
        let hit = ground().hit(&ray).unwrap();
        assert!((ray.at(hit.t) - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_plane_parallel_is_miss_for_any_origin() {
        for origin in [
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(5.0, -2.0, 3.0),
            Vec3::ZERO,
        ] {
            for direction in [Vec3::X, Vec3::Z, Vec3::new(1.0, 0.0, -1.0)] {
                let ray = Ray::new(origin, direction);
                assert!(ground().hit(&ray).is_none());
            }
        }
    }

    #[test]
    fn test_plane_behind_is_miss() {
        let ray = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        assert!(ground().hit(&ray).is_none());
    }

    #[test]
    fn test_plane_normal_ignores_side() {
        let plane = Plane::new(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Color::ONE);
        assert_eq!(plane.normal_at(Vec3::new(0.0, 0.0, 1.0)), Vec3::Z);
        assert_eq!(plane.normal_at(Vec3::new(0.0, 0.0, -1.0)), Vec3::Z);
    }
}
