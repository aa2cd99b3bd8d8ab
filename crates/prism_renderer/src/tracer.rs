//! Recursive Whitted ray tracing.
//!
//! Implements:
//! - Phong local illumination from a single point light
//! - Hard shadows via one shadow ray per hit
//! - Mirror reflection with a bounded recursion depth

use crate::hittable::{closest_hit, occluded, Hittable};
use crate::Color;
use prism_core::Scene;
use prism_math::{Interval, Ray, Vec3};

/// Offset applied to shadow ray origins along the light direction.
pub const SHADOW_BIAS: f32 = 1e-4;

/// Offset applied to reflection ray origins along the reflected direction.
pub const REFLECTION_BIAS: f32 = 1e-4;

/// Hits at or beyond this shadow-ray parameter do not occlude.
pub const SHADOW_CUTOFF: f32 = 1e5;

/// Lighting coefficients shared by every surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shading {
    pub ambient: f32,
    pub diffuse: f32,
    pub specular: f32,
    /// Specular exponent
    pub shininess: i32,
    /// Weight of the reflected contribution
    pub reflectivity: f32,
    /// Color returned when a ray hits nothing
    pub background: Color,
}

impl Default for Shading {
    fn default() -> Self {
        Self {
            ambient: 0.1,
            diffuse: 0.3,
            specular: 0.5,
            shininess: 32,
            reflectivity: 0.7,
            background: Color::splat(0.1),
        }
    }
}

/// The three Phong contributions at a point, kept apart so shadowed points
/// can fall back to ambient alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhongTerms {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
}

impl PhongTerms {
    #[inline]
    pub fn total(&self) -> Color {
        self.ambient + self.diffuse + self.specular
    }
}

impl Shading {
    /// Evaluate Phong lighting for a surface color.
    ///
    /// `normal`, `to_light` and `view` must be unit vectors. `view` points
    /// from the eye toward the surface.
    pub fn phong(&self, color: Color, normal: Vec3, to_light: Vec3, view: Vec3) -> PhongTerms {
        let ambient = self.ambient * color;

        let diff = normal.dot(to_light).max(0.0);
        let diffuse = diff * self.diffuse * color;

        let spec = view.dot(reflect(to_light, normal)).max(0.0).powi(self.shininess);
        let specular = spec * self.specular * color;

        PhongTerms {
            ambient,
            diffuse,
            specular,
        }
    }
}

/// Mirror `v` about the plane with unit normal `n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Compute the color seen along a ray.
///
/// `remaining_depth` counts the reflection bounces still allowed: a value
/// `>= 0` spawns one more reflection ray with `remaining_depth - 1`, a
/// negative value stops the recursion.
///
/// Highlights are always seen from `scene.eye`, also on reflected bounces.
/// The reflected ray mirrors the incoming direction.
pub fn cast_ray(ray: &Ray, scene: &Scene, shading: &Shading, remaining_depth: i32) -> Color {
    let Some((surface, hit)) = closest_hit(scene.surfaces(), ray) else {
        return shading.background;
    };

    let p = ray.at(hit.t);
    let normal = surface.normal_at(p);
    let to_light = (scene.light - p).normalize_or_zero();
    let view = (p - scene.eye).normalize_or_zero();
    let incoming = ray.direction().normalize_or_zero();

    let terms = shading.phong(surface.color(), normal, to_light, view);

    let shadow_ray = Ray::new(p, to_light).nudged(SHADOW_BIAS);
    let shadow_range = Interval::new(0.0, SHADOW_CUTOFF);
    let mut color = if occluded(scene.surfaces(), &shadow_ray, shadow_range) {
        terms.ambient
    } else {
        terms.total()
    };

    if remaining_depth >= 0 {
        let reflected = Ray::new(p, reflect(incoming, normal)).nudged(REFLECTION_BIAS);
        color += shading.reflectivity * cast_ray(&reflected, scene, shading, remaining_depth - 1);
    }

    color
}
