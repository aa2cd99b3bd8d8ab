//! Hittable trait and Hit record for ray-surface intersection.

use prism_core::Surface;
use prism_math::{Interval, Ray, Vec3};

/// Record of a ray-surface intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Surface coordinates at the hit (barycentric beta/gamma for
    /// triangles, zero otherwise)
    pub u: f32,
    pub v: f32,
}

impl Hit {
    /// Create a hit at parameter t.
    #[inline]
    pub fn new(t: f32) -> Self {
        Self { t, u: 0.0, v: 0.0 }
    }

    /// Create a hit at parameter t with surface coordinates.
    #[inline]
    pub fn with_uv(t: f32, u: f32, v: f32) -> Self {
        Self { t, u, v }
    }
}

/// Intersection and shading-normal evaluation for one kind of surface.
///
/// The two methods belong together: a new primitive needs both.
pub trait Hittable {
    /// Test if a ray hits this surface.
    ///
    /// Implementations return `None` for degenerate configurations instead
    /// of dividing by near-zero denominators. Callers still filter `t > 0`.
    fn hit(&self, ray: &Ray) -> Option<Hit>;

    /// Unit normal at a point on the surface, pointing away from it.
    fn normal_at(&self, p: Vec3) -> Vec3;
}

impl Hittable for Surface {
    #[inline]
    fn hit(&self, ray: &Ray) -> Option<Hit> {
        match self {
            Surface::Sphere(sphere) => sphere.hit(ray),
            Surface::Triangle(triangle) => triangle.hit(ray),
            Surface::Plane(plane) => plane.hit(ray),
        }
    }

    #[inline]
    fn normal_at(&self, p: Vec3) -> Vec3 {
        match self {
            Surface::Sphere(sphere) => sphere.normal_at(p),
            Surface::Triangle(triangle) => triangle.normal_at(p),
            Surface::Plane(plane) => plane.normal_at(p),
        }
    }
}

/// Find the surface with the smallest strictly positive hit parameter.
///
/// Linear scan in list order; on exactly equal depths the first surface
/// wins.
pub fn closest_hit<'a>(surfaces: &'a [Surface], ray: &Ray) -> Option<(&'a Surface, Hit)> {
    let mut closest = None;
    // Sentinel: larger than any finite depth
    let mut closest_t = f32::INFINITY;

    for surface in surfaces {
        if let Some(hit) = surface.hit(ray) {
            if hit.t > 0.0 && hit.t < closest_t {
                closest_t = hit.t;
                closest = Some((surface, hit));
            }
        }
    }

    closest
}

/// True if any surface is hit strictly inside `range`.
pub fn occluded(surfaces: &[Surface], ray: &Ray, range: Interval) -> bool {
    surfaces
        .iter()
        .filter_map(|surface| surface.hit(ray))
        .any(|hit| range.surrounds(hit.t))
}
