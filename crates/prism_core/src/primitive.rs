//! Geometric primitives.
//!
//! Plain values holding shape parameters and a surface color. Intersection
//! and normal evaluation live in the renderer.

use prism_math::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// A sphere given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub color: Color,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    /// Set the radius.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Default for Sphere {
    /// Unit sphere at the origin, red.
    fn default() -> Self {
        Self::new(Vec3::ZERO, 1.0, Color::new(1.0, 0.0, 0.0))
    }
}

/// A triangle given by three vertices.
///
/// Vertex order only decides which way the normal points:
/// `(b - a) × (c - a)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
    pub color: Color,
}

impl Triangle {
    /// Color used by the built-in scenes when none is given.
    pub const DEFAULT_COLOR: Color = Color::new(0.0, 1.0, 0.0);

    /// Create a new triangle from three vertices.
    pub fn new(a: Vec3, b: Vec3, c: Vec3, color: Color) -> Self {
        Self { a, b, c, color }
    }

    /// Vertices as an array, in order.
    pub fn vertices(&self) -> [Vec3; 3] {
        [self.a, self.b, self.c]
    }

    /// Translate all three vertices.
    pub fn translated(mut self, offset: Vec3) -> Self {
        self.a += offset;
        self.b += offset;
        self.c += offset;
        self
    }

    /// Scale all three vertices about the origin.
    pub fn scaled(mut self, s: f32) -> Self {
        self.a *= s;
        self.b *= s;
        self.c *= s;
        self
    }

    /// Point from barycentric weights `(1 - beta - gamma, beta, gamma)`.
    pub fn point_at(&self, beta: f32, gamma: f32) -> Vec3 {
        (1.0 - beta - gamma) * self.a + beta * self.b + gamma * self.c
    }
}

/// An infinite plane through `origin` with the given normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub origin: Vec3,
    pub color: Color,
}

impl Plane {
    /// Create a new plane.
    pub fn new(normal: Vec3, origin: Vec3, color: Color) -> Self {
        Self {
            normal,
            origin,
            color,
        }
    }
}

impl Default for Plane {
    /// Ground plane y = 0, facing +Y, black.
    fn default() -> Self {
        Self::new(Vec3::Y, Vec3::ZERO, Color::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_defaults() {
        let s = Sphere::default();
        assert_eq!(s.center, Vec3::ZERO);
        assert_eq!(s.radius, 1.0);
        assert_eq!(s.color, Color::new(1.0, 0.0, 0.0));

        let s = s.with_radius(0.3).with_color(Color::ONE);
        assert_eq!(s.radius, 0.3);
        assert_eq!(s.color, Color::ONE);
    }

    #[test]
    fn test_triangle_transform() {
        let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y, Color::ONE);

        let moved = tri.translated(Vec3::Z);
        assert_eq!(moved.vertices(), [Vec3::Z, Vec3::X + Vec3::Z, Vec3::Y + Vec3::Z]);

        let scaled = tri.scaled(2.0);
        assert_eq!(scaled.b, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(scaled.color, tri.color);
    }

    #[test]
    fn test_triangle_point_at() {
        let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y, Color::ONE);

        assert_eq!(tri.point_at(0.0, 0.0), tri.a);
        assert_eq!(tri.point_at(1.0, 0.0), tri.b);
        assert_eq!(tri.point_at(0.0, 1.0), tri.c);
        assert_eq!(tri.point_at(0.5, 0.5), Vec3::new(0.5, 0.5, 0.0));
    }

    #[test]
    fn test_plane_default() {
        let p = Plane::default();
        assert_eq!(p.normal, Vec3::Y);
        assert_eq!(p.origin, Vec3::ZERO);
    }
}
