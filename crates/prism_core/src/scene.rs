//! Scene container for the ray tracer.
//!
//! A scene is an ordered list of surfaces plus one point light and the eye
//! position. It is built once and read-only while rendering, so it can be
//! shared across render threads by reference.

use prism_math::Vec3;

use crate::primitive::{Color, Plane, Sphere, Triangle};

/// One renderable surface.
///
/// Closed set of primitive kinds; every consumer matches on all of them, so
/// adding a variant is a compile error until intersection and normal
/// evaluation exist for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Surface {
    Sphere(Sphere),
    Triangle(Triangle),
    Plane(Plane),
}

impl Surface {
    /// Base color of the wrapped primitive.
    pub fn color(&self) -> Color {
        match self {
            Surface::Sphere(s) => s.color,
            Surface::Triangle(t) => t.color,
            Surface::Plane(p) => p.color,
        }
    }

    /// Short name of the primitive kind, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Surface::Sphere(_) => "sphere",
            Surface::Triangle(_) => "triangle",
            Surface::Plane(_) => "plane",
        }
    }
}

impl From<Sphere> for Surface {
    fn from(sphere: Sphere) -> Self {
        Surface::Sphere(sphere)
    }
}

impl From<Triangle> for Surface {
    fn from(triangle: Triangle) -> Self {
        Surface::Triangle(triangle)
    }
}

impl From<Plane> for Surface {
    fn from(plane: Plane) -> Self {
        Surface::Plane(plane)
    }
}

/// The complete scene: surfaces, light and eye.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    surfaces: Vec<Surface>,
    /// Point light position
    pub light: Vec3,
    /// Eye (camera) position
    pub eye: Vec3,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(eye: Vec3, light: Vec3) -> Self {
        Self {
            surfaces: Vec::new(),
            light,
            eye,
        }
    }

    /// Add a surface. Insertion order is kept.
    pub fn add(&mut self, surface: impl Into<Surface>) {
        self.surfaces.push(surface.into());
    }

    /// Builder form of [`Scene::add`].
    pub fn with(mut self, surface: impl Into<Surface>) -> Self {
        self.add(surface);
        self
    }

    /// All surfaces in insertion order.
    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    /// Get the number of surfaces.
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Check if the scene has no surfaces.
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Count surfaces by kind: (spheres, triangles, planes).
    pub fn counts(&self) -> (usize, usize, usize) {
        self.surfaces
            .iter()
            .fold((0, 0, 0), |(s, t, p), surface| match surface {
                Surface::Sphere(_) => (s + 1, t, p),
                Surface::Triangle(_) => (s, t + 1, p),
                Surface::Plane(_) => (s, t, p + 1),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_color() {
        let sphere = Sphere::default().with_color(Color::new(0.1, 0.2, 0.3));
        assert_eq!(Surface::from(sphere).color(), Color::new(0.1, 0.2, 0.3));

        let plane = Plane::new(Vec3::Y, Vec3::ZERO, Color::splat(0.4));
        assert_eq!(Surface::from(plane).color(), Color::splat(0.4));
    }

    #[test]
    fn test_scene_keeps_insertion_order() {
        let scene = Scene::new(Vec3::Z, Vec3::Y)
            .with(Plane::default())
            .with(Sphere::default())
            .with(Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y, Color::ONE));

        let kinds: Vec<_> = scene.surfaces().iter().map(Surface::kind).collect();
        assert_eq!(kinds, ["plane", "sphere", "triangle"]);
        assert_eq!(scene.len(), 3);
        assert_eq!(scene.counts(), (1, 1, 1));
    }

    #[test]
    fn test_empty_scene() {
        let scene = Scene::new(Vec3::ZERO, Vec3::ONE);
        assert!(scene.is_empty());
        assert_eq!(scene.counts(), (0, 0, 0));
        assert_eq!(scene.light, Vec3::ONE);
    }
}
