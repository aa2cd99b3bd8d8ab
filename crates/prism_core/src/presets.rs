//! Built-in scenes.
//!
//! Three fixed scenes share one ground plane and one set of view settings.

use prism_math::Vec3;

use crate::primitive::{Color, Plane, Sphere, Triangle};
use crate::scene::Scene;

/// Camera and light placement shared by the built-in scenes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSettings {
    pub eye: Vec3,
    pub look_at: Vec3,
    pub up: Vec3,
    /// Physical width of the image plane
    pub viewport_width: f32,
    /// Physical height of the image plane
    pub viewport_height: f32,
    /// Distance from the eye to the image plane
    pub near_distance: f32,
    pub light: Vec3,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 7.5, 15.0),
            look_at: Vec3::ZERO,
            up: Vec3::Y,
            viewport_width: 50.0,
            viewport_height: 50.0,
            near_distance: 50.0,
            light: Vec3::new(20.0, 15.0, 10.0),
        }
    }
}

/// Selects one of the built-in scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScenePreset {
    /// Three spheres and two flat blue triangles.
    Shapes,
    /// Five spheres stacked in a cross.
    Tower,
    /// Two green triangles forming a tree, with five small ornaments.
    #[default]
    Tree,
}

impl ScenePreset {
    /// All presets, in numbering order.
    pub const ALL: [ScenePreset; 3] = [
        ScenePreset::Shapes,
        ScenePreset::Tower,
        ScenePreset::Tree,
    ];

    /// Look up a preset by its 1-based number.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(ScenePreset::Shapes),
            2 => Some(ScenePreset::Tower),
            3 => Some(ScenePreset::Tree),
            _ => None,
        }
    }

    /// The preset's 1-based number.
    pub fn index(self) -> u8 {
        match self {
            ScenePreset::Shapes => 1,
            ScenePreset::Tower => 2,
            ScenePreset::Tree => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScenePreset::Shapes => "shapes",
            ScenePreset::Tower => "tower",
            ScenePreset::Tree => "tree",
        }
    }

    /// Build the scene with the default view settings.
    pub fn build(self) -> Scene {
        self.build_with(&ViewSettings::default())
    }

    /// Build the scene using the eye and light from `view`.
    pub fn build_with(self, view: &ViewSettings) -> Scene {
        let mut scene = Scene::new(view.eye, view.light);
        scene.add(ground_plane());

        match self {
            ScenePreset::Shapes => add_shapes(&mut scene),
            ScenePreset::Tower => add_tower(&mut scene),
            ScenePreset::Tree => add_tree(&mut scene),
        }

        scene
    }
}

/// Grey ground plane y = 0 present in every preset.
pub fn ground_plane() -> Plane {
    Plane::new(Vec3::Y, Vec3::ZERO, Color::splat(0.4))
}

fn add_shapes(scene: &mut Scene) {
    let blue = Color::new(0.0, 0.0, 1.0);

    let red = Sphere::default().color;

    scene.add(Sphere::new(Vec3::new(0.0, 1.0, 0.0), 1.0, Color::new(1.0, 1.0, 0.0)));
    scene.add(Sphere::new(Vec3::new(1.5, 3.2, 0.0), 1.0, red));
    scene.add(Sphere::new(Vec3::new(-1.5, 3.2, 0.0), 1.0, Color::new(0.0, 1.0, 0.0)));
    scene.add(Triangle::new(
        Vec3::new(0.0, 2.2, 0.0),
        Vec3::new(3.0, 2.2, -1.5),
        Vec3::new(3.0, 2.2, 1.5),
        blue,
    ));
    scene.add(Triangle::new(
        Vec3::new(0.0, 2.2, 0.0),
        Vec3::new(-3.0, 2.2, -1.5),
        Vec3::new(-3.0, 2.2, 1.5),
        blue,
    ));
}

fn add_tower(scene: &mut Scene) {
    let spheres = [
        (Vec3::new(0.0, 1.0, 0.0), Color::new(1.0, 0.0, 0.0)),
        (Vec3::new(0.0, 3.0, 0.0), Color::new(0.0, 0.5, 0.0)),
        (Vec3::new(0.0, 5.0, 0.0), Color::new(0.0, 0.0, 1.0)),
        (Vec3::new(-2.0, 3.0, 0.0), Color::new(0.5, 0.5, 0.0)),
        (Vec3::new(2.0, 3.0, 0.0), Color::new(0.0, 0.5, 0.5)),
    ];

    for (center, color) in spheres {
        scene.add(Sphere::new(center, 1.0, color));
    }
}

fn add_tree(scene: &mut Scene) {
    let top = Vec3::new(0.0, 6.0, -1.0);
    let green = Triangle::DEFAULT_COLOR;
    scene.add(Triangle::new(Vec3::ZERO, Vec3::new(3.0, 0.0, -2.0), top, green));
    scene.add(Triangle::new(Vec3::ZERO, Vec3::new(-3.0, 0.0, -2.0), top, green));

    let ornaments = [
        (Vec3::new(0.7, 4.0, -1.0), Color::new(1.0, 0.0, 0.0)),
        (Vec3::new(-0.7, 3.0, -0.6), Color::new(1.0, 0.0, 1.0)),
        (Vec3::new(-1.8, 1.0, -1.0), Color::new(1.0, 1.0, 0.0)),
        (Vec3::new(0.6, 1.6, -0.6), Color::new(0.0, 0.4, 1.0)),
        (Vec3::new(-0.2, 4.8, -0.5), Color::new(1.0, 0.55, 0.63)),
    ];

    for (center, color) in ornaments {
        scene.add(Sphere::new(center, 0.3, color));
    }
}
