//! Camera and image plane for primary ray generation.

use crate::error::{RenderError, RenderResult};
use prism_core::ViewSettings;
use prism_math::Vec3;

/// Smallest cross-product length accepted when building the camera basis.
const MIN_BASIS_LENGTH: f32 = 1e-6;

/// Pinhole camera looking through a rectangular image plane.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // Camera positioning
    eye: Vec3,
    look_at: Vec3,
    up: Vec3,

    // Image plane settings
    viewport_width: f32,
    viewport_height: f32,
    near_distance: f32,
}

impl Camera {
    /// Create a new camera at the built-in view, rendering 1000×1000.
    pub fn new() -> Self {
        Self::from_view(&ViewSettings::default())
    }

    /// Create a camera from shared view settings.
    pub fn from_view(view: &ViewSettings) -> Self {
        Self {
            image_width: 1000,
            image_height: 1000,
            eye: view.eye,
            look_at: view.look_at,
            up: view.up,
            viewport_width: view.viewport_width,
            viewport_height: view.viewport_height,
            near_distance: view.near_distance,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, eye: Vec3, look_at: Vec3, up: Vec3) -> Self {
        self.eye = eye;
        self.look_at = look_at;
        self.up = up;
        self
    }

    /// Set the physical size of the image plane.
    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Set the distance from the eye to the image plane.
    pub fn with_near_distance(mut self, distance: f32) -> Self {
        self.near_distance = distance;
        self
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Build the image plane.
    ///
    /// The basis is `gaze = normalize(look_at − eye)`,
    /// `right = normalize(gaze × up)` and `up' = normalize(right × gaze)`,
    /// so `up` only needs to be non-collinear with the gaze.
    pub fn image_plane(&self) -> RenderResult<ImagePlane> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(RenderError::DegenerateCamera("resolution must be non-zero"));
        }

        let gaze = (self.look_at - self.eye)
            .try_normalize()
            .ok_or(RenderError::DegenerateCamera("eye and look-at coincide"))?;

        let right = gaze.cross(self.up);
        if right.length() < MIN_BASIS_LENGTH {
            return Err(RenderError::DegenerateCamera("up is collinear with gaze"));
        }
        let right = right.normalize();
        let up = right.cross(gaze).normalize();

        log::debug!(
            "Camera basis: gaze={:?} right={:?} up={:?}",
            gaze,
            right,
            up
        );

        Ok(ImagePlane {
            center: self.eye + gaze * self.near_distance,
            right,
            up,
            left: -0.5 * self.viewport_width,
            bottom: -0.5 * self.viewport_height,
            width: self.image_width,
            height: self.image_height,
        })
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Rectangle in world space that pixel coordinates map onto.
///
/// Symmetric about its center: right extent is `-left`, top is `-bottom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePlane {
    pub center: Vec3,
    pub right: Vec3,
    pub up: Vec3,
    pub left: f32,
    pub bottom: f32,
    width: u32,
    height: u32,
}

impl ImagePlane {
    /// World-space point at the center of pixel (x, y).
    ///
    /// Pixel (0, 0) is the bottom-left corner of the plane.
    pub fn pixel_to_3d(&self, x: u32, y: u32) -> Vec3 {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;

        let u = self.left + 2.0 * self.left.abs() * px / self.width as f32;
        let v = self.bottom + 2.0 * self.bottom.abs() * py / self.height as f32;

        self.center + u * self.right + v * self.up
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn looking_down_z() -> Camera {
        Camera::new()
            .with_resolution(100, 50)
            .with_position(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
            .with_viewport(20.0, 10.0)
            .with_near_distance(5.0)
    }

    #[test]
    fn test_camera_defaults_match_view() {
        let camera = Camera::new();
        let view = ViewSettings::default();
        assert_eq!(camera.image_width, 1000);
        assert_eq!(camera.image_height, 1000);
        assert_eq!(camera.eye(), view.eye);
    }

    #[test]
    fn test_basis_is_orthonormal() {
        // Up hint deliberately not perpendicular to the gaze
        let plane = Camera::new().image_plane().unwrap();
        let gaze = (ViewSettings::default().look_at - ViewSettings::default().eye).normalize();

        assert!((plane.right.length() - 1.0).abs() < 1e-5);
        assert!((plane.up.length() - 1.0).abs() < 1e-5);
        assert!(plane.right.dot(plane.up).abs() < 1e-5);
        assert!(plane.right.dot(gaze).abs() < 1e-5);
        assert!(plane.up.dot(gaze).abs() < 1e-5);
        // Up stays on the same side as the hint
        assert!(plane.up.y > 0.0);
    }

    #[test]
    fn test_image_plane_center_and_axes() {
        let plane = looking_down_z().image_plane().unwrap();

        assert!((plane.center - Vec3::new(0.0, 0.0, -5.0)).length() < 1e-6);
        assert!((plane.right - Vec3::X).length() < 1e-6);
        assert!((plane.up - Vec3::Y).length() < 1e-6);
        assert_eq!(plane.left, -10.0);
        assert_eq!(plane.bottom, -5.0);
    }

    #[test]
    fn test_pixel_centers() {
        let plane = looking_down_z().image_plane().unwrap();

        // Pixel size is 0.2 × 0.2 world units
        let bottom_left = plane.pixel_to_3d(0, 0);
        assert!((bottom_left - Vec3::new(-9.9, -4.9, -5.0)).length() < 1e-4);

        let top_right = plane.pixel_to_3d(99, 49);
        assert!((top_right - Vec3::new(9.9, 4.9, -5.0)).length() < 1e-4);

        // The middle pixel pair straddles the center symmetrically
        let a = plane.pixel_to_3d(49, 24);
        let b = plane.pixel_to_3d(50, 25);
        assert!(((a + b) * 0.5 - plane.center).length() < 1e-4);
    }

    #[test]
    fn test_degenerate_cameras() {
        let zero_res = looking_down_z().with_resolution(0, 10);
        assert!(matches!(
            zero_res.image_plane(),
            Err(RenderError::DegenerateCamera(_))
        ));

        let same_point = looking_down_z().with_position(Vec3::ONE, Vec3::ONE, Vec3::Y);
        assert!(matches!(
            same_point.image_plane(),
            Err(RenderError::DegenerateCamera(_))
        ));

        let collinear_up =
            looking_down_z().with_position(Vec3::ZERO, Vec3::new(0.0, 5.0, 0.0), Vec3::Y);
        assert!(matches!(
            collinear_up.image_plane(),
            Err(RenderError::DegenerateCamera(_))
        ));
    }
}
