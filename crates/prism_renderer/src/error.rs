use prism_math::Vec3;
use thiserror::Error;

/// Errors that can occur while setting up a render or writing its output.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Degenerate camera: {0}")]
    DegenerateCamera(&'static str),

    #[error("Camera eye {camera:?} does not match scene eye {scene:?}")]
    EyeMismatch { camera: Vec3, scene: Vec3 },
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;
