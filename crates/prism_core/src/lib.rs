//! Prism Core - Scene description for the Whitted ray tracer.
//!
//! This crate provides:
//!
//! - **Primitives**: `Sphere`, `Triangle`, `Plane` value types
//! - **Scene**: the `Surface` sum type and the `Scene` container
//! - **Configuration**: the `width`/`height` parameter file
//! - **Presets**: the built-in scenes and view settings
//!
//! # Example
//!
//! ```ignore
//! use prism_core::{RenderParams, ScenePreset};
//!
//! let params = RenderParams::from_file("parameters.txt")?;
//! let scene = ScenePreset::Tree.build();
//! println!("{}x{}, {} surfaces", params.width, params.height, scene.len());
//! ```

pub mod config;
pub mod presets;
pub mod primitive;
pub mod scene;

// Re-export commonly used types
pub use config::{ConfigError, ConfigResult, RenderParams};
pub use presets::{ScenePreset, ViewSettings};
pub use primitive::{Color, Plane, Sphere, Triangle};
pub use scene::{Scene, Surface};
