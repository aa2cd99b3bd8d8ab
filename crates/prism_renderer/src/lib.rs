//! Prism Renderer - CPU Whitted-style ray tracing
//!
//! Recursive ray tracer with Phong shading, hard shadows from a single
//! point light, and mirror reflection up to a fixed depth.
//!
//! Pipeline: [`Camera`] builds an [`ImagePlane`], every pixel casts a
//! primary ray through it, [`cast_ray`] shades the nearest hit and recurses
//! for reflections, and the result is dithered into a [`Framebuffer`].

mod camera;
mod error;
mod framebuffer;
mod hittable;
mod plane;
mod renderer;
mod sphere;
mod tracer;
mod triangle;

pub use camera::{Camera, ImagePlane};
pub use error::{RenderError, RenderResult};
pub use framebuffer::{Framebuffer, Rgb8};
pub use hittable::{closest_hit, occluded, Hit, Hittable};
pub use renderer::{
    color_to_rgb, dither, primary_ray, render, render_pixel, render_serial, trace_pixel,
    RenderConfig, RenderStats, DITHER_HALF_STEP, PRIMARY_BIAS,
};
pub use tracer::{
    cast_ray, reflect, PhongTerms, Shading, REFLECTION_BIAS, SHADOW_BIAS, SHADOW_CUTOFF,
};

/// Re-export scene types from prism_core
pub use prism_core::{Color, Plane, Scene, Sphere, Surface, Triangle};

/// Re-export Vec3 and common math types from prism_math
pub use prism_math::{Interval, Ray, Vec3};
