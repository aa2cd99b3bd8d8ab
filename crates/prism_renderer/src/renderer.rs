//! Render loop.
//!
//! Casts one primary ray per pixel, dithers the traced color and quantizes
//! it into a [`Framebuffer`]. Rows are independent, so [`render`] hands
//! them to rayon while [`render_serial`] walks them in order; both produce
//! the same image for the same seed.

use crate::camera::{Camera, ImagePlane};
use crate::error::{RenderError, RenderResult};
use crate::framebuffer::{Framebuffer, Rgb8};
use crate::tracer::{cast_ray, Shading};
use crate::Color;
use prism_core::Scene;
use prism_math::{Ray, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Offset applied to primary ray origins along the view direction.
pub const PRIMARY_BIAS: f32 = 1e-4;

/// Half of one 8-bit quantization step.
pub const DITHER_HALF_STEP: f32 = 1.0 / 512.0;

/// Largest camera/scene eye distance still treated as the same point.
const EYE_TOLERANCE: f32 = 1e-5;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Reflection bounces allowed after the primary hit (negative disables)
    pub reflection_depth: i32,
    pub shading: Shading,
    /// Add uniform noise before quantizing to hide banding
    pub dither: bool,
    /// Seed for the dither noise
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            reflection_depth: 1,
            shading: Shading::default(),
            dither: true,
            seed: 0,
        }
    }
}

/// Summary of a finished render.
#[derive(Debug, Clone, Copy)]
pub struct RenderStats {
    pub pixels: usize,
    pub elapsed: Duration,
}

impl RenderStats {
    pub fn pixels_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.pixels as f64 / secs
        } else {
            0.0
        }
    }
}

/// Primary ray from the eye through the center of pixel (x, y).
pub fn primary_ray(plane: &ImagePlane, eye: Vec3, x: u32, y: u32) -> Ray {
    let direction = (plane.pixel_to_3d(x, y) - eye).normalize_or_zero();
    Ray::new(eye, direction).nudged(PRIMARY_BIAS)
}

/// Undithered color of pixel (x, y).
pub fn trace_pixel(
    plane: &ImagePlane,
    eye: Vec3,
    scene: &Scene,
    config: &RenderConfig,
    x: u32,
    y: u32,
) -> Color {
    let ray = primary_ray(plane, eye, x, y);
    cast_ray(&ray, scene, &config.shading, config.reflection_depth)
}

/// Add the same uniform offset in `[-DITHER_HALF_STEP, DITHER_HALF_STEP]`
/// to every channel.
pub fn dither<R: Rng + ?Sized>(color: Color, rng: &mut R) -> Color {
    let offset = rng.gen_range(-DITHER_HALF_STEP..=DITHER_HALF_STEP);
    color + Color::splat(offset)
}

/// Clamp each channel to [0, 1] and scale to a byte.
pub fn color_to_rgb(color: Color) -> Rgb8 {
    let c = color.clamp(Color::ZERO, Color::ONE) * 255.0;
    Rgb8::new(c.x as u8, c.y as u8, c.z as u8)
}

/// Final 8-bit value of pixel (x, y).
pub fn render_pixel<R: Rng + ?Sized>(
    plane: &ImagePlane,
    eye: Vec3,
    scene: &Scene,
    config: &RenderConfig,
    x: u32,
    y: u32,
    rng: &mut R,
) -> Rgb8 {
    let mut color = trace_pixel(plane, eye, scene, config, x, y);
    if config.dither {
        color = dither(color, rng);
    }
    color_to_rgb(color)
}

/// Dither source for one row, independent of which thread renders it.
fn row_rng(seed: u64, y: u32) -> StdRng {
    StdRng::seed_from_u64(seed.wrapping_add((y as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)))
}

fn render_row(
    row: &mut [Rgb8],
    y: u32,
    plane: &ImagePlane,
    eye: Vec3,
    scene: &Scene,
    config: &RenderConfig,
) {
    let mut rng = row_rng(config.seed, y);
    for (x, pixel) in row.iter_mut().enumerate() {
        *pixel = render_pixel(plane, eye, scene, config, x as u32, y, &mut rng);
    }
}

/// Image plane of `camera`, which must look from the scene's eye.
fn image_plane_for(camera: &Camera, scene: &Scene) -> RenderResult<ImagePlane> {
    if !camera.eye().abs_diff_eq(scene.eye, EYE_TOLERANCE) {
        return Err(RenderError::EyeMismatch {
            camera: camera.eye(),
            scene: scene.eye,
        });
    }
    camera.image_plane()
}

/// Render the scene with rows distributed over the rayon thread pool.
pub fn render(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
) -> RenderResult<(Framebuffer, RenderStats)> {
    let plane = image_plane_for(camera, scene)?;
    let eye = scene.eye;
    let mut framebuffer = Framebuffer::new(plane.width(), plane.height());

    log::info!(
        "Rendering {}x{} on {} threads",
        plane.width(),
        plane.height(),
        rayon::current_num_threads()
    );
    let start = Instant::now();

    framebuffer
        .pixels_mut()
        .par_chunks_mut(plane.width() as usize)
        .enumerate()
        .for_each(|(y, row)| render_row(row, y as u32, &plane, eye, scene, config));

    let stats = finish(&framebuffer, start);
    Ok((framebuffer, stats))
}

/// Render the scene on the calling thread in raster order.
pub fn render_serial(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
) -> RenderResult<(Framebuffer, RenderStats)> {
    let plane = image_plane_for(camera, scene)?;
    let eye = scene.eye;
    let mut framebuffer = Framebuffer::new(plane.width(), plane.height());

    log::info!("Rendering {}x{} serially", plane.width(), plane.height());
    let start = Instant::now();

    for (y, row) in framebuffer
        .pixels_mut()
        .chunks_mut(plane.width() as usize)
        .enumerate()
    {
        render_row(row, y as u32, &plane, eye, scene, config);
    }

    let stats = finish(&framebuffer, start);
    Ok((framebuffer, stats))
}

fn finish(framebuffer: &Framebuffer, start: Instant) -> RenderStats {
    let stats = RenderStats {
        pixels: framebuffer.pixels().len(),
        elapsed: start.elapsed(),
    };
    log::info!(
        "Rendered {} pixels in {:.2?} ({:.0} px/s)",
        stats.pixels,
        stats.elapsed,
        stats.pixels_per_second()
    );
    stats
}
