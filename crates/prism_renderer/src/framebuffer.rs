//! 8-bit RGB framebuffer and PNG IO.

use crate::error::RenderResult;
use bytemuck::{Pod, Zeroable};
use image::{imageops, ImageFormat, Rgb, RgbImage};
use std::path::Path;

/// One byte per channel, laid out as `r, g, b`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Row-major pixel grid. Row 0 is the bottom of the image.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb8>,
}

impl Framebuffer {
    /// Create a framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb8::BLACK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Linear index of pixel (x, y).
    #[inline]
    pub fn index_of(&self, x: u32, y: u32) -> usize {
        x as usize + self.width as usize * y as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Rgb8 {
        self.pixels[self.index_of(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, pixel: Rgb8) {
        let index = self.index_of(x, y);
        self.pixels[index] = pixel;
    }

    pub fn pixels(&self) -> &[Rgb8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgb8] {
        &mut self.pixels
    }

    /// Raw `r, g, b` bytes in row order.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Convert to an image with row 0 at the top.
    pub fn to_image(&self) -> RgbImage {
        let mut image = RgbImage::from_fn(self.width, self.height, |x, y| {
            let p = self.get(x, y);
            Rgb([p.r, p.g, p.b])
        });
        imageops::flip_vertical_in_place(&mut image);
        image
    }

    /// Inverse of [`Framebuffer::to_image`].
    pub fn from_image(image: &RgbImage) -> Self {
        let flipped = imageops::flip_vertical(image);
        let mut framebuffer = Self::new(flipped.width(), flipped.height());
        for (x, y, pixel) in flipped.enumerate_pixels() {
            let [r, g, b] = pixel.0;
            framebuffer.set(x, y, Rgb8::new(r, g, b));
        }
        framebuffer
    }

    /// Write the framebuffer as an RGB PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> RenderResult<()> {
        let path = path.as_ref();
        self.to_image().save_with_format(path, ImageFormat::Png)?;
        log::info!(
            "Wrote {}x{} PNG to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(())
    }

    /// Read a PNG written by [`Framebuffer::save_png`].
    pub fn load_png<P: AsRef<Path>>(path: P) -> RenderResult<Self> {
        let image = image::open(path)?.to_rgb8();
        Ok(Self::from_image(&image))
    }
}
