//! Render loop and output image buffer.
//!
//! One unnormalized pinhole ray per pixel, no super-sampling. The field
//! of view is implicit in the resolution-to-projection-depth ratio; there
//! is no FOV parameter.

use std::path::Path;

use rayon::prelude::*;

use crate::{trace, Color, Ray, Scene, Vec3};

/// Framebuffer of linear, unclamped colors.
///
/// Row-major with row 0 at the *bottom* of the visual output (the
/// origin-lower convention). `to_rgba8` flips to the top-down order that
/// image files expect.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with a solid color.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y), y counted from the bottom row.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y), y counted from the bottom row.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to 8-bit RGBA bytes in top-down row order.
    ///
    /// This is the display boundary: channels are clamped to [0, 1]
    /// here and nowhere else. No gamma curve is applied.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                bytes.extend_from_slice(&color_to_rgba8(self.get(x, y)));
            }
        }
        bytes
    }

    /// Save the image as a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        let rgba = image::RgbaImage::from_raw(self.width, self.height, self.to_rgba8())
            .unwrap_or_else(|| image::RgbaImage::new(self.width, self.height));
        rgba.save(path.as_ref())
    }
}

/// Convert an unclamped linear color to 8-bit RGBA.
fn color_to_rgba8(color: Color) -> [u8; 4] {
    let r = (255.0 * color.x.clamp(0.0, 1.0)) as u8;
    let g = (255.0 * color.y.clamp(0.0, 1.0)) as u8;
    let b = (255.0 * color.z.clamp(0.0, 1.0)) as u8;
    [r, g, b, 255]
}

/// Build the primary ray for pixel (x, y).
///
/// The direction is (x - w/2, y - h/2, projection_depth), left
/// unnormalized; every ray originates at the scene camera.
pub fn pixel_ray(scene: &Scene, x: u32, y: u32) -> Ray {
    let direction = Vec3::new(
        x as f32 - scene.width as f32 / 2.0,
        y as f32 - scene.height as f32 / 2.0,
        scene.projection_depth,
    );
    Ray::new(scene.camera, direction)
}

/// Render the scene, one ray per pixel, single-threaded.
pub fn render(scene: &Scene) -> ImageBuffer {
    let start = std::time::Instant::now();
    let mut image = ImageBuffer::filled(scene.width, scene.height, scene.background_color);

    for y in 0..scene.height {
        for x in 0..scene.width {
            let ray = pixel_ray(scene, x, y);
            if let Some(color) = trace(&ray, scene) {
                image.set(x, y, color);
            }
        }
    }

    log::debug!(
        "rendered {}x{} in {:?}",
        scene.width,
        scene.height,
        start.elapsed()
    );
    image
}

/// Render the scene with rows distributed across the rayon thread pool.
///
/// Each pixel depends only on the immutable scene and its own ray, and
/// every row writes a disjoint slice of the framebuffer, so the rows
/// need no synchronization beyond the final join. Output is identical
/// to `render`.
pub fn render_parallel(scene: &Scene) -> ImageBuffer {
    let start = std::time::Instant::now();
    let mut image = ImageBuffer::filled(scene.width, scene.height, scene.background_color);

    image
        .pixels
        .par_chunks_mut(scene.width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                let ray = pixel_ray(scene, x as u32, y as u32);
                if let Some(color) = trace(&ray, scene) {
                    *pixel = color;
                }
            }
        });

    log::debug!(
        "rendered {}x{} (parallel) in {:?}",
        scene.width,
        scene.height,
        start.elapsed()
    );
    image
}
