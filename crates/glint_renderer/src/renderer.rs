//! Pixel-scan driver.
//!
//! One primary ray per pixel through the pixel's screen coordinate, traced
//! on the calling thread in row-major order.

use std::time::Instant;

use glint_math::Color;

use crate::{Camera, ImageBuffer, Scene};

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Color written where a ray escapes the scene
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            background: Color::BLACK,
        }
    }
}

/// Map a pixel index to [-1, 1]. A single-pixel axis maps to 0.
#[inline]
fn screen_coordinate(index: u32, extent: u32) -> f32 {
    if extent <= 1 {
        return 0.0;
    }
    2.0 * index as f32 / (extent - 1) as f32 - 1.0
}

/// Compute the color of pixel (x, y).
pub fn render_pixel(camera: &Camera, scene: &Scene, x: u32, y: u32, config: &RenderConfig) -> Color {
    let ss_x = screen_coordinate(x, config.width);
    let ss_y = -screen_coordinate(y, config.height);

    let direction = camera.project_ray(ss_x, ss_y);
    scene
        .trace(camera.position(), direction, scene.settings().max_depth)
        .unwrap_or(config.background)
}

/// Render the entire scene to an image buffer.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    log::info!(
        "Rendering {}x{}: {} primitives, {} lights, max depth {}",
        config.width,
        config.height,
        scene.primitives().len(),
        scene.lights().len(),
        scene.settings().max_depth
    );
    let start = Instant::now();

    let mut image = ImageBuffer::new(config.width, config.height);
    for y in 0..config.height {
        for x in 0..config.width {
            image.set(x, y, render_pixel(camera, scene, x, y, config));
        }
        log::debug!("Row {}/{} done", y + 1, config.height);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}
