//! Pixel storage and output encoding.
//!
//! PPM is written by hand to get the exact `P6 <w> <h> 255` header. PNG
//! goes through the `image` crate.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use glint_math::Color;
use thiserror::Error;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Buffer holds {actual} pixels but {width}x{height} needs {expected}")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

pub type ImageResult<T> = Result<T, ImageError>;

/// Row-major buffer of linear colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// Fill every pixel with `color`.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Replace every pixel with `f(pixel)`.
    pub fn apply(&mut self, f: impl Fn(Color) -> Color) {
        for pixel in &mut self.pixels {
            *pixel = f(*pixel);
        }
    }

    fn check_size(&self) -> ImageResult<()> {
        let expected = self.width as usize * self.height as usize;
        if self.pixels.len() != expected {
            return Err(ImageError::SizeMismatch {
                width: self.width,
                height: self.height,
                expected,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }

    /// Quantize to packed 8-bit RGB.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let rgb: Vec<[u8; 3]> = self.pixels.iter().map(|c| c.to_rgb8()).collect();
        bytemuck::cast_slice(&rgb).to_vec()
    }

    /// Encode as binary PPM.
    pub fn write_ppm<W: Write>(&self, writer: &mut W) -> ImageResult<()> {
        self.check_size()?;

        writeln!(writer, "P6 {} {} 255", self.width, self.height)?;
        writer.write_all(&self.to_rgb8())?;
        Ok(())
    }

    /// Save to `path`. `.png` files are PNG encoded, anything else is PPM.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        let path = path.as_ref();
        self.check_size()?;

        let is_png = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));

        if is_png {
            image::save_buffer(
                path,
                &self.to_rgb8(),
                self.width,
                self.height,
                image::ColorType::Rgb8,
            )?;
        } else {
            let mut writer = BufWriter::new(File::create(path)?);
            self.write_ppm(&mut writer)?;
            writer.flush()?;
        }

        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}
