//! Decoded raster input for the tracer.

use std::path::Path;

use image::RgbaImage;

use crate::error::{Result, TraceError};

use super::Colour;

/// An owned RGBA raster (row-major pixel grid).
///
/// The raster is read-only for the whole tracing pipeline; the segmenter
/// keeps its own visited plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Colour>,
}

impl Raster {
    /// Create a raster from row-major pixels.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Colour>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(TraceError::Config {
                message: format!(
                    "raster of {}x{} needs {} pixels, got {}",
                    width,
                    height,
                    expected,
                    pixels.len()
                ),
                help: None,
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a raster by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Colour) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert a decoded RGBA image.
    pub fn from_image(image: &RgbaImage) -> Self {
        Self::from_fn(image.width(), image.height(), |x, y| {
            let p = image.get_pixel(x, y);
            Colour::new(p[0], p[1], p[2], p[3])
        })
    }

    /// Decode an image file into a raster.
    pub fn open(path: &Path) -> Result<Self> {
        let decoded = image::open(path).map_err(|e| TraceError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Self::from_image(&decoded.to_rgba8()))
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// True if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Get the pixel at `(x, y)`, or `None` outside the raster.
    ///
    /// Signed coordinates so neighbour probes at the border fall out of
    /// bounds instead of wrapping.
    pub fn get(&self, x: i32, y: i32) -> Option<Colour> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
}
