//! Core framebuffer for pixel rendering.
//!
//! The pixel sink that scan-converted primitives are painted into: an RGBA
//! buffer whose rows are padded to a 64-byte stride.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::Pixel;

/// Row alignment in bytes.
const ROW_ALIGNMENT: usize = 64;

/// RGBA pixel buffer with 64-byte aligned rows.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order.
    /// Each pixel is 4 bytes: [R, G, B, A].
    pixels: Vec<u8>,
    /// Stride in bytes (may include padding for alignment).
    stride: usize,
}

impl Framebuffer {
    /// Create a new framebuffer with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_raster::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 600).unwrap();
    /// assert_eq!(fb.width(), 800);
    /// assert_eq!(fb.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let row_bytes = (width as usize) * 4;
        let stride = (row_bytes + ROW_ALIGNMENT - 1) & !(ROW_ALIGNMENT - 1);

        Ok(Self {
            width,
            height,
            pixels: vec![0; stride * (height as usize)],
            stride,
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        let row_bytes = (self.width as usize) * 4;

        for row in self.pixels.chunks_exact_mut(self.stride) {
            for chunk in row[..row_bytes].chunks_exact_mut(4) {
                chunk.copy_from_slice(&rgba);
            }
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Set a scan-converted pixel, ignoring coordinates off the buffer
    /// (including negative ones).
    ///
    /// Returns whether the pixel landed on the buffer.
    pub fn plot(&mut self, pixel: Pixel, color: Rgba) -> bool {
        match (u32::try_from(pixel.x), u32::try_from(pixel.y)) {
            (Ok(x), Ok(y)) if x < self.width && y < self.height => {
                self.set_pixel(x, y, color);
                true
            }
            _ => false,
        }
    }

    /// Calculate the byte index for a pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.stride + (x as usize) * 4
    }

    /// Get pixel data as tightly packed RGB triples, dropping alpha.
    ///
    /// This is the layout bitmap export expects.
    #[must_use]
    pub fn to_rgb_pixels(&self) -> Vec<u8> {
        let row_bytes = (self.width as usize) * 4;
        let mut rgb = Vec::with_capacity((self.width as usize) * (self.height as usize) * 3);
        for row in self.pixels.chunks_exact(self.stride) {
            for chunk in row[..row_bytes].chunks_exact(4) {
                rgb.extend_from_slice(&chunk[..3]);
            }
        }
        rgb
    }
}
