//! Scan conversion of geometric primitives.
//!
//! Every function here is a pure function of its control points and algorithm
//! selector, returning an owned, ordered pixel sequence. Sequences may repeat
//! pixels; whoever paints them decides what a repeat means (the framebuffer
//! simply overwrites).
//!
//! # Algorithms
//!
//! - **Lines**: DDA, Bresenham's midpoint algorithm, naive slope evaluation
//! - **Polygons**: outline built from line segments
//! - **Ellipses**: two-region midpoint algorithm
//! - **Curves**: Bézier via de Casteljau evaluation, stitched with Bresenham
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Van Aken, J. R. (1984). "An Efficient Ellipse-Drawing Algorithm." IEEE CG&A.

mod curve;
mod ellipse;
mod line;
mod polygon;

pub use curve::{bezier_point, draw_curve, BEZIER_SEGMENTS};
pub use ellipse::draw_ellipse;
pub use line::draw_line;
pub use polygon::draw_polygon;
pub(crate) use polygon::edges;

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Pixel, Rect};

/// Region scan converters may be limited to when painting a `width`×`height`
/// surface: the surface grown by its own size on every side.
///
/// Line and polygon edges reaching past it are clipped before scan
/// conversion, which bounds the pixel count of far-flung geometry.
#[must_use]
pub fn scan_window(width: u32, height: u32) -> Rect {
    let (w, h) = (f64::from(width), f64::from(height));
    Rect::new(-w, -h, 2.0 * w - 1.0, 2.0 * h - 1.0)
}

/// Trait for primitives that scan-convert to pixels.
pub trait Drawable {
    /// Pixels covered by this primitive, in generation order.
    fn pixels(&self) -> Vec<Pixel>;

    /// Pixels needed to paint everything inside `window`.
    ///
    /// May omit pixels outside `window`. Defaults to [`Drawable::pixels`].
    fn pixels_within(&self, _window: Rect) -> Vec<Pixel> {
        self.pixels()
    }

    /// Paint this primitive into a framebuffer.
    ///
    /// Pixels outside the framebuffer are dropped; later pixels overwrite
    /// earlier ones.
    fn draw(&self, fb: &mut Framebuffer, color: Rgba) {
        for pixel in self.pixels_within(scan_window(fb.width(), fb.height())) {
            fb.plot(pixel, color);
        }
    }
}
