//! # Trueno-Raster
//!
//! Scan conversion, affine transforms and line clipping for 2D vector
//! primitives, plus a small command-script interpreter that renders them to PNG.
//!
//! Primitives are described by integer control points and rasterized on
//! demand into ordered pixel sequences. The algorithms are pure functions;
//! the [`scene::Canvas`] stores named primitives and paints them into a
//! [`framebuffer::Framebuffer`].
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let pixels = draw_line(Point::new(0.0, 0.0), Point::new(3.0, 2.0), LineAlgorithm::Bresenham);
//! assert_eq!(pixels.first(), Some(&Pixel::new(0, 0)));
//! assert_eq!(pixels.last(), Some(&Pixel::new(3, 2)));
//!
//! let mut canvas = Canvas::new(64, 64)?;
//! canvas.set_pen(Rgba::RED);
//! canvas.insert("e", Shape::Ellipse {
//!     points: vec![Point::new(8.0, 8.0), Point::new(56.0, 40.0)],
//! });
//! let fb = canvas.render()?;
//! assert_eq!(fb.get_pixel(32, 8), Some(Rgba::RED));
//! # Ok::<(), trueno_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `config` (default): YAML configuration via serde
//! - `cli`: the `trueno-raster` script runner binary
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!   *IBM Systems Journal*, 4(1), 25-30.
//! - Cohen, D., & Sutherland, I. (1967). Line clipping by region outcodes.
//! - Liang, Y.-D., & Barsky, B. A. (1984). "A New Concept and Method for Line Clipping."

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Algorithm selectors.
pub mod algorithm;

/// Color types.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives (points, pixels, lines, rectangles).
pub mod geometry;

// ============================================================================
// Rasterization Modules
// ============================================================================

/// Scan conversion of lines, polygons, ellipses and curves.
pub mod render;

/// Affine transforms on control points.
pub mod transform;

/// Line clipping against a rectangular window.
pub mod clip;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Scene and Scripting
// ============================================================================

/// Canvas of named primitives.
pub mod scene;

/// Drawing command scripts.
pub mod script;

/// Interpreter configuration.
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algorithm::{ClipAlgorithm, CurveAlgorithm, LineAlgorithm, PolygonAlgorithm};
    pub use crate::clip::clip;
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Line, Pixel, Point, Rect};
    pub use crate::output::PngEncoder;
    pub use crate::render::{draw_curve, draw_ellipse, draw_line, draw_polygon, Drawable};
    pub use crate::scene::{Canvas, Primitive, PrimitiveKind, Shape};
    pub use crate::script::Interpreter;
    pub use crate::transform::{rotate, scale, translate, Transform};
}
