//! Affine transforms on control-point lists.
//!
//! Transforms take points by reference and return a new list of the same
//! length and order. Rotation and scaling round each resulting coordinate to
//! the nearest integer, so a primitive's control points stay on the pixel
//! grid after every edit.

use crate::geometry::Point;

/// An edit applied to a primitive's control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Shift by integer offsets.
    Translate {
        /// Horizontal offset.
        dx: i32,
        /// Vertical offset.
        dy: i32,
    },
    /// Clockwise rotation (on a y-down screen) about a center.
    Rotate {
        /// Rotation center.
        center: Point,
        /// Angle in degrees.
        degrees: f64,
    },
    /// Uniform scaling about a center.
    Scale {
        /// Scaling center.
        center: Point,
        /// Scale factor; expected to be non-negative.
        factor: f64,
    },
}

impl Transform {
    /// Apply this transform to `points`.
    #[must_use]
    pub fn apply(&self, points: &[Point]) -> Vec<Point> {
        match *self {
            Self::Translate { dx, dy } => translate(points, dx, dy),
            Self::Rotate { center, degrees } => rotate(points, center, degrees),
            Self::Scale { center, factor } => scale(points, center, factor),
        }
    }
}

/// Shift every point by `(dx, dy)`.
#[must_use]
pub fn translate(points: &[Point], dx: i32, dy: i32) -> Vec<Point> {
    let (dx, dy) = (f64::from(dx), f64::from(dy));
    points
        .iter()
        .map(|p| Point::new(p.x + dx, p.y + dy))
        .collect()
}

/// Rotate every point clockwise by `degrees` about `center`.
///
/// "Clockwise" assumes screen coordinates with y growing downward. The math is
/// applied whatever the primitive is; callers exclude axis-aligned ellipses.
#[must_use]
pub fn rotate(points: &[Point], center: Point, degrees: f64) -> Vec<Point> {
    let (sin, cos) = degrees.to_radians().sin_cos();
    points
        .iter()
        .map(|p| {
            let (rx, ry) = (p.x - center.x, p.y - center.y);
            Point::new(
                center.x + cos * rx - sin * ry,
                center.y + sin * rx + cos * ry,
            )
            .round()
        })
        .collect()
}

/// Move every point to `center + factor * (point - center)`.
///
/// A factor of 0 collapses all points onto the center. Negative factors are
/// not rejected; they mirror through the center.
#[must_use]
pub fn scale(points: &[Point], center: Point, factor: f64) -> Vec<Point> {
    points
        .iter()
        .map(|p| {
            Point::new(
                center.x + factor * (p.x - center.x),
                center.y + factor * (p.y - center.y),
            )
            .round()
        })
        .collect()
}
