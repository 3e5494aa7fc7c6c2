//! Geometric primitives for rasterization.
//!
//! Control points are real-valued ([`Point`]) so repeated transforms do not
//! accumulate truncation; scan converters emit device pixels ([`Pixel`]).

/// A 2D control point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation between two points.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            (1.0 - t) * self.x + t * other.x,
            (1.0 - t) * self.y + t * other.y,
        )
    }

    /// Nearest pixel, rounding half away from zero.
    #[must_use]
    pub fn to_pixel(self) -> Pixel {
        Pixel::new(self.x.round() as i32, self.y.round() as i32)
    }

    /// Nearest pixel, or `None` when a rounded coordinate is not finite or
    /// falls outside the `i32` range.
    #[must_use]
    pub fn to_pixel_checked(self) -> Option<Pixel> {
        let range = f64::from(i32::MIN)..=f64::from(i32::MAX);
        let (x, y) = (self.x.round(), self.y.round());
        (range.contains(&x) && range.contains(&y)).then(|| Pixel::new(x as i32, y as i32))
    }

    /// Pixel obtained by truncating both coordinates toward zero.
    #[must_use]
    pub fn truncate(self) -> Pixel {
        Pixel::new(self.x as i32, self.y as i32)
    }

    /// Same point with both coordinates rounded to the nearest integer.
    #[must_use]
    pub fn round(self) -> Self {
        Self::new(self.x.round(), self.y.round())
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(f64::from(x), f64::from(y))
    }
}

impl From<Pixel> for Point {
    fn from(pixel: Pixel) -> Self {
        Self::new(f64::from(pixel.x), f64::from(pixel.y))
    }
}

/// A device pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Pixel {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Pixel {
    /// Create a new pixel coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared distance to another pixel, widened to avoid overflow.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }
}

impl From<(i32, i32)> for Pixel {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Both endpoints, start first.
    #[must_use]
    pub fn to_points(self) -> [Point; 2] {
        [self.start, self.end]
    }
}

/// An axis-aligned rectangle given by its bounds.
///
/// Used both as an ellipse bounding box and as a clip window. Constructors
/// normalize so that `x_min <= x_max` and `y_min <= y_max`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left bound.
    pub x_min: f64,
    /// Top bound (y grows downward on screen).
    pub y_min: f64,
    /// Right bound.
    pub x_max: f64,
    /// Bottom bound.
    pub y_max: f64,
}

impl Rect {
    /// Create a rectangle from bounds given in any order.
    #[must_use]
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
        .normalized()
    }

    /// Create a rectangle from two opposite corner points.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(a.x, a.y, b.x, b.y)
    }

    /// Smallest rectangle containing every point, or `None` for no points.
    #[must_use]
    pub fn bounding(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut rect = Self::from_corners(*first, *first);
        for p in rest {
            rect.x_min = rect.x_min.min(p.x);
            rect.y_min = rect.y_min.min(p.y);
            rect.x_max = rect.x_max.max(p.x);
            rect.y_max = rect.y_max.max(p.y);
        }
        Some(rect)
    }

    /// Copy with swapped bounds where min exceeds max.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            x_min: self.x_min.min(self.x_max),
            y_min: self.y_min.min(self.y_max),
            x_max: self.x_min.max(self.x_max),
            y_max: self.y_min.max(self.y_max),
        }
    }

    /// Width of the rectangle.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the rectangle.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Check if a point is inside the rectangle (bounds inclusive).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x_min
            && point.x <= self.x_max
            && point.y >= self.y_min
            && point.y <= self.y_max
    }

    /// Get the center point of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }
}
