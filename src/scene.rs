//! Canvas of named primitives.
//!
//! A [`Canvas`] keeps an insertion-ordered collection of [`Primitive`]s keyed
//! by identifier. Rendering rasterizes every primitive in that order, so later
//! primitives win where pixels overlap. Edits replace a primitive's control
//! points with the result of a transform or clip.

use std::collections::HashMap;

use crate::algorithm::{ClipAlgorithm, CurveAlgorithm, LineAlgorithm, PolygonAlgorithm};
use crate::clip::clip;
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::{Line, Pixel, Point, Rect};
use crate::render::{
    draw_curve, draw_ellipse, draw_line, draw_polygon, edges, scan_window, Drawable,
};
use crate::transform::Transform;

/// Squared pixel distance within which a point selects a primitive.
const PICK_RADIUS_SQUARED: i64 = 4;

/// Kind of a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Line segment.
    Line,
    /// Closed polygon outline.
    Polygon,
    /// Axis-aligned ellipse.
    Ellipse,
    /// Bézier curve.
    Curve,
}

/// Control points of a primitive together with its algorithm selector.
///
/// A `None` selector stands for a name no variant recognised; such shapes
/// rasterize to nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Two endpoints (empty after being clipped away).
    Line {
        /// Start and end.
        points: Vec<Point>,
        /// Scan-conversion variant.
        algorithm: Option<LineAlgorithm>,
    },
    /// Vertices in order.
    Polygon {
        /// Vertices.
        points: Vec<Point>,
        /// Scan-conversion variant for the edges.
        algorithm: Option<PolygonAlgorithm>,
    },
    /// Two opposite corners of the bounding box.
    Ellipse {
        /// Bounding box corners.
        points: Vec<Point>,
    },
    /// Control points.
    Curve {
        /// Control points.
        points: Vec<Point>,
        /// Curve variant.
        algorithm: Option<CurveAlgorithm>,
    },
}

impl Shape {
    /// Kind of this shape.
    #[must_use]
    pub const fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Line { .. } => PrimitiveKind::Line,
            Self::Polygon { .. } => PrimitiveKind::Polygon,
            Self::Ellipse { .. } => PrimitiveKind::Ellipse,
            Self::Curve { .. } => PrimitiveKind::Curve,
        }
    }

    /// Control points of this shape.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        match self {
            Self::Line { points, .. }
            | Self::Polygon { points, .. }
            | Self::Ellipse { points }
            | Self::Curve { points, .. } => points,
        }
    }

    /// Replace the control points, keeping the kind and selector.
    pub fn set_points(&mut self, new_points: Vec<Point>) {
        match self {
            Self::Line { points, .. }
            | Self::Polygon { points, .. }
            | Self::Ellipse { points }
            | Self::Curve { points, .. } => *points = new_points,
        }
    }
}

impl Drawable for Shape {
    fn pixels(&self) -> Vec<Pixel> {
        match self {
            Self::Line {
                points,
                algorithm: Some(algorithm),
            } => match points.as_slice() {
                [p0, p1, ..] => draw_line(*p0, *p1, *algorithm),
                _ => Vec::new(),
            },
            Self::Polygon {
                points,
                algorithm: Some(algorithm),
            } => draw_polygon(points, *algorithm),
            Self::Ellipse { points } => match points.as_slice() {
                [c0, c1, ..] => draw_ellipse(*c0, *c1),
                _ => Vec::new(),
            },
            Self::Curve {
                points,
                algorithm: Some(algorithm),
            } => draw_curve(points, *algorithm),
            Self::Line { algorithm: None, .. }
            | Self::Polygon { algorithm: None, .. }
            | Self::Curve { algorithm: None, .. } => Vec::new(),
        }
    }

    fn pixels_within(&self, window: Rect) -> Vec<Pixel> {
        match self {
            Self::Line {
                points,
                algorithm: Some(algorithm),
            } => match points.as_slice() {
                [p0, p1, ..] => windowed_line(*p0, *p1, *algorithm, window),
                _ => Vec::new(),
            },
            Self::Polygon {
                points,
                algorithm: Some(algorithm),
            } => {
                let algorithm = LineAlgorithm::from(*algorithm);
                edges(points)
                    .flat_map(|(start, end)| windowed_line(start, end, algorithm, window))
                    .collect()
            }
            _ => self.pixels(),
        }
    }
}

/// Scan-convert a segment, clipping it to `window` first if it leaves it.
fn windowed_line(p0: Point, p1: Point, algorithm: LineAlgorithm, window: Rect) -> Vec<Pixel> {
    if window.contains(p0) && window.contains(p1) {
        return draw_line(p0, p1, algorithm);
    }
    clip(Line::new(p0, p1), window, ClipAlgorithm::LiangBarsky)
        .map(|line| draw_line(line.start, line.end, algorithm))
        .unwrap_or_default()
}

/// A shape with the color it is drawn in.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    /// Geometry and algorithm.
    pub shape: Shape,
    /// Pen color captured when the primitive was created.
    pub color: Rgba,
}

impl Primitive {
    /// Create a primitive.
    #[must_use]
    pub const fn new(shape: Shape, color: Rgba) -> Self {
        Self { shape, color }
    }

    /// Kind of the underlying shape.
    #[must_use]
    pub const fn kind(&self) -> PrimitiveKind {
        self.shape.kind()
    }

    /// Control points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        self.shape.points()
    }

    /// Pixels of this primitive.
    #[must_use]
    pub fn rasterize(&self) -> Vec<Pixel> {
        self.shape.pixels()
    }

    /// Bounding box of the control points.
    #[must_use]
    pub fn bounding_rect(&self) -> Option<Rect> {
        Rect::bounding(self.points())
    }

    /// Whether `point` lies within two pixels of anything this primitive draws.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> bool {
        is_near(&self.rasterize(), point)
    }
}

fn is_near(pixels: &[Pixel], point: Point) -> bool {
    let target = point.to_pixel();
    pixels
        .iter()
        .any(|p| p.distance_squared(target) <= PICK_RADIUS_SQUARED)
}

/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: u32 = 800;
/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: u32 = 600;

/// A sized drawing surface holding named primitives.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    background: Rgba,
    pen: Rgba,
    /// Primitives in draw order.
    entries: Vec<(String, Primitive)>,
    /// Identifier to position in `entries`.
    index: HashMap<String, usize>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: Rgba::WHITE,
            pen: Rgba::BLACK,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl Canvas {
    /// Create an empty canvas with a white background and black pen.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let mut canvas = Self::default();
        canvas.reset(width, height)?;
        Ok(canvas)
    }

    /// Remove every primitive and resize.
    ///
    /// The pen and background colors are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero; the canvas is left untouched.
    pub fn reset(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        self.width = width;
        self.height = height;
        self.entries.clear();
        self.index.clear();
        Ok(())
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Current pen color.
    #[must_use]
    pub const fn pen(&self) -> Rgba {
        self.pen
    }

    /// Set the color used for subsequently inserted primitives.
    pub fn set_pen(&mut self, color: Rgba) {
        self.pen = color;
    }

    /// Background color.
    #[must_use]
    pub const fn background(&self) -> Rgba {
        self.background
    }

    /// Set the color the canvas is cleared to before rendering.
    pub fn set_background(&mut self, color: Rgba) {
        self.background = color;
    }

    /// Number of primitives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the canvas holds no primitives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Identifiers in draw order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    /// Look up a primitive.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Primitive> {
        self.index.get(id).map(|&i| &self.entries[i].1)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Primitive> {
        match self.index.get(id) {
            Some(&i) => Ok(&mut self.entries[i].1),
            None => Err(Error::UnknownPrimitive(id.to_string())),
        }
    }

    /// Add a shape in the current pen color.
    ///
    /// An existing primitive with the same identifier is replaced in place,
    /// keeping its position in the draw order.
    pub fn insert(&mut self, id: impl Into<String>, shape: Shape) {
        let id = id.into();
        let primitive = Primitive::new(shape, self.pen);
        if let Some(&i) = self.index.get(&id) {
            log::debug!("replacing primitive '{id}'");
            self.entries[i].1 = primitive;
        } else {
            self.index.insert(id.clone(), self.entries.len());
            self.entries.push((id, primitive));
        }
    }

    /// Apply a transform to a primitive's control points.
    ///
    /// Rotation leaves ellipses unchanged, since they stay axis-aligned.
    ///
    /// # Errors
    ///
    /// Returns an error if no primitive has this identifier.
    pub fn apply(&mut self, id: &str, transform: Transform) -> Result<()> {
        let primitive = self.get_mut(id)?;
        if primitive.kind() == PrimitiveKind::Ellipse
            && matches!(transform, Transform::Rotate { .. })
        {
            log::warn!("ellipse '{id}' cannot be rotated; skipping");
            return Ok(());
        }
        let points = transform.apply(primitive.points());
        primitive.shape.set_points(points);
        Ok(())
    }

    /// Clip a line primitive to `window`.
    ///
    /// A line that falls entirely outside keeps no points and draws nothing.
    /// Other kinds are left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if no primitive has this identifier.
    pub fn clip(&mut self, id: &str, window: Rect, algorithm: ClipAlgorithm) -> Result<()> {
        let primitive = self.get_mut(id)?;
        if primitive.kind() != PrimitiveKind::Line {
            log::warn!("only lines can be clipped; skipping '{id}'");
            return Ok(());
        }
        let points = match primitive.points() {
            [start, end, ..] => clip(Line::new(*start, *end), window, algorithm)
                .map(|line| line.to_points().to_vec())
                .unwrap_or_default(),
            _ => Vec::new(),
        };
        primitive.shape.set_points(points);
        Ok(())
    }

    /// Identifier of the topmost primitive drawn near `point`.
    ///
    /// Only geometry near the canvas is considered, as in [`Canvas::render`].
    #[must_use]
    pub fn pick(&self, point: Point) -> Option<&str> {
        let window = scan_window(self.width, self.height);
        self.entries
            .iter()
            .rev()
            .find(|(_, primitive)| is_near(&primitive.shape.pixels_within(window), point))
            .map(|(id, _)| id.as_str())
    }

    /// Rasterize every primitive into a fresh framebuffer.
    ///
    /// Line and polygon edges are clipped to [`scan_window`] first, so
    /// transforms that throw geometry far off the canvas stay cheap to render.
    ///
    /// # Errors
    ///
    /// Returns an error if the framebuffer cannot be allocated.
    pub fn render(&self) -> Result<Framebuffer> {
        let mut fb = Framebuffer::new(self.width, self.height)?;
        fb.clear(self.background);

        for (_, primitive) in &self.entries {
            primitive.shape.draw(&mut fb, primitive.color);
        }
        log::debug!(
            "rendered {} primitives on {}x{} canvas",
            self.entries.len(),
            self.width,
            self.height
        );

        Ok(fb)
    }
}
