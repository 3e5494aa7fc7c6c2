//! Midpoint ellipse scan conversion.
//!
//! The quarter arc from the top of the ellipse `(0, ry)` to its side `(rx, 0)`
//! is traced in two regions. Region 1 covers the part where the slope
//! magnitude is below 1 and always steps x; region 2 covers the rest and
//! always steps y. Every traced point is mirrored into the four quadrants.

use crate::geometry::{Pixel, Point, Rect};

/// Scan-convert the axis-aligned ellipse inscribed in the box `corner0`–`corner1`.
///
/// Corners may be given in any order and are rounded to whole pixels. The
/// center and semi-axes are half extents of the box and may be fractional.
/// Each traced point is rounded in the lower-right quadrant and reflected
/// across the box into the other three, so the output is symmetric and stays
/// inside the box for odd extents too. Pixels on the axes appear more than once.
#[must_use]
pub fn draw_ellipse(corner0: Point, corner1: Point) -> Vec<Pixel> {
    let bounds = Rect::from_corners(corner0.round(), corner1.round());
    let rx = bounds.width() / 2.0;
    let ry = bounds.height() / 2.0;
    let mut quadrants = Quadrants::new(bounds, rx);

    let handoff = region_one(rx, ry, &mut quadrants);
    region_two(rx, ry, handoff, &mut quadrants);
    quadrants.pixels
}

/// First point (relative to the center) that belongs to region 2.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RegionHandoff {
    x: f64,
    y: f64,
}

/// Collects the four mirror images of each traced point.
struct Quadrants {
    center: Point,
    /// Region 2 can step x past the semi-axis when the width is odd.
    max_x: f64,
    /// `x_min + x_max` and `y_min + y_max`; a pixel `p` reflects to `sum - p`.
    sum_x: i32,
    sum_y: i32,
    pixels: Vec<Pixel>,
}

impl Quadrants {
    fn new(bounds: Rect, rx: f64) -> Self {
        Self {
            center: bounds.center(),
            max_x: rx,
            sum_x: (bounds.x_min + bounds.x_max) as i32,
            sum_y: (bounds.y_min + bounds.y_max) as i32,
            pixels: Vec::new(),
        }
    }

    fn emit(&mut self, x: f64, y: f64) {
        let Point { x: cx, y: cy } = self.center;
        let Pixel { x: right, y: bottom } = Point::new(cx + x.min(self.max_x), cy + y).to_pixel();
        let (left, top) = (self.sum_x - right, self.sum_y - bottom);
        self.pixels.extend([
            Pixel::new(left, bottom),
            Pixel::new(left, top),
            Pixel::new(right, top),
            Pixel::new(right, bottom),
        ]);
    }
}

/// Trace from `(0, ry)` while `ry²·x < rx²·y`, stepping x every iteration.
fn region_one(rx: f64, ry: f64, out: &mut Quadrants) -> RegionHandoff {
    let (rx2, ry2) = (rx * rx, ry * ry);
    let (mut x, mut y) = (0.0, ry);
    let mut p = ry2 - rx2 * ry + rx2 / 4.0;

    while ry2 * x < rx2 * y {
        out.emit(x, y);
        x += 1.0;
        if p < 0.0 {
            p += ry2 * (2.0 * x + 1.0);
        } else {
            y -= 1.0;
            p += ry2 * (2.0 * x + 1.0) - 2.0 * rx2 * y;
        }
    }

    RegionHandoff { x, y }
}

/// Trace from the handoff point down to `y = 0`, stepping y every iteration.
fn region_two(rx: f64, ry: f64, start: RegionHandoff, out: &mut Quadrants) {
    let (rx2, ry2) = (rx * rx, ry * ry);
    let RegionHandoff { mut x, mut y } = start;
    let mut p = ry2 * (x + 0.5) * (x + 0.5) + rx2 * (y - 1.0) * (y - 1.0) - rx2 * ry2;

    while y >= 0.0 {
        out.emit(x, y);
        y -= 1.0;
        if p > 0.0 {
            p += rx2 * (1.0 - 2.0 * y);
        } else {
            x += 1.0;
            p += 2.0 * ry2 * x + rx2 * (1.0 - 2.0 * y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ellipse(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Pixel> {
        draw_ellipse(Point::new(x0, y0), Point::new(x1, y1))
    }

    #[test]
    fn test_ellipse_is_symmetric() {
        let pixels: HashSet<Pixel> = ellipse(0.0, 0.0, 20.0, 10.0).into_iter().collect();
        // Center (10, 5).
        for p in &pixels {
            assert!(pixels.contains(&Pixel::new(20 - p.x, p.y)), "{p:?} lacks x mirror");
            assert!(pixels.contains(&Pixel::new(p.x, 10 - p.y)), "{p:?} lacks y mirror");
            assert!(pixels.contains(&Pixel::new(20 - p.x, 10 - p.y)), "{p:?} lacks xy mirror");
        }
    }

    #[test]
    fn test_ellipse_touches_bounding_box() {
        let pixels = ellipse(0.0, 0.0, 20.0, 10.0);
        assert!(pixels.contains(&Pixel::new(10, 0)));
        assert!(pixels.contains(&Pixel::new(10, 10)));
        assert!(pixels.contains(&Pixel::new(0, 5)));
        assert!(pixels.contains(&Pixel::new(20, 5)));
        assert!(pixels.iter().all(|p| (0..=20).contains(&p.x) && (0..=10).contains(&p.y)));
    }

    #[test]
    fn test_ellipse_emits_four_pixels_per_step() {
        let pixels = ellipse(0.0, 0.0, 20.0, 10.0);
        assert_eq!(pixels.len() % 4, 0);
        assert_eq!(pixels.len(), 48);
    }

    #[test]
    fn test_corner_order_is_irrelevant() {
        assert_eq!(ellipse(0.0, 0.0, 20.0, 10.0), ellipse(20.0, 10.0, 0.0, 0.0));
        assert_eq!(ellipse(0.0, 10.0, 20.0, 0.0), ellipse(20.0, 0.0, 0.0, 10.0));
    }

    #[test]
    fn test_small_ellipse_exact_pixels() {
        let pixels = ellipse(0.0, 0.0, 6.0, 4.0);
        let expected: Vec<Pixel> = [
            (3, 4), (3, 0), (3, 0), (3, 4),
            (2, 4), (2, 0), (4, 0), (4, 4),
            (1, 3), (1, 1), (5, 1), (5, 3),
            (0, 2), (0, 2), (6, 2), (6, 2),
        ]
        .into_iter()
        .map(Pixel::from)
        .collect();
        assert_eq!(pixels, expected);
    }

    #[test]
    fn test_odd_extent_exact_pixels() {
        let pixels = ellipse(0.0, 0.0, 7.0, 4.0);
        let expected: Vec<Pixel> = [
            (3, 4), (3, 0), (4, 0), (4, 4),
            (2, 4), (2, 0), (5, 0), (5, 4),
            (1, 4), (1, 0), (6, 0), (6, 4),
            (0, 3), (0, 1), (7, 1), (7, 3),
            (0, 2), (0, 2), (7, 2), (7, 2),
        ]
        .into_iter()
        .map(Pixel::from)
        .collect();
        assert_eq!(pixels, expected);
    }

    #[test]
    fn test_odd_extents_stay_inside_box_and_mirror() {
        for (w, h) in [(7, 4), (5, 3), (4, 7), (9, 1), (1, 6), (13, 11)] {
            let pixels: HashSet<Pixel> =
                ellipse(0.0, 0.0, f64::from(w), f64::from(h)).into_iter().collect();
            for p in &pixels {
                assert!((0..=w).contains(&p.x) && (0..=h).contains(&p.y), "{w}x{h}: {p:?} outside");
                assert!(pixels.contains(&Pixel::new(w - p.x, p.y)), "{w}x{h}: {p:?} lacks x mirror");
                assert!(pixels.contains(&Pixel::new(p.x, h - p.y)), "{w}x{h}: {p:?} lacks y mirror");
            }
        }
    }

    #[test]
    fn test_fractional_corners_are_rounded() {
        assert_eq!(ellipse(0.4, -0.3, 6.2, 3.6), ellipse(0.0, 0.0, 6.0, 4.0));
    }

    #[test]
    fn test_region_handoff_point_drawn_once() {
        let mut quadrants = Quadrants::new(Rect::new(-10.0, -5.0, 10.0, 5.0), 10.0);
        let handoff = region_one(10.0, 5.0, &mut quadrants);
        let traced_in_region_one = quadrants.pixels.len() / 4;

        region_two(10.0, 5.0, handoff, &mut quadrants);
        let first_of_region_two = quadrants.pixels[traced_in_region_one * 4 + 3];
        let last_of_region_one = quadrants.pixels[traced_in_region_one * 4 - 1];
        assert_ne!(first_of_region_two, last_of_region_one);
    }

    #[test]
    fn test_zero_width_box_is_vertical_segment() {
        let pixels: HashSet<Pixel> = ellipse(3.0, 0.0, 3.0, 4.0).into_iter().collect();
        let expected: HashSet<Pixel> = (0..=4).map(|y| Pixel::new(3, y)).collect();
        assert_eq!(pixels, expected);
    }

    #[test]
    fn test_point_box_is_single_pixel() {
        let pixels: HashSet<Pixel> = ellipse(3.0, 3.0, 3.0, 3.0).into_iter().collect();
        assert_eq!(pixels.len(), 1);
        assert!(pixels.contains(&Pixel::new(3, 3)));
    }
}
