//! Line scan conversion.

use crate::algorithm::LineAlgorithm;
use crate::geometry::{Pixel, Point};

/// Scan-convert the segment `p0`–`p1` into pixels.
///
/// Endpoints are rounded to the nearest pixel first. Every variant emits both
/// endpoints, in order from `p0` to `p1`; a zero-length segment yields the
/// single pixel at `p0`. An endpoint that does not round to an `i32` pixel
/// (non-finite, or beyond the device range) yields no pixels.
///
/// # Example
///
/// ```
/// use trueno_raster::algorithm::LineAlgorithm;
/// use trueno_raster::geometry::{Pixel, Point};
/// use trueno_raster::render::draw_line;
///
/// let pixels = draw_line(Point::new(0.0, 0.0), Point::new(3.0, 2.0), LineAlgorithm::Bresenham);
/// assert_eq!(
///     pixels,
///     vec![Pixel::new(0, 0), Pixel::new(1, 1), Pixel::new(2, 1), Pixel::new(3, 2)]
/// );
/// ```
#[must_use]
pub fn draw_line(p0: Point, p1: Point, algorithm: LineAlgorithm) -> Vec<Pixel> {
    let (Some(start), Some(end)) = (p0.to_pixel_checked(), p1.to_pixel_checked()) else {
        return Vec::new();
    };
    match algorithm {
        LineAlgorithm::Dda => dda(start, end),
        LineAlgorithm::Bresenham => bresenham(start, end),
        LineAlgorithm::Naive => naive(start, end),
    }
}

/// Pixel from widened coordinates that lie between two `i32` endpoints.
fn narrow(x: i64, y: i64) -> Pixel {
    Pixel::new(x as i32, y as i32)
}

/// DDA: `max(|dx|, |dy|)` unit steps, accumulating fractional increments.
pub(crate) fn dda(start: Pixel, end: Pixel) -> Vec<Pixel> {
    let dx = i64::from(end.x) - i64::from(start.x);
    let dy = i64::from(end.y) - i64::from(start.y);
    let steps = dx.abs().max(dy.abs());
    if steps == 0 {
        return vec![start];
    }

    let x_inc = dx as f64 / steps as f64;
    let y_inc = dy as f64 / steps as f64;
    let mut x = f64::from(start.x);
    let mut y = f64::from(start.y);

    let mut pixels = Vec::with_capacity(steps as usize + 1);
    for _ in 0..=steps {
        pixels.push(narrow(x.round() as i64, y.round() as i64));
        x += x_inc;
        y += y_inc;
    }
    pixels
}

/// Bresenham's midpoint algorithm for all octants.
///
/// When the line is steep the axes are swapped so x is always the major axis;
/// output pixels are swapped back. Emits exactly `major + 1` pixels.
pub(crate) fn bresenham(start: Pixel, end: Pixel) -> Vec<Pixel> {
    let (ax, ay) = (i64::from(start.x), i64::from(start.y));
    let (bx, by) = (i64::from(end.x), i64::from(end.y));
    let steep = (by - ay).abs() > (bx - ax).abs();
    let (x0, y0, x1, y1) = if steep {
        (ay, ax, by, bx)
    } else {
        (ax, ay, bx, by)
    };

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    // Signs are taken after the swap so they follow the major/minor axes.
    let sx = if x1 > x0 { 1 } else { -1 };
    let sy = if y1 > y0 { 1 } else { -1 };

    let straight = 2 * dy;
    let diagonal = 2 * (dy - dx);
    let mut err = 2 * dy - dx;
    let (mut x, mut y) = (x0, y0);

    let mut pixels = Vec::with_capacity(dx as usize + 1);
    for _ in 0..=dx {
        pixels.push(if steep { narrow(y, x) } else { narrow(x, y) });
        x += sx;
        if err < 0 {
            err += straight;
        } else {
            y += sy;
            err += diagonal;
        }
    }
    pixels
}

/// Naive slope evaluation: one pixel per unit x step, y from the line equation.
///
/// Steep lines come out sparse. Vertical lines step along y instead.
pub(crate) fn naive(start: Pixel, end: Pixel) -> Vec<Pixel> {
    let (x0, y0) = (i64::from(start.x), i64::from(start.y));
    let (x1, y1) = (i64::from(end.x), i64::from(end.y));
    if x0 == x1 {
        let step = if y1 >= y0 { 1 } else { -1 };
        return (0..=(y1 - y0).abs())
            .map(|i| narrow(x0, y0 + i * step))
            .collect();
    }

    let slope = (y1 - y0) as f64 / (x1 - x0) as f64;
    let step = if x1 > x0 { 1 } else { -1 };
    (0..=(x1 - x0).abs())
        .map(|i| {
            let x = x0 + i * step;
            let y = y0 as f64 + slope * (x - x0) as f64;
            narrow(x, y.round() as i64)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(points: &[(i32, i32)]) -> Vec<Pixel> {
        points.iter().copied().map(Pixel::from).collect()
    }

    fn line(x0: f64, y0: f64, x1: f64, y1: f64, algorithm: LineAlgorithm) -> Vec<Pixel> {
        draw_line(Point::new(x0, y0), Point::new(x1, y1), algorithm)
    }

    #[test]
    fn test_bresenham_shallow_slope() {
        let pixels = line(0.0, 0.0, 3.0, 2.0, LineAlgorithm::Bresenham);
        assert_eq!(pixels, px(&[(0, 0), (1, 1), (2, 1), (3, 2)]));
    }

    #[test]
    fn test_bresenham_reversed_direction() {
        let pixels = line(3.0, 2.0, 0.0, 0.0, LineAlgorithm::Bresenham);
        assert_eq!(pixels, px(&[(3, 2), (2, 1), (1, 1), (0, 0)]));
    }

    #[test]
    fn test_bresenham_steep_slope() {
        let pixels = line(0.0, 0.0, 2.0, 5.0, LineAlgorithm::Bresenham);
        assert_eq!(
            pixels,
            px(&[(0, 0), (0, 1), (1, 2), (1, 3), (2, 4), (2, 5)])
        );
    }

    #[test]
    fn test_bresenham_horizontal_and_vertical() {
        let horizontal = line(5.0, 7.0, 1.0, 7.0, LineAlgorithm::Bresenham);
        assert_eq!(horizontal, px(&[(5, 7), (4, 7), (3, 7), (2, 7), (1, 7)]));

        let vertical = line(2.0, 0.0, 2.0, 3.0, LineAlgorithm::Bresenham);
        assert_eq!(vertical, px(&[(2, 0), (2, 1), (2, 2), (2, 3)]));
    }

    #[test]
    fn test_degenerate_line_is_single_pixel() {
        for algorithm in [
            LineAlgorithm::Dda,
            LineAlgorithm::Bresenham,
            LineAlgorithm::Naive,
        ] {
            assert_eq!(line(4.0, 9.0, 4.0, 9.0, algorithm), px(&[(4, 9)]));
        }
    }

    #[test]
    fn test_dda_matches_expected_pixels() {
        let pixels = line(0.0, 0.0, 3.0, 2.0, LineAlgorithm::Dda);
        assert_eq!(pixels, px(&[(0, 0), (1, 1), (2, 1), (3, 2)]));

        let pixels = line(0.0, 0.0, 4.0, 0.0, LineAlgorithm::Dda);
        assert_eq!(pixels, px(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]));
    }

    #[test]
    fn test_dda_reaches_endpoint_on_long_lines() {
        let pixels = line(-250.0, 13.0, 401.0, -77.0, LineAlgorithm::Dda);
        assert_eq!(pixels.len(), 652);
        assert_eq!(pixels.first(), Some(&Pixel::new(-250, 13)));
        assert_eq!(pixels.last(), Some(&Pixel::new(401, -77)));
    }

    #[test]
    fn test_endpoints_are_rounded() {
        let pixels = line(0.4, 0.6, 2.5, 0.6, LineAlgorithm::Bresenham);
        assert_eq!(pixels.first(), Some(&Pixel::new(0, 1)));
        assert_eq!(pixels.last(), Some(&Pixel::new(3, 1)));
    }

    #[test]
    fn test_endpoints_beyond_pixel_range_draw_nothing() {
        for algorithm in [
            LineAlgorithm::Dda,
            LineAlgorithm::Bresenham,
            LineAlgorithm::Naive,
        ] {
            assert!(line(-3.0e9, 0.0, 3.0e9, 0.0, algorithm).is_empty());
            assert!(line(0.0, 0.0, 0.0, -1.0e13, algorithm).is_empty());
            assert!(line(f64::NAN, 0.0, 5.0, 5.0, algorithm).is_empty());
        }
    }

    #[test]
    fn test_extreme_pixel_coordinates_do_not_overflow() {
        let (max, min) = (f64::from(i32::MAX), f64::from(i32::MIN));
        for algorithm in [
            LineAlgorithm::Dda,
            LineAlgorithm::Bresenham,
            LineAlgorithm::Naive,
        ] {
            let pixels = line(max, min, max - 2.0, min + 2.0, algorithm);
            assert_eq!(pixels.first(), Some(&Pixel::new(i32::MAX, i32::MIN)));
            assert_eq!(pixels.last(), Some(&Pixel::new(i32::MAX - 2, i32::MIN + 2)));
            assert_eq!(pixels.len(), 3);
        }

        let corner = Pixel::new(i32::MIN, i32::MIN);
        let near = Pixel::new(i32::MIN + 4, i32::MIN + 1);
        assert_eq!(bresenham(corner, near).len(), 5);
        assert_eq!(dda(near, corner).last(), Some(&corner));
    }

    #[test]
    fn test_naive_vertical_steps_along_y() {
        let pixels = line(3.0, 4.0, 3.0, 1.0, LineAlgorithm::Naive);
        assert_eq!(pixels, px(&[(3, 4), (3, 3), (3, 2), (3, 1)]));
    }

    #[test]
    fn test_naive_one_pixel_per_column() {
        let pixels = line(0.0, 0.0, 4.0, 2.0, LineAlgorithm::Naive);
        assert_eq!(pixels.len(), 5);
        assert_eq!(pixels[2], Pixel::new(2, 1));
        assert_eq!(pixels.last(), Some(&Pixel::new(4, 2)));
    }
}
