//! Curve scan conversion.

use super::line::bresenham;
use crate::algorithm::CurveAlgorithm;
use crate::geometry::{Pixel, Point};

/// Number of parameter intervals sampled along a Bézier curve (step 0.01).
pub const BEZIER_SEGMENTS: u32 = 100;

/// Scan-convert a curve through `control_points`.
///
/// [`CurveAlgorithm::Bezier`] treats the whole list as one Bézier curve of
/// degree `n - 1`, samples it at 101 evenly spaced parameters (both ends
/// included), truncates each sample to a pixel and joins consecutive samples
/// with Bresenham segments. Joint pixels appear twice.
///
/// [`CurveAlgorithm::BSpline`] is not implemented and yields no pixels, as does
/// a list of fewer than two control points.
#[must_use]
pub fn draw_curve(control_points: &[Point], algorithm: CurveAlgorithm) -> Vec<Pixel> {
    if control_points.len() < 2 {
        return Vec::new();
    }
    match algorithm {
        CurveAlgorithm::Bezier => bezier(control_points),
        CurveAlgorithm::BSpline => Vec::new(),
    }
}

/// Evaluate the Bézier curve defined by `control_points` at parameter `t`.
///
/// Uses de Casteljau's repeated linear interpolation. Returns `None` when no
/// control points are given.
#[must_use]
pub fn bezier_point(control_points: &[Point], t: f64) -> Option<Point> {
    let mut scratch = control_points.to_vec();
    de_casteljau(&mut scratch, t)
}

/// Reduce `work` in place; `work[0]` holds the result afterwards.
fn de_casteljau(work: &mut [Point], t: f64) -> Option<Point> {
    let n = work.len();
    for round in 1..n {
        for j in 0..n - round {
            work[j] = work[j].lerp(work[j + 1], t);
        }
    }
    work.first().copied()
}

fn bezier(control_points: &[Point]) -> Vec<Pixel> {
    let mut scratch = Vec::with_capacity(control_points.len());
    let keypoints: Vec<Pixel> = (0..=BEZIER_SEGMENTS)
        .filter_map(|i| {
            let t = f64::from(i) / f64::from(BEZIER_SEGMENTS);
            scratch.clear();
            scratch.extend_from_slice(control_points);
            de_casteljau(&mut scratch, t).map(Point::truncate)
        })
        .collect();

    keypoints
        .windows(2)
        .flat_map(|pair| bresenham(pair[0], pair[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn points(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_bezier_point_endpoints() {
        let cps = points(&[(0, 0), (50, 100), (100, 0)]);
        assert_eq!(bezier_point(&cps, 0.0), Some(Point::new(0.0, 0.0)));
        assert_eq!(bezier_point(&cps, 1.0), Some(Point::new(100.0, 0.0)));
    }

    #[test]
    fn test_bezier_point_quadratic_midpoint() {
        let cps = points(&[(0, 0), (50, 100), (100, 0)]);
        let mid = bezier_point(&cps, 0.5).unwrap();
        assert_abs_diff_eq!(mid.x, 50.0, epsilon = 1e-9);
        assert_abs_diff_eq!(mid.y, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_bezier_point_cubic() {
        let cps = points(&[(0, 0), (0, 30), (30, 30), (30, 0)]);
        let p = bezier_point(&cps, 0.25).unwrap();
        // B(t) = 3(1-t)^2 t P1 + 3(1-t) t^2 P2 + t^3 P3
        assert_abs_diff_eq!(p.x, 30.0 * (3.0 * 0.75 * 0.0625 + 0.015625), epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, 30.0 * (3.0 * 0.5625 * 0.25 + 3.0 * 0.75 * 0.0625), epsilon = 1e-9);
        assert!(bezier_point(&[], 0.5).is_none());
    }

    #[test]
    fn test_straight_bezier_is_one_pixel_per_column() {
        let pixels = draw_curve(&points(&[(0, 0), (100, 0)]), CurveAlgorithm::Bezier);
        // 100 unit segments, each emitting both ends.
        assert_eq!(pixels.len(), 200);
        assert_eq!(pixels.first(), Some(&Pixel::new(0, 0)));
        assert_eq!(pixels.last(), Some(&Pixel::new(100, 0)));
        assert!(pixels.iter().all(|p| p.y == 0));
    }

    #[test]
    fn test_bezier_passes_through_end_control_points() {
        let pixels = draw_curve(
            &points(&[(0, 0), (50, 100), (100, 0)]),
            CurveAlgorithm::Bezier,
        );
        assert_eq!(pixels.first(), Some(&Pixel::new(0, 0)));
        assert_eq!(pixels.last(), Some(&Pixel::new(100, 0)));
        assert!(pixels.contains(&Pixel::new(50, 50)));
    }

    #[test]
    fn test_curve_is_connected() {
        let pixels = draw_curve(
            &points(&[(10, 80), (40, -20), (90, 140), (120, 30)]),
            CurveAlgorithm::Bezier,
        );
        for pair in pixels.windows(2) {
            assert!((pair[0].x - pair[1].x).abs() <= 1);
            assert!((pair[0].y - pair[1].y).abs() <= 1);
        }
    }

    #[test]
    fn test_bspline_is_empty() {
        let cps = points(&[(0, 0), (10, 10), (20, 0), (30, 10)]);
        assert!(draw_curve(&cps, CurveAlgorithm::BSpline).is_empty());
    }

    #[test]
    fn test_too_few_control_points() {
        assert!(draw_curve(&[], CurveAlgorithm::Bezier).is_empty());
        assert!(draw_curve(&points(&[(5, 5)]), CurveAlgorithm::Bezier).is_empty());
    }
}
