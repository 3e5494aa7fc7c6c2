//! Property and scenario tests for the public rasterization API.
//!
//! Run: cargo test --test raster_properties_test

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;

use proptest::prelude::*;
use trueno_raster::prelude::*;

fn pixels(coords: &[(i32, i32)]) -> Vec<Pixel> {
    coords.iter().copied().map(Pixel::from).collect()
}

fn points(coords: &[(i32, i32)]) -> Vec<Point> {
    coords.iter().copied().map(Point::from).collect()
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn bresenham_shallow_line() {
    let line = draw_line(Point::new(0.0, 0.0), Point::new(3.0, 2.0), LineAlgorithm::Bresenham);
    assert_eq!(line, pixels(&[(0, 0), (1, 1), (2, 1), (3, 2)]));
}

#[test]
fn degenerate_line_is_single_pixel() {
    let p = Point::new(7.0, -3.0);
    for algorithm in [LineAlgorithm::Dda, LineAlgorithm::Bresenham, LineAlgorithm::Naive] {
        assert_eq!(draw_line(p, p, algorithm), pixels(&[(7, -3)]), "{algorithm}");
    }
}

#[test]
fn dda_square_outline_is_closed() {
    let square = points(&[(0, 0), (4, 0), (4, 4), (0, 4)]);
    let outline = draw_polygon(&square, PolygonAlgorithm::Dda);
    let set: HashSet<Pixel> = outline.iter().copied().collect();

    for i in 0..=4 {
        assert!(set.contains(&Pixel::new(i, 0)), "top edge at {i}");
        assert!(set.contains(&Pixel::new(4, i)), "right edge at {i}");
        assert!(set.contains(&Pixel::new(i, 4)), "bottom edge at {i}");
        assert!(set.contains(&Pixel::new(0, i)), "left edge at {i}");
    }
    assert_eq!(set.len(), 16);
    assert_eq!(outline.first(), Some(&Pixel::new(0, 0)));
    assert_eq!(outline.last(), Some(&Pixel::new(0, 0)));
}

#[test]
fn ellipse_is_four_way_symmetric() {
    let outline = draw_ellipse(Point::new(0.0, 0.0), Point::new(20.0, 10.0));
    let set: HashSet<Pixel> = outline.iter().copied().collect();
    let (cx2, cy2) = (20, 10);

    for p in &set {
        assert!(set.contains(&Pixel::new(cx2 - p.x, p.y)), "{p:?}");
        assert!(set.contains(&Pixel::new(p.x, cy2 - p.y)), "{p:?}");
        assert!(set.contains(&Pixel::new(cx2 - p.x, cy2 - p.y)), "{p:?}");
    }
}

#[test]
fn clipping_clamps_horizontal_segment() {
    let window = Rect::new(0.0, 0.0, 100.0, 100.0);
    let segment = Line::from_coords(-10.0, 50.0, 110.0, 50.0);
    for algorithm in [ClipAlgorithm::CohenSutherland, ClipAlgorithm::LiangBarsky] {
        let clipped = clip(segment, window, algorithm).unwrap();
        for p in clipped.to_points() {
            assert!((0.0..=100.0).contains(&p.x), "{algorithm}: {p:?}");
            assert_eq!(p.y, 50.0, "{algorithm}");
        }
    }
}

#[test]
fn clipping_rejects_outside_segment() {
    let window = Rect::new(0.0, 0.0, 100.0, 100.0);
    let segment = Line::from_coords(200.0, 200.0, 300.0, 300.0);
    for algorithm in [ClipAlgorithm::CohenSutherland, ClipAlgorithm::LiangBarsky] {
        assert!(clip(segment, window, algorithm).is_none(), "{algorithm}");
    }
}

#[test]
fn bspline_and_short_curves_are_empty() {
    let controls = points(&[(0, 0), (10, 20), (30, 20), (40, 0)]);
    assert!(draw_curve(&controls, CurveAlgorithm::BSpline).is_empty());
    assert!(draw_curve(&controls[..1], CurveAlgorithm::Bezier).is_empty());
    assert!(draw_curve(&[], CurveAlgorithm::Bezier).is_empty());
}

#[test]
fn selectors_parse_script_names() {
    assert_eq!("DDA".parse::<LineAlgorithm>().unwrap(), LineAlgorithm::Dda);
    assert_eq!("Bresenham".parse::<PolygonAlgorithm>().unwrap(), PolygonAlgorithm::Bresenham);
    assert_eq!("Bezier".parse::<CurveAlgorithm>().unwrap(), CurveAlgorithm::Bezier);
    assert_eq!("B-spline".parse::<CurveAlgorithm>().unwrap(), CurveAlgorithm::BSpline);
    assert_eq!(
        "Cohen-Sutherland".parse::<ClipAlgorithm>().unwrap(),
        ClipAlgorithm::CohenSutherland
    );
    assert!("Wu".parse::<LineAlgorithm>().is_err());
}

// ============================================================================
// Properties
// ============================================================================

fn coordinate() -> impl Strategy<Value = i32> {
    -500i32..500
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_bresenham_endpoints_and_length(
        x0 in coordinate(), y0 in coordinate(),
        x1 in coordinate(), y1 in coordinate(),
    ) {
        let line = draw_line(
            Point::from((x0, y0)),
            Point::from((x1, y1)),
            LineAlgorithm::Bresenham,
        );
        let expected = (x1 - x0).abs().max((y1 - y0).abs()) as usize + 1;

        prop_assert_eq!(line.len(), expected);
        prop_assert_eq!(line.first().copied(), Some(Pixel::new(x0, y0)));
        prop_assert_eq!(line.last().copied(), Some(Pixel::new(x1, y1)));
    }

    #[test]
    fn prop_line_algorithms_are_8_connected(
        x0 in coordinate(), y0 in coordinate(),
        x1 in coordinate(), y1 in coordinate(),
    ) {
        for algorithm in [LineAlgorithm::Dda, LineAlgorithm::Bresenham] {
            let line = draw_line(Point::from((x0, y0)), Point::from((x1, y1)), algorithm);
            for pair in line.windows(2) {
                prop_assert!(pair[0].distance_squared(pair[1]) <= 2, "{} gap {:?}", algorithm, pair);
            }
        }
    }

    #[test]
    fn prop_rotate_round_trip(
        pts in prop::collection::vec((coordinate(), coordinate()), 1..10),
        cx in coordinate(), cy in coordinate(),
        degrees in -720.0f64..720.0,
    ) {
        let original: Vec<Point> = pts.into_iter().map(Point::from).collect();
        let center = Point::from((cx, cy));
        let back = rotate(&rotate(&original, center, degrees), center, -degrees);

        for (a, b) in original.iter().zip(&back) {
            prop_assert!((a.x - b.x).abs() <= 1.0 && (a.y - b.y).abs() <= 1.0, "{:?} -> {:?}", a, b);
        }
    }

    #[test]
    fn prop_unit_scale_is_identity(
        pts in prop::collection::vec((coordinate(), coordinate()), 1..10),
        cx in coordinate(), cy in coordinate(),
    ) {
        let original: Vec<Point> = pts.into_iter().map(Point::from).collect();
        prop_assert_eq!(scale(&original, Point::from((cx, cy)), 1.0), original);
    }

    /// Odd extents included: the outline mirrors about the box center and
    /// never leaves the box.
    #[test]
    fn prop_ellipse_symmetric_inside_box(
        x0 in -100i32..100, y0 in -100i32..100,
        w in 0i32..80, h in 0i32..80,
    ) {
        let outline = draw_ellipse(Point::from((x0, y0)), Point::from((x0 + w, y0 + h)));
        let set: HashSet<Pixel> = outline.iter().copied().collect();
        let (sx, sy) = (2 * x0 + w, 2 * y0 + h);

        for p in &set {
            prop_assert!((x0..=x0 + w).contains(&p.x), "{:?} outside x range", p);
            prop_assert!((y0..=y0 + h).contains(&p.y), "{:?} outside y range", p);
            prop_assert!(set.contains(&Pixel::new(sx - p.x, sy - p.y)), "{:?}", p);
        }
    }
}
