//! Polygon outline scan conversion.

use super::line::draw_line;
use crate::algorithm::{LineAlgorithm, PolygonAlgorithm};
use crate::geometry::{Pixel, Point};

/// Scan-convert the outline of a polygon.
///
/// Edges join consecutive vertices and the last vertex back to the first.
/// If the caller already closed the ring (last vertex equal to the first), the
/// given closing edge is used and no zero-length edge is added. Pixels are
/// concatenated in edge order, so shared vertices appear twice. No fill.
#[must_use]
pub fn draw_polygon(vertices: &[Point], algorithm: PolygonAlgorithm) -> Vec<Pixel> {
    let algorithm = LineAlgorithm::from(algorithm);
    edges(vertices)
        .flat_map(|(start, end)| draw_line(start, end, algorithm))
        .collect()
}

/// Outline edges in drawing order, closing the ring unless it is already closed.
pub(crate) fn edges(vertices: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let ring = match vertices {
        [first, .., last] if vertices.len() > 2 && first == last => {
            &vertices[..vertices.len() - 1]
        }
        _ => vertices,
    };
    let n = ring.len();
    (0..n).map(move |i| (ring[i], ring[(i + 1) % n]))
}
