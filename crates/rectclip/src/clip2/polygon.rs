//! Sutherland-Hodgman polygon clipping against a rectangle.

use nalgebra::Vector2;

use super::types::{outcode, Bounds, BOTTOM, LEFT, RIGHT, TOP};
use super::util::edge_crossing;

/// Clip a closed ring against `bounds`.
///
/// The ring is intersected with the four half-planes of the rectangle in
/// turn; the order left, right, bottom, top is fixed and kept as a literal
/// list so corner output stays reproducible. The result is a single ring,
/// empty when the input lies entirely outside, with vertices collinear with
/// the box edges where clipping occurred. A ring fully inside comes back
/// unchanged.
///
/// Preconditions: `points.len() >= 3` forming a closed ring (the last point
/// connects back to the first), finite coordinates, well-formed `bounds`. An
/// empty input panics on the last-point index; the output for shorter input
/// is unspecified.
pub fn clip_polygon(points: &[Vector2<f64>], bounds: &Bounds) -> Vec<Vector2<f64>> {
    let mut ring = points.to_vec();

    for edge in [LEFT, RIGHT, BOTTOM, TOP] {
        let mut out = Vec::with_capacity(ring.len() + 4);
        let mut prev = ring[ring.len() - 1];
        let mut prev_inside = outcode(prev, bounds) & edge == 0;

        for &p in &ring {
            let inside = outcode(p, bounds) & edge == 0;

            // the ring crosses this edge between prev and p
            if inside != prev_inside {
                out.push(edge_crossing(prev, p, edge, bounds));
            }
            if inside {
                out.push(p);
            }

            prev = p;
            prev_inside = inside;
        }

        ring = out;
        if ring.is_empty() {
            break;
        }
    }

    ring
}
