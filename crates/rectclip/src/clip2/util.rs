use nalgebra::Vector2;

use super::types::{Bounds, BOTTOM, LEFT, RIGHT, TOP};

/// Intersect segment `a -> b` with one boundary edge selected by `code`.
///
/// The crossing point is found by linear interpolation along the segment and
/// snapped exactly onto the edge coordinate. When `code` carries several bits
/// (corner regions), the edge is picked in the fixed order top, bottom,
/// right, left; both clippers depend on this order for reproducible corner
/// output, so it must stay an explicit chain.
///
/// Precondition: `a` and `b` must differ on the axis of the chosen edge (the
/// interpolation divides by that difference). The clippers guarantee this by
/// only intersecting on axes where the endpoint outcodes disagree; violating
/// it yields non-finite coordinates rather than an error.
pub fn edge_crossing(a: Vector2<f64>, b: Vector2<f64>, code: u8, bounds: &Bounds) -> Vector2<f64> {
    if code & TOP != 0 {
        Vector2::new(
            a.x + (b.x - a.x) * (bounds.north - a.y) / (b.y - a.y),
            bounds.north,
        )
    } else if code & BOTTOM != 0 {
        Vector2::new(
            a.x + (b.x - a.x) * (bounds.south - a.y) / (b.y - a.y),
            bounds.south,
        )
    } else if code & RIGHT != 0 {
        Vector2::new(
            bounds.east,
            a.y + (b.y - a.y) * (bounds.east - a.x) / (b.x - a.x),
        )
    } else if code & LEFT != 0 {
        Vector2::new(
            bounds.west,
            a.y + (b.y - a.y) * (bounds.west - a.x) / (b.x - a.x),
        )
    } else {
        debug_assert!(false, "edge_crossing called with code 0");
        a
    }
}
