//! Rectangle clipping for 2D polylines and polygons.
//!
//! The crate reduces vector geometry to the part that lies inside an
//! axis-aligned box: `clip_polyline` cuts an open path into the sub-paths
//! that cross the box (Cohen-Sutherland, extended to multi-segment paths),
//! `clip_polygon` intersects a closed ring with the box (Sutherland-Hodgman,
//! one pass per box edge). Both are built on the 4-bit `outcode` point
//! classifier, which is exposed for callers that want to pre-filter points.
//!
//! All operations are pure functions over their inputs: no I/O, no shared
//! state, no allocation beyond the returned sequences. Calls may run on any
//! number of threads without coordination.

pub mod clip2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::clip2::rand::{
        draw_path_walk, draw_ring_radial, ReplayToken, RingCfg, WalkCfg,
    };
    pub use crate::clip2::{
        clip_polygon, clip_polyline, clip_segment, edge_crossing, outcode, Bounds,
    };
    pub use nalgebra::Vector2 as Vec2;
}
