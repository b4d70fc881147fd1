//! Clipping of 2D paths against an axis-aligned rectangle.
//!
//! Purpose
//! - Provide the two clippers (`clip_polyline`, `clip_polygon`) plus the
//!   outcode classifier and edge-intersection routine they share, with
//!   deterministic corner handling.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>` values; every clipping step
//!   produces new points, inputs are never mutated.
//! - The rectangle is a `Bounds` with `west <= east`, `south <= north`,
//!   established by the caller. On-edge points count as inside.
//! - The clippers are total over well-formed input; degenerate input
//!   (too-short paths, inverted bounds, non-finite coordinates) is a caller
//!   contract, not a checked error.

pub mod rand;

mod polygon;
mod polyline;
mod types;
mod util;

pub use polygon::clip_polygon;
pub use polyline::{clip_polyline, clip_segment};
pub use types::{outcode, Bounds, BOTTOM, LEFT, RIGHT, TOP};
pub use util::edge_crossing;
