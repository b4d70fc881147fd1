//! Cohen-Sutherland clipping, extended from single segments to open paths.
//!
//! Per consecutive point pair the classic trivial-accept / trivial-reject /
//! intersect loop runs; across pairs the previous endpoint's outcode is
//! carried forward so each vertex is classified once. Whenever the path
//! leaves the rectangle a sub-path is finished and the next entry starts a
//! new one.

use nalgebra::Vector2;

use super::types::{outcode, Bounds};
use super::util::edge_crossing;

/// Clip an open path against `bounds`, splitting it where it exits.
///
/// Returns the maximal runs of the path that lie inside the rectangle, in
/// input order, each run a separate sub-path with crossing points inserted
/// at its clipped ends. A path entirely outside yields an empty vec.
///
/// The sub-path split rule is asymmetric on purpose: a run is only flushed
/// when its segment was clipped at the far end and more input segments
/// remain. An exit on the final segment stays in the current run, which is
/// emitted after the loop. Simplifying this changes how output splits.
///
/// Preconditions: `points.len() >= 2`, finite coordinates, well-formed
/// `bounds`. An empty input panics on the first index; the output for
/// shorter input is unspecified.
pub fn clip_polyline(points: &[Vector2<f64>], bounds: &Bounds) -> Vec<Vec<Vector2<f64>>> {
    let mut result: Vec<Vec<Vector2<f64>>> = Vec::new();
    let mut part: Vec<Vector2<f64>> = Vec::new();
    let mut code_a = outcode(points[0], bounds);

    for i in 1..points.len() {
        let mut a = points[i - 1];
        let mut b = points[i];
        let last_code = outcode(b, bounds);
        let mut code_b = last_code;

        loop {
            if code_a | code_b == 0 {
                // both endpoints inside: keep the segment
                part.push(a);

                if code_b != last_code {
                    // the segment was cut short at b, the path exits here
                    part.push(b);
                    if i < points.len() - 1 {
                        result.push(std::mem::take(&mut part));
                    }
                } else if i == points.len() - 1 {
                    part.push(b);
                }
                break;
            } else if code_a & code_b != 0 {
                // both endpoints beyond the same edge: discard the segment
                break;
            } else if code_a != 0 {
                // a outside: pull it onto the boundary and reclassify
                a = edge_crossing(a, b, code_a, bounds);
                code_a = outcode(a, bounds);
            } else {
                // b outside, symmetric
                b = edge_crossing(a, b, code_b, bounds);
                code_b = outcode(b, bounds);
            }
        }

        // next pair starts from the unclipped classification of b
        code_a = last_code;
    }

    if !part.is_empty() {
        result.push(part);
    }

    result
}

/// Clip a single segment against `bounds`.
///
/// Returns the clipped endpoints, or `None` when the segment misses the
/// rectangle entirely. Endpoints already inside are returned unchanged.
pub fn clip_segment(
    a: Vector2<f64>,
    b: Vector2<f64>,
    bounds: &Bounds,
) -> Option<(Vector2<f64>, Vector2<f64>)> {
    let mut a = a;
    let mut b = b;
    let mut code_a = outcode(a, bounds);
    let mut code_b = outcode(b, bounds);

    loop {
        if code_a | code_b == 0 {
            return Some((a, b));
        } else if code_a & code_b != 0 {
            return None;
        } else if code_a != 0 {
            a = edge_crossing(a, b, code_a, bounds);
            code_a = outcode(a, bounds);
        } else {
            b = edge_crossing(a, b, code_b, bounds);
            code_b = outcode(b, bounds);
        }
    }
}
