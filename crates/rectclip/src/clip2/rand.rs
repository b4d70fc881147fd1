//! Deterministic random paths and rings.
//!
//! Purpose
//! - Provide small, reproducible samplers for open paths and closed rings,
//!   used by the property tests, the benches, and the demo example.
//!
//! Model
//! - Paths are random walks: a start point in a disc, then fixed-count steps
//!   with uniform heading and bounded length.
//! - Rings are radial: equally spaced angles with bounded radial jitter, so
//!   the ring is simple (non-self-intersecting) by construction.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

/// SplitMix64 finalizer, cheap and stable across platforms.
#[inline]
fn splitmix(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xbf58476d1ce4e5b9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94d049bb133111eb);
    x ^ (x >> 31)
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        let k = splitmix(self.seed ^ splitmix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Random-walk path configuration.
#[derive(Clone, Copy, Debug)]
pub struct WalkCfg {
    /// Number of vertices. Clamped to at least 2.
    pub vertex_count: usize,
    /// Mean step length; each step is uniform in `[0.5, 1.5]` times this.
    pub step: f64,
    /// The start point is uniform in the disc of this radius at the origin.
    pub start_radius: f64,
}

impl Default for WalkCfg {
    fn default() -> Self {
        Self {
            vertex_count: 32,
            step: 0.5,
            start_radius: 2.0,
        }
    }
}

/// Jittered radial ring configuration.
#[derive(Clone, Copy, Debug)]
pub struct RingCfg {
    /// Number of vertices. Clamped to at least 3.
    pub vertex_count: usize,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`
    /// with `u` uniform in `[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Base radius around the origin.
    pub base_radius: f64,
}

impl Default for RingCfg {
    fn default() -> Self {
        Self {
            vertex_count: 12,
            radial_jitter: 0.25,
            base_radius: 2.0,
        }
    }
}

/// Draw a random-walk open path.
pub fn draw_path_walk(cfg: &WalkCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.max(2);
    let step = cfg.step.max(1e-9);
    let r0 = cfg.start_radius.max(0.0);

    let theta = rng.gen::<f64>() * std::f64::consts::TAU;
    // sqrt for a uniform draw over the disc area
    let r = rng.gen::<f64>().sqrt() * r0;
    let mut p = Vector2::new(theta.cos() * r, theta.sin() * r);

    let mut out = Vec::with_capacity(n);
    out.push(p);
    for _ in 1..n {
        let heading = rng.gen::<f64>() * std::f64::consts::TAU;
        let len = rng.gen_range(0.5..1.5) * step;
        p += Vector2::new(heading.cos(), heading.sin()) * len;
        out.push(p);
    }
    out
}

/// Draw a simple closed ring via radial jitter.
///
/// The last vertex connects implicitly back to the first; it is not
/// repeated.
pub fn draw_ring_radial(cfg: &RingCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.max(3);
    let rj = cfg.radial_jitter.clamp(0.0, 0.99);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);

    (0..n)
        .map(|k| {
            let th = (k as f64) * delta;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draws() {
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_path_walk(&WalkCfg::default(), tok);
        let p2 = draw_path_walk(&WalkCfg::default(), tok);
        assert_eq!(p1.len(), p2.len());
        for (a, b) in p1.iter().zip(p2.iter()) {
            assert!((a - b).norm() == 0.0);
        }

        let r1 = draw_ring_radial(&RingCfg::default(), tok);
        let r2 = draw_ring_radial(&RingCfg::default(), tok);
        assert_eq!(r1, r2);
    }

    #[test]
    fn index_changes_the_draw() {
        let cfg = WalkCfg::default();
        let p1 = draw_path_walk(&cfg, ReplayToken { seed: 1, index: 0 });
        let p2 = draw_path_walk(&cfg, ReplayToken { seed: 1, index: 1 });
        assert!(p1.iter().zip(p2.iter()).any(|(a, b)| (a - b).norm() > 0.0));
    }

    #[test]
    fn counts_are_clamped() {
        let tok = ReplayToken { seed: 3, index: 0 };
        let path = draw_path_walk(
            &WalkCfg {
                vertex_count: 0,
                ..WalkCfg::default()
            },
            tok,
        );
        assert_eq!(path.len(), 2);
        let ring = draw_ring_radial(
            &RingCfg {
                vertex_count: 1,
                ..RingCfg::default()
            },
            tok,
        );
        assert_eq!(ring.len(), 3);
    }
}
