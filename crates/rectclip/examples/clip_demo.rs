//! Clip a few sampled paths or rings and print what survives.
//!
//! Usage:
//!   cargo run -p rectclip --example clip_demo -- paths
//!   cargo run -p rectclip --example clip_demo -- rings
//!
//! Prints per-sample vertex counts before and after clipping against the
//! unit-ish box [-2, 2] x [-2, 2].

use rectclip::prelude::*;

fn main() {
    let mode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "paths".to_string());
    match mode.as_str() {
        "paths" => show_paths(),
        "rings" => show_rings(),
        _ => {
            eprintln!("usage: clip_demo [paths|rings]");
        }
    }
}

fn show_paths() {
    let bounds = Bounds::new(-2.0, -2.0, 2.0, 2.0);
    let cfg = WalkCfg::default();
    for i in 0..5 {
        let path = draw_path_walk(&cfg, ReplayToken { seed: 2025, index: i });
        let parts = clip_polyline(&path, &bounds);
        let kept: usize = parts.iter().map(|p| p.len()).sum();
        println!(
            "path sample {i}: {} vertices -> {} part(s), {} vertices kept",
            path.len(),
            parts.len(),
            kept
        );
    }
}

fn show_rings() {
    let bounds = Bounds::new(-2.0, -2.0, 2.0, 2.0);
    let cfg = RingCfg::default();
    for i in 0..5 {
        let ring = draw_ring_radial(&cfg, ReplayToken { seed: 777, index: i });
        let out = clip_polygon(&ring, &bounds);
        println!(
            "ring sample {i}: {} vertices -> {} vertices inside the box",
            ring.len(),
            out.len()
        );
    }
}
