//! Print a few samples per shape class for quick visual sanity on counts.
//!
//! Usage:
//!   cargo run -p sketchshapes --example show_contours -- [seed]
//!
//! Prints per sample: class label, point count, max radius, color.

use sketchshapes::contour::ShapeKind;
use sketchshapes::sampler::{SamplerParams, ShapeSampler};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2025u64);

    for kind in ShapeKind::ALL {
        let mut gen = ShapeSampler::new(kind, SamplerParams::default(), seed).unwrap();
        for i in 0..3 {
            let s = gen.generate_next().unwrap();
            let c = s.spec.color;
            println!(
                "{}_{i}: points={}, max_r={:.3}, size={:.3}, color=#{:02x}{:02x}{:02x}",
                kind.label(),
                s.contour.len(),
                s.contour.max_radius(),
                s.spec.size,
                c.r,
                c.g,
                c.b
            );
        }
    }
}
