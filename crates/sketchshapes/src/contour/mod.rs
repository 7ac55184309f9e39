//! Procedural contour synthesis for the three shape classes.
//!
//! Purpose
//! - Produce closed, CCW-ordered point sequences in shape-local space with
//!   hand-drawn imperfections: radius defects for circles, bowed edges plus
//!   corner noise for polygons and squares.
//!
//! Model
//! - Every builder takes an explicit `Rng` handle; randomness never comes
//!   from a global source, so contours are reproducible given a seeded
//!   stream (see `crate::sampler::ReplayToken`).
//! - Parameter validation happens at the builder boundary; a degenerate
//!   request (too few sides/segments, negative magnitudes) is an error,
//!   never a silently broken contour.

pub mod build;
pub mod defects;
pub mod smooth;
mod types;
pub(crate) mod util;

pub use build::{build_circle, build_polygon, build_square};
pub use defects::{Defect, DefectField};
pub use smooth::smooth_polyline;
pub use types::{Contour, ContourError, Rgba, ShapeKind, ShapeSpec};

#[cfg(test)]
mod tests;
