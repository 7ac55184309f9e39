//! Hand-drawn shape contours for synthetic classification datasets.
//!
//! The crate turns a shape kind (circle, triangle, square) plus a handful of
//! randomized parameters into a closed 2D polyline that looks sketched rather
//! than geometrically perfect. Rendering the contours to raster images is a
//! collaborator concern and lives outside this crate; callers receive plain
//! point sequences plus a label color and hand them to whatever rasterizer
//! they use.

pub mod contour;
pub mod sampler;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::contour::{
        build_circle, build_polygon, build_square, smooth_polyline, Contour, ContourError,
        DefectField, Rgba, ShapeKind, ShapeSpec,
    };
    pub use crate::sampler::{ReplayToken, SamplerParams, ShapeSample, ShapeSampler};
    pub use nalgebra::Vector2 as Vec2;
}
