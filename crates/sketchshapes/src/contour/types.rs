//! Value types shared by the contour builders.
//!
//! - `Contour`: closed, ordered point sequence in shape-local space.
//! - `ShapeKind`/`ShapeSpec`: what to draw and with which parameters.
//! - `Rgba`: label color handed to the renderer collaborator.
//! - `ContourError`: invalid-argument failures at the builder boundary.

use nalgebra::{Rotation2, Vector2};
use std::fmt;

/// Error type shared by all contour builders.
#[derive(Debug)]
pub enum ContourError {
    InvalidParams { reason: String },
}

impl ContourError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ContourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid contour params: {reason}"),
        }
    }
}

impl std::error::Error for ContourError {}

/// RGBA8 label color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
    /// Opaque color from RGB components.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// The three shape classes of the dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Triangle,
    Square,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Triangle, ShapeKind::Square];

    /// Class label used in file names and manifests.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Square => "square",
        }
    }
}

/// One shape request: consumed once by the builders, then handed to the
/// renderer together with the resulting contour.
#[derive(Clone, Copy, Debug)]
pub struct ShapeSpec {
    pub kind: ShapeKind,
    pub size: f64,
    pub irregularity: f64,
    /// Scene-space rotation in degrees. Always 0 for squares.
    pub rotation_deg: f64,
    pub color: Rgba,
    /// Scene-space translation applied by the renderer.
    pub offset: Vector2<f64>,
}

/// Closed, ordered point sequence approximating a shape outline.
///
/// Invariants:
/// - At least 3 points.
/// - CCW by construction (sample angles increase monotonically, corners are
///   traversed in rotational order).
/// - Implicitly closed: the last point connects back to the first. The
///   circle builder additionally duplicates its first point at the end so
///   the polyline self-closes for renderers that do not loop.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Contour {
    pub points: Vec<Vector2<f64>>,
}

impl Contour {
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest distance from the local origin to any point.
    pub fn max_radius(&self) -> f64 {
        self.points.iter().map(|p| p.norm()).fold(0.0, f64::max)
    }

    /// Map shape-local points into scene space: rotate by `rotation_deg`
    /// around the origin, then translate by `offset`.
    pub fn transformed(&self, rotation_deg: f64, offset: Vector2<f64>) -> Contour {
        let rot = Rotation2::new(rotation_deg.to_radians());
        Contour {
            points: self.points.iter().map(|p| rot * p + offset).collect(),
        }
    }
}
