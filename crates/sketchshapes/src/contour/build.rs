//! Contour builders for the three shape classes.
//!
//! Purpose
//! - `build_circle`: radial sampling with overlapping defect zones plus
//!   per-sample jitter, finished by one smoothing pass.
//! - `build_polygon`: regular N-gon corners with radius noise, edges bowed
//!   by a sine-weighted perpendicular offset plus isotropic noise.
//! - `build_square`: independently scaled width/height, noisy corners, then
//!   the same edge bowing as the polygon path.
//!
//! Model
//! - All magnitudes are relative to `size`, so contours land roughly within
//!   radius ~1.2·size of the origin and the renderer scales them uniformly.
//! - The edge bow vanishes exactly at both corners (sin(π·t) with t∈(0,1)),
//!   so consecutive edges stay C0-continuous at the shared corner.

use nalgebra::Vector2;
use rand::Rng;

use super::defects::DefectField;
use super::smooth::smooth_polyline;
use super::types::{Contour, ContourError};
use super::util::{delta_angle_deg, lerp, perp_unit, sample_unit_disk, uniform_in};

/// Defects further than this from a sample angle have no influence.
const DEFECT_WINDOW_DEG: f64 = 60.0;
/// Interpolation steps per polygon edge (corner + 9 intermediates).
const EDGE_STEPS: usize = 10;

fn validate_magnitudes(size: f64, irregularity: f64) -> Result<(), ContourError> {
    if !size.is_finite() || size <= 0.0 {
        return Err(ContourError::invalid("size must be finite and positive"));
    }
    if !irregularity.is_finite() || irregularity < 0.0 {
        return Err(ContourError::invalid(
            "irregularity must be finite and >= 0",
        ));
    }
    Ok(())
}

/// Hand-drawn circle: `segments + 1` points (duplicate endpoint closes the
/// polyline), radius perturbed by the defect field and per-sample jitter,
/// then smoothed once.
///
/// `segments >= 3` required.
pub fn build_circle<R: Rng>(
    segments: usize,
    irregularity: f64,
    size: f64,
    defects: &DefectField,
    rng: &mut R,
) -> Result<Contour, ContourError> {
    if segments < 3 {
        return Err(ContourError::invalid("circle needs at least 3 segments"));
    }
    validate_magnitudes(size, irregularity)?;

    let mut points = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let angle_deg = 360.0 * i as f64 / segments as f64;
        let mut radius = size;

        for d in &defects.defects {
            let diff = delta_angle_deg(angle_deg, d.angle_deg);
            if diff < DEFECT_WINDOW_DEG {
                // cos(1.5·Δ)² falls smoothly from 1 at the defect center to
                // 0 at the 60° window edge. The sin(2·θ) ripple phase is
                // measured from the contour's zero angle, shared by every
                // defect, not from the defect's own angle.
                let influence = (diff.to_radians() * 1.5).cos().powi(2);
                radius += (angle_deg.to_radians() * 2.0).sin() * d.strength * influence * size;
            }
        }

        radius += uniform_in(rng, -irregularity * 0.1, irregularity * 0.1) * size;

        let rad = angle_deg.to_radians();
        points.push(Vector2::new(rad.cos() * radius, rad.sin() * radius));
    }

    Ok(Contour {
        points: smooth_polyline(&points),
    })
}

/// Hand-drawn regular polygon: `sides·10` points, corners at
/// `start_angle_deg + 360·i/sides` with radius noise, edges bowed.
///
/// `sides >= 3` required. No smoothing pass (the bow is already smooth).
pub fn build_polygon<R: Rng>(
    sides: usize,
    irregularity: f64,
    size: f64,
    start_angle_deg: f64,
    rng: &mut R,
) -> Result<Contour, ContourError> {
    if sides < 3 {
        return Err(ContourError::invalid("polygon needs at least 3 sides"));
    }
    if !start_angle_deg.is_finite() {
        return Err(ContourError::invalid("start angle must be finite"));
    }
    validate_magnitudes(size, irregularity)?;

    let mut corners = Vec::with_capacity(sides);
    for i in 0..sides {
        let angle = start_angle_deg + 360.0 * i as f64 / sides as f64;
        let radius = size + uniform_in(rng, -irregularity * 0.2, irregularity * 0.2) * size;
        let rad = angle.to_radians();
        corners.push(Vector2::new(rad.cos() * radius, rad.sin() * radius));
    }

    Ok(Contour {
        points: bowed_edges(&corners, irregularity, size, rng),
    })
}

/// Hand-drawn square: width and height scaled independently in
/// [0.9, 1.1]·size, corners displaced inside a noise disk, edges bowed.
/// Always 40 points, corner order bottom-left, bottom-right, top-right,
/// top-left.
pub fn build_square<R: Rng>(
    irregularity: f64,
    size: f64,
    rng: &mut R,
) -> Result<Contour, ContourError> {
    validate_magnitudes(size, irregularity)?;

    let width = size * uniform_in(rng, 0.9, 1.1);
    let height = size * uniform_in(rng, 0.9, 1.1);

    let mut corners = [
        Vector2::new(-width, -height),
        Vector2::new(width, -height),
        Vector2::new(width, height),
        Vector2::new(-width, height),
    ];
    for corner in &mut corners {
        *corner += sample_unit_disk(rng) * irregularity * 0.2 * size;
    }

    Ok(Contour {
        points: bowed_edges(&corners, irregularity, size, rng),
    })
}

/// Walk the corners in order, emitting each corner followed by 9 bowed
/// intermediates toward the next (wrapping) corner.
///
/// The perpendicular is the edge direction rotated 90° clockwise, so for
/// CCW corner order the bow points outward. A near-zero edge (coincident
/// corners) skips the bow and keeps only the isotropic noise.
fn bowed_edges<R: Rng>(
    corners: &[Vector2<f64>],
    irregularity: f64,
    size: f64,
    rng: &mut R,
) -> Vec<Vector2<f64>> {
    let mut points = Vec::with_capacity(corners.len() * EDGE_STEPS);
    for i in 0..corners.len() {
        let cur = corners[i];
        let next = corners[(i + 1) % corners.len()];
        points.push(cur);

        for j in 1..EDGE_STEPS {
            let t = j as f64 / EDGE_STEPS as f64;
            let mut p = lerp(cur, next, t);
            if let Some(perp) = perp_unit(next - cur) {
                let bow = (t * std::f64::consts::PI).sin() * irregularity * 0.3 * size;
                p += perp * bow;
            }
            p += sample_unit_disk(rng) * irregularity * 0.1 * size;
            points.push(p);
        }
    }
    points
}
