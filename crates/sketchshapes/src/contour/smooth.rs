//! Local 3-tap smoothing pass.
//!
//! Removes the high-frequency jitter the circle builder injects while
//! keeping the overall outline. Endpoints pass through unchanged so a
//! self-closing polyline stays closed.

use nalgebra::Vector2;

/// Weighted 3-point average over an ordered sequence.
///
/// - Length < 3: identity.
/// - First and last points unchanged.
/// - Interior point i becomes `0.25·p[i-1] + 0.5·p[i] + 0.25·p[i+1]`,
///   taken over the original sequence (not partially smoothed values).
///
/// Deterministic; repeated application keeps smoothing further.
pub fn smooth_polyline(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let mut out = Vec::with_capacity(points.len());
    out.push(points[0]);
    for i in 1..points.len() - 1 {
        out.push(points[i - 1] * 0.25 + points[i] * 0.5 + points[i + 1] * 0.25);
    }
    out.push(points[points.len() - 1]);
    out
}
