use nalgebra::Vector2;
use rand::Rng;

/// Shortest circular distance between two angles in degrees, in [0, 180].
#[inline]
pub fn delta_angle_deg(a: f64, b: f64) -> f64 {
    let d = (b - a).rem_euclid(360.0);
    if d > 180.0 {
        360.0 - d
    } else {
        d
    }
}

#[inline]
pub fn lerp(a: Vector2<f64>, b: Vector2<f64>, t: f64) -> Vector2<f64> {
    a + (b - a) * t
}

/// Unit vector perpendicular to `v` (90° clockwise, i.e. `v × ẑ`), or `None`
/// for a near-zero edge.
#[inline]
pub fn perp_unit(v: Vector2<f64>) -> Option<Vector2<f64>> {
    let norm = v.norm();
    if !(norm.is_finite()) || norm < 1e-12 {
        return None;
    }
    Some(Vector2::new(v.y, -v.x) / norm)
}

/// Uniform sample inside the closed unit disk (rejection from the square).
pub fn sample_unit_disk<R: Rng>(rng: &mut R) -> Vector2<f64> {
    loop {
        let v = Vector2::new(rng.gen::<f64>() * 2.0 - 1.0, rng.gen::<f64>() * 2.0 - 1.0);
        if v.norm_squared() <= 1.0 {
            return v;
        }
    }
}

/// Uniform draw from `[lo, hi]`; collapses to `lo` when the interval is empty.
#[inline]
pub fn uniform_in<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if (hi - lo).abs() < f64::EPSILON {
        return lo;
    }
    lo + (hi - lo) * rng.gen::<f64>()
}
