//! Randomized angular defect zones for the circle builder.
//!
//! A defect field is a small set of (angle, strength) pairs. Each defect
//! bends the circle radius in an angular window around its own angle; the
//! field is generated fresh per contour and never shared across shapes.

use super::types::ContourError;
use super::util::uniform_in;
use rand::Rng;
use std::ops::Range;

/// One angular influence zone.
#[derive(Clone, Copy, Debug)]
pub struct Defect {
    /// Center of the zone in [0, 360).
    pub angle_deg: f64,
    /// Radius perturbation amplitude, relative to shape size.
    pub strength: f64,
}

/// Set of defects scoped to a single contour generation call.
#[derive(Clone, Debug, Default)]
pub struct DefectField {
    pub defects: Vec<Defect>,
}

impl DefectField {
    /// Default defect count range (3 to 5 zones).
    pub const DEFAULT_COUNT_RANGE: Range<usize> = 3..6;

    /// Draw a defect field: count uniform in `count_range`, angles uniform
    /// over the full turn, strengths uniform in [0.8·irr_min, 1.2·irr_max].
    ///
    /// Pure in the rng state; no other side effects.
    pub fn generate<R: Rng>(
        rng: &mut R,
        irr_min: f64,
        irr_max: f64,
        count_range: Range<usize>,
    ) -> Result<DefectField, ContourError> {
        if !(irr_min.is_finite() && irr_max.is_finite()) || irr_min < 0.0 {
            return Err(ContourError::invalid(
                "irregularity bounds must be finite and >= 0",
            ));
        }
        if irr_min > irr_max {
            return Err(ContourError::invalid("irr_min <= irr_max required"));
        }
        if count_range.is_empty() {
            return Err(ContourError::invalid("defect count range must be non-empty"));
        }
        let count = rng.gen_range(count_range);
        let mut defects = Vec::with_capacity(count);
        for _ in 0..count {
            let angle_deg = rng.gen::<f64>() * 360.0;
            let strength = uniform_in(rng, irr_min * 0.8, irr_max * 1.2);
            defects.push(Defect {
                angle_deg,
                strength,
            });
        }
        Ok(DefectField { defects })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.defects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.defects.is_empty()
    }
}
