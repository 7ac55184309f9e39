//! Reproducible shape sample streams for dataset generation.
//!
//! Purpose
//! - Drive the contour builders with per-sample randomized parameters
//!   (size, irregularity, rotation, placement, label color) the way the
//!   dataset capture loop consumes them.
//!
//! Why this design
//! - Every sample carries its params snapshot plus a replay token
//!   `(seed, index)` mixed into a single RNG, so orchestrators can stream
//!   (`generate_next`) or rebuild any sample in isolation (`regenerate`)
//!   without replaying the whole stream.

use crate::contour::util::uniform_in;
use crate::contour::{
    build_circle, build_polygon, build_square, Contour, ContourError, DefectField, Rgba,
    ShapeKind, ShapeSpec,
};
use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // Two SplitMix64 finalizer rounds fold (seed, index) into one key,
        // so neighboring indices land on unrelated streams.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Per-dataset sampling configuration.
#[derive(Clone, Debug)]
pub struct SamplerParams {
    /// Shape size range (base radius / half-extent), in scene units.
    pub size_min: f64,
    pub size_max: f64,
    /// Irregularity range; each sample draws one magnitude from it.
    pub irregularity_min: f64,
    pub irregularity_max: f64,
    /// Sample count for the circle builder.
    pub circle_segments: usize,
    /// Placement jitter: offsets are uniform in ±position_offset per axis.
    pub position_offset: f64,
    /// Label colors per class; one is drawn per sample.
    pub circle_palette: Vec<Rgba>,
    pub triangle_palette: Vec<Rgba>,
    pub square_palette: Vec<Rgba>,
}

impl Default for SamplerParams {
    fn default() -> Self {
        Self {
            size_min: 0.6,
            size_max: 1.2,
            irregularity_min: 0.05,
            irregularity_max: 0.07,
            circle_segments: 16,
            position_offset: 0.3,
            circle_palette: vec![Rgba::rgb(0, 128, 0), Rgba::rgb(255, 192, 203)],
            triangle_palette: vec![Rgba::rgb(128, 0, 128), Rgba::rgb(165, 42, 42)],
            square_palette: vec![Rgba::rgb(255, 192, 203)],
        }
    }
}

impl SamplerParams {
    fn validate(&self) -> Result<(), ContourError> {
        if !(self.size_min.is_finite() && self.size_max.is_finite()) || self.size_min <= 0.0 {
            return Err(ContourError::invalid("size bounds must be finite and > 0"));
        }
        if self.size_min > self.size_max {
            return Err(ContourError::invalid("size_min <= size_max required"));
        }
        if !(self.irregularity_min.is_finite() && self.irregularity_max.is_finite())
            || self.irregularity_min < 0.0
        {
            return Err(ContourError::invalid(
                "irregularity bounds must be finite and >= 0",
            ));
        }
        if self.irregularity_min > self.irregularity_max {
            return Err(ContourError::invalid(
                "irregularity_min <= irregularity_max required",
            ));
        }
        if self.circle_segments < 3 {
            return Err(ContourError::invalid("circle_segments must be >= 3"));
        }
        if !self.position_offset.is_finite() || self.position_offset < 0.0 {
            return Err(ContourError::invalid(
                "position_offset must be finite and >= 0",
            ));
        }
        for (palette, kind) in [
            (&self.circle_palette, ShapeKind::Circle),
            (&self.triangle_palette, ShapeKind::Triangle),
            (&self.square_palette, ShapeKind::Square),
        ] {
            if palette.is_empty() {
                return Err(ContourError::invalid(format!(
                    "empty palette for {}",
                    kind.label()
                )));
            }
        }
        Ok(())
    }

    fn palette(&self, kind: ShapeKind) -> &[Rgba] {
        match kind {
            ShapeKind::Circle => &self.circle_palette,
            ShapeKind::Triangle => &self.triangle_palette,
            ShapeKind::Square => &self.square_palette,
        }
    }
}

/// One generated sample plus replay metadata.
#[derive(Clone, Debug)]
pub struct ShapeSample {
    pub spec: ShapeSpec,
    pub contour: Contour,
    pub replay: ReplayToken,
}

impl ShapeSample {
    /// Contour mapped into scene space (rotation + offset applied), ready
    /// for the renderer collaborator.
    pub fn scene_contour(&self) -> Contour {
        self.contour
            .transformed(self.spec.rotation_deg, self.spec.offset)
    }
}

/// Streaming generator for one shape class.
pub struct ShapeSampler {
    kind: ShapeKind,
    params: SamplerParams,
    seed: u64,
    next_index: u64,
}

impl ShapeSampler {
    pub fn new(kind: ShapeKind, params: SamplerParams, seed: u64) -> Result<Self, ContourError> {
        params.validate()?;
        Ok(Self {
            kind,
            params,
            seed,
            next_index: 0,
        })
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[inline]
    pub fn params(&self) -> &SamplerParams {
        &self.params
    }

    /// Generate the next sample in the stream.
    pub fn generate_next(&mut self) -> Result<ShapeSample, ContourError> {
        let token = ReplayToken {
            seed: self.seed,
            index: self.next_index,
        };
        self.next_index = self.next_index.wrapping_add(1);
        Self::sample_with_token(self.kind, &self.params, token)
    }

    /// Rebuild the exact sample a token refers to.
    pub fn regenerate(&self, replay: &ReplayToken) -> Result<ShapeSample, ContourError> {
        Self::sample_with_token(self.kind, &self.params, *replay)
    }

    fn sample_with_token(
        kind: ShapeKind,
        params: &SamplerParams,
        token: ReplayToken,
    ) -> Result<ShapeSample, ContourError> {
        let mut rng = token.to_std_rng();

        let offset = Vector2::new(
            uniform_in(&mut rng, -params.position_offset, params.position_offset),
            uniform_in(&mut rng, -params.position_offset, params.position_offset),
        );
        // Squares stay axis-aligned in this dataset.
        let rotation_deg = match kind {
            ShapeKind::Square => 0.0,
            _ => rng.gen::<f64>() * 360.0,
        };
        let irregularity = uniform_in(
            &mut rng,
            params.irregularity_min,
            params.irregularity_max,
        );
        let size = uniform_in(&mut rng, params.size_min, params.size_max);
        let palette = params.palette(kind);
        let color = palette[rng.gen_range(0..palette.len())];

        let contour = match kind {
            ShapeKind::Circle => {
                let defects = DefectField::generate(
                    &mut rng,
                    irregularity,
                    irregularity,
                    DefectField::DEFAULT_COUNT_RANGE,
                )?;
                build_circle(
                    params.circle_segments,
                    irregularity,
                    size,
                    &defects,
                    &mut rng,
                )?
            }
            ShapeKind::Triangle => {
                let start_angle = rng.gen::<f64>() * 360.0;
                build_polygon(3, irregularity, size, start_angle, &mut rng)?
            }
            ShapeKind::Square => build_square(irregularity, size, &mut rng)?,
        };

        Ok(ShapeSample {
            spec: ShapeSpec {
                kind,
                size,
                irregularity,
                rotation_deg,
                color,
                offset,
            },
            contour,
            replay: token,
        })
    }
}
