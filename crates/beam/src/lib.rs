#![deny(unsafe_code)]
//! Death-ray beam texture.
//!
//! Produces a narrow, tall strip whose rows repeat with a fixed period. Each
//! column is shifted vertically by an amount that grows quadratically with
//! distance from the center column, so the stripes bend into chevrons that
//! scroll along the beam when the texture is animated. Red is held at 255 and
//! green/blue follow a triangular wave, giving red bands that fade to white.
//!
//! The generator has no randomness; the seed is accepted for a uniform
//! construction signature and ignored.

use serde_json::{json, Value};
use texgen_core::error::TextureError;
use texgen_core::params::{param_f64, param_usize};
use texgen_core::{Generator, Raster, Rgba};

/// Default stripe period in rows.
pub const DEFAULT_PERIOD: usize = 100;
/// Default quadratic bend factor of the stripes.
pub const DEFAULT_BEND: f64 = 2.0;
/// Default texture width.
pub const DEFAULT_WIDTH: usize = 20;
/// Default texture height (two periods).
pub const DEFAULT_HEIGHT: usize = 2 * DEFAULT_PERIOD;

/// Shape parameters of the beam stripes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamParams {
    /// Vertical period of the stripe pattern in rows. Must be at least 2.
    pub period: usize,
    /// Quadratic bend factor. The edge columns are shifted by `bend / 4` periods
    /// relative to the center column.
    pub bend: f64,
}

impl Default for BeamParams {
    fn default() -> Self {
        Self {
            period: DEFAULT_PERIOD,
            bend: DEFAULT_BEND,
        }
    }
}

impl BeamParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            period: param_usize(params, "period", DEFAULT_PERIOD),
            bend: param_f64(params, "bend", DEFAULT_BEND),
        }
    }

    fn validate(&self) -> Result<(), TextureError> {
        if self.period < 2 {
            return Err(TextureError::invalid_param("period", "must be at least 2"));
        }
        if !self.bend.is_finite() {
            return Err(TextureError::invalid_param("bend", "must be finite"));
        }
        Ok(())
    }
}

/// Death-ray beam generator.
#[derive(Debug, Clone)]
pub struct DeathRay {
    width: usize,
    height: usize,
    params: BeamParams,
}

impl DeathRay {
    /// Creates a beam generator.
    ///
    /// Returns `TextureError::InvalidDimensions` for a zero dimension and
    /// `TextureError::InvalidParam` for a period below 2 or a non-finite bend.
    pub fn new(width: usize, height: usize, params: BeamParams) -> Result<Self, TextureError> {
        if width == 0 || height == 0 {
            return Err(TextureError::InvalidDimensions);
        }
        params.validate()?;
        Ok(Self {
            width,
            height,
            params,
        })
    }

    /// Creates a beam generator from a JSON params object.
    ///
    /// The seed is unused.
    pub fn from_json(
        width: usize,
        height: usize,
        _seed: u64,
        json_params: &Value,
    ) -> Result<Self, TextureError> {
        Self::new(width, height, BeamParams::from_json(json_params))
    }

    /// Green/blue intensity of the pixel at `(x, y)`.
    ///
    /// Center, half and quarter period use integer division so the default
    /// 20x200 beam lands on whole-pixel stripe boundaries.
    pub fn intensity(&self, x: usize, y: usize) -> u8 {
        let period = self.params.period as f64;
        let half = (self.params.period / 2) as f64;
        let quarter = (self.params.period / 4) as f64;
        let center = self.width / 2;

        let dx = x.abs_diff(center) as f64;
        let offset = self.params.bend * dx * dx * period / (self.width as f64).powi(2);
        let dy = (y as f64 - offset).rem_euclid(period);

        let wave = (dy - half).abs() * 2.0 - quarter;
        (wave * 255.0 / half).trunc().clamp(0.0, 255.0) as u8
    }
}

impl Generator for DeathRay {
    fn render(&self) -> Result<Raster, TextureError> {
        tracing::debug!(
            width = self.width,
            height = self.height,
            period = self.params.period,
            bend = self.params.bend,
            "rendering death-ray"
        );
        Raster::from_fn(self.width, self.height, |x, y| {
            let c = self.intensity(x, y);
            Rgba::opaque(255, c, c)
        })
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn params(&self) -> Value {
        json!({
            "period": self.params.period,
            "bend": self.params.bend,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "period": {
                "type": "integer",
                "min": 2,
                "default": DEFAULT_PERIOD,
                "description": "Vertical period of the stripe pattern in rows"
            },
            "bend": {
                "type": "number",
                "default": DEFAULT_BEND,
                "description": "Quadratic bend factor; edge columns shift by bend/4 periods"
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_beam() -> DeathRay {
        DeathRay::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, BeamParams::default()).unwrap()
    }

    #[test]
    fn render_matches_configured_dimensions() {
        let raster = DeathRay::new(7, 33, BeamParams::default())
            .unwrap()
            .render()
            .unwrap();
        assert_eq!(raster.width(), 7);
        assert_eq!(raster.height(), 33);
    }

    #[test]
    fn red_channel_and_alpha_are_always_max() {
        let raster = default_beam().render().unwrap();
        for (x, y, c) in raster.iter() {
            assert_eq!(c.r, 255, "red at ({x}, {y})");
            assert_eq!(c.a, 255, "alpha at ({x}, {y})");
            assert_eq!(c.g, c.b, "green/blue differ at ({x}, {y})");
        }
    }

    #[test]
    fn center_column_known_values() {
        let raster = default_beam().render().unwrap();
        // dy = 0: wave = 75, well above the clamp.
        assert_eq!(raster.get(10, 0).unwrap(), Rgba::WHITE);
        // dy = half: wave = -25, clamped to zero.
        assert_eq!(raster.get(10, 50).unwrap(), Rgba::RED);
        // dy = 25: wave = 25, 25 * 255 / 50 = 127.5 truncated.
        assert_eq!(raster.get(10, 25).unwrap(), Rgba::opaque(255, 127, 127));
    }

    #[test]
    fn edge_column_is_shifted_by_half_a_period() {
        let beam = default_beam();
        // dx = 10 at x = 0: offset = 2 * 100 * 100 / 400 = 50.
        assert_eq!(beam.intensity(0, 0), beam.intensity(10, 50));
        assert_eq!(beam.intensity(0, 50), beam.intensity(10, 0));
    }

    #[test]
    fn columns_are_symmetric_about_center() {
        let beam = default_beam();
        for k in 1..10 {
            for y in 0..DEFAULT_HEIGHT {
                assert_eq!(
                    beam.intensity(10 - k, y),
                    beam.intensity(10 + k, y),
                    "asymmetry at k={k}, y={y}"
                );
            }
        }
    }

    #[test]
    fn rows_repeat_every_period() {
        let raster = default_beam().render().unwrap();
        for y in 0..DEFAULT_PERIOD {
            for x in 0..DEFAULT_WIDTH {
                assert_eq!(
                    raster.get(x, y).unwrap(),
                    raster.get(x, y + DEFAULT_PERIOD).unwrap(),
                    "period break at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn zero_bend_gives_horizontal_stripes() {
        let beam = DeathRay::new(
            DEFAULT_WIDTH,
            DEFAULT_HEIGHT,
            BeamParams {
                bend: 0.0,
                ..BeamParams::default()
            },
        )
        .unwrap();
        let raster = beam.render().unwrap();
        for y in 0..DEFAULT_HEIGHT {
            let first = raster.get(0, y).unwrap();
            assert!((0..DEFAULT_WIDTH).all(|x| raster.get(x, y).unwrap() == first));
        }
    }

    #[test]
    fn render_is_deterministic() {
        let beam = default_beam();
        assert_eq!(beam.render().unwrap(), beam.render().unwrap());
    }

    #[test]
    fn from_json_reads_params_and_ignores_seed() {
        let a = DeathRay::from_json(20, 200, 1, &json!({"period": 40, "bend": 1.5})).unwrap();
        let b = DeathRay::from_json(20, 200, 99, &json!({"period": 40, "bend": 1.5})).unwrap();
        assert_eq!(a.params()["period"], 40);
        assert_eq!(a.render().unwrap(), b.render().unwrap());
    }

    #[test]
    fn from_json_falls_back_to_defaults() {
        let beam = DeathRay::from_json(20, 200, 0, &json!({"period": "wide"})).unwrap();
        assert_eq!(beam.params()["period"], DEFAULT_PERIOD);
        assert_eq!(beam.params()["bend"], DEFAULT_BEND);
    }

    #[test]
    fn period_below_two_is_rejected() {
        let result = DeathRay::from_json(20, 200, 0, &json!({"period": 1}));
        assert!(matches!(result, Err(TextureError::InvalidParam { .. })));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            DeathRay::new(0, 200, BeamParams::default()),
            Err(TextureError::InvalidDimensions)
        ));
    }

    #[test]
    fn schema_lists_every_param() {
        let beam = default_beam();
        let schema = beam.param_schema();
        for key in beam.params().as_object().unwrap().keys() {
            assert!(schema.get(key).is_some(), "schema missing {key}");
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn red_is_max_for_any_shape(
                width in 1_usize..64,
                height in 1_usize..256,
                period in 2_usize..300,
                bend in -8.0_f64..8.0,
            ) {
                let beam = DeathRay::new(width, height, BeamParams { period, bend }).unwrap();
                let raster = beam.render().unwrap();
                prop_assert_eq!(raster.width(), width);
                prop_assert_eq!(raster.height(), height);
                prop_assert!(raster.pixels().iter().all(|c| c.r == 255 && c.a == 255));
            }
        }
    }
}
