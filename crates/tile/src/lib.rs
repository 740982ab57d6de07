#![deny(unsafe_code)]
//! Seamless Voronoi ground tile.
//!
//! Scatters a fixed number of seeded anchors over the tile, gives each a
//! color blended from three reference colors with random barycentric
//! weights, and paints every pixel with the color of its nearest anchor.
//! Distances wrap toroidally, so cells that cross an edge continue on the
//! opposite side and the tile repeats without seams.
//!
//! The shipped tile is square, but any `width x height` is accepted: each
//! axis wraps by its own length, so a rectangular tile repeats seamlessly too.

pub mod torus;

use serde_json::{json, Value};
use texgen_core::color::barycentric;
use texgen_core::error::TextureError;
use texgen_core::params::{param_colors, param_usize};
use texgen_core::{Generator, Raster, Rgba, Xorshift64};

/// Default number of Voronoi anchors.
pub const DEFAULT_ANCHORS: usize = 30;
/// Default tile edge length.
pub const DEFAULT_SIZE: usize = 32;
/// Upper bound on the anchor count, independent of tile size.
pub const MAX_ANCHORS: usize = 1 << 16;
/// Default seed of the checked-in ground tile.
pub const DEFAULT_SEED: u64 = 1;
/// Default reference colors: dark green, olive brown, pale green.
pub const DEFAULT_COLORS: [Rgba; 3] = [
    Rgba::opaque(0, 128, 0),
    Rgba::opaque(128, 100, 0),
    Rgba::opaque(128, 192, 96),
];

/// A Voronoi site: a pixel position inside the tile and the color of its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub x: usize,
    pub y: usize,
    pub color: Rgba,
}

/// Tunable parameters for the ground tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileParams {
    /// Number of anchors. Must be between 1 and [`MAX_ANCHORS`].
    pub anchors: usize,
    /// Reference colors blended into each anchor color.
    pub colors: [Rgba; 3],
}

impl Default for TileParams {
    fn default() -> Self {
        Self {
            anchors: DEFAULT_ANCHORS,
            colors: DEFAULT_COLORS,
        }
    }
}

impl TileParams {
    /// Extracts parameters from a JSON object.
    ///
    /// A missing or non-integer `anchors` falls back to the default; a present
    /// but malformed `colors` array is an error.
    pub fn from_json(params: &Value) -> Result<Self, TextureError> {
        Ok(Self {
            anchors: param_usize(params, "anchors", DEFAULT_ANCHORS),
            colors: param_colors(params, "colors", DEFAULT_COLORS)?,
        })
    }
}

/// Draws a color as a uniform random point of the triangle spanned by `colors`.
///
/// Two uniform samples are folded back into the triangle when they fall in
/// the upper half of the unit square.
fn random_blend(rng: &mut Xorshift64, colors: &[Rgba; 3]) -> Rgba {
    let mut u = rng.next_f64();
    let mut v = rng.next_f64();
    if u + v > 1.0 {
        u = 1.0 - u;
        v = 1.0 - v;
    }
    barycentric([u, v, 1.0 - u - v], colors)
}

/// Generates `count` anchors inside a `width x height` tile.
///
/// Per anchor the PRNG is drawn in a fixed order (x, y, then color), so the
/// anchor set is a pure function of the seed.
pub fn scatter_anchors(
    width: usize,
    height: usize,
    count: usize,
    colors: &[Rgba; 3],
    seed: u64,
) -> Vec<Anchor> {
    let mut rng = Xorshift64::new(seed);
    (0..count)
        .map(|_| {
            let x = rng.next_usize(width);
            let y = rng.next_usize(height);
            let color = random_blend(&mut rng, colors);
            Anchor { x, y, color }
        })
        .collect()
}

/// Voronoi ground tile generator.
#[derive(Debug, Clone)]
pub struct GroundTile {
    width: usize,
    height: usize,
    params: TileParams,
    anchors: Vec<Anchor>,
}

impl GroundTile {
    /// Creates a tile generator and scatters its anchors.
    ///
    /// Returns `TextureError::InvalidDimensions` for a zero dimension and
    /// `TextureError::InvalidParam` when `anchors` is zero or above
    /// [`MAX_ANCHORS`].
    pub fn new(
        width: usize,
        height: usize,
        seed: u64,
        params: TileParams,
    ) -> Result<Self, TextureError> {
        if width == 0 || height == 0 {
            return Err(TextureError::InvalidDimensions);
        }
        if params.anchors == 0 {
            return Err(TextureError::invalid_param("anchors", "must be at least 1"));
        }
        if params.anchors > MAX_ANCHORS {
            return Err(TextureError::invalid_param(
                "anchors",
                format!("must be at most {MAX_ANCHORS}"),
            ));
        }
        let anchors = scatter_anchors(width, height, params.anchors, &params.colors, seed);
        tracing::debug!(count = anchors.len(), seed, "scattered ground-tile anchors");
        Ok(Self {
            width,
            height,
            params,
            anchors,
        })
    }

    /// Creates a tile generator from a JSON params object.
    pub fn from_json(
        width: usize,
        height: usize,
        seed: u64,
        json_params: &Value,
    ) -> Result<Self, TextureError> {
        Self::new(width, height, seed, TileParams::from_json(json_params)?)
    }

    /// The anchors in generation order.
    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    /// The anchor closest to `(x, y)` on the torus. Ties go to the earliest anchor.
    pub fn nearest(&self, x: usize, y: usize) -> &Anchor {
        let mut best = &self.anchors[0];
        let mut best_d = u64::MAX;
        for anchor in &self.anchors {
            let d = torus::distance_sq((anchor.x, anchor.y), (x, y), self.width, self.height);
            if d < best_d {
                best = anchor;
                best_d = d;
            }
        }
        best
    }
}

impl Generator for GroundTile {
    fn render(&self) -> Result<Raster, TextureError> {
        tracing::debug!(
            width = self.width,
            height = self.height,
            anchors = self.anchors.len(),
            "rendering ground-tile"
        );
        Raster::from_fn(self.width, self.height, |x, y| self.nearest(x, y).color)
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn params(&self) -> Value {
        json!({
            "anchors": self.params.anchors,
            "colors": self.params.colors,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "anchors": {
                "type": "integer",
                "min": 1,
                "max": MAX_ANCHORS,
                "default": DEFAULT_ANCHORS,
                "description": "Number of Voronoi cells"
            },
            "colors": {
                "type": "array",
                "items": "color",
                "length": 3,
                "default": DEFAULT_COLORS,
                "description": "Reference colors blended into each cell color"
            }
        })
    }
}
