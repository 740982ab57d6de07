//! The `Generator` trait every texture generator implements.
//!
//! The trait is object-safe so generators can be used as `dyn Generator`
//! when dispatching by name.

use crate::error::TextureError;
use crate::raster::Raster;
use serde_json::Value;

/// A single-pass procedural texture.
///
/// Generators are configured at construction (size, seed, params) and
/// `render` is a pure function of that configuration: calling it twice
/// yields identical rasters.
pub trait Generator {
    /// Computes the full image.
    fn render(&self) -> Result<Raster, TextureError>;

    /// Output width in pixels.
    fn width(&self) -> usize;

    /// Output height in pixels.
    fn height(&self) -> usize;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing all parameters, their types, and defaults.
    fn param_schema(&self) -> Value;
}
