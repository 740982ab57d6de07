//! Reproducible description of one output image.
//!
//! A [`Recipe`] captures everything needed to regenerate a texture:
//! generator name, image dimensions, parameters, PRNG seed, and the path the
//! PNG is written to (relative to the asset root).

use crate::error::TextureError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn empty_params() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

/// Reproducible description of a single texture.
///
/// Two identical recipes rendered by the same binary produce bit-identical
/// images. `params` and `seed` may be omitted in JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub generator: String,
    pub width: usize,
    pub height: usize,
    #[serde(default = "empty_params")]
    pub params: serde_json::Value,
    #[serde(default)]
    pub seed: u64,
    pub output: PathBuf,
}

impl Recipe {
    /// Creates a recipe with empty params.
    pub fn new(
        generator: &str,
        width: usize,
        height: usize,
        seed: u64,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            generator: generator.to_string(),
            width,
            height,
            params: empty_params(),
            seed,
            output: output.into(),
        }
    }

    /// Validates that the recipe has non-zero dimensions that do not overflow,
    /// and an object for `params`.
    pub fn validate(&self) -> Result<(), TextureError> {
        if self.width == 0 || self.height == 0 {
            return Err(TextureError::InvalidDimensions);
        }
        self.width
            .checked_mul(self.height)
            .ok_or(TextureError::InvalidDimensions)?;
        if !self.params.is_object() {
            return Err(TextureError::invalid_param(
                "params",
                "expected a JSON object",
            ));
        }
        Ok(())
    }
}
