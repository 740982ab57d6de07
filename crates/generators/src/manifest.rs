//! The list of textures to (re)generate.
//!
//! The built-in manifest describes the two textures the game ships. A JSON
//! manifest file with the same shape can replace it:
//!
//! ```json
//! { "assets": [ { "generator": "ground-tile", "width": 64, "height": 64,
//!                 "seed": 7, "output": "textures/army64.png" } ] }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use texgen_core::error::TextureError;
use texgen_core::Recipe;

use crate::snapshot::render_recipe;
use crate::{GeneratorKind, DEATH_RAY, GROUND_TILE};

/// Output path of the death-ray texture, relative to the asset root.
pub const DEATH_RAY_OUTPUT: &str = "data/images/tank/deathray.png";
/// Output path of the ground tile texture, relative to the asset root.
pub const GROUND_TILE_OUTPUT: &str = "data/images/textures/army.png";

/// An ordered list of recipes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Manifest {
    pub assets: Vec<Recipe>,
}

impl Manifest {
    /// The textures the game ships, at their fixed paths.
    pub fn builtin() -> Self {
        Self {
            assets: vec![
                Recipe::new(
                    DEATH_RAY,
                    texgen_beam::DEFAULT_WIDTH,
                    texgen_beam::DEFAULT_HEIGHT,
                    0,
                    DEATH_RAY_OUTPUT,
                ),
                Recipe::new(
                    GROUND_TILE,
                    texgen_tile::DEFAULT_SIZE,
                    texgen_tile::DEFAULT_SIZE,
                    texgen_tile::DEFAULT_SEED,
                    GROUND_TILE_OUTPUT,
                ),
            ],
        }
    }

    /// Parses a manifest from JSON and validates every recipe.
    pub fn from_json_str(json: &str) -> Result<Self, TextureError> {
        let manifest: Manifest = serde_json::from_str(json)
            .map_err(|e| TextureError::InvalidManifest(e.to_string()))?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Reads and parses a JSON manifest file.
    pub fn load(path: &Path) -> Result<Self, TextureError> {
        let json = fs::read_to_string(path)
            .map_err(|e| TextureError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }

    /// Checks that every recipe names a known generator with usable
    /// dimensions and params.
    ///
    /// Failures are reported as `TextureError::InvalidManifest` naming the
    /// offending asset.
    pub fn validate(&self) -> Result<(), TextureError> {
        for (i, recipe) in self.assets.iter().enumerate() {
            GeneratorKind::from_recipe(recipe).map_err(|e| {
                TextureError::InvalidManifest(format!(
                    "asset {i} ({}): {e}",
                    recipe.output.display()
                ))
            })?;
        }
        Ok(())
    }

    /// Renders every recipe under `root`, in order, stopping at the first error.
    ///
    /// Returns the paths written.
    pub fn build(&self, root: &Path) -> Result<Vec<PathBuf>, TextureError> {
        tracing::debug!(count = self.assets.len(), root = %root.display(), "building manifest");
        self.assets
            .iter()
            .map(|recipe| render_recipe(recipe, root))
            .collect()
    }
}
