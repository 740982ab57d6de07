#![deny(unsafe_code)]
//! Generator registry: maps generator names to implementations, plus the
//! asset manifest and PNG snapshot writing.
//!
//! This crate sits between `texgen-core` (which defines the `Generator` trait)
//! and the individual generator crates (`texgen-beam`, `texgen-tile`). The CLI
//! depends only on this crate for dispatch.

pub mod manifest;
pub mod snapshot;

use serde_json::Value;
use texgen_beam::DeathRay;
use texgen_core::error::TextureError;
use texgen_core::{Generator, Raster, Recipe};
use texgen_tile::GroundTile;

pub use manifest::Manifest;

/// Name of the death-ray beam generator.
pub const DEATH_RAY: &str = "death-ray";
/// Name of the Voronoi ground tile generator.
pub const GROUND_TILE: &str = "ground-tile";

/// All available generator names.
const GENERATOR_NAMES: &[&str] = &[DEATH_RAY, GROUND_TILE];

/// Enumeration of all available texture generators.
///
/// Wraps each generator implementation and delegates `Generator` trait
/// methods. Use [`GeneratorKind::from_name`] for string-based construction.
#[derive(Debug, Clone)]
pub enum GeneratorKind {
    /// Striped death-ray beam.
    DeathRay(DeathRay),
    /// Seamless Voronoi ground tile.
    GroundTile(GroundTile),
}

impl GeneratorKind {
    /// Constructs a generator by name.
    ///
    /// Returns `TextureError::UnknownGenerator` if the name is not recognized.
    pub fn from_name(
        name: &str,
        width: usize,
        height: usize,
        seed: u64,
        params: &Value,
    ) -> Result<Self, TextureError> {
        match name {
            DEATH_RAY => Ok(GeneratorKind::DeathRay(DeathRay::from_json(
                width, height, seed, params,
            )?)),
            GROUND_TILE => Ok(GeneratorKind::GroundTile(GroundTile::from_json(
                width, height, seed, params,
            )?)),
            _ => Err(TextureError::UnknownGenerator(name.to_string())),
        }
    }

    /// Constructs the generator a recipe names, after validating the recipe.
    pub fn from_recipe(recipe: &Recipe) -> Result<Self, TextureError> {
        recipe.validate()?;
        Self::from_name(
            &recipe.generator,
            recipe.width,
            recipe.height,
            recipe.seed,
            &recipe.params,
        )
    }

    /// Returns a slice of all recognized generator names.
    pub fn list_generators() -> &'static [&'static str] {
        GENERATOR_NAMES
    }

    /// The size a generator renders at when none is given.
    pub fn default_size(name: &str) -> Option<(usize, usize)> {
        match name {
            DEATH_RAY => Some((texgen_beam::DEFAULT_WIDTH, texgen_beam::DEFAULT_HEIGHT)),
            GROUND_TILE => Some((texgen_tile::DEFAULT_SIZE, texgen_tile::DEFAULT_SIZE)),
            _ => None,
        }
    }
}

impl Generator for GeneratorKind {
    fn render(&self) -> Result<Raster, TextureError> {
        match self {
            GeneratorKind::DeathRay(g) => g.render(),
            GeneratorKind::GroundTile(g) => g.render(),
        }
    }

    fn width(&self) -> usize {
        match self {
            GeneratorKind::DeathRay(g) => g.width(),
            GeneratorKind::GroundTile(g) => g.width(),
        }
    }

    fn height(&self) -> usize {
        match self {
            GeneratorKind::DeathRay(g) => g.height(),
            GeneratorKind::GroundTile(g) => g.height(),
        }
    }

    fn params(&self) -> Value {
        match self {
            GeneratorKind::DeathRay(g) => g.params(),
            GeneratorKind::GroundTile(g) => g.params(),
        }
    }

    fn param_schema(&self) -> Value {
        match self {
            GeneratorKind::DeathRay(g) => g.param_schema(),
            GeneratorKind::GroundTile(g) => g.param_schema(),
        }
    }
}
