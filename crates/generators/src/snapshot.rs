//! PNG output of a rendered [`Raster`].

use std::fs;
use std::path::{Path, PathBuf};

use texgen_core::error::TextureError;
use texgen_core::{Generator, Raster, Recipe};

use crate::GeneratorKind;

/// Writes a raster as an RGBA8 PNG, regardless of the path's extension.
///
/// Returns `TextureError::InvalidDimensions` if the raster dimensions overflow
/// `u32`, or `TextureError::Io` on write failure.
pub fn write_png(raster: &Raster, path: &Path) -> Result<(), TextureError> {
    let w = u32::try_from(raster.width()).map_err(|_| TextureError::InvalidDimensions)?;
    let h = u32::try_from(raster.height()).map_err(|_| TextureError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, raster.to_rgba8())
        .ok_or_else(|| TextureError::Io("RGBA buffer size mismatch".into()))?;
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| TextureError::Io(format!("{}: {e}", path.display())))
}

/// Renders a recipe and writes it to `root.join(recipe.output)`.
///
/// Missing parent directories are created. Returns the path written.
pub fn render_recipe(recipe: &Recipe, root: &Path) -> Result<PathBuf, TextureError> {
    let generator = GeneratorKind::from_recipe(recipe)?;
    let raster = generator.render()?;

    let path = root.join(&recipe.output);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| TextureError::Io(format!("{}: {e}", parent.display())))?;
    }
    write_png(&raster, &path)?;

    tracing::info!(
        generator = %recipe.generator,
        width = recipe.width,
        height = recipe.height,
        seed = recipe.seed,
        path = %path.display(),
        "wrote texture"
    );
    Ok(path)
}
