//! Error types for texgen.

use thiserror::Error;

/// Errors produced while configuring or rendering a texture.
#[derive(Debug, Error)]
pub enum TextureError {
    /// Width or height was zero, or `width * height` overflowed.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A parameter was present but semantically unusable.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParam { name: String, reason: String },

    /// No generator is registered under this name.
    #[error("unknown generator: {0}")]
    UnknownGenerator(String),

    /// An (x, y) coordinate was outside the raster bounds.
    #[error("index ({x}, {y}) out of bounds for raster of size ({width}, {height})")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A manifest could not be parsed, or one of its recipes is unusable.
    #[error("invalid manifest: {0}")]
    InvalidManifest(String),

    /// Reading or writing an image or manifest failed.
    #[error("i/o error: {0}")]
    Io(String),
}

impl TextureError {
    /// Shorthand for building a [`TextureError::InvalidParam`].
    pub fn invalid_param(name: &str, reason: impl Into<String>) -> Self {
        TextureError::InvalidParam {
            name: name.to_owned(),
            reason: reason.into(),
        }
    }
}
