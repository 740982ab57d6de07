#![deny(unsafe_code)]
//! Core types and traits for texgen, the offline texture generator.
//!
//! Provides the `Generator` trait, the `Raster` RGBA image buffer, the `Rgba`
//! color type, the `Xorshift64` PRNG, the reproducible `Recipe`, and
//! parameter helpers shared by every generator crate.

pub mod color;
pub mod error;
pub mod generator;
pub mod params;
pub mod prng;
pub mod raster;
pub mod recipe;

pub use color::Rgba;
pub use error::TextureError;
pub use generator::Generator;
pub use prng::Xorshift64;
pub use raster::Raster;
pub use recipe::Recipe;
