//! Two-dimensional RGBA image buffer.
//!
//! A `Raster` stores `width * height` [`Rgba`] pixels in row-major layout.
//! Generators build one pixel by pixel with [`Raster::from_fn`]; it is
//! immutable afterwards.

use crate::color::Rgba;
use crate::error::TextureError;

/// A 2D grid of RGBA pixels with non-zero dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    data: Vec<Rgba>,
}

/// Validates dimensions and returns the pixel count.
fn pixel_count(width: usize, height: usize) -> Result<usize, TextureError> {
    if width == 0 || height == 0 {
        return Err(TextureError::InvalidDimensions);
    }
    width
        .checked_mul(height)
        .ok_or(TextureError::InvalidDimensions)
}

impl Raster {
    /// Creates a raster by evaluating `f(x, y)` for every pixel in row-major order.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self, TextureError>
    where
        F: FnMut(usize, usize) -> Rgba,
    {
        let len = pixel_count(width, height)?;
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the row-major pixel data.
    pub fn pixels(&self) -> &[Rgba] {
        &self.data
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, TextureError> {
        if x >= self.width || y >= self.height {
            return Err(TextureError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    /// Returns the pixel at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<Rgba, TextureError> {
        self.index(x, y).map(|i| self.data[i])
    }

    /// True when every pixel has alpha 255.
    pub fn is_opaque(&self) -> bool {
        self.data.iter().all(|c| c.is_opaque())
    }

    /// Flattens the raster into an RGBA8 byte buffer of length `width * height * 4`.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.data.iter().flat_map(|c| c.to_array()).collect()
    }

    /// Iterates over all pixels as `(x, y, color)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Rgba)> + '_ {
        let w = self.width;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &c)| (i % w, i / w, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE: Rgba = Rgba::opaque(0, 0, 255);

    fn gradient(width: usize, height: usize) -> Raster {
        Raster::from_fn(width, height, |x, y| Rgba::opaque(x as u8, y as u8, 0)).unwrap()
    }

    #[test]
    fn from_fn_has_requested_dimensions() {
        let r = Raster::from_fn(3, 5, |_, _| BLUE).unwrap();
        assert_eq!(r.width(), 3);
        assert_eq!(r.height(), 5);
        assert_eq!(r.pixels().len(), 15);
        assert!(r.pixels().iter().all(|&c| c == BLUE));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            Raster::from_fn(0, 4, |_, _| BLUE),
            Err(TextureError::InvalidDimensions)
        ));
        assert!(Raster::from_fn(4, 0, |_, _| BLUE).is_err());
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        assert!(matches!(
            Raster::from_fn(usize::MAX, 2, |_, _| BLUE),
            Err(TextureError::InvalidDimensions)
        ));
    }

    #[test]
    fn from_fn_visits_row_major_coordinates() {
        let r = gradient(4, 2);
        assert_eq!(r.get(3, 1).unwrap(), Rgba::opaque(3, 1, 0));
        assert_eq!(r.pixels()[5], Rgba::opaque(1, 1, 0));
    }

    #[test]
    fn get_out_of_bounds_reports_coordinates() {
        let r = gradient(2, 2);
        assert!(matches!(
            r.get(2, 0),
            Err(TextureError::OutOfBounds {
                x: 2,
                y: 0,
                width: 2,
                height: 2,
            })
        ));
    }

    #[test]
    fn to_rgba8_has_four_bytes_per_pixel() {
        let r = Raster::from_fn(8, 4, |_, _| Rgba::RED).unwrap();
        let bytes = r.to_rgba8();
        assert_eq!(bytes.len(), 8 * 4 * 4);
        assert_eq!(&bytes[..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn is_opaque_detects_translucent_pixel() {
        assert!(gradient(2, 2).is_opaque());
        let translucent = Rgba {
            r: 0,
            g: 0,
            b: 0,
            a: 10,
        };
        let r = Raster::from_fn(2, 2, |x, y| match (x, y) {
            (1, 1) => translucent,
            _ => BLUE,
        })
        .unwrap();
        assert!(!r.is_opaque());
    }

    #[test]
    fn iter_yields_coordinates() {
        let r = gradient(3, 2);
        for (x, y, c) in r.iter() {
            assert_eq!((c.r as usize, c.g as usize), (x, y));
        }
        assert_eq!(r.iter().count(), 6);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn iter_and_get_agree(w in 1_usize..16, h in 1_usize..16) {
                let r = gradient(w, h);
                for (x, y, c) in r.iter() {
                    prop_assert_eq!(r.get(x, y).unwrap(), c);
                }
                prop_assert_eq!(r.to_rgba8().len(), w * h * 4);
            }
        }
    }
}
