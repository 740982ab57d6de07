//! 8-bit RGBA color and barycentric blending.
//!
//! Textures are written as RGBA8 PNGs, so colors are stored exactly as they
//! land in the file. Blending happens in `f64` and truncates back to `u8`.

use crate::error::TextureError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An 8-bit-per-channel RGBA color.
///
/// Serializes as a hex string: `"#rrggbb"` when fully opaque, `"#rrggbbaa"`
/// otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    pub const RED: Rgba = Rgba::opaque(255, 0, 0);

    /// Creates a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Returns the channels as `[r, g, b, a]`.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Parses `"#rrggbb"` or `"#rrggbbaa"` (leading `#` optional, case insensitive).
    ///
    /// Returns `TextureError::InvalidColor` for any other shape.
    pub fn from_hex(hex: &str) -> Result<Rgba, TextureError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 && digits.len() != 8 {
            return Err(TextureError::InvalidColor(format!(
                "expected 6 or 8 hex digits in '{hex}', got {}",
                digits.len()
            )));
        }
        let channel = |range: std::ops::Range<usize>, name: &str| {
            digits
                .get(range)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .ok_or_else(|| {
                    TextureError::InvalidColor(format!("invalid {name} component in '{hex}'"))
                })
        };
        let r = channel(0..2, "red")?;
        let g = channel(2..4, "green")?;
        let b = channel(4..6, "blue")?;
        let a = if digits.len() == 8 {
            channel(6..8, "alpha")?
        } else {
            255
        };
        Ok(Rgba { r, g, b, a })
    }

    /// Formats the color as `"#rrggbb"`, or `"#rrggbbaa"` when not opaque.
    pub fn to_hex(self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgba::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Blends three reference colors with barycentric weights `(u, v, w)`.
///
/// Each RGB channel is `u*c0 + v*c1 + w*c2` truncated toward zero and clamped
/// to [0, 255]. The result is always fully opaque. Callers are expected to
/// pass weights that sum to one.
pub fn barycentric(weights: [f64; 3], colors: &[Rgba; 3]) -> Rgba {
    let [u, v, w] = weights;
    let mix = |pick: fn(Rgba) -> u8| {
        let value = u * f64::from(pick(colors[0]))
            + v * f64::from(pick(colors[1]))
            + w * f64::from(pick(colors[2]));
        value.clamp(0.0, 255.0) as u8
    };
    Rgba::opaque(mix(|c| c.r), mix(|c| c.g), mix(|c| c.b))
}
