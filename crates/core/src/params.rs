//! Helpers for extracting typed parameters from a `serde_json::Value` object.
//!
//! Scalar helpers are lenient: a missing key or a value of the wrong JSON
//! type yields the default. Generators validate the extracted values
//! themselves and report `TextureError::InvalidParam` for unusable ones.

use crate::color::Rgba;
use crate::error::TextureError;
use serde_json::Value;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or wrong type.
///
/// Accepts both JSON numbers (including integers) and converts them to f64.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `usize` from `params[name]`, returning `default` if missing or wrong type.
///
/// Only succeeds if the JSON value is a non-negative integer.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or(default)
}

/// Extracts exactly `N` hex colors from the array at `params[name]`.
///
/// A missing key yields `default`. Unlike the scalar helpers, a present but
/// malformed value is an error: a palette with a typo should not silently
/// fall back to the stock colors.
pub fn param_colors<const N: usize>(
    params: &Value,
    name: &str,
    default: [Rgba; N],
) -> Result<[Rgba; N], TextureError> {
    let Some(value) = params.get(name) else {
        return Ok(default);
    };
    let items = value
        .as_array()
        .ok_or_else(|| TextureError::invalid_param(name, "expected an array of hex colors"))?;
    if items.len() != N {
        return Err(TextureError::invalid_param(
            name,
            format!("expected {N} colors, got {}", items.len()),
        ));
    }
    let mut out = default;
    for (slot, item) in out.iter_mut().zip(items) {
        let hex = item
            .as_str()
            .ok_or_else(|| TextureError::invalid_param(name, "colors must be hex strings"))?;
        *slot = Rgba::from_hex(hex)?;
    }
    Ok(out)
}
