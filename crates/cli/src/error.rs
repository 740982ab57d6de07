//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: generator error (unknown generator, raster access failure)
//! - 11: I/O error (PNG write, manifest read)
//! - 12: input error (bad --params JSON, dimensions, params, colors, manifest)
//! - 13: serialization error

use std::fmt;
use texgen_core::TextureError;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A generator-level error.
    Generator(TextureError),
    /// An I/O error.
    Io(String),
    /// A user input error.
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Generator(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Generator(e) => write!(f, "{e}"),
            CliError::Io(msg) | CliError::Input(msg) | CliError::Serialization(msg) => {
                write!(f, "{msg}")
            }
        }
    }
}

impl From<TextureError> for CliError {
    fn from(e: TextureError) -> Self {
        match e {
            TextureError::Io(msg) => CliError::Io(msg),
            TextureError::InvalidDimensions
            | TextureError::InvalidParam { .. }
            | TextureError::InvalidColor(_)
            | TextureError::InvalidManifest(_) => CliError::Input(e.to_string()),
            TextureError::UnknownGenerator(_) | TextureError::OutOfBounds { .. } => {
                CliError::Generator(e)
            }
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_error_exit_code_is_10() {
        let err = CliError::Generator(TextureError::UnknownGenerator("foo".into()));
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn io_error_exit_code_is_11() {
        assert_eq!(CliError::Io("write failed".into()).exit_code(), 11);
    }

    #[test]
    fn input_error_exit_code_is_12() {
        assert_eq!(CliError::Input("bad params".into()).exit_code(), 12);
    }

    #[test]
    fn serialization_error_exit_code_is_13() {
        assert_eq!(CliError::Serialization("json fail".into()).exit_code(), 13);
    }

    #[test]
    fn from_texture_error_io_routes_to_cli_io() {
        let cli_err = CliError::from(TextureError::Io("disk full".into()));
        assert_eq!(cli_err.exit_code(), 11);
        assert!(cli_err.to_string().contains("disk full"));
    }

    #[test]
    fn from_manifest_error_routes_to_input() {
        let cli_err = CliError::from(TextureError::InvalidManifest("expected value".into()));
        assert_eq!(cli_err.exit_code(), 12);
        assert!(cli_err.to_string().contains("expected value"));
    }

    #[test]
    fn from_bad_params_routes_to_input() {
        let errors = [
            TextureError::invalid_param("period", "must be at least 2"),
            TextureError::invalid_param("anchors", "must be at least 1"),
            TextureError::InvalidColor("invalid red component".into()),
            TextureError::InvalidDimensions,
        ];
        for err in errors {
            let msg = err.to_string();
            let cli_err = CliError::from(err);
            assert_eq!(cli_err.exit_code(), 12, "wrong exit code for: {msg}");
            assert_eq!(cli_err.to_string(), msg);
        }
    }

    #[test]
    fn from_other_texture_error_routes_to_generator() {
        let cli_err = CliError::from(TextureError::UnknownGenerator("xyz".into()));
        assert_eq!(cli_err.exit_code(), 10);
        assert!(cli_err.to_string().contains("xyz"));
    }

    #[test]
    fn from_serde_json_error_routes_to_serialization() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let cli_err = CliError::from(bad_json.unwrap_err());
        assert_eq!(cli_err.exit_code(), 13);
    }
}
