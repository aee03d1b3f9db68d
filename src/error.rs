//! Error types for the G-layer classifier
//!
//! The classification and scoring core is total and never fails. These
//! errors only arise at the boundary: parsing tag or form-factor strings,
//! and loading hints files.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for the classifier boundary
#[derive(Error, Debug)]
pub enum Error {
    // =========================================================================
    // Input Errors
    // =========================================================================
    #[error("Unknown G-layer tag: {tag}")]
    UnknownGLayer { tag: String },

    #[error("Unknown form factor: {value}")]
    UnknownFormFactor { value: String },

    #[error("Unsupported hints file format: {}", path.display())]
    UnsupportedHintsFormat { path: PathBuf },

    // =========================================================================
    // Parse Errors
    // =========================================================================
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // =========================================================================
    // IO Errors
    // =========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if this error is a caller-contract violation (bad input)
    /// rather than an environment failure
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownGLayer { .. }
                | Error::UnknownFormFactor { .. }
                | Error::UnsupportedHintsFormat { .. }
                | Error::JsonParse(_)
                | Error::YamlParse(_)
        )
    }
}

/// Result type alias for the classifier
pub type Result<T> = std::result::Result<T, Error>;
