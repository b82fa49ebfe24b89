//! Error types for breaking-config.
//!
//! Uses thiserror for derive macros. Adapters between representations are
//! total; only decoding textual input and encoding output can fail.

use thiserror::Error;

/// Main error type for configuration conversions.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The textual input does not have the expected shape (e.g. `ignore_only`
    /// is not a mapping, or a field is unknown for the detected version).
    #[error("{0}")]
    Schema(String),

    /// The document declares a version this crate cannot dispatch.
    #[error("invalid \"version: {0}\" set, expected one of: v1beta1, v1")]
    UnsupportedVersion(String),

    /// The YAML text could not be parsed.
    #[error("failed to parse config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Encoding to JSON failed.
    #[error("failed to encode config: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ConfigError {
    /// Returns true for errors caused by malformed static input.
    pub fn is_schema(&self) -> bool {
        matches!(self, ConfigError::Schema(_) | ConfigError::Yaml(_))
    }
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
