//! Error types for YAML parsing.

use notch_core::ConfigError;
use thiserror::Error;

/// Error type for manifest parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// A slider entry failed configuration validation
    #[error("Invalid slider '{id}': {source}")]
    Config {
        /// Slider id
        id: String,
        /// Underlying validation failure
        #[source]
        source: ConfigError,
    },

    /// Two slider entries share an id
    #[error("Duplicate slider id: {0}")]
    DuplicateId(String),

    /// Missing required field
    #[error("Missing required field: {0}")]
    MissingField(String),
}
