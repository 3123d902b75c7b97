//! Error types for configuration loading and validation.

/// Errors that can occur when loading or validating a co-simulation
/// configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the configuration file.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The JSON content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// A required field is missing or empty.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// An interface appears in only one of the two per-interface maps.
    #[error("interface '{name}' has a data file but no array size, or vice versa")]
    UnmatchedInterface {
        /// The interface name present in one map but not the other.
        name: String,
    },

    /// A scalar argument value is not a valid decimal or hex literal.
    #[error("argument '{name}' has invalid scalar value '{value}'")]
    BadScalar {
        /// The argument name.
        name: String,
        /// The offending value text.
        value: String,
    },
}
