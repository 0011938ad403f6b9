//! Custom error types for relcheck with improved type safety and error handling.

use thiserror::Error;

/// Main error type for relcheck operations.
#[derive(Error, Debug)]
pub enum RelcheckError {
    // Cli args errors
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),

    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    // Version/parsing errors - automatic conversions via #[from]
    #[error("Invalid version format: {0}")]
    InvalidVersion(#[from] semver::Error),

    #[error("Git URL parse error: {0}")]
    GitUrlError(#[from] git_url_parse::GitUrlParseError),

    // TOML parsing errors
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    // JSON parsing errors
    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    // Additional parsing errors
    #[error("Regular expression error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    // Generic wrapper for other errors
    #[error(transparent)]
    Other(#[from] color_eyre::Report),
}

/// Result type alias using RelcheckError
pub type Result<T> = std::result::Result<T, RelcheckError>;

impl RelcheckError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound(path.into())
    }

    /// Create an unsupported format error
    pub fn unsupported_format(msg: impl Into<String>) -> Self {
        Self::UnsupportedFormat(msg.into())
    }
}

// Implement From for std::io::Error - wraps in Other variant for generic I/O errors
impl From<std::io::Error> for RelcheckError {
    fn from(err: std::io::Error) -> Self {
        Self::Other(color_eyre::Report::from(err))
    }
}

// Implement From for the resolver builder error from derive_builder
impl From<crate::config::resolver::ConfigResolverBuilderError>
    for RelcheckError
{
    fn from(err: crate::config::resolver::ConfigResolverBuilderError) -> Self {
        Self::Other(color_eyre::Report::msg(format!("Builder error: {}", err)))
    }
}
