//! Error types for sitekit
//!
//! Provides structured error types for validation input handling, HTTP
//! transport, and serialization.

use thiserror::Error;

/// Main error type for sitekit operations
#[derive(Error, Debug)]
pub enum SiteError {
    /// Invalid input data or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// File access or I/O error
    #[error("File error: {0}")]
    FileError(String),

    /// Submission or payload parsing error
    #[error("Parse error: {0}")]
    ParseError(String),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Backend responded with a non-success status
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Metrics registration or encoding error
    #[error("Metrics error: {0}")]
    MetricsError(#[from] prometheus::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl SiteError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        SiteError::InvalidInput(msg.into())
    }

    /// Create a file error
    pub fn file_error(msg: impl Into<String>) -> Self {
        SiteError::FileError(msg.into())
    }

    /// Create a parse error
    pub fn parse_error(msg: impl Into<String>) -> Self {
        SiteError::ParseError(msg.into())
    }

    /// Create a configuration error
    pub fn config_error(msg: impl Into<String>) -> Self {
        SiteError::ConfigError(msg.into())
    }

    /// Create an API error from a status code and response body
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        SiteError::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this is a user-facing error (vs internal)
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            SiteError::InvalidInput(_)
                | SiteError::FileError(_)
                | SiteError::ParseError(_)
                | SiteError::ConfigError(_)
        )
    }
}

impl From<std::io::Error> for SiteError {
    fn from(err: std::io::Error) -> Self {
        SiteError::FileError(err.to_string())
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        SiteError::ParseError(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for SiteError {
    fn from(err: serde_yaml::Error) -> Self {
        SiteError::ParseError(format!("YAML error: {}", err))
    }
}

impl From<reqwest::Error> for SiteError {
    fn from(err: reqwest::Error) -> Self {
        SiteError::HttpError(err.to_string())
    }
}

/// Result type alias for sitekit operations
pub type Result<T> = std::result::Result<T, SiteError>;
