//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Request timeout {request}s is shorter than one generation attempt plus the backend fetch ({required}s)")]
    RequestTimeoutTooShort { request: u64, required: u64 },

    #[error("Invalid {0} timeout")]
    InvalidUpstreamTimeout(&'static str),

    #[error("Gemini max_retries exceeds maximum allowed (5)")]
    TooManyRetries,

    #[error("Invalid {0} URL: must be http or https")]
    InvalidUrl(&'static str),

    #[error("Invalid API key header name: {0}")]
    InvalidHeaderName(String),
}
