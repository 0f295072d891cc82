//! Error types for the Copilot dashboard backend

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A request body that could not be decoded
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

/// GitHub API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// GitHub answered with a non-2xx status
    #[error("GitHub API returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// The OAuth endpoint answered 200 with an error object in the body
    #[error("OAuth error: {0}")]
    OAuth(serde_json::Value),

    #[error("GitHub OAuth client id and secret are not configured")]
    MissingCredentials,
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to GitHub".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("No GitHub token provided. Pass --token or set GITHUB_TOKEN.")]
    MissingToken,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
