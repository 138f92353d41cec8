//! Error types for scholarhub-core

use scholarhub_domain::ValidationError;
use thiserror::Error;

use crate::http::HttpError;

/// Result type alias for scholarhub operations
pub type Result<T> = std::result::Result<T, ScholarError>;

/// Main error type surfaced to the presentation layer
#[derive(Error, Debug)]
pub enum ScholarError {
    /// Input rejected before any request was attempted
    #[error("Validation failed: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// Backend call failed
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Session persistence failed
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Configuration could not be loaded or is invalid
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl ScholarError {
    /// Build a validation error for a single field
    pub fn invalid(field: &str, message: &str) -> Self {
        ScholarError::Validation(vec![ValidationError::error(field, message)])
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Failures of remote calls to the backend
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Invalid credentials. Please try again.")]
    InvalidCredentials,

    #[error("Could not register user. Please try again.")]
    Registration,

    /// Non-2xx response; `message` comes from the JSON error body when present
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        BackendError::Decode(err.to_string())
    }
}

/// Session file errors
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt session file: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No session directory available on this platform")]
    NoDataDir,
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Value is out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
