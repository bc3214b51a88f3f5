//! Error types for jobforsa.
//!
//! Gateway failures never escape the store: effect handlers flatten them to
//! their `Display` string and hand that to the owning slice.

use thiserror::Error;

/// Failures raised by the API gateways.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request never produced a response (connect error, timeout, ...).
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Http failure response for {url}: {status}")]
    Status { url: String, status: u16 },

    #[error("Invalid response payload: {0}")]
    Decode(String),

    /// No stored user matches the submitted email/password pair.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GatewayError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            GatewayError::Status {
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
                status: status.as_u16(),
            }
        } else {
            GatewayError::Transport(err.to_string())
        }
    }
}

/// Failures of the local session storage.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt storage file: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// A form rule that blocked a dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{0} is not a valid email address")]
    InvalidEmail(String),

    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid URL in {field}: {value}")]
    InvalidUrl { field: &'static str, value: String },

    #[error("Failed to write config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
