//! Error types for the terminal bridge integration.

use inbox_trader_core::PlatformError;
use thiserror::Error;

/// Errors that can occur when talking to the terminal bridge.
#[derive(Debug, Error)]
pub enum Mt5Error {
    /// The terminal refused the account login.
    #[error("authentication error: {0}")]
    Authentication(String),

    /// Bridge request failed with an HTTP error status.
    #[error("bridge error: {status_code} - {message}")]
    Api {
        /// HTTP status code.
        status_code: u16,
        /// Error message from the bridge.
        message: String,
    },

    /// Network error.
    #[error("network error: {0}")]
    Network(String),

    /// Request timeout.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl Mt5Error {
    /// Creates an API error from status code and message.
    pub fn api(status_code: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status_code,
            message: message.into(),
        }
    }

    /// Returns true if the error indicates the request may succeed later.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout(_) => true,
            Self::Api { status_code, .. } => *status_code >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for Mt5Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::Network(format!("connection failed: {err}"))
        } else if err.is_decode() {
            Self::Serialization(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Mt5Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<Mt5Error> for PlatformError {
    fn from(err: Mt5Error) -> Self {
        match err {
            Mt5Error::Authentication(msg) => Self::Auth(msg),
            Mt5Error::Network(msg) | Mt5Error::Timeout(msg) => Self::Connection(msg),
            Mt5Error::Api {
                status_code,
                message,
            } => Self::InvalidResponse(format!("{status_code}: {message}")),
            Mt5Error::Serialization(msg) => Self::InvalidResponse(msg),
        }
    }
}

/// Result type alias for bridge operations.
pub type Result<T> = std::result::Result<T, Mt5Error>;
