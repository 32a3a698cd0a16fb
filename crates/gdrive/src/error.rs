//! Error types for Drive operations.

use std::io;

/// Result type alias for Drive operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while authenticating or talking to the API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Client credential file is missing or malformed.
    #[error("credentials error: {0}")]
    Credentials(String),

    /// The user (or the provider) refused the consent step.
    #[error("authorization denied: {0}")]
    ConsentDenied(String),

    /// The redirect carried a state value we did not issue.
    #[error("OAuth state mismatch; aborting login")]
    StateMismatch,

    /// The loopback listener received something it cannot use.
    #[error("malformed OAuth redirect: {0}")]
    BadRedirect(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {message}")]
    Http {
        /// Error message.
        message: String,
        /// HTTP status code if available.
        status: Option<u16>,
    },

    /// Invalid response from the API.
    #[error("invalid API response: {0}")]
    InvalidResponse(String),

    /// IO error on the loopback listener.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create an HTTP error.
    pub fn http(message: impl Into<String>, status: Option<u16>) -> Self {
        Self::Http {
            message: message.into(),
            status,
        }
    }
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(code) => Self::Http {
                message: format!("HTTP {}", code),
                status: Some(code),
            },
            other => Self::Http {
                message: other.to_string(),
                status: None,
            },
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}
