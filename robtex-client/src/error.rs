//! Unified error type for Robtex API calls.

use thiserror::Error;

/// Error returned by every [`RobtexClient`](crate::RobtexClient) operation.
///
/// Failures are scoped to a single call; nothing is retried and the client
/// stays usable after any of these.
#[derive(Error, Debug)]
pub enum RobtexError {
    /// The HTTP exchange failed (DNS resolution, connection refused, TLS, timeout, ...).
    ///
    /// The underlying `reqwest` error is kept unchanged.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The caller cancelled the request before it completed.
    #[error("Request cancelled")]
    Cancelled,

    /// The service answered with a status other than `200 OK`.
    ///
    /// `body` is the full response text; no decoding was attempted.
    #[error("{status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// A `200 OK` body could not be decoded into the expected type.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The base URL is malformed or cannot carry path segments.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl RobtexError {
    /// Whether the request hit the client timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// HTTP status code for [`Status`](Self::Status) errors.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<url::ParseError> for RobtexError {
    fn from(e: url::ParseError) -> Self {
        Self::InvalidUrl(e.to_string())
    }
}

/// Convenience type alias for `Result<T, RobtexError>`.
pub type Result<T> = std::result::Result<T, RobtexError>;
