//! Client error types

use http::StatusCode;
use thiserror::Error;

/// Client error type
///
/// Upstream failures normalize into exactly one of these; callers decide
/// how far to propagate.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The upstream responded with a non-2xx status
    #[error("API error {status}: {body}")]
    Api { status: StatusCode, body: String },

    /// No response arrived (connection, timeout)
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The request could not be constructed or sent
    #[error("request error: {0}")]
    Request(String),

    /// A requested sub-entity is missing from an otherwise successful response
    #[error("not found: {0}")]
    NotFound(String),

    /// The response body did not match the expected shape
    #[error("invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Normalize a transport-level `reqwest` failure.
    ///
    /// Construction problems become [`ClientError::Request`]; everything
    /// else means no usable response arrived and becomes
    /// [`ClientError::Network`].
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_builder() {
            ClientError::Request(err.to_string())
        } else {
            ClientError::Network(err)
        }
    }

    /// Upstream HTTP status, when this error carries one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// What a call does when the upstream fails.
///
/// `Propagate` surfaces the error to the caller. `FailClosed` resolves to
/// the conservative value instead; the slot verification uses it so an
/// uncertain upstream never reads as "available".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    #[default]
    Propagate,
    FailClosed,
}
