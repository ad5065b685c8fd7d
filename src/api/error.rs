//! Error types for backend API requests.

use thiserror::Error;

/// Errors that can occur while fetching a snapshot from the backend.
///
/// Every variant is handled the same way by the syncer and the poller: the
/// error is logged and the previously applied state is kept.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// Request timeout
    #[error("request timeout after {0}s")]
    Timeout(u64),

    /// Connection failed
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Non-2xx response
    #[error("HTTP error: {0}")]
    HttpError(u16),

    /// Body was not valid JSON or did not match the expected shape
    #[error("invalid response: {0}")]
    ParseError(String),
}

impl ApiError {
    /// Short label used for log fields and metric labels.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Timeout(_) | ApiError::ConnectionFailed(_) => "transport",
            ApiError::HttpError(_) => "response",
            ApiError::ParseError(_) => "payload",
        }
    }
}
