//! Network-related error types.
//!
//! Errors produced while talking to the assistant backend: connection
//! problems, timeouts, and non-2xx HTTP responses.

use thiserror::Error;

use crate::traits::HttpError;

/// Network-specific error variants.
#[derive(Debug, Clone, Error)]
pub enum NetworkError {
    /// Connection to the server failed.
    #[error("connection failed for {url}: {message}")]
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    #[error("request timed out during {operation}")]
    Timeout { operation: String },

    /// HTTP status error (non-2xx response).
    #[error("server returned HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// Response body was not what the endpoint promised.
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },

    /// Generic network error.
    #[error("network error: {message}")]
    Other { message: String },
}

impl NetworkError {
    /// Check if this error is likely transient and worth retrying.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionFailed { .. } => true,
            NetworkError::Timeout { .. } => true,
            NetworkError::HttpStatus { status, .. } => {
                *status >= 500 || *status == 429 || *status == 408
            }
            NetworkError::InvalidResponse { .. } => false,
            NetworkError::Other { .. } => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Unable to connect to the assistant. Please check your internet connection."
                    .to_string()
            }
            NetworkError::Timeout { operation } => {
                format!(
                    "The {} request timed out. The service may be slow or unreachable.",
                    operation
                )
            }
            NetworkError::HttpStatus { status, .. } => match *status {
                400 => "The request was invalid. Please try again.".to_string(),
                401 => "Authentication required. Please sign in again.".to_string(),
                403 => "Access denied. You may need to upgrade your subscription.".to_string(),
                404 => "The assistant service was not found. Please try again later.".to_string(),
                429 => "Too many requests. Please wait a moment and try again.".to_string(),
                500..=599 => {
                    "The assistant is temporarily unavailable. Please try again.".to_string()
                }
                _ => format!("The server returned an error (HTTP {}). Please try again.", status),
            },
            NetworkError::InvalidResponse { .. } => {
                "Received an unexpected response from the assistant. Please try again.".to_string()
            }
            NetworkError::Other { message } => format!("Network error: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::InvalidResponse { .. } => "E_NET_INVALID",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

/// Classify a transport-level [`HttpError`] into a [`NetworkError`].
///
/// The `operation` is a short human-readable label ("send message",
/// "load older messages") used in timeout messages and logs.
pub fn classify_http_error(operation: &str, err: HttpError) -> NetworkError {
    match err {
        HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed {
            url: operation.to_string(),
            message,
        },
        HttpError::Timeout(_) => NetworkError::Timeout {
            operation: operation.to_string(),
        },
        HttpError::ServerError { status, message } => NetworkError::HttpStatus { status, message },
        HttpError::InvalidUrl(message) => NetworkError::Other { message },
        HttpError::Other(message) => NetworkError::Other { message },
    }
}
