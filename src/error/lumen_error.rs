//! Unified error type for the Lumen client core.

use thiserror::Error;

use super::category::ErrorCategory;
use super::network::NetworkError;

/// Unified error type for the Lumen client core.
///
/// Consolidates the domain-specific error types so callers can handle any
/// failure through one enum, with uniform categorization, retry hints, and
/// user-facing messages.
#[derive(Debug, Error)]
pub enum LumenError {
    /// Network-related errors (connections, HTTP statuses, timeouts).
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// The server answered 2xx but the payload did not decode.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server answered 2xx but reported `success: false`.
    #[error("request rejected by server: {reason}")]
    Rejected { reason: String },
}

impl LumenError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            LumenError::Network(_) => ErrorCategory::Network,
            LumenError::Decode(_) => ErrorCategory::Client,
            LumenError::Rejected { .. } => ErrorCategory::Server,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            LumenError::Network(err) => err.is_retryable(),
            LumenError::Decode(_) => false,
            LumenError::Rejected { .. } => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            LumenError::Network(err) => err.user_message(),
            LumenError::Decode(_) => {
                "Received an unexpected response from the assistant. Please try again.".to_string()
            }
            LumenError::Rejected { reason } => reason.clone(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            LumenError::Network(err) => err.error_code(),
            LumenError::Decode(_) => "E_DECODE",
            LumenError::Rejected { .. } => "E_REJECTED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_conversion() {
        let err: LumenError =
            NetworkError::Timeout { operation: "send message".to_string() }.into();
        assert_eq!(err.category(), ErrorCategory::Network);
        assert!(err.is_retryable());
        assert_eq!(err.error_code(), "E_NET_TIMEOUT");
    }

    #[test]
    fn test_decode_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: LumenError = json_err.into();
        assert_eq!(err.category(), ErrorCategory::Client);
        assert!(!err.is_retryable());
        assert!(err.user_message().contains("unexpected response"));
    }

    #[test]
    fn test_rejected_keeps_server_reason() {
        let err = LumenError::Rejected { reason: "conversation not found".to_string() };
        assert_eq!(err.category(), ErrorCategory::Server);
        assert_eq!(err.user_message(), "conversation not found");
    }

    #[test]
    fn test_display() {
        let err: LumenError = NetworkError::HttpStatus {
            status: 503,
            message: "down".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "server returned HTTP 503: down");
    }
}
