//! Unified error handling for the Lumen client core.
//!
//! - **Error categories**: high-level classification for handling decisions
//! - **Domain errors**: [`NetworkError`] for transport-level failures
//! - **Unified type**: [`LumenError`] consolidates everything
//! - **Result alias**: [`LumenResult<T>`] for consistent return types
//!
//! Dispatch and confirmation failures are not surfaced through these types
//! at the session boundary: per the propagation policy they become inline
//! `is_error` transcript messages instead. Navigation and pagination
//! failures return a [`LumenResult`] and leave state untouched.

mod category;
mod lumen_error;
mod network;

pub use category::ErrorCategory;
pub use lumen_error::LumenError;
pub use network::{classify_http_error, NetworkError};

/// Result alias used across the crate.
pub type LumenResult<T> = Result<T, LumenError>;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_error_unification() {
        let net: LumenError =
            NetworkError::Timeout { operation: "load conversation".to_string() }.into();
        let decode: LumenError =
            serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        let rejected = LumenError::Rejected { reason: "nope".to_string() };

        assert_eq!(net.category(), ErrorCategory::Network);
        assert_eq!(decode.category(), ErrorCategory::Client);
        assert_eq!(rejected.category(), ErrorCategory::Server);

        for err in [&net, &decode, &rejected] {
            assert!(!err.error_code().is_empty());
            assert!(!err.user_message().is_empty());
        }
    }

    #[test]
    fn test_retry_logic() {
        let retryable: LumenError = NetworkError::ConnectionFailed {
            url: "send message".to_string(),
            message: "refused".to_string(),
        }
        .into();
        assert!(retryable.is_retryable());

        let permanent: LumenError = NetworkError::HttpStatus {
            status: 403,
            message: "forbidden".to_string(),
        }
        .into();
        assert!(!permanent.is_retryable());
    }
}
