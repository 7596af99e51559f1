//! Directory error types

use thiserror::Error;

/// Errors that can occur while fetching the hospital directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Connection to the directory service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Directory responded with a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body was not a JSON array
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl DirectoryError {
    /// Returns true if a later attempt could succeed
    ///
    /// The loader never retries on its own; this only informs logging and
    /// any caller that offers a manual refresh.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::ServiceUnavailable(_)
                | Self::Timeout { .. }
                | Self::RateLimitExceeded { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(DirectoryError::ConnectionFailed("test".to_string()).is_retryable());
        assert!(DirectoryError::ServiceUnavailable("test".to_string()).is_retryable());
        assert!(DirectoryError::Timeout { timeout_secs: 30 }.is_retryable());
        assert!(
            DirectoryError::RateLimitExceeded {
                retry_after_secs: Some(60)
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_non_retryable_errors() {
        assert!(!DirectoryError::RequestFailed("HTTP 404".to_string()).is_retryable());
        assert!(!DirectoryError::ParseError("test".to_string()).is_retryable());
        assert!(!DirectoryError::ConfigurationError("test".to_string()).is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = DirectoryError::RateLimitExceeded {
            retry_after_secs: Some(60),
        };
        assert!(err.to_string().contains("60"));

        let err = DirectoryError::Timeout { timeout_secs: 10 };
        assert_eq!(err.to_string(), "Request timed out after 10 seconds");
    }
}
