//! Error types for the backend client

use thiserror::Error;

/// Result type alias for backend API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Maximum length of an upstream error message relayed to clients.
pub const MAX_RELAYED_MESSAGE_LEN: usize = 200;

/// Backend client errors
///
/// Every failure is terminal per request: the edge performs no retries, so
/// this taxonomy maps one-to-one onto the HTTP responses the proxy and SEO
/// routes produce.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, TLS)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend returned 2xx with a body that is not valid JSON
    #[error("invalid JSON response from backend (status {status})")]
    InvalidJson {
        /// HTTP status of the offending response
        status: u16,
    },

    /// Backend returned a non-2xx status
    #[error("backend error ({status}): {message}")]
    Upstream {
        /// HTTP status code
        status: u16,
        /// Error message, truncated to [`MAX_RELAYED_MESSAGE_LEN`]
        message: String,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an upstream error, truncating the message so oversized
    /// backend error pages are never relayed wholesale.
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: truncate_message(&message.into()),
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Upstream { status, .. } if (400..500).contains(status))
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Upstream { status, .. } if *status >= 500)
    }
}

/// Truncate a message to [`MAX_RELAYED_MESSAGE_LEN`] on a char boundary.
#[must_use]
pub fn truncate_message(message: &str) -> String {
    if message.chars().count() <= MAX_RELAYED_MESSAGE_LEN {
        message.to_string()
    } else {
        let truncated: String = message.chars().take(MAX_RELAYED_MESSAGE_LEN).collect();
        format!("{truncated}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_message_is_truncated() {
        let long = "x".repeat(500);
        let err = ApiError::upstream(502, long);
        match err {
            ApiError::Upstream { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message.chars().count(), MAX_RELAYED_MESSAGE_LEN + 1);
                assert!(message.ends_with('…'));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_short_message_untouched() {
        assert_eq!(truncate_message("boom"), "boom");
    }

    #[test]
    fn test_status_class_predicates() {
        assert!(ApiError::upstream(404, "missing").is_client_error());
        assert!(ApiError::upstream(502, "bad gateway").is_server_error());
        assert!(!ApiError::config("bad").is_client_error());
    }
}
