//! Edge error type and HTTP mapping
//!
//! One taxonomy for every route: client-input errors, upstream errors,
//! upstream contract violations, configuration errors and unexpected
//! failures. All terminal per request; the response body carries extra
//! detail only in development.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use flowxtra_api_client::{ApiError, Environment};
use flowxtra_core::UnsupportedLocale;
use once_cell::sync::OnceCell;
use serde_json::json;

static ENVIRONMENT: OnceCell<Environment> = OnceCell::new();

/// Record the runtime environment once at startup so error responses know
/// whether to include diagnostic detail.
pub fn set_environment(environment: Environment) {
    let _ = ENVIRONMENT.set(environment);
}

fn is_development() -> bool {
    ENVIRONMENT
        .get()
        .copied()
        .unwrap_or_default()
        .is_development()
}

/// Edge request error.
#[derive(Debug, thiserror::Error)]
pub enum EdgeError {
    /// Locale path parameter outside the supported set
    #[error(transparent)]
    UnsupportedLocale(#[from] UnsupportedLocale),

    /// Request body is not valid JSON
    #[error("invalid request body")]
    InvalidBody,

    /// Resolved backend URL is unusable (localhost outside development)
    #[error("backend configuration rejected")]
    Configuration,

    /// Backend returned a successful status with a non-JSON body
    #[error("backend returned a non-JSON body")]
    InvalidUpstreamJson,

    /// Backend returned a non-2xx status; relayed to the client
    #[error("backend error ({status}): {message}")]
    Upstream {
        /// Backend HTTP status
        status: u16,
        /// Truncated backend message
        message: String,
    },

    /// Transport failure or other unexpected error
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ApiError> for EdgeError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidJson { status } => {
                tracing::error!(status, "backend violated the JSON contract");
                Self::InvalidUpstreamJson
            }
            ApiError::Upstream { status, message } => Self::Upstream { status, message },
            ApiError::Config(message) => {
                tracing::error!(error = %message, "backend configuration error");
                Self::Configuration
            }
            ApiError::Request(err) => Self::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for EdgeError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::UnsupportedLocale(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::InvalidBody => (StatusCode::BAD_REQUEST, "Invalid request body".to_string()),
            Self::Configuration => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Configuration error".to_string())
            }
            Self::InvalidUpstreamJson => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Invalid JSON response".to_string())
            }
            Self::Upstream { status, message } => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                message.clone(),
            ),
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "unexpected edge error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        let body = if is_development() {
            json!({ "error": message, "detail": self.to_string() })
        } else {
            json!({ "error": message })
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            EdgeError::InvalidBody.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            EdgeError::Configuration.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            EdgeError::UnsupportedLocale(UnsupportedLocale("xx".into()))
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_upstream_status_is_relayed() {
        let err = EdgeError::Upstream { status: 422, message: "nope".into() };
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);

        let err = EdgeError::Upstream { status: 99, message: "bogus".into() };
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_api_error_conversion() {
        let edge: EdgeError = ApiError::InvalidJson { status: 200 }.into();
        assert!(matches!(edge, EdgeError::InvalidUpstreamJson));

        let edge: EdgeError = ApiError::upstream(503, "down").into();
        assert!(matches!(edge, EdgeError::Upstream { status: 503, .. }));
    }
}
