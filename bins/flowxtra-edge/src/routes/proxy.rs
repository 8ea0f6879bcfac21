//! Proxy route handlers
//!
//! The browser posts forms and reads the app store through the edge so the
//! backend never needs per-site CORS configuration; the permissive CORS
//! layer on the router covers the responses built here, errors included.
//!
//! Failure taxonomy (terminal per request, no retries): malformed body ->
//! 400, backend non-2xx -> relayed status with truncated message, backend
//! non-JSON -> 500 "Invalid JSON response", transport error -> 500
//! "Internal server error", localhost backend outside development -> 500
//! "Configuration error" without forwarding.

use crate::error::EdgeError;
use crate::AppState;
use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use flowxtra_api_client::error::truncate_message;
use flowxtra_api_client::ProxyOutcome;
use serde_json::{json, Value};
use tracing::{debug, warn};

/// Development-only stand-in reCAPTCHA token.
const DEV_RECAPTCHA_TOKEN: &str = "dev-bypass-token";

/// POST /api/contact
pub async fn contact(State(state): State<AppState>, body: Bytes) -> Result<Response, EdgeError> {
    let payload = parse_form_body(&state, &body)?;
    guard_backend(&state)?;
    let outcome = state.client.forms().contact(&payload).await?;
    Ok(relay(outcome))
}

/// POST /api/data-request
pub async fn data_request(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, EdgeError> {
    let payload = parse_form_body(&state, &body)?;
    guard_backend(&state)?;
    let outcome = state.client.forms().data_request(&payload).await?;
    Ok(relay(outcome))
}

/// GET /api/app-store (query string relayed verbatim)
pub async fn app_store_list(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, EdgeError> {
    guard_backend(&state)?;
    let path = match query {
        Some(q) => format!("api/app-store?{q}"),
        None => "api/app-store".to_string(),
    };
    let outcome = state.client.relay_get(&path).await?;
    Ok(relay(outcome))
}

/// GET /api/app-store/:slug
pub async fn app_store_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, EdgeError> {
    guard_backend(&state)?;
    let outcome = state.client.relay_get(&format!("api/app-store/{slug}")).await?;
    Ok(relay(outcome))
}

/// Parse and prepare a form body: reject non-JSON and non-object payloads,
/// and in development inject the stand-in reCAPTCHA token when the client
/// sent none.
fn parse_form_body(state: &AppState, body: &[u8]) -> Result<Value, EdgeError> {
    let mut payload: Value = serde_json::from_slice(body).map_err(|_| EdgeError::InvalidBody)?;

    let Some(object) = payload.as_object_mut() else {
        return Err(EdgeError::InvalidBody);
    };

    if state.config.environment.is_development() && !object.contains_key("recaptchaToken") {
        debug!("injecting development reCAPTCHA token");
        object.insert("recaptchaToken".to_string(), Value::String(DEV_RECAPTCHA_TOKEN.to_string()));
    }

    Ok(payload)
}

/// Refuse to forward when the resolved backend still points at localhost
/// outside development.
fn guard_backend(state: &AppState) -> Result<(), EdgeError> {
    if state.config.backend_is_localhost() && !state.config.environment.is_development() {
        warn!(backend = %state.config.backend_url, "refusing to proxy to localhost backend");
        return Err(EdgeError::Configuration);
    }
    Ok(())
}

/// Relay a backend outcome: successful responses pass through verbatim,
/// failures are reshaped to `{"error": <truncated message>}` under the
/// backend's status.
fn relay(outcome: ProxyOutcome) -> Response {
    let status = StatusCode::from_u16(outcome.status).unwrap_or(StatusCode::BAD_GATEWAY);

    if outcome.is_success() {
        return (status, Json(outcome.body)).into_response();
    }

    let message = outcome
        .body
        .get("message")
        .or_else(|| outcome.body.get("error"))
        .and_then(Value::as_str)
        .map(ToString::to_string)
        .unwrap_or_else(|| outcome.body.to_string());

    (status, Json(json!({ "error": truncate_message(&message) }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowxtra_api_client::{BackendClient, ClientConfig, Environment};
    use std::sync::Arc;

    fn state_with(config: ClientConfig) -> AppState {
        let client = BackendClient::with_config(config.clone()).unwrap();
        AppState { config: Arc::new(config), client }
    }

    #[test]
    fn test_malformed_body_is_rejected() {
        let state = state_with(ClientConfig::development());
        let err = parse_form_body(&state, b"not json").unwrap_err();
        assert!(matches!(err, EdgeError::InvalidBody));

        let err = parse_form_body(&state, b"[1, 2, 3]").unwrap_err();
        assert!(matches!(err, EdgeError::InvalidBody));
    }

    #[test]
    fn test_dev_recaptcha_injection() {
        let state = state_with(ClientConfig::development());
        let payload = parse_form_body(&state, br#"{"email":"a@b.c"}"#).unwrap();
        assert_eq!(payload["recaptchaToken"], DEV_RECAPTCHA_TOKEN);

        // An explicit token is never overwritten.
        let payload = parse_form_body(&state, br#"{"recaptchaToken":"real"}"#).unwrap();
        assert_eq!(payload["recaptchaToken"], "real");
    }

    #[test]
    fn test_no_injection_outside_development() {
        let state = state_with(ClientConfig::default());
        let payload = parse_form_body(&state, br#"{"email":"a@b.c"}"#).unwrap();
        assert!(payload.get("recaptchaToken").is_none());
    }

    #[test]
    fn test_localhost_guard_outside_development() {
        let config = ClientConfig::default()
            .with_backend_url("http://localhost:4000")
            .with_environment(Environment::Production);
        let state = state_with(config);
        assert!(matches!(guard_backend(&state), Err(EdgeError::Configuration)));

        let state = state_with(ClientConfig::development());
        assert!(guard_backend(&state).is_ok());
    }

    #[test]
    fn test_relay_reshapes_failures() {
        let outcome = ProxyOutcome {
            status: 422,
            body: json!({ "message": "missing field: email" }),
        };
        let response = relay(outcome);
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let outcome = ProxyOutcome { status: 201, body: json!({ "ok": true }) };
        assert_eq!(relay(outcome).status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_contact_handler_rejects_malformed_body() {
        let state = state_with(ClientConfig::development());
        let result = contact(State(state), Bytes::from_static(b"not json")).await;
        let err = result.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
