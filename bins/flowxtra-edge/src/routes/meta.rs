//! Health, llms.txt and robots.txt handlers

use crate::routes::text_response;
use crate::AppState;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use flowxtra_seo::llms::llms_txt;
use serde_json::json;
use tracing::warn;

/// GET /health - edge liveness plus backend reachability.
///
/// Always 200: a down backend makes the edge degraded, not dead.
pub async fn health(State(state): State<AppState>) -> Response {
    let backend = match state.client.health().probe().await {
        Ok(status) => json!({
            "url": status.url,
            "status": status.status_code,
            "healthy": status.is_healthy,
            "latency_ms": status.response_time.as_millis() as u64,
        }),
        Err(err) => {
            warn!(error = %err, "backend health probe failed");
            json!({ "healthy": false, "error": err.to_string() })
        }
    };

    let degraded = !backend["healthy"].as_bool().unwrap_or(false);
    Json(json!({
        "status": if degraded { "degraded" } else { "ok" },
        "version": env!("CARGO_PKG_VERSION"),
        "backend": backend,
    }))
    .into_response()
}

/// GET /llms.txt
pub async fn llms(State(state): State<AppState>) -> Response {
    text_response(llms_txt(&state.config.site_url))
}

/// GET /robots.txt
pub async fn robots(State(state): State<AppState>) -> Response {
    let base = state.config.site_url.trim_end_matches('/');
    text_response(format!(
        "User-agent: *\nAllow: /\n\nSitemap: {base}/sitemap.xml\nSitemap: {base}/sitemap-all.xml\n"
    ))
}
