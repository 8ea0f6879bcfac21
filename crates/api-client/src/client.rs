//! Main backend client implementation

use crate::config::ClientConfig;
use crate::endpoints::{AppStoreApi, BlogApi, FormsApi, HealthApi, PoliciesApi};
use crate::error::{ApiError, ApiResult};
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// Flowxtra backend client
///
/// This client wraps `reqwest` and adds:
/// - Backend URL resolution from configuration
/// - Request correlation IDs for tracing
/// - `no-store` semantics (the edge never caches backend responses)
/// - A strict response contract: non-JSON 2xx bodies and non-2xx statuses
///   are surfaced as typed errors, never as loosely-typed values
///
/// Failures are terminal per request; no retries are performed.
#[derive(Clone)]
pub struct BackendClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

/// Relayed backend response for proxy routes: the edge forwards the status
/// and JSON body verbatim instead of interpreting them.
#[derive(Debug, Clone)]
pub struct ProxyOutcome {
    /// Backend HTTP status
    pub status: u16,
    /// Backend JSON body
    pub body: Value,
}

impl ProxyOutcome {
    /// Whether the backend reported success
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl BackendClient {
    /// Create a new client with configuration from the environment
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(USER_AGENT, HeaderValue::from_static("flowxtra-edge/1.2"));
        default_headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the resolved backend origin
    #[must_use]
    pub fn backend_url(&self) -> &str {
        &self.config.backend_url
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Access blog endpoints
    #[must_use]
    pub fn blog(&self) -> BlogApi {
        BlogApi::new(self.clone())
    }

    /// Access app-store endpoints
    #[must_use]
    pub fn app_store(&self) -> AppStoreApi {
        AppStoreApi::new(self.clone())
    }

    /// Access privacy-policy endpoints
    #[must_use]
    pub fn policies(&self) -> PoliciesApi {
        PoliciesApi::new(self.clone())
    }

    /// Access form submission endpoints (proxy relays)
    #[must_use]
    pub fn forms(&self) -> FormsApi {
        FormsApi::new(self.clone())
    }

    /// Access health check endpoints
    #[must_use]
    pub fn health(&self) -> HealthApi {
        HealthApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Low-level HTTP methods
    // -------------------------------------------------------------------------

    /// Perform a GET request and deserialize the JSON response
    #[instrument(skip(self), fields(request_id))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.send(Method::GET, path, None).await?;
        self.handle_response(response).await
    }

    /// Perform a GET request and relay status + JSON body verbatim
    #[instrument(skip(self), fields(request_id))]
    pub async fn relay_get(&self, path: &str) -> ApiResult<ProxyOutcome> {
        let response = self.send(Method::GET, path, None).await?;
        Self::relay_response(response).await
    }

    /// Perform a POST request and relay status + JSON body verbatim
    #[instrument(skip(self, body), fields(request_id))]
    pub async fn relay_post(&self, path: &str, body: &Value) -> ApiResult<ProxyOutcome> {
        let response = self.send(Method::POST, path, Some(body)).await?;
        Self::relay_response(response).await
    }

    /// Probe a path and return the raw response (health checks)
    pub async fn probe(&self, path: &str) -> ApiResult<Response> {
        self.send(Method::GET, path, None).await
    }

    async fn send(&self, method: Method, path: &str, body: Option<&Value>) -> ApiResult<Response> {
        let url = format!(
            "{}/{}",
            self.config.backend_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let request_id = Uuid::new_v4().to_string();

        debug!(request_id = %request_id, method = %method, url = %url, "backend request");

        let mut request = self
            .inner
            .request(method, &url)
            .header(X_REQUEST_ID, &request_id);

        if let Some(b) = body {
            request = request.json(b);
        }

        request.send().await.map_err(ApiError::Request)
    }

    /// Deserialize a response under the strict contract: 2xx JSON only.
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> ApiResult<T> {
        let status = response.status().as_u16();
        let text = response.text().await.map_err(ApiError::Request)?;

        if !(200..300).contains(&status) {
            return Err(ApiError::upstream(status, text));
        }

        serde_json::from_str(&text).map_err(|err| {
            debug!(status, error = %err, "backend returned non-JSON or mismatched body");
            ApiError::InvalidJson { status }
        })
    }

    /// Parse a response for verbatim relay. A non-JSON body on a successful
    /// status is a contract violation; on a failed status the raw text
    /// becomes the (truncated) upstream message.
    async fn relay_response(response: Response) -> ApiResult<ProxyOutcome> {
        let status = response.status().as_u16();
        let text = response.text().await.map_err(ApiError::Request)?;

        match serde_json::from_str::<Value>(&text) {
            Ok(body) => Ok(ProxyOutcome { status, body }),
            Err(_) if (200..300).contains(&status) => Err(ApiError::InvalidJson { status }),
            Err(_) => Err(ApiError::upstream(status, text)),
        }
    }
}
