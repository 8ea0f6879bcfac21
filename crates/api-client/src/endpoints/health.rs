//! Health check endpoints

use crate::client::BackendClient;
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Health check API interface
#[derive(Clone)]
pub struct HealthApi {
    client: BackendClient,
}

impl HealthApi {
    /// Create a new health API interface
    pub(crate) fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// Check backend health
    ///
    /// GET /api/health
    pub async fn check(&self) -> ApiResult<HealthResponse> {
        self.client.get("api/health").await
    }

    /// Probe backend reachability with timing information
    pub async fn probe(&self) -> ApiResult<EndpointStatus> {
        let url = format!("{}/api/health", self.client.backend_url());
        let start = Instant::now();
        let response = self.client.probe("api/health").await?;
        let elapsed = start.elapsed();

        Ok(EndpointStatus {
            url,
            status_code: response.status().as_u16(),
            response_time: elapsed,
            is_healthy: response.status().is_success(),
        })
    }
}

/// Health check response from the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Health status (e.g. "healthy", "ok")
    pub status: String,
    /// Backend version
    #[serde(default)]
    pub version: Option<String>,
    /// Timestamp of the health check
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Endpoint status information
#[derive(Debug, Clone, Serialize)]
pub struct EndpointStatus {
    /// URL that was checked
    pub url: String,
    /// HTTP status code
    pub status_code: u16,
    /// Response time
    pub response_time: Duration,
    /// Whether the endpoint is healthy
    pub is_healthy: bool,
}
