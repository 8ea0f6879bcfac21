//! Form submission endpoints (proxy relays)
//!
//! The contact and data-request forms post through the edge to avoid CORS;
//! the edge relays the backend's status and JSON body verbatim, so these
//! wrappers deal in [`ProxyOutcome`] instead of typed DTOs.

use crate::client::{BackendClient, ProxyOutcome};
use crate::error::ApiResult;
use serde_json::Value;

/// Forms API interface
#[derive(Clone)]
pub struct FormsApi {
    client: BackendClient,
}

impl FormsApi {
    /// Create a new forms API interface
    pub(crate) fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// Submit a contact form
    ///
    /// POST /api/contact
    pub async fn contact(&self, body: &Value) -> ApiResult<ProxyOutcome> {
        self.client.relay_post("api/contact", body).await
    }

    /// Submit a GDPR data request
    ///
    /// POST /api/data-request
    pub async fn data_request(&self, body: &Value) -> ApiResult<ProxyOutcome> {
        self.client.relay_post("api/data-request", body).await
    }
}
