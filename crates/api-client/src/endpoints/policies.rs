//! Privacy-policy endpoints
//!
//! Maps to `GET /api/privacy/policies/public`, used by the legal pages and
//! the static sitemap.

use crate::client::BackendClient;
use crate::error::ApiResult;
use flowxtra_core::locale;
use serde::{Deserialize, Serialize};

/// Policies API interface
#[derive(Clone)]
pub struct PoliciesApi {
    client: BackendClient,
}

impl PoliciesApi {
    /// Create a new policies API interface
    pub(crate) fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// List public policies for a locale
    ///
    /// GET /api/privacy/policies/public?language=<base locale>
    pub async fn public(&self, locale: &str) -> ApiResult<PoliciesResponse> {
        let language = locale::normalize_for_api(locale);
        let path = format!("api/privacy/policies/public?language={language}");
        self.client.get(&path).await
    }
}

/// Public policies response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoliciesResponse {
    #[serde(default)]
    pub data: Vec<Policy>,
}

/// Policy document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    pub id: u64,
    /// Policy type (`privacy`, `terms`, `cookies`, ...)
    #[serde(rename = "type")]
    pub policy_type: String,
    pub language: String,
    pub title: String,
    pub content: String,
    pub version: String,
    #[serde(default)]
    pub effective_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_deserialize() {
        let json = r#"{
            "data": [{
                "id": 3,
                "type": "privacy",
                "language": "en",
                "title": "Privacy Policy",
                "content": "<p>…</p>",
                "version": "2.4",
                "effective_at": "2025-01-01"
            }]
        }"#;

        let response: PoliciesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data[0].policy_type, "privacy");
        assert_eq!(response.data[0].version, "2.4");
    }
}
