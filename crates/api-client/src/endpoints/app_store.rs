//! App-store endpoints
//!
//! Maps to `GET /api/app-store` and `GET /api/app-store/:slug`. Shares the
//! pagination contract and fallback policy with the blog endpoints.

use crate::client::BackendClient;
use crate::endpoints::blog::Pagination;
use crate::error::ApiResult;
use flowxtra_core::locale;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// App-store API interface
#[derive(Clone)]
pub struct AppStoreApi {
    client: BackendClient,
}

impl AppStoreApi {
    /// Create a new app-store API interface
    pub(crate) fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// List apps for a locale with pagination
    ///
    /// GET /api/app-store?page=<page>&limit=<limit>&language=<base locale>
    pub async fn list(&self, locale: &str, page: u32, limit: u32) -> ApiResult<AppsPage> {
        let language = locale::normalize_for_api(locale);
        let path = format!("api/app-store?page={page}&limit={limit}&language={language}");
        self.client.get(&path).await
    }

    /// Get a single app by slug
    ///
    /// GET /api/app-store/:slug
    pub async fn by_slug(&self, slug: &str) -> ApiResult<AppEnvelope> {
        let path = format!("api/app-store/{slug}");
        self.client.get(&path).await
    }

    /// Total app count for a locale
    pub async fn total(&self, locale: &str) -> ApiResult<u64> {
        let page = self.list(locale, 1, 1).await?;
        Ok(page.pagination.map(|p| p.total).unwrap_or(page.data.len() as u64))
    }

    /// List apps, walking the content fallback chain when a locale has
    /// zero results.
    pub async fn list_with_fallback(
        &self,
        requested: &str,
        page: u32,
        limit: u32,
    ) -> ApiResult<LocalizedApps> {
        let chain = locale::fallback_chain(requested);
        let mut last = LocalizedApps {
            apps: Vec::new(),
            pagination: None,
            served_locale: locale::DEFAULT_LOCALE,
        };

        for candidate in chain {
            let result = self.list(candidate, page, limit).await?;
            if !result.data.is_empty() {
                return Ok(LocalizedApps {
                    apps: result.data,
                    pagination: result.pagination,
                    served_locale: candidate,
                });
            }
            last = LocalizedApps {
                apps: result.data,
                pagination: result.pagination,
                served_locale: candidate,
            };
        }

        Ok(last)
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// App-store entry as served by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct App {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub screenshots: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    /// Localized name/description overrides keyed by locale
    #[serde(default)]
    pub translations: HashMap<String, AppTranslation>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl App {
    /// Localized name for a locale, falling back to the canonical name
    #[must_use]
    pub fn localized_name(&self, locale: &str) -> &str {
        self.translations
            .get(locale)
            .and_then(|t| t.name.as_deref())
            .unwrap_or(&self.name)
    }

    /// Localized description, falling back to the canonical one
    #[must_use]
    pub fn localized_description(&self, locale: &str) -> Option<&str> {
        self.translations
            .get(locale)
            .and_then(|t| t.description.as_deref())
            .or(self.description.as_deref())
    }
}

/// Localized app fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppTranslation {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One page of apps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppsPage {
    #[serde(default)]
    pub data: Vec<App>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Single-app envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppEnvelope {
    pub data: App,
}

/// Apps resolved through the fallback chain
#[derive(Debug, Clone)]
pub struct LocalizedApps {
    /// Apps for the served locale
    pub apps: Vec<App>,
    /// Pagination of the served page
    pub pagination: Option<Pagination>,
    /// Locale that produced the content
    pub served_locale: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_deserialize_with_translations() {
        let json = r#"{
            "id": 7,
            "name": "Job Board Sync",
            "slug": "job-board-sync",
            "description": "Push openings everywhere",
            "category": "integrations",
            "icon": "https://cdn.flowxtra.com/apps/jbs.png",
            "screenshots": ["https://cdn.flowxtra.com/apps/jbs-1.png"],
            "features": ["One-click publish"],
            "translations": {
                "de": { "name": "Jobbörsen-Sync", "description": "Stellen überall veröffentlichen" }
            }
        }"#;

        let app: App = serde_json::from_str(json).unwrap();
        assert_eq!(app.localized_name("de"), "Jobbörsen-Sync");
        assert_eq!(app.localized_name("fr"), "Job Board Sync");
        assert_eq!(
            app.localized_description("de"),
            Some("Stellen überall veröffentlichen")
        );
    }
}
