//! Blog endpoints
//!
//! Maps to `GET /api/blog` and `GET /api/blog/:slug` on the backend.
//! Locale parameters are normalized to base locales before any call, and
//! the fallback-aware listing walks the content fallback chain so a locale
//! with no posts degrades instead of rendering empty pages.

use crate::client::BackendClient;
use crate::error::ApiResult;
use flowxtra_core::locale;
use serde::{Deserialize, Serialize};

/// Blog API interface
#[derive(Clone)]
pub struct BlogApi {
    client: BackendClient,
}

impl BlogApi {
    /// Create a new blog API interface
    pub(crate) fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// List posts for a locale with pagination
    ///
    /// GET /api/blog?page=<page>&limit=<limit>&language=<base locale>
    pub async fn list(&self, locale: &str, page: u32, limit: u32) -> ApiResult<PostsPage> {
        let language = locale::normalize_for_api(locale);
        let path = format!("api/blog?page={page}&limit={limit}&language={language}");
        self.client.get(&path).await
    }

    /// Get a single post by slug
    ///
    /// GET /api/blog/:slug
    pub async fn by_slug(&self, slug: &str) -> ApiResult<PostEnvelope> {
        let path = format!("api/blog/{slug}");
        self.client.get(&path).await
    }

    /// Total post count for a locale (one minimal page for the counter)
    pub async fn total(&self, locale: &str) -> ApiResult<u64> {
        let page = self.list(locale, 1, 1).await?;
        Ok(page.pagination.map(|p| p.total).unwrap_or(page.data.len() as u64))
    }

    /// List posts, walking the content fallback chain when a locale has
    /// zero results: exact -> regional base -> English.
    pub async fn list_with_fallback(
        &self,
        requested: &str,
        page: u32,
        limit: u32,
    ) -> ApiResult<LocalizedPosts> {
        let chain = locale::fallback_chain(requested);
        let mut last = LocalizedPosts {
            posts: Vec::new(),
            pagination: None,
            served_locale: locale::DEFAULT_LOCALE,
        };

        for candidate in chain {
            let result = self.list(candidate, page, limit).await?;
            if !result.data.is_empty() {
                return Ok(LocalizedPosts {
                    posts: result.data,
                    pagination: result.pagination,
                    served_locale: candidate,
                });
            }
            last = LocalizedPosts {
                posts: result.data,
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

/// Blog post entity as served by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: u64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Publication date (ISO 8601 or `YYYY-MM-DD`)
    pub date: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Reading time in minutes
    #[serde(default)]
    pub reading_time: Option<u32>,
    #[serde(default)]
    pub available_languages: Vec<String>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Post author info
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Pagination info (`page`/`limit`/`hasNextPage` backend contract)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    #[serde(default)]
    pub total: u64,
    pub has_next_page: bool,
}

/// One page of posts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostsPage {
    #[serde(default)]
    pub data: Vec<BlogPost>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Single-post envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostEnvelope {
    pub data: BlogPost,
}

/// Posts resolved through the fallback chain, tagged with the locale that
/// actually served them
#[derive(Debug, Clone)]
pub struct LocalizedPosts {
    /// Posts for the served locale
    pub posts: Vec<BlogPost>,
    /// Pagination of the served page
    pub pagination: Option<Pagination>,
    /// Locale that produced the content (may differ from the request)
    pub served_locale: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posts_page_deserialize() {
        let json = r#"{
            "data": [{
                "id": 42,
                "title": "Hiring in 2025",
                "slug": "hiring-in-2025",
                "excerpt": "What changed",
                "date": "2025-03-14",
                "updatedAt": "2025-03-20T08:00:00Z",
                "readingTime": 6,
                "availableLanguages": ["en", "de"],
                "author": { "name": "Dana" },
                "tags": ["recruiting"]
            }],
            "pagination": { "page": 1, "limit": 100, "total": 250, "hasNextPage": true }
        }"#;

        let page: PostsPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].slug, "hiring-in-2025");
        assert_eq!(page.data[0].reading_time, Some(6));
        let pagination = page.pagination.unwrap();
        assert_eq!(pagination.total, 250);
        assert!(pagination.has_next_page);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{
            "data": [{ "id": 1, "title": "t", "slug": "t", "date": "2025-01-01" }]
        }"#;

        let page: PostsPage = serde_json::from_str(json).unwrap();
        assert!(page.pagination.is_none());
        assert!(page.data[0].author.is_none());
        assert!(page.data[0].tags.is_empty());
    }
}
