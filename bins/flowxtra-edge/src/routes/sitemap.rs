//! Sitemap route handlers
//!
//! Document names are flat (`/sitemap-en-blog-3.xml`) so a single
//! parameterized route parses them; the root and per-locale indexes have
//! their own routes. Backend failures degrade to empty-but-well-formed
//! documents: crawlers must never receive a broken response.

use crate::error::EdgeError;
use crate::routes::xml_response;
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use flowxtra_core::locale;
use flowxtra_seo::sitemap;
use flowxtra_seo::sweep;
use tracing::error;

/// A parsed flat sitemap document name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SitemapDoc {
    /// `sitemap-{locale}-static.xml`
    Static(&'static str),
    /// `sitemap-{locale}-blog-{n}.xml` (1-based page)
    Blog(&'static str, u32),
    /// `sitemap-{locale}-apps-{n}.xml` (1-based page)
    Apps(&'static str, u32),
}

/// Parse a flat document name. Content documents only exist for base
/// locales; anything else is unknown.
#[must_use]
pub fn parse_sitemap_doc(name: &str) -> Option<SitemapDoc> {
    let stem = name.strip_suffix(".xml")?.strip_prefix("sitemap-")?;

    if let Some(raw_locale) = stem.strip_suffix("-static") {
        return locale::canonical(raw_locale).map(SitemapDoc::Static);
    }

    let (rest, raw_page) = stem.rsplit_once('-')?;
    let page: u32 = raw_page.parse().ok().filter(|n| *n >= 1)?;

    if let Some(raw_locale) = rest.strip_suffix("-blog") {
        let l = locale::canonical(raw_locale).filter(|l| locale::is_base(l))?;
        return Some(SitemapDoc::Blog(l, page));
    }
    if let Some(raw_locale) = rest.strip_suffix("-apps") {
        let l = locale::canonical(raw_locale).filter(|l| locale::is_base(l))?;
        return Some(SitemapDoc::Apps(l, page));
    }

    None
}

/// GET /sitemap.xml
pub async fn root_index(State(state): State<AppState>) -> Response {
    xml_response(sitemap::sitemap_index(&state.config.site_url))
}

/// GET /sitemap/:locale (`.xml` extension optional)
pub async fn locale_index(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Response, EdgeError> {
    let name = raw.trim_end_matches(".xml");
    let l = locale::require_supported(name)?;

    // Variants carry no content sitemaps, so skip the count fetches.
    let (total_posts, total_apps) = if locale::is_base(l) {
        (
            count_or_zero(state.client.blog().total(l).await, l, "posts"),
            count_or_zero(state.client.app_store().total(l).await, l, "apps"),
        )
    } else {
        (0, 0)
    };

    Ok(xml_response(sitemap::locale_index(
        &state.config.site_url,
        l,
        total_posts,
        total_apps,
    )))
}

/// GET /:doc - flat static/content sitemap documents
pub async fn content_doc(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    let Some(doc) = parse_sitemap_doc(&name) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let site_url = &state.config.site_url;
    let per_page = sitemap::URLS_PER_SITEMAP as u32;

    let xml = match doc {
        SitemapDoc::Static(l) => sitemap::static_urlset(site_url, l),
        SitemapDoc::Blog(l, page) => {
            let posts = match state.client.blog().list_with_fallback(l, page, per_page).await {
                Ok(localized) => localized.posts,
                Err(err) => {
                    error!(locale = l, page, error = %err, "blog sitemap fetch failed, emitting empty urlset");
                    Vec::new()
                }
            };
            sitemap::urlset(&sitemap::blog_urls(site_url, l, &posts))
        }
        SitemapDoc::Apps(l, page) => {
            let apps = match state.client.app_store().list_with_fallback(l, page, per_page).await {
                Ok(localized) => localized.apps,
                Err(err) => {
                    error!(locale = l, page, error = %err, "app sitemap fetch failed, emitting empty urlset");
                    Vec::new()
                }
            };
            sitemap::urlset(&sitemap::app_urls(site_url, l, &apps))
        }
    };

    xml_response(xml)
}

/// GET /sitemap-all.xml
pub async fn all(State(state): State<AppState>) -> Response {
    xml_response(sweep::sitemap_all(&state.client, &state.config.site_url).await)
}

fn count_or_zero(result: Result<u64, flowxtra_api_client::ApiError>, l: &str, kind: &str) -> u64 {
    match result {
        Ok(total) => total,
        Err(err) => {
            error!(locale = l, kind, error = %err, "count fetch failed, degrading to static-only index");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_docs() {
        assert_eq!(parse_sitemap_doc("sitemap-en-static.xml"), Some(SitemapDoc::Static("en")));
        assert_eq!(
            parse_sitemap_doc("sitemap-en-au-static.xml"),
            Some(SitemapDoc::Static("en-au"))
        );
    }

    #[test]
    fn test_parse_content_docs() {
        assert_eq!(parse_sitemap_doc("sitemap-en-blog-3.xml"), Some(SitemapDoc::Blog("en", 3)));
        assert_eq!(parse_sitemap_doc("sitemap-de-apps-1.xml"), Some(SitemapDoc::Apps("de", 1)));
    }

    #[test]
    fn test_variants_have_no_content_docs() {
        assert_eq!(parse_sitemap_doc("sitemap-en-au-blog-1.xml"), None);
        assert_eq!(parse_sitemap_doc("sitemap-de-ch-apps-2.xml"), None);
    }

    #[test]
    fn test_parse_rejects_junk() {
        assert_eq!(parse_sitemap_doc("sitemap-xx-blog-1.xml"), None);
        assert_eq!(parse_sitemap_doc("sitemap-en-blog-0.xml"), None);
        assert_eq!(parse_sitemap_doc("sitemap-en-blog-one.xml"), None);
        assert_eq!(parse_sitemap_doc("sitemap-en-blog-1"), None);
        assert_eq!(parse_sitemap_doc("favicon.ico"), None);
        assert_eq!(parse_sitemap_doc("sitemap-.xml"), None);
    }
}
