//! Full-content sweeps for the flat `/sitemap-all.xml` document
//!
//! Pages through every locale's content with sequential awaited fetches.
//! A hard cap bounds the sweep per locale so a backend that keeps
//! reporting `hasNextPage: true` cannot spin the handler forever, and a
//! failing locale degrades to its static pages instead of failing the
//! whole document.

use crate::sitemap::{app_urls, blog_urls, urlset, SitemapUrl, URLS_PER_SITEMAP};
use crate::static_pages::{page_url, STATIC_PAGES};
use flowxtra_api_client::endpoints::{App, BlogPost};
use flowxtra_api_client::{ApiResult, BackendClient};
use flowxtra_core::locale;
use tracing::{error, warn};

/// Safety cap on pages fetched per locale and content type.
pub const MAX_PAGES_PER_LOCALE: u32 = 100;

/// Collect every blog post for a locale, paging sequentially until the
/// backend reports no next page or the safety cap is hit.
pub async fn collect_posts(client: &BackendClient, locale_name: &str) -> ApiResult<Vec<BlogPost>> {
    let mut posts = Vec::new();

    for page in 1..=MAX_PAGES_PER_LOCALE {
        let result = client
            .blog()
            .list(locale_name, page, URLS_PER_SITEMAP as u32)
            .await?;

        let has_next = result.pagination.map(|p| p.has_next_page).unwrap_or(false);
        let empty = result.data.is_empty();
        posts.extend(result.data);

        if empty || !has_next {
            return Ok(posts);
        }
        if page == MAX_PAGES_PER_LOCALE {
            warn!(locale = locale_name, cap = MAX_PAGES_PER_LOCALE, "post sweep hit page cap");
        }
    }

    Ok(posts)
}

/// Collect every app-store entry for a locale, same paging rules as
/// [`collect_posts`].
pub async fn collect_apps(client: &BackendClient, locale_name: &str) -> ApiResult<Vec<App>> {
    let mut apps = Vec::new();

    for page in 1..=MAX_PAGES_PER_LOCALE {
        let result = client
            .app_store()
            .list(locale_name, page, URLS_PER_SITEMAP as u32)
            .await?;

        let has_next = result.pagination.map(|p| p.has_next_page).unwrap_or(false);
        let empty = result.data.is_empty();
        apps.extend(result.data);

        if empty || !has_next {
            return Ok(apps);
        }
        if page == MAX_PAGES_PER_LOCALE {
            warn!(locale = locale_name, cap = MAX_PAGES_PER_LOCALE, "app sweep hit page cap");
        }
    }

    Ok(apps)
}

/// Build the flat all-URLs sitemap: static pages for every supported
/// locale, plus all content URLs for base locales.
///
/// Never fails: a locale whose content fetch errors contributes its static
/// pages only, and the error is logged.
pub async fn sitemap_all(client: &BackendClient, site_url: &str) -> String {
    let mut urls: Vec<SitemapUrl> = Vec::new();

    for l in locale::supported_locales() {
        for page in STATIC_PAGES {
            urls.push(SitemapUrl {
                loc: page_url(site_url, l, page.path),
                lastmod: None,
                changefreq: Some(page.changefreq),
                priority: Some(page.priority),
            });
        }

        // Content lives under base locales only; variants would index the
        // same backend rows twice.
        if !locale::is_base(l) {
            continue;
        }

        match collect_posts(client, l).await {
            Ok(posts) => urls.extend(blog_urls(site_url, l, &posts)),
            Err(err) => error!(locale = l, error = %err, "post sweep failed, emitting static URLs only"),
        }

        match collect_apps(client, l).await {
            Ok(apps) => urls.extend(app_urls(site_url, l, &apps)),
            Err(err) => error!(locale = l, error = %err, "app sweep failed, emitting static URLs only"),
        }
    }

    urlset(&urls)
}
