//! Sitemap document builders
//!
//! Three document shapes:
//!
//! - the root index (`/sitemap.xml`) referencing one per-locale index per
//!   supported locale
//! - per-locale indexes (`/sitemap/{locale}.xml`) referencing the static
//!   sitemap plus paginated content sitemaps (base locales only, 100 URLs
//!   per file)
//! - flat URL sets for the static pages and each content page
//!
//! Builders are pure string assembly over already-fetched data, so the
//! route handlers can degrade to an empty-but-well-formed document when
//! the backend misbehaves.

use crate::dates::w3c_date;
use crate::static_pages::{page_url, STATIC_PAGES};
use chrono::Utc;
use flowxtra_api_client::endpoints::{App, BlogPost};
use flowxtra_core::locale;
use flowxtra_core::xml::escape_xml;

/// URLs per content sitemap file.
pub const URLS_PER_SITEMAP: u64 = 100;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// One `<url>` entry in a urlset document
#[derive(Debug, Clone)]
pub struct SitemapUrl {
    /// Absolute page URL
    pub loc: String,
    /// W3C `lastmod` date, when known
    pub lastmod: Option<String>,
    /// Suggested crawl frequency
    pub changefreq: Option<&'static str>,
    /// Crawl priority hint
    pub priority: Option<&'static str>,
}

/// Number of content sitemap files for a total URL count:
/// `ceil(total / 100)`.
#[must_use]
pub fn page_count(total: u64) -> u64 {
    total.div_ceil(URLS_PER_SITEMAP)
}

/// Root sitemap index referencing one per-locale index per supported
/// locale.
#[must_use]
pub fn sitemap_index(site_url: &str) -> String {
    let base = site_url.trim_end_matches('/');
    let lastmod = Utc::now().format("%Y-%m-%d").to_string();

    let mut out = String::with_capacity(1024);
    out.push_str(XML_DECLARATION);
    out.push('\n');
    out.push_str(&format!("<sitemapindex xmlns=\"{SITEMAP_NS}\">\n"));
    for l in locale::supported_locales() {
        push_index_entry(&mut out, &format!("{base}/sitemap/{l}.xml"), &lastmod);
    }
    out.push_str("</sitemapindex>\n");
    out
}

/// Per-locale sitemap index.
///
/// Always references the static sitemap. Content sitemaps (blog, apps) are
/// referenced only for base locales; variants resolve to the same backend
/// content, and indexing it twice invites duplicate-content penalties.
#[must_use]
pub fn locale_index(site_url: &str, locale_name: &str, total_posts: u64, total_apps: u64) -> String {
    let base = site_url.trim_end_matches('/');
    let lastmod = Utc::now().format("%Y-%m-%d").to_string();

    let mut out = String::with_capacity(1024);
    out.push_str(XML_DECLARATION);
    out.push('\n');
    out.push_str(&format!("<sitemapindex xmlns=\"{SITEMAP_NS}\">\n"));

    push_index_entry(
        &mut out,
        &format!("{base}/sitemap-{locale_name}-static.xml"),
        &lastmod,
    );

    if locale::is_base(locale_name) {
        for n in 1..=page_count(total_posts) {
            push_index_entry(
                &mut out,
                &format!("{base}/sitemap-{locale_name}-blog-{n}.xml"),
                &lastmod,
            );
        }
        for n in 1..=page_count(total_apps) {
            push_index_entry(
                &mut out,
                &format!("{base}/sitemap-{locale_name}-apps-{n}.xml"),
                &lastmod,
            );
        }
    }

    out.push_str("</sitemapindex>\n");
    out
}

/// Flat urlset document from prepared entries.
#[must_use]
pub fn urlset(urls: &[SitemapUrl]) -> String {
    let mut out = String::with_capacity(256 + urls.len() * 160);
    out.push_str(XML_DECLARATION);
    out.push('\n');
    out.push_str(&format!("<urlset xmlns=\"{SITEMAP_NS}\">\n"));
    for url in urls {
        out.push_str("  <url>\n");
        out.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&url.loc)));
        if let Some(lastmod) = &url.lastmod {
            out.push_str(&format!("    <lastmod>{}</lastmod>\n", escape_xml(lastmod)));
        }
        if let Some(changefreq) = url.changefreq {
            out.push_str(&format!("    <changefreq>{changefreq}</changefreq>\n"));
        }
        if let Some(priority) = url.priority {
            out.push_str(&format!("    <priority>{priority}</priority>\n"));
        }
        out.push_str("  </url>\n");
    }
    out.push_str("</urlset>\n");
    out
}

/// Urlset of the static marketing pages for a locale.
#[must_use]
pub fn static_urlset(site_url: &str, locale_name: &str) -> String {
    let urls: Vec<SitemapUrl> = STATIC_PAGES
        .iter()
        .map(|page| SitemapUrl {
            loc: page_url(site_url, locale_name, page.path),
            lastmod: None,
            changefreq: Some(page.changefreq),
            priority: Some(page.priority),
        })
        .collect();
    urlset(&urls)
}

/// Urlset entries for a page of blog posts.
#[must_use]
pub fn blog_urls(site_url: &str, locale_name: &str, posts: &[BlogPost]) -> Vec<SitemapUrl> {
    posts
        .iter()
        .map(|post| SitemapUrl {
            loc: page_url(site_url, locale_name, &format!("blog/{}", post.slug)),
            lastmod: post
                .updated_at
                .as_deref()
                .and_then(w3c_date)
                .or_else(|| w3c_date(&post.date)),
            changefreq: Some("weekly"),
            priority: Some("0.7"),
        })
        .collect()
}

/// Urlset entries for a page of app-store apps.
#[must_use]
pub fn app_urls(site_url: &str, locale_name: &str, apps: &[App]) -> Vec<SitemapUrl> {
    apps.iter()
        .map(|app| SitemapUrl {
            loc: page_url(site_url, locale_name, &format!("app-store/{}", app.slug)),
            lastmod: app.updated_at.as_deref().and_then(w3c_date),
            changefreq: Some("weekly"),
            priority: Some("0.6"),
        })
        .collect()
}

fn push_index_entry(out: &mut String, loc: &str, lastmod: &str) {
    out.push_str("  <sitemap>\n");
    out.push_str(&format!("    <loc>{}</loc>\n", escape_xml(loc)));
    out.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
    out.push_str("  </sitemap>\n");
}
