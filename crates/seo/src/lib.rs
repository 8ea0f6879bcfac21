//! SEO document generation for the Flowxtra marketing site
//!
//! Builders for the crawl surface the edge serves:
//!
//! - **Sitemaps**: root index, per-locale indexes, static/content urlsets,
//!   and the flat all-URLs document with its capped backend sweep
//! - **RSS feeds**: per-locale RSS 2.0 with entity-decoded CDATA bodies
//! - **llms.txt**: plain-text site guide for LLM crawlers
//!
//! Document builders are pure functions over fetched DTOs; only the
//! sweeps in [`sweep`] talk to the backend. All of them degrade to
//! empty-but-well-formed output rather than erroring, so crawlers never
//! receive a broken response.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod dates;
pub mod feed;
pub mod llms;
pub mod sitemap;
pub mod static_pages;
pub mod sweep;

pub use feed::{rss_feed, FEED_POST_LIMIT};
pub use llms::llms_txt;
pub use sitemap::{page_count, sitemap_index, urlset, SitemapUrl, URLS_PER_SITEMAP};
pub use sweep::{sitemap_all, MAX_PAGES_PER_LOCALE};
