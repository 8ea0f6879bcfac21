//! `fx-seo feed` - print a locale's RSS feed

use anyhow::Context;
use flowxtra_api_client::BackendClient;
use flowxtra_core::locale;
use flowxtra_seo::feed::rss_feed;

pub async fn run(raw_locale: &str, limit: u32) -> anyhow::Result<()> {
    let l = locale::require_supported(raw_locale)?;

    let client = BackendClient::new().context("failed to build backend client")?;
    let localized = client
        .blog()
        .list_with_fallback(l, 1, limit)
        .await
        .context("post fetch failed")?;

    let posts: Vec<_> = localized.posts.into_iter().take(limit as usize).collect();
    let xml = rss_feed(&client.config().site_url, l, &posts);
    println!("{xml}");

    if localized.served_locale != l {
        eprintln!("note: content served from fallback locale {}", localized.served_locale);
    }

    Ok(())
}
