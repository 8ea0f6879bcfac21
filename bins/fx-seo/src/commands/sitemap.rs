//! `fx-seo sitemap` - print sitemap documents

use anyhow::Context;
use flowxtra_api_client::BackendClient;
use flowxtra_core::locale;
use flowxtra_seo::{sitemap, sweep};

pub async fn run(locale_arg: Option<&str>, all: bool) -> anyhow::Result<()> {
    let client = BackendClient::new().context("failed to build backend client")?;
    let site_url = client.config().site_url.clone();

    if all {
        let xml = sweep::sitemap_all(&client, &site_url).await;
        println!("{xml}");
        return Ok(());
    }

    let Some(raw) = locale_arg else {
        println!("{}", sitemap::sitemap_index(&site_url));
        return Ok(());
    };

    let l = locale::require_supported(raw)?;
    let (total_posts, total_apps) = if locale::is_base(l) {
        (
            client.blog().total(l).await.context("post count fetch failed")?,
            client.app_store().total(l).await.context("app count fetch failed")?,
        )
    } else {
        (0, 0)
    };

    println!("{}", sitemap::locale_index(&site_url, l, total_posts, total_apps));
    Ok(())
}
