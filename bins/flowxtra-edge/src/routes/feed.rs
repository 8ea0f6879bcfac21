//! RSS feed route handlers
//!
//! `/feed/{locale}.xml` with the extension optional, plus the bare `/feed`
//! catch-all serving the default locale. Backend failures degrade to the
//! empty-but-valid skeleton.

use crate::error::EdgeError;
use crate::routes::rss_response;
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::Response;
use flowxtra_core::locale;
use flowxtra_seo::feed::{rss_feed, FEED_POST_LIMIT};
use tracing::error;

/// GET /feed
pub async fn default_feed(State(state): State<AppState>) -> Response {
    serve_feed(&state, locale::DEFAULT_LOCALE).await
}

/// GET /feed/:locale (`.xml` extension optional)
pub async fn locale_feed(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Response, EdgeError> {
    let name = raw.trim_end_matches(".xml");
    let l = locale::require_supported(name)?;
    Ok(serve_feed(&state, l).await)
}

async fn serve_feed(state: &AppState, l: &str) -> Response {
    let posts = match state.client.blog().list_with_fallback(l, 1, FEED_POST_LIMIT).await {
        Ok(localized) => localized.posts,
        Err(err) => {
            error!(locale = l, error = %err, "feed fetch failed, serving empty skeleton");
            Vec::new()
        }
    };

    let latest: Vec<_> = posts.into_iter().take(FEED_POST_LIMIT as usize).collect();
    rss_response(rss_feed(&state.config.site_url, l, &latest))
}
