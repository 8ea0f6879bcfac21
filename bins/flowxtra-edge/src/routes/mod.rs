//! Route handlers for the edge server

pub mod feed;
pub mod meta;
pub mod proxy;
pub mod sitemap;

use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};

/// Build a response with an explicit content type.
pub fn typed_response(body: String, content_type: &'static str) -> Response {
    ([(CONTENT_TYPE, content_type)], body).into_response()
}

/// XML response (sitemaps).
pub fn xml_response(body: String) -> Response {
    typed_response(body, "application/xml; charset=utf-8")
}

/// RSS response (feeds).
pub fn rss_response(body: String) -> Response {
    typed_response(body, "application/rss+xml; charset=utf-8")
}

/// Plain-text response (llms.txt, robots.txt).
pub fn text_response(body: String) -> Response {
    typed_response(body, "text/plain; charset=utf-8")
}
