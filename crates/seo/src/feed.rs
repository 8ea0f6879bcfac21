//! RSS 2.0 feed builder
//!
//! One feed per locale, latest 20 posts. Plain-text fields are XML-escaped;
//! post bodies arrive HTML-entity-encoded (sometimes repeatedly) and are
//! fully decoded before being wrapped in CDATA for `content:encoded`.
//! An empty post list still yields a valid skeleton so crawlers never see
//! a broken document.

use crate::dates::rfc2822_date;
use crate::static_pages::page_url;
use chrono::Utc;
use flowxtra_api_client::endpoints::BlogPost;
use flowxtra_core::xml::{cdata, decode_html_entities, escape_xml};

/// Posts per feed.
pub const FEED_POST_LIMIT: u32 = 20;

/// Build the RSS 2.0 document for a locale.
#[must_use]
pub fn rss_feed(site_url: &str, locale_name: &str, posts: &[BlogPost]) -> String {
    let base = site_url.trim_end_matches('/');
    let blog_url = page_url(site_url, locale_name, "blog");
    let self_url = format!("{base}/feed/{locale_name}.xml");

    let mut out = String::with_capacity(1024 + posts.len() * 512);
    out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    out.push('\n');
    out.push_str(
        r#"<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:atom="http://www.w3.org/2005/Atom">"#,
    );
    out.push_str("\n<channel>\n");
    out.push_str("  <title>Flowxtra Blog</title>\n");
    out.push_str(&format!("  <link>{}</link>\n", escape_xml(&blog_url)));
    out.push_str("  <description>Recruiting insights, product updates and hiring guides from Flowxtra.</description>\n");
    out.push_str(&format!("  <language>{}</language>\n", escape_xml(locale_name)));
    out.push_str(&format!("  <lastBuildDate>{}</lastBuildDate>\n", Utc::now().to_rfc2822()));
    out.push_str(&format!(
        "  <atom:link href=\"{}\" rel=\"self\" type=\"application/rss+xml\"/>\n",
        escape_xml(&self_url)
    ));

    for post in posts {
        push_item(&mut out, site_url, locale_name, post);
    }

    out.push_str("</channel>\n</rss>\n");
    out
}

fn push_item(out: &mut String, site_url: &str, locale_name: &str, post: &BlogPost) {
    let link = page_url(site_url, locale_name, &format!("blog/{}", post.slug));

    out.push_str("  <item>\n");
    out.push_str(&format!("    <title>{}</title>\n", escape_xml(&post.title)));
    out.push_str(&format!("    <link>{}</link>\n", escape_xml(&link)));
    out.push_str(&format!(
        "    <guid isPermaLink=\"true\">{}</guid>\n",
        escape_xml(&link)
    ));

    if let Some(pub_date) = rfc2822_date(&post.date) {
        out.push_str(&format!("    <pubDate>{pub_date}</pubDate>\n"));
    }

    if let Some(excerpt) = &post.excerpt {
        out.push_str(&format!(
            "    <description>{}</description>\n",
            escape_xml(&decode_html_entities(excerpt))
        ));
    }

    if let Some(category) = &post.category {
        out.push_str(&format!("    <category>{}</category>\n", escape_xml(category)));
    }

    if let Some(author) = &post.author {
        out.push_str(&format!("    <dc:creator>{}</dc:creator>\n", escape_xml(&author.name)));
    }

    // Full body goes out as CDATA after entity decoding; the excerpt
    // stands in when the backend omits the body from list responses.
    let body = post.content.as_deref().or(post.excerpt.as_deref());
    if let Some(body) = body {
        out.push_str(&format!(
            "    <content:encoded>{}</content:encoded>\n",
            cdata(&decode_html_entities(body))
        ));
    }

    if let Some(image) = &post.image {
        out.push_str(&format!(
            "    <enclosure url=\"{}\" type=\"{}\" length=\"0\"/>\n",
            escape_xml(image),
            mime_for_image(image)
        ));
    }

    out.push_str("  </item>\n");
}

/// Infer an enclosure MIME type from the image file extension.
#[must_use]
pub fn mime_for_image(url: &str) -> &'static str {
    let path = url.split('?').next().unwrap_or(url);
    let extension = path.rsplit('.').next().unwrap_or_default().to_ascii_lowercase();
    match extension.as_str() {
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        _ => "image/jpeg",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: &str = "https://flowxtra.com";

    fn post(slug: &str) -> BlogPost {
        BlogPost {
            id: 1,
            title: "Hiring & scaling".to_string(),
            slug: slug.to_string(),
            excerpt: Some("Why hiring &amp; onboarding matter".to_string()),
            content: Some("&lt;p&gt;Hiring &amp;amp; onboarding&lt;/p&gt;".to_string()),
            category: Some("Recruiting".to_string()),
            image: Some("https://cdn.flowxtra.com/blog/hero.webp".to_string()),
            date: "2025-03-14".to_string(),
            updated_at: None,
            reading_time: Some(4),
            available_languages: vec!["en".to_string()],
            author: None,
            tags: vec![],
        }
    }

    #[test]
    fn test_empty_feed_is_valid_skeleton() {
        let xml = rss_feed(SITE, "en", &[]);
        assert!(xml.contains("<rss version=\"2.0\""));
        assert!(xml.contains("<channel>"));
        assert!(xml.contains("</rss>"));
        assert!(!xml.contains("<item>"));
    }

    #[test]
    fn test_item_fields_are_escaped_and_decoded() {
        let xml = rss_feed(SITE, "en", &[post("hiring-and-scaling")]);
        // Title escaped for plain-text XML.
        assert!(xml.contains("<title>Hiring &amp; scaling</title>"));
        // Body decoded through both entity layers, then CDATA-wrapped.
        assert!(xml.contains("<content:encoded><![CDATA[<p>Hiring & onboarding</p>]]></content:encoded>"));
        // Description decoded once then re-escaped.
        assert!(xml.contains("<description>Why hiring &amp; onboarding matter</description>"));
        assert!(xml.contains("<pubDate>"));
        assert!(xml.contains("<link>https://flowxtra.com/en/blog/hiring-and-scaling</link>"));
    }

    #[test]
    fn test_enclosure_mime_inference() {
        let xml = rss_feed(SITE, "en", &[post("p")]);
        assert!(xml.contains("type=\"image/webp\""));

        assert_eq!(mime_for_image("a/b/c.PNG"), "image/png");
        assert_eq!(mime_for_image("a/b/c.gif?w=100"), "image/gif");
        assert_eq!(mime_for_image("a/b/photo.jpg"), "image/jpeg");
        assert_eq!(mime_for_image("no-extension"), "image/jpeg");
    }

    #[test]
    fn test_channel_self_reference() {
        let xml = rss_feed(SITE, "de-at", &[]);
        assert!(xml.contains("href=\"https://flowxtra.com/feed/de-at.xml\""));
        assert!(xml.contains("<language>de-at</language>"));
    }
}
