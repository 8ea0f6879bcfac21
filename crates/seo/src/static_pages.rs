//! Static marketing routes included in every locale's sitemap

/// One static marketing page
#[derive(Debug, Clone, Copy)]
pub struct StaticPage {
    /// Path under the locale prefix; empty string is the locale home
    pub path: &'static str,
    /// Suggested crawl frequency
    pub changefreq: &'static str,
    /// Crawl priority hint
    pub priority: &'static str,
}

/// Static pages of the marketing site, highest priority first.
pub const STATIC_PAGES: [StaticPage; 11] = [
    StaticPage { path: "", changefreq: "daily", priority: "1.0" },
    StaticPage { path: "pricing", changefreq: "weekly", priority: "0.9" },
    StaticPage { path: "app-store", changefreq: "weekly", priority: "0.9" },
    StaticPage { path: "blog", changefreq: "daily", priority: "0.8" },
    StaticPage { path: "affiliate", changefreq: "monthly", priority: "0.7" },
    StaticPage { path: "about-us", changefreq: "monthly", priority: "0.6" },
    StaticPage { path: "contact-us", changefreq: "monthly", priority: "0.6" },
    StaticPage { path: "accessibility", changefreq: "yearly", priority: "0.4" },
    StaticPage { path: "privacy-policy", changefreq: "yearly", priority: "0.3" },
    StaticPage { path: "terms-conditions", changefreq: "yearly", priority: "0.3" },
    StaticPage { path: "cookie-policy", changefreq: "yearly", priority: "0.3" },
];

/// Build the absolute URL of a page under a locale prefix.
#[must_use]
pub fn page_url(site_url: &str, locale: &str, path: &str) -> String {
    let base = site_url.trim_end_matches('/');
    if path.is_empty() {
        format!("{base}/{locale}")
    } else {
        format!("{base}/{locale}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url_shapes() {
        assert_eq!(page_url("https://flowxtra.com", "en", ""), "https://flowxtra.com/en");
        assert_eq!(
            page_url("https://flowxtra.com/", "de-ch", "pricing"),
            "https://flowxtra.com/de-ch/pricing"
        );
    }
}
