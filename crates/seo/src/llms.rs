//! `llms.txt` generation
//!
//! A plain-text site guide for LLM crawlers, following the llms.txt
//! convention: what the site is, where the important pages live, and
//! where the machine-readable surfaces are.

use crate::static_pages::page_url;
use flowxtra_core::locale;

/// Build the `llms.txt` document for the configured site origin.
#[must_use]
pub fn llms_txt(site_url: &str) -> String {
    let base = site_url.trim_end_matches('/');
    let mut out = String::with_capacity(2048);

    out.push_str("# Flowxtra\n\n");
    out.push_str("> Flowxtra is a SaaS recruiting platform: applicant tracking, job multiposting, an integration app store and hiring analytics for growing teams.\n\n");

    out.push_str("## Key pages\n\n");
    for (label, path) in [
        ("Home", ""),
        ("Pricing", "pricing"),
        ("Blog", "blog"),
        ("App Store", "app-store"),
        ("Affiliate program", "affiliate"),
        ("Contact", "contact-us"),
    ] {
        out.push_str(&format!(
            "- [{label}]({})\n",
            page_url(base, locale::DEFAULT_LOCALE, path)
        ));
    }

    out.push_str("\n## Locales\n\n");
    let locales: Vec<&str> = locale::supported_locales().collect();
    out.push_str(&format!(
        "Content is served under locale prefixes: {}.\n",
        locales.join(", ")
    ));
    out.push_str(&format!(
        "Regional variants fall back to their base language and finally to {}.\n",
        locale::DEFAULT_LOCALE
    ));

    out.push_str("\n## Machine-readable surfaces\n\n");
    out.push_str(&format!("- Sitemap index: {base}/sitemap.xml\n"));
    out.push_str(&format!("- Flat sitemap: {base}/sitemap-all.xml\n"));
    for l in locale::BASE_LOCALES {
        out.push_str(&format!("- RSS feed ({l}): {base}/feed/{l}.xml\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llms_txt_lists_surfaces() {
        let txt = llms_txt("https://flowxtra.com/");
        assert!(txt.starts_with("# Flowxtra"));
        assert!(txt.contains("https://flowxtra.com/en/pricing"));
        assert!(txt.contains("https://flowxtra.com/sitemap.xml"));
        assert!(txt.contains("https://flowxtra.com/feed/ar.xml"));
        // No double slashes from a trailing-slash site URL.
        assert!(!txt.contains("com//"));
    }
}
