//! XML text utilities for sitemap and feed generation
//!
//! Backend content arrives HTML-entity-encoded, sometimes more than once
//! (editor paste -> CMS save -> API serialization each add a layer). Feeds
//! must fully decode it before wrapping in CDATA, while plain-text XML
//! fields need the opposite treatment.

use once_cell::sync::Lazy;
use regex::Regex;

/// Upper bound on decode passes for multiply-encoded content.
const MAX_DECODE_PASSES: usize = 20;

static NUMERIC_ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&#(x[0-9a-fA-F]{1,6}|[0-9]{1,7});").expect("valid regex"));

/// Escape a plain-text string for use in an XML element or attribute.
///
/// `&` is escaped first so already-escaped output never double-escapes
/// entity introducers out of order.
#[must_use]
pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Decode HTML entities, repeating until a fixed point.
///
/// Handles the named entities the CMS emits plus numeric character
/// references (`&#8211;`, `&#x2014;`). Capped at 20 passes so pathological
/// input cannot spin; real content settles in one or two.
#[must_use]
pub fn decode_html_entities(input: &str) -> String {
    let mut current = input.to_string();

    for _ in 0..MAX_DECODE_PASSES {
        let decoded = decode_pass(&current);
        if decoded == current {
            break;
        }
        current = decoded;
    }

    current
}

/// Single decode pass. `&amp;` is decoded last so a layer of
/// double-encoding (`&amp;lt;`) resolves across passes, not within one.
fn decode_pass(input: &str) -> String {
    let step = NUMERIC_ENTITY.replace_all(input, |caps: &regex::Captures<'_>| {
        let body = &caps[1];
        let parsed = if let Some(hex) = body.strip_prefix('x') {
            u32::from_str_radix(hex, 16)
        } else {
            body.parse::<u32>()
        };
        match parsed.ok().and_then(char::from_u32) {
            Some(c) => c.to_string(),
            // Invalid code point: leave the reference as written.
            None => caps[0].to_string(),
        }
    });

    step.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

/// Wrap content in a CDATA section, splitting embedded `]]>` terminators
/// so the section stays well-formed.
#[must_use]
pub fn cdata(input: &str) -> String {
    format!("<![CDATA[{}]]>", input.replace("]]>", "]]]]><![CDATA[>"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn unescape(s: &str) -> String {
        s.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&apos;", "'")
            .replace("&amp;", "&")
    }

    #[test]
    fn test_escape_covers_all_specials() {
        assert_eq!(
            escape_xml(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &apos;Jerry&apos;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_decode_single_layer() {
        assert_eq!(
            decode_html_entities("&lt;p&gt;Hiring &amp; growth&lt;/p&gt;"),
            "<p>Hiring & growth</p>"
        );
    }

    #[test]
    fn test_decode_double_encoded() {
        // &amp;lt; -> &lt; -> <
        assert_eq!(decode_html_entities("&amp;lt;p&amp;gt;"), "<p>");
        assert_eq!(decode_html_entities("&amp;amp;amp;"), "&");
    }

    #[test]
    fn test_decode_numeric_entities() {
        assert_eq!(decode_html_entities("caf&#233;"), "café");
        assert_eq!(decode_html_entities("em&#x2014;dash"), "em—dash");
        assert_eq!(decode_html_entities("&#39;quoted&#39;"), "'quoted'");
    }

    #[test]
    fn test_decode_leaves_invalid_reference() {
        assert_eq!(decode_html_entities("&#1114112;"), "&#1114112;");
    }

    #[test]
    fn test_cdata_splits_terminator() {
        assert_eq!(cdata("plain"), "<![CDATA[plain]]>");
        let wrapped = cdata("a]]>b");
        assert_eq!(wrapped, "<![CDATA[a]]]]><![CDATA[>b]]>");
    }

    proptest! {
        #[test]
        fn prop_escape_roundtrips_for_entity_free_input(s in "[^&]*") {
            prop_assert_eq!(unescape(&escape_xml(&s)), s);
        }

        #[test]
        fn prop_escaped_output_has_no_raw_specials(s in ".*") {
            let escaped = escape_xml(&s);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
            prop_assert!(!escaped.contains('"'));
        }

        #[test]
        fn prop_decode_is_idempotent(s in ".*") {
            let once = decode_html_entities(&s);
            prop_assert_eq!(decode_html_entities(&once), once);
        }
    }
}
