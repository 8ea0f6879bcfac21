//! Locale model shared by every locale-parameterized surface
//!
//! The backend stores content under *base* locales only. The site serves
//! regional *variants* (`en-au`, `de-ch`, ...) which must be normalized
//! before any API call, and content lookups walk a fallback chain so a
//! locale with no content degrades to its regional base and finally to
//! English.
//!
//! Everything here is pure and table-driven; routes, sitemap sweeps and
//! feed builders all go through this one module instead of reimplementing
//! the policy inline.

use thiserror::Error;

/// Base locales the backend stores content under.
pub const BASE_LOCALES: [&str; 7] = ["en", "de", "fr", "es", "it", "nl", "ar"];

/// Regional variants served by the site. Each maps to exactly one base.
pub const VARIANT_LOCALES: [&str; 6] = ["en-us", "en-gb", "en-au", "en-ca", "de-at", "de-ch"];

/// Terminal locale of every fallback chain.
pub const DEFAULT_LOCALE: &str = "en";

/// A locale string that is neither a base locale nor a known variant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unsupported locale: {0}")]
pub struct UnsupportedLocale(pub String);

/// Iterate all supported locales (bases first, then variants).
pub fn supported_locales() -> impl Iterator<Item = &'static str> {
    BASE_LOCALES.iter().copied().chain(VARIANT_LOCALES.iter().copied())
}

/// Check whether a locale is supported. Case-insensitive.
#[must_use]
pub fn is_supported(locale: &str) -> bool {
    canonical(locale).is_some()
}

/// Check whether a locale is a base locale. Case-insensitive.
#[must_use]
pub fn is_base(locale: &str) -> bool {
    let lower = locale.to_ascii_lowercase();
    BASE_LOCALES.contains(&lower.as_str())
}

/// Check whether a locale is a regional variant. Case-insensitive.
#[must_use]
pub fn is_variant(locale: &str) -> bool {
    let lower = locale.to_ascii_lowercase();
    VARIANT_LOCALES.contains(&lower.as_str())
}

/// Resolve a locale to its canonical static form, or `None` if unsupported.
#[must_use]
pub fn canonical(locale: &str) -> Option<&'static str> {
    let lower = locale.to_ascii_lowercase();
    supported_locales().find(|l| *l == lower)
}

/// Guard used by locale-parameterized routes.
///
/// Returns the canonical form so downstream code can hold a `&'static str`
/// instead of re-validating.
pub fn require_supported(locale: &str) -> Result<&'static str, UnsupportedLocale> {
    canonical(locale).ok_or_else(|| UnsupportedLocale(locale.to_string()))
}

/// Normalize a locale for backend API calls by stripping the regional
/// suffix: `en-au -> en`, `de-ch -> de`.
///
/// Total over arbitrary input: unknown languages collapse to
/// [`DEFAULT_LOCALE`]. Idempotent, and always lands in [`BASE_LOCALES`].
#[must_use]
pub fn normalize_for_api(locale: &str) -> &'static str {
    let lower = locale.to_ascii_lowercase();
    let language = lower.split('-').next().unwrap_or(DEFAULT_LOCALE);
    BASE_LOCALES
        .iter()
        .copied()
        .find(|base| *base == language)
        .unwrap_or(DEFAULT_LOCALE)
}

/// Content-fallback chain for a locale: exact -> regional base -> English.
///
/// Duplicates are collapsed, so the chain for `en` is just `["en"]` and the
/// chain for `de-at` is `["de-at", "de", "en"]`. Always terminates at
/// [`DEFAULT_LOCALE`].
#[must_use]
pub fn fallback_chain(locale: &str) -> Vec<&'static str> {
    let mut chain = Vec::with_capacity(3);

    if let Some(exact) = canonical(locale) {
        chain.push(exact);
    }

    let base = normalize_for_api(locale);
    if !chain.contains(&base) {
        chain.push(base);
    }

    if !chain.contains(&DEFAULT_LOCALE) {
        chain.push(DEFAULT_LOCALE);
    }

    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_variants_normalize_to_their_base() {
        assert_eq!(normalize_for_api("en-au"), "en");
        assert_eq!(normalize_for_api("en-gb"), "en");
        assert_eq!(normalize_for_api("de-ch"), "de");
        assert_eq!(normalize_for_api("de-at"), "de");
    }

    #[test]
    fn test_normalize_is_case_insensitive() {
        assert_eq!(normalize_for_api("EN-AU"), "en");
        assert_eq!(normalize_for_api("De-Ch"), "de");
    }

    #[test]
    fn test_unknown_language_collapses_to_default() {
        assert_eq!(normalize_for_api("pt-br"), "en");
        assert_eq!(normalize_for_api(""), "en");
    }

    #[test]
    fn test_every_variant_has_exactly_one_base() {
        for variant in VARIANT_LOCALES {
            let base = normalize_for_api(variant);
            assert!(BASE_LOCALES.contains(&base), "{variant} -> {base}");
        }
    }

    #[test]
    fn test_supported_guard() {
        assert_eq!(require_supported("en-AU"), Ok("en-au"));
        assert_eq!(require_supported("ar"), Ok("ar"));
        assert_eq!(
            require_supported("xx"),
            Err(UnsupportedLocale("xx".to_string()))
        );
    }

    #[test]
    fn test_fallback_chain_shapes() {
        assert_eq!(fallback_chain("en"), vec!["en"]);
        assert_eq!(fallback_chain("de"), vec!["de", "en"]);
        assert_eq!(fallback_chain("de-at"), vec!["de-at", "de", "en"]);
        assert_eq!(fallback_chain("en-ca"), vec!["en-ca", "en"]);
        // Unsupported locales still get a usable chain.
        assert_eq!(fallback_chain("pt-br"), vec!["en"]);
    }

    proptest! {
        #[test]
        fn prop_normalize_lands_in_base_set(locale in "[a-z]{2}(-[a-z]{2})?") {
            let base = normalize_for_api(&locale);
            prop_assert!(BASE_LOCALES.contains(&base));
        }

        #[test]
        fn prop_normalize_is_idempotent(locale in "[a-zA-Z]{2}(-[a-zA-Z]{2})?") {
            let once = normalize_for_api(&locale);
            prop_assert_eq!(normalize_for_api(once), once);
        }

        #[test]
        fn prop_fallback_terminates_at_default(locale in "[a-zA-Z]{2}(-[a-zA-Z]{2})?") {
            let chain = fallback_chain(&locale);
            prop_assert_eq!(chain.last().copied(), Some(DEFAULT_LOCALE));
            prop_assert!(chain.len() <= 3);
            // No duplicates means no loops.
            for (i, l) in chain.iter().enumerate() {
                prop_assert!(!chain[i + 1..].contains(l));
            }
        }
    }
}
