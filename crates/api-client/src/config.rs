//! Configuration for the Flowxtra backend client
//!
//! Environment-based, resolved once at startup. The backend origin follows
//! a strict priority chain, and localhost values are rejected outside of
//! development so a stale `.env` can never point production traffic at a
//! developer machine.

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::{info, warn};

/// Hardcoded production backend, the last link of the resolution chain.
pub const PRODUCTION_BACKEND_URL: &str = "https://api.flowxtra.com";

/// Public site origin used in generated sitemap/feed URLs.
pub const DEFAULT_SITE_URL: &str = "https://flowxtra.com";

/// Environment types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (localhost backends allowed)
    Development,
    /// Staging environment
    Staging,
    /// Production environment
    Production,
}

impl Default for Environment {
    fn default() -> Self {
        Self::Production
    }
}

impl Environment {
    /// Parse from environment variables (`FLOWXTRA_ENV`, falling back to
    /// `NODE_ENV` for parity with the site's deployment config).
    pub fn from_env() -> Self {
        let raw = env::var("FLOWXTRA_ENV")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_default();
        match raw.to_lowercase().as_str() {
            "development" | "dev" | "local" => Self::Development,
            "staging" | "stage" => Self::Staging,
            _ => Self::Production,
        }
    }

    /// Whether this is a development environment
    #[must_use]
    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Resolved backend origin (scheme-prefixed, no trailing `/api`)
    pub backend_url: String,
    /// Public site origin for generated URLs
    pub site_url: String,
    /// Whether reCAPTCHA verification is enabled on form proxies
    pub recaptcha_enabled: bool,
    /// reCAPTCHA site key, when enabled
    pub recaptcha_site_key: Option<String>,
    /// Upstream request timeout
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
    /// Current environment
    pub environment: Environment,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: PRODUCTION_BACKEND_URL.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            recaptcha_enabled: false,
            recaptcha_site_key: None,
            timeout: Duration::from_secs(30),
            environment: Environment::default(),
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `NEXT_PUBLIC_BACKEND_URL` / `NEXT_PUBLIC_API_URL`: backend origin
    ///   candidates, in priority order
    /// - `NEXT_PUBLIC_SITE_URL`: public site origin
    /// - `NEXT_PUBLIC_RECAPTCHA_ENABLED` / `NEXT_PUBLIC_RECAPTCHA_SITE_KEY`
    /// - `FLOWXTRA_ENV` (fallback `NODE_ENV`): environment
    /// - `FLOWXTRA_TIMEOUT_SECS`: upstream timeout in seconds
    pub fn from_env() -> ApiResult<Self> {
        let environment = Environment::from_env();

        let backend_url = resolve_backend_url(environment);

        let site_url = env::var("NEXT_PUBLIC_SITE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(|s| ensure_scheme(s.trim_end_matches('/')))
            .unwrap_or_else(|| DEFAULT_SITE_URL.to_string());

        let recaptcha_enabled = env::var("NEXT_PUBLIC_RECAPTCHA_ENABLED")
            .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
            .unwrap_or(false);

        let recaptcha_site_key = env::var("NEXT_PUBLIC_RECAPTCHA_SITE_KEY")
            .ok()
            .filter(|s| !s.is_empty());

        let timeout = env::var("FLOWXTRA_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));

        Ok(Self {
            backend_url,
            site_url,
            recaptcha_enabled,
            recaptcha_site_key,
            timeout,
            environment,
        })
    }

    /// Create development configuration (local backend)
    #[must_use]
    pub fn development() -> Self {
        Self {
            backend_url: "http://localhost:4000".to_string(),
            site_url: "http://localhost:3000".to_string(),
            recaptcha_enabled: false,
            recaptcha_site_key: None,
            timeout: Duration::from_secs(10),
            environment: Environment::Development,
        }
    }

    /// Builder-style method to set the backend URL
    #[must_use]
    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = normalize_backend_origin(&url.into());
        self
    }

    /// Builder-style method to set the site URL
    #[must_use]
    pub fn with_site_url(mut self, url: impl Into<String>) -> Self {
        self.site_url = url.into();
        self
    }

    /// Builder-style method to set the environment
    #[must_use]
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Builder-style method to set the timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        for (name, url) in [("backend_url", &self.backend_url), ("site_url", &self.site_url)] {
            if url.is_empty() {
                return Err(ApiError::config(format!("{name} cannot be empty")));
            }
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ApiError::config(format!(
                    "{name} must start with http:// or https://"
                )));
            }
        }

        if self.timeout.is_zero() {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        Ok(())
    }

    /// Whether the resolved backend still points at localhost. Proxy routes
    /// refuse to forward in this state outside of development.
    #[must_use]
    pub fn backend_is_localhost(&self) -> bool {
        is_localhost(&self.backend_url)
    }
}

/// Resolve the backend origin from the process environment.
///
/// Priority: `NEXT_PUBLIC_BACKEND_URL` (if not localhost) ->
/// `NEXT_PUBLIC_API_URL` (if not localhost) -> [`PRODUCTION_BACKEND_URL`].
/// In development the localhost filter is relaxed.
#[must_use]
pub fn resolve_backend_url(environment: Environment) -> String {
    let backend = env::var("NEXT_PUBLIC_BACKEND_URL").ok();
    let api = env::var("NEXT_PUBLIC_API_URL").ok();
    resolve_backend_url_from(backend.as_deref(), api.as_deref(), environment)
}

/// Pure resolution over candidate values, separated from `std::env` so the
/// priority chain is unit-testable.
#[must_use]
pub fn resolve_backend_url_from(
    backend_url: Option<&str>,
    api_url: Option<&str>,
    environment: Environment,
) -> String {
    let candidates = [
        ("NEXT_PUBLIC_BACKEND_URL", backend_url),
        ("NEXT_PUBLIC_API_URL", api_url),
    ];

    for (source, value) in candidates {
        let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            continue;
        };

        let candidate = normalize_backend_origin(raw);

        if is_localhost(&candidate) && !environment.is_development() {
            warn!(source, url = %candidate, "skipping localhost backend URL outside development");
            continue;
        }

        info!(source, url = %candidate, "resolved backend URL");
        return candidate;
    }

    info!(url = PRODUCTION_BACKEND_URL, "resolved backend URL from production fallback");
    PRODUCTION_BACKEND_URL.to_string()
}

/// Normalize a raw backend origin: ensure an `http(s)://` prefix, drop any
/// trailing slash, and strip a trailing `/api` segment (the client appends
/// `api/...` paths itself).
#[must_use]
pub fn normalize_backend_origin(raw: &str) -> String {
    let with_scheme = ensure_scheme(raw.trim());
    let trimmed = with_scheme.trim_end_matches('/');
    trimmed.strip_suffix("/api").unwrap_or(trimmed).to_string()
}

fn ensure_scheme(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// Check whether a URL points at a local backend.
#[must_use]
pub fn is_localhost(url: &str) -> bool {
    url.contains("localhost") || url.contains("127.0.0.1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.backend_url, PRODUCTION_BACKEND_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_resolution_priority() {
        let url = resolve_backend_url_from(
            Some("https://backend.flowxtra.com"),
            Some("https://api-legacy.flowxtra.com"),
            Environment::Production,
        );
        assert_eq!(url, "https://backend.flowxtra.com");

        let url = resolve_backend_url_from(
            None,
            Some("https://api-legacy.flowxtra.com"),
            Environment::Production,
        );
        assert_eq!(url, "https://api-legacy.flowxtra.com");

        let url = resolve_backend_url_from(None, None, Environment::Production);
        assert_eq!(url, PRODUCTION_BACKEND_URL);
    }

    #[test]
    fn test_localhost_rejected_outside_development() {
        let url = resolve_backend_url_from(
            Some("http://localhost:4000"),
            None,
            Environment::Production,
        );
        assert_eq!(url, PRODUCTION_BACKEND_URL);
        assert!(!is_localhost(&url));

        let url = resolve_backend_url_from(
            Some("http://localhost:4000"),
            Some("http://127.0.0.1:4000"),
            Environment::Staging,
        );
        assert_eq!(url, PRODUCTION_BACKEND_URL);
    }

    #[test]
    fn test_localhost_honored_in_development() {
        let url = resolve_backend_url_from(
            Some("http://localhost:4000"),
            None,
            Environment::Development,
        );
        assert_eq!(url, "http://localhost:4000");
    }

    #[test]
    fn test_localhost_second_candidate_wins_over_fallback() {
        let url = resolve_backend_url_from(
            Some("http://localhost:4000"),
            Some("https://api-legacy.flowxtra.com"),
            Environment::Production,
        );
        assert_eq!(url, "https://api-legacy.flowxtra.com");
    }

    #[test]
    fn test_normalize_backend_origin() {
        assert_eq!(
            normalize_backend_origin("https://api.flowxtra.com/api"),
            "https://api.flowxtra.com"
        );
        assert_eq!(
            normalize_backend_origin("https://api.flowxtra.com/api/"),
            "https://api.flowxtra.com"
        );
        assert_eq!(
            normalize_backend_origin("api.flowxtra.com"),
            "https://api.flowxtra.com"
        );
        assert_eq!(
            normalize_backend_origin("http://localhost:4000/"),
            "http://localhost:4000"
        );
    }

    #[test]
    fn test_validation_rejects_bad_urls() {
        let config = ClientConfig::default().with_site_url("flowxtra.com");
        assert!(config.validate().is_err());

        let mut config = ClientConfig::default();
        config.timeout = Duration::ZERO;
        assert!(config.validate().is_err());
    }
}
