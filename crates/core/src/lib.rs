//! Core utilities for the Flowxtra edge services
//!
//! Shared functionality used by the API client, the SEO generators and the
//! edge server:
//!
//! - **Locale model**: supported locale tables, API normalization, content
//!   fallback chains
//! - **XML text utilities**: escaping, HTML entity decoding, CDATA wrapping
//!
//! # Example
//!
//! ```rust
//! use flowxtra_core::locale;
//!
//! assert_eq!(locale::normalize_for_api("en-AU"), "en");
//! assert_eq!(locale::fallback_chain("de-ch"), vec!["de-ch", "de", "en"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod locale;
pub mod xml;

pub use locale::UnsupportedLocale;
