//! Backend API client for the Flowxtra edge services
//!
//! Resolves the backend origin from the environment (with a localhost
//! safety guard outside development), and exposes typed endpoint wrappers
//! for the content the marketing site renders: blog posts, app-store
//! entries, privacy policies, form submissions and health checks.
//!
//! Every locale parameter is normalized to a base locale before a request
//! is made, and listing calls can walk the content fallback chain
//! (exact -> regional base -> English).
//!
//! # Example
//!
//! ```rust,no_run
//! use flowxtra_api_client::BackendClient;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let client = BackendClient::new()?;
//! let page = client.blog().list("en-au", 1, 20).await?;
//! println!("{} posts", page.data.len());
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;

pub use client::{BackendClient, ProxyOutcome};
pub use config::{ClientConfig, Environment};
pub use error::{ApiError, ApiResult};
