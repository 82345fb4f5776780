//! # paged-rest
//!
//! A generic async client for paginated REST resources.
//!
//! Given one or more endpoint paths on a fixed host, the client resolves
//! them to full URLs, attaches a canonical query string, keeps every
//! request URL under a server-imposed length ceiling, and retrieves all
//! requested pages — concurrently when the page count is known, by
//! following continuation markers when it is not. Results always come back
//! in the order the caller asked for them, regardless of which request
//! completed first.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use paged_rest::{ClientConfig, GetOptions, Params, RestApi};
//!
//! struct AirQualityApi {
//!     config: ClientConfig,
//!     http: reqwest::Client,
//! }
//!
//! impl RestApi for AirQualityApi {
//!     fn config(&self) -> &ClientConfig {
//!         &self.config
//!     }
//!     fn http(&self) -> &reqwest::Client {
//!         &self.http
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> paged_rest::Result<()> {
//!     let config = ClientConfig::builder()
//!         .host("https://api.openaq.org/v1/")
//!         .header("Content-Type", "application/json")
//!         .build()?;
//!     let http = config.build_http_client()?;
//!     let api = AirQualityApi { config, http };
//!
//!     // Five pages, fetched concurrently, returned in page order.
//!     let pages = api
//!         .get(
//!             "cities",
//!             GetOptions::new()
//!                 .params(Params::new().set("country", "CA"))
//!                 .total_pages(5),
//!         )
//!         .await?;
//!
//!     for page in &pages {
//!         println!("{}", page.text());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! RestApi::get ─→ Params::encode ─→ split_url ─→ BatchFetcher ─→ Vec<ApiResponse>
//!   (dispatch)     (canonical query)  (length guard)  (bounded fan-out,
//!                                                      input-order results)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

/// Error types
pub mod error;

/// Client configuration
pub mod config;

/// Query construction and URL length guarding
pub mod query;

/// HTTP execution and batch fetching
pub mod http;

/// Continuation-marker pagination
pub mod pagination;

/// The client trait and request orchestration
pub mod client;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{Endpoints, GetOptions, RestApi};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, Result};
pub use http::{ApiResponse, BatchFetcher};
pub use query::{split_url, Params, DEFAULT_MAX_URL_LEN};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
