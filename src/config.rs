//! Client configuration
//!
//! [`ClientConfig`] carries everything a concrete API client needs: the host
//! prefix, the default header set (auth, content type), the page query
//! parameter, the continuation marker tag, timeouts, the URL length ceiling
//! and the concurrency bound. Built through [`ClientConfigBuilder`], which
//! validates the host eagerly so a malformed host fails at construction
//! rather than on the first request.

use crate::error::{Error, Result};
use crate::query::DEFAULT_MAX_URL_LEN;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Default timeout for a single sequential request
pub const DEFAULT_SINGLE_TIMEOUT: Duration = Duration::from_secs(10);

/// Default timeout for each request inside a concurrent batch
pub const DEFAULT_BATCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Default bound on concurrently in-flight batch requests
pub const DEFAULT_MAX_CONCURRENT: usize = 32;

/// Configuration for a paged REST client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Host prefix for relative endpoints, e.g. `https://api.example.com/v1/`
    pub host: String,
    /// Default headers applied to every request (auth, content type)
    pub headers: HashMap<String, String>,
    /// Query parameter name that carries the page index or cursor
    pub page_param: String,
    /// Tag name of the continuation marker in response bodies;
    /// `None` disables page discovery
    #[serde(default = "default_page_marker")]
    pub page_marker: Option<String>,
    /// Timeout for single sequential requests
    #[serde(default = "default_single_timeout")]
    pub single_timeout: Duration,
    /// Timeout for each request inside a concurrent batch
    #[serde(default = "default_batch_timeout")]
    pub batch_timeout: Duration,
    /// Per-request URL length ceiling; `None` disables URL splitting
    #[serde(default = "default_max_url_len")]
    pub max_url_len: Option<usize>,
    /// Bound on concurrently in-flight batch requests
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,
    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_page_marker() -> Option<String> {
    Some("next-page".to_string())
}

fn default_max_url_len() -> Option<usize> {
    Some(DEFAULT_MAX_URL_LEN)
}

fn default_single_timeout() -> Duration {
    DEFAULT_SINGLE_TIMEOUT
}

fn default_batch_timeout() -> Duration {
    DEFAULT_BATCH_TIMEOUT
}

fn default_max_concurrent() -> usize {
    DEFAULT_MAX_CONCURRENT
}

fn default_user_agent() -> String {
    format!("paged-rest/{}", env!("CARGO_PKG_VERSION"))
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Build the shared HTTP client carrying this config's header set.
    ///
    /// One client is meant to be shared across all concurrent requests so
    /// connection reuse and headers stay consistent.
    pub fn build_http_client(&self) -> Result<reqwest::Client> {
        let mut headers = HeaderMap::new();
        for (key, value) in &self.headers {
            let name = HeaderName::try_from(key.as_str())
                .map_err(|e| Error::config(format!("invalid header name '{key}': {e}")))?;
            let value = HeaderValue::try_from(value.as_str())
                .map_err(|e| Error::config(format!("invalid header value for '{key}': {e}")))?;
            headers.insert(name, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(self.user_agent.as_str())
            .build()
            .map_err(Error::Http)?;

        Ok(client)
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    host: Option<String>,
    headers: HashMap<String, String>,
    page_param: Option<String>,
    page_marker: Option<String>,
    page_marker_cleared: bool,
    single_timeout: Option<Duration>,
    batch_timeout: Option<Duration>,
    max_url_len: Option<Option<usize>>,
    max_concurrent: Option<usize>,
    user_agent: Option<String>,
}

impl ClientConfigBuilder {
    /// Set the host prefix (required)
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the page query parameter name (default `page`)
    pub fn page_param(mut self, param: impl Into<String>) -> Self {
        self.page_param = Some(param.into());
        self
    }

    /// Set the continuation marker tag (default `next-page`)
    pub fn page_marker(mut self, tag: impl Into<String>) -> Self {
        self.page_marker = Some(tag.into());
        self.page_marker_cleared = false;
        self
    }

    /// Disable page discovery entirely
    pub fn no_page_marker(mut self) -> Self {
        self.page_marker = None;
        self.page_marker_cleared = true;
        self
    }

    /// Set the single-request timeout
    pub fn single_timeout(mut self, timeout: Duration) -> Self {
        self.single_timeout = Some(timeout);
        self
    }

    /// Set the per-request timeout used inside batches
    pub fn batch_timeout(mut self, timeout: Duration) -> Self {
        self.batch_timeout = Some(timeout);
        self
    }

    /// Set the URL length ceiling
    pub fn max_url_len(mut self, len: usize) -> Self {
        self.max_url_len = Some(Some(len));
        self
    }

    /// Disable URL splitting; over-length URLs are sent as-is
    pub fn no_url_split(mut self) -> Self {
        self.max_url_len = Some(None);
        self
    }

    /// Set the concurrency bound for batch fetches
    pub fn max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = Some(n);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build and validate the config.
    ///
    /// Fails if the host is missing or does not parse as an absolute URL.
    pub fn build(self) -> Result<ClientConfig> {
        let host = self.host.ok_or_else(|| Error::missing_field("host"))?;
        url::Url::parse(&host)?;

        let page_marker = if self.page_marker_cleared {
            None
        } else {
            self.page_marker.or_else(default_page_marker)
        };

        Ok(ClientConfig {
            host,
            headers: self.headers,
            page_param: self.page_param.unwrap_or_else(|| "page".to_string()),
            page_marker,
            single_timeout: self.single_timeout.unwrap_or(DEFAULT_SINGLE_TIMEOUT),
            batch_timeout: self.batch_timeout.unwrap_or(DEFAULT_BATCH_TIMEOUT),
            max_url_len: self.max_url_len.unwrap_or(Some(DEFAULT_MAX_URL_LEN)),
            max_concurrent: self.max_concurrent.unwrap_or(DEFAULT_MAX_CONCURRENT),
            user_agent: self.user_agent.unwrap_or_else(default_user_agent),
        })
    }
}
