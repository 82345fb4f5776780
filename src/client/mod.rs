//! The client trait and request orchestration
//!
//! [`RestApi`] models an abstract REST client: a concrete type supplies the
//! configuration and the shared HTTP client, and every operation —
//! `get`/`put`/`post`/`delete` — is provided as default behavior over that
//! seam. `get` is the orchestrator: it resolves endpoints against the
//! configured host, attaches the canonical query, guards the URL length,
//! and picks between a single request, a sequential page-discovery chain,
//! and a concurrent batch.

mod types;

pub use types::{Endpoints, GetOptions};

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{ApiResponse, BatchFetcher};
use crate::pagination::{find_marker, next_page_url};
use crate::query::split_url;
use async_trait::async_trait;
use tracing::debug;

/// An abstract client for paginated REST resources.
///
/// Implementors supply [`config`](Self::config) and the shared
/// [`http`](Self::http) client (typically built once via
/// [`ClientConfig::build_http_client`]); all request behavior comes from
/// the provided default methods.
#[async_trait]
pub trait RestApi: Send + Sync {
    /// The client configuration
    fn config(&self) -> &ClientConfig;

    /// The shared HTTP client carrying the session headers
    fn http(&self) -> &reqwest::Client;

    /// Resolve an endpoint against the configured host.
    ///
    /// The endpoint is prefixed with the host unless it already contains
    /// the host as a substring. This is a plain containment check, not URL
    /// joining: full URLs pass through untouched and relative paths are
    /// concatenated as-is.
    fn resolve(&self, endpoint: &str) -> String {
        let host = &self.config().host;
        if endpoint.contains(host.as_str()) {
            endpoint.to_string()
        } else {
            format!("{host}{endpoint}")
        }
    }

    /// Fetch one or more endpoints, transparently handling pagination.
    ///
    /// Dispatch, in priority order:
    /// 1. empty input returns an empty vector without touching the network;
    /// 2. more than one resolved endpoint: concurrent batch, results in
    ///    input order;
    /// 3. `total_pages` given: one endpoint per page `1..=n`, fetched
    ///    concurrently, each page's query built from a fresh copy of the
    ///    supplied parameters;
    /// 4. a continuation marker is configured and `all_pages` holds:
    ///    sequential discovery, following markers until one is absent;
    /// 5. otherwise a single request with the single-request timeout.
    ///
    /// Query parameters apply to the first endpoint only, and the queried
    /// URL is split into several requests when it exceeds the configured
    /// length ceiling.
    async fn get<E>(&self, endpoints: E, options: GetOptions) -> Result<Vec<ApiResponse>>
    where
        E: Into<Endpoints> + Send,
    {
        let endpoints = endpoints.into();
        if endpoints.is_empty() {
            return Ok(Vec::new());
        }

        let config = self.config();
        let mut urls: Vec<String> = endpoints
            .into_vec()
            .iter()
            .map(|e| self.resolve(e))
            .collect();

        let bulk = options.all_pages && options.total_pages.is_some();

        // Queries target a single endpoint; bulk pagination builds its own.
        if let Some(params) = options.params.as_ref().filter(|_| !bulk) {
            let queried = format!("{}{}", urls[0], params.encode());
            let pieces = match config.max_url_len {
                Some(max_len) => split_url(&queried, max_len),
                None => vec![queried],
            };
            urls.splice(0..1, pieces);
        }

        let fetcher = BatchFetcher::new(
            self.http().clone(),
            config.batch_timeout,
            config.max_concurrent,
        );

        if urls.len() > 1 {
            debug!(count = urls.len(), "multi-endpoint batch");
            return fetcher.fetch_all(&urls).await;
        }

        if bulk {
            let total_pages = options.total_pages.unwrap_or(0);
            let page_urls = paged_urls(
                &urls[0],
                options.params.as_ref(),
                &config.page_param,
                total_pages,
            );
            debug!(total_pages, "bulk pagination batch");
            return fetcher.fetch_all(&page_urls).await;
        }

        if options.all_pages && config.page_marker.is_some() {
            return self.discover_pages(&urls[0]).await;
        }

        let single = BatchFetcher::new(
            self.http().clone(),
            config.single_timeout,
            config.max_concurrent,
        );
        Ok(vec![single.fetch_one(&urls[0]).await?])
    }

    /// Follow continuation markers sequentially from a starting URL.
    ///
    /// Each response is scanned for the configured marker tag; its text
    /// becomes the next page query value against the query-stripped
    /// endpoint. Responses accumulate in chronological page order.
    async fn discover_pages(&self, start_url: &str) -> Result<Vec<ApiResponse>> {
        let config = self.config();
        let fetcher = BatchFetcher::new(
            self.http().clone(),
            config.single_timeout,
            config.max_concurrent,
        );
        let marker_tag = config
            .page_marker
            .as_deref()
            .ok_or_else(|| Error::missing_field("page_marker"))?;

        let mut responses = Vec::new();
        let mut next_url = Some(start_url.to_string());

        while let Some(url) = next_url {
            let response = fetcher.fetch_one(&url).await?;
            next_url = find_marker(&response.body, marker_tag)
                .map(|marker| next_page_url(&url, &marker, &config.page_param));
            if let Some(ref next) = next_url {
                debug!(next = next.as_str(), "continuation marker found");
            }
            responses.push(response);
        }

        Ok(responses)
    }

    /// PUT a payload to an endpoint; non-2xx raises [`Error::HttpStatus`]
    async fn put(&self, endpoint: &str, payload: String) -> Result<ApiResponse> {
        let url = self.resolve(endpoint);
        let response = self
            .http()
            .put(&url)
            .timeout(self.config().single_timeout)
            .body(payload)
            .send()
            .await?;
        into_api_response(response, &url).await
    }

    /// POST a payload to an endpoint; non-2xx raises [`Error::HttpStatus`]
    async fn post(&self, endpoint: &str, payload: String) -> Result<ApiResponse> {
        let url = self.resolve(endpoint);
        let response = self
            .http()
            .post(&url)
            .timeout(self.config().single_timeout)
            .body(payload)
            .send()
            .await?;
        into_api_response(response, &url).await
    }

    /// DELETE an endpoint; non-2xx raises [`Error::HttpStatus`]
    async fn delete(&self, endpoint: &str) -> Result<ApiResponse> {
        let url = self.resolve(endpoint);
        let response = self
            .http()
            .delete(&url)
            .timeout(self.config().single_timeout)
            .send()
            .await?;
        into_api_response(response, &url).await
    }
}

/// Build one URL per page `1..=total_pages`, each from a fresh copy of the
/// caller's parameters with the page key replaced.
fn paged_urls(
    base_url: &str,
    params: Option<&crate::query::Params>,
    page_param: &str,
    total_pages: u32,
) -> Vec<String> {
    let mut urls = Vec::with_capacity(total_pages as usize);
    for page in 1..=total_pages {
        let mut page_params = params.cloned().unwrap_or_default();
        page_params.replace(page_param, page);
        urls.push(format!("{base_url}{}", page_params.encode()));
    }
    urls
}

/// Validate a response's status and read it into an [`ApiResponse`]
async fn into_api_response(response: reqwest::Response, url: &str) -> Result<ApiResponse> {
    let status = response.status();
    if !status.is_success() {
        return Err(Error::http_status(status.as_u16(), url));
    }
    let headers = response.headers().clone();
    let body = response.text().await?;
    Ok(ApiResponse {
        url: url.to_string(),
        status,
        headers,
        body,
    })
}
