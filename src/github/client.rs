// GitHub API HTTP client.
// Handles default headers, response caching, rate limiting, and error mapping.

use std::sync::{Mutex, PoisonError};

use log::debug;
use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use serde_json::Value;

use crate::config::PortfolioConfig;
use crate::error::{PortfolioError, Result};

use super::cache::ResponseCache;
use super::types::RateLimit;

const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// GitHub API client with response caching and rate limit tracking.
///
/// Requests are unauthenticated; visibility and rate limits are those of an
/// anonymous caller.
#[derive(Debug)]
pub struct GitHubClient {
    config: PortfolioConfig,
    client: Client,
    cache: ResponseCache,
    rate_limit: Mutex<RateLimit>,
    api_base: String,
}

impl GitHubClient {
    /// Create a client for the public GitHub API.
    pub fn new(config: PortfolioConfig) -> Result<Self> {
        Self::with_base_url(config, GITHUB_API_BASE)
    }

    /// Create a client against a custom API base URL.
    pub fn with_base_url(config: PortfolioConfig, api_base: impl Into<String>) -> Result<Self> {
        Self::with_cache(config, api_base, ResponseCache::new())
    }

    /// Create a client with an explicit response cache.
    pub fn with_cache(
        config: PortfolioConfig,
        api_base: impl Into<String>,
        cache: ResponseCache,
    ) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("gitfolio"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(PortfolioError::Http)?;

        Ok(Self {
            config,
            client,
            cache,
            rate_limit: Mutex::new(RateLimit::default()),
            api_base: api_base.into(),
        })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &PortfolioConfig {
        &self.config
    }

    pub(super) fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Get the most recently observed rate limit information.
    pub fn rate_limit(&self) -> RateLimit {
        *self
            .rate_limit
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// GET a URL, serving unexpired responses from the cache.
    ///
    /// The cache is written only after a successful fetch and decode;
    /// failures leave any previous entry in place.
    pub async fn fetch_with_cache(&self, url: &str) -> Result<Value> {
        if let Some(data) = self.cache.get(url) {
            debug!("cache hit: {url}");
            return Ok(data);
        }

        debug!("fetching {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(PortfolioError::Http)?;

        self.update_rate_limit(&response);
        let response = self.check_response(response)?;

        let data: Value = response.json().await.map_err(PortfolioError::Http)?;
        self.cache.insert(url, data.clone());
        Ok(data)
    }

    /// Update rate limit from response headers.
    fn update_rate_limit(&self, response: &Response) {
        let mut rate_limit = self
            .rate_limit
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(limit) = header_count(response, "x-ratelimit-limit") {
            rate_limit.limit = limit;
        }
        if let Some(remaining) = header_count(response, "x-ratelimit-remaining") {
            rate_limit.remaining = remaining;
        }
        if let Some(reset) = header_count(response, "x-ratelimit-reset") {
            rate_limit.reset = reset;
        }
    }

    /// Check response status and convert errors.
    fn check_response(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        match status {
            StatusCode::NOT_FOUND => Err(PortfolioError::NotFound(response.url().to_string())),
            StatusCode::FORBIDDEN if self.rate_limit().remaining == 0 => {
                let reset_at = chrono::DateTime::from_timestamp(self.rate_limit().reset as i64, 0)
                    .map(|dt| dt.format("%H:%M:%S").to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                Err(PortfolioError::RateLimited { reset_at })
            }
            _ => Err(PortfolioError::RequestFailed {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            }),
        }
    }
}

/// Parse a numeric response header.
fn header_count(response: &Response, name: &str) -> Option<u64> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
}
