//! Page fetch layer.
//!
//! Provides the [`DocumentFetcher`] seam the profile code depends on, and
//! [`ScholarClient`], the HTTP implementation with:
//! - Connection pooling via reqwest
//! - Retry middleware with exponential backoff
//! - A fixed delay before every request
//!
//! Pages are never cached; each call performs a fresh request.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};

use crate::config::{Config, absolute_url};
use crate::error::{ClientError, ClientResult};

/// Source of HTML pages.
///
/// `path` is either relative to the site host or an absolute URL.
#[async_trait::async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Fetch one page and return its HTML.
    async fn fetch_page(&self, path: &str) -> ClientResult<String>;
}

#[async_trait::async_trait]
impl<T: DocumentFetcher + ?Sized> DocumentFetcher for &T {
    async fn fetch_page(&self, path: &str) -> ClientResult<String> {
        (**self).fetch_page(path).await
    }
}

#[async_trait::async_trait]
impl<T: DocumentFetcher + ?Sized> DocumentFetcher for Arc<T> {
    async fn fetch_page(&self, path: &str) -> ClientResult<String> {
        (**self).fetch_page(path).await
    }
}

/// HTTP client for the profile site.
#[derive(Clone)]
pub struct ScholarClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// Host prefix for relative paths.
    host: String,

    /// Delay before every request.
    rate_limit_delay: Duration,
}

impl ScholarClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            "text/html,application/xhtml+xml".parse().expect("valid accept header"),
        );
        headers.insert(reqwest::header::USER_AGENT, config.user_agent.parse()?);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(Duration::from_secs(1), Duration::from_secs(30))
            .build_with_max_retries(config.max_retries);

        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self { client, host: config.host, rate_limit_delay: config.rate_limit_delay })
    }

    /// Host prefix used for relative paths.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Make a GET request and return the body text.
    async fn get_html(&self, url: &str) -> ClientResult<String> {
        if !self.rate_limit_delay.is_zero() {
            tokio::time::sleep(self.rate_limit_delay).await;
        }

        tracing::debug!(url = %url, "Fetching page");
        let response = self.client.get(url).send().await?;
        let response = self.handle_response(url, response).await?;

        Ok(response.text().await?)
    }

    /// Map non-success status codes to errors.
    async fn handle_response(
        &self,
        url: &str,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        tracing::warn!(url = %url, status = status.as_u16(), "Page request failed");

        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60);

                Err(ClientError::rate_limited(retry_after))
            }
            404 => Err(ClientError::not_found(url)),
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }
}

#[async_trait::async_trait]
impl DocumentFetcher for ScholarClient {
    async fn fetch_page(&self, path: &str) -> ClientResult<String> {
        let url = absolute_url(&self.host, path);
        self.get_html(&url).await
    }
}

impl std::fmt::Debug for ScholarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScholarClient").field("host", &self.host).finish()
    }
}
