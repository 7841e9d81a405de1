//! HTTP transport for listing pages.
//!
//! The pipeline only needs "give me the body at this URL", so that is all the
//! [`Fetch`] trait offers. [`HttpFetcher`] implements it with `reqwest`;
//! tests substitute stubs.
//!
//! Redirects are followed by the client. Non-2xx responses are reported as
//! [`TransportError::HttpStatus`]. Nothing here retries.

use crate::config::SourceConfig;
use crate::error::{ConfigError, TransportError};
use std::future::Future;
use std::time::Instant;
use tracing::{info, instrument, warn};
use url::Url;

/// Fetch a document body.
///
/// The returned future is `Send`, so a pipeline generic over any `Fetch`
/// can be driven from `tokio::spawn`.
pub trait Fetch {
    /// GET `url` and return the decoded body.
    ///
    /// # Arguments
    ///
    /// * `url` - Absolute URL of the page to fetch
    ///
    /// # Returns
    ///
    /// The response body as text, or a [`TransportError`] for network
    /// failures and non-success statuses.
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<String, TransportError>> + Send;
}

impl<T: Fetch + Sync> Fetch for &T {
    async fn fetch(&self, url: &Url) -> Result<String, TransportError> {
        (**self).fetch(url).await
    }
}

/// [`Fetch`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Wrap an existing client.
    ///
    /// The client's own timeout, redirect and header settings apply to every
    /// fetch; use [`HttpFetcher::from_config`] to build one from a
    /// [`SourceConfig`].
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build a client with the configured timeout and user agent.
    ///
    /// # Returns
    ///
    /// The fetcher, or [`ConfigError::Client`] if reqwest rejects the settings.
    pub fn from_config(config: &SourceConfig) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder().timeout(config.timeout());
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        Ok(Self::new(builder.build()?))
    }
}

impl Fetch for HttpFetcher {
    #[instrument(level = "info", skip_all, fields(%url))]
    async fn fetch(&self, url: &Url) -> Result<String, TransportError> {
        let t0 = Instant::now();
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                elapsed_ms = t0.elapsed().as_millis() as u64,
                "Listing request returned non-success status"
            );
            return Err(TransportError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        info!(
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched listing page"
        );
        Ok(body)
    }
}
