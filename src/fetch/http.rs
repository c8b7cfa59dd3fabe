//! reqwest-backed fetchers

use super::traits::{BlockingFetcher, Fetcher};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::FetchResult;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Async HTTP fetcher sharing one connection pool across fetches
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl HttpFetcher {
    /// Create a fetcher with an optional per-request deadline
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the HTTP client cannot be created (e.g. TLS backend failure).
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            Error::Io(std::io::Error::other(format!(
                "Failed to create HTTP client: {}",
                e
            )))
        })?;

        Ok(Self { client, timeout })
    }

    /// Create a fetcher using the configured request deadline
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.request_timeout)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResult> {
        debug!(url, timeout = %describe_timeout(self.timeout), "fetching page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| Error::transport(url, e))?;
        let result = FetchResult::new(url, body);
        debug!(url, chars = result.char_len(), "page fetched");
        Ok(result)
    }
}

fn describe_timeout(timeout: Option<Duration>) -> String {
    match timeout {
        Some(t) => format!("{}ms", t.as_millis()),
        None => "none".to_string(),
    }
}

/// Blocking HTTP fetcher
///
/// Each call builds its own `reqwest::blocking::Client`, so the fetcher can be moved into
/// any thread (including a runtime's blocking pool) without carrying a client whose
/// internal runtime would be dropped from async context.
#[derive(Clone, Debug)]
pub struct BlockingHttpFetcher {
    timeout: Option<Duration>,
}

impl BlockingHttpFetcher {
    /// Create a fetcher with an optional per-request deadline
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    /// Create a fetcher using the configured request deadline
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.request_timeout)
    }
}

impl BlockingFetcher for BlockingHttpFetcher {
    fn fetch_blocking(&self, url: &str) -> Result<FetchResult> {
        debug!(url, timeout = %describe_timeout(self.timeout), "fetching page (blocking)");

        // reqwest's blocking client defaults to a 30s deadline; None must be passed explicitly
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| Error::transport(url, e))?;

        let response = client.get(url).send().map_err(|e| Error::transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|e| Error::transport(url, e))?;
        let result = FetchResult::new(url, body);
        debug!(url, chars = result.char_len(), "page fetched (blocking)");
        Ok(result)
    }
}
