//! Fetcher traits

use crate::error::Result;
use crate::types::FetchResult;
use async_trait::async_trait;

/// Fetch that suspends at network waits instead of blocking the thread
///
/// # Errors
///
/// Implementations return [`Error::Transport`](crate::Error::Transport) or
/// [`Error::Status`](crate::Error::Status) for the URL that could not be downloaded.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Download `url` and return its body paired with the URL
    async fn fetch(&self, url: &str) -> Result<FetchResult>;
}

/// Fetch that blocks the calling thread until the download has finished
pub trait BlockingFetcher: Send + Sync {
    /// Download `url` and return its body paired with the URL
    fn fetch_blocking(&self, url: &str) -> Result<FetchResult>;
}

