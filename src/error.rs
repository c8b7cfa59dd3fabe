//! Error types for page-fetch
//!
//! This module provides the error handling for the library:
//! - Transport failures of a single fetch (connect, DNS, timeout, body read)
//! - Non-success HTTP statuses, treated as transport failures of that URL
//! - Failures of the machinery around a run (spawned tasks, runtime, configuration)
//! - Machine-readable error codes for structured logging

use thiserror::Error;

/// Result type alias for page-fetch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for page-fetch
///
/// Every fetch-related variant carries the URL it belongs to, so a failure can be
/// attributed to its source entry without extra bookkeeping.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be completed (DNS, connect, timeout, body read, malformed URL)
    #[error("failed to fetch {url}: {source}")]
    Transport {
        /// The URL that was being fetched
        url: String,
        /// The underlying HTTP client error
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("fetching {url} returned HTTP status {status}")]
    Status {
        /// The URL that was being fetched
        url: String,
        /// The HTTP status code returned by the server
        status: u16,
    },

    /// A spawned fetch task panicked or was cancelled before producing a result
    #[error("fetch task for {url} failed: {reason}")]
    TaskFailed {
        /// The URL the task was fetching
        url: String,
        /// Description of the join failure
        reason: String,
    },

    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "request_timeout")
        key: Option<String>,
    },

    /// I/O error (runtime construction)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Wrap a reqwest error as a transport failure of `url`
    pub fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        Error::Transport {
            url: url.into(),
            source,
        }
    }

    /// Build a configuration error for the given key
    pub fn config(key: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: Some(key.into()),
        }
    }

    /// The URL this error belongs to, if it is tied to a single fetch
    pub fn url(&self) -> Option<&str> {
        match self {
            Error::Transport { url, .. }
            | Error::Status { url, .. }
            | Error::TaskFailed { url, .. } => Some(url),
            Error::Config { .. } | Error::Io(_) | Error::Serialization(_) => None,
        }
    }

    /// Whether the fetch was abandoned because its deadline passed
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Transport { source, .. } => source.is_timeout(),
            Error::Io(e) => e.kind() == std::io::ErrorKind::TimedOut,
            _ => false,
        }
    }

    /// Machine-readable error code, used as a structured logging field
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Transport { source, .. } if source.is_timeout() => "timeout",
            Error::Transport { source, .. } if source.is_connect() => "connect_error",
            Error::Transport { .. } => "transport_error",
            Error::Status { .. } => "http_status",
            Error::TaskFailed { .. } => "task_failed",
            Error::Config { .. } => "config_error",
            Error::Io(_) => "io_error",
            Error::Serialization(_) => "serialization_error",
        }
    }
}
