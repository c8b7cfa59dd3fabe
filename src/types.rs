//! Core types for page-fetch

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One downloaded page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResult {
    /// The URL the page was fetched from, exactly as it appeared in the input list
    pub source_url: String,
    /// The complete response body decoded as text (empty for a zero-length response)
    pub body: String,
}

impl FetchResult {
    /// Pair a downloaded body with the URL it came from
    pub fn new(source_url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            body: body.into(),
        }
    }

    /// Length of the body in characters (Unicode scalar values, not bytes)
    pub fn char_len(&self) -> usize {
        self.body.chars().count()
    }
}

/// Execution strategy for downloading the page list
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Blocking fetches, one at a time, each reported immediately
    Sequential,
    /// One fetch at a time, releasing the calling thread while waiting
    Suspending,
    /// Every fetch in flight at once, reported after all have finished
    Concurrent,
}

impl Strategy {
    /// All strategies, in the order the demo runs them
    pub const ALL: [Strategy; 3] = [
        Strategy::Sequential,
        Strategy::Suspending,
        Strategy::Concurrent,
    ];

    /// Snake-case name, as used in configuration and logs
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Sequential => "sequential",
            Strategy::Suspending => "suspending",
            Strategy::Concurrent => "concurrent",
        }
    }

    /// Whether the strategy keeps more than one fetch in flight
    pub fn overlaps_fetches(&self) -> bool {
        matches!(self, Strategy::Concurrent)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" | "sync" => Ok(Strategy::Sequential),
            "suspending" | "async" => Ok(Strategy::Suspending),
            "concurrent" | "parallel" | "parallel_async" | "parallel async" => {
                Ok(Strategy::Concurrent)
            }
            other => Err(format!("unknown strategy: {other}")),
        }
    }
}

/// A URL whose fetch failed under [`FailurePolicy::Isolate`](crate::config::FailurePolicy::Isolate)
#[derive(Debug)]
pub struct FetchFailure {
    /// The URL that failed
    pub url: String,
    /// Why it failed
    pub error: Error,
}

/// Outcome of one orchestration run
#[derive(Debug)]
pub struct RunSummary {
    /// Strategy that produced this run
    pub strategy: Strategy,
    /// Successful fetches, in input list order
    pub results: Vec<FetchResult>,
    /// Failed fetches, in input list order (always empty under fail-fast)
    pub failures: Vec<FetchFailure>,
    /// Wall-clock time of the run
    pub elapsed: Duration,
}

impl RunSummary {
    pub(crate) fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            results: Vec::new(),
            failures: Vec::new(),
            elapsed: Duration::ZERO,
        }
    }

    /// Number of pages downloaded
    pub fn succeeded(&self) -> usize {
        self.results.len()
    }

    /// Number of pages that failed
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// True when every URL of the run was downloaded
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// URLs of the reported results, in report order
    pub fn reported_urls(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.source_url.as_str()).collect()
    }
}
