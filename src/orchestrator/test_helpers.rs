//! Scripted fetchers and sinks for exercising the orchestrators without a network.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::error::{Error, Result};
use crate::fetch::{BlockingFetcher, Fetcher};
use crate::report::ReportSink;
use crate::types::FetchResult;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Shared, ordered record of fetch and report activity
pub(crate) type Journal = Arc<Mutex<Vec<String>>>;

pub(crate) fn new_journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

pub(crate) fn entries(journal: &Journal) -> Vec<String> {
    journal.lock().unwrap().clone()
}

#[derive(Clone)]
struct ScriptedPage {
    body: String,
    latency: Duration,
    fail_status: Option<u16>,
}

/// Fetcher answering from a script of per-URL bodies, latencies and failures
///
/// Journal entries: `start <url>` when a fetch begins, `fetched <url>` or `failed <url>`
/// when it ends. Unknown URLs fail with status 404.
pub(crate) struct ScriptedFetcher {
    pages: HashMap<String, ScriptedPage>,
    journal: Journal,
}

impl ScriptedFetcher {
    pub(crate) fn new(journal: Journal) -> Self {
        Self {
            pages: HashMap::new(),
            journal,
        }
    }

    pub(crate) fn page(mut self, url: &str, body: &str, latency: Duration) -> Self {
        self.pages.insert(
            url.to_string(),
            ScriptedPage {
                body: body.to_string(),
                latency,
                fail_status: None,
            },
        );
        self
    }

    pub(crate) fn failing(mut self, url: &str, status: u16, latency: Duration) -> Self {
        self.pages.insert(
            url.to_string(),
            ScriptedPage {
                body: String::new(),
                latency,
                fail_status: Some(status),
            },
        );
        self
    }

    fn script(&self, url: &str) -> ScriptedPage {
        self.journal.lock().unwrap().push(format!("start {url}"));
        self.pages.get(url).cloned().unwrap_or(ScriptedPage {
            body: String::new(),
            latency: Duration::ZERO,
            fail_status: Some(404),
        })
    }

    fn complete(&self, url: &str, page: ScriptedPage) -> Result<FetchResult> {
        let mut journal = self.journal.lock().unwrap();
        match page.fail_status {
            Some(status) => {
                journal.push(format!("failed {url}"));
                Err(Error::Status {
                    url: url.to_string(),
                    status,
                })
            }
            None => {
                journal.push(format!("fetched {url}"));
                Ok(FetchResult::new(url, page.body))
            }
        }
    }
}

#[async_trait]
impl Fetcher for ScriptedFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResult> {
        let page = self.script(url);
        tokio::time::sleep(page.latency).await;
        self.complete(url, page)
    }
}

impl BlockingFetcher for ScriptedFetcher {
    fn fetch_blocking(&self, url: &str) -> Result<FetchResult> {
        let page = self.script(url);
        std::thread::sleep(page.latency);
        self.complete(url, page)
    }
}

/// Blocking fetcher that panics, for exercising task-failure handling
pub(crate) struct PanickingFetcher;

impl BlockingFetcher for PanickingFetcher {
    fn fetch_blocking(&self, url: &str) -> Result<FetchResult> {
        panic!("scripted panic while fetching {url}");
    }
}

/// Sink recording each report line into the journal as `report <line>`
pub(crate) struct JournalSink {
    journal: Journal,
}

impl JournalSink {
    pub(crate) fn new(journal: Journal) -> Self {
        Self { journal }
    }
}

impl ReportSink for JournalSink {
    fn append(&mut self, text: &str) {
        let line = text.trim_end();
        if !line.is_empty() {
            self.journal.lock().unwrap().push(format!("report {line}"));
        }
    }
}

/// `count` distinct test URLs
pub(crate) fn test_urls(count: usize) -> Vec<String> {
    (1..=count)
        .map(|i| format!("https://site{i}.test/"))
        .collect()
}

/// Fetcher serving `urls` with bodies of increasing length and the given latencies
pub(crate) fn fetcher_with_latencies(
    urls: &[String],
    latencies_ms: &[u64],
    journal: Journal,
) -> ScriptedFetcher {
    urls.iter()
        .zip(latencies_ms)
        .enumerate()
        .fold(ScriptedFetcher::new(journal), |fetcher, (i, (url, ms))| {
            fetcher.page(url, &"x".repeat(i + 1), Duration::from_millis(*ms))
        })
}

/// Report line expected for the `index`-th page of [`fetcher_with_latencies`]
pub(crate) fn expected_line(url: &str, index: usize) -> String {
    format!("{url} downloaded: {} characters long.", index + 1)
}
