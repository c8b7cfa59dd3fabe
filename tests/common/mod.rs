//! Common test utilities for page-fetch integration tests

#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use page_fetch::{Config, FailurePolicy, SuspendMode};
use std::time::Duration;
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// One page served by [`MockSites`]
pub struct PageSpec {
    /// Request path, e.g. "/alpha"
    pub path: &'static str,
    /// HTTP status to answer with
    pub status: u16,
    /// Response body
    pub body: String,
    /// Delay before the response is sent
    pub delay: Duration,
}

impl PageSpec {
    pub fn ok(path: &'static str, body: &str, delay_ms: u64) -> Self {
        Self {
            path,
            status: 200,
            body: body.to_string(),
            delay: Duration::from_millis(delay_ms),
        }
    }

    pub fn failing(path: &'static str, status: u16) -> Self {
        Self {
            path,
            status,
            body: String::new(),
            delay: Duration::ZERO,
        }
    }
}

/// A wiremock server serving a list of pages, usable from synchronous tests
///
/// The server is started from a private runtime so the test thread itself stays outside
/// async context, which is what [`page_fetch::Session`] requires.
pub struct MockSites {
    pub server: MockServer,
    pub urls: Vec<String>,
    runtime: Runtime,
}

impl MockSites {
    pub fn start(pages: Vec<PageSpec>) -> Self {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        let server = runtime.block_on(async {
            let server = MockServer::start().await;
            for page in &pages {
                Mock::given(method("GET"))
                    .and(path(page.path))
                    .respond_with(
                        ResponseTemplate::new(page.status)
                            .set_body_string(page.body.clone())
                            .set_delay(page.delay),
                    )
                    .mount(&server)
                    .await;
            }
            server
        });

        let urls = pages
            .iter()
            .map(|page| format!("{}{}", server.uri(), page.path))
            .collect();

        Self {
            server,
            urls,
            runtime,
        }
    }

    /// Session configuration pointing at the mock pages
    pub fn config(&self, policy: FailurePolicy, suspend_mode: SuspendMode) -> Config {
        Config {
            sites: self.urls.clone(),
            request_timeout: Some(Duration::from_secs(10)),
            failure_policy: policy,
            suspend_mode,
            worker_threads: None,
        }
    }
}

/// Report line expected for `url` with a body of `chars` characters
pub fn report_line(url: &str, chars: usize) -> String {
    format!("{url} downloaded: {chars} characters long.")
}
