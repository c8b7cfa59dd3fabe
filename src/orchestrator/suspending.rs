//! Suspending strategy: one fetch at a time without holding the calling thread

use super::{finish, settle};
use crate::config::FailurePolicy;
use crate::error::{Error, Result};
use crate::fetch::{BlockingFetcher, Fetcher};
use crate::report::ReportSink;
use crate::types::{RunSummary, Strategy};
use std::sync::Arc;
use tokio::time::Instant;
use tracing::debug;

/// Fetch every URL in order with the async fetcher, reporting each page as soon as it arrives
///
/// Each network wait is a suspension point, but the next fetch only starts once the
/// previous one has been reported, so total time matches [`run_sequential`](super::run_sequential).
///
/// # Errors
///
/// Under [`FailurePolicy::FailFast`] the first failed fetch ends the run with its error,
/// after every earlier page has already been reported.
pub async fn run_suspending<F, S>(
    fetcher: &F,
    urls: &[String],
    policy: FailurePolicy,
    sink: &mut S,
) -> Result<RunSummary>
where
    F: Fetcher + ?Sized,
    S: ReportSink + ?Sized,
{
    let started = Instant::now();
    let mut summary = RunSummary::new(Strategy::Suspending);
    debug!(pages = urls.len(), ?policy, "suspending run started");

    for url in urls {
        let outcome = fetcher.fetch(url).await;
        settle(&mut summary, url, outcome, policy, sink)?;
    }

    Ok(finish(summary, started.elapsed()))
}

/// Like [`run_suspending`], but each fetch is a blocking call moved onto the runtime's
/// blocking pool
///
/// Awaiting the pool handle is the suspension point. A fetch that panics on the pool is
/// reported as [`Error::TaskFailed`] for its URL.
pub async fn run_suspending_offloaded<F, S>(
    fetcher: Arc<F>,
    urls: &[String],
    policy: FailurePolicy,
    sink: &mut S,
) -> Result<RunSummary>
where
    F: BlockingFetcher + ?Sized + 'static,
    S: ReportSink + ?Sized,
{
    let started = Instant::now();
    let mut summary = RunSummary::new(Strategy::Suspending);
    debug!(pages = urls.len(), ?policy, "suspending run started (offloaded)");

    for url in urls {
        let task_fetcher = Arc::clone(&fetcher);
        let task_url = url.clone();
        let outcome = tokio::task::spawn_blocking(move || task_fetcher.fetch_blocking(&task_url))
            .await
            .unwrap_or_else(|e| {
                Err(Error::TaskFailed {
                    url: url.clone(),
                    reason: e.to_string(),
                })
            });
        settle(&mut summary, url, outcome, policy, sink)?;
    }

    Ok(finish(summary, started.elapsed()))
}
