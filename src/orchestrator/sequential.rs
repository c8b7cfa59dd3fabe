//! Sequential strategy: blocking fetches, one at a time

use super::{finish, settle};
use crate::config::FailurePolicy;
use crate::error::Result;
use crate::fetch::BlockingFetcher;
use crate::report::ReportSink;
use crate::types::{RunSummary, Strategy};
use std::time::Instant;
use tracing::debug;

/// Fetch every URL in order on the calling thread, reporting each page as soon as it arrives
///
/// The caller is blocked for the whole run; total time is the sum of the fetch latencies.
/// Must not be called from inside an async runtime.
///
/// # Errors
///
/// Under [`FailurePolicy::FailFast`] the first failed fetch ends the run with its error,
/// after every earlier page has already been reported.
pub fn run_sequential<F, S>(
    fetcher: &F,
    urls: &[String],
    policy: FailurePolicy,
    sink: &mut S,
) -> Result<RunSummary>
where
    F: BlockingFetcher + ?Sized,
    S: ReportSink + ?Sized,
{
    let started = Instant::now();
    let mut summary = RunSummary::new(Strategy::Sequential);
    debug!(pages = urls.len(), ?policy, "sequential run started");

    for url in urls {
        let outcome = fetcher.fetch_blocking(url);
        settle(&mut summary, url, outcome, policy, sink)?;
    }

    Ok(finish(summary, started.elapsed()))
}
