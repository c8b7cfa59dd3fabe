//! Concurrent strategy: every fetch in flight at once, then a join-all barrier

use super::{finish, settle};
use crate::config::FailurePolicy;
use crate::error::Result;
use crate::fetch::Fetcher;
use crate::report::ReportSink;
use crate::types::{RunSummary, Strategy};
use futures::future::{join_all, try_join_all};
use tokio::time::Instant;
use tracing::{debug, warn};

/// Start a fetch for every URL at once, wait for all of them, then report in list order
///
/// Total time is roughly that of the slowest fetch. Completion order never affects
/// report order. Dropping the returned future drops every fetch still in flight.
///
/// # Errors
///
/// Under [`FailurePolicy::FailFast`] the first failure to complete ends the run with its
/// error; the remaining fetches are dropped and nothing is reported, including pages that
/// had already arrived. Under [`FailurePolicy::Isolate`] every success is reported and the
/// failures are returned in the summary.
pub async fn run_concurrent<F, S>(
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
    let mut summary = RunSummary::new(Strategy::Concurrent);
    debug!(pages = urls.len(), ?policy, "concurrent run started");

    let fetches = urls.iter().map(|url| fetcher.fetch(url));

    match policy {
        FailurePolicy::FailFast => {
            let results = try_join_all(fetches).await.inspect_err(|error| {
                warn!(
                    strategy = %Strategy::Concurrent,
                    url = error.url().unwrap_or_default(),
                    code = error.error_code(),
                    error = %error,
                    "fetch failed, dropping the remaining fetches"
                );
            })?;
            for (url, result) in urls.iter().zip(results) {
                settle(&mut summary, url, Ok(result), policy, sink)?;
            }
        }
        FailurePolicy::Isolate => {
            let outcomes = join_all(fetches).await;
            for (url, outcome) in urls.iter().zip(outcomes) {
                settle(&mut summary, url, outcome, policy, sink)?;
            }
        }
    }

    Ok(finish(summary, started.elapsed()))
}
