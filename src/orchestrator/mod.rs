//! Download orchestration strategies
//!
//! Each strategy takes the URL list, a fetcher, a [`FailurePolicy`] and a [`ReportSink`],
//! and returns a [`RunSummary`]. They differ only in how many fetches are in flight and
//! when results are reported:
//!
//! | Strategy | In flight | Reported |
//! |---|---|---|
//! | [`run_sequential`] | one, blocking the caller | right after each fetch |
//! | [`run_suspending`] / [`run_suspending_offloaded`] | one, caller thread released | right after each fetch |
//! | [`run_concurrent`] | all | after every fetch has finished, in list order |

mod concurrent;
mod sequential;
mod suspending;

pub use concurrent::run_concurrent;
pub use sequential::run_sequential;
pub use suspending::{run_suspending, run_suspending_offloaded};

#[cfg(test)]
pub(crate) mod test_helpers;

#[cfg(test)]
mod tests;

use crate::config::FailurePolicy;
use crate::error::Result;
use crate::report::{ReportSink, report};
use crate::types::{FetchFailure, FetchResult, RunSummary};
use std::time::Duration;
use tracing::{info, warn};

/// Apply one fetch outcome to the run: report a success, or handle a failure per `policy`
///
/// Returns the error when the policy says the run must stop.
fn settle<S: ReportSink + ?Sized>(
    summary: &mut RunSummary,
    url: &str,
    outcome: Result<FetchResult>,
    policy: FailurePolicy,
    sink: &mut S,
) -> Result<()> {
    match outcome {
        Ok(result) => {
            report(sink, &result);
            summary.results.push(result);
            Ok(())
        }
        Err(error) => {
            warn!(
                strategy = %summary.strategy,
                url,
                code = error.error_code(),
                error = %error,
                "fetch failed"
            );
            match policy {
                FailurePolicy::FailFast => Err(error),
                FailurePolicy::Isolate => {
                    summary.failures.push(FetchFailure {
                        url: url.to_string(),
                        error,
                    });
                    Ok(())
                }
            }
        }
    }
}

fn finish(mut summary: RunSummary, elapsed: Duration) -> RunSummary {
    summary.elapsed = elapsed;
    info!(
        strategy = %summary.strategy,
        succeeded = summary.succeeded(),
        failed = summary.failed(),
        elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        "run finished"
    );
    summary
}
