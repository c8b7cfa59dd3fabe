//! Strategy dispatch
//!
//! A [`Session`] owns everything a run needs: the configuration, the HTTP fetchers and the
//! tokio runtime the suspending and concurrent strategies are driven on. One caller thread
//! drives every strategy: sequential runs block it directly, the others are `block_on`'d
//! from it.
//!
//! A session is synchronous by construction; create, use and drop it outside async context.

use crate::config::{Config, SuspendMode};
use crate::error::Result;
use crate::fetch::{BlockingHttpFetcher, HttpFetcher};
use crate::orchestrator::{
    run_concurrent, run_sequential, run_suspending, run_suspending_offloaded,
};
use crate::report::{ReportSink, format_summary_line};
use crate::types::{RunSummary, Strategy};
use std::sync::Arc;
use tokio::runtime::{Builder, Runtime};
use tracing::info;

/// Runs download strategies against the configured page list
pub struct Session {
    config: Config,
    runtime: Runtime,
    fetcher: HttpFetcher,
    blocking_fetcher: Arc<BlockingHttpFetcher>,
}

impl Session {
    /// Validate `config` and build the runtime and fetchers
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) for invalid settings and
    /// [`Error::Io`](crate::Error::Io) if the runtime or HTTP client cannot be created.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let runtime = match config.worker_threads {
            Some(threads) => Builder::new_multi_thread()
                .worker_threads(threads)
                .enable_all()
                .build()?,
            None => Builder::new_current_thread().enable_all().build()?,
        };
        let fetcher = HttpFetcher::from_config(&config)?;
        let blocking_fetcher = Arc::new(BlockingHttpFetcher::from_config(&config));

        Ok(Self {
            config,
            runtime,
            fetcher,
            blocking_fetcher,
        })
    }

    /// The session's configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fresh copy of the page list for one run
    pub fn sites(&self) -> Vec<String> {
        self.config.sites.clone()
    }

    /// Download the page list with `strategy`, reporting into `sink`
    ///
    /// On success the sink also receives the timing summary line for the run. On failure
    /// (fail-fast policy only) the sink keeps whatever the strategy reported before the
    /// error and no summary line is written.
    ///
    /// # Errors
    ///
    /// Under [`FailurePolicy::FailFast`](crate::FailurePolicy::FailFast) the first fetch
    /// failure is returned. Offloaded fetch tasks that panic surface as
    /// [`Error::TaskFailed`](crate::Error::TaskFailed).
    ///
    /// # Panics
    ///
    /// Panics if called from within an async runtime: the suspending and concurrent
    /// strategies `block_on` the session's runtime, and the sequential strategy uses
    /// reqwest's blocking client, which cannot run on a runtime thread.
    pub fn run<S: ReportSink + ?Sized>(
        &self,
        strategy: Strategy,
        sink: &mut S,
    ) -> Result<RunSummary> {
        let urls = self.sites();
        let policy = self.config.failure_policy;
        info!(
            %strategy,
            pages = urls.len(),
            overlapping = strategy.overlaps_fetches(),
            ?policy,
            "starting run"
        );

        let summary = match strategy {
            Strategy::Sequential => {
                run_sequential(self.blocking_fetcher.as_ref(), &urls, policy, sink)?
            }
            Strategy::Suspending => match self.config.suspend_mode {
                SuspendMode::Native => self
                    .runtime
                    .block_on(run_suspending(&self.fetcher, &urls, policy, sink))?,
                SuspendMode::Offload => self.runtime.block_on(run_suspending_offloaded(
                    Arc::clone(&self.blocking_fetcher),
                    &urls,
                    policy,
                    sink,
                ))?,
            },
            Strategy::Concurrent => self
                .runtime
                .block_on(run_concurrent(&self.fetcher, &urls, policy, sink))?,
        };

        sink.append_line(&format_summary_line(strategy, summary.elapsed));
        Ok(summary)
    }
}
