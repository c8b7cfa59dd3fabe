//! # page-fetch
//!
//! Downloads a fixed list of web pages and reports the size of each one, using one of
//! three interchangeable execution strategies.
//!
//! ## Strategies
//!
//! - **Sequential** - blocking fetches, one at a time, each reported as soon as it arrives
//! - **Suspending** - still one fetch at a time, but the calling thread is released while
//!   waiting for the network
//! - **Concurrent** - every fetch in flight at once; results are reported in list order
//!   once all of them have finished
//!
//! Every reported page becomes one line of output:
//! `<URL> downloaded: <N> characters long.`
//!
//! ## Quick Start
//!
//! ```no_run
//! use page_fetch::{Config, Session, Strategy, report::WriterSink};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = Session::new(Config::default())?;
//!     let mut stdout = WriterSink::stdout();
//!
//!     for strategy in Strategy::ALL {
//!         let summary = session.run(strategy, &mut stdout)?;
//!         println!("{strategy}: {} pages", summary.succeeded());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! The orchestrators in [`orchestrator`] are generic over the [`fetch::Fetcher`] and
//! [`fetch::BlockingFetcher`] traits and can be driven directly with any fetcher and
//! [`report::ReportSink`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Single-page fetchers
pub mod fetch;
/// Download strategies
pub mod orchestrator;
/// Report formatting and sinks
pub mod report;
/// Strategy dispatch
pub mod session;
/// The default page list
pub mod sites;
/// Core types
pub mod types;

// Re-export commonly used types
pub use config::{Config, FailurePolicy, SuspendMode};
pub use error::{Error, Result};
pub use fetch::{BlockingFetcher, BlockingHttpFetcher, Fetcher, HttpFetcher};
pub use orchestrator::{run_concurrent, run_sequential, run_suspending, run_suspending_offloaded};
pub use report::{ReportSink, ResultsLog};
pub use session::Session;
pub use types::{FetchFailure, FetchResult, RunSummary, Strategy};
