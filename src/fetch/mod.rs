//! Single-page fetching
//!
//! A fetch downloads one URL's full body as text and pairs it with the URL in a
//! [`FetchResult`](crate::FetchResult). Two flavors exist:
//!
//! - [`BlockingFetcher`]: occupies the calling thread until the body has arrived
//! - [`Fetcher`]: yields to the async runtime at every network wait
//!
//! [`HttpFetcher`] and [`BlockingHttpFetcher`] are the reqwest-backed implementations.
//! Orchestrators are generic over the traits so tests can drive them with scripted fetchers.

mod http;
mod traits;

pub use http::{BlockingHttpFetcher, HttpFetcher};
pub use traits::{BlockingFetcher, Fetcher};
