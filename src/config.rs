//! Configuration types for page-fetch

use crate::error::{Error, Result};
use crate::sites::default_sites;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How a run reacts to a fetch that fails
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// The first observed failure aborts the run and is returned as the run's error.
    ///
    /// Sequential and suspending runs have already reported every URL before the failing
    /// one. Concurrent runs report nothing and abort the fetches still in flight.
    #[default]
    FailFast,
    /// Every URL gets a result or an error; successes are reported in list order and
    /// failures are collected in the run summary.
    Isolate,
}

/// How the suspending strategy performs each fetch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuspendMode {
    /// Await the async fetcher directly
    Native,
    /// Run the blocking fetcher on the runtime's blocking pool and await its handle
    #[default]
    Offload,
}

/// Main configuration for a [`Session`](crate::Session)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Ordered list of pages to download (default: [`DEFAULT_SITES`](crate::sites::DEFAULT_SITES))
    #[serde(default = "default_sites")]
    pub sites: Vec<String>,

    /// Per-request deadline in seconds (default: 30, None = no deadline)
    #[serde(default = "default_request_timeout", with = "optional_duration_serde")]
    pub request_timeout: Option<Duration>,

    /// Failure aggregation policy (default: fail fast)
    #[serde(default)]
    pub failure_policy: FailurePolicy,

    /// Fetch variant for the suspending strategy (default: offload)
    #[serde(default)]
    pub suspend_mode: SuspendMode,

    /// Worker threads for the session runtime (None = current-thread runtime)
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sites: default_sites(),
            request_timeout: default_request_timeout(),
            failure_policy: FailurePolicy::default(),
            suspend_mode: SuspendMode::default(),
            worker_threads: None,
        }
    }
}

impl Config {
    /// Parse a configuration from JSON, filling omitted fields with defaults
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] for malformed JSON and [`Error::Config`] when the
    /// parsed values fail [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check settings that would make a session unusable
    ///
    /// The request deadline is stored in whole seconds, so anything below one second is
    /// rejected rather than truncated to zero.
    pub fn validate(&self) -> Result<()> {
        if self
            .request_timeout
            .is_some_and(|timeout| timeout < Duration::from_secs(1))
        {
            return Err(Error::config(
                "request_timeout",
                "request_timeout must be at least one second (use null to disable the deadline)",
            ));
        }
        if self.worker_threads == Some(0) {
            return Err(Error::config(
                "worker_threads",
                "worker_threads must be at least 1",
            ));
        }
        Ok(())
    }
}

fn default_request_timeout() -> Option<Duration> {
    Some(Duration::from_secs(30))
}

// Optional Duration serialization helper
mod optional_duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match duration {
            Some(d) => serializer.serialize_some(&d.as_secs()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = Option::<u64>::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}
