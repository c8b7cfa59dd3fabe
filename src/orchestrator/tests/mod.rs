#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::test_helpers::*;
use super::*;
use crate::config::FailurePolicy;
use crate::error::Error;
use crate::report::ResultsLog;
use crate::types::Strategy;
use std::sync::Arc;
use std::time::Duration;
