// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors at the engine boundary.
//!
//! Matching and scoring never fail: bad dates are "no date", bad salaries are 0,
//! unknown ids are no-ops. The only failures are a caller handing over a malformed
//! query or config, and those are reported before the pipeline runs.

use thiserror::Error;

/// A query that violates its contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Pages are 1-based.
    #[error("page must be at least 1")]
    ZeroPage,
    #[error("page size must be at least 1")]
    ZeroLimit,
    #[error("page size {limit} exceeds the maximum of {max}")]
    LimitTooLarge { limit: usize, max: usize },
    #[error("dateRange.{bound} '{value}' is not a date")]
    InvalidDate { bound: &'static str, value: String },
    #[error("dateRange start {start} is after end {end}")]
    InvertedDateRange { start: String, end: String },
}

/// A config that cannot be loaded or does not make sense.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
