// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, in-memory SQLite connections, and sample values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `temporal_columns`

use anyhow::Result;
use chrono::{FixedOffset, NaiveDate, NaiveDateTime, TimeDelta};
use sqlx::{Connection, SqliteConnection};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Single in-memory SQLite connection (a pool would hand out separate databases)
pub async fn create_test_connection() -> Result<SqliteConnection> {
    init_test_logging();
    Ok(SqliteConnection::connect("sqlite::memory:").await?)
}

/// Zone a few hours west of UTC, used to check that naive values respect the zone
pub fn west_zone() -> FixedOffset {
    FixedOffset::west_opt(7 * 3600).unwrap()
}

/// Zone east of UTC with a half-hour component
pub fn east_zone() -> FixedOffset {
    FixedOffset::east_opt(5 * 3600 + 1800).unwrap()
}

pub fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32, micro: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_micro_opt(h, min, s, micro)
        .unwrap()
}

/// Durations at microsecond precision across several magnitudes and both signs
pub fn sample_durations() -> Vec<TimeDelta> {
    vec![
        TimeDelta::zero(),
        TimeDelta::microseconds(1),
        TimeDelta::microseconds(-1),
        TimeDelta::milliseconds(1_500),
        TimeDelta::seconds(59) + TimeDelta::microseconds(999_999),
        -(TimeDelta::hours(3) + TimeDelta::minutes(15) + TimeDelta::microseconds(250)),
        TimeDelta::days(2),
        TimeDelta::days(-36_500) + TimeDelta::microseconds(123_456),
        TimeDelta::days(100_000),
    ]
}

/// Naive timestamps spanning pre-epoch, leap days, and sub-second values
pub fn sample_datetimes() -> Vec<NaiveDateTime> {
    vec![
        datetime(1970, 1, 1, 0, 0, 0, 0),
        datetime(1969, 12, 31, 23, 59, 59, 500_000),
        datetime(1900, 3, 1, 12, 0, 0, 1),
        datetime(2000, 2, 29, 6, 30, 15, 250_000),
        datetime(2024, 11, 3, 1, 30, 0, 0),
        datetime(2038, 1, 19, 3, 14, 8, 999_999),
    ]
}
