// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversions, configuration keys, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat list.
//! The reference date times of day are stored against is the Unix epoch date.

/// Unit conversion constants
pub mod units {
    /// Seconds in one day
    pub const SECONDS_PER_DAY: i64 = 86_400;
    /// Microseconds in one second, as a float for fractional arithmetic
    pub const MICROS_PER_SECOND: f64 = 1_000_000.0;
    /// Nanoseconds in one second, as a float for fractional arithmetic
    pub const NANOS_PER_SECOND: f64 = 1_000_000_000.0;
    /// Nanoseconds in one microsecond
    pub const NANOS_PER_MICRO: i64 = 1_000;
}

/// Environment variable names read by the column configuration
pub mod env_config {
    /// Clamp out-of-range intervals instead of failing ("true"/"1"/"yes")
    pub const ALLOW_OVERFLOW: &str = "TEMPORAL_ALLOW_OVERFLOW";
    /// Tag decoded times and timestamps with UTC ("true"/"1"/"yes")
    pub const TIMEZONE_AWARE: &str = "TEMPORAL_TIMEZONE_AWARE";
    /// Zone naive values are interpreted in ("local", "utc", or "+HH:MM")
    pub const LOCAL_ZONE: &str = "TEMPORAL_LOCAL_ZONE";
}

/// Service names used in structured logging
pub mod service_names {
    /// Library target name
    pub const TEMPORAL_COLUMNS: &str = "temporal_columns";
    /// Command-line tool
    pub const TEMPORAL_CLI: &str = "temporal-cli";
}
