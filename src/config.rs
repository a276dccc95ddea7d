// ABOUTME: Environment-based configuration for the temporal column converters
// ABOUTME: LocalZone selection, overflow and timezone-aware flags, and converter construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based column configuration
//!
//! Converter settings are fixed when a converter is built. [`ColumnConfig`] gathers
//! them from the environment (or from any serde source) and builds all four
//! converters with the same settings.

use chrono::{
    FixedOffset, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use temporal_core::constants::env_config;
use temporal_core::{ConversionError, ConversionResult};
use tracing::info;

use crate::date::DateColumn;
use crate::datetime::DateTimeColumn;
use crate::interval::IntervalColumn;
use crate::time_of_day::TimeColumn;

/// Zone naive values are interpreted in
///
/// Implements [`TimeZone`] so converters can be built from configuration without
/// fixing the zone type at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LocalZone {
    /// The process's local zone, including its daylight saving rules
    #[default]
    System,
    /// Coordinated Universal Time
    Utc,
    /// A constant offset from UTC
    Fixed(FixedOffset),
}

impl FromStr for LocalZone {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" | "system" => Ok(Self::System),
            "utc" | "z" => Ok(Self::Utc),
            other => other.parse::<FixedOffset>().map(Self::Fixed).map_err(|e| {
                ConversionError::config(env_config::LOCAL_ZONE, format!("'{s}': {e}"))
            }),
        }
    }
}

impl TryFrom<String> for LocalZone {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LocalZone> for String {
    fn from(zone: LocalZone) -> Self {
        zone.to_string()
    }
}

impl fmt::Display for LocalZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => f.write_str("local"),
            Self::Utc => f.write_str("utc"),
            Self::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

impl TimeZone for LocalZone {
    type Offset = FixedOffset;

    fn from_offset(offset: &FixedOffset) -> Self {
        Self::Fixed(*offset)
    }

    fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
        self.offset_from_local_datetime(&local.and_time(NaiveTime::MIN))
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
        match self {
            Self::System => Local.offset_from_local_datetime(local),
            Self::Utc => LocalResult::Single(Utc.fix()),
            Self::Fixed(offset) => LocalResult::Single(*offset),
        }
    }

    fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
        self.offset_from_utc_datetime(&utc.and_time(NaiveTime::MIN))
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
        match self {
            Self::System => Local.offset_from_utc_datetime(utc),
            Self::Utc => Utc.fix(),
            Self::Fixed(offset) => *offset,
        }
    }
}

/// Settings shared by every converter built from this configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    /// Clamp out-of-range intervals to the duration bounds
    pub allow_overflow: bool,
    /// Tag decoded times and timestamps with UTC
    pub timezone_aware: bool,
    /// Zone naive values are interpreted in
    pub local_zone: LocalZone,
}

impl ColumnConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables keep their defaults (no clamping, naive decoding, system zone).
    ///
    /// # Errors
    ///
    /// Returns `Config` if a variable is set to a value that cannot be parsed
    pub fn from_env() -> ConversionResult<Self> {
        let config = Self {
            allow_overflow: env_flag(env_config::ALLOW_OVERFLOW)?,
            timezone_aware: env_flag(env_config::TIMEZONE_AWARE)?,
            local_zone: env::var(env_config::LOCAL_ZONE)
                .ok()
                .map(|value| value.parse())
                .transpose()?
                .unwrap_or_default(),
        };
        info!(
            allow_overflow = config.allow_overflow,
            timezone_aware = config.timezone_aware,
            local_zone = %config.local_zone,
            "Column configuration loaded"
        );
        Ok(config)
    }

    /// Interval converter with this configuration's overflow setting
    #[must_use]
    pub const fn interval(&self) -> IntervalColumn {
        IntervalColumn::new().allow_overflow(self.allow_overflow)
    }

    /// Date converter in this configuration's zone
    #[must_use]
    pub fn date(&self) -> DateColumn<LocalZone> {
        DateColumn::new().with_zone(self.local_zone)
    }

    /// Time converter with this configuration's zone and timezone-aware setting
    #[must_use]
    pub fn time(&self) -> TimeColumn<LocalZone> {
        TimeColumn::new()
            .with_zone(self.local_zone)
            .with_timezone_aware(self.timezone_aware)
    }

    /// DateTime converter with this configuration's zone and timezone-aware setting
    #[must_use]
    pub fn datetime(&self) -> DateTimeColumn<LocalZone> {
        DateTimeColumn::new()
            .with_zone(self.local_zone)
            .with_timezone_aware(self.timezone_aware)
    }
}

/// Parse a boolean environment variable; unset means `false`
fn env_flag(key: &'static str) -> ConversionResult<bool> {
    env::var(key).map_or(Ok(false), |value| parse_flag(key, &value))
}

fn parse_flag(key: &'static str, value: &str) -> ConversionResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConversionError::config(
            key,
            format!("expected a boolean, got '{other}'"),
        )),
    }
}
