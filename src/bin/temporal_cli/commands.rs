// ABOUTME: Encode and decode command implementations for temporal-cli
// ABOUTME: Parses command-line text into values, runs the configured converter, and formats the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{anyhow, Result};
use clap::ValueEnum;
use temporal_columns::{ColumnConfig, ColumnConverter};

use crate::helpers::{format_interval, parse_date, parse_interval, parse_time, parse_timestamp};

/// Column kinds the CLI can convert
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    /// Duration stored as seconds
    Interval,
    /// Calendar date stored as local-midnight epoch seconds
    Date,
    /// Time of day stored as epoch seconds on 1970-01-01
    Time,
    /// Timestamp stored as epoch seconds
    Datetime,
}

/// Encode `value` with the converter for `kind`
pub fn encode(config: &ColumnConfig, kind: Kind, value: &str) -> Result<String> {
    Ok(match kind {
        Kind::Interval => format_real(config.interval().encode(&parse_interval(value)?)?),
        Kind::Date => config.date().encode(&parse_date(value)?)?.to_string(),
        Kind::Time => format_real(config.time().encode(&parse_time(value)?)?),
        Kind::Datetime => format_real(config.datetime().encode(&parse_timestamp(value)?)?),
    })
}

/// Decode `stored` with the converter for `kind`
pub fn decode(config: &ColumnConfig, kind: Kind, stored: &str) -> Result<String> {
    Ok(match kind {
        Kind::Interval => format_interval(config.interval().decode(parse_real(stored)?)?),
        Kind::Date => {
            let seconds = stored
                .trim()
                .parse::<i64>()
                .map_err(|e| anyhow!("Invalid integer '{stored}': {e}"))?;
            config.date().decode(seconds)?.to_string()
        }
        Kind::Time => config.time().decode(parse_real(stored)?)?.to_string(),
        Kind::Datetime => config.datetime().decode(parse_real(stored)?)?.to_string(),
    })
}

fn parse_real(text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|e| anyhow!("Invalid number '{text}': {e}"))
}

/// Debug formatting keeps the trailing `.0` and prints infinities as `inf`
fn format_real(value: f64) -> String {
    format!("{value:?}")
}
