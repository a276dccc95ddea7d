// ABOUTME: Main library entry point for the temporal column converters
// ABOUTME: Stores dates, times, timestamps, and intervals in plain numeric sqlx columns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Temporal Columns
//!
//! Column adapters that persist chrono values in ordinary numeric columns:
//!
//! | Converter | Value | Column |
//! |---|---|---|
//! | [`IntervalColumn`] | `TimeDelta` | `REAL` seconds, ±infinity for the bounds when clamping |
//! | [`DateColumn`] | `NaiveDate` | `INTEGER` epoch seconds of local midnight |
//! | [`TimeColumn`] | [`TimeOfDay`] | `REAL` epoch seconds on 1970-01-01 |
//! | [`DateTimeColumn`] | [`Timestamp`] | `REAL` epoch seconds |
//!
//! Every converter implements [`ColumnConverter`], whose bind and result hooks pass
//! `NULL` through untouched and whose `bind`/`get` methods plug into sqlx queries and
//! rows. Arithmetic between timestamp and interval columns in query expressions keeps
//! its temporal type through [`expression::infer_arithmetic`].
//!
//! ## Example
//!
//! ```rust
//! use chrono::{NaiveDate, TimeDelta, Utc};
//! use temporal_columns::{ColumnConverter, DateColumn, IntervalColumn};
//!
//! # fn main() -> Result<(), temporal_columns::ConversionError> {
//! let interval = IntervalColumn::with_overflow();
//! assert_eq!(interval.encode(&TimeDelta::days(2))?, 172_800.0);
//! assert_eq!(interval.encode(&TimeDelta::MAX)?, f64::INFINITY);
//!
//! let date = DateColumn::new().with_zone(Utc);
//! let day_two = NaiveDate::from_ymd_opt(1970, 1, 2).unwrap();
//! assert_eq!(date.bind_value(Some(&day_two))?, Some(86_400));
//! assert_eq!(date.result_value(None)?, None);
//! # Ok(())
//! # }
//! ```

/// Environment-based converter configuration
pub mod config;

/// The `ColumnConverter` trait and its sqlx integration
pub mod converter;

/// Calendar date converter
pub mod date;

/// Timestamp converter
pub mod datetime;

/// Arithmetic result-type inference for query expressions
pub mod expression;

/// Duration converter
pub mod interval;

/// Local time resolution and epoch-seconds helpers
pub mod local;

/// Structured logging setup
pub mod logging;

/// Time-of-day converter
pub mod time_of_day;

pub use config::{ColumnConfig, LocalZone};
pub use converter::ColumnConverter;
pub use date::DateColumn;
pub use datetime::{DateTimeColumn, Timestamp};
pub use expression::{infer_arithmetic, ArithmeticOp, Expr};
pub use interval::IntervalColumn;
pub use temporal_core::{ColumnType, ConversionError, ConversionResult, StorageClass};
pub use time_of_day::{TimeColumn, TimeOfDay};
