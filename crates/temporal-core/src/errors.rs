// ABOUTME: Error types raised while converting temporal values to and from storage
// ABOUTME: Defines ConversionError with structured context and the ConversionResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Conversion Error Types
//!
//! Every converter reports failures through [`ConversionError`]. `NULL` is never an
//! error: it passes through the bind and result hooks untouched.

use chrono::NaiveDate;

use crate::column::ColumnType;

/// Result alias used by all converter operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Errors raised by the column converters
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// Stored seconds do not fit in the duration range and clamping is disabled
    #[error("Interval of {seconds} seconds overflows the representable duration range")]
    IntervalOverflow {
        /// Stored value that could not be converted
        seconds: f64,
    },

    /// Stored value is NaN, which has no temporal meaning
    #[error("Stored value for {column} column is NaN")]
    NotANumber {
        /// Column type whose decode received the NaN
        column: ColumnType,
    },

    /// Epoch seconds fall outside the supported calendar range
    #[error("Epoch timestamp {seconds} is outside the supported date range")]
    TimestampOutOfRange {
        /// Stored epoch seconds
        seconds: f64,
    },

    /// Calendar date cannot be placed on the epoch timeline
    #[error("Date {date} cannot be converted to epoch seconds")]
    DateOutOfRange {
        /// Date that failed to convert
        date: NaiveDate,
    },

    /// Invalid configuration value
    #[error("Invalid configuration for {key}: {reason}")]
    Config {
        /// Configuration key (environment variable name)
        key: &'static str,
        /// Reason the value was rejected
        reason: String,
    },

    /// Error reported by the database driver while binding or reading a column
    #[cfg(feature = "database-errors")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ConversionError {
    /// Create a configuration error
    #[must_use]
    pub fn config(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Config {
            key,
            reason: reason.into(),
        }
    }

    /// Whether this error is an interval overflow that clamping would have absorbed
    #[must_use]
    pub const fn is_overflow(&self) -> bool {
        matches!(self, Self::IntervalOverflow { .. })
    }
}
