// ABOUTME: Interval column converter mapping chrono durations onto floating seconds
// ABOUTME: Optional overflow clamping stores the duration bounds as signed infinities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Interval columns
//!
//! Durations are stored as `REAL` seconds. With overflow clamping enabled,
//! `TimeDelta::MIN` and `TimeDelta::MAX` are written as negative and positive
//! infinity, and any stored value too large for a `TimeDelta` reads back as the
//! bound on the same side instead of failing.

use chrono::TimeDelta;
use temporal_core::constants::units::{MICROS_PER_SECOND, NANOS_PER_SECOND};
use temporal_core::{ColumnType, ConversionError, ConversionResult};
use tracing::debug;

use crate::converter::ColumnConverter;

/// Converter between `TimeDelta` and seconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntervalColumn {
    allow_overflow: bool,
}

impl IntervalColumn {
    /// Converter that rejects out-of-range stored values
    #[must_use]
    pub const fn new() -> Self {
        Self {
            allow_overflow: false,
        }
    }

    /// Converter that clamps out-of-range stored values to the duration bounds
    #[must_use]
    pub const fn with_overflow() -> Self {
        Self {
            allow_overflow: true,
        }
    }

    /// Set whether out-of-range values are clamped
    #[must_use]
    pub const fn allow_overflow(mut self, allow: bool) -> Self {
        self.allow_overflow = allow;
        self
    }

    /// Whether out-of-range values are clamped
    #[must_use]
    pub const fn allows_overflow(&self) -> bool {
        self.allow_overflow
    }
}

impl ColumnConverter for IntervalColumn {
    type Value = TimeDelta;
    type Stored = f64;
    const COLUMN_TYPE: ColumnType = ColumnType::Interval;

    fn encode(&self, value: &TimeDelta) -> ConversionResult<f64> {
        if self.allow_overflow {
            if *value == TimeDelta::MIN {
                return Ok(f64::NEG_INFINITY);
            }
            if *value == TimeDelta::MAX {
                return Ok(f64::INFINITY);
            }
        }
        Ok(total_seconds(*value))
    }

    fn decode(&self, stored: f64) -> ConversionResult<TimeDelta> {
        if stored.is_nan() {
            return Err(ConversionError::NotANumber {
                column: Self::COLUMN_TYPE,
            });
        }
        match seconds_to_delta(stored) {
            Some(delta) => Ok(delta),
            None if self.allow_overflow => {
                let clamped = if stored < 0.0 {
                    TimeDelta::MIN
                } else {
                    TimeDelta::MAX
                };
                debug!(seconds = stored, "Clamping out-of-range interval");
                Ok(clamped)
            }
            None => Err(ConversionError::IntervalOverflow { seconds: stored }),
        }
    }
}

/// Total length of `delta` in seconds, including the fractional part
#[must_use]
pub fn total_seconds(delta: TimeDelta) -> f64 {
    // subsec_nanos carries the same sign as num_seconds
    delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / NANOS_PER_SECOND
}

/// Duration for `seconds`, rounded to the microsecond; `None` when out of range
fn seconds_to_delta(seconds: f64) -> Option<TimeDelta> {
    if !seconds.is_finite() {
        return None;
    }
    let whole = seconds.trunc();
    if whole <= i64::MIN as f64 || whole >= i64::MAX as f64 {
        return None;
    }
    let micros = ((seconds - whole) * MICROS_PER_SECOND).round() as i64;
    TimeDelta::try_seconds(whole as i64)?.checked_add(&TimeDelta::microseconds(micros))
}
