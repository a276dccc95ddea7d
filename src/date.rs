// ABOUTME: Date column converter mapping calendar dates onto local-midnight epoch seconds
// ABOUTME: Integer storage; decoding takes the calendar date in the converter's zone
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone};
use temporal_core::{ColumnType, ConversionError, ConversionResult};

use crate::converter::ColumnConverter;
use crate::local::local_to_utc;

/// Converter between `NaiveDate` and the epoch seconds of its local midnight
#[derive(Debug, Clone, Copy)]
pub struct DateColumn<Tz: TimeZone = Local> {
    zone: Tz,
}

impl DateColumn<Local> {
    /// Converter that interprets dates in the process's local zone
    #[must_use]
    pub const fn new() -> Self {
        Self { zone: Local }
    }
}

impl Default for DateColumn<Local> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Tz: TimeZone> DateColumn<Tz> {
    /// Same converter, interpreting dates in `zone`
    #[must_use]
    pub fn with_zone<Z: TimeZone>(self, zone: Z) -> DateColumn<Z> {
        DateColumn { zone }
    }

    /// Zone dates are interpreted in
    #[must_use]
    pub const fn zone(&self) -> &Tz {
        &self.zone
    }
}

impl<Tz: TimeZone> ColumnConverter for DateColumn<Tz> {
    type Value = NaiveDate;
    type Stored = i64;
    const COLUMN_TYPE: ColumnType = ColumnType::Date;

    fn encode(&self, value: &NaiveDate) -> ConversionResult<i64> {
        let midnight = local_to_utc(&self.zone, &value.and_time(NaiveTime::MIN))?;
        // Offsets are whole seconds, so the instant has no fraction to round away
        Ok(midnight.timestamp())
    }

    fn decode(&self, stored: i64) -> ConversionResult<NaiveDate> {
        DateTime::from_timestamp(stored, 0)
            .map(|instant| instant.with_timezone(&self.zone).date_naive())
            .ok_or(ConversionError::TimestampOutOfRange {
                seconds: stored as f64,
            })
    }
}
