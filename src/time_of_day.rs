// ABOUTME: Time column converter storing times of day as epoch seconds on the reference date
// ABOUTME: Decoding optionally tags the time with UTC; encoding never consults that flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Time-of-day columns
//!
//! A time is combined with 1970-01-01 and stored as the epoch seconds of that instant.
//! Naive times are placed in the converter's zone and aware times use their own
//! offset. On read, a timezone-aware converter interprets the seconds in UTC and
//! returns a UTC-tagged time; otherwise the seconds are read in the local zone.
//!
//! The timezone-aware flag only affects decoding. Rows written by a naive converter
//! in a non-UTC zone therefore read back shifted through a timezone-aware one. Existing
//! stored data depends on this, so it is kept as is.

use chrono::{FixedOffset, Local, NaiveTime, Offset, TimeZone, Utc};
use std::fmt;
use temporal_core::{ColumnType, ConversionResult};

use crate::converter::ColumnConverter;
use crate::local::{from_epoch_seconds, local_to_utc, reference_date, to_epoch_seconds};

/// Time of day, optionally carrying a UTC offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    /// Wall-clock time in an implicit local zone
    Naive(NaiveTime),
    /// Time with an explicit offset from UTC
    Aware {
        /// Wall-clock time at `offset`
        time: NaiveTime,
        /// Offset from UTC
        offset: FixedOffset,
    },
}

impl TimeOfDay {
    /// UTC-tagged time
    #[must_use]
    pub fn utc(time: NaiveTime) -> Self {
        Self::Aware {
            time,
            offset: Utc.fix(),
        }
    }

    /// Wall-clock time, ignoring any offset
    #[must_use]
    pub const fn time(&self) -> NaiveTime {
        match self {
            Self::Naive(time) | Self::Aware { time, .. } => *time,
        }
    }

    /// Offset from UTC, if the time is aware
    #[must_use]
    pub const fn offset(&self) -> Option<FixedOffset> {
        match self {
            Self::Naive(_) => None,
            Self::Aware { offset, .. } => Some(*offset),
        }
    }

    /// Whether the time carries an offset
    #[must_use]
    pub const fn is_aware(&self) -> bool {
        matches!(self, Self::Aware { .. })
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self::Naive(time)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Naive(time) => write!(f, "{time}"),
            Self::Aware { time, offset } => write!(f, "{time}{offset}"),
        }
    }
}

/// Converter between `TimeOfDay` and epoch seconds on the reference date
#[derive(Debug, Clone, Copy)]
pub struct TimeColumn<Tz: TimeZone = Local> {
    zone: Tz,
    timezone_aware: bool,
}

impl TimeColumn<Local> {
    /// Naive converter in the process's local zone
    #[must_use]
    pub const fn new() -> Self {
        Self {
            zone: Local,
            timezone_aware: false,
        }
    }

    /// Converter whose decoded times are tagged with UTC
    #[must_use]
    pub const fn timezone_aware() -> Self {
        Self {
            zone: Local,
            timezone_aware: true,
        }
    }
}

impl Default for TimeColumn<Local> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Tz: TimeZone> TimeColumn<Tz> {
    /// Same converter, interpreting naive times in `zone`
    #[must_use]
    pub fn with_zone<Z: TimeZone>(self, zone: Z) -> TimeColumn<Z> {
        TimeColumn {
            zone,
            timezone_aware: self.timezone_aware,
        }
    }

    /// Set whether decoded times are tagged with UTC
    #[must_use]
    pub fn with_timezone_aware(mut self, timezone_aware: bool) -> Self {
        self.timezone_aware = timezone_aware;
        self
    }

    /// Whether decoded times are tagged with UTC
    #[must_use]
    pub const fn is_timezone_aware(&self) -> bool {
        self.timezone_aware
    }
}

impl<Tz: TimeZone> ColumnConverter for TimeColumn<Tz> {
    type Value = TimeOfDay;
    type Stored = f64;
    const COLUMN_TYPE: ColumnType = ColumnType::Time;

    fn encode(&self, value: &TimeOfDay) -> ConversionResult<f64> {
        let instant = match value {
            TimeOfDay::Naive(time) => local_to_utc(&self.zone, &reference_date().and_time(*time))?,
            TimeOfDay::Aware { time, offset } => {
                local_to_utc(offset, &reference_date().and_time(*time))?
            }
        };
        Ok(to_epoch_seconds(&instant))
    }

    fn decode(&self, stored: f64) -> ConversionResult<TimeOfDay> {
        let instant = from_epoch_seconds(stored, Self::COLUMN_TYPE)?;
        Ok(if self.timezone_aware {
            TimeOfDay::utc(instant.time())
        } else {
            TimeOfDay::Naive(instant.with_timezone(&self.zone).time())
        })
    }
}
