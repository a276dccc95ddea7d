// ABOUTME: DateTime column converter storing timestamps as floating epoch seconds
// ABOUTME: Decoding optionally tags with UTC; arithmetic result types are inferred against Interval
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone, Utc};
use std::fmt;
use temporal_core::{ColumnType, ConversionResult};

use crate::converter::ColumnConverter;
use crate::expression::{infer_arithmetic, ArithmeticOp};
use crate::local::{from_epoch_seconds, local_to_utc, to_epoch_seconds};

/// Point in time, either naive (implicit local zone) or with an explicit offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timestamp {
    /// Wall-clock date and time in an implicit local zone
    Naive(NaiveDateTime),
    /// Instant with an explicit offset from UTC
    Aware(DateTime<FixedOffset>),
}

impl Timestamp {
    /// Whether the timestamp carries an offset
    #[must_use]
    pub const fn is_aware(&self) -> bool {
        matches!(self, Self::Aware(_))
    }

    /// Wall-clock date and time, ignoring any offset
    #[must_use]
    pub fn naive_local(&self) -> NaiveDateTime {
        match self {
            Self::Naive(naive) => *naive,
            Self::Aware(aware) => aware.naive_local(),
        }
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(naive: NaiveDateTime) -> Self {
        Self::Naive(naive)
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(aware: DateTime<FixedOffset>) -> Self {
        Self::Aware(aware)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(aware: DateTime<Utc>) -> Self {
        Self::Aware(aware.fixed_offset())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Naive(naive) => write!(f, "{naive}"),
            Self::Aware(aware) => write!(f, "{}", aware.to_rfc3339()),
        }
    }
}

/// Converter between `Timestamp` and epoch seconds
#[derive(Debug, Clone, Copy)]
pub struct DateTimeColumn<Tz: TimeZone = Local> {
    zone: Tz,
    timezone_aware: bool,
}

impl DateTimeColumn<Local> {
    /// Naive converter in the process's local zone
    #[must_use]
    pub const fn new() -> Self {
        Self {
            zone: Local,
            timezone_aware: false,
        }
    }

    /// Converter whose decoded timestamps are tagged with UTC
    #[must_use]
    pub const fn timezone_aware() -> Self {
        Self {
            zone: Local,
            timezone_aware: true,
        }
    }
}

impl Default for DateTimeColumn<Local> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Tz: TimeZone> DateTimeColumn<Tz> {
    /// Same converter, interpreting naive timestamps in `zone`
    #[must_use]
    pub fn with_zone<Z: TimeZone>(self, zone: Z) -> DateTimeColumn<Z> {
        DateTimeColumn {
            zone,
            timezone_aware: self.timezone_aware,
        }
    }

    /// Set whether decoded timestamps are tagged with UTC
    #[must_use]
    pub fn with_timezone_aware(mut self, timezone_aware: bool) -> Self {
        self.timezone_aware = timezone_aware;
        self
    }

    /// Whether decoded timestamps are tagged with UTC
    #[must_use]
    pub const fn is_timezone_aware(&self) -> bool {
        self.timezone_aware
    }

    /// Declared type of `<datetime column> op <rhs>` in a query expression
    #[must_use]
    pub const fn arithmetic_type(&self, op: ArithmeticOp, rhs: Option<ColumnType>) -> ColumnType {
        infer_arithmetic(ColumnType::DateTime, op, rhs)
    }
}

impl<Tz: TimeZone> ColumnConverter for DateTimeColumn<Tz> {
    type Value = Timestamp;
    type Stored = f64;
    const COLUMN_TYPE: ColumnType = ColumnType::DateTime;

    fn encode(&self, value: &Timestamp) -> ConversionResult<f64> {
        Ok(match value {
            Timestamp::Naive(naive) => to_epoch_seconds(&local_to_utc(&self.zone, naive)?),
            Timestamp::Aware(aware) => to_epoch_seconds(aware),
        })
    }

    fn decode(&self, stored: f64) -> ConversionResult<Timestamp> {
        let instant = from_epoch_seconds(stored, Self::COLUMN_TYPE)?;
        Ok(if self.timezone_aware {
            Timestamp::from(instant)
        } else {
            Timestamp::Naive(instant.with_timezone(&self.zone).naive_local())
        })
    }
}
