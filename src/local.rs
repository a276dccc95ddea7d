// ABOUTME: Wall-clock resolution and epoch-seconds helpers shared by the converters
// ABOUTME: Maps naive local times onto UTC instants and floats back onto chrono timestamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Local time resolution and epoch arithmetic
//!
//! Naive values are interpreted in a converter's zone. A wall-clock time can be
//! ambiguous (clocks fell back) or nonexistent (clocks sprang forward); neither is an
//! error. Ambiguous times take the earlier instant and nonexistent times are placed
//! using the offset in force before the transition.

use chrono::{
    DateTime, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc,
};
use temporal_core::constants::units::{
    MICROS_PER_SECOND, NANOS_PER_MICRO, NANOS_PER_SECOND, SECONDS_PER_DAY,
};
use temporal_core::{ColumnType, ConversionError, ConversionResult};
use tracing::debug;

/// Date that times of day are anchored to before conversion to epoch seconds
#[must_use]
pub fn reference_date() -> NaiveDate {
    DateTime::<Utc>::UNIX_EPOCH.date_naive()
}

/// Resolve a wall-clock time in `zone` to a UTC instant
///
/// # Errors
///
/// Returns `DateOutOfRange` if the resolved instant falls outside chrono's range.
pub fn local_to_utc<Tz: TimeZone>(
    zone: &Tz,
    local: &NaiveDateTime,
) -> ConversionResult<DateTime<Utc>> {
    match zone.from_local_datetime(local) {
        LocalResult::Single(resolved) => Ok(resolved.with_timezone(&Utc)),
        // Candidates are not ordered by instant for every zone
        LocalResult::Ambiguous(first, second) => {
            Ok(first.with_timezone(&Utc).min(second.with_timezone(&Utc)))
        }
        LocalResult::None => {
            let before = local
                .checked_sub_signed(TimeDelta::seconds(SECONDS_PER_DAY))
                .map_or_else(
                    || zone.offset_from_utc_datetime(local).fix(),
                    |earlier| zone.offset_from_utc_datetime(&earlier).fix(),
                );
            let resolved = local
                .checked_sub_signed(TimeDelta::seconds(i64::from(before.local_minus_utc())))
                .map(|naive| naive.and_utc())
                .ok_or(ConversionError::DateOutOfRange { date: local.date() })?;
            debug!(
                local = %local,
                offset = %before,
                "Local time falls in a transition gap, using the preceding offset"
            );
            Ok(resolved)
        }
    }
}

/// Seconds since the Unix epoch, including the fractional part
#[must_use]
pub fn to_epoch_seconds<Tz: TimeZone>(instant: &DateTime<Tz>) -> f64 {
    instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_nanos()) / NANOS_PER_SECOND
}

/// UTC instant for stored epoch seconds, rounded to the nearest microsecond
///
/// # Errors
///
/// Returns `NotANumber` for NaN and `TimestampOutOfRange` for infinite values or
/// instants chrono cannot represent.
pub fn from_epoch_seconds(seconds: f64, column: ColumnType) -> ConversionResult<DateTime<Utc>> {
    if seconds.is_nan() {
        return Err(ConversionError::NotANumber { column });
    }
    let out_of_range = ConversionError::TimestampOutOfRange { seconds };
    if !seconds.is_finite() {
        return Err(out_of_range);
    }

    let mut whole = seconds.floor();
    let mut micros = ((seconds - whole) * MICROS_PER_SECOND).round() as i64;
    if micros >= MICROS_PER_SECOND as i64 {
        whole += 1.0;
        micros = 0;
    }
    if whole < i64::MIN as f64 || whole >= i64::MAX as f64 {
        return Err(out_of_range);
    }

    DateTime::from_timestamp(whole as i64, (micros * NANOS_PER_MICRO) as u32).ok_or(out_of_range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveTime};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(h, min, s).unwrap())
    }

    #[test]
    fn test_reference_date_is_epoch_day() {
        assert_eq!(reference_date(), NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
    }

    #[test]
    fn test_local_to_utc_fixed_offset() {
        let zone = FixedOffset::east_opt(2 * 3600).unwrap();
        let utc = local_to_utc(&zone, &at(1970, 1, 1, 2, 0, 0)).unwrap();
        assert_eq!(utc.timestamp(), 0);
    }

    #[test]
    fn test_epoch_seconds_keep_fraction() {
        let instant = DateTime::from_timestamp(1_700_000_000, 123_456_000).unwrap();
        let seconds = to_epoch_seconds(&instant);
        assert_eq!(
            from_epoch_seconds(seconds, ColumnType::DateTime).unwrap(),
            instant
        );
    }

    #[test]
    fn test_negative_fraction_floors() {
        let instant = from_epoch_seconds(-1.5, ColumnType::DateTime).unwrap();
        assert_eq!(instant.timestamp(), -2);
        assert_eq!(instant.timestamp_subsec_micros(), 500_000);
    }

    #[test]
    fn test_rounding_carries_into_next_second() {
        let instant = from_epoch_seconds(9.999_999_9, ColumnType::DateTime).unwrap();
        assert_eq!(instant.timestamp(), 10);
        assert_eq!(instant.timestamp_subsec_nanos(), 0);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            from_epoch_seconds(f64::NAN, ColumnType::Time),
            Err(ConversionError::NotANumber {
                column: ColumnType::Time
            })
        ));
        assert!(matches!(
            from_epoch_seconds(f64::INFINITY, ColumnType::DateTime),
            Err(ConversionError::TimestampOutOfRange { .. })
        ));
        assert!(matches!(
            from_epoch_seconds(1e300, ColumnType::DateTime),
            Err(ConversionError::TimestampOutOfRange { .. })
        ));
    }
}
