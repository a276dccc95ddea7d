// ABOUTME: Text parsing and formatting helpers for temporal-cli values
// ABOUTME: Compact interval notation plus date, time, and timestamp parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{anyhow, bail, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use temporal_columns::{TimeOfDay, Timestamp};

const TIME_FORMAT: &str = "%H:%M:%S%.f";

/// Parse `min`, `max`, or a compact interval such as `-1d2h3m4.5s`
pub fn parse_interval(text: &str) -> Result<TimeDelta> {
    let text = text.trim();
    match text {
        "min" => return Ok(TimeDelta::MIN),
        "max" => return Ok(TimeDelta::MAX),
        _ => {}
    }

    let (negative, body) = text
        .strip_prefix('-')
        .map_or((false, text), |rest| (true, rest));
    if body.is_empty() {
        bail!("Empty interval '{text}'");
    }

    let mut total = TimeDelta::zero();
    let mut number = String::new();
    for ch in body.chars() {
        if ch.is_ascii_digit() || ch == '.' {
            number.push(ch);
            continue;
        }
        let unit_seconds = match ch {
            'd' => 86_400.0,
            'h' => 3_600.0,
            'm' => 60.0,
            's' => 1.0,
            other => bail!("Unknown interval unit '{other}' in '{text}'"),
        };
        let amount: f64 = number
            .parse()
            .map_err(|e| anyhow!("Invalid amount before '{ch}' in '{text}': {e}"))?;
        number.clear();
        let micros = (amount * unit_seconds * 1_000_000.0).round();
        if micros >= i64::MAX as f64 {
            bail!("Interval '{text}' is too large");
        }
        total = total
            .checked_add(&TimeDelta::microseconds(micros as i64))
            .ok_or_else(|| anyhow!("Interval '{text}' is too large"))?;
    }
    if !number.is_empty() {
        bail!("Missing unit after '{number}' in '{text}'");
    }

    Ok(if negative { -total } else { total })
}

/// Render an interval in the notation `parse_interval` accepts
pub fn format_interval(delta: TimeDelta) -> String {
    if delta == TimeDelta::MIN {
        return "min".into();
    }
    if delta == TimeDelta::MAX {
        return "max".into();
    }

    let sign = if delta < TimeDelta::zero() { "-" } else { "" };
    let magnitude = delta.abs();
    let mut out = String::from(sign);
    for (amount, unit) in [
        (magnitude.num_days(), 'd'),
        (magnitude.num_hours() % 24, 'h'),
        (magnitude.num_minutes() % 60, 'm'),
    ] {
        if amount != 0 {
            out.push_str(&format!("{amount}{unit}"));
        }
    }

    let seconds = magnitude.num_seconds() % 60;
    let micros = magnitude.subsec_nanos() / 1_000;
    if micros != 0 {
        let fraction = format!("{micros:06}");
        out.push_str(&format!("{seconds}.{}s", fraction.trim_end_matches('0')));
    } else if seconds != 0 || out.len() == sign.len() {
        out.push_str(&format!("{seconds}s"));
    }
    out
}

/// Parse `YYYY-MM-DD`
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|e| anyhow!("Invalid date '{text}': {e}"))
}

/// Parse `HH:MM:SS[.f]`, optionally followed by `Z` or an offset such as `+02:00`
pub fn parse_time(text: &str) -> Result<TimeOfDay> {
    let text = text.trim();
    if let Some(time) = text.strip_suffix('Z') {
        return Ok(TimeOfDay::utc(naive_time(time)?));
    }
    if let Some(split) = text.rfind(['+', '-']) {
        let (time, offset) = text.split_at(split);
        let offset = offset
            .parse::<FixedOffset>()
            .map_err(|e| anyhow!("Invalid offset '{offset}': {e}"))?;
        return Ok(TimeOfDay::Aware {
            time: naive_time(time)?,
            offset,
        });
    }
    Ok(TimeOfDay::Naive(naive_time(text)?))
}

fn naive_time(text: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(text, TIME_FORMAT).map_err(|e| anyhow!("Invalid time '{text}': {e}"))
}

/// Parse an RFC 3339 timestamp, or a naive `YYYY-MM-DDTHH:MM:SS[.f]`
pub fn parse_timestamp(text: &str) -> Result<Timestamp> {
    let text = text.trim();
    if let Ok(aware) = DateTime::parse_from_rfc3339(text) {
        return Ok(Timestamp::Aware(aware));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(Timestamp::Naive)
        .ok_or_else(|| anyhow!("Invalid timestamp '{text}'"))
}
