// ABOUTME: End-to-end tests storing temporal values in SQLite through sqlx
// ABOUTME: Exercises bind/get, NULL passthrough, infinite sentinels, and query arithmetic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime, TimeDelta, Utc};
use sqlx::{QueryBuilder, Row, Sqlite, SqliteConnection};
use temporal_columns::{
    ColumnConverter, ColumnType, DateColumn, DateTimeColumn, Expr, IntervalColumn, TimeColumn,
    TimeOfDay, Timestamp,
};

async fn create_events_table(conn: &mut SqliteConnection) -> Result<()> {
    let definitions = [
        IntervalColumn::new().column_definition("duration"),
        DateColumn::new().column_definition("day"),
        TimeColumn::new().column_definition("at"),
        DateTimeColumn::new().column_definition("starts_at"),
        DateTimeColumn::new().column_definition("ends_at"),
    ];
    let sql = format!(
        "CREATE TABLE events (id INTEGER PRIMARY KEY, {})",
        definitions.join(", ")
    );
    sqlx::query(&sql).execute(&mut *conn).await?;
    Ok(())
}

#[tokio::test]
async fn test_column_definitions() -> Result<()> {
    assert_eq!(IntervalColumn::new().column_definition("d"), "d REAL");
    assert_eq!(DateColumn::new().column_definition("d"), "d INTEGER");

    let mut conn = common::create_test_connection().await?;
    create_events_table(&mut conn).await?;
    let row = sqlx::query("SELECT COUNT(*) AS n FROM events")
        .fetch_one(&mut conn)
        .await?;
    assert_eq!(row.try_get::<i64, _>("n")?, 0);
    Ok(())
}

#[tokio::test]
async fn test_store_and_load_every_column() -> Result<()> {
    let mut conn = common::create_test_connection().await?;
    create_events_table(&mut conn).await?;

    let interval = IntervalColumn::new();
    let date = DateColumn::new().with_zone(common::west_zone());
    let time = TimeColumn::new().with_zone(common::east_zone());
    let datetime = DateTimeColumn::new().with_zone(common::west_zone());

    let duration = TimeDelta::hours(1) + TimeDelta::microseconds(500);
    let day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    let at = TimeOfDay::Naive(NaiveTime::from_hms_micro_opt(7, 15, 0, 125_000).unwrap());
    let starts = Timestamp::Naive(common::datetime(2024, 2, 29, 7, 15, 0, 125_000));

    let query = sqlx::query("INSERT INTO events (id, duration, day, at, starts_at) VALUES (1, ?, ?, ?, ?)");
    let query = interval.bind(query, Some(&duration))?;
    let query = date.bind(query, Some(&day))?;
    let query = time.bind(query, Some(&at))?;
    let query = datetime.bind(query, Some(&starts))?;
    query.execute(&mut conn).await?;

    let row = sqlx::query("SELECT duration, day, at, starts_at FROM events WHERE id = 1")
        .fetch_one(&mut conn)
        .await?;
    assert_eq!(interval.get(&row, "duration")?, Some(duration));
    assert_eq!(date.get(&row, "day")?, Some(day));
    assert_eq!(time.get(&row, "at")?, Some(at));
    assert_eq!(datetime.get(&row, "starts_at")?, Some(starts));
    Ok(())
}

#[tokio::test]
async fn test_null_round_trip() -> Result<()> {
    let mut conn = common::create_test_connection().await?;
    create_events_table(&mut conn).await?;

    let interval = IntervalColumn::new();
    let date = DateColumn::new();
    let datetime = DateTimeColumn::timezone_aware();

    let query = sqlx::query("INSERT INTO events (id, duration, day, starts_at) VALUES (1, ?, ?, ?)");
    let query = interval.bind(query, None)?;
    let query = date.bind(query, None)?;
    let query = datetime.bind(query, None)?;
    query.execute(&mut conn).await?;

    let row = sqlx::query("SELECT duration, day, starts_at, duration IS NULL AS is_null FROM events")
        .fetch_one(&mut conn)
        .await?;
    assert_eq!(row.try_get::<i64, _>("is_null")?, 1);
    assert_eq!(interval.get(&row, "duration")?, None);
    assert_eq!(date.get(&row, "day")?, None);
    assert_eq!(datetime.get(&row, "starts_at")?, None);
    Ok(())
}

#[tokio::test]
async fn test_overflow_sentinels_are_stored_as_infinity() -> Result<()> {
    let mut conn = common::create_test_connection().await?;
    create_events_table(&mut conn).await?;

    let column = IntervalColumn::with_overflow();
    for (id, delta) in [(1_i64, TimeDelta::MAX), (2, TimeDelta::MIN)] {
        let query = sqlx::query("INSERT INTO events (id, duration) VALUES (?, ?)").bind(id);
        column.bind(query, Some(&delta))?.execute(&mut conn).await?;
    }

    let rows = sqlx::query("SELECT duration FROM events ORDER BY id")
        .fetch_all(&mut conn)
        .await?;
    assert_eq!(rows[0].try_get::<f64, _>("duration")?, f64::INFINITY);
    assert_eq!(rows[1].try_get::<f64, _>("duration")?, f64::NEG_INFINITY);
    assert_eq!(column.get(&rows[0], "duration")?, Some(TimeDelta::MAX));
    assert_eq!(column.get(&rows[1], "duration")?, Some(TimeDelta::MIN));

    let strict = IntervalColumn::new();
    assert!(strict.get(&rows[0], "duration").unwrap_err().is_overflow());
    Ok(())
}

#[tokio::test]
async fn test_datetime_arithmetic_in_queries() -> Result<()> {
    let mut conn = common::create_test_connection().await?;
    create_events_table(&mut conn).await?;

    let interval = IntervalColumn::new();
    let datetime = DateTimeColumn::new().with_zone(Utc);
    let starts = Timestamp::Naive(common::datetime(2024, 3, 10, 22, 30, 0, 0));
    let ends = Timestamp::Naive(common::datetime(2024, 3, 11, 1, 0, 0, 250_000));
    let duration = TimeDelta::minutes(90);

    let query = sqlx::query("INSERT INTO events (id, duration, starts_at, ends_at) VALUES (1, ?, ?, ?)");
    let query = interval.bind(query, Some(&duration))?;
    let query = datetime.bind(query, Some(&starts))?;
    let query = datetime.bind(query, Some(&ends))?;
    query.execute(&mut conn).await?;

    let finish = Expr::column("starts_at", ColumnType::DateTime)
        + Expr::column("duration", ColumnType::Interval);
    let elapsed = Expr::column("ends_at", ColumnType::DateTime)
        - Expr::column("starts_at", ColumnType::DateTime);
    assert_eq!(finish.column_type(), Some(ColumnType::DateTime));
    assert_eq!(elapsed.column_type(), Some(ColumnType::Interval));

    let mut builder = QueryBuilder::<Sqlite>::new("SELECT ");
    finish.push_to(&mut builder);
    builder.push(" AS finish, ");
    elapsed.push_to(&mut builder);
    builder.push(" AS elapsed FROM events");
    let row = builder.build().fetch_one(&mut conn).await?;

    assert_eq!(
        datetime.get(&row, "finish")?,
        Some(Timestamp::Naive(common::datetime(2024, 3, 11, 0, 0, 0, 0)))
    );
    assert_eq!(
        interval.get(&row, "elapsed")?,
        Some(TimeDelta::minutes(150) + TimeDelta::milliseconds(250))
    );
    Ok(())
}
