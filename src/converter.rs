// ABOUTME: ColumnConverter trait implemented by every temporal column adapter
// ABOUTME: Null-transparent bind/result hooks plus sqlx query binding and row decoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Column converter abstraction
//!
//! A converter owns its configuration (overflow clamping, timezone awareness, local
//! zone) and maps one application type onto one numeric storage primitive. The
//! `bind` and `get` methods plug the converter into sqlx for any database whose
//! `Option<f64>` / `Option<i64>` implement the sqlx codec traits.

use sqlx::query::Query;
use sqlx::{ColumnIndex, Database, Decode, Encode, Row, Type};
use temporal_core::{ColumnType, ConversionResult, StorageClass};

/// Bidirectional conversion between an application value and its stored number
pub trait ColumnConverter {
    /// Application-level value type
    type Value;

    /// Numeric primitive written to the column
    type Stored: Copy;

    /// Declared type of columns managed by this converter
    const COLUMN_TYPE: ColumnType;

    /// Storage class of the column
    const STORAGE: StorageClass = Self::COLUMN_TYPE.storage();

    /// Convert an application value to its stored representation
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be placed on the epoch timeline
    fn encode(&self, value: &Self::Value) -> ConversionResult<Self::Stored>;

    /// Convert a stored number back to an application value
    ///
    /// # Errors
    ///
    /// Returns an error if the stored number is outside the representable range
    fn decode(&self, stored: Self::Stored) -> ConversionResult<Self::Value>;

    /// Bind hook: `None` stays `None`, anything else is encoded
    ///
    /// # Errors
    ///
    /// Propagates `encode` failures
    fn bind_value(&self, value: Option<&Self::Value>) -> ConversionResult<Option<Self::Stored>> {
        value.map(|value| self.encode(value)).transpose()
    }

    /// Result hook: `None` stays `None`, anything else is decoded
    ///
    /// # Errors
    ///
    /// Propagates `decode` failures
    fn result_value(&self, stored: Option<Self::Stored>) -> ConversionResult<Option<Self::Value>> {
        stored.map(|stored| self.decode(stored)).transpose()
    }

    /// Encode `value` and bind it as the next query parameter
    ///
    /// # Errors
    ///
    /// Propagates `encode` failures
    fn bind<'q, DB>(
        &self,
        query: Query<'q, DB, <DB as Database>::Arguments<'q>>,
        value: Option<&Self::Value>,
    ) -> ConversionResult<Query<'q, DB, <DB as Database>::Arguments<'q>>>
    where
        DB: Database,
        Option<Self::Stored>: 'q + Encode<'q, DB> + Type<DB>,
    {
        Ok(query.bind(self.bind_value(value)?))
    }

    /// Read `column` from `row` and decode it
    ///
    /// # Errors
    ///
    /// Returns `Database` if the column is missing or has an incompatible type, and
    /// propagates `decode` failures
    fn get<R>(&self, row: &R, column: &str) -> ConversionResult<Option<Self::Value>>
    where
        R: Row,
        for<'a> &'a str: ColumnIndex<R>,
        Option<Self::Stored>: for<'r> Decode<'r, R::Database> + Type<R::Database>,
    {
        let stored: Option<Self::Stored> = row.try_get(column)?;
        self.result_value(stored)
    }

    /// Column definition fragment, e.g. `"created_at REAL"`
    fn column_definition(&self, name: &str) -> String {
        format!("{name} {}", Self::STORAGE.sql_type())
    }
}
