// ABOUTME: Declared column type tags and the storage class each one maps onto
// ABOUTME: Used by the converters for DDL and by expression arithmetic inference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric storage class a column is persisted as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageClass {
    /// IEEE double precision float
    Real,
    /// Signed 64-bit integer
    Integer,
}

impl StorageClass {
    /// SQL type name used in column definitions
    #[must_use]
    pub const fn sql_type(self) -> &'static str {
        match self {
            Self::Real => "REAL",
            Self::Integer => "INTEGER",
        }
    }

    /// Storage class of a numeric `+`/`-` between two operands
    ///
    /// Mixing a real with anything yields a real, as SQL numeric promotion does.
    #[must_use]
    pub const fn promote(self, other: Self) -> Self {
        match (self, other) {
            (Self::Integer, Self::Integer) => Self::Integer,
            _ => Self::Real,
        }
    }

    /// Plain numeric column type backing this storage class
    #[must_use]
    pub const fn numeric_type(self) -> ColumnType {
        match self {
            Self::Real => ColumnType::Float,
            Self::Integer => ColumnType::Integer,
        }
    }
}

/// Declared type of a column or expression
///
/// The four temporal types are the converters in this workspace; `Float` and `Integer`
/// are plain numeric results that carry no temporal meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Duration stored as seconds
    Interval,
    /// Calendar date stored as local-midnight epoch seconds
    Date,
    /// Time of day stored as epoch seconds on the reference date
    Time,
    /// Timestamp stored as epoch seconds
    DateTime,
    /// Untagged real number
    Float,
    /// Untagged integer
    Integer,
}

impl ColumnType {
    /// Storage class the column is persisted as
    #[must_use]
    pub const fn storage(self) -> StorageClass {
        match self {
            Self::Date | Self::Integer => StorageClass::Integer,
            Self::Interval | Self::Time | Self::DateTime | Self::Float => StorageClass::Real,
        }
    }

    /// SQL type name used in column definitions
    #[must_use]
    pub const fn sql_type(self) -> &'static str {
        self.storage().sql_type()
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Interval => "interval",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "datetime",
            Self::Float => "float",
            Self::Integer => "integer",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_classes() {
        assert_eq!(ColumnType::Date.storage(), StorageClass::Integer);
        assert_eq!(ColumnType::DateTime.storage(), StorageClass::Real);
        assert_eq!(ColumnType::Interval.sql_type(), "REAL");
        assert_eq!(ColumnType::Date.sql_type(), "INTEGER");
    }

    #[test]
    fn test_promotion() {
        use StorageClass::{Integer, Real};
        assert_eq!(Integer.promote(Integer), Integer);
        assert_eq!(Integer.promote(Real), Real);
        assert_eq!(Real.promote(Integer), Real);
        assert_eq!(Real.promote(Real).numeric_type(), ColumnType::Float);
    }

    #[test]
    fn test_serde_names_match_display() {
        for ty in [
            ColumnType::Interval,
            ColumnType::Date,
            ColumnType::Time,
            ColumnType::DateTime,
            ColumnType::Float,
            ColumnType::Integer,
        ] {
            let json = serde_json::to_string(&ty).unwrap();
            assert_eq!(json, format!("\"{ty}\""));
        }
    }
}
