// ABOUTME: Result-type inference for + and - in symbolic query expressions
// ABOUTME: Minimal typed expression tree rendered into a sqlx QueryBuilder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Expression arithmetic
//!
//! Temporal columns are stored as plain numbers, so the database happily adds a
//! timestamp to an interval. What it cannot do is tell the caller that the sum is a
//! timestamp again. [`infer_arithmetic`] recovers the declared type of such an
//! expression from the declared types of its operands, so the result column can be
//! read back with the right converter:
//!
//! | lhs | op | rhs | result |
//! |---|---|---|---|
//! | datetime | `+` | interval | datetime |
//! | datetime | `-` | interval | datetime |
//! | datetime | `-` | datetime | interval |
//! | anything else | | | numeric promotion of the storage classes |
//!
//! The inference only looks at declared types; no runtime value is touched.

use sqlx::{Database, Encode, QueryBuilder, Type};
use std::fmt;
use std::ops::{Add, Sub};
use temporal_core::ColumnType;

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOp {
    /// `+`
    Add,
    /// `-`
    Sub,
}

impl ArithmeticOp {
    /// SQL operator symbol
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
        }
    }
}

impl fmt::Display for ArithmeticOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Declared type of `lhs op rhs`; `rhs` is `None` for an untyped operand such as a
/// bare literal
#[must_use]
pub const fn infer_arithmetic(
    lhs: ColumnType,
    op: ArithmeticOp,
    rhs: Option<ColumnType>,
) -> ColumnType {
    match (lhs, op, rhs) {
        (ColumnType::DateTime, _, Some(ColumnType::Interval)) => ColumnType::DateTime,
        (ColumnType::DateTime, ArithmeticOp::Sub, Some(ColumnType::DateTime)) => {
            ColumnType::Interval
        }
        _ => numeric_result(lhs, rhs),
    }
}

/// Plain numeric result type; an untyped operand does not promote
const fn numeric_result(lhs: ColumnType, rhs: Option<ColumnType>) -> ColumnType {
    match rhs {
        Some(rhs) => lhs.storage().promote(rhs.storage()).numeric_type(),
        None => lhs.storage().numeric_type(),
    }
}

/// Symbolic query expression with a declared type
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a typed column; the name is emitted verbatim
    Column {
        /// Column name or qualified `table.column`
        name: String,
        /// Declared column type
        column_type: ColumnType,
    },
    /// Untyped numeric literal, bound as a query parameter
    Literal(f64),
    /// `lhs op rhs` with its inferred type
    Binary {
        /// Operator
        op: ArithmeticOp,
        /// Left operand
        lhs: Box<Expr>,
        /// Right operand
        rhs: Box<Expr>,
        /// Inferred result type
        column_type: ColumnType,
    },
}

impl Expr {
    /// Typed column reference
    #[must_use]
    pub fn column(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self::Column {
            name: name.into(),
            column_type,
        }
    }

    /// Untyped numeric literal
    #[must_use]
    pub const fn literal(value: f64) -> Self {
        Self::Literal(value)
    }

    /// Declared type, `None` for a literal
    #[must_use]
    pub const fn column_type(&self) -> Option<ColumnType> {
        match self {
            Self::Column { column_type, .. } | Self::Binary { column_type, .. } => {
                Some(*column_type)
            }
            Self::Literal(_) => None,
        }
    }

    /// Combine two expressions, inferring the result type
    #[must_use]
    pub fn binary(lhs: Self, op: ArithmeticOp, rhs: Self) -> Self {
        let column_type = match (lhs.column_type(), rhs.column_type()) {
            (Some(left), right) => infer_arithmetic(left, op, right),
            (None, Some(right)) => right.storage().numeric_type(),
            (None, None) => ColumnType::Float,
        };
        Self::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            column_type,
        }
    }

    /// Append this expression to `builder`, binding literals as parameters
    pub fn push_to<'args, DB>(&self, builder: &mut QueryBuilder<'args, DB>)
    where
        DB: Database,
        f64: 'args + Encode<'args, DB> + Type<DB>,
    {
        match self {
            Self::Column { name, .. } => {
                builder.push(name);
            }
            Self::Literal(value) => {
                builder.push_bind(*value);
            }
            Self::Binary { op, lhs, rhs, .. } => {
                builder.push("(");
                lhs.push_to(builder);
                builder.push(format_args!(" {op} "));
                rhs.push_to(builder);
                builder.push(")");
            }
        }
    }
}

impl Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::binary(self, ArithmeticOp::Add, rhs)
    }
}

impl Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::binary(self, ArithmeticOp::Sub, rhs)
    }
}

impl Add<f64> for Expr {
    type Output = Self;

    fn add(self, rhs: f64) -> Self {
        Self::binary(self, ArithmeticOp::Add, Self::Literal(rhs))
    }
}

impl Sub<f64> for Expr {
    type Output = Self;

    fn sub(self, rhs: f64) -> Self {
        Self::binary(self, ArithmeticOp::Sub, Self::Literal(rhs))
    }
}
