// ABOUTME: Core types and constants for the temporal column converters
// ABOUTME: Foundation crate with the conversion error type, column type tags, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Temporal Core
//!
//! Foundation crate shared by the temporal column converters. It holds the pieces that
//! change rarely so the converter crate can be rebuilt without touching them.
//!
//! ## Modules
//!
//! - **errors**: `ConversionError` and the `ConversionResult` alias
//! - **constants**: unit conversions and environment variable names
//! - **column**: `ColumnType` and `StorageClass` tags used by expression inference

/// Conversion error type shared by every converter
pub mod errors;

/// Unit constants, configuration keys, and service names
pub mod constants;

/// Declared column type tags and their storage classes
pub mod column;

pub use column::{ColumnType, StorageClass};
pub use errors::{ConversionError, ConversionResult};
