// ABOUTME: temporal-cli - encode and decode temporal column values from the command line
// ABOUTME: Shows exactly which number a converter stores for a value, and what a stored number reads back as
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Store a two day interval
//! temporal-cli encode interval 2d
//!
//! # Read a stored timestamp as UTC
//! temporal-cli --timezone-aware decode datetime 1700000000.5
//!
//! # Clamp the interval bounds to infinity
//! temporal-cli --allow-overflow encode interval max
//!
//! # Interpret naive values at a fixed offset
//! temporal-cli --zone +02:00 encode date 1970-01-02
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::Kind;
use temporal_columns::logging::LoggingConfig;
use temporal_columns::{ColumnConfig, LocalZone};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "temporal-cli",
    about = "Temporal column converter CLI",
    long_about = "Encode values to the numbers temporal columns store, and decode stored numbers back. \
                  Defaults come from TEMPORAL_ALLOW_OVERFLOW, TEMPORAL_TIMEZONE_AWARE and TEMPORAL_LOCAL_ZONE."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Clamp out-of-range intervals to the duration bounds
    #[arg(long, global = true)]
    allow_overflow: bool,

    /// Decode times and timestamps as UTC-tagged values
    #[arg(long, global = true)]
    timezone_aware: bool,

    /// Zone for naive values: "local", "utc", or an offset such as "+05:30"
    #[arg(long, global = true, allow_hyphen_values = true)]
    zone: Option<LocalZone>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Convert a value to its stored number
    Encode {
        /// Column kind
        #[arg(value_enum)]
        kind: Kind,
        /// Value to encode (interval: min, max or 1d2h3m4.5s; date: YYYY-MM-DD;
        /// time: HH:MM:SS[.f][offset]; datetime: RFC 3339 or YYYY-MM-DDTHH:MM:SS[.f])
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Convert a stored number back to a value
    Decode {
        /// Column kind
        #[arg(value_enum)]
        kind: Kind,
        /// Stored number (inf and -inf are accepted for intervals)
        #[arg(allow_hyphen_values = true)]
        stored: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    let mut config = ColumnConfig::from_env()?;
    config.allow_overflow |= cli.allow_overflow;
    config.timezone_aware |= cli.timezone_aware;
    if let Some(zone) = cli.zone {
        config.local_zone = zone;
    }
    debug!(?config, "Effective column configuration");

    let output = match cli.command {
        Command::Encode { kind, value } => commands::encode(&config, kind, &value)?,
        Command::Decode { kind, stored } => commands::decode(&config, kind, &stored)?,
    };
    println!("{output}");

    Ok(())
}
