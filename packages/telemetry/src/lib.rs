#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Telemetry log ingestion.
//!
//! Reads a delimited GPS/speed recording, resolves the columns the pipeline
//! needs against the header row once ([`schema::LogSchema`]), and filters
//! the samples down to the moving point sequence the lap detector consumes
//! ([`reader::moving_points`]).

pub mod reader;
pub mod schema;

/// Errors that can occur while reading a telemetry log.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// An I/O operation on the log file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Reading the delimited input failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks a column the pipeline needs.
    #[error("Missing required column `{name}` in header row")]
    MissingColumn {
        /// Name of the absent column.
        name: &'static str,
    },
}
