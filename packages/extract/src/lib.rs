#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Library for extracting a closed lap outline from a GPS telemetry log.
//!
//! Wires the pipeline together in order: read and filter the recording down
//! to its moving points, detect the first closed lap, resample it to a
//! fixed-size polygon, and write the outline/center report. Each stage logs
//! its progress; the report file only appears once every stage has
//! succeeded.

pub mod report;

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use track_map_lap::LapError;
use track_map_lap::detect::detect_lap;
use track_map_lap::resample::resample;
use track_map_lap::stats::{JumpStats, jump_stats};
use track_map_telemetry::TelemetryError;
use track_map_telemetry::reader::read_moving_points;
use track_map_track_models::{Lap, Outline, TrackPoint};

/// Speed a sample must strictly exceed to count as moving.
pub const DEFAULT_SPEED_THRESHOLD: f64 = 1.0;

/// Indices skipped at the start of the lap scan before closure is tested.
pub const DEFAULT_MIN_LOOKAHEAD: usize = 50;

/// Distance back to the start, in meters, that closes a lap.
pub const DEFAULT_CLOSURE_RADIUS_M: f64 = 25.0;

/// Number of outline points the resampler aims for.
pub const DEFAULT_TARGET_COUNT: usize = 55;

/// Minimum count of moving points a recording must contain for lap
/// detection to be attempted.
pub const DEFAULT_MIN_MOVING_POINTS: usize = 50;

/// Default report destination, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "track_outline.txt";

/// Errors that can abort an extraction run.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// Reading or filtering the telemetry log failed.
    #[error("Telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),

    /// Lap detection failed.
    #[error("Lap detection error: {0}")]
    Lap(#[from] LapError),

    /// Writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The outline contained no points to summarize.
    #[error("Cannot summarize an empty outline")]
    EmptyOutline,
}

/// Options controlling an extraction run.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Telemetry CSV file to read.
    pub input: PathBuf,

    /// Where the textual report is written.
    pub output: PathBuf,

    /// Speed a sample must strictly exceed to count as moving.
    pub speed_threshold: f64,

    /// Indices skipped at the start of the lap scan before closure is
    /// tested.
    pub min_lookahead: usize,

    /// Distance back to the start, in meters, that closes the lap.
    pub closure_radius_m: f64,

    /// Number of outline points the resampler aims for.
    pub target_count: usize,

    /// Minimum moving points the recording must contain.
    pub min_moving_points: usize,
}

impl ExtractOptions {
    /// Creates options for the given paths with every tuning knob at its
    /// default.
    #[must_use]
    pub const fn new(input: PathBuf, output: PathBuf) -> Self {
        Self {
            input,
            output,
            speed_threshold: DEFAULT_SPEED_THRESHOLD,
            min_lookahead: DEFAULT_MIN_LOOKAHEAD,
            closure_radius_m: DEFAULT_CLOSURE_RADIUS_M,
            target_count: DEFAULT_TARGET_COUNT,
            min_moving_points: DEFAULT_MIN_MOVING_POINTS,
        }
    }
}

/// What a successful extraction run produced.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Moving points found in the recording.
    pub moving_count: usize,
    /// The detected lap, open or closed.
    pub lap: Lap,
    /// Jump statistics over the lap points, when computable.
    pub jump_stats: Option<JumpStats>,
    /// The resampled, closed outline.
    pub outline: Outline,
    /// Centroid of the outline.
    pub centroid: TrackPoint,
    /// Rendered report text, exactly as written to the output file.
    pub report: String,
}

/// Runs the full extraction pipeline and writes the report file.
///
/// Stages run strictly in order over in-memory data; nothing is written
/// until every stage has succeeded, and the report lands atomically via a
/// temp file in the destination directory.
///
/// # Errors
///
/// * [`ExtractError::Telemetry`] when the input cannot be read or its
///   header lacks a required column.
/// * [`ExtractError::Lap`] when the recording holds too few moving points.
/// * [`ExtractError::Io`] when writing the report fails.
pub fn run(options: &ExtractOptions) -> Result<Summary, ExtractError> {
    log::info!("Reading telemetry log {}", options.input.display());
    let moving = read_moving_points(&options.input, options.speed_threshold)?;
    log::info!("Found {} moving points", moving.len());

    let lap = detect_lap(
        &moving,
        options.min_moving_points,
        options.min_lookahead,
        options.closure_radius_m,
    )?;

    if let Some(start) = lap.points.first() {
        log::info!("Start position: ({}, {})", start.latitude, start.longitude);
    }
    lap.closure.map_or_else(
        || log::warn!("Path never returned to the start; keeping the open lap"),
        |closure| {
            log::info!(
                "Completed lap at point {}, distance to start: {:.2}m",
                closure.index,
                closure.distance_m
            );
        },
    );
    log::info!("Lap contains {} points", lap.points.len());

    let stats = jump_stats(&lap.points);
    if let Some(stats) = stats {
        log::info!(
            "GPS jumps: avg {:.2}m, max {:.2}m, std {:.2}m",
            stats.avg_m,
            stats.max_m,
            stats.std_m
        );
    }

    let outline = resample(&lap.points, options.target_count);
    log::info!("Sampled to {} points", outline.len());

    let centroid = outline.centroid().ok_or(ExtractError::EmptyOutline)?;

    let report = report::render_report(&outline, centroid);
    write_report(&options.output, &report)?;
    log::info!("Report saved to {}", options.output.display());

    Ok(Summary {
        moving_count: moving.len(),
        lap,
        jump_stats: stats,
        outline,
        centroid,
        report,
    })
}

/// Writes the report to a `.tmp` sibling first, then renames it over the
/// final path, so a failed run never leaves a partial report behind.
fn write_report(path: &Path, report: &str) -> Result<(), ExtractError> {
    let mut tmp_name = path
        .file_name()
        .map_or_else(OsString::new, ToOwned::to_owned);
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, report)?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}
