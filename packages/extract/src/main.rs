#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI tool for extracting a closed lap outline from a GPS telemetry log.
//!
//! Reads a delimited recording, cuts the first closed lap out of it,
//! resamples the lap to a fixed-size polygon, and writes the outline/center
//! report consumed by the track visualization. The report is echoed to
//! stdout between separator banners for quick copying.

use std::path::PathBuf;

use clap::Parser;
use track_map_extract::{
    DEFAULT_CLOSURE_RADIUS_M, DEFAULT_MIN_LOOKAHEAD, DEFAULT_MIN_MOVING_POINTS,
    DEFAULT_OUTPUT_PATH, DEFAULT_SPEED_THRESHOLD, DEFAULT_TARGET_COUNT, ExtractError,
    ExtractOptions,
};
use track_map_lap::LapError;

#[derive(Parser)]
#[command(name = "track_map_extract", about = "Track outline extraction tool")]
struct Cli {
    /// Telemetry CSV file to read.
    #[arg(long)]
    input: PathBuf,

    /// Where to write the outline report.
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Speed a sample must strictly exceed to count as moving.
    #[arg(long, default_value_t = DEFAULT_SPEED_THRESHOLD)]
    speed_threshold: f64,

    /// Number of points skipped at the start of the scan before closure is
    /// tested.
    #[arg(long, default_value_t = DEFAULT_MIN_LOOKAHEAD)]
    min_lookahead: usize,

    /// Distance back to the start, in meters, that closes the lap.
    #[arg(long, default_value_t = DEFAULT_CLOSURE_RADIUS_M)]
    closure_radius_m: f64,

    /// Number of outline points to sample down to.
    #[arg(long, default_value_t = DEFAULT_TARGET_COUNT)]
    target_count: usize,

    /// Minimum moving points required to attempt lap detection.
    #[arg(long, default_value_t = DEFAULT_MIN_MOVING_POINTS)]
    min_moving_points: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let options = ExtractOptions {
        input: cli.input,
        output: cli.output,
        speed_threshold: cli.speed_threshold,
        min_lookahead: cli.min_lookahead,
        closure_radius_m: cli.closure_radius_m,
        target_count: cli.target_count,
        min_moving_points: cli.min_moving_points,
    };

    match track_map_extract::run(&options) {
        Ok(summary) => {
            print_report_block(&summary.report);
            Ok(())
        }
        Err(ExtractError::Lap(err @ LapError::NotEnoughPoints { .. })) => {
            log::error!("{err}");
            log::error!("Failed to extract lap data; no report written");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Echoes the report between labeled separator banners.
fn print_report_block(report: &str) {
    println!();
    println!("{}", "=".repeat(60));
    println!("TRACK OUTLINE:");
    println!("{}", "=".repeat(60));
    println!();
    print!("{report}");
    println!("{}", "=".repeat(60));
}
