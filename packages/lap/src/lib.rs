#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Lap geometry core.
//!
//! Pure transformations from a moving point sequence to a closed track
//! outline: great-circle distance ([`geodesic`]), lap closure detection
//! ([`detect`]), fixed-count resampling ([`resample`]), and consecutive-jump
//! statistics ([`stats`]). Nothing in this crate performs I/O or logging;
//! callers own all reporting.

pub mod detect;
pub mod geodesic;
pub mod resample;
pub mod stats;

/// Errors from lap detection.
#[derive(Debug, thiserror::Error)]
pub enum LapError {
    /// The recording has too few moving samples to contain a lap.
    #[error("Not enough moving points to detect a lap: found {found}, need at least {needed}")]
    NotEnoughPoints {
        /// Moving points available.
        found: usize,
        /// Minimum required.
        needed: usize,
    },
}
