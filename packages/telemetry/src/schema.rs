//! Header-row schema resolution and per-record field parsing.

use track_map_track_models::TrackPoint;

use crate::TelemetryError;

/// Name of the column carrying the recorded speed.
pub const COLUMN_SPEED: &str = "speed";

/// Name of the column carrying latitude in decimal degrees.
pub const COLUMN_LATITUDE: &str = "latitude";

/// Name of the column carrying longitude in decimal degrees.
pub const COLUMN_LONGITUDE: &str = "longitude";

/// Resolved column positions for the fields the pipeline reads.
///
/// Resolution happens once per run, against the header row, before any
/// record is parsed. Matching is case-sensitive and exact; columns beyond
/// the required three are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSchema {
    speed: usize,
    latitude: usize,
    longitude: usize,
}

impl LogSchema {
    /// Resolves the required columns against a header row.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::MissingColumn`] naming the first required
    /// column absent from `headers`.
    pub fn resolve(headers: &[String]) -> Result<Self, TelemetryError> {
        Ok(Self {
            speed: column_index(headers, COLUMN_SPEED)?,
            latitude: column_index(headers, COLUMN_LATITUDE)?,
            longitude: column_index(headers, COLUMN_LONGITUDE)?,
        })
    }

    /// Extracts a moving point from one record.
    ///
    /// Returns `None` when the row is stationary (speed not strictly above
    /// `speed_threshold`), too short, or any required field fails to parse.
    /// Coordinates must additionally be finite.
    #[must_use]
    pub fn moving_point(
        &self,
        record: &csv::StringRecord,
        speed_threshold: f64,
    ) -> Option<TrackPoint> {
        let moving =
            numeric_field(record, self.speed).is_some_and(|speed| speed > speed_threshold);
        if !moving {
            return None;
        }

        let latitude = finite_field(record, self.latitude)?;
        let longitude = finite_field(record, self.longitude)?;

        Some(TrackPoint::new(latitude, longitude))
    }
}

fn column_index(headers: &[String], name: &'static str) -> Result<usize, TelemetryError> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or(TelemetryError::MissingColumn { name })
}

fn numeric_field(record: &csv::StringRecord, index: usize) -> Option<f64> {
    record.get(index)?.trim().parse().ok()
}

fn finite_field(record: &csv::StringRecord, index: usize) -> Option<f64> {
    numeric_field(record, index).filter(|value| value.is_finite())
}
