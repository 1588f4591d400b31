//! Reading and filtering of raw telemetry records.

use std::fs;
use std::path::Path;

use track_map_track_models::TrackPoint;

use crate::TelemetryError;
use crate::schema::LogSchema;

/// Reads a telemetry log from disk and returns its moving points.
///
/// The file is decoded as UTF-8 with invalid bytes replaced; a stray high
/// byte from data-logger firmware in a column this tool ignores does not
/// abort the run.
///
/// # Errors
///
/// * [`TelemetryError::Io`] when the file cannot be read.
/// * [`TelemetryError::MissingColumn`] when the header row lacks a required
///   column.
/// * [`TelemetryError::Csv`] when the header row cannot be parsed.
pub fn read_moving_points(
    path: &Path,
    speed_threshold: f64,
) -> Result<Vec<TrackPoint>, TelemetryError> {
    let bytes = fs::read(path)?;
    log::debug!("Read {} bytes from {}", bytes.len(), path.display());

    moving_points(&String::from_utf8_lossy(&bytes), speed_threshold)
}

/// Filters delimited telemetry text down to its moving points.
///
/// A row yields a point iff its speed strictly exceeds `speed_threshold` and
/// both coordinates parse to finite numbers. Rows that fail to parse and
/// blank lines are skipped without error. Column positions are resolved
/// from the header row before any record is touched, so a malformed header
/// fails the whole run rather than silently dropping every row.
///
/// # Errors
///
/// * [`TelemetryError::MissingColumn`] when the header row lacks `speed`,
///   `latitude`, or `longitude`.
/// * [`TelemetryError::Csv`] when the header row cannot be parsed.
pub fn moving_points(
    input: &str,
    speed_threshold: f64,
) -> Result<Vec<TrackPoint>, TelemetryError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(input.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|header| header.trim().to_owned())
        .collect();
    let schema = LogSchema::resolve(&headers)?;

    let mut points = Vec::new();
    for result in reader.records() {
        let record = result?;
        if let Some(point) = schema.moving_point(&record, speed_threshold) {
            points.push(point);
        }
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_moving_rows_with_parseable_coordinates() {
        let input = "\
timestamp,speed,latitude,longitude
t0,0.5,40.0,-75.0
t1,1.0,40.1,-75.1
t2,5.0,40.2,-75.2

t3,5.0,not-a-number,-75.3
t4,5.0,40.4,inf
t5,6.0,40.5,-75.5
";

        let points = moving_points(input, 1.0).unwrap();
        assert_eq!(
            points,
            vec![TrackPoint::new(40.2, -75.2), TrackPoint::new(40.5, -75.5)]
        );
    }

    #[test]
    fn all_rows_above_threshold_are_all_kept() {
        let mut input = String::from("speed,latitude,longitude\n");
        for i in 0..20 {
            input.push_str(&format!("3.0,40.{i},-75.{i}\n"));
        }

        let points = moving_points(&input, 1.0).unwrap();
        assert_eq!(points.len(), 20);
    }

    #[test]
    fn missing_required_column_fails_before_any_row() {
        let input = "speed,lat,lon\n5.0,40.0,-75.0\n";

        let err = moving_points(input, 1.0).unwrap_err();
        assert!(matches!(
            err,
            TelemetryError::MissingColumn { name: "latitude" }
        ));
    }

    #[test]
    fn short_records_are_skipped() {
        let input = "speed,latitude,longitude\n5.0\n5.0,40.0,-75.0\n";

        let points = moving_points(input, 1.0).unwrap();
        assert_eq!(points, vec![TrackPoint::new(40.0, -75.0)]);
    }

    #[test]
    fn header_whitespace_is_trimmed() {
        let input = "speed, latitude , longitude\n5.0,40.0,-75.0\n";

        let points = moving_points(input, 1.0).unwrap();
        assert_eq!(points, vec![TrackPoint::new(40.0, -75.0)]);
    }

    #[test]
    fn missing_input_file_is_an_io_error() {
        let err = read_moving_points(Path::new("/nonexistent/telemetry.csv"), 1.0).unwrap_err();
        assert!(matches!(err, TelemetryError::Io(_)));
    }
}
