#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Shared geometry types for the track-map extraction pipeline.
//!
//! Everything downstream of the telemetry reader speaks in these types:
//! [`TrackPoint`] positions, the [`Lap`] cut out of a recording, and the
//! fixed-size [`Outline`] polygon handed to visualization. All of them are
//! derived, read-only values; nothing here mutates after construction.

use serde::{Deserialize, Serialize};

/// A single GPS position in decimal degrees.
///
/// Carries no identity beyond its coordinates. Two points compare equal iff
/// both coordinates are exactly equal, which the resampler relies on when
/// testing polygon closure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl TrackPoint {
    /// Creates a point from decimal-degree coordinates.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Where a lap scan found the path returning to its start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LapClosure {
    /// Index into the moving point sequence at which the path re-entered
    /// the closure radius.
    pub index: usize,
    /// Distance in meters from that point back to the start point.
    pub distance_m: f64,
}

/// One lap worth of moving points: from the first moving sample up to its
/// first near-return, or the whole recording when the path never returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lap {
    /// Ordered points of the lap. Index 0 is the start sample.
    pub points: Vec<TrackPoint>,
    /// Closure information, or `None` for an open lap.
    pub closure: Option<LapClosure>,
}

impl Lap {
    /// Whether the scan found a return to the start point.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closure.is_some()
    }
}

/// A closed polygon approximating a lap, produced by even index-sampling.
///
/// Invariant: when non-empty, the first and last points are
/// coordinate-identical. The resampler enforces this by appending a copy of
/// the first point when needed, so an outline can hold one more point than
/// the sample target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    points: Vec<TrackPoint>,
}

impl Outline {
    /// Wraps an already-sampled point sequence.
    #[must_use]
    pub const fn new(points: Vec<TrackPoint>) -> Self {
        Self { points }
    }

    /// The outline's points in polygon order.
    #[must_use]
    pub fn points(&self) -> &[TrackPoint] {
        &self.points
    }

    /// Number of stored points, the duplicated closing point included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the outline holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Arithmetic mean of all point coordinates.
    ///
    /// Every stored point participates, the duplicated closing point
    /// included, so a closed outline counts its first corner twice. Returns
    /// `None` for an empty outline.
    #[must_use]
    pub fn centroid(&self) -> Option<TrackPoint> {
        if self.points.is_empty() {
            return None;
        }

        #[allow(clippy::cast_precision_loss)]
        let count = self.points.len() as f64;
        let (lat_sum, lon_sum) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(lat, lon), p| (lat + p.latitude, lon + p.longitude));

        Some(TrackPoint::new(lat_sum / count, lon_sum / count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_coordinates_compare_equal() {
        assert_eq!(TrackPoint::new(41.0, -87.5), TrackPoint::new(41.0, -87.5));
        assert_ne!(TrackPoint::new(41.0, -87.5), TrackPoint::new(41.0, -87.6));
    }

    #[test]
    fn lap_is_closed_only_with_closure_info() {
        let points = vec![TrackPoint::new(0.0, 0.0)];

        let open = Lap {
            points: points.clone(),
            closure: None,
        };
        assert!(!open.is_closed());

        let closed = Lap {
            points,
            closure: Some(LapClosure {
                index: 8,
                distance_m: 3.2,
            }),
        };
        assert!(closed.is_closed());
    }

    #[test]
    fn centroid_includes_duplicated_closing_point_in_mean() {
        let outline = Outline::new(vec![
            TrackPoint::new(0.0, 0.0),
            TrackPoint::new(0.0, 2.0),
            TrackPoint::new(2.0, 2.0),
            TrackPoint::new(2.0, 0.0),
            TrackPoint::new(0.0, 0.0),
        ]);

        let centroid = outline.centroid().unwrap();
        assert!((centroid.latitude - 0.8).abs() < f64::EPSILON);
        assert!((centroid.longitude - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn centroid_of_empty_outline_is_none() {
        assert!(Outline::new(Vec::new()).centroid().is_none());
    }
}
