//! Great-circle distance on a spherical Earth.

use track_map_track_models::TrackPoint;

/// Mean Earth radius in meters used for all distance computations.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance between two points, in meters.
///
/// Spherical model; accurate to well under a percent at track scale, which
/// is all the closure test needs. Symmetric in its arguments and zero for
/// coincident points.
#[must_use]
pub fn distance_m(a: TrackPoint, b: TrackPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_for_identical_points() {
        let point = TrackPoint::new(40.1234, -86.5678);
        assert!(distance_m(point, point).abs() < 1e-6);
    }

    #[test]
    fn symmetric_in_its_arguments() {
        let a = TrackPoint::new(40.0, -86.0);
        let b = TrackPoint::new(40.01, -86.02);
        assert!((distance_m(a, b) - distance_m(b, a)).abs() < 1e-9);
    }

    #[test]
    fn one_degree_of_longitude_at_the_equator() {
        let d = distance_m(TrackPoint::new(0.0, 0.0), TrackPoint::new(0.0, 1.0));
        // 1% tolerance around the textbook 111,195 m
        assert!((d - 111_195.0).abs() < 1_112.0);
    }

    #[test]
    fn track_scale_distances_are_plausible() {
        // Two points ~100 m apart along a latitude line
        let a = TrackPoint::new(39.8000, -86.2000);
        let b = TrackPoint::new(39.8009, -86.2000);
        let d = distance_m(a, b);
        assert!(d > 90.0 && d < 110.0);
    }
}
