//! Consecutive-jump statistics over a point sequence.

use track_map_track_models::TrackPoint;

use crate::geodesic::distance_m;

/// Distance statistics between consecutive points, in meters.
///
/// A glitchy GPS trace shows up as a maximum and standard deviation far
/// above the mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpStats {
    /// Mean consecutive-point distance.
    pub avg_m: f64,
    /// Largest consecutive-point distance.
    pub max_m: f64,
    /// Population standard deviation of the distances.
    pub std_m: f64,
}

/// Computes consecutive-point jump statistics for a point sequence.
///
/// Returns `None` for sequences shorter than two points.
#[must_use]
pub fn jump_stats(points: &[TrackPoint]) -> Option<JumpStats> {
    if points.len() < 2 {
        return None;
    }

    let jumps: Vec<f64> = points
        .windows(2)
        .map(|pair| distance_m(pair[0], pair[1]))
        .collect();

    #[allow(clippy::cast_precision_loss)]
    let count = jumps.len() as f64;
    let avg_m = jumps.iter().sum::<f64>() / count;
    let max_m = jumps.iter().fold(0.0_f64, |max, &jump| max.max(jump));
    let variance = jumps.iter().map(|jump| (jump - avg_m).powi(2)).sum::<f64>() / count;

    Some(JumpStats {
        avg_m,
        max_m,
        std_m: variance.sqrt(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evenly_spaced_points_have_no_spread() {
        let points: Vec<TrackPoint> = (0..10)
            .map(|i| TrackPoint::new(0.0, f64::from(i) * 0.0001))
            .collect();

        let stats = jump_stats(&points).unwrap();

        assert!((stats.max_m - stats.avg_m).abs() < 1e-6);
        assert!(stats.std_m < 1e-6);
    }

    #[test]
    fn single_glitch_dominates_the_maximum() {
        let mut points: Vec<TrackPoint> = (0..10)
            .map(|i| TrackPoint::new(0.0, f64::from(i) * 0.0001))
            .collect();
        points[5] = TrackPoint::new(0.01, points[5].longitude);

        let stats = jump_stats(&points).unwrap();

        assert!(stats.max_m > 1_000.0);
        assert!(stats.max_m > stats.avg_m * 3.0);
        assert!(stats.std_m > 100.0);
    }

    #[test]
    fn fewer_than_two_points_yields_none() {
        assert!(jump_stats(&[]).is_none());
        assert!(jump_stats(&[TrackPoint::new(0.0, 0.0)]).is_none());
    }
}
