//! Lap closure detection over a moving point sequence.

use track_map_track_models::{Lap, LapClosure, TrackPoint};

use crate::LapError;
use crate::geodesic::distance_m;

/// Scans a moving point sequence for its first return to the start.
///
/// Walks the points in recorded order, accumulating the lap as it goes. Once
/// past `min_lookahead` indices, the first point strictly closer than
/// `closure_radius_m` to the start closes the lap and becomes its last
/// element. When the scan exhausts the sequence without closing, the whole
/// sequence is returned as an open lap (`closure: None`).
///
/// The lookahead guard keeps the first few samples, still inside the closure
/// radius by construction, from closing the lap immediately.
///
/// # Errors
///
/// Returns [`LapError::NotEnoughPoints`] when `points` has fewer than
/// `min_moving_points` entries.
pub fn detect_lap(
    points: &[TrackPoint],
    min_moving_points: usize,
    min_lookahead: usize,
    closure_radius_m: f64,
) -> Result<Lap, LapError> {
    if points.len() < min_moving_points {
        return Err(LapError::NotEnoughPoints {
            found: points.len(),
            needed: min_moving_points,
        });
    }
    let Some(&start) = points.first() else {
        return Err(LapError::NotEnoughPoints {
            found: 0,
            needed: 1,
        });
    };

    let mut lap_points = vec![start];

    for (i, &point) in points.iter().enumerate().skip(1) {
        lap_points.push(point);

        if i > min_lookahead {
            let distance = distance_m(point, start);
            if distance < closure_radius_m {
                return Ok(Lap {
                    points: lap_points,
                    closure: Some(LapClosure {
                        index: i,
                        distance_m: distance,
                    }),
                });
            }
        }
    }

    Ok(Lap {
        points: lap_points,
        closure: None,
    })
}
