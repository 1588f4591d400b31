//! Fixed-count index resampling of lap points.

use track_map_track_models::{Outline, TrackPoint};

/// Downsamples lap points to `target_count` evenly index-spaced points and
/// forces polygon closure.
///
/// Sequences no longer than `target_count` pass through unchanged apart from
/// the closure step; there is no upsampling or interpolation. Longer
/// sequences keep `points[floor(i * len / target_count)]` for each output
/// slot, skipping any computed index past the end, so the result can fall
/// short of `target_count`. Selection picks existing samples; it never
/// averages neighbors.
///
/// Closure: when the sampled sequence's last point differs from its first
/// (exact coordinate equality), a copy of the first point is appended, which
/// can push the result to `target_count + 1` points.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn resample(points: &[TrackPoint], target_count: usize) -> Outline {
    let mut sampled: Vec<TrackPoint> = if points.len() <= target_count {
        points.to_vec()
    } else {
        let step = points.len() as f64 / target_count as f64;
        (0..target_count)
            .filter_map(|i| {
                let index = (i as f64 * step).floor() as usize;
                points.get(index).copied()
            })
            .collect()
    };

    if let (Some(&first), Some(&last)) = (sampled.first(), sampled.last())
        && last != first
    {
        sampled.push(first);
    }

    Outline::new(sampled)
}
