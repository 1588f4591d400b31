//! Textual rendering of the outline report.

use std::fmt::Write as _;

use track_map_track_models::{Outline, TrackPoint};

/// Renders the outline/center report block.
///
/// The layout, trailing newline included, is what downstream visualization
/// pastes in verbatim:
///
/// ```text
/// outline: [
///     [<lat>, <lon>],
///     ...
/// ]
///
/// center: [<lat>, <lon>]
/// ```
///
/// Coordinates are rendered at full native precision; nothing is rounded.
#[must_use]
pub fn render_report(outline: &Outline, centroid: TrackPoint) -> String {
    let mut report = String::from("outline: [\n");
    for point in outline.points() {
        let _ = writeln!(report, "    [{}, {}],", point.latitude, point.longitude);
    }
    report.push_str("]\n\n");
    let _ = writeln!(report, "center: [{}, {}]", centroid.latitude, centroid.longitude);

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_matches_the_expected_layout_exactly() {
        let outline = Outline::new(vec![
            TrackPoint::new(1.5, 2.25),
            TrackPoint::new(3.0, 3.75),
            TrackPoint::new(1.5, 2.25),
        ]);
        let centroid = outline.centroid().unwrap();

        let report = render_report(&outline, centroid);

        assert_eq!(
            report,
            "outline: [\n    [1.5, 2.25],\n    [3, 3.75],\n    [1.5, 2.25],\n]\n\ncenter: [2, 2.75]\n"
        );
    }

    #[test]
    fn coordinates_render_at_full_precision() {
        let outline = Outline::new(vec![
            TrackPoint::new(40.446195, -79.982195),
            TrackPoint::new(40.446195, -79.982195),
        ]);

        let report = render_report(&outline, outline.centroid().unwrap());

        assert!(report.contains("[40.446195, -79.982195],"));
        assert!(report.contains("center: [40.446195, -79.982195]"));
    }

    #[test]
    fn empty_outline_still_renders_the_frame() {
        let report = render_report(&Outline::new(Vec::new()), TrackPoint::new(0.0, 0.0));

        assert_eq!(report, "outline: [\n]\n\ncenter: [0, 0]\n");
    }
}
