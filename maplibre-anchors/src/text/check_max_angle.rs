//! Translated from https://github.com/maplibre/maplibre-native/blob/4add9ea/src/mbgl/text/check_max_angle.cpp
//! Rejects labels on lines which bend too much underneath them.

use std::{collections::VecDeque, f64::consts::PI};

use crate::{
    geometry::{anchor::Anchor, line_metrics::LineMetrics},
    util::math::{dist, wrap},
};

struct Corner {
    /// Distance of the corner from the anchor.
    distance: f64,
    angle_delta: f64,
}

/// Labels placed at line vertices are bent around the corner. Checks that the sum of the
/// changes of direction within any `window_size` long part of the label does not exceed
/// `max_angle`.
///
/// Fails as well if the label does not fit on the line when centered at `anchor`.
///
/// # Arguments
///
/// * `metrics` - The line the label is placed on.
/// * `anchor` - The center of the label.
/// * `label_length` - Length of the label in tile units.
/// * `window_size` - Length over which the corners are summed up.
/// * `max_angle` - Maximum allowed sum of corner angles in radians.
///
/// maplibre/maplibre-native#4add9ea original name: checkMaxAngle
pub fn check_max_angle(
    metrics: &LineMetrics,
    anchor: &Anchor,
    label_length: f64,
    window_size: f64,
    max_angle: f64,
) -> bool {
    if label_length <= 0.0 {
        return true;
    }

    let points = metrics.points();
    let mut index = anchor.segment + 1;
    let mut anchor_distance = 0.0;
    let mut p = anchor.point;

    // Move backwards along the line to the first segment the label appears on
    while anchor_distance > -label_length / 2.0 {
        // There isn't enough room for the label after the beginning of the line
        if index == 0 {
            return false;
        }

        index -= 1;
        anchor_distance -= dist(&points[index], &p);
        p = points[index];
    }

    anchor_distance += metrics.segment_length(index);
    index += 1;

    let mut recent_corners: VecDeque<Corner> = VecDeque::new();
    let mut recent_angle_delta = 0.0;

    // Move forwards by the length of the label and check angles along the way
    while anchor_distance < label_length / 2.0 {
        // There isn't enough room for the label before the end of the line
        if index + 1 >= points.len() {
            return false;
        }

        let angle_delta = wrap(
            metrics.segment_angle(index - 1) - metrics.segment_angle(index),
            -PI,
            PI,
        );

        recent_corners.push_back(Corner {
            distance: anchor_distance,
            angle_delta,
        });
        recent_angle_delta += angle_delta;

        // Forget corners which are out of the window
        while let Some(corner) = recent_corners.front() {
            if anchor_distance - corner.distance <= window_size {
                break;
            }
            recent_angle_delta -= corner.angle_delta;
            recent_corners.pop_front();
        }

        if recent_angle_delta.abs() > max_angle {
            return false;
        }

        anchor_distance += metrics.segment_length(index);
        index += 1;
    }

    true
}
