//! Translated from https://github.com/maplibre/maplibre-native/blob/4add9ea/src/mbgl/text/get_anchors.cpp
//! A single anchor per line for `symbol-placement: line-center`.

use crate::{
    coords::GeometryCoordinates,
    error::AnchorError,
    geometry::{anchor::Anchor, line_metrics::LineMetrics},
    settings::LabelBox,
    text::{check_max_angle::check_max_angle, spacing::get_angle_window_size},
};

/// Places one anchor halfway along `line`.
///
/// Returns `Ok(None)` when the line bends more than `max_angle` underneath the label, when the
/// label does not fit on the line or when the line has no length. Unlike [`get_anchors`], the
/// anchor is kept even if it lies outside of the tile.
///
/// [`get_anchors`]: crate::text::get_anchors::get_anchors
///
/// maplibre/maplibre-native#4add9ea original name: getCenterAnchor
#[allow(clippy::too_many_arguments)]
pub fn get_center_anchor(
    line: &GeometryCoordinates,
    max_angle: f64,
    text_left: f64,
    text_right: f64,
    icon_left: f64,
    icon_right: f64,
    glyph_size: f64,
    box_scale: f64,
) -> Result<Option<Anchor>, AnchorError> {
    let metrics = LineMetrics::new(line)?;
    let label = LabelBox::new(text_left, text_right, icon_left, icon_right);

    let angle_window_size = get_angle_window_size(&label, glyph_size, box_scale);
    let label_length = label.shaped_length() * box_scale;

    let line_length = metrics.total_length();
    if line_length <= 0.0 {
        return Ok(None);
    }

    let center = metrics.interpolate(line_length / 2.0);
    let anchor = Anchor::new(
        center.point.x.round(),
        center.point.y.round(),
        center.angle,
        center.segment,
    );

    if angle_window_size == 0.0
        || check_max_angle(&metrics, &anchor, label_length, angle_window_size, max_angle)
    {
        Ok(Some(anchor))
    } else {
        log::trace!("no center anchor, line bends too much at {:?}", anchor.point);
        Ok(None)
    }
}
