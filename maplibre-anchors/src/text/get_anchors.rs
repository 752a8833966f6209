//! Translated from https://github.com/maplibre/maplibre-native/blob/4add9ea/src/mbgl/text/get_anchors.cpp
//! Anchors repeated along a line for `symbol-placement: line`.

use crate::{
    coords::{is_inside_tile, GeometryCoordinates},
    error::AnchorError,
    geometry::{
        anchor::{Anchor, Anchors},
        line_metrics::{LineMetrics, LinePosition},
    },
    settings::LabelBox,
    text::{check_max_angle::check_max_angle, spacing::AnchorSpacing},
};

/// Walks a line in steps of the anchor spacing.
struct AnchorWalker<'a> {
    metrics: &'a LineMetrics,
    spacing: &'a AnchorSpacing,
    max_angle: f64,
}

impl<'a> AnchorWalker<'a> {
    /// Places anchors at `offset`, `offset + spacing`, ... up to the end of the line. Candidates
    /// outside of the tile, too close to an end of the line for the label to fit or on a part
    /// of the line which bends too much are skipped. The walk keeps half a spacing away from the
    /// end of the line, and a candidate which rounds to the previous anchor is dropped.
    ///
    /// maplibre/maplibre-native#4add9ea original name: resample
    fn resample(&self, offset: f64) -> Anchors {
        let line_length = self.metrics.total_length();
        let half_label_length = self.spacing.label_length / 2.0;
        let half_spacing = self.spacing.spacing / 2.0;

        let mut anchors = Anchors::new();
        let mut distance = offset;

        while line_length - distance >= half_spacing {
            let position = self.metrics.interpolate(distance);

            // Check that the point is within the tile boundaries and that the label would fit
            // before the beginning and end of the line if placed at this point.
            if is_inside_tile(&position.point)
                && distance - half_label_length >= 0.0
                && distance + half_label_length <= line_length
            {
                let anchor = to_anchor(&position);

                // Small steps along diagonals round to the same point
                if anchors.last() != Some(&anchor) {
                    if self.spacing.angle_window_size == 0.0
                        || check_max_angle(
                            self.metrics,
                            &anchor,
                            self.spacing.label_length,
                            self.spacing.angle_window_size,
                            self.max_angle,
                        )
                    {
                        anchors.push(anchor);
                    } else {
                        log::trace!("line bends too much for a label at {:?}", anchor.point);
                    }
                }
            }

            distance += self.spacing.spacing;
        }

        anchors
    }

    /// A single anchor halfway along the line.
    fn midpoint(&self) -> Anchor {
        to_anchor(&self.metrics.interpolate(self.metrics.total_length() / 2.0))
    }
}

/// Anchors are snapped to whole tile units.
fn to_anchor(position: &LinePosition) -> Anchor {
    Anchor::new(
        position.point.x.round(),
        position.point.y.round(),
        position.angle,
        position.segment,
    )
}

/// Resamples a line to get anchor points for labels. Each potential label has to pass the
/// `text-max-angle` check and has to fit on the line.
///
/// Lines shorter than the spacing get exactly one anchor at their middle. Lines which would
/// otherwise get no anchor at all and do not continue into a neighbouring tile are tried again
/// starting at their middle.
///
/// # Arguments
///
/// * `line` - The line in tile coordinates, at least two points.
/// * `spacing` - Desired distance between anchors in tile units.
/// * `max_angle` - Maximum change of direction underneath a label in radians.
/// * `text_left`, `text_right` - Horizontal extent of the shaped text.
/// * `icon_left`, `icon_right` - Horizontal extent of the shaped icon.
/// * `glyph_size` - Size of a glyph in glyph units.
/// * `box_scale` - Scale from glyph units to tile units.
/// * `overscaling` - Factor by which the tile is shown beyond its native zoom level.
///
/// maplibre/maplibre-native#4add9ea original name: getAnchors
#[allow(clippy::too_many_arguments)]
pub fn get_anchors(
    line: &GeometryCoordinates,
    spacing: f64,
    max_angle: f64,
    text_left: f64,
    text_right: f64,
    icon_left: f64,
    icon_right: f64,
    glyph_size: f64,
    box_scale: f64,
    overscaling: f64,
) -> Result<Anchors, AnchorError> {
    let metrics = LineMetrics::new(line)?;
    let label = LabelBox::new(text_left, text_right, icon_left, icon_right);
    let spacing = AnchorSpacing::new(line, spacing, &label, glyph_size, box_scale, overscaling)?;

    let walker = AnchorWalker {
        metrics: &metrics,
        spacing: &spacing,
        max_angle,
    };

    let line_length = metrics.total_length();

    if spacing.use_midpoint(line_length) {
        log::trace!(
            "line of length {line_length} is shorter than spacing {}, using its midpoint",
            spacing.spacing
        );
        return Ok(vec![walker.midpoint()]);
    }

    let anchors = walker.resample(spacing.offset);

    if anchors.is_empty() && !spacing.continued_line {
        // The offset aligns labels with the parent tile instead of placing them as close to the
        // beginning as possible. Short lines in overscaled tiles may miss out on every label
        // because of that, so try once more from the middle of the line.
        log::trace!("no anchor fits from offset {}, retrying at the middle", spacing.offset);
        return Ok(walker.resample(line_length / 2.0));
    }

    Ok(anchors)
}
