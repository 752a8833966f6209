//! Translated (partially) from https://github.com/maplibre/maplibre-native/blob/4add9ea/src/mbgl/text/get_anchors.cpp
//! Spacing of anchors along a line.
//!
//! Anchors are placed `spacing` apart, starting at an offset from the start of the line. The
//! offset depends on whether the line starts at the tile border: a line continued from a
//! neighbouring tile must keep the rhythm of the anchors placed there, a line which starts in
//! this tile only needs enough room for the first label.
//!
//! Overscaled tiles reuse the geometry of their parent. Spacing and box scale shrink with the
//! overscaling while the start offset is scaled back up, so every anchor of the parent tile is
//! found again in the child.

use crate::{
    coords::{GeometryCoordinates, EXTENT_SINT},
    error::AnchorError,
    settings::LabelBox,
};

/// Anchors are rounded to whole tile units, a smaller spacing would mostly repeat the previous
/// anchor.
pub const MIN_SPACING: f64 = 1.0;

/// Effective spacing and start offset of the anchors of one line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorSpacing {
    pub spacing: f64,
    pub offset: f64,
    /// Length of the label in tile units.
    pub label_length: f64,
    /// Length over which changes of direction are summed up by the curvature check.
    pub angle_window_size: f64,
    pub continued_line: bool,
}

impl AnchorSpacing {
    pub fn new(
        line: &GeometryCoordinates,
        spacing: f64,
        label: &LabelBox,
        glyph_size: f64,
        box_scale: f64,
        overscaling: f64,
    ) -> Result<Self, AnchorError> {
        if !spacing.is_finite() || spacing <= 0.0 {
            log::warn!("invalid anchor spacing {spacing}");
            return Err(AnchorError::InvalidSpacing(spacing));
        }

        let angle_window_size = get_angle_window_size(label, glyph_size, box_scale);
        let shaped_label_length = label.shaped_length();
        let label_length = shaped_label_length * box_scale;

        let continued_line = is_continued_line(line);

        // Long labels relative to the spacing: keep at least `spacing / 4` between label edges.
        let spacing = if spacing - label_length < spacing / 4.0 {
            label_length + spacing / 4.0
        } else {
            spacing
        }
        .max(MIN_SPACING);

        // Non-continued lines get a fixed extra offset to avoid collisions at T intersections.
        let fixed_extra_offset = glyph_size * 2.0;

        let offset = if continued_line {
            (spacing / 2.0 * overscaling) % spacing
        } else {
            ((shaped_label_length / 2.0 + fixed_extra_offset) * box_scale * overscaling) % spacing
        };

        Ok(Self {
            spacing,
            offset,
            label_length,
            angle_window_size,
            continued_line,
        })
    }

    /// Lines shorter than the spacing get a single anchor at their middle.
    pub fn use_midpoint(&self, line_length: f64) -> bool {
        line_length < self.spacing
    }
}

/// The curvature check only applies to text. A window size of 0 disables it.
pub fn get_angle_window_size(label: &LabelBox, glyph_size: f64, box_scale: f64) -> f64 {
    if label.has_text() {
        3.0 / 5.0 * glyph_size * box_scale
    } else {
        0.0
    }
}

/// Whether the line starts on the tile border and therefore continues from a neighbouring tile.
pub fn is_continued_line(line: &GeometryCoordinates) -> bool {
    line.first().map_or(false, |start| {
        let (x, y) = (i32::from(start.x), i32::from(start.y));
        x == 0 || x == EXTENT_SINT || y == 0 || y == EXTENT_SINT
    })
}
