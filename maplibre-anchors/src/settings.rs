//! Settings for anchor placement

use serde::{Deserialize, Serialize};

use crate::{
    coords::{GeometryCoordinates, EXTENT, TILE_SIZE},
    error::AnchorError,
    geometry::anchor::{Anchor, Anchors},
    text::{center_anchor::get_center_anchor, get_anchors::get_anchors},
    util::{
        constants::{DEFAULT_SYMBOL_SPACING, DEFAULT_TEXT_MAX_ANGLE, ONE_EM},
        math::deg2radf,
    },
};

/// Horizontal extent of a shaped label relative to its anchor, in glyph units.
///
/// Text and icon are measured separately because a label may consist of only one of them. A
/// side without content has both edges at 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelBox {
    pub text_left: f64,
    pub text_right: f64,
    pub icon_left: f64,
    pub icon_right: f64,
}

impl LabelBox {
    pub fn new(text_left: f64, text_right: f64, icon_left: f64, icon_right: f64) -> Self {
        Self {
            text_left,
            text_right,
            icon_left,
            icon_right,
        }
    }

    pub fn text(left: f64, right: f64) -> Self {
        Self::new(left, right, 0.0, 0.0)
    }

    pub fn icon(left: f64, right: f64) -> Self {
        Self::new(0.0, 0.0, left, right)
    }

    pub fn has_text(&self) -> bool {
        self.text_left != self.text_right
    }

    /// Length of the wider of text and icon.
    pub fn shaped_length(&self) -> f64 {
        (self.text_right - self.text_left).max(self.icon_right - self.icon_left)
    }
}

/// Layout values that control where anchors are placed on a line.
///
/// The defaults correspond to the style spec defaults of `symbol-spacing` and `text-max-angle`
/// for a tile at its native zoom level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorSettings {
    /// Desired distance between two anchors in tile units.
    pub spacing: f64,
    /// Maximum change of direction under a label in radians.
    pub max_angle: f64,
    pub glyph_size: f64,
    /// Scale from glyph units to tile units.
    pub box_scale: f64,
    /// Factor by which the tile is shown beyond its native zoom level.
    pub overscaling: f64,
}

impl Default for AnchorSettings {
    fn default() -> Self {
        let tile_pixel_ratio = EXTENT / TILE_SIZE;
        Self {
            spacing: DEFAULT_SYMBOL_SPACING * tile_pixel_ratio,
            max_angle: deg2radf(DEFAULT_TEXT_MAX_ANGLE),
            glyph_size: ONE_EM,
            box_scale: tile_pixel_ratio,
            overscaling: 1.0,
        }
    }
}

impl AnchorSettings {
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_max_angle(mut self, max_angle: f64) -> Self {
        self.max_angle = max_angle;
        self
    }

    pub fn with_glyph_size(mut self, glyph_size: f64) -> Self {
        self.glyph_size = glyph_size;
        self
    }

    pub fn with_box_scale(mut self, box_scale: f64) -> Self {
        self.box_scale = box_scale;
        self
    }

    pub fn with_overscaling(mut self, overscaling: f64) -> Self {
        self.overscaling = overscaling;
        self
    }

    /// Settings for the same geometry shown `factor` times beyond the current zoom level.
    ///
    /// Spacing and box scale shrink by `factor` while the start offset is scaled back up by
    /// the overscaling, so all anchors of the current settings are kept and new ones are added
    /// in between.
    pub fn overscaled(&self, factor: f64) -> Self {
        Self {
            spacing: self.spacing / factor,
            box_scale: self.box_scale / factor,
            overscaling: self.overscaling * factor,
            ..self.clone()
        }
    }

    /// Anchors repeated along `line`, see [`get_anchors`].
    pub fn get_anchors(
        &self,
        line: &GeometryCoordinates,
        label: &LabelBox,
    ) -> Result<Anchors, AnchorError> {
        get_anchors(
            line,
            self.spacing,
            self.max_angle,
            label.text_left,
            label.text_right,
            label.icon_left,
            label.icon_right,
            self.glyph_size,
            self.box_scale,
            self.overscaling,
        )
    }

    /// A single anchor at the middle of `line`, see [`get_center_anchor`].
    pub fn get_center_anchor(
        &self,
        line: &GeometryCoordinates,
        label: &LabelBox,
    ) -> Result<Option<Anchor>, AnchorError> {
        get_center_anchor(
            line,
            self.max_angle,
            label.text_left,
            label.text_right,
            label.icon_left,
            label.icon_right,
            self.glyph_size,
            self.box_scale,
        )
    }
}
