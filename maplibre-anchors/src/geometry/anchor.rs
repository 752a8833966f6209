//! Translated from https://github.com/maplibre/maplibre-native/blob/4add9ea/src/mbgl/text/anchor.hpp

use euclid::Point2D;
use serde::{Deserialize, Serialize};

use crate::{coords::TileSpace, util::math::normalize_angle};

/// A candidate position for a label on a line.
///
/// `angle` is the direction of the line at `point` in radians and `segment` is the index of the
/// line segment the anchor was found on. Collision boxes and glyph quads are laid out along the
/// line starting from that segment.
///
/// maplibre/maplibre-native#4add9ea original name: Anchor
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub point: Point2D<f64, TileSpace>,
    pub angle: f64,
    pub segment: usize,
}

impl Anchor {
    pub fn new(x: f64, y: f64, angle: f64, segment: usize) -> Self {
        Self {
            point: Point2D::new(x, y),
            angle: normalize_angle(angle),
            segment,
        }
    }
}

/// maplibre/maplibre-native#4add9ea original name: Anchors
pub type Anchors = Vec<Anchor>;
