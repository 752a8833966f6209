//! # maplibre-anchors
//!
//! Label anchor placement for line features of a vector tile.
//!
//! Symbols with `symbol-placement: line` are repeated along a line at a regular spacing, while
//! `symbol-placement: line-center` places a single label at the middle of the line. This crate
//! computes the candidate positions ("anchors") for both modes. Every anchor carries the
//! direction of the line and the segment it was found on, which is what glyph quad generation
//! and the collision index need downstream.
//!
//! The functions follow maplibre-native's `get_anchors.cpp` closely, so labels computed by
//! maplibre-rs land on the same positions as in maplibre-native and maplibre-gl-js.
//!
//! ### Example
//!
//! ```
//! use maplibre_anchors::{coords::GeometryCoordinates, text::get_anchors::get_anchors};
//!
//! let line = GeometryCoordinates::from_points(&[(1, 1), (1, 100)]);
//! let anchors = get_anchors(&line, 20.0, 0.8, -5.0, 5.0, 0.0, 0.0, 24.0, 1.0, 1.0).unwrap();
//! assert!(!anchors.is_empty());
//! ```

pub mod coords;
pub mod error;
pub mod geometry;
pub mod settings;
pub mod text;
pub mod util;

pub use euclid;

pub use crate::{
    error::AnchorError,
    geometry::anchor::{Anchor, Anchors},
    settings::{AnchorSettings, LabelBox},
};
