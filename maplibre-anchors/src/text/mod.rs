//! Placement of label anchors along lines.

pub mod center_anchor;
pub mod check_max_angle;
pub mod get_anchors;
pub mod spacing;
