//! Errors which can happen while placing anchors.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnchorError {
    /// A line needs at least two vertices to have a direction
    #[error("line geometry needs at least 2 points, got {points}")]
    InvalidGeometry { points: usize },
    /// Anchors can not be spaced by zero, a negative or a non-finite distance
    #[error("anchor spacing must be positive and finite, got {0}")]
    InvalidSpacing(f64),
}
