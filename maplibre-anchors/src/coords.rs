//! Tile-local coordinates of line geometries.
//!
//! Geometries arrive already clipped and projected into the tile. Coordinates are integers in
//! `0..EXTENT`, but lines may overshoot the tile by a small buffer so that labels continue
//! seamlessly into the neighbouring tile.

use std::ops::Index;

use euclid::Point2D;

/// Number of units along one edge of a tile.
pub const EXTENT_SINT: i32 = 8192;
pub const EXTENT: f64 = EXTENT_SINT as f64;
/// Size of a tile in pixels at its native zoom level.
pub const TILE_SIZE: f64 = 512.0;

/// The unit in which geometries and anchors are given on a tile (0-EXTENT).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TileSpace;

/// maplibre/maplibre-native#4add9ea original name: GeometryCoordinate
pub type GeometryCoordinate = Point2D<i16, TileSpace>;

/// An ordered sequence of vertices describing a line feature.
///
/// maplibre/maplibre-native#4add9ea original name: GeometryCoordinates
#[derive(Default, Clone, Debug, PartialEq)]
pub struct GeometryCoordinates(pub Vec<GeometryCoordinate>);

impl GeometryCoordinates {
    pub fn new(points: Vec<GeometryCoordinate>) -> Self {
        Self(points)
    }

    /// Builds a line from `(x, y)` pairs.
    pub fn from_points(points: &[(i16, i16)]) -> Self {
        Self(points.iter().map(|&(x, y)| Point2D::new(x, y)).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&GeometryCoordinate> {
        self.0.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeometryCoordinate> {
        self.0.iter()
    }
}

impl Index<usize> for GeometryCoordinates {
    type Output = GeometryCoordinate;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<Vec<GeometryCoordinate>> for GeometryCoordinates {
    fn from(points: Vec<GeometryCoordinate>) -> Self {
        Self(points)
    }
}

/// Whether `point` lies inside the tile, excluding the far edges.
pub fn is_inside_tile(point: &Point2D<f64, TileSpace>) -> bool {
    point.x >= 0.0 && point.x < EXTENT && point.y >= 0.0 && point.y < EXTENT
}
