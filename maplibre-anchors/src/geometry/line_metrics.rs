//! Distance measurements along a line.

use euclid::Point2D;

use crate::{
    coords::{GeometryCoordinates, TileSpace},
    error::AnchorError,
    util::math::{angle_to, convert_point_f64, dist, interpolate, normalize_angle},
};

/// A position on a line found by walking a distance from its start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinePosition {
    pub point: Point2D<f64, TileSpace>,
    pub angle: f64,
    pub segment: usize,
}

/// Per-segment lengths, angles and the cumulative distance at every vertex of a line.
#[derive(Clone, Debug)]
pub struct LineMetrics {
    points: Vec<Point2D<f64, TileSpace>>,
    segment_lengths: Vec<f64>,
    segment_angles: Vec<f64>,
    /// Distance from the start of the line to each vertex.
    distances: Vec<f64>,
}

impl LineMetrics {
    pub fn new(line: &GeometryCoordinates) -> Result<Self, AnchorError> {
        if line.len() < 2 {
            return Err(AnchorError::InvalidGeometry { points: line.len() });
        }

        let points: Vec<Point2D<f64, TileSpace>> = line.iter().map(convert_point_f64).collect();
        let segment_lengths: Vec<f64> = points.windows(2).map(|w| dist(&w[0], &w[1])).collect();

        let mut distances = Vec::with_capacity(points.len());
        let mut distance = 0.0;
        distances.push(distance);
        for length in &segment_lengths {
            distance += length;
            distances.push(distance);
        }

        let angles: Vec<Option<f64>> = points
            .windows(2)
            .zip(&segment_lengths)
            .map(|(w, &length)| (length > 0.0).then(|| normalize_angle(angle_to(&w[1], &w[0]))))
            .collect();

        Ok(Self {
            points,
            segment_lengths,
            segment_angles: fill_degenerate_angles(&angles),
            distances,
        })
    }

    pub fn points(&self) -> &[Point2D<f64, TileSpace>] {
        &self.points
    }

    pub fn total_length(&self) -> f64 {
        self.distances[self.distances.len() - 1]
    }

    pub fn segment_count(&self) -> usize {
        self.segment_lengths.len()
    }

    pub fn segment_length(&self, segment: usize) -> f64 {
        self.segment_lengths[segment]
    }

    /// Direction of `segment`, pointing from its first to its second vertex.
    pub fn segment_angle(&self, segment: usize) -> f64 {
        self.segment_angles[segment]
    }

    /// Distance along the line from its start to `vertex`.
    pub fn distance_at(&self, vertex: usize) -> f64 {
        self.distances[vertex]
    }

    /// Finds the point `distance` units along the line.
    ///
    /// A distance exactly on an interior vertex belongs to the segment starting at that vertex.
    /// Distances outside of the line are clamped to its ends.
    pub fn interpolate(&self, distance: f64) -> LinePosition {
        let distance = distance.max(0.0);
        let segment = self.distances[1..].partition_point(|&d| d <= distance);

        if segment < self.segment_count() {
            return self.position_on_segment(segment, distance);
        }

        match self.segment_lengths.iter().rposition(|&length| length > 0.0) {
            Some(segment) => LinePosition {
                point: self.points[segment + 1],
                angle: self.segment_angles[segment],
                segment,
            },
            None => LinePosition {
                point: self.points[0],
                angle: 0.0,
                segment: 0,
            },
        }
    }

    fn position_on_segment(&self, segment: usize, distance: f64) -> LinePosition {
        let a = &self.points[segment];
        let b = &self.points[segment + 1];
        let t = (distance - self.distances[segment]) / self.segment_lengths[segment];

        LinePosition {
            point: Point2D::new(interpolate(a.x, b.x, t), interpolate(a.y, b.y, t)),
            angle: self.segment_angles[segment],
            segment,
        }
    }
}

/// Zero-length segments have no direction of their own. They take the angle of the closest
/// segment that has one, preferring the preceding segment on a tie, or 0 if there is none.
fn fill_degenerate_angles(angles: &[Option<f64>]) -> Vec<f64> {
    let mut previous = vec![None; angles.len()];
    let mut last = None;
    for (i, angle) in angles.iter().enumerate() {
        if angle.is_some() {
            last = Some(i);
        }
        previous[i] = last;
    }

    let mut filled = vec![0.0; angles.len()];
    let mut next = None;
    for i in (0..angles.len()).rev() {
        if angles[i].is_some() {
            next = Some(i);
        }
        let nearest = match (previous[i], next) {
            (Some(p), Some(n)) => {
                if i - p <= n - i {
                    p
                } else {
                    n
                }
            }
            (Some(p), None) => p,
            (None, Some(n)) => n,
            (None, None) => continue,
        };
        filled[i] = angles[nearest].unwrap_or(0.0);
    }
    filled
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use cgmath::{assert_abs_diff_eq, assert_ulps_eq};
    use euclid::Point2D;

    use crate::{
        coords::GeometryCoordinates, error::AnchorError, geometry::line_metrics::LineMetrics,
    };

    #[test]
    fn rejects_lines_without_direction() {
        let empty = GeometryCoordinates::default();
        assert_eq!(
            LineMetrics::new(&empty).unwrap_err(),
            AnchorError::InvalidGeometry { points: 0 }
        );

        let point = GeometryCoordinates::from_points(&[(3, 3)]);
        assert_eq!(
            LineMetrics::new(&point).unwrap_err(),
            AnchorError::InvalidGeometry { points: 1 }
        );
    }

    #[test]
    fn cumulative_distances() {
        let line = GeometryCoordinates::from_points(&[(0, 0), (3, 4), (3, 4), (3, 10)]);
        let metrics = LineMetrics::new(&line).unwrap();

        assert_eq!(metrics.segment_count(), 3);
        assert_ulps_eq!(metrics.distance_at(1), 5.0);
        assert_ulps_eq!(metrics.distance_at(2), 5.0);
        assert_ulps_eq!(metrics.total_length(), 11.0);
        assert_ulps_eq!(metrics.segment_length(1), 0.0);
    }

    #[test]
    fn interpolate_inside_segment() {
        let line = GeometryCoordinates::from_points(&[(1, 1), (1, 3), (3, 3)]);
        let metrics = LineMetrics::new(&line).unwrap();

        let position = metrics.interpolate(1.0);
        assert_eq!(position.point, Point2D::new(1.0, 2.0));
        assert_ulps_eq!(position.angle, FRAC_PI_2);
        assert_eq!(position.segment, 0);

        let position = metrics.interpolate(3.5);
        assert_eq!(position.point, Point2D::new(2.5, 3.0));
        assert_ulps_eq!(position.angle, 0.0);
        assert_eq!(position.segment, 1);
    }

    #[test]
    fn vertex_belongs_to_following_segment() {
        let line = GeometryCoordinates::from_points(&[(1, 1), (1, 3), (3, 3)]);
        let metrics = LineMetrics::new(&line).unwrap();

        let position = metrics.interpolate(2.0);
        assert_eq!(position.point, Point2D::new(1.0, 3.0));
        assert_eq!(position.segment, 1);
    }

    #[test]
    fn interpolate_clamps_to_line_ends() {
        let line = GeometryCoordinates::from_points(&[(0, 0), (4, 0), (4, 0)]);
        let metrics = LineMetrics::new(&line).unwrap();

        let start = metrics.interpolate(-3.0);
        assert_eq!(start.point, Point2D::new(0.0, 0.0));
        assert_eq!(start.segment, 0);

        let end = metrics.interpolate(100.0);
        assert_eq!(end.point, Point2D::new(4.0, 0.0));
        assert_eq!(end.segment, 0);
    }

    #[test]
    fn degenerate_segments_take_neighbouring_angle() {
        let line = GeometryCoordinates::from_points(&[(0, 0), (0, 0), (2, 2), (2, 2), (2, 2), (0, 2)]);
        let metrics = LineMetrics::new(&line).unwrap();

        assert_ulps_eq!(metrics.segment_angle(0), FRAC_PI_4);
        assert_ulps_eq!(metrics.segment_angle(1), FRAC_PI_4);
        assert_ulps_eq!(metrics.segment_angle(2), FRAC_PI_4);
        assert_ulps_eq!(metrics.segment_angle(3), PI);
        assert_ulps_eq!(metrics.segment_angle(4), PI);

        for segment in 0..metrics.segment_count() {
            assert!(!metrics.segment_angle(segment).is_nan());
        }
    }

    #[test]
    fn degenerate_segment_prefers_preceding_angle_on_tie() {
        let line = GeometryCoordinates::from_points(&[(0, 0), (2, 2), (2, 2), (0, 2)]);
        let metrics = LineMetrics::new(&line).unwrap();

        assert_ulps_eq!(metrics.segment_angle(1), FRAC_PI_4);
    }

    #[test]
    fn coincident_points_have_no_direction() {
        let line = GeometryCoordinates::from_points(&[(5, 5), (5, 5), (5, 5)]);
        let metrics = LineMetrics::new(&line).unwrap();

        assert_ulps_eq!(metrics.total_length(), 0.0);
        let position = metrics.interpolate(0.0);
        assert_eq!(position.point, Point2D::new(5.0, 5.0));
        assert_eq!(position.segment, 0);
        assert_abs_diff_eq!(position.angle, 0.0);
    }
}
