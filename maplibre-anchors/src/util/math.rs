//! Translated (partially) from https://github.com/maplibre/maplibre-native/blob/4add9ea/src/mbgl/util/math.hpp
//! Small geometric helpers shared by anchor placement and the curvature check.

use std::f64::consts::PI;

use euclid::Point2D;

/// Angle of the vector pointing from `b` to `a`, as returned by `atan2`.
/// maplibre/maplibre-native#4add9ea original name: angle_to
pub fn angle_to<U>(a: &Point2D<f64, U>, b: &Point2D<f64, U>) -> f64 {
    (a.y - b.y).atan2(a.x - b.x)
}

/// maplibre/maplibre-native#4add9ea original name: dist
pub fn dist<U>(a: &Point2D<f64, U>, b: &Point2D<f64, U>) -> f64 {
    a.distance_to(*b)
}

pub fn interpolate(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Wraps `value` into the half-open range `[min, max)`.
/// maplibre/maplibre-native#4add9ea original name: wrap
pub fn wrap(value: f64, min: f64, max: f64) -> f64 {
    if value >= min && value < max {
        value
    } else if value == max {
        min
    } else {
        let d = max - min;
        ((value - min) % d + d) % d + min
    }
}

/// Maps an angle in radians onto `(-π, π]`.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = wrap(angle, -PI, PI);
    if wrapped == -PI {
        PI
    } else {
        wrapped
    }
}

/// Converts degrees to radians.
pub fn deg2radf(deg: f64) -> f64 {
    deg * PI / 180.0
}

pub fn convert_point_f64<U>(point: &Point2D<i16, U>) -> Point2D<f64, U> {
    Point2D::new(point.x as f64, point.y as f64)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use cgmath::{assert_abs_diff_eq, assert_ulps_eq};
    use euclid::{default::Point2D, point2};

    use crate::util::math::{angle_to, deg2radf, interpolate, normalize_angle, wrap};

    #[test]
    fn angle_points_from_second_to_first() {
        let a: Point2D<f64> = point2(1.0, 3.0);
        let b: Point2D<f64> = point2(1.0, 1.0);
        assert_ulps_eq!(angle_to(&a, &b), FRAC_PI_2);
        assert_ulps_eq!(angle_to(&b, &a), -FRAC_PI_2);
    }

    #[test]
    fn wrap_into_half_open_range() {
        assert_ulps_eq!(wrap(0.5, -PI, PI), 0.5);
        assert_ulps_eq!(wrap(PI, -PI, PI), -PI);
        assert_abs_diff_eq!(wrap(3.0 * FRAC_PI_2, -PI, PI), -FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(wrap(-3.0 * FRAC_PI_2, -PI, PI), FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn normalized_angles_exclude_minus_pi() {
        assert_ulps_eq!(normalize_angle(-PI), PI);
        assert_ulps_eq!(normalize_angle(PI), PI);
        assert_ulps_eq!(normalize_angle(-FRAC_PI_2), -FRAC_PI_2);
    }

    #[test]
    fn interpolate_and_convert() {
        assert_ulps_eq!(interpolate(1.0, 3.0, 0.25), 1.5);
        assert_ulps_eq!(deg2radf(180.0), PI);
    }
}
