//! Trigonometric helpers used to resolve angles and edge fractions to coordinates.

use lyon::math::Point;

/// Returns the point at `angle` radians on the circle of `radius` around `center`.
///
/// Angle zero points along +x. With a downward y axis, `-PI / 2` points up.
///
/// # Examples
///
/// ```rust
/// use polyshape::geometry::point_on_circumference;
/// use lyon::math::point;
///
/// let p = point_on_circumference(point(50.0, 50.0), 0.0, 10.0);
/// assert_eq!(p, point(60.0, 50.0));
/// ```
#[inline]
pub fn point_on_circumference(center: Point, angle: f32, radius: f32) -> Point {
    let (sin, cos) = angle.sin_cos();
    Point::new(center.x + radius * cos, center.y + radius * sin)
}

/// Returns the point `ratio` of the way from `from` toward `to`.
///
/// Ratios outside `[0, 1]` extrapolate past the endpoints.
///
/// # Examples
///
/// ```rust
/// use polyshape::geometry::point_on_line;
/// use lyon::math::point;
///
/// let p = point_on_line(point(0.0, 0.0), point(10.0, 20.0), 0.5);
/// assert_eq!(p, point(5.0, 10.0));
/// ```
#[inline]
pub fn point_on_line(from: Point, to: Point, ratio: f32) -> Point {
    Point::new(
        from.x + (to.x - from.x) * ratio,
        from.y + (to.y - from.y) * ratio,
    )
}

#[cfg(test)]
mod tests {
    use super::{point_on_circumference, point_on_line};
    use lyon::math::point;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn assert_close(a: lyon::math::Point, b: lyon::math::Point) {
        assert!((a - b).length() < 1e-4, "{a:?} != {b:?}");
    }

    #[test]
    fn point_on_circumference_start_angle_points_up() {
        let p = point_on_circumference(point(50.0, 50.0), -FRAC_PI_2, 50.0);
        assert_close(p, point(50.0, 0.0));
    }

    #[test]
    fn point_on_circumference_half_turn() {
        let p = point_on_circumference(point(0.0, 0.0), PI, 3.0);
        assert_close(p, point(-3.0, 0.0));
    }

    #[test]
    fn point_on_circumference_negative_radius_reflects_through_center() {
        let p = point_on_circumference(point(10.0, 10.0), 0.0, -5.0);
        assert_close(p, point(5.0, 10.0));
    }

    #[test]
    fn point_on_line_endpoints() {
        let a = point(1.0, 2.0);
        let b = point(7.0, -4.0);
        assert_eq!(point_on_line(a, b, 0.0), a);
        assert_eq!(point_on_line(a, b, 1.0), b);
    }

    #[test]
    fn point_on_line_extrapolates() {
        let p = point_on_line(point(0.0, 0.0), point(10.0, 0.0), 1.5);
        assert_close(p, point(15.0, 0.0));

        let p = point_on_line(point(0.0, 0.0), point(10.0, 0.0), -0.5);
        assert_close(p, point(-5.0, 0.0));
    }
}
