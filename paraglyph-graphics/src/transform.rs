//! Point transforms for italic and rotated variants.

use kurbo::Point;

use crate::types::Scalar;

/// Shear a point horizontally around the line `y = pivot_y`.
///
/// `angle` is the slant angle in radians; positive angles lean the shape to
/// the right, as in italics.
#[must_use]
pub fn apply_slant(point: Point, angle: Scalar, pivot_y: Scalar) -> Point {
    let dx = (point.y - pivot_y) * angle.tan();
    Point::new(point.x + dx, point.y)
}

/// Rotate a point around a center by `angle` radians.
#[must_use]
pub fn rotate_point(point: Point, angle: Scalar, center: Point) -> Point {
    let x = point.x - center.x;
    let y = point.y - center.y;

    let cos_a = angle.cos();
    let sin_a = angle.sin();

    Point::new(
        x.mul_add(cos_a, -(y * sin_a)) + center.x,
        x.mul_add(sin_a, y * cos_a) + center.y,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EPSILON;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn slant_leaves_pivot_line_fixed() {
        let p = Point::new(10.0, 0.0);
        let s = apply_slant(p, FRAC_PI_4, 0.0);
        assert!((s.x - 10.0).abs() < EPSILON);
        assert!((s.y - 0.0).abs() < EPSILON);
    }

    #[test]
    fn slant_shifts_by_height_times_tan() {
        // tan(45°) = 1: a point 100 above the pivot moves 100 to the right.
        let s = apply_slant(Point::new(0.0, 100.0), FRAC_PI_4, 0.0);
        assert!((s.x - 100.0).abs() < 1e-6);
        assert!((s.y - 100.0).abs() < EPSILON);
    }

    #[test]
    fn slant_below_pivot_moves_left() {
        let s = apply_slant(Point::new(0.0, -50.0), FRAC_PI_4, 0.0);
        assert!((s.x + 50.0).abs() < 1e-6);
    }

    #[test]
    fn rotate_quarter_turn_about_origin() {
        let r = rotate_point(Point::new(1.0, 0.0), FRAC_PI_2, Point::ZERO);
        assert!(r.x.abs() < EPSILON);
        assert!((r.y - 1.0).abs() < EPSILON);
    }

    #[test]
    fn rotate_half_turn_about_center() {
        let c = Point::new(5.0, 5.0);
        let r = rotate_point(Point::new(7.0, 5.0), PI, c);
        assert!((r.x - 3.0).abs() < EPSILON);
        assert!((r.y - 5.0).abs() < EPSILON);
    }

    #[test]
    fn rotate_center_is_fixed_point() {
        let c = Point::new(2.0, 3.0);
        let r = rotate_point(c, 1.234, c);
        assert!((r.x - c.x).abs() < EPSILON);
        assert!((r.y - c.y).abs() < EPSILON);
    }
}
