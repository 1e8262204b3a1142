//! Bezier curve evaluation.
//!
//! Standard Bernstein-basis evaluation for cubic and quadratic segments.
//! `t` is unconstrained; callers use `[0, 1]`.

use kurbo::Point;

use crate::types::Scalar;

/// Evaluate a cubic Bezier at parameter `t`.
///
/// `p0` and `p3` are the endpoints, `p1` and `p2` the control points.
#[expect(
    clippy::many_single_char_names,
    reason = "standard Bezier math variable names (a, b, c, d, s, t)"
)]
#[must_use]
pub fn cubic_point(p0: Point, p1: Point, p2: Point, p3: Point, t: Scalar) -> Point {
    let s = 1.0 - t;
    let a = s * s * s;
    let b = 3.0 * s * s * t;
    let c = 3.0 * s * t * t;
    let d = t * t * t;
    Point::new(
        d.mul_add(p3.x, a.mul_add(p0.x, b.mul_add(p1.x, c * p2.x))),
        d.mul_add(p3.y, a.mul_add(p0.y, b.mul_add(p1.y, c * p2.y))),
    )
}

/// Evaluate a quadratic Bezier at parameter `t`.
///
/// `p0` and `p2` are the endpoints, `p1` the control point.
#[expect(
    clippy::many_single_char_names,
    reason = "standard Bezier math variable names (a, b, c, s, t)"
)]
#[must_use]
pub fn quadratic_point(p0: Point, p1: Point, p2: Point, t: Scalar) -> Point {
    let s = 1.0 - t;
    let a = s * s;
    let b = 2.0 * s * t;
    let c = t * t;
    Point::new(
        a.mul_add(p0.x, b.mul_add(p1.x, c * p2.x)),
        a.mul_add(p0.y, b.mul_add(p1.y, c * p2.y)),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
