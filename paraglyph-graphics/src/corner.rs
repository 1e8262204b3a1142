//! Corner smoothing.
//!
//! Replaces a sharp line-line join with a quadratic fillet: the two edges
//! meeting at the corner are shortened by the radius along their own
//! directions, and the corner itself becomes the control point.

use kurbo::{Point, Vec2};

use crate::math::normalize_vector;
use crate::types::Scalar;

/// A quadratic fillet replacing a sharp corner.
///
/// Draw `start → (control = corner) → end` as a quadratic segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerFillet {
    pub start: Point,
    pub control: Point,
    pub end: Point,
}

/// Round the corner at `corner` between the edges toward `p0` and `p2`.
///
/// The fillet's start lies `radius` along the edge toward `p0`, its end
/// `radius` along the edge toward `p2`. A zero-length edge collapses its
/// endpoint onto the corner, yielding a degenerate-but-valid fillet.
#[must_use]
pub fn smooth_corner(p0: Point, corner: Point, p2: Point, radius: Scalar) -> CornerFillet {
    let v1 = normalize_vector(Vec2::new(p0.x - corner.x, p0.y - corner.y));
    let v2 = normalize_vector(Vec2::new(p2.x - corner.x, p2.y - corner.y));

    CornerFillet {
        start: corner + v1 * radius,
        control: corner,
        end: corner + v2 * radius,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
