//! Vector arithmetic and stroke-offset primitives.
//!
//! Everything here is a pure function of its arguments. Degenerate inputs
//! (zero-length vectors, coincident points) produce safe degenerate outputs
//! rather than errors.

use kurbo::{Point, Vec2};

use crate::types::{Contrast, Scalar};

// ---------------------------------------------------------------------------
// Basic vector operations
// ---------------------------------------------------------------------------

/// Euclidean distance between two points.
#[inline]
#[must_use]
pub fn distance(p1: Point, p2: Point) -> Scalar {
    (p2.x - p1.x).hypot(p2.y - p1.y)
}

/// Linear interpolation between two points at parameter `t`.
#[inline]
#[must_use]
pub fn lerp(p1: Point, p2: Point, t: Scalar) -> Point {
    Point::new(
        t.mul_add(p2.x - p1.x, p1.x),
        t.mul_add(p2.y - p1.y, p1.y),
    )
}

/// Normalize a vector to unit length.
///
/// Returns the zero vector when the input has zero length — never fails.
#[must_use]
pub fn normalize_vector(v: Vec2) -> Vec2 {
    let len = v.x.hypot(v.y);
    if len == 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(v.x / len, v.y / len)
}

/// Perpendicular of a vector.
///
/// `clockwise` selects which of the two perpendiculars: rotating the input
/// clockwise (Y-up) gives `(y, -x)`, counter-clockwise gives `(-y, x)`.
#[inline]
#[must_use]
pub const fn perpendicular(v: Vec2, clockwise: bool) -> Vec2 {
    if clockwise {
        Vec2::new(v.y, -v.x)
    } else {
        Vec2::new(-v.y, v.x)
    }
}

// ---------------------------------------------------------------------------
// Stroke-edge offsetting
// ---------------------------------------------------------------------------

/// Which side of a directed segment an offset lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Translate the segment `p1 → p2` by `offset` along its perpendicular.
///
/// Produces one edge of a stroked segment. `Side::Right` uses the clockwise
/// perpendicular of the segment direction, `Side::Left` the counter-clockwise
/// one. A zero-length segment is returned untranslated.
#[must_use]
pub fn offset_line(p1: Point, p2: Point, offset: Scalar, side: Side) -> (Point, Point) {
    let direction = Vec2::new(p2.x - p1.x, p2.y - p1.y);
    let perp = normalize_vector(perpendicular(direction, side == Side::Right));
    let shift = perp * offset;
    (p1 + shift, p2 + shift)
}

// ---------------------------------------------------------------------------
// Angle-dependent stroke contrast
// ---------------------------------------------------------------------------

/// General contrast table: how much a stroke may thin by angle.
///
/// Distinct from the horizontal-stroke factor table owned by the style
/// resolver, which uses different values for the same level names.
const fn contrast_factor(level: Contrast) -> Scalar {
    match level {
        Contrast::Low => 0.15,
        Contrast::Medium => 0.3,
        Contrast::High => 0.5,
        Contrast::None | Contrast::Unrecognized => 0.0,
    }
}

/// Adjust a stroke width by its angle under the given contrast level.
///
/// `adjusted = width × (1 − f(level) × (1 − |sin(angle)|))`, with `angle` in
/// radians. Vertical strokes (`angle = π/2`) keep their full width; horizontal
/// strokes (`angle = 0`) thin the most.
#[must_use]
pub fn apply_contrast(stroke_width: Scalar, angle: Scalar, level: Contrast) -> Scalar {
    let factor = contrast_factor(level);
    let angle_factor = angle.sin().abs();
    stroke_width * factor.mul_add(-(1.0 - angle_factor), 1.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
