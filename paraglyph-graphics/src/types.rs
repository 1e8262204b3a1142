//! Core types shared across the `paraglyph` system.
//!
//! These types define the outline data model handed to the font assembler:
//! segments, contours, outlines, winding, and the categorical contrast axis
//! consumed by the geometry kernel.
//!
//! Coordinates are in font design units with Y pointing **up**, matching
//! font conventions.

use kurbo::Point;

// ---------------------------------------------------------------------------
// Scalar
// ---------------------------------------------------------------------------

/// Convenience alias. Font design units are nominally integral, but all
/// intermediate geometry is computed in `f64` for compatibility with `kurbo`.
pub type Scalar = f64;

/// Tolerance for floating-point comparisons.
pub const EPSILON: Scalar = 1e-9;

// ---------------------------------------------------------------------------
// Contrast
// ---------------------------------------------------------------------------

/// Categorical stroke-contrast level.
///
/// Two factor tables are keyed by this axis and they intentionally hold
/// different values: the general contrast-by-angle table in
/// [`crate::math::apply_contrast`], and the horizontal-stroke derivation used
/// by the letter templates (owned by the style resolver). They are kept as
/// distinct, separately-scoped tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum Contrast {
    None,
    Low,
    #[default]
    Medium,
    High,
    /// An option value the loader did not recognize. Every factor table maps
    /// this to its documented default, so it never surfaces as an error.
    #[cfg_attr(feature = "serde", serde(other))]
    Unrecognized,
}

// ---------------------------------------------------------------------------
// Winding
// ---------------------------------------------------------------------------

/// Signed orientation of a contour.
///
/// Under a nonzero winding fill rule, a contour whose winding opposes its
/// enclosing contour's winding cuts a hole. The assembler treats this as
/// authoritative; it must not re-derive orientation from point heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Negative signed area (Y-up).
    Clockwise,
    /// Positive signed area (Y-up).
    CounterClockwise,
}

impl Winding {
    /// The opposite orientation.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

// ---------------------------------------------------------------------------
// Segment
// ---------------------------------------------------------------------------

/// One drawing command of a contour. The start point is implicit: it is the
/// previous segment's endpoint (or the contour's start point).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// Straight line to the point.
    LineTo(Point),
    /// Quadratic Bezier: control point, endpoint (TrueType-style).
    QuadTo(Point, Point),
    /// Cubic Bezier: two control points, endpoint (CFF-style).
    ///
    /// Cubics are exposed losslessly; degree reduction, if the target format
    /// needs it, is the assembler's job.
    CubicTo(Point, Point, Point),
}

impl Segment {
    /// The on-curve endpoint of this segment.
    #[must_use]
    pub const fn end(&self) -> Point {
        match *self {
            Self::LineTo(p) | Self::QuadTo(_, p) | Self::CubicTo(_, _, p) => p,
        }
    }
}

// ---------------------------------------------------------------------------
// Contour
// ---------------------------------------------------------------------------

/// One closed path of an outline.
///
/// A contour starts at `start` and follows `segments` in order. Closing is
/// explicit: the pen appends the closing line when needed, so the last
/// on-curve point always equals `start`.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub start: Point,
    pub segments: Vec<Segment>,
}

impl Contour {
    /// Create a contour from a start point and segments.
    #[must_use]
    pub const fn new(start: Point, segments: Vec<Segment>) -> Self {
        Self { start, segments }
    }

    /// The last on-curve point (the start point for an empty contour).
    #[must_use]
    pub fn last_point(&self) -> Point {
        self.segments.last().map_or(self.start, Segment::end)
    }

    /// Whether the contour ends where it began.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        let last = self.last_point();
        (last.x - self.start.x).abs() < EPSILON && (last.y - self.start.y).abs() < EPSILON
    }

    /// Signed area via the shoelace formula over on-curve points.
    ///
    /// Positive = counter-clockwise, negative = clockwise (Y-up). Control
    /// points do not affect orientation for the non-self-intersecting
    /// contours this engine produces, so they are skipped.
    #[must_use]
    pub fn signed_area(&self) -> Scalar {
        let mut area = 0.0;
        let mut current = self.start;
        for seg in &self.segments {
            let p = seg.end();
            area += current.x.mul_add(p.y, -(p.x * current.y));
            current = p;
        }
        // Close back to the start if the last segment did not.
        area += current.x.mul_add(self.start.y, -(self.start.x * current.y));
        area / 2.0
    }

    /// Winding direction derived from the signed area.
    ///
    /// A degenerate contour (zero area) reports clockwise; callers that care
    /// should check [`Contour::signed_area`] directly.
    #[must_use]
    pub fn winding(&self) -> Winding {
        if self.signed_area() > 0.0 {
            Winding::CounterClockwise
        } else {
            Winding::Clockwise
        }
    }

    /// Iterate over the on-curve points, starting with `start`.
    pub fn on_curve_points(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.start).chain(self.segments.iter().map(Segment::end))
    }
}

// ---------------------------------------------------------------------------
// Outline
// ---------------------------------------------------------------------------

/// The full vector shape of one character: an ordered set of contours.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outline {
    pub contours: Vec<Contour>,
}

impl Outline {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            contours: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// Whether every coordinate of every contour is finite.
    ///
    /// A template fed degenerate parameters can produce non-finite points;
    /// the builder uses this check to fall back per character instead of
    /// shipping a corrupt outline.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.contours.iter().all(|c| {
            c.start.is_finite()
                && c.segments.iter().all(|s| match *s {
                    Segment::LineTo(p) => p.is_finite(),
                    Segment::QuadTo(c1, p) => c1.is_finite() && p.is_finite(),
                    Segment::CubicTo(c1, c2, p) => {
                        c1.is_finite() && c2.is_finite() && p.is_finite()
                    }
                })
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
