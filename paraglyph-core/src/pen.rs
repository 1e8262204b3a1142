//! Contour accumulation pen.
//!
//! [`ContourPen`] receives the same command vocabulary as a font pen
//! (`move_to` / `line_to` / `quad_to` / `curve_to` / `close`) and builds an
//! [`Outline`]. Coordinates are Y-up font design units.

use kurbo::Point;

use paraglyph_graphics::types::{Contour, Outline, Segment, EPSILON};

/// Accumulates closed contours into an [`Outline`].
///
/// `close` materializes the closing line back to the contour's start when
/// the last point does not already coincide with it, so every finished
/// contour ends exactly where it began.
#[derive(Debug, Default)]
pub struct ContourPen {
    contours: Vec<Contour>,
    current: Option<Contour>,
}

impl ContourPen {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new contour. An unclosed previous contour is closed first.
    pub fn move_to(&mut self, p: impl Into<Point>) {
        self.close();
        self.current = Some(Contour::new(p.into(), Vec::new()));
    }

    /// Straight line to the point. Ignored when no contour is open.
    pub fn line_to(&mut self, p: impl Into<Point>) {
        if let Some(c) = self.current.as_mut() {
            c.segments.push(Segment::LineTo(p.into()));
        }
    }

    /// Quadratic Bezier through one control point.
    pub fn quad_to(&mut self, control: impl Into<Point>, p: impl Into<Point>) {
        if let Some(c) = self.current.as_mut() {
            c.segments.push(Segment::QuadTo(control.into(), p.into()));
        }
    }

    /// Cubic Bezier through two control points.
    pub fn curve_to(
        &mut self,
        control1: impl Into<Point>,
        control2: impl Into<Point>,
        p: impl Into<Point>,
    ) {
        if let Some(c) = self.current.as_mut() {
            c.segments
                .push(Segment::CubicTo(control1.into(), control2.into(), p.into()));
        }
    }

    /// Close the current contour and append it to the outline.
    ///
    /// A contour with no segments is dropped (a bare `move_to` draws
    /// nothing).
    pub fn close(&mut self) {
        let Some(mut c) = self.current.take() else {
            return;
        };
        if c.segments.is_empty() {
            return;
        }
        let last = c.last_point();
        if (last.x - c.start.x).abs() >= EPSILON || (last.y - c.start.y).abs() >= EPSILON {
            c.segments.push(Segment::LineTo(c.start));
        }
        self.contours.push(c);
    }

    /// Finish drawing, closing any open contour, and return the outline.
    #[must_use]
    pub fn finish(mut self) -> Outline {
        self.close();
        Outline {
            contours: self.contours,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use paraglyph_graphics::types::Winding;

    #[test]
    fn close_appends_closing_line() {
        let mut pen = ContourPen::new();
        pen.move_to((0.0, 0.0));
        pen.line_to((10.0, 0.0));
        pen.line_to((10.0, 10.0));
        pen.close();
        let outline = pen.finish();

        assert_eq!(outline.contours.len(), 1);
        let c = &outline.contours[0];
        assert!(c.is_closed());
        assert_eq!(c.segments.len(), 3);
    }

    #[test]
    fn close_is_idempotent_when_already_closed() {
        let mut pen = ContourPen::new();
        pen.move_to((0.0, 0.0));
        pen.line_to((5.0, 0.0));
        pen.line_to((5.0, 5.0));
        pen.line_to((0.0, 0.0));
        pen.close();
        let outline = pen.finish();
        assert_eq!(outline.contours[0].segments.len(), 3);
    }

    #[test]
    fn move_to_closes_previous_contour() {
        let mut pen = ContourPen::new();
        pen.move_to((0.0, 0.0));
        pen.line_to((1.0, 0.0));
        pen.line_to((1.0, 1.0));
        pen.move_to((10.0, 10.0));
        pen.line_to((11.0, 10.0));
        pen.line_to((11.0, 11.0));
        let outline = pen.finish();

        assert_eq!(outline.contours.len(), 2);
        assert!(outline.contours.iter().all(Contour::is_closed));
    }

    #[test]
    fn bare_move_to_draws_nothing() {
        let mut pen = ContourPen::new();
        pen.move_to((3.0, 3.0));
        let outline = pen.finish();
        assert!(outline.is_empty());
    }

    #[test]
    fn quad_and_cubic_segments_recorded() {
        let mut pen = ContourPen::new();
        pen.move_to((0.0, 0.0));
        pen.quad_to((1.0, 1.0), (2.0, 0.0));
        pen.curve_to((3.0, 1.0), (4.0, 1.0), (5.0, 0.0));
        pen.close();
        let outline = pen.finish();

        let c = &outline.contours[0];
        assert!(matches!(c.segments[0], Segment::QuadTo(_, _)));
        assert!(matches!(c.segments[1], Segment::CubicTo(_, _, _)));
        assert!(c.is_closed());
    }

    #[test]
    fn winding_of_drawn_square() {
        let mut pen = ContourPen::new();
        pen.move_to((0.0, 0.0));
        pen.line_to((4.0, 0.0));
        pen.line_to((4.0, 4.0));
        pen.line_to((0.0, 4.0));
        pen.close();
        let outline = pen.finish();
        assert_eq!(outline.contours[0].winding(), Winding::CounterClockwise);
    }
}
