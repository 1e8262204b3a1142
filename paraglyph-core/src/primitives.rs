//! The stroke-primitive vocabulary glyph templates are assembled from:
//! stems, bars (with terminal treatments), diagonals, bowls/counters and
//! dots.
//!
//! Conventions: Y points up; the glyph box is
//! `[margin, width − margin] × [0, height]`. Solid rectangles are drawn
//! counter-clockwise. Bowl outers are drawn clockwise with a
//! counter-clockwise inner, so the pair renders as a ring with a hole under
//! the nonzero fill rule.

use kurbo::{Point, Vec2};

use paraglyph_graphics::math::{lerp, normalize_vector, offset_line, perpendicular, Side};
use paraglyph_graphics::shapes::KAPPA;
use paraglyph_graphics::types::Scalar;

use crate::pen::ContourPen;
use crate::style::Terminals;

/// Control-point offset of the curved terminal cap, as a fraction of the
/// stroke width. Approximates a circular cap.
pub const CURVED_CAP_FACTOR: Scalar = 0.276;

// ---------------------------------------------------------------------------
// Rectangles: stems, bars, dots
// ---------------------------------------------------------------------------

/// A solid counter-clockwise rectangle spanning `[x0, x1] × [y0, y1]`.
pub fn rect(pen: &mut ContourPen, x0: Scalar, y0: Scalar, x1: Scalar, y1: Scalar) {
    pen.move_to((x0, y0));
    pen.line_to((x1, y0));
    pen.line_to((x1, y1));
    pen.line_to((x0, y1));
    pen.close();
}

/// A solid clockwise rectangle.
///
/// Used where a rectangle overlaps a clockwise bowl outer (the Q tail, the
/// e crossbar): matching signs keep the overlap filled under the nonzero
/// rule instead of cancelling to a hole.
pub fn rect_cw(pen: &mut ContourPen, x0: Scalar, y0: Scalar, x1: Scalar, y1: Scalar) {
    pen.move_to((x0, y0));
    pen.line_to((x0, y1));
    pen.line_to((x1, y1));
    pen.line_to((x1, y0));
    pen.close();
}

/// A vertical stroke of the given width, from `y_bottom` to `y_top`.
pub fn stem(pen: &mut ContourPen, x: Scalar, y_bottom: Scalar, y_top: Scalar, width: Scalar) {
    rect(pen, x, y_bottom, x + width, y_top);
}

/// A plain horizontal stroke spanning `[x0, x1] × [y0, y1]`.
pub fn bar(pen: &mut ContourPen, x0: Scalar, x1: Scalar, y0: Scalar, y1: Scalar) {
    rect(pen, x0, y0, x1, y1);
}

/// A square dot centered at `(cx, cy)` with half-side `radius`.
pub fn dot(pen: &mut ContourPen, cx: Scalar, cy: Scalar, radius: Scalar) {
    rect(pen, cx - radius, cy - radius, cx + radius, cy + radius);
}

// ---------------------------------------------------------------------------
// Terminal-treated bars
// ---------------------------------------------------------------------------

/// A bar whose right end carries the terminal treatment: plain for
/// `straight`, two quadratic arcs for `curved`, a beveled corner for
/// `angled`. Used by the cap-height bars of E, F and L.
pub fn capped_bar_right(
    pen: &mut ContourPen,
    x0: Scalar,
    x1: Scalar,
    y0: Scalar,
    y1: Scalar,
    stroke: Scalar,
    terminals: Terminals,
) {
    let mid = (y0 + y1) / 2.0;
    pen.move_to((x0, y0));
    match terminals {
        Terminals::Curved => {
            pen.line_to((x1 - stroke / 4.0, y0));
            pen.quad_to((x1, y0), (x1, mid));
            pen.quad_to((x1, y1), (x1 - stroke / 4.0, y1));
        }
        Terminals::Angled => {
            pen.line_to((x1 - stroke / 3.0, y0));
            pen.line_to((x1, y0 + 0.3 * (y1 - y0)));
            pen.line_to((x1, y1));
            pen.line_to((x1 - stroke / 3.0, y1));
        }
        Terminals::Straight | Terminals::Unrecognized => {
            pen.line_to((x1, y0));
            pen.line_to((x1, y1));
        }
    }
    pen.line_to((x0, y1));
    pen.close();
}

/// A crossbar whose right end bevels to its mid-height when `angled`
/// (otherwise like [`capped_bar_right`]). Used by the middle bars of E
/// and F.
pub fn capped_bar_mid(
    pen: &mut ContourPen,
    x0: Scalar,
    x1: Scalar,
    y0: Scalar,
    y1: Scalar,
    stroke: Scalar,
    terminals: Terminals,
) {
    let mid = (y0 + y1) / 2.0;
    pen.move_to((x0, y0));
    match terminals {
        Terminals::Curved => {
            pen.line_to((x1 - stroke / 4.0, y0));
            pen.quad_to((x1, y0), (x1, mid));
            pen.quad_to((x1, y1), (x1 - stroke / 4.0, y1));
        }
        Terminals::Angled => {
            pen.line_to((x1 - stroke / 3.0, y0));
            pen.line_to((x1, mid));
            pen.line_to((x1 - stroke / 3.0, y1));
        }
        Terminals::Straight | Terminals::Unrecognized => {
            pen.line_to((x1, y0));
            pen.line_to((x1, y1));
        }
    }
    pen.line_to((x0, y1));
    pen.close();
}

/// A bar with the terminal treatment applied at both ends. Used by the
/// top bar of T.
pub fn capped_bar_both(
    pen: &mut ContourPen,
    x0: Scalar,
    x1: Scalar,
    y0: Scalar,
    y1: Scalar,
    stroke: Scalar,
    terminals: Terminals,
) {
    let mid = (y0 + y1) / 2.0;
    pen.move_to((x0, y0));
    match terminals {
        Terminals::Curved => {
            pen.line_to((x1 - stroke / 4.0, y0));
            pen.quad_to((x1, y0), (x1, mid));
            pen.quad_to((x1, y1), (x1 - stroke / 4.0, y1));
            pen.line_to((x0 + stroke / 4.0, y1));
            pen.quad_to((x0, y1), (x0, mid));
            pen.quad_to((x0, y0), (x0 + stroke / 4.0, y0));
        }
        Terminals::Angled => {
            pen.line_to((x1 - stroke / 3.0, y0));
            pen.line_to((x1, y0 + 0.3 * (y1 - y0)));
            pen.line_to((x1, y1));
            pen.line_to((x0, y1));
            pen.line_to((x0 + stroke / 3.0, y0 + 0.3 * (y1 - y0)));
            pen.line_to((x0 + stroke / 3.0, y0));
        }
        Terminals::Straight | Terminals::Unrecognized => {
            pen.line_to((x1, y0));
            pen.line_to((x1, y1));
            pen.line_to((x0, y1));
        }
    }
    pen.close();
}

/// The generic terminal operation: finish a stroke edge running from `from`
/// to the endpoint `to`, assuming the pen currently sits at `from`.
///
/// `straight` draws a plain line; `curved` a quadratic arc whose control
/// point is offset from the start by `0.276 × stroke_width` along the
/// segment's perpendicular; `angled` inserts a point at 70% of the way
/// before the endpoint, producing a beveled cut.
pub fn apply_terminal(
    pen: &mut ContourPen,
    from: Point,
    to: Point,
    stroke_width: Scalar,
    terminals: Terminals,
) {
    match terminals {
        Terminals::Curved => {
            let dir = normalize_vector(Vec2::new(to.x - from.x, to.y - from.y));
            if dir == Vec2::ZERO {
                pen.line_to(to);
                return;
            }
            let perp = perpendicular(dir, true);
            let cp = from + perp * (CURVED_CAP_FACTOR * stroke_width);
            pen.quad_to(cp, to);
        }
        Terminals::Angled => {
            pen.line_to(lerp(from, to, 0.7));
            pen.line_to(to);
        }
        Terminals::Straight | Terminals::Unrecognized => {
            pen.line_to(to);
        }
    }
}

// ---------------------------------------------------------------------------
// Diagonals
// ---------------------------------------------------------------------------

/// A four-point contour. The letter templates use this for their
/// parallelogram strokes, whose thickness offsets are per-letter constants.
pub fn quad(pen: &mut ContourPen, a: Point, b: Point, c: Point, d: Point) {
    pen.move_to(a);
    pen.line_to(b);
    pen.line_to(c);
    pen.line_to(d);
    pen.close();
}

/// A thick stroke connecting two anchor points, with the thickness projected
/// perpendicular to the segment.
pub fn diagonal(pen: &mut ContourPen, a: Point, b: Point, thickness: Scalar) {
    let half = thickness / 2.0;
    let (l1, l2) = offset_line(a, b, half, Side::Left);
    let (r1, r2) = offset_line(a, b, half, Side::Right);
    quad(pen, l1, l2, r2, r1);
}

// ---------------------------------------------------------------------------
// Bowls and counters
// ---------------------------------------------------------------------------

/// A full bowl: outer ellipse (clockwise) plus reversed inner ellipse
/// (counter-clockwise), so the enclosed ring renders as the stroke and the
/// innermost region as a hole.
///
/// Negative inner radii are clamped to zero, producing a degenerate but
/// valid inner contour rather than an error.
pub fn ring(
    pen: &mut ContourPen,
    cx: Scalar,
    cy: Scalar,
    rx: Scalar,
    ry: Scalar,
    inner_rx: Scalar,
    inner_ry: Scalar,
) {
    let irx = inner_rx.max(0.0);
    let iry = inner_ry.max(0.0);

    // Outer, clockwise.
    pen.move_to((cx + rx, cy));
    pen.curve_to((cx + rx, cy - ry * KAPPA), (cx + rx * KAPPA, cy - ry), (cx, cy - ry));
    pen.curve_to((cx - rx * KAPPA, cy - ry), (cx - rx, cy - ry * KAPPA), (cx - rx, cy));
    pen.curve_to((cx - rx, cy + ry * KAPPA), (cx - rx * KAPPA, cy + ry), (cx, cy + ry));
    pen.curve_to((cx + rx * KAPPA, cy + ry), (cx + rx, cy + ry * KAPPA), (cx + rx, cy));
    pen.close();

    // Inner, counter-clockwise.
    pen.move_to((cx + irx, cy));
    pen.curve_to((cx + irx, cy + iry * KAPPA), (cx + irx * KAPPA, cy + iry), (cx, cy + iry));
    pen.curve_to((cx - irx * KAPPA, cy + iry), (cx - irx, cy + iry * KAPPA), (cx - irx, cy));
    pen.curve_to((cx - irx, cy - iry * KAPPA), (cx - irx * KAPPA, cy - iry), (cx, cy - iry));
    pen.curve_to((cx + irx * KAPPA, cy - iry), (cx + irx, cy - iry * KAPPA), (cx + irx, cy));
    pen.close();
}

/// A bowl bulging rightward from a stem edge at `x_attach`: outer contour
/// plus reversed inner contour, both closed along the stem line. Used by
/// D, P, B, R and lowercase b.
#[expect(
    clippy::too_many_arguments,
    reason = "attachment line, center and two radius pairs are all independent"
)]
pub fn half_ring_right(
    pen: &mut ContourPen,
    x_attach: Scalar,
    cx: Scalar,
    cy: Scalar,
    rx: Scalar,
    ry: Scalar,
    inner_rx: Scalar,
    inner_ry: Scalar,
) {
    let irx = inner_rx.max(0.0);
    let iry = inner_ry.max(0.0);

    // Outer, clockwise: along the top, down the right arc, back along the
    // bottom, up the stem line.
    pen.move_to((x_attach, cy + ry));
    pen.line_to((cx, cy + ry));
    pen.curve_to((cx + rx * KAPPA, cy + ry), (cx + rx, cy + ry * KAPPA), (cx + rx, cy));
    pen.curve_to((cx + rx, cy - ry * KAPPA), (cx + rx * KAPPA, cy - ry), (cx, cy - ry));
    pen.line_to((x_attach, cy - ry));
    pen.close();

    // Inner, counter-clockwise.
    pen.move_to((x_attach, cy - iry));
    pen.line_to((cx, cy - iry));
    pen.curve_to((cx + irx * KAPPA, cy - iry), (cx + irx, cy - iry * KAPPA), (cx + irx, cy));
    pen.curve_to((cx + irx, cy + iry * KAPPA), (cx + irx * KAPPA, cy + iry), (cx, cy + iry));
    pen.line_to((x_attach, cy + iry));
    pen.close();
}

/// Mirror of [`half_ring_right`]: the bowl bulges leftward from the stem
/// edge. Used by lowercase d.
#[expect(
    clippy::too_many_arguments,
    reason = "attachment line, center and two radius pairs are all independent"
)]
pub fn half_ring_left(
    pen: &mut ContourPen,
    x_attach: Scalar,
    cx: Scalar,
    cy: Scalar,
    rx: Scalar,
    ry: Scalar,
    inner_rx: Scalar,
    inner_ry: Scalar,
) {
    let irx = inner_rx.max(0.0);
    let iry = inner_ry.max(0.0);

    pen.move_to((x_attach, cy + ry));
    pen.line_to((cx, cy + ry));
    pen.curve_to((cx - rx * KAPPA, cy + ry), (cx - rx, cy + ry * KAPPA), (cx - rx, cy));
    pen.curve_to((cx - rx, cy - ry * KAPPA), (cx - rx * KAPPA, cy - ry), (cx, cy - ry));
    pen.line_to((x_attach, cy - ry));
    pen.close();

    pen.move_to((x_attach, cy - iry));
    pen.line_to((cx, cy - iry));
    pen.curve_to((cx - irx * KAPPA, cy - iry), (cx - irx, cy - iry * KAPPA), (cx - irx, cy));
    pen.curve_to((cx - irx, cy + iry * KAPPA), (cx - irx * KAPPA, cy + iry), (cx, cy + iry));
    pen.line_to((x_attach, cy + iry));
    pen.close();
}

/// An open bowl (C and G): outer and inner arcs each spanning
/// `[start_angle, −start_angle]` around the right-side opening, joined by
/// straight segments at the opening. A single contour — the counter is not
/// enclosed, so there is no hole to cut.
#[expect(
    clippy::too_many_arguments,
    reason = "mirrors the aperture geometry: center, two radius pairs, opening angle"
)]
pub fn open_ring(
    pen: &mut ContourPen,
    cx: Scalar,
    cy: Scalar,
    rx: Scalar,
    ry: Scalar,
    inner_rx: Scalar,
    inner_ry: Scalar,
    start_angle: Scalar,
) {
    let irx = inner_rx.max(0.0);
    let iry = inner_ry.max(0.0);
    let (sin_a, cos_a) = start_angle.sin_cos();

    // Outer arc from the lower opening edge, around the far side, to the
    // upper opening edge.
    pen.move_to((cx + rx * cos_a, cy - ry * sin_a));
    pen.curve_to((cx + rx, cy + ry * KAPPA), (cx + rx * KAPPA, cy + ry), (cx, cy + ry));
    pen.curve_to((cx - rx * KAPPA, cy + ry), (cx - rx, cy + ry * KAPPA), (cx - rx, cy));
    pen.curve_to((cx - rx, cy - ry * KAPPA), (cx - rx * KAPPA, cy - ry), (cx, cy - ry));
    pen.curve_to((cx + rx * KAPPA, cy - ry), (cx + rx, cy - ry * KAPPA), (cx + rx * cos_a, cy + ry * sin_a));

    // Across the opening to the inner rim.
    pen.line_to((cx + irx * cos_a, cy + iry * sin_a));

    // Inner arc back.
    pen.curve_to((cx + irx, cy - iry * KAPPA), (cx + irx * KAPPA, cy - iry), (cx, cy - iry));
    pen.curve_to((cx - irx * KAPPA, cy - iry), (cx - irx, cy - iry * KAPPA), (cx - irx, cy));
    pen.curve_to((cx - irx, cy + iry * KAPPA), (cx - irx * KAPPA, cy + iry), (cx, cy + iry));
    pen.curve_to((cx + irx * KAPPA, cy + iry), (cx + irx, cy + iry * KAPPA), (cx + irx * cos_a, cy - iry * sin_a));

    // Close across the opening back to the outer start.
    pen.close();
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use paraglyph_graphics::math::distance;
    use paraglyph_graphics::types::{Contour, Winding, EPSILON};

    fn draw(f: impl FnOnce(&mut ContourPen)) -> Vec<Contour> {
        let mut pen = ContourPen::new();
        f(&mut pen);
        pen.finish().contours
    }

    #[test]
    fn stem_is_one_closed_ccw_rect() {
        let contours = draw(|pen| stem(pen, 40.0, 0.0, 700.0, 80.0));
        assert_eq!(contours.len(), 1);
        let c = &contours[0];
        assert!(c.is_closed());
        assert_eq!(c.winding(), Winding::CounterClockwise);
        assert!((c.signed_area() - 80.0 * 700.0).abs() < 1e-6);
    }

    #[test]
    fn rect_cw_is_clockwise() {
        let contours = draw(|pen| rect_cw(pen, 0.0, 0.0, 10.0, 10.0));
        assert_eq!(contours[0].winding(), Winding::Clockwise);
    }

    #[test]
    fn ring_contours_have_opposite_winding() {
        let contours = draw(|pen| ring(pen, 300.0, 350.0, 240.0, 350.0, 200.0, 310.0));
        assert_eq!(contours.len(), 2);
        assert_eq!(contours[0].winding(), contours[1].winding().reversed());
        assert!(contours.iter().all(Contour::is_closed));
    }

    #[test]
    fn ring_clamps_negative_inner_radius() {
        let contours = draw(|pen| ring(pen, 0.0, 0.0, 50.0, 50.0, -10.0, -10.0));
        assert_eq!(contours.len(), 2);
        // Inner collapses onto the center: degenerate but valid and closed.
        assert!(contours[1].is_closed());
        assert!(contours[1].signed_area().abs() < EPSILON);
    }

    #[test]
    fn half_rings_pair_windings() {
        let right = draw(|pen| half_ring_right(pen, 100.0, 300.0, 350.0, 200.0, 350.0, 120.0, 270.0));
        assert_eq!(right.len(), 2);
        assert_eq!(right[0].winding(), right[1].winding().reversed());

        let left = draw(|pen| half_ring_left(pen, 500.0, 300.0, 350.0, 200.0, 350.0, 120.0, 270.0));
        assert_eq!(left.len(), 2);
        assert_eq!(left[0].winding(), left[1].winding().reversed());
    }

    #[test]
    fn open_ring_is_single_closed_contour() {
        let contours = draw(|pen| {
            open_ring(pen, 300.0, 350.0, 240.0, 350.0, 160.0, 270.0, 0.25 * std::f64::consts::PI);
        });
        assert_eq!(contours.len(), 1);
        assert!(contours[0].is_closed());
    }

    #[test]
    fn diagonal_edges_at_half_thickness() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(100.0, 100.0);
        let contours = draw(|pen| diagonal(pen, a, b, 20.0));
        let c = &contours[0];
        assert!(c.is_closed());
        // Each corner sits 10 units off an anchor point.
        assert!((distance(a, c.start) - 10.0).abs() < EPSILON);
    }

    #[test]
    fn capped_bars_close_for_every_terminal_style() {
        for terminals in [
            Terminals::Straight,
            Terminals::Curved,
            Terminals::Angled,
            Terminals::Unrecognized,
        ] {
            let contours = draw(|pen| {
                capped_bar_right(pen, 40.0, 360.0, 652.0, 700.0, 80.0, terminals);
                capped_bar_mid(pen, 40.0, 320.0, 326.0, 374.0, 80.0, terminals);
                capped_bar_both(pen, 40.0, 360.0, 652.0, 700.0, 80.0, terminals);
            });
            assert_eq!(contours.len(), 3);
            assert!(contours.iter().all(Contour::is_closed), "{terminals:?}");
        }
    }

    #[test]
    fn curved_bar_uses_quadratics() {
        let contours = draw(|pen| capped_bar_right(pen, 0.0, 100.0, 0.0, 20.0, 30.0, Terminals::Curved));
        let quads = contours[0]
            .segments
            .iter()
            .filter(|s| matches!(s, paraglyph_graphics::types::Segment::QuadTo(_, _)))
            .count();
        assert_eq!(quads, 2);
    }

    #[test]
    fn apply_terminal_straight_and_angled() {
        let from = Point::new(0.0, 0.0);
        let to = Point::new(10.0, 0.0);

        let straight = draw(|pen| {
            pen.move_to(from);
            apply_terminal(pen, from, to, 80.0, Terminals::Straight);
            pen.line_to((10.0, 5.0));
            pen.line_to((0.0, 5.0));
            pen.close();
        });
        assert_eq!(straight[0].segments.len(), 4);

        let angled = draw(|pen| {
            pen.move_to(from);
            apply_terminal(pen, from, to, 80.0, Terminals::Angled);
            pen.line_to((10.0, 5.0));
            pen.line_to((0.0, 5.0));
            pen.close();
        });
        // The bevel inserts the 70% waypoint.
        assert_eq!(angled[0].segments.len(), 5);
    }

    #[test]
    fn apply_terminal_curved_control_offset() {
        let from = Point::new(0.0, 0.0);
        let to = Point::new(10.0, 0.0);
        let contours = draw(|pen| {
            pen.move_to(from);
            apply_terminal(pen, from, to, 100.0, Terminals::Curved);
            pen.line_to((10.0, 50.0));
            pen.line_to((0.0, 50.0));
            pen.close();
        });
        let paraglyph_graphics::types::Segment::QuadTo(cp, end) = contours[0].segments[0] else {
            panic!("expected quadratic cap");
        };
        assert_eq!(end, to);
        // Control point offset 0.276 × 100 along the perpendicular.
        assert!((distance(from, cp) - 27.6).abs() < EPSILON);
    }

    #[test]
    fn apply_terminal_curved_degenerate_segment() {
        let p = Point::new(5.0, 5.0);
        let contours = draw(|pen| {
            pen.move_to((0.0, 0.0));
            pen.line_to(p);
            apply_terminal(pen, p, p, 80.0, Terminals::Curved);
            pen.line_to((0.0, 5.0));
            pen.close();
        });
        assert!(contours[0].is_closed());
    }
}
