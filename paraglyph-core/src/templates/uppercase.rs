//! Uppercase letter templates.
//!
//! Lowercase letters without a dedicated design reuse these recipes drawn in
//! the x-height box. The per-letter fractional constants (`stroke × 0.7`,
//! `height × 0.4`, …) are empirical visual-design values.

use kurbo::Point;

use paraglyph_graphics::shapes::KAPPA;
use paraglyph_graphics::types::Scalar;

use crate::pen::ContourPen;
use crate::primitives::{
    bar, capped_bar_both, capped_bar_mid, capped_bar_right, half_ring_right, open_ring, quad,
    rect_cw, ring, stem,
};
use crate::style::{DerivedParameters, Stress};
use crate::templates::GlyphBox;

/// A: two diagonal legs with a crossbar. The apex corners take the corner
/// radius as quadratic fillets; the leg joints stay sharp.
pub fn letter_a(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;
    let half = stroke / 2.0;
    let corner_r = style.corner_radius;

    let apex_x = w / 2.0;
    let apex_y = h;

    pen.move_to((m, 0.0));
    if corner_r > 0.0 {
        pen.line_to((apex_x - half - corner_r, apex_y - corner_r));
        pen.quad_to((apex_x - half, apex_y), (apex_x, apex_y));
        pen.quad_to((apex_x + half, apex_y), (apex_x + half + corner_r, apex_y - corner_r));
        pen.line_to((w - m, 0.0));
    } else {
        pen.line_to((apex_x - half, apex_y));
        pen.line_to((apex_x + half, apex_y));
        pen.line_to((w - m, 0.0));
    }

    // Crossbar, cut into the return path.
    let crossbar_y = h * 0.4;
    let crossbar_h = style.horizontal_stroke;
    pen.line_to((w - m - stroke * 0.5, crossbar_y));
    pen.line_to((w - m - stroke * 0.5, crossbar_y + crossbar_h));
    pen.line_to((m + stroke * 0.5, crossbar_y + crossbar_h));
    pen.line_to((m + stroke * 0.5, crossbar_y));

    // Back along the inner edges of the legs.
    pen.line_to((w - m - stroke * 0.7, 0.0));
    if corner_r > 0.0 {
        pen.line_to((apex_x + half + corner_r, h - stroke));
        pen.line_to((apex_x - half - corner_r, h - stroke));
    } else {
        pen.line_to((apex_x + half, h - stroke));
        pen.line_to((apex_x - half, h - stroke));
    }
    pen.line_to((m + stroke * 0.7, 0.0));
    pen.close();
}

/// B: stem plus two stacked bowls.
pub fn letter_b(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;

    stem(pen, m, 0.0, h, stroke);

    let rx = (w - m - stroke - m) / 2.0;
    let cx = m + stroke + rx;
    let ry = h * 0.25;

    half_ring_right(pen, m + stroke, cx, h * 0.75, rx, ry, rx - stroke, ry - stroke);
    half_ring_right(pen, m + stroke, cx, h * 0.25, rx, ry, rx - stroke, ry - stroke);
}

/// C: an open ring; the opening angle comes from the aperture axis.
pub fn letter_c(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;

    let cx = w / 2.0;
    let cy = h / 2.0;
    let rx = (w - 2.0 * m) / 2.0;
    let ry = h / 2.0;

    open_ring(pen, cx, cy, rx, ry, rx - stroke, ry - stroke, style.aperture_angle);
}

/// D: stem plus one full-height bowl.
pub fn letter_d(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;

    stem(pen, m, 0.0, h, stroke);

    let rx = (w - 2.0 * m - stroke) / 2.0;
    let cx = w - m - rx;
    half_ring_right(pen, m + stroke, cx, h / 2.0, rx, h / 2.0, rx - stroke, h / 2.0 - stroke);
}

/// E: stem plus three bars; the free bar ends carry the terminal style.
pub fn letter_e(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;
    let hs = style.horizontal_stroke;

    stem(pen, m, 0.0, h, stroke);
    capped_bar_right(pen, m, w - m, h - hs, h, stroke, style.terminals);
    capped_bar_mid(pen, m, w - 2.0 * m, h / 2.0 - hs / 2.0, h / 2.0 + hs / 2.0, stroke, style.terminals);
    capped_bar_right(pen, m, w - m, 0.0, hs, stroke, style.terminals);
}

/// F: E without the baseline bar.
pub fn letter_f(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;
    let hs = style.horizontal_stroke;

    stem(pen, m, 0.0, h, stroke);
    capped_bar_right(pen, m, w - m, h - hs, h, stroke, style.terminals);
    capped_bar_mid(pen, m, w - 2.0 * m, h / 2.0 - hs / 2.0, h / 2.0 + hs / 2.0, stroke, style.terminals);
}

/// G: C plus a crossbar reaching into the opening.
pub fn letter_g(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let hs = style.horizontal_stroke;

    letter_c(pen, gb, style);
    bar(pen, w / 2.0, w - m, h / 2.0 - hs / 2.0, h / 2.0 + hs / 2.0);
}

/// H: two stems joined by a crossbar.
pub fn letter_h(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;
    let hs = style.horizontal_stroke;

    stem(pen, m, 0.0, h, stroke);
    stem(pen, w - m - stroke, 0.0, h, stroke);
    bar(pen, m, w - m, h / 2.0 - hs / 2.0, h / 2.0 + hs / 2.0);
}

/// I: a single centered stem spanning the full height.
pub fn letter_i(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h) = (gb.width, gb.height);
    let stroke = style.stroke_width;
    stem(pen, w / 2.0 - stroke / 2.0, 0.0, h, stroke);
}

/// J: top bar, right stem and a connecting arch.
pub fn letter_j(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let hs = style.horizontal_stroke;

    bar(pen, m, w - m, h - hs, h);
    j_hook(pen, gb, style);
}

/// The stem-and-arch body of J, shared with the lowercase form (which has
/// no top bar).
pub(super) fn j_hook(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;

    stem(pen, w - m - stroke, h / 4.0, h, stroke);

    let cx = w / 2.0;
    let cy = h / 4.0;
    let rx = (w - 2.0 * m - stroke) / 2.0;
    let ry = h / 4.0;

    pen.move_to((w - m - stroke, cy));
    pen.curve_to((w - m - stroke, cy + ry * KAPPA), (cx + rx * KAPPA, cy + ry), (cx, cy + ry));
    pen.curve_to((cx - rx * KAPPA, cy + ry), (m + stroke, cy + ry * KAPPA), (m + stroke, cy));
    pen.line_to((m, cy));
    pen.curve_to(
        (m, cy + (ry + stroke) * KAPPA),
        (cx - (rx + stroke) * KAPPA, cy + ry + stroke),
        (cx, cy + ry + stroke),
    );
    pen.curve_to(
        (cx + (rx + stroke) * KAPPA, cy + ry + stroke),
        (w - m, cy + (ry + stroke) * KAPPA),
        (w - m, cy),
    );
    pen.close();
}

/// K: stem plus two diagonal strokes meeting at mid-height.
pub fn letter_k(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;

    stem(pen, m, 0.0, h, stroke);
    quad(
        pen,
        Point::new(m + stroke, h / 2.0),
        Point::new(w - m, h),
        Point::new(w - m - stroke * 0.7, h),
        Point::new(m + stroke * 1.5, h / 2.0),
    );
    quad(
        pen,
        Point::new(m + stroke, h / 2.0),
        Point::new(m + stroke * 1.5, h / 2.0),
        Point::new(w - m - stroke * 0.7, 0.0),
        Point::new(w - m, 0.0),
    );
}

/// L: stem plus a baseline bar with a treated end.
pub fn letter_l(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;
    let hs = style.horizontal_stroke;

    stem(pen, m, 0.0, h, stroke);
    capped_bar_right(pen, m, w - m, 0.0, hs, stroke, style.terminals);
}

/// M: two stems with two diagonals dropping to a mid valley.
pub fn letter_m(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;
    let apex_x = w / 2.0;

    stem(pen, m, 0.0, h, stroke);
    quad(
        pen,
        Point::new(m, h),
        Point::new(m + stroke * 0.7, h),
        Point::new(apex_x, h / 3.0),
        Point::new(apex_x - stroke * 0.5, h / 3.0),
    );
    quad(
        pen,
        Point::new(apex_x + stroke * 0.5, h / 3.0),
        Point::new(apex_x, h / 3.0),
        Point::new(w - m - stroke * 0.7, h),
        Point::new(w - m, h),
    );
    stem(pen, w - m - stroke, 0.0, h, stroke);
}

/// N: two stems and the full diagonal.
pub fn letter_n(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;

    stem(pen, m, 0.0, h, stroke);

    pen.move_to((m, h));
    pen.line_to((m + stroke * 0.7, h));
    pen.line_to((w - m, stroke));
    pen.line_to((w - m, 0.0));
    pen.line_to((w - m - stroke * 0.7, 0.0));
    pen.line_to((m, h - stroke));
    pen.close();

    stem(pen, w - m - stroke, 0.0, h, stroke);
}

/// O: a full bowl. Under vertical stress the inner ellipse insets by the
/// full stroke horizontally and the horizontal stroke vertically; without
/// stress the inset is half the stroke on both axes.
pub fn letter_o(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;

    let cx = w / 2.0;
    let cy = h / 2.0;
    let rx = (w - 2.0 * m) / 2.0;
    let ry = h / 2.0;

    let (inner_rx, inner_ry) = match style.stress {
        Stress::Vertical => (rx - stroke, ry - style.horizontal_stroke),
        Stress::None | Stress::Unrecognized => (rx - stroke / 2.0, ry - stroke / 2.0),
    };

    ring(pen, cx, cy, rx, ry, inner_rx, inner_ry);
}

/// P: stem plus the upper-half bowl.
pub fn letter_p(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;

    stem(pen, m, 0.0, h, stroke);

    let rx = (w - m - stroke - m) / 2.0;
    let cx = m + stroke + rx;
    let ry = h * 0.25;
    half_ring_right(pen, m + stroke, cx, h * 0.75, rx, ry, rx - stroke, ry - stroke);
}

/// Q: O plus a tail at the lower right.
pub fn letter_q(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;

    letter_o(pen, gb, style);
    // Clockwise so the overlap with the bowl outer keeps its fill.
    rect_cw(pen, w - m - stroke, 0.0, w - m, h / 3.0);
}

/// R: P plus a leg.
pub fn letter_r(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;

    letter_p(pen, gb, style);

    let bowl_cx = m + stroke + (w - m - stroke - m) / 2.0;
    quad(
        pen,
        Point::new(bowl_cx, h * 0.5),
        Point::new(bowl_cx + stroke * 0.7, h * 0.5),
        Point::new(w - m, 0.0),
        Point::new(w - m - stroke * 0.7, 0.0),
    );
}

/// S: two half-bowls joined through the center, traced as one spine
/// contour.
pub fn letter_s(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;

    let cx = w / 2.0;
    let upper = h * 0.75;
    let lower = h * 0.25;
    let rx = (w - 2.0 * m) / 2.0;
    let ry = h / 4.0;
    let irx = rx - stroke;
    let iry = ry - stroke;

    pen.move_to((cx + rx, upper));
    pen.curve_to((cx + rx, upper + ry * KAPPA), (cx + rx * KAPPA, upper + ry), (cx, upper + ry));
    pen.curve_to((cx - rx * KAPPA, upper + ry), (cx - rx, upper + ry * KAPPA), (cx - rx, upper));
    pen.curve_to((cx - rx, upper - ry * KAPPA), (cx - rx * KAPPA, upper - ry), (cx, upper - ry));
    pen.line_to((cx, lower + ry));
    pen.curve_to((cx + rx * KAPPA, lower + ry), (cx + rx, lower + ry * KAPPA), (cx + rx, lower));
    pen.curve_to((cx + rx, lower - ry * KAPPA), (cx + rx * KAPPA, lower - ry), (cx, lower - ry));
    pen.curve_to((cx - rx * KAPPA, lower - ry), (cx - rx, lower - ry * KAPPA), (cx - rx, lower));
    pen.line_to((cx - rx, lower + stroke));

    // Back along the inner edge.
    pen.line_to((cx - irx, lower));
    pen.curve_to((cx - irx, lower - iry * KAPPA), (cx - irx * KAPPA, lower - iry), (cx, lower - iry));
    pen.curve_to((cx + irx * KAPPA, lower - iry), (cx + irx, lower - iry * KAPPA), (cx + irx, lower));
    pen.line_to((cx + irx, upper));
    pen.curve_to((cx + irx, upper + iry * KAPPA), (cx + irx * KAPPA, upper + iry), (cx, upper + iry));
    pen.curve_to((cx - irx * KAPPA, upper + iry), (cx - irx, upper + iry * KAPPA), (cx - irx, upper));
    pen.line_to((cx + rx, upper));
    pen.close();
}

/// T: a bar treated at both ends over a centered stem.
pub fn letter_t(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;
    let hs = style.horizontal_stroke;

    capped_bar_both(pen, m, w - m, h - hs, h, stroke, style.terminals);
    stem(pen, w / 2.0 - stroke / 2.0, 0.0, h, stroke);
}

/// U: two stems joined by the bottom arc band.
pub fn letter_u(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;

    stem(pen, m, h / 3.0, h, stroke);
    stem(pen, w - m - stroke, h / 3.0, h, stroke);
    bottom_arc(pen, gb, stroke, h / 3.0, h / 3.0);
}

/// The U/u connecting band: inner arc between the stems, out to the
/// margins, outer arc back. The outer edge overshoots the baseline by one
/// stroke.
pub(super) fn bottom_arc(
    pen: &mut ContourPen,
    gb: &GlyphBox,
    stroke: Scalar,
    cy: Scalar,
    ry: Scalar,
) {
    let (w, m) = (gb.width, gb.margin);
    let cx = w / 2.0;
    let rx = (w - 2.0 * m - stroke) / 2.0;

    pen.move_to((m + stroke, cy));
    pen.curve_to((m + stroke, cy - ry * KAPPA), (cx - rx * KAPPA, cy - ry), (cx, cy - ry));
    pen.curve_to((cx + rx * KAPPA, cy - ry), (w - m - stroke, cy - ry * KAPPA), (w - m - stroke, cy));
    pen.line_to((w - m, cy));
    pen.curve_to(
        (w - m, cy - (ry + stroke) * KAPPA),
        (cx + (rx + stroke) * KAPPA, cy - ry - stroke),
        (cx, cy - ry - stroke),
    );
    pen.curve_to(
        (cx - (rx + stroke) * KAPPA, cy - ry - stroke),
        (m, cy - (ry + stroke) * KAPPA),
        (m, cy),
    );
    pen.close();
}

/// V: two diagonals meeting at the bottom apex.
pub fn letter_v(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;
    let apex_x = w / 2.0;

    quad(
        pen,
        Point::new(m, h),
        Point::new(m + stroke * 0.7, h),
        Point::new(apex_x + stroke * 0.3, 0.0),
        Point::new(apex_x - stroke * 0.3, 0.0),
    );
    quad(
        pen,
        Point::new(apex_x - stroke * 0.3, 0.0),
        Point::new(apex_x + stroke * 0.3, 0.0),
        Point::new(w - m - stroke * 0.7, h),
        Point::new(w - m, h),
    );
}

/// W: four alternating diagonals.
pub fn letter_w(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;

    quad(
        pen,
        Point::new(m, h),
        Point::new(m + stroke * 0.5, h),
        Point::new(w * 0.25, 0.0),
        Point::new(w * 0.25 - stroke * 0.3, 0.0),
    );
    quad(
        pen,
        Point::new(w * 0.25 + stroke * 0.3, 0.0),
        Point::new(w * 0.25, 0.0),
        Point::new(w * 0.5 - stroke * 0.3, h * 0.67),
        Point::new(w * 0.5 + stroke * 0.3, h * 0.67),
    );
    quad(
        pen,
        Point::new(w * 0.5 - stroke * 0.3, h * 0.67),
        Point::new(w * 0.5 + stroke * 0.3, h * 0.67),
        Point::new(w * 0.75, 0.0),
        Point::new(w * 0.75 - stroke * 0.3, 0.0),
    );
    quad(
        pen,
        Point::new(w * 0.75 + stroke * 0.3, 0.0),
        Point::new(w * 0.75, 0.0),
        Point::new(w - m - stroke * 0.5, h),
        Point::new(w - m, h),
    );
}

/// X: two crossing diagonals.
pub fn letter_x(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;

    quad(
        pen,
        Point::new(m, h),
        Point::new(m + stroke * 0.7, h),
        Point::new(w - m, 0.0),
        Point::new(w - m - stroke * 0.7, 0.0),
    );
    quad(
        pen,
        Point::new(w - m, h),
        Point::new(w - m - stroke * 0.7, h),
        Point::new(m, 0.0),
        Point::new(m + stroke * 0.7, 0.0),
    );
}

/// Y: two diagonals meeting at mid-height over a stem.
pub fn letter_y(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;
    let center_x = w / 2.0;
    let join_y = h * 0.5;

    quad(
        pen,
        Point::new(m, h),
        Point::new(m + stroke * 0.7, h),
        Point::new(center_x + stroke * 0.3, join_y),
        Point::new(center_x - stroke * 0.3, join_y),
    );
    quad(
        pen,
        Point::new(center_x - stroke * 0.3, join_y),
        Point::new(center_x + stroke * 0.3, join_y),
        Point::new(w - m - stroke * 0.7, h),
        Point::new(w - m, h),
    );
    stem(pen, center_x - stroke / 2.0, 0.0, join_y, stroke);
}

/// Z: two bars joined by the diagonal.
pub fn letter_z(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;
    let hs = style.horizontal_stroke;

    bar(pen, m, w - m, h - hs, h);
    quad(
        pen,
        Point::new(w - m, h - hs),
        Point::new(w - m - stroke * 0.7, h - hs),
        Point::new(m + stroke * 0.7, hs),
        Point::new(m, hs),
    );
    bar(pen, m, w - m, 0.0, hs);
}

/// The generic uppercase shape: stem plus top bar (an "L" rotated onto the
/// cap line).
pub fn fallback(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);

    stem(pen, m, 0.0, h, style.stroke_width);
    bar(pen, m, w - m, h - style.horizontal_stroke, h);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{StyleParameters, Terminals};
    use paraglyph_graphics::types::{Contour, Outline, Winding};

    fn build(f: crate::templates::TemplateFn, style: &DerivedParameters) -> Outline {
        let gb = GlyphBox {
            width: 400.0,
            height: 700.0,
            margin: 40.0,
        };
        let mut pen = ContourPen::new();
        f(&mut pen, &gb, style);
        pen.finish()
    }

    fn default_style() -> DerivedParameters {
        DerivedParameters::resolve(&StyleParameters::default())
    }

    #[test]
    fn every_template_closes_all_contours() {
        let style = default_style();
        let templates: &[crate::templates::TemplateFn] = &[
            letter_a, letter_b, letter_c, letter_d, letter_e, letter_f, letter_g, letter_h,
            letter_i, letter_j, letter_k, letter_l, letter_m, letter_n, letter_o, letter_p,
            letter_q, letter_r, letter_s, letter_t, letter_u, letter_v, letter_w, letter_x,
            letter_y, letter_z, fallback,
        ];
        for (i, f) in templates.iter().enumerate() {
            let outline = build(*f, &style);
            assert!(!outline.is_empty(), "template {i} produced nothing");
            assert!(
                outline.contours.iter().all(Contour::is_closed),
                "template {i} left an open contour"
            );
            assert!(outline.is_finite(), "template {i} produced NaN/inf");
        }
    }

    #[test]
    fn i_is_one_centered_full_height_rectangle() {
        let style = default_style();
        let outline = build(letter_i, &style);
        assert_eq!(outline.contours.len(), 1);

        let c = &outline.contours[0];
        let xs: Vec<f64> = c.on_curve_points().map(|p| p.x).collect();
        let ys: Vec<f64> = c.on_curve_points().map(|p| p.y).collect();
        let min_x = xs.iter().copied().fold(f64::INFINITY, f64::min);
        let max_x = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert!((max_x - min_x - style.stroke_width).abs() < 1e-9);
        assert!(((min_x + max_x) / 2.0 - 200.0).abs() < 1e-9);
        assert!(ys.iter().copied().fold(f64::INFINITY, f64::min).abs() < 1e-9);
        assert!((ys.iter().copied().fold(f64::NEG_INFINITY, f64::max) - 700.0).abs() < 1e-9);
    }

    #[test]
    fn o_counter_pairs_windings() {
        let style = default_style();
        let outline = build(letter_o, &style);
        assert_eq!(outline.contours.len(), 2);
        assert_eq!(
            outline.contours[0].winding(),
            outline.contours[1].winding().reversed()
        );
    }

    #[test]
    fn counters_have_paired_windings() {
        let style = default_style();
        for (name, f) in [
            ("B", letter_b as crate::templates::TemplateFn),
            ("D", letter_d),
            ("P", letter_p),
            ("Q", letter_q),
            ("R", letter_r),
        ] {
            let outline = build(f, &style);
            let cw = outline
                .contours
                .iter()
                .filter(|c| c.winding() == Winding::Clockwise)
                .count();
            let ccw = outline.contours.len() - cw;
            assert!(cw > 0 && ccw > 0, "{name} has no winding pair");
        }
    }

    #[test]
    fn c_is_single_open_band() {
        let style = default_style();
        let outline = build(letter_c, &style);
        assert_eq!(outline.contours.len(), 1);
        assert!(outline.contours[0].is_closed());
    }

    #[test]
    fn e_terminal_styles_change_geometry_not_count() {
        let base = StyleParameters::default();
        let mut outlines = Vec::new();
        for terminals in [Terminals::Straight, Terminals::Curved, Terminals::Angled] {
            let style = DerivedParameters::resolve(&StyleParameters { terminals, ..base });
            let outline = build(letter_e, &style);
            assert_eq!(outline.contours.len(), 4);
            outlines.push(outline);
        }
        assert_ne!(outlines[0], outlines[1]);
        assert_ne!(outlines[1], outlines[2]);
    }

    #[test]
    fn a_sharp_corners_drop_the_fillets() {
        let rounded = default_style();
        let sharp = DerivedParameters {
            corner_radius: 0.0,
            ..rounded
        };

        let with_fillets = build(letter_a, &rounded);
        let without = build(letter_a, &sharp);

        let has_quads = |o: &Outline| {
            o.contours.iter().any(|c| {
                c.segments
                    .iter()
                    .any(|s| matches!(s, paraglyph_graphics::types::Segment::QuadTo(_, _)))
            })
        };
        assert!(has_quads(&with_fillets));
        assert!(!has_quads(&without));
    }

    #[test]
    fn o_stress_changes_inner_radii() {
        let none = default_style();
        let vertical = DerivedParameters {
            stress: Stress::Vertical,
            ..none
        };
        assert_ne!(build(letter_o, &none), build(letter_o, &vertical));
    }
}
