//! Lowercase letter templates.
//!
//! Only the letters whose lowercase form differs structurally from the
//! capital get a dedicated recipe here; the rest reuse the uppercase
//! template drawn in the x-height box. Ascenders overshoot the box top:
//! `height × 1.4` for b, d and l, `height × 1.2` for t, and the i dot sits
//! at `height × 1.3`.

use paraglyph_graphics::shapes::KAPPA;

use crate::pen::ContourPen;
use crate::primitives::{bar, dot, half_ring_left, half_ring_right, rect_cw, ring, stem};
use crate::style::DerivedParameters;
use crate::templates::{uppercase, GlyphBox};

/// a: a bowl on the left with a full-height stem on the right.
pub fn letter_a(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;

    let cx = w * 0.35;
    let cy = h / 2.0;
    let rx = w * 0.35 - m;
    let ry = h / 2.0;

    ring(pen, cx, cy, rx, ry, rx - stroke, ry - stroke);
    stem(pen, w - m - stroke, 0.0, h, stroke);
}

/// b: ascender stem with a bowl to its right.
pub fn letter_b(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;

    stem(pen, m, 0.0, h * 1.4, stroke);

    let rx = (w - 2.0 * m - stroke) / 2.0;
    let cx = w - m - rx;
    half_ring_right(pen, m + stroke, cx, h / 2.0, rx, h / 2.0, rx - stroke, h / 2.0 - stroke);
}

/// d: mirror of b — the ascender stem sits on the right.
pub fn letter_d(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;

    stem(pen, w - m - stroke, 0.0, h * 1.4, stroke);

    let rx = (w - 2.0 * m - stroke) / 2.0;
    let cx = m + rx;
    half_ring_left(pen, w - m - stroke, cx, h / 2.0, rx, h / 2.0, rx - stroke, h / 2.0 - stroke);
}

/// e: a bowl with the crossbar closing its upper half.
pub fn letter_e(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;

    let cx = w / 2.0;
    let cy = h / 2.0;
    let rx = (w - 2.0 * m) / 2.0;
    let ry = h / 2.0;

    ring(pen, cx, cy, rx, ry, rx - stroke, ry - stroke);
    // Clockwise to match the bowl outer where they overlap.
    rect_cw(pen, cx - rx, cy, w - m, cy + stroke);
}

/// i: x-height stem with a detached square dot above.
pub fn letter_i(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h) = (gb.width, gb.height);
    let stroke = style.stroke_width;
    let center_x = w / 2.0;

    stem(pen, center_x - stroke / 2.0, 0.0, h, stroke);
    dot(pen, center_x, h * 1.3, stroke * 0.7);
}

/// j: the J hook without the capital's top bar.
pub fn letter_j(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    uppercase::j_hook(pen, gb, style);
}

/// l: a single centered ascender stem.
pub fn letter_l(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h) = (gb.width, gb.height);
    let stroke = style.stroke_width;
    stem(pen, w / 2.0 - stroke / 2.0, 0.0, h * 1.4, stroke);
}

/// n: two stems bridged by the shoulder arch.
pub fn letter_n(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;

    stem(pen, m, 0.0, h, stroke);
    stem(pen, w - m - stroke, 0.0, h, stroke);

    let cx = w / 2.0;
    let cy = h * 0.7;
    let rx = (w - 2.0 * m - stroke) / 2.0;
    let ry = h * 0.3;

    pen.move_to((m + stroke, h));
    pen.curve_to((m + stroke, h - ry * KAPPA), (cx - rx * KAPPA, cy), (cx, cy));
    pen.curve_to((cx + rx * KAPPA, cy), (w - m - stroke, h - ry * KAPPA), (w - m - stroke, h));
    pen.close();
}

/// r: stem with a shoulder curling to the right.
pub fn letter_r(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;

    stem(pen, m, 0.0, h, stroke);

    pen.move_to((m + stroke, h - stroke));
    pen.line_to((w - m - stroke, h - stroke));
    pen.quad_to((w - m, h * 0.7), (w - m, h * 0.5));
    pen.line_to((w - m - stroke, h * 0.5));
    pen.quad_to((w - m - stroke, h * 0.7), (m + stroke, h));
    pen.close();
}

/// t: ascender stem crossed by a bar at the x-height line.
pub fn letter_t(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;
    let hs = style.horizontal_stroke;

    stem(pen, w / 2.0 - stroke / 2.0, 0.0, h * 1.2, stroke);
    bar(pen, m, w - m, h - hs / 2.0, h + hs / 2.0);
}

/// u: two stems joined by the bottom arc band.
pub fn letter_u(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;

    stem(pen, m, h * 0.3, h, stroke);
    stem(pen, w - m - stroke, h * 0.3, h, stroke);
    uppercase::bottom_arc(pen, gb, stroke, h * 0.3, h * 0.3);
}

/// The generic lowercase shape: a single centered stem.
pub fn fallback(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h) = (gb.width, gb.height);
    let stroke = style.stroke_width;
    stem(pen, w / 2.0 - stroke / 2.0, 0.0, h, stroke);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleParameters;
    use crate::templates::TemplateFn;
    use paraglyph_graphics::types::{Contour, Outline, Winding};

    fn build(f: TemplateFn) -> Outline {
        let gb = GlyphBox {
            width: 400.0,
            height: 550.0,
            margin: 40.0,
        };
        let style = DerivedParameters::resolve(&StyleParameters::default());
        let mut pen = ContourPen::new();
        f(&mut pen, &gb, &style);
        pen.finish()
    }

    #[test]
    fn every_template_closes_all_contours() {
        let templates: &[TemplateFn] = &[
            letter_a, letter_b, letter_d, letter_e, letter_i, letter_j, letter_l, letter_n,
            letter_r, letter_t, letter_u, fallback,
        ];
        for (i, f) in templates.iter().enumerate() {
            let outline = build(*f);
            assert!(!outline.is_empty(), "template {i} produced nothing");
            assert!(
                outline.contours.iter().all(Contour::is_closed),
                "template {i} left an open contour"
            );
        }
    }

    #[test]
    fn bowl_letters_pair_windings() {
        for (name, f) in [
            ("a", letter_a as TemplateFn),
            ("b", letter_b),
            ("d", letter_d),
            ("e", letter_e),
        ] {
            let outline = build(f);
            let cw = outline
                .contours
                .iter()
                .filter(|c| c.winding() == Winding::Clockwise)
                .count();
            assert!(
                cw > 0 && cw < outline.contours.len(),
                "{name} has no winding pair"
            );
        }
    }

    #[test]
    fn ascenders_overshoot_the_box() {
        let top = |o: &Outline| {
            o.contours
                .iter()
                .flat_map(Contour::on_curve_points)
                .map(|p| p.y)
                .fold(f64::NEG_INFINITY, f64::max)
        };

        // 550 × 1.4 for b/l, 550 × 1.3 dot top for i, 550 × 1.2 for t.
        assert!((top(&build(letter_b)) - 770.0).abs() < 1e-9);
        assert!((top(&build(letter_l)) - 770.0).abs() < 1e-9);
        assert!((top(&build(letter_t)) - 660.0).abs() < 1e-9);

        let i_top = top(&build(letter_i));
        assert!((i_top - (550.0 * 1.3 + 80.0 * 0.7)).abs() < 1e-9);
    }

    #[test]
    fn i_has_stem_and_dot() {
        let outline = build(letter_i);
        assert_eq!(outline.contours.len(), 2);
    }

    #[test]
    fn j_has_no_top_bar_but_capital_does() {
        let lower = build(letter_j);
        let upper = build(crate::templates::uppercase::letter_j);
        assert_eq!(upper.contours.len(), lower.contours.len() + 1);
    }
}
