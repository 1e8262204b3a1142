//! Digit templates.
//!
//! 0 shares the O bowl; 1 is a bare stem; the rest combine arcs, bars and
//! diagonals with per-digit proportion constants.

use kurbo::Point;

use paraglyph_graphics::shapes::KAPPA;

use crate::pen::ContourPen;
use crate::primitives::{bar, quad, rect, rect_cw, ring, stem};
use crate::style::DerivedParameters;
use crate::templates::{uppercase, GlyphBox};

/// 0: the O bowl.
pub fn digit_0(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    uppercase::letter_o(pen, gb, style);
}

/// 1: a centered stem.
pub fn digit_1(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h) = (gb.width, gb.height);
    let stroke = style.stroke_width;
    stem(pen, w / 2.0 - stroke / 2.0, 0.0, h, stroke);
}

/// 2: top arch, diagonal, baseline bar.
pub fn digit_2(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;
    let hs = style.horizontal_stroke;

    let cx = w / 2.0;
    let cy = h * 0.75;
    let rx = (w - 2.0 * m) / 2.0;
    let ry = h * 0.25;

    pen.move_to((m + stroke, cy));
    pen.curve_to((m + stroke, cy + ry * KAPPA), (cx - rx * KAPPA, cy + ry), (cx, cy + ry));
    pen.curve_to((cx + rx * KAPPA, cy + ry), (w - m - stroke, cy + ry * KAPPA), (w - m - stroke, cy));
    pen.line_to((w - m, cy));
    pen.curve_to(
        (w - m, cy + (ry + stroke) * KAPPA),
        (cx + (rx + stroke) * KAPPA, h),
        (cx, h),
    );
    pen.curve_to(
        (cx - (rx + stroke) * KAPPA, h),
        (m, cy + (ry + stroke) * KAPPA),
        (m, cy),
    );
    pen.close();

    quad(
        pen,
        Point::new(w - m, cy),
        Point::new(w - m - stroke * 0.7, cy),
        Point::new(m + stroke * 0.7, hs),
        Point::new(m, hs),
    );
    bar(pen, m, w - m, 0.0, hs);
}

/// 3: two right-opening half-bowls stacked, traced as one contour.
pub fn digit_3(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;

    let rx = (w - 2.0 * m) / 2.0;
    let cx = w - m - rx;
    let upper = h * 0.75;
    let lower = h * 0.25;
    let ry = h / 4.0;
    let irx = rx - stroke;
    let iry = ry - stroke;

    pen.move_to((m, h));
    pen.line_to((cx, h));
    pen.curve_to((cx + rx * KAPPA, h), (cx + rx, upper + ry * KAPPA), (cx + rx, upper));
    pen.curve_to((cx + rx, upper - ry * KAPPA), (cx + rx * KAPPA, upper - ry), (cx, upper - ry));
    pen.line_to((cx, lower + ry));
    pen.curve_to((cx + rx * KAPPA, lower + ry), (cx + rx, lower + ry * KAPPA), (cx + rx, lower));
    pen.curve_to((cx + rx, lower - ry * KAPPA), (cx + rx * KAPPA, 0.0), (cx, 0.0));
    pen.line_to((m, 0.0));
    pen.line_to((m, stroke));
    pen.line_to((cx, stroke));

    // Back along the inner edge.
    pen.curve_to((cx + irx * KAPPA, stroke), (cx + irx, lower - iry * KAPPA), (cx + irx, lower));
    pen.curve_to((cx + irx, lower + iry * KAPPA), (cx + irx * KAPPA, lower + iry), (cx, lower + iry));
    pen.line_to((cx, upper - iry));
    pen.curve_to((cx + irx * KAPPA, upper - iry), (cx + irx, upper + iry * KAPPA), (cx + irx, upper));
    pen.curve_to((cx + irx, upper + iry * KAPPA), (cx + irx * KAPPA, h - stroke), (cx, h - stroke));
    pen.line_to((m, h - stroke));
    pen.line_to((m, h));
    pen.close();
}

/// 4: right stem, diagonal, crossbar.
pub fn digit_4(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;
    let hs = style.horizontal_stroke;

    stem(pen, w - m - stroke, 0.0, h, stroke);

    pen.move_to((m, h * 0.3));
    pen.line_to((m + stroke * 0.7, h * 0.3));
    pen.line_to((w - m - stroke, h - stroke * 0.7));
    pen.line_to((w - m - stroke, h));
    pen.line_to((w - m - stroke * 1.5, h));
    pen.line_to((m, h * 0.3 + stroke * 0.7));
    pen.close();

    bar(pen, m, w - m, h * 0.3, h * 0.3 + hs);
}

/// 5: top bar, upper-left stem, lower bowl.
pub fn digit_5(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;
    let hs = style.horizontal_stroke;

    bar(pen, m, w - m, h - hs, h);
    stem(pen, m, h / 2.0, h, stroke);

    let rx = (w - 2.0 * m - stroke) / 2.0;
    let cx = w - m - rx;
    let cy = h * 0.25;
    let ry = h * 0.25;
    let irx = rx - stroke;
    let iry = ry - stroke;

    pen.move_to((m + stroke, h / 2.0));
    pen.line_to((cx, h / 2.0));
    pen.curve_to((cx + rx * KAPPA, h / 2.0), (cx + rx, cy + ry * KAPPA), (cx + rx, cy));
    pen.curve_to((cx + rx, cy - ry * KAPPA), (cx + rx * KAPPA, 0.0), (cx, 0.0));
    pen.line_to((m, 0.0));
    pen.line_to((m, stroke));
    pen.line_to((cx, stroke));
    pen.curve_to((cx + irx * KAPPA, stroke), (cx + irx, cy - iry * KAPPA), (cx + irx, cy));
    pen.curve_to((cx + irx, cy + iry * KAPPA), (cx + irx * KAPPA, h / 2.0 - stroke), (cx, h / 2.0 - stroke));
    pen.line_to((m + stroke, h / 2.0 - stroke));
    pen.line_to((m + stroke, h / 2.0));
    pen.close();
}

/// 6: lower bowl plus the rising top arc.
pub fn digit_6(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;

    let cx = w / 2.0;
    let cy = h * 0.25;
    let rx = (w - 2.0 * m) / 2.0;
    let ry = h * 0.25;

    ring(pen, cx, cy, rx, ry, rx - stroke, ry - stroke);

    pen.move_to((cx - rx, cy));
    pen.line_to((cx - rx - stroke, cy));
    pen.line_to((cx - rx - stroke, h));
    pen.quad_to((cx + rx, h), (cx + rx, cy));
    pen.line_to((cx + rx - stroke, cy));
    pen.quad_to((cx + rx - stroke, h - stroke * 2.0), (cx - rx, cy));
    pen.close();
}

/// 7: top bar and a diagonal to the baseline.
pub fn digit_7(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;
    let hs = style.horizontal_stroke;

    bar(pen, m, w - m, h - hs, h);
    quad(
        pen,
        Point::new(w - m, h - hs),
        Point::new(w - m - stroke * 0.7, h - hs),
        Point::new(m + stroke * 0.7, 0.0),
        Point::new(m, 0.0),
    );
}

/// 8: two stacked bowls; the lower one is the larger.
pub fn digit_8(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;

    let cx = w / 2.0;
    let rx = (w - 2.0 * m) / 2.0;
    let upper_cy = h * 0.7;
    let upper_ry = h * 0.2;
    let lower_cy = h * 0.3;
    let lower_ry = h * 0.3;

    ring(pen, cx, upper_cy, rx, upper_ry, rx - stroke, upper_ry - stroke);
    ring(pen, cx, lower_cy, rx, lower_ry, rx - stroke, lower_ry - stroke);
}

/// 9: upper bowl plus the dropping bottom arc (6 inverted).
pub fn digit_9(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;

    let cx = w / 2.0;
    let cy = h * 0.75;
    let rx = (w - 2.0 * m) / 2.0;
    let ry = h * 0.25;

    ring(pen, cx, cy, rx, ry, rx - stroke, ry - stroke);

    pen.move_to((cx + rx, cy));
    pen.line_to((cx + rx + stroke, cy));
    pen.line_to((cx + rx + stroke, 0.0));
    pen.quad_to((cx - rx, 0.0), (cx - rx, cy));
    pen.line_to((cx - rx + stroke, cy));
    pen.quad_to((cx - rx + stroke, stroke * 2.0), (cx + rx, cy));
    pen.close();
}

/// The generic digit shape: a hollow rectangle (outer box plus reversed
/// inner box).
pub fn fallback(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;

    rect(pen, m, 0.0, w - m, h);
    rect_cw(pen, m + stroke, stroke, w - m - stroke, h - stroke);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
