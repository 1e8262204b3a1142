//! Punctuation templates.
//!
//! Marks are drawn in whatever box the caller requests; the generator
//! conventionally hands punctuation half the letter width and height. Marks
//! without a specific template fall back to a centered mid-height bar.

use kurbo::Point;

use crate::pen::ContourPen;
use crate::primitives::{bar, diagonal, dot, stem};
use crate::style::DerivedParameters;
use crate::templates::GlyphBox;

/// Period: a square dot on the baseline zone.
pub fn period(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h) = (gb.width, gb.height);
    dot(pen, w / 2.0, h * 0.15, style.stroke_width * 0.6);
}

/// Comma: the period dot with a tail dipping below it.
pub fn comma(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h) = (gb.width, gb.height);
    let radius = style.stroke_width * 0.6;
    let center_x = w / 2.0;
    let cy = h * 0.15;

    pen.move_to((center_x - radius, cy - radius));
    pen.line_to((center_x + radius, cy - radius));
    pen.line_to((center_x + radius, cy));
    pen.line_to((center_x, cy - h * 0.2));
    pen.line_to((center_x - radius, cy));
    pen.close();
}

/// Colon: two stacked dots.
pub fn colon(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h) = (gb.width, gb.height);
    let radius = style.stroke_width * 0.6;
    dot(pen, w / 2.0, h * 0.15, radius);
    dot(pen, w / 2.0, h * 0.7, radius);
}

/// Semicolon: the comma with a dot above it.
pub fn semicolon(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h) = (gb.width, gb.height);
    comma(pen, gb, style);
    dot(pen, w / 2.0, h * 0.7, style.stroke_width * 0.6);
}

/// Exclamation and question marks: an upper stem over a detached dot.
pub fn exclamation(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h) = (gb.width, gb.height);
    let stroke = style.stroke_width;
    let center_x = w / 2.0;

    stem(pen, center_x - stroke / 2.0, h * 0.3, h, stroke);
    dot(pen, center_x, h * 0.1, stroke * 0.6);
}

/// Opening parenthesis: a leftward-bulging arc band.
pub fn paren_open(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;

    pen.move_to((w - m, h));
    pen.quad_to((m + stroke, h / 2.0), (w - m, 0.0));
    pen.line_to((w - m - stroke, 0.0));
    pen.quad_to((m + stroke * 2.0, h / 2.0), (w - m - stroke, h));
    pen.close();
}

/// Closing parenthesis: mirror of [`paren_open`].
pub fn paren_close(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    let stroke = style.stroke_width;

    pen.move_to((m, 0.0));
    pen.quad_to((w - m - stroke, h / 2.0), (m, h));
    pen.line_to((m + stroke, h));
    pen.quad_to((w - m - stroke * 2.0, h / 2.0), (m + stroke, 0.0));
    pen.close();
}

/// Slash: one full-box diagonal of stroke thickness.
pub fn slash(pen: &mut ContourPen, gb: &GlyphBox, style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    diagonal(
        pen,
        Point::new(m, 0.0),
        Point::new(w - m, h),
        style.stroke_width,
    );
}

/// The generic mark: a centered horizontal bar at mid-height.
pub fn fallback(pen: &mut ContourPen, gb: &GlyphBox, _style: &DerivedParameters) {
    let (w, h, m) = (gb.width, gb.height, gb.margin);
    bar(pen, m, w - m, h * 0.4, h * 0.6);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleParameters;
    use crate::templates::TemplateFn;
    use paraglyph_graphics::types::{Contour, Outline};

    fn build(f: TemplateFn) -> Outline {
        let gb = GlyphBox {
            width: 200.0,
            height: 275.0,
            margin: 20.0,
        };
        let style = DerivedParameters::resolve(&StyleParameters::default());
        let mut pen = ContourPen::new();
        f(&mut pen, &gb, &style);
        pen.finish()
    }

    #[test]
    fn every_mark_closes_all_contours() {
        let templates: &[TemplateFn] = &[
            period,
            comma,
            colon,
            semicolon,
            exclamation,
            paren_open,
            paren_close,
            slash,
            fallback,
        ];
        for (i, f) in templates.iter().enumerate() {
            let outline = build(*f);
            assert!(!outline.is_empty(), "mark {i} produced nothing");
            assert!(
                outline.contours.iter().all(Contour::is_closed),
                "mark {i} left an open contour"
            );
        }
    }

    #[test]
    fn contour_counts() {
        assert_eq!(build(period).contours.len(), 1);
        assert_eq!(build(colon).contours.len(), 2);
        assert_eq!(build(semicolon).contours.len(), 2);
        assert_eq!(build(exclamation).contours.len(), 2);
        assert_eq!(build(slash).contours.len(), 1);
    }

    #[test]
    fn fallback_bar_sits_at_mid_height() {
        let outline = build(fallback);
        let ys: Vec<f64> = outline.contours[0]
            .on_curve_points()
            .map(|p| p.y)
            .collect();
        let min = ys.iter().copied().fold(f64::INFINITY, f64::min);
        let max = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert!((min - 110.0).abs() < 1e-9); // 275 × 0.4
        assert!((max - 165.0).abs() < 1e-9); // 275 × 0.6
    }
}
