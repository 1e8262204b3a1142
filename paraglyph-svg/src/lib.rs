//! SVG proof sheets for built glyphs.
//!
//! Converts outlines into an SVG [`Document`] for visual inspection.
//!
//! Key design points:
//! - Outline coordinates have Y pointing **up**; SVG has Y pointing
//!   **down**. All Y coordinates are negated at render time so no global
//!   transform is needed.
//! - Paths are filled with `fill-rule="nonzero"` — contour winding is
//!   authoritative for holes.
//! - Path data is built as raw `d` strings to preserve `f64` precision.
//!
//! Everything stays in memory; writing files is the caller's business.

use svg::node::element::{Group, Path as SvgPath};
use svg::Document;

use paraglyph_core::builder::BuiltGlyph;
use paraglyph_graphics::types::{Outline, Scalar, Segment};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Options controlling proof-sheet output.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Extra margin around the content, in design units. Default: 50.
    pub margin: Scalar,
    /// Number of decimal places for coordinates. Default: 2.
    pub precision: usize,
    /// Nominal line height used to place glyphs on the sheet. Default: 1000.
    pub line_height: Scalar,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            margin: 50.0,
            precision: 2,
            line_height: 1000.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render a single outline to an SVG [`Document`].
#[must_use]
pub fn render_glyph(outline: &Outline, width: Scalar, opts: &RenderOptions) -> Document {
    let path = outline_path(outline, 0.0, opts.precision);
    let group = Group::new().add(path);
    build_document(width, opts, group)
}

/// Render a row of built glyphs side by side, advancing each by its
/// requested width.
#[must_use]
pub fn render_sheet(glyphs: &[(BuiltGlyph, Scalar)], opts: &RenderOptions) -> Document {
    let mut group = Group::new();
    let mut advance = 0.0;
    for (glyph, width) in glyphs {
        group = group.add(outline_path(&glyph.outline, advance, opts.precision));
        advance += width;
    }
    build_document(advance, opts, group)
}

/// Render a single outline to an SVG string.
#[must_use]
pub fn render_to_string(outline: &Outline, width: Scalar, opts: &RenderOptions) -> String {
    render_glyph(outline, width, opts).to_string()
}

// ---------------------------------------------------------------------------
// Path conversion
// ---------------------------------------------------------------------------

fn outline_path(outline: &Outline, x_offset: Scalar, precision: usize) -> SvgPath {
    SvgPath::new()
        .set("d", outline_to_d(outline, x_offset, precision))
        .set("fill", "black")
        .set("fill-rule", "nonzero")
        .set("stroke", "none")
}

/// Convert an outline to an SVG path data string.
///
/// Each contour becomes one `M … Z` run; Y coordinates are negated to
/// convert from Y-up to SVG's Y-down.
fn outline_to_d(outline: &Outline, x_offset: Scalar, precision: usize) -> String {
    let mut d = String::new();
    for contour in &outline.contours {
        d.push('M');
        write_point(&mut d, contour.start.x + x_offset, -contour.start.y, precision);
        for segment in &contour.segments {
            match *segment {
                Segment::LineTo(p) => {
                    d.push('L');
                    write_point(&mut d, p.x + x_offset, -p.y, precision);
                }
                Segment::QuadTo(c, p) => {
                    d.push('Q');
                    write_point(&mut d, c.x + x_offset, -c.y, precision);
                    d.push(' ');
                    write_point(&mut d, p.x + x_offset, -p.y, precision);
                }
                Segment::CubicTo(c1, c2, p) => {
                    d.push('C');
                    write_point(&mut d, c1.x + x_offset, -c1.y, precision);
                    d.push(' ');
                    write_point(&mut d, c2.x + x_offset, -c2.y, precision);
                    d.push(' ');
                    write_point(&mut d, p.x + x_offset, -p.y, precision);
                }
            }
        }
        d.push('Z');
    }
    d
}

/// Write "x,y" with the given precision, normalizing negative zero.
fn write_point(d: &mut String, x: Scalar, y: Scalar, precision: usize) {
    use std::fmt::Write;
    let x = if x == 0.0 { 0.0 } else { x };
    let y = if y == 0.0 { 0.0 } else { y };
    let _ = write!(d, "{x:.precision$},{y:.precision$}");
}

// ---------------------------------------------------------------------------
// Document assembly
// ---------------------------------------------------------------------------

fn build_document(content_width: Scalar, opts: &RenderOptions, content: Group) -> Document {
    let m = opts.margin;
    // Glyph coordinates are Y-up with the baseline at 0; negated Y content
    // spans roughly [-line_height, 0] plus descender room below.
    let vb_x = -m;
    let vb_y = -opts.line_height - m;
    let vb_w = 2.0f64.mul_add(m, content_width.max(1.0));
    let vb_h = 2.0f64.mul_add(m, opts.line_height * 1.5);

    Document::new()
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set("viewBox", format!("{vb_x} {vb_y} {vb_w} {vb_h}"))
        .add(content)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
