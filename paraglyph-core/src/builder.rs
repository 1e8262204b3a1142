//! Glyph construction entry points.
//!
//! [`build_glyph`] turns one [`GlyphRequest`] into a [`BuiltGlyph`]. The
//! result depends only on the request and the resolved style, so
//! [`build_batch`] fans a repertoire out across worker threads with no
//! locking — the style is shared by reference.

use rayon::prelude::*;

use paraglyph_graphics::types::{Outline, Scalar};

use crate::pen::ContourPen;
use crate::style::DerivedParameters;
use crate::templates::{self, GlyphBox};

/// Default margin as a fraction of the requested width.
const MARGIN_FRACTION: Scalar = 0.1;

// ---------------------------------------------------------------------------
// GlyphRequest
// ---------------------------------------------------------------------------

/// One character to build, with its target box in font design units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphRequest {
    pub character: char,
    pub width: Scalar,
    pub height: Scalar,
    /// Left/right margin inside the box. `None` uses 10% of the width.
    pub margin: Option<Scalar>,
}

impl GlyphRequest {
    #[must_use]
    pub const fn new(character: char, width: Scalar, height: Scalar) -> Self {
        Self {
            character,
            width,
            height,
            margin: None,
        }
    }

    #[must_use]
    pub const fn with_margin(mut self, margin: Scalar) -> Self {
        self.margin = Some(margin);
        self
    }

    fn glyph_box(&self) -> GlyphBox {
        GlyphBox {
            width: self.width,
            height: self.height,
            margin: self.margin.unwrap_or(self.width * MARGIN_FRACTION),
        }
    }
}

// ---------------------------------------------------------------------------
// BuiltGlyph
// ---------------------------------------------------------------------------

/// The outline of one character plus the spacing datum the assembler needs.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltGlyph {
    pub character: char,
    pub outline: Outline,
    /// The margin used, reported as the left-side bearing.
    pub left_side_bearing: Scalar,
}

// ---------------------------------------------------------------------------
// Building
// ---------------------------------------------------------------------------

/// Build the outline for one character.
///
/// Dispatch tries the specific template for the exact character, then the
/// category fallback. A template that produces an empty or non-finite
/// outline (degenerate box, pathological parameters) is discarded and the
/// category fallback is built in its place — a fault stays confined to its
/// character and never aborts a batch.
#[must_use]
pub fn build_glyph(request: &GlyphRequest, style: &DerivedParameters) -> BuiltGlyph {
    let gb = request.glyph_box();

    let outline = match templates::specific(request.character) {
        Some(template) => {
            let outline = run_template(template, &gb, style);
            if outline.is_empty() || !outline.is_finite() {
                run_fallback(request.character, &gb, style)
            } else {
                outline
            }
        }
        None => run_fallback(request.character, &gb, style),
    };

    BuiltGlyph {
        character: request.character,
        outline,
        left_side_bearing: gb.margin,
    }
}

/// Build a batch of requests in parallel, preserving order.
#[must_use]
pub fn build_batch(requests: &[GlyphRequest], style: &DerivedParameters) -> Vec<BuiltGlyph> {
    requests
        .par_iter()
        .map(|request| build_glyph(request, style))
        .collect()
}

fn run_template(
    template: templates::TemplateFn,
    gb: &GlyphBox,
    style: &DerivedParameters,
) -> Outline {
    let mut pen = ContourPen::new();
    template(&mut pen, gb, style);
    pen.finish()
}

fn run_fallback(character: char, gb: &GlyphBox, style: &DerivedParameters) -> Outline {
    let template = templates::fallback(templates::category(character));
    run_template(template, gb, style)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
