//! Per-character outline templates and their dispatch.
//!
//! Every template is a fixed recipe laying out stroke primitives inside the
//! box `[margin, width − margin] × [0, height]` (ascenders overshoot the box
//! top). Templates read nothing but the box and the run's derived style, so
//! identical inputs always produce identical outlines.
//!
//! Dispatch is an explicit registry: [`specific`] looks a template up by
//! exact character identity; a miss falls through to the per-category
//! fallback of [`fallback`]. There is no "no shape" state — every character
//! in the repertoire yields a non-empty outline.

pub mod digits;
pub mod lowercase;
pub mod punctuation;
pub mod uppercase;

use paraglyph_graphics::types::Scalar;

use crate::pen::ContourPen;
use crate::style::DerivedParameters;

// ---------------------------------------------------------------------------
// Glyph box
// ---------------------------------------------------------------------------

/// The target drawing box of one glyph, in font design units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphBox {
    pub width: Scalar,
    pub height: Scalar,
    pub margin: Scalar,
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// A per-character outline recipe.
pub type TemplateFn = fn(&mut ContourPen, &GlyphBox, &DerivedParameters);

/// Character class used for fallback selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphCategory {
    Uppercase,
    Lowercase,
    Digit,
    Punctuation,
}

/// Classify a character. Anything that is not an ASCII letter or digit is
/// treated as punctuation.
#[must_use]
pub fn category(c: char) -> GlyphCategory {
    if c.is_ascii_uppercase() {
        GlyphCategory::Uppercase
    } else if c.is_ascii_lowercase() {
        GlyphCategory::Lowercase
    } else if c.is_ascii_digit() {
        GlyphCategory::Digit
    } else {
        GlyphCategory::Punctuation
    }
}

/// Look up the specific template for a character, by exact identity.
///
/// Lowercase letters without a dedicated template share their uppercase
/// recipe drawn in the x-height box.
#[must_use]
pub fn specific(c: char) -> Option<TemplateFn> {
    let f: TemplateFn = match c {
        'A' => uppercase::letter_a,
        'B' => uppercase::letter_b,
        'C' | 'c' => uppercase::letter_c,
        'D' => uppercase::letter_d,
        'E' => uppercase::letter_e,
        'F' | 'f' => uppercase::letter_f,
        'G' | 'g' => uppercase::letter_g,
        'H' | 'h' => uppercase::letter_h,
        'I' => uppercase::letter_i,
        'J' => uppercase::letter_j,
        'K' | 'k' => uppercase::letter_k,
        'L' => uppercase::letter_l,
        'M' | 'm' => uppercase::letter_m,
        'N' => uppercase::letter_n,
        'O' | 'o' => uppercase::letter_o,
        'P' | 'p' => uppercase::letter_p,
        'Q' | 'q' => uppercase::letter_q,
        'R' => uppercase::letter_r,
        'S' | 's' => uppercase::letter_s,
        'T' => uppercase::letter_t,
        'U' => uppercase::letter_u,
        'V' | 'v' => uppercase::letter_v,
        'W' | 'w' => uppercase::letter_w,
        'X' | 'x' => uppercase::letter_x,
        'Y' | 'y' => uppercase::letter_y,
        'Z' | 'z' => uppercase::letter_z,

        'a' => lowercase::letter_a,
        'b' => lowercase::letter_b,
        'd' => lowercase::letter_d,
        'e' => lowercase::letter_e,
        'i' => lowercase::letter_i,
        'j' => lowercase::letter_j,
        'l' => lowercase::letter_l,
        'n' => lowercase::letter_n,
        'r' => lowercase::letter_r,
        't' => lowercase::letter_t,
        'u' => lowercase::letter_u,

        '0' => digits::digit_0,
        '1' => digits::digit_1,
        '2' => digits::digit_2,
        '3' => digits::digit_3,
        '4' => digits::digit_4,
        '5' => digits::digit_5,
        '6' => digits::digit_6,
        '7' => digits::digit_7,
        '8' => digits::digit_8,
        '9' => digits::digit_9,

        '.' => punctuation::period,
        ',' => punctuation::comma,
        ':' => punctuation::colon,
        ';' => punctuation::semicolon,
        '!' | '?' => punctuation::exclamation,
        '(' => punctuation::paren_open,
        ')' => punctuation::paren_close,
        '/' => punctuation::slash,

        _ => return None,
    };
    Some(f)
}

/// The documented generic shape for a category with no specific template.
#[must_use]
pub fn fallback(cat: GlyphCategory) -> TemplateFn {
    match cat {
        GlyphCategory::Uppercase => uppercase::fallback,
        GlyphCategory::Lowercase => lowercase::fallback,
        GlyphCategory::Digit => digits::fallback,
        GlyphCategory::Punctuation => punctuation::fallback,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
