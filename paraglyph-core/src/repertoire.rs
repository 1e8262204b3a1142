//! The character repertoire this engine covers.

/// Punctuation marks included in the basic repertoire, in glyph order.
pub const PUNCTUATION: &str = ".,;:!?'\"()-[]{}/@#$%&*+=<>";

/// The basic Latin repertoire: A–Z, a–z, 0–9 and common punctuation, in
/// glyph order.
#[must_use]
pub fn basic_latin() -> Vec<char> {
    ('A'..='Z')
        .chain('a'..='z')
        .chain('0'..='9')
        .chain(PUNCTUATION.chars())
        .collect()
}
