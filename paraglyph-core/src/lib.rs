//! Parametric glyph outline construction for the basic Latin repertoire.
//!
//! The entry point is [`builder::build_glyph`]: given a character, a target
//! box and the run's resolved style, it produces closed contours ready for a
//! font-assembly pipeline. Construction is a pure function of its inputs —
//! batches parallelize freely over [`builder::build_batch`].

pub mod builder;
pub mod pen;
pub mod primitives;
pub mod repertoire;
pub mod style;
pub mod templates;

pub use builder::{build_batch, build_glyph, BuiltGlyph, GlyphRequest};
pub use pen::ContourPen;
pub use style::{DerivedParameters, StyleParameters};

pub use paraglyph_graphics::types::{Contour, Outline, Scalar, Segment, Winding};
