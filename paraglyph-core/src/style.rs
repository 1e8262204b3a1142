//! Style axes and the factor tables that turn them into numbers.
//!
//! [`StyleParameters`] is the input contract consumed from the external
//! style loader; it is resolved once per generation run into
//! [`DerivedParameters`] and then shared read-only across every glyph build.
//!
//! Unrecognized option values are not errors: each categorical axis carries
//! an `Unrecognized` variant (`#[serde(other)]`) and each factor table maps
//! it to a documented default.

use serde::{Deserialize, Serialize};

use paraglyph_graphics::types::{Contrast, Scalar};

// ---------------------------------------------------------------------------
// Categorical axes
// ---------------------------------------------------------------------------

/// Finishing treatment at a stroke's open end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Terminals {
    #[default]
    Straight,
    Curved,
    Angled,
    #[serde(other)]
    Unrecognized,
}

/// Corner roundedness at non-load-bearing vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Corners {
    Sharp,
    #[default]
    Rounded,
    Soft,
    #[serde(other)]
    Unrecognized,
}

/// Angular opening of partially enclosed counters (C, G).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Aperture {
    Closed,
    #[default]
    SemiOpen,
    Open,
    #[serde(other)]
    Unrecognized,
}

/// Orientation of the design axis. Reserved for oblique variants; the
/// upright templates do not consume it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    Vertical,
    #[serde(other)]
    Unrecognized,
}

/// Direction along which bowl stroke thickness varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stress {
    #[default]
    None,
    Vertical,
    #[serde(other)]
    Unrecognized,
}

// ---------------------------------------------------------------------------
// StyleParameters
// ---------------------------------------------------------------------------

/// The typographic style axes of one generation run.
///
/// Loaded once, immutable for the run's lifetime, and shared by reference
/// across worker threads.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleParameters {
    pub stroke_width: Scalar,
    pub contrast: Contrast,
    pub terminals: Terminals,
    pub corners: Corners,
    pub aperture: Aperture,
    pub axis: Axis,
    pub stress: Stress,
}

impl Default for StyleParameters {
    fn default() -> Self {
        Self {
            stroke_width: 80.0,
            contrast: Contrast::default(),
            terminals: Terminals::default(),
            corners: Corners::default(),
            aperture: Aperture::default(),
            axis: Axis::default(),
            stress: Stress::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Factor tables
// ---------------------------------------------------------------------------

/// Corner radius as a fraction of the stroke width.
const fn corner_factor(corners: Corners) -> Scalar {
    match corners {
        Corners::Sharp => 0.0,
        Corners::Soft => 0.5,
        Corners::Rounded | Corners::Unrecognized => 0.3,
    }
}

/// Horizontal-stroke width as a fraction of the (vertical) stroke width.
///
/// Note: this table is distinct from the general contrast-by-angle table in
/// `paraglyph_graphics::math::apply_contrast` and holds different values for
/// the same level names.
const fn horizontal_stroke_factor(contrast: Contrast) -> Scalar {
    match contrast {
        Contrast::None => 1.0,
        Contrast::Low => 0.75,
        Contrast::Medium => 0.6,
        Contrast::High => 0.4,
        Contrast::Unrecognized => 0.7,
    }
}

/// Aperture opening angle as a fraction of π.
const fn aperture_factor(aperture: Aperture) -> Scalar {
    match aperture {
        Aperture::Closed => 0.1,
        Aperture::Open => 0.4,
        Aperture::SemiOpen | Aperture::Unrecognized => 0.25,
    }
}

// ---------------------------------------------------------------------------
// DerivedParameters
// ---------------------------------------------------------------------------

/// Numeric parameters resolved once from [`StyleParameters`], plus the
/// categorical axes the templates consume directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedParameters {
    /// The vertical stroke width, carried through unchanged.
    pub stroke_width: Scalar,
    /// `stroke_width × horizontal_stroke_factor(contrast)`.
    pub horizontal_stroke: Scalar,
    /// `stroke_width × corner_factor(corners)`.
    pub corner_radius: Scalar,
    /// Opening half-angle of C/G counters, in radians.
    pub aperture_angle: Scalar,
    pub terminals: Terminals,
    pub stress: Stress,
}

impl DerivedParameters {
    /// Resolve the factor tables. Called once per run; every glyph build
    /// reads the same value.
    #[must_use]
    pub fn resolve(params: &StyleParameters) -> Self {
        Self {
            stroke_width: params.stroke_width,
            horizontal_stroke: params.stroke_width * horizontal_stroke_factor(params.contrast),
            corner_radius: params.stroke_width * corner_factor(params.corners),
            aperture_angle: aperture_factor(params.aperture) * std::f64::consts::PI,
            terminals: params.terminals,
            stress: params.stress,
        }
    }
}

impl Default for DerivedParameters {
    fn default() -> Self {
        Self::resolve(&StyleParameters::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use paraglyph_graphics::types::EPSILON;

    #[test]
    fn corner_factor_table() {
        assert_eq!(corner_factor(Corners::Sharp), 0.0);
        assert_eq!(corner_factor(Corners::Rounded), 0.3);
        assert_eq!(corner_factor(Corners::Soft), 0.5);
        assert_eq!(corner_factor(Corners::Unrecognized), 0.3);
    }

    #[test]
    fn horizontal_stroke_factor_table() {
        assert_eq!(horizontal_stroke_factor(Contrast::None), 1.0);
        assert_eq!(horizontal_stroke_factor(Contrast::Low), 0.75);
        assert_eq!(horizontal_stroke_factor(Contrast::Medium), 0.6);
        assert_eq!(horizontal_stroke_factor(Contrast::High), 0.4);
        assert_eq!(horizontal_stroke_factor(Contrast::Unrecognized), 0.7);
    }

    #[test]
    fn aperture_factor_table() {
        assert_eq!(aperture_factor(Aperture::Closed), 0.1);
        assert_eq!(aperture_factor(Aperture::SemiOpen), 0.25);
        assert_eq!(aperture_factor(Aperture::Open), 0.4);
        assert_eq!(aperture_factor(Aperture::Unrecognized), 0.25);
    }

    #[test]
    fn derive_from_defaults() {
        let style = StyleParameters::default();
        let derived = DerivedParameters::resolve(&style);
        assert_eq!(derived.stroke_width, 80.0);
        // medium contrast → 0.6, rounded corners → 0.3
        assert!((derived.horizontal_stroke - 48.0).abs() < EPSILON);
        assert!((derived.corner_radius - 24.0).abs() < EPSILON);
        // semi-open → 0.25π
        assert!((derived.aperture_angle - 0.25 * std::f64::consts::PI).abs() < EPSILON);
    }

    #[test]
    fn unrecognized_values_use_documented_defaults() {
        let style = StyleParameters {
            contrast: Contrast::Unrecognized,
            corners: Corners::Unrecognized,
            aperture: Aperture::Unrecognized,
            ..StyleParameters::default()
        };
        let derived = DerivedParameters::resolve(&style);
        assert!((derived.horizontal_stroke - 56.0).abs() < EPSILON); // 80 × 0.7
        assert!((derived.corner_radius - 24.0).abs() < EPSILON); // 80 × 0.3
        assert!((derived.aperture_angle - 0.25 * std::f64::consts::PI).abs() < EPSILON);
    }

    #[test]
    fn style_parameters_from_json() {
        let json = r#"{
            "strokeWidth": 64,
            "contrast": "high",
            "terminals": "curved",
            "corners": "sharp",
            "aperture": "semi-open",
            "stress": "vertical"
        }"#;
        let style: StyleParameters = serde_json::from_str(json).unwrap();
        assert_eq!(style.stroke_width, 64.0);
        assert_eq!(style.contrast, Contrast::High);
        assert_eq!(style.terminals, Terminals::Curved);
        assert_eq!(style.corners, Corners::Sharp);
        assert_eq!(style.aperture, Aperture::SemiOpen);
        assert_eq!(style.axis, Axis::Vertical);
        assert_eq!(style.stress, Stress::Vertical);
    }

    #[test]
    fn unknown_option_strings_deserialize_to_unrecognized() {
        let json = r#"{"contrast": "extreme", "corners": "chamfered"}"#;
        let style: StyleParameters = serde_json::from_str(json).unwrap();
        assert_eq!(style.contrast, Contrast::Unrecognized);
        assert_eq!(style.corners, Corners::Unrecognized);
    }
}
