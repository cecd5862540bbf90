//! OKLCH color kernel: parsing, adjustment, and contrast evaluation.
//!
//! This module implements the numeric core shared by the theme generator
//! and the accessibility checker. All operations are synchronous pure
//! functions over value types with no shared state, so they may be called
//! concurrently without coordination.
//!
//! Colors travel through the tooling as textual `oklch(L C H)` expressions.
//! Parsing never fails with an error: an expression that does not match the
//! pattern yields `None`, and callers either skip the operation or pass the
//! original text through unchanged. Domain validation is a separate,
//! explicit step; the parser preserves whatever numbers it extracted.
//!
//! # Examples
//!
//! ```
//! use design_core::color::OklchColor;
//!
//! let base = OklchColor::parse("oklch(0.7 0.15 250)").unwrap();
//! let hover = base.adjust(0.05, 0.02, 0.0);
//! assert_eq!(hover.to_string(), "oklch(0.75 0.17 250)");
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Upper bound of the chroma domain.
pub const MAX_CHROMA: f64 = 0.4;

/// WCAG AA contrast threshold for normal text.
pub const AA_NORMAL: f64 = 4.5;
/// WCAG AA contrast threshold for large text.
pub const AA_LARGE: f64 = 3.0;
/// WCAG AAA contrast threshold for normal text.
pub const AAA_NORMAL: f64 = 7.0;
/// WCAG AAA contrast threshold for large text.
pub const AAA_LARGE: f64 = 4.5;

static OKLCH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^oklch\s*\(\s*([0-9]+(?:\.[0-9]+)?)\s+([0-9]+(?:\.[0-9]+)?)\s+([0-9]+(?:\.[0-9]+)?)\s*\)",
    )
    .expect("valid regex")
});

/// An OKLCH color: lightness, chroma, and hue channels.
///
/// Immutable value type. The stated domains are lightness `[0, 1]`,
/// chroma `[0, 0.4]`, and hue `[0, 360)`; [`OklchColor::new`] and
/// [`OklchColor::adjust`] enforce them, while [`OklchColor::parse`]
/// deliberately does not (see [`OklchColor::is_in_domain`]).
///
/// # Examples
///
/// ```
/// use design_core::color::OklchColor;
///
/// let color = OklchColor::new(0.7, 0.15, 250.0);
/// assert!(color.is_in_domain());
/// assert_eq!(color.to_string(), "oklch(0.7 0.15 250)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OklchColor {
    /// Lightness channel, domain `[0, 1]`
    pub lightness: f64,
    /// Chroma channel, domain `[0, 0.4]`
    pub chroma: f64,
    /// Hue channel in degrees, domain `[0, 360)`
    pub hue: f64,
}

impl OklchColor {
    /// Creates a color, clamping lightness and chroma and wrapping hue
    /// into `[0, 360)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use design_core::color::OklchColor;
    ///
    /// let color = OklchColor::new(1.5, -0.1, 370.0);
    /// assert_eq!(color, OklchColor::new(1.0, 0.0, 10.0));
    /// ```
    #[must_use]
    pub fn new(lightness: f64, chroma: f64, hue: f64) -> Self {
        Self {
            lightness: lightness.clamp(0.0, 1.0),
            chroma: chroma.clamp(0.0, MAX_CHROMA),
            hue: hue.rem_euclid(360.0),
        }
    }

    /// Parses an `oklch(L C H)` expression.
    ///
    /// The match is whitespace-tolerant and case-insensitive; each channel
    /// is a non-negative decimal number. Returns `None` when the pattern
    /// does not match, and callers must treat that as "uncomputable"
    /// rather than substituting a default color.
    ///
    /// The parsed numbers are preserved as written, even when they fall
    /// outside the channel domains. Use [`Self::is_in_domain`] (or
    /// [`is_valid_oklch`]) for the separate acceptance check.
    ///
    /// # Examples
    ///
    /// ```
    /// use design_core::color::OklchColor;
    ///
    /// let color = OklchColor::parse("oklch(0.7 0.15 250)").unwrap();
    /// assert_eq!(color.lightness, 0.7);
    ///
    /// // Out-of-domain numbers survive parsing untouched
    /// let wild = OklchColor::parse("oklch(1.5 0.15 250)").unwrap();
    /// assert_eq!(wild.lightness, 1.5);
    /// assert!(!wild.is_in_domain());
    ///
    /// assert!(OklchColor::parse("#3366ff").is_none());
    /// ```
    #[must_use]
    pub fn parse(expression: &str) -> Option<Self> {
        let captures = OKLCH_REGEX.captures(expression.trim())?;

        // The pattern only admits digit runs, so the parses cannot fail.
        let lightness: f64 = captures[1].parse().ok()?;
        let chroma: f64 = captures[2].parse().ok()?;
        let hue: f64 = captures[3].parse().ok()?;

        Some(Self {
            lightness,
            chroma,
            hue,
        })
    }

    /// Checks that all three channels lie within their stated domains.
    ///
    /// Hue is checked against the half-open interval `[0, 360)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use design_core::color::OklchColor;
    ///
    /// assert!(OklchColor::new(0.7, 0.15, 250.0).is_in_domain());
    /// assert!(!OklchColor { lightness: 1.5, chroma: 0.15, hue: 250.0 }.is_in_domain());
    /// ```
    #[must_use]
    pub fn is_in_domain(&self) -> bool {
        (0.0..=1.0).contains(&self.lightness)
            && (0.0..=MAX_CHROMA).contains(&self.chroma)
            && (0.0..360.0).contains(&self.hue)
    }

    /// Derives a new color by applying additive channel deltas.
    ///
    /// Lightness and chroma are clamped to their domains; hue wraps
    /// modulo 360 and is always non-negative regardless of the sign of
    /// the input or the delta. Pure: the receiver is never mutated.
    ///
    /// Each channel is rounded to six decimal places so that additive
    /// deltas over decimal token values yield the decimal result rather
    /// than its nearest binary neighbor (`0.15 + 0.02` is `0.17`, not
    /// `0.16999999999999998`).
    ///
    /// # Examples
    ///
    /// ```
    /// use design_core::color::OklchColor;
    ///
    /// let base = OklchColor::new(0.7, 0.15, 350.0);
    /// let shifted = base.adjust(0.05, 0.02, 20.0);
    /// assert_eq!(shifted.lightness, 0.75);
    /// assert_eq!(shifted.hue, 10.0);
    /// ```
    #[must_use]
    pub fn adjust(&self, delta_lightness: f64, delta_chroma: f64, delta_hue: f64) -> Self {
        let raw = Self::new(
            self.lightness + delta_lightness,
            self.chroma + delta_chroma,
            self.hue + delta_hue,
        );

        let hue = round_channel(raw.hue);
        Self {
            lightness: round_channel(raw.lightness),
            chroma: round_channel(raw.chroma),
            // Rounding can carry a hue just below 360 up to the excluded
            // boundary; fold it back to zero.
            hue: if hue >= 360.0 { 0.0 } else { hue },
        }
    }
}

/// Rounds to six decimal places.
fn round_channel(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

impl fmt::Display for OklchColor {
    /// Serializes back to the `oklch(L C H)` textual form.
    ///
    /// Values are reproduced as computed; `f64` display formatting never
    /// introduces scientific notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oklch({} {} {})", self.lightness, self.chroma, self.hue)
    }
}

/// Validates that an expression parses and all channels are in domain.
///
/// This is the token-acceptance check: distinct from parsing, which
/// preserves out-of-domain numbers.
///
/// # Examples
///
/// ```
/// use design_core::color::is_valid_oklch;
///
/// assert!(is_valid_oklch("oklch(0.7 0.15 250)"));
/// assert!(!is_valid_oklch("oklch(1.5 0.15 250)"));
/// assert!(!is_valid_oklch("rebeccapurple"));
/// ```
#[must_use]
pub fn is_valid_oklch(expression: &str) -> bool {
    OklchColor::parse(expression).is_some_and(|color| color.is_in_domain())
}

/// Computes the relative contrast ratio between two colors.
///
/// Uses `(lighter + 0.05) / (darker + 0.05)` over the OKLCH lightness
/// channel directly. This is a simplified proxy for perceptual contrast:
/// it substitutes OKLCH lightness in place of the gamma-corrected relative
/// luminance the WCAG formula specifies, so the result is an approximation
/// and not a colorimetrically exact contrast ratio.
///
/// Symmetric in its arguments; identical colors yield exactly `1.0`.
///
/// # Examples
///
/// ```
/// use design_core::color::{contrast_ratio, OklchColor};
///
/// let fg = OklchColor::new(0.95, 0.0, 0.0);
/// let bg = OklchColor::new(0.15, 0.0, 0.0);
/// assert_eq!(contrast_ratio(fg, bg), 5.0);
/// ```
#[must_use]
pub fn contrast_ratio(foreground: OklchColor, background: OklchColor) -> f64 {
    let lighter = foreground.lightness.max(background.lightness);
    let darker = foreground.lightness.min(background.lightness);
    (lighter + 0.05) / (darker + 0.05)
}

/// Computes the contrast ratio between two textual color expressions.
///
/// If either expression fails to parse, the result is exactly `1.0`, the
/// minimum possible ratio, so downstream threshold checks fail closed
/// ("insufficient contrast") instead of erroring or silently passing.
///
/// # Examples
///
/// ```
/// use design_core::color::contrast_ratio_str;
///
/// assert_eq!(contrast_ratio_str("oklch(0.95 0 0)", "oklch(0.15 0 0)"), 5.0);
/// assert_eq!(contrast_ratio_str("not-a-color", "oklch(0.15 0 0)"), 1.0);
/// ```
#[must_use]
pub fn contrast_ratio_str(foreground: &str, background: &str) -> f64 {
    match (OklchColor::parse(foreground), OklchColor::parse(background)) {
        (Some(fg), Some(bg)) => contrast_ratio(fg, bg),
        _ => 1.0,
    }
}

/// Text size class for WCAG threshold selection.
///
/// Large text (18pt+, or 14pt bold) is granted lower thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSize {
    /// Body text; AA requires 4.5:1, AAA requires 7.0:1
    #[default]
    Normal,
    /// Large text; AA requires 3.0:1, AAA requires 4.5:1
    Large,
}

impl TextSize {
    /// Returns the AA threshold for this text size.
    #[must_use]
    pub const fn aa_threshold(self) -> f64 {
        match self {
            Self::Normal => AA_NORMAL,
            Self::Large => AA_LARGE,
        }
    }

    /// Returns the AAA threshold for this text size.
    #[must_use]
    pub const fn aaa_threshold(self) -> f64 {
        match self {
            Self::Normal => AAA_NORMAL,
            Self::Large => AAA_LARGE,
        }
    }
}

/// Result of classifying a contrast ratio against WCAG thresholds.
///
/// A derived value with no identity or lifecycle beyond the evaluation
/// call that produces it; it is never cached or mutated.
///
/// # Examples
///
/// ```
/// use design_core::color::{ContrastRating, TextSize};
///
/// let rating = ContrastRating::evaluate(5.0, TextSize::Normal);
/// assert!(rating.passes_aa);
/// assert!(!rating.passes_aaa);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastRating {
    /// The computed contrast ratio, always >= 1.0
    pub ratio: f64,
    /// Whether the ratio meets the AA threshold for the text size
    pub passes_aa: bool,
    /// Whether the ratio meets the AAA threshold for the text size
    pub passes_aaa: bool,
}

impl ContrastRating {
    /// Classifies a ratio against the AA and AAA thresholds.
    #[must_use]
    pub fn evaluate(ratio: f64, size: TextSize) -> Self {
        Self {
            ratio,
            passes_aa: ratio >= size.aa_threshold(),
            passes_aaa: ratio >= size.aaa_threshold(),
        }
    }

    /// Parses both expressions and classifies their contrast.
    ///
    /// Unparseable input degrades to a ratio of `1.0`, which fails every
    /// threshold.
    ///
    /// # Examples
    ///
    /// ```
    /// use design_core::color::{ContrastRating, TextSize};
    ///
    /// let rating = ContrastRating::of("oklch(0.95 0 0)", "oklch(0.15 0 0)", TextSize::Normal);
    /// assert_eq!(rating.ratio, 5.0);
    /// assert!(rating.passes_aa);
    /// ```
    #[must_use]
    pub fn of(foreground: &str, background: &str, size: TextSize) -> Self {
        Self::evaluate(contrast_ratio_str(foreground, background), size)
    }
}

/// Checks whether two textual colors meet WCAG AA.
///
/// # Examples
///
/// ```
/// use design_core::color::meets_wcag_aa;
///
/// assert!(meets_wcag_aa("oklch(0.95 0 0)", "oklch(0.15 0 0)", false));
/// assert!(!meets_wcag_aa("oklch(0.5 0 0)", "oklch(0.5 0 0)", false));
/// ```
#[must_use]
pub fn meets_wcag_aa(foreground: &str, background: &str, large_text: bool) -> bool {
    let size = if large_text {
        TextSize::Large
    } else {
        TextSize::Normal
    };
    contrast_ratio_str(foreground, background) >= size.aa_threshold()
}

/// Checks whether two textual colors meet WCAG AAA.
#[must_use]
pub fn meets_wcag_aaa(foreground: &str, background: &str, large_text: bool) -> bool {
    let size = if large_text {
        TextSize::Large
    } else {
        TextSize::Normal
    };
    contrast_ratio_str(foreground, background) >= size.aaa_threshold()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let color = OklchColor::parse("oklch(0.7 0.15 250)").unwrap();
        assert_eq!(color.lightness, 0.7);
        assert_eq!(color.chroma, 0.15);
        assert_eq!(color.hue, 250.0);
    }

    #[test]
    fn test_parse_whitespace_and_case_tolerant() {
        assert!(OklchColor::parse("  OKLCH( 0.7   0.15   250 )  ").is_some());
        assert!(OklchColor::parse("oklch(0.7 0.15 250) /* trailing */").is_some());
    }

    #[test]
    fn test_parse_rejects_other_syntaxes() {
        assert!(OklchColor::parse("#3366ff").is_none());
        assert!(OklchColor::parse("rgb(0, 0, 0)").is_none());
        assert!(OklchColor::parse("oklch(0.7 0.15)").is_none());
        assert!(OklchColor::parse("oklch(a b c)").is_none());
        assert!(OklchColor::parse("").is_none());
    }

    #[test]
    fn test_parse_preserves_out_of_domain_values() {
        let color = OklchColor::parse("oklch(1.5 0.15 250)").unwrap();
        assert_eq!(color.lightness, 1.5);
        assert!(!color.is_in_domain());
    }

    #[test]
    fn test_round_trip_through_text() {
        for color in [
            OklchColor::new(0.7, 0.15, 250.0),
            OklchColor::new(0.0, 0.0, 0.0),
            OklchColor::new(1.0, 0.4, 359.5),
            OklchColor::new(0.125, 0.05, 42.0),
        ] {
            let parsed = OklchColor::parse(&color.to_string()).unwrap();
            assert_eq!(parsed, color);
        }
    }

    #[test]
    fn test_is_valid_oklch() {
        assert!(is_valid_oklch("oklch(0.7 0.15 250)"));
        assert!(is_valid_oklch("oklch(0 0 0)"));
        assert!(!is_valid_oklch("oklch(1.5 0.15 250)"));
        assert!(!is_valid_oklch("oklch(0.7 0.5 250)"));
        assert!(!is_valid_oklch("oklch(0.7 0.15 360)"));
        assert!(!is_valid_oklch("nope"));
    }

    #[test]
    fn test_adjust_concrete_scenario() {
        let base = OklchColor::parse("oklch(0.7 0.15 250)").unwrap();
        let adjusted = base.adjust(0.05, 0.02, 0.0);
        assert_eq!(adjusted.to_string(), "oklch(0.75 0.17 250)");
    }

    #[test]
    fn test_adjust_clamps_extreme_deltas() {
        let base = OklchColor::new(0.7, 0.15, 250.0);

        let blown_out = base.adjust(10.0, 10.0, 0.0);
        assert_eq!(blown_out.lightness, 1.0);
        assert_eq!(blown_out.chroma, MAX_CHROMA);

        let crushed = base.adjust(-10.0, -10.0, 0.0);
        assert_eq!(crushed.lightness, 0.0);
        assert_eq!(crushed.chroma, 0.0);
    }

    #[test]
    fn test_adjust_hue_wraps_non_negative() {
        let high = OklchColor::new(0.5, 0.1, 350.0).adjust(0.0, 0.0, 20.0);
        assert_eq!(high.hue, 10.0);

        let low = OklchColor::new(0.5, 0.1, 10.0).adjust(0.0, 0.0, -20.0);
        assert_eq!(low.hue, 350.0);
    }

    #[test]
    fn test_adjust_is_pure() {
        let base = OklchColor::new(0.7, 0.15, 250.0);
        let _ = base.adjust(0.1, 0.1, 90.0);
        assert_eq!(base, OklchColor::new(0.7, 0.15, 250.0));
    }

    #[test]
    fn test_adjusted_color_always_in_domain() {
        let deltas = [-720.5, -10.0, -0.3, 0.0, 0.3, 10.0, 720.5];
        let base = OklchColor::new(0.5, 0.2, 180.0);
        for dl in deltas {
            for dc in deltas {
                for dh in deltas {
                    assert!(base.adjust(dl, dc, dh).is_in_domain());
                }
            }
        }
    }

    #[test]
    fn test_contrast_identical_colors_is_one() {
        let color = OklchColor::new(0.5, 0.0, 0.0);
        assert_eq!(contrast_ratio(color, color), 1.0);
    }

    #[test]
    fn test_contrast_is_symmetric() {
        let a = OklchColor::new(0.9, 0.1, 40.0);
        let b = OklchColor::new(0.2, 0.05, 300.0);
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
    }

    #[test]
    fn test_contrast_concrete_scenario() {
        // (0.95 + 0.05) / (0.15 + 0.05) = 5.0
        let ratio = contrast_ratio_str("oklch(0.95 0 0)", "oklch(0.15 0 0)");
        assert_eq!(ratio, 5.0);
        assert!(meets_wcag_aa("oklch(0.95 0 0)", "oklch(0.15 0 0)", false));
        assert!(!meets_wcag_aaa("oklch(0.95 0 0)", "oklch(0.15 0 0)", false));
    }

    #[test]
    fn test_contrast_unparseable_fails_closed() {
        assert_eq!(contrast_ratio_str("garbage", "oklch(0.15 0 0)"), 1.0);
        assert_eq!(contrast_ratio_str("oklch(0.95 0 0)", ""), 1.0);
        assert_eq!(contrast_ratio_str("", ""), 1.0);
        assert!(!meets_wcag_aa("garbage", "oklch(0.15 0 0)", true));
    }

    #[test]
    fn test_identical_midtone_fails_aa() {
        assert!(!meets_wcag_aa("oklch(0.5 0 0)", "oklch(0.5 0 0)", false));
    }

    #[test]
    fn test_large_text_thresholds() {
        // Ratio = (0.75 + 0.05) / (0.2 + 0.05) = 3.2
        let fg = "oklch(0.75 0 0)";
        let bg = "oklch(0.2 0 0)";
        assert!(meets_wcag_aa(fg, bg, true));
        assert!(!meets_wcag_aa(fg, bg, false));
        assert!(!meets_wcag_aaa(fg, bg, true));
    }

    #[test]
    fn test_contrast_rating_evaluate() {
        let rating = ContrastRating::evaluate(5.0, TextSize::Normal);
        assert!(rating.passes_aa);
        assert!(!rating.passes_aaa);

        let rating = ContrastRating::evaluate(5.0, TextSize::Large);
        assert!(rating.passes_aa);
        assert!(rating.passes_aaa);

        let rating = ContrastRating::of("bad", "worse", TextSize::Normal);
        assert_eq!(rating.ratio, 1.0);
        assert!(!rating.passes_aa);
    }
}
