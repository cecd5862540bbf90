//! Design token model: categories and naming rules.
//!
//! Token tables are represented with an explicit, fixed category set
//! rather than open-ended string keys, so that a missing or misspelled
//! category is caught at validation time instead of silently producing
//! an incomplete theme.
//!
//! Token names follow the `<category>-<concept>[-<variant>]` convention:
//! lowercase letters, digits, and single hyphens, starting with a letter.
//!
//! # Examples
//!
//! ```
//! use design_core::token::{TokenCategory, validate_token_name};
//!
//! assert_eq!(TokenCategory::infer("color-primary"), Some(TokenCategory::Color));
//! assert!(validate_token_name("spacing-md").is_empty());
//! assert!(!validate_token_name("Spacing_MD").is_empty());
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9-]*$").expect("valid regex"));

/// Concrete color words that should give way to semantic names.
const CONCRETE_COLORS: [&str; 6] = ["red", "blue", "green", "yellow", "purple", "orange"];

/// The fixed set of design token categories.
///
/// Every token name starts with its category prefix. The required
/// categories must all be present for a token table to be considered
/// structurally complete.
///
/// # Examples
///
/// ```
/// use design_core::token::TokenCategory;
///
/// assert_eq!(TokenCategory::Color.prefix(), "color");
/// assert!(TokenCategory::Color.is_required());
/// assert!(!TokenCategory::Breakpoint.is_required());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenCategory {
    /// Color values (`color-*`), always `oklch(L C H)` expressions
    Color,
    /// Spacing scale (`spacing-*`), rem or px values
    Spacing,
    /// Font sizes, weights, and line heights (`font-*`)
    Font,
    /// Box shadows (`shadow-*`)
    Shadow,
    /// Corner radii (`radius-*`)
    Radius,
    /// Responsive breakpoints (`breakpoint-*`)
    Breakpoint,
    /// Animation durations (`duration-*`)
    Duration,
    /// Easing curves (`ease-*`)
    Ease,
}

impl TokenCategory {
    /// All categories, in documentation order.
    pub const ALL: [Self; 8] = [
        Self::Color,
        Self::Spacing,
        Self::Font,
        Self::Shadow,
        Self::Radius,
        Self::Breakpoint,
        Self::Duration,
        Self::Ease,
    ];

    /// Categories that a complete token table must contain.
    pub const REQUIRED: [Self; 5] = [
        Self::Color,
        Self::Spacing,
        Self::Font,
        Self::Shadow,
        Self::Radius,
    ];

    /// Returns the naming prefix for this category.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Spacing => "spacing",
            Self::Font => "font",
            Self::Shadow => "shadow",
            Self::Radius => "radius",
            Self::Breakpoint => "breakpoint",
            Self::Duration => "duration",
            Self::Ease => "ease",
        }
    }

    /// Returns `true` if a complete token table must contain this category.
    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(
            self,
            Self::Color | Self::Spacing | Self::Font | Self::Shadow | Self::Radius
        )
    }

    /// Infers the category from a token name's leading segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use design_core::token::TokenCategory;
    ///
    /// assert_eq!(TokenCategory::infer("radius-full"), Some(TokenCategory::Radius));
    /// assert_eq!(TokenCategory::infer("zindex-modal"), None);
    /// ```
    #[must_use]
    pub fn infer(token_name: &str) -> Option<Self> {
        let head = token_name.split('-').next()?;
        Self::ALL
            .into_iter()
            .find(|category| category.prefix() == head)
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Validates a token name against the naming convention.
///
/// Returns one message per violated rule; an empty vector means the name
/// is acceptable. Checked rules:
///
/// - lowercase letters, digits, and hyphens only, starting with a letter
/// - no consecutive hyphens
/// - hyphens rather than underscores
/// - `color-*` concepts use semantic names, not concrete color words
///
/// # Examples
///
/// ```
/// use design_core::token::validate_token_name;
///
/// assert!(validate_token_name("color-primary-hover").is_empty());
/// assert_eq!(validate_token_name("color--primary").len(), 1);
/// ```
#[must_use]
pub fn validate_token_name(token_name: &str) -> Vec<String> {
    let mut issues = Vec::new();

    if !NAME_REGEX.is_match(token_name) {
        issues.push(
            "token names must use lowercase letters, digits, and hyphens, starting with a letter"
                .to_string(),
        );
    }

    if token_name.contains("--") {
        issues.push("token names must not contain consecutive hyphens".to_string());
    }

    if token_name.contains('_') {
        issues.push("token names use hyphens, not underscores".to_string());
    }

    if token_name.starts_with("color-") {
        let parts: Vec<&str> = token_name.split('-').collect();
        if parts.len() >= 3 {
            let concept = parts[2];
            if CONCRETE_COLORS.contains(&concept) {
                issues.push(format!(
                    "prefer a semantic name (e.g. 'color-primary') over the concrete color name '{token_name}'"
                ));
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_round_trip() {
        for category in TokenCategory::ALL {
            assert_eq!(TokenCategory::infer(category.prefix()), Some(category));
        }
    }

    #[test]
    fn test_infer_from_full_names() {
        assert_eq!(
            TokenCategory::infer("color-primary-hover"),
            Some(TokenCategory::Color)
        );
        assert_eq!(
            TokenCategory::infer("duration-fast"),
            Some(TokenCategory::Duration)
        );
        assert_eq!(TokenCategory::infer("opacity-50"), None);
        assert_eq!(TokenCategory::infer(""), None);
    }

    #[test]
    fn test_required_categories() {
        assert_eq!(TokenCategory::REQUIRED.len(), 5);
        for category in TokenCategory::REQUIRED {
            assert!(category.is_required());
        }
        assert!(!TokenCategory::Duration.is_required());
        assert!(!TokenCategory::Ease.is_required());
    }

    #[test]
    fn test_valid_names_pass() {
        for name in ["color-primary", "spacing-2xl", "font-size-base", "ease-in-out"] {
            assert!(validate_token_name(name).is_empty(), "{name}");
        }
    }

    #[test]
    fn test_invalid_characters_flagged() {
        assert!(!validate_token_name("Color-Primary").is_empty());
        assert!(!validate_token_name("2xl-spacing").is_empty());
        assert!(!validate_token_name("color primary").is_empty());
    }

    #[test]
    fn test_double_hyphen_flagged() {
        let issues = validate_token_name("color--primary");
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("consecutive"));
    }

    #[test]
    fn test_underscore_flagged() {
        let issues = validate_token_name("color_primary");
        // Fails both the character rule and the underscore rule
        assert_eq!(issues.len(), 2);
    }

    #[test]
    fn test_concrete_color_name_flagged() {
        let issues = validate_token_name("color-brand-blue");
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("semantic"));

        // Two-segment color names have no concept part to check
        assert!(validate_token_name("color-primary").is_empty());
    }
}
