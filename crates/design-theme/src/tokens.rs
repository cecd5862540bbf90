//! Fixed token tables and color derivation recipes.
//!
//! Every token a generated theme can contain is enumerated here with its
//! documented name. Base (non-color) tokens carry fixed values shared by
//! both theme modes; semantic color tokens carry a per-mode recipe that
//! either passes a seed through, derives from a seed with a fixed delta,
//! or uses a fixed literal. Because the tables are closed enums, a theme
//! cannot silently miss or misspell a token.

use design_core::color::OklchColor;
use serde::{Deserialize, Serialize};

/// Theme mode selecting which recipe table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Default light palette
    Light,
    /// Dark palette derived from the same two seeds
    Dark,
}

/// Which of the two seed colors a recipe starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedRole {
    /// The `--primary` seed color
    Primary,
    /// The `--secondary` seed color
    Secondary,
}

/// An additive adjustment applied to a seed color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorDelta {
    /// Lightness delta
    pub lightness: f64,
    /// Chroma delta
    pub chroma: f64,
    /// Hue delta in degrees
    pub hue: f64,
}

impl ColorDelta {
    /// Creates a delta triple.
    #[must_use]
    pub const fn new(lightness: f64, chroma: f64, hue: f64) -> Self {
        Self {
            lightness,
            chroma,
            hue,
        }
    }

    /// Applies this delta to a color.
    #[must_use]
    pub fn apply(self, color: OklchColor) -> OklchColor {
        color.adjust(self.lightness, self.chroma, self.hue)
    }
}

/// How a semantic color token's value is produced for a theme mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorRecipe {
    /// The seed expression is used verbatim
    Seed(SeedRole),
    /// The seed is adjusted by a fixed delta
    Derived(SeedRole, ColorDelta),
    /// A fixed literal independent of the seeds
    Fixed(&'static str),
}

/// The semantic color tokens of a generated theme.
///
/// The entire palette is reproducible from the two seed colors plus the
/// fixed recipe tables below; light and dark themes come from the same
/// two inputs without separately specifying every token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SemanticColorToken {
    /// `color-primary`
    Primary,
    /// `color-primary-hover`
    PrimaryHover,
    /// `color-primary-active`
    PrimaryActive,
    /// `color-secondary`
    Secondary,
    /// `color-secondary-hover`
    SecondaryHover,
    /// `color-success`
    Success,
    /// `color-warning`
    Warning,
    /// `color-error`
    Error,
    /// `color-info`
    Info,
    /// `color-bg`
    Bg,
    /// `color-bg-subtle`
    BgSubtle,
    /// `color-bg-muted`
    BgMuted,
    /// `color-text`
    Text,
    /// `color-text-muted`
    TextMuted,
    /// `color-text-disabled`
    TextDisabled,
    /// `color-border`
    Border,
    /// `color-focus`
    Focus,
    /// `color-error-bg`
    ErrorBg,
}

impl SemanticColorToken {
    /// All semantic color tokens, in palette order.
    pub const ALL: [Self; 18] = [
        Self::Primary,
        Self::PrimaryHover,
        Self::PrimaryActive,
        Self::Secondary,
        Self::SecondaryHover,
        Self::Success,
        Self::Warning,
        Self::Error,
        Self::Info,
        Self::Bg,
        Self::BgSubtle,
        Self::BgMuted,
        Self::Text,
        Self::TextMuted,
        Self::TextDisabled,
        Self::Border,
        Self::Focus,
        Self::ErrorBg,
    ];

    /// Returns the token name (CSS custom property without `--`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "color-primary",
            Self::PrimaryHover => "color-primary-hover",
            Self::PrimaryActive => "color-primary-active",
            Self::Secondary => "color-secondary",
            Self::SecondaryHover => "color-secondary-hover",
            Self::Success => "color-success",
            Self::Warning => "color-warning",
            Self::Error => "color-error",
            Self::Info => "color-info",
            Self::Bg => "color-bg",
            Self::BgSubtle => "color-bg-subtle",
            Self::BgMuted => "color-bg-muted",
            Self::Text => "color-text",
            Self::TextMuted => "color-text-muted",
            Self::TextDisabled => "color-text-disabled",
            Self::Border => "color-border",
            Self::Focus => "color-focus",
            Self::ErrorBg => "color-error-bg",
        }
    }

    /// Returns the recipe producing this token's value in the given mode.
    ///
    /// Hover and active variants use fixed deltas per mode; the dark
    /// palette lifts the seed-derived colors and inverts the neutrals.
    #[must_use]
    pub const fn recipe(self, mode: ThemeMode) -> ColorRecipe {
        use ColorRecipe::{Derived, Fixed, Seed};
        use SeedRole::{Primary, Secondary};

        match mode {
            ThemeMode::Light => match self {
                Self::Primary => Seed(Primary),
                Self::PrimaryHover => Derived(Primary, ColorDelta::new(0.05, 0.02, 0.0)),
                Self::PrimaryActive => Derived(Primary, ColorDelta::new(-0.05, 0.0, 0.0)),
                Self::Secondary => Seed(Secondary),
                Self::SecondaryHover => Derived(Secondary, ColorDelta::new(0.05, 0.02, 0.0)),
                Self::Success => Fixed("oklch(0.75 0.15 145)"),
                Self::Warning => Fixed("oklch(0.80 0.12 85)"),
                Self::Error => Fixed("oklch(0.60 0.20 25)"),
                Self::Info => Fixed("oklch(0.65 0.15 250)"),
                Self::Bg => Fixed("oklch(0.98 0 0)"),
                Self::BgSubtle => Fixed("oklch(0.94 0 0)"),
                Self::BgMuted => Fixed("oklch(0.90 0 0)"),
                Self::Text => Fixed("oklch(0.20 0 0)"),
                Self::TextMuted => Fixed("oklch(0.55 0 0)"),
                Self::TextDisabled => Fixed("oklch(0.65 0 0)"),
                Self::Border => Fixed("oklch(0.85 0 0)"),
                Self::Focus => Fixed("oklch(0.70 0.18 250)"),
                Self::ErrorBg => Fixed("oklch(0.95 0.08 25)"),
            },
            ThemeMode::Dark => match self {
                Self::Primary => Derived(Primary, ColorDelta::new(0.05, 0.02, 0.0)),
                Self::PrimaryHover => Derived(Primary, ColorDelta::new(0.08, 0.03, 0.0)),
                Self::PrimaryActive => Derived(Primary, ColorDelta::new(0.02, 0.0, 0.0)),
                Self::Secondary => Derived(Secondary, ColorDelta::new(0.05, 0.02, 0.0)),
                Self::SecondaryHover => Derived(Secondary, ColorDelta::new(0.08, 0.03, 0.0)),
                Self::Success => Fixed("oklch(0.70 0.18 145)"),
                Self::Warning => Fixed("oklch(0.75 0.15 85)"),
                Self::Error => Fixed("oklch(0.65 0.22 25)"),
                Self::Info => Fixed("oklch(0.70 0.18 250)"),
                Self::Bg => Fixed("oklch(0.15 0 0)"),
                Self::BgSubtle => Fixed("oklch(0.20 0 0)"),
                Self::BgMuted => Fixed("oklch(0.25 0 0)"),
                Self::Text => Fixed("oklch(0.95 0 0)"),
                Self::TextMuted => Fixed("oklch(0.60 0 0)"),
                Self::TextDisabled => Fixed("oklch(0.45 0 0)"),
                Self::Border => Fixed("oklch(0.30 0 0)"),
                Self::Focus => Fixed("oklch(0.75 0.18 250)"),
                Self::ErrorBg => Fixed("oklch(0.25 0.05 25)"),
            },
        }
    }
}

/// Spacing scale tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpacingToken {
    /// `spacing-xs`
    Xs,
    /// `spacing-sm`
    Sm,
    /// `spacing-md`
    Md,
    /// `spacing-lg`
    Lg,
    /// `spacing-xl`
    Xl,
    /// `spacing-2xl`
    Xxl,
}

impl SpacingToken {
    /// All spacing tokens, smallest first.
    pub const ALL: [Self; 6] = [Self::Xs, Self::Sm, Self::Md, Self::Lg, Self::Xl, Self::Xxl];

    /// Returns the token name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Xs => "spacing-xs",
            Self::Sm => "spacing-sm",
            Self::Md => "spacing-md",
            Self::Lg => "spacing-lg",
            Self::Xl => "spacing-xl",
            Self::Xxl => "spacing-2xl",
        }
    }

    /// Returns the fixed value.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Xs => "0.25rem",
            Self::Sm => "0.5rem",
            Self::Md => "1rem",
            Self::Lg => "1.5rem",
            Self::Xl => "2rem",
            Self::Xxl => "3rem",
        }
    }
}

/// Font size scale tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontSizeToken {
    /// `font-size-xs`
    Xs,
    /// `font-size-sm`
    Sm,
    /// `font-size-base`
    Base,
    /// `font-size-lg`
    Lg,
    /// `font-size-xl`
    Xl,
    /// `font-size-2xl`
    Xxl,
    /// `font-size-3xl`
    Xxxl,
    /// `font-size-4xl`
    Xxxxl,
}

impl FontSizeToken {
    /// All font size tokens, smallest first.
    pub const ALL: [Self; 8] = [
        Self::Xs,
        Self::Sm,
        Self::Base,
        Self::Lg,
        Self::Xl,
        Self::Xxl,
        Self::Xxxl,
        Self::Xxxxl,
    ];

    /// Returns the token name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Xs => "font-size-xs",
            Self::Sm => "font-size-sm",
            Self::Base => "font-size-base",
            Self::Lg => "font-size-lg",
            Self::Xl => "font-size-xl",
            Self::Xxl => "font-size-2xl",
            Self::Xxxl => "font-size-3xl",
            Self::Xxxxl => "font-size-4xl",
        }
    }

    /// Returns the fixed value.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Xs => "0.75rem",
            Self::Sm => "0.875rem",
            Self::Base => "1rem",
            Self::Lg => "1.125rem",
            Self::Xl => "1.25rem",
            Self::Xxl => "1.5rem",
            Self::Xxxl => "1.875rem",
            Self::Xxxxl => "2.25rem",
        }
    }
}

/// Font weight tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeightToken {
    /// `font-weight-normal`
    Normal,
    /// `font-weight-medium`
    Medium,
    /// `font-weight-semibold`
    Semibold,
    /// `font-weight-bold`
    Bold,
}

impl FontWeightToken {
    /// All font weight tokens, lightest first.
    pub const ALL: [Self; 4] = [Self::Normal, Self::Medium, Self::Semibold, Self::Bold];

    /// Returns the token name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "font-weight-normal",
            Self::Medium => "font-weight-medium",
            Self::Semibold => "font-weight-semibold",
            Self::Bold => "font-weight-bold",
        }
    }

    /// Returns the fixed value.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Normal => "400",
            Self::Medium => "500",
            Self::Semibold => "600",
            Self::Bold => "700",
        }
    }
}

/// Line height tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineHeightToken {
    /// `line-height-tight`
    Tight,
    /// `line-height-normal`
    Normal,
    /// `line-height-relaxed`
    Relaxed,
}

impl LineHeightToken {
    /// All line height tokens, tightest first.
    pub const ALL: [Self; 3] = [Self::Tight, Self::Normal, Self::Relaxed];

    /// Returns the token name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tight => "line-height-tight",
            Self::Normal => "line-height-normal",
            Self::Relaxed => "line-height-relaxed",
        }
    }

    /// Returns the fixed value.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Tight => "1.25",
            Self::Normal => "1.5",
            Self::Relaxed => "1.75",
        }
    }
}

/// Corner radius tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RadiusToken {
    /// `radius-sm`
    Sm,
    /// `radius-md`
    Md,
    /// `radius-lg`
    Lg,
    /// `radius-xl`
    Xl,
    /// `radius-full`
    Full,
}

impl RadiusToken {
    /// All radius tokens, smallest first.
    pub const ALL: [Self; 5] = [Self::Sm, Self::Md, Self::Lg, Self::Xl, Self::Full];

    /// Returns the token name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sm => "radius-sm",
            Self::Md => "radius-md",
            Self::Lg => "radius-lg",
            Self::Xl => "radius-xl",
            Self::Full => "radius-full",
        }
    }

    /// Returns the fixed value.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Sm => "0.25rem",
            Self::Md => "0.5rem",
            Self::Lg => "0.75rem",
            Self::Xl => "1rem",
            Self::Full => "9999px",
        }
    }
}

/// Box shadow tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadowToken {
    /// `shadow-sm`
    Sm,
    /// `shadow-md`
    Md,
    /// `shadow-lg`
    Lg,
    /// `shadow-xl`
    Xl,
}

impl ShadowToken {
    /// All shadow tokens, subtlest first.
    pub const ALL: [Self; 4] = [Self::Sm, Self::Md, Self::Lg, Self::Xl];

    /// Returns the token name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sm => "shadow-sm",
            Self::Md => "shadow-md",
            Self::Lg => "shadow-lg",
            Self::Xl => "shadow-xl",
        }
    }

    /// Returns the fixed value.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Sm => "0 1px 2px 0 rgb(0 0 0 / 0.05)",
            Self::Md => "0 4px 6px -1px rgb(0 0 0 / 0.1)",
            Self::Lg => "0 10px 15px -3px rgb(0 0 0 / 0.1)",
            Self::Xl => "0 20px 25px -5px rgb(0 0 0 / 0.1)",
        }
    }
}

/// Animation duration and easing tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionToken {
    /// `duration-fast`
    DurationFast,
    /// `duration-normal`
    DurationNormal,
    /// `duration-slow`
    DurationSlow,
    /// `ease-in-out`
    EaseInOut,
    /// `ease-out`
    EaseOut,
}

impl MotionToken {
    /// All motion tokens.
    pub const ALL: [Self; 5] = [
        Self::DurationFast,
        Self::DurationNormal,
        Self::DurationSlow,
        Self::EaseInOut,
        Self::EaseOut,
    ];

    /// Returns the token name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DurationFast => "duration-fast",
            Self::DurationNormal => "duration-normal",
            Self::DurationSlow => "duration-slow",
            Self::EaseInOut => "ease-in-out",
            Self::EaseOut => "ease-out",
        }
    }

    /// Returns the fixed value.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::DurationFast => "150ms",
            Self::DurationNormal => "300ms",
            Self::DurationSlow => "500ms",
            Self::EaseInOut => "cubic-bezier(0.4, 0, 0.2, 1)",
            Self::EaseOut => "cubic-bezier(0, 0, 0.2, 1)",
        }
    }
}

/// Enumerates every base (non-color) token with its fixed value, in
/// documentation order.
#[must_use]
pub fn base_tokens() -> Vec<(&'static str, &'static str)> {
    let mut tokens = Vec::new();
    tokens.extend(SpacingToken::ALL.map(|t| (t.name(), t.value())));
    tokens.extend(FontSizeToken::ALL.map(|t| (t.name(), t.value())));
    tokens.extend(FontWeightToken::ALL.map(|t| (t.name(), t.value())));
    tokens.extend(LineHeightToken::ALL.map(|t| (t.name(), t.value())));
    tokens.extend(RadiusToken::ALL.map(|t| (t.name(), t.value())));
    tokens.extend(ShadowToken::ALL.map(|t| (t.name(), t.value())));
    tokens.extend(MotionToken::ALL.map(|t| (t.name(), t.value())));
    tokens
}
