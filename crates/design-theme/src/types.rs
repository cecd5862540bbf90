//! Configuration and output types for theme generation.

use design_core::color::is_valid_oklch;
use design_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Theme generation configuration.
///
/// Assembled from CLI flags or deserialized from a JSON config file.
///
/// # Examples
///
/// ```
/// use design_theme::ThemeConfig;
///
/// let config = ThemeConfig::new("oklch(0.7 0.15 250)", "oklch(0.65 0.12 180)");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Primary seed color as an `oklch(L C H)` expression
    pub primary_color: String,
    /// Secondary seed color as an `oklch(L C H)` expression
    pub secondary_color: String,
    /// Theme name used in output headers and file names
    #[serde(default = "default_theme_name")]
    pub name: String,
    /// Whether to generate the dark palette alongside the light one
    #[serde(default = "default_include_dark")]
    pub include_dark: bool,
}

fn default_theme_name() -> String {
    "default".to_string()
}

const fn default_include_dark() -> bool {
    true
}

impl ThemeConfig {
    /// Creates a config with the default name and dark palette enabled.
    #[must_use]
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary_color: primary.into(),
            secondary_color: secondary.into(),
            name: default_theme_name(),
            include_dark: default_include_dark(),
        }
    }

    /// Loads a config from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a
    /// serialization error if it is not valid JSON for this shape.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_json::from_str(&contents).map_err(|e| Error::SerializationError {
            message: format!("invalid theme config {}", path.display()),
            source: Some(e),
        })
    }

    /// Validates that both seed colors are acceptable token values.
    ///
    /// Seeds must parse as `oklch(L C H)` with all channels in domain;
    /// rejecting them up front keeps every derived palette color
    /// computable.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the offending seed.
    pub fn validate(&self) -> Result<()> {
        if !is_valid_oklch(&self.primary_color) {
            return Err(Error::ValidationError {
                field: "primary_color".to_string(),
                reason: format!("'{}' is not a valid oklch(L C H) value", self.primary_color),
            });
        }
        if !is_valid_oklch(&self.secondary_color) {
            return Err(Error::ValidationError {
                field: "secondary_color".to_string(),
                reason: format!(
                    "'{}' is not a valid oklch(L C H) value",
                    self.secondary_color
                ),
            });
        }
        Ok(())
    }
}

/// A single named token value in a generated theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenValue {
    /// Token name (CSS custom property without `--`)
    pub name: String,
    /// Token value as rendered into stylesheets
    pub value: String,
}

/// A generated theme: ordered token tables per mode.
///
/// Token order is stable (base tokens first, then the semantic palette)
/// so that rendered stylesheets diff cleanly between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name from the configuration
    pub name: String,
    /// Light mode token table
    pub light: Vec<TokenValue>,
    /// Dark mode token table, absent when `include_dark` was off
    pub dark: Option<Vec<TokenValue>>,
}

impl Theme {
    /// Looks up a token value in the light table.
    #[must_use]
    pub fn light_value(&self, name: &str) -> Option<&str> {
        self.light
            .iter()
            .find(|token| token.name == name)
            .map(|token| token.value.as_str())
    }

    /// Looks up a token value in the dark table.
    #[must_use]
    pub fn dark_value(&self, name: &str) -> Option<&str> {
        self.dark
            .as_ref()?
            .iter()
            .find(|token| token.name == name)
            .map(|token| token.value.as_str())
    }
}

/// Stylesheet output format for a generated theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmitFormat {
    /// CSS custom properties under `:root`
    #[default]
    Css,
    /// SCSS with the same custom properties
    Scss,
    /// Structured JSON token tables
    Json,
}

impl EmitFormat {
    /// Returns the conventional file extension for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for EmitFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for EmitFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "css" => Ok(Self::Css),
            "scss" => Ok(Self::Scss),
            "json" => Ok(Self::Json),
            _ => Err(Error::InvalidArgument(format!(
                "invalid emit format: '{s}' (expected: css, scss, or json)"
            ))),
        }
    }
}
