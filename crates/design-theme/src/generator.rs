//! Theme generator: deterministic palettes from two seed colors.
//!
//! The generator resolves the fixed recipe tables in [`crate::tokens`]
//! against a pair of seed colors, producing an ordered token table per
//! theme mode. The whole palette is reproducible from the two seeds: the
//! hover/active/dark variants are derived with fixed channel deltas
//! through the color kernel, never specified individually.

use design_core::color::OklchColor;
use design_core::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::template_engine::TemplateEngine;
use crate::tokens::{ColorDelta, ColorRecipe, SeedRole, SemanticColorToken, ThemeMode, base_tokens};
use crate::types::{EmitFormat, Theme, ThemeConfig, TokenValue};

/// Applies a delta to a textual color expression.
///
/// Returns the adjusted expression, or the input unchanged when it does
/// not parse. The contract for unparseable colors is to pass the original
/// text through, never to fabricate a default.
///
/// # Examples
///
/// ```
/// use design_theme::generator::adjust_expression;
/// use design_theme::tokens::ColorDelta;
///
/// let delta = ColorDelta::new(0.05, 0.02, 0.0);
/// assert_eq!(
///     adjust_expression("oklch(0.7 0.15 250)", delta),
///     "oklch(0.75 0.17 250)"
/// );
/// assert_eq!(adjust_expression("currentColor", delta), "currentColor");
/// ```
#[must_use]
pub fn adjust_expression(expression: &str, delta: ColorDelta) -> String {
    OklchColor::parse(expression).map_or_else(
        || expression.to_string(),
        |color| delta.apply(color).to_string(),
    )
}

/// Theme generator combining the recipe tables with stylesheet rendering.
///
/// # Examples
///
/// ```
/// use design_theme::{ThemeConfig, ThemeGenerator};
///
/// let generator = ThemeGenerator::new().unwrap();
/// let config = ThemeConfig::new("oklch(0.7 0.15 250)", "oklch(0.65 0.12 180)");
/// let theme = generator.generate(&config).unwrap();
///
/// assert_eq!(theme.light_value("color-primary"), Some("oklch(0.7 0.15 250)"));
/// assert_eq!(theme.light_value("color-primary-hover"), Some("oklch(0.75 0.17 250)"));
/// ```
#[derive(Debug)]
pub struct ThemeGenerator {
    template_engine: TemplateEngine<'static>,
}

impl ThemeGenerator {
    /// Creates a new theme generator.
    ///
    /// # Errors
    ///
    /// Returns an error if template engine initialization fails.
    pub fn new() -> Result<Self> {
        let template_engine = TemplateEngine::new()?;
        Ok(Self { template_engine })
    }

    /// Generates a complete theme from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if either seed color is not a valid
    /// `oklch(L C H)` token value.
    pub fn generate(&self, config: &ThemeConfig) -> Result<Theme> {
        config.validate()?;

        info!(theme = %config.name, "generating theme");

        let light = self.mode_tokens(config, ThemeMode::Light);
        let dark = config
            .include_dark
            .then(|| self.mode_tokens(config, ThemeMode::Dark));

        Ok(Theme {
            name: config.name.clone(),
            light,
            dark,
        })
    }

    /// Renders a generated theme in the requested output format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or template rendering fails.
    pub fn emit(&self, theme: &Theme, format: EmitFormat) -> Result<String> {
        match format {
            EmitFormat::Css => self.template_engine.render("theme-css", theme),
            EmitFormat::Scss => self.template_engine.render("theme-scss", theme),
            EmitFormat::Json => Self::to_json(theme),
        }
    }

    /// Writes a rendered theme to `<output_dir>/<name>.<ext>`.
    ///
    /// Creates the output directory if needed and returns the written
    /// path.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or file operations fail.
    pub fn write_theme(
        &self,
        theme: &Theme,
        format: EmitFormat,
        output_dir: &Path,
    ) -> Result<PathBuf> {
        let rendered = self.emit(theme, format)?;

        debug!(dir = %output_dir.display(), "creating output directory");
        std::fs::create_dir_all(output_dir).map_err(|e| Error::IoError {
            path: output_dir.to_path_buf(),
            source: e,
        })?;

        let output_path = output_dir.join(format!("{}.{}", theme.name, format.extension()));
        std::fs::write(&output_path, rendered).map_err(|e| Error::IoError {
            path: output_path.clone(),
            source: e,
        })?;

        info!(path = %output_path.display(), "theme written");
        Ok(output_path)
    }

    // Private helpers

    fn mode_tokens(&self, config: &ThemeConfig, mode: ThemeMode) -> Vec<TokenValue> {
        let mut tokens: Vec<TokenValue> = base_tokens()
            .into_iter()
            .map(|(name, value)| TokenValue {
                name: name.to_string(),
                value: value.to_string(),
            })
            .collect();

        for token in SemanticColorToken::ALL {
            tokens.push(TokenValue {
                name: token.name().to_string(),
                value: self.resolve(config, token.recipe(mode)),
            });
        }

        tokens
    }

    fn resolve(&self, config: &ThemeConfig, recipe: ColorRecipe) -> String {
        match recipe {
            ColorRecipe::Seed(role) => self.seed(config, role).trim().to_string(),
            ColorRecipe::Derived(role, delta) => adjust_expression(self.seed(config, role), delta),
            ColorRecipe::Fixed(literal) => literal.to_string(),
        }
    }

    #[allow(clippy::unused_self)]
    fn seed<'a>(&self, config: &'a ThemeConfig, role: SeedRole) -> &'a str {
        match role {
            SeedRole::Primary => &config.primary_color,
            SeedRole::Secondary => &config.secondary_color,
        }
    }

    fn to_json(theme: &Theme) -> Result<String> {
        let mut root = serde_json::Map::new();
        root.insert("light".to_string(), Self::table_json(&theme.light));
        if let Some(dark) = &theme.dark {
            root.insert("dark".to_string(), Self::table_json(dark));
        }

        serde_json::to_string_pretty(&serde_json::Value::Object(root)).map_err(|e| {
            Error::SerializationError {
                message: format!("failed to serialize theme '{}'", theme.name),
                source: Some(e),
            }
        })
    }

    fn table_json(tokens: &[TokenValue]) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = tokens
            .iter()
            .map(|token| {
                (
                    token.name.clone(),
                    serde_json::Value::String(token.value.clone()),
                )
            })
            .collect();
        serde_json::Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ThemeConfig {
        ThemeConfig::new("oklch(0.7 0.15 250)", "oklch(0.65 0.12 180)")
    }

    #[test]
    fn test_generate_light_palette() {
        let generator = ThemeGenerator::new().unwrap();
        let theme = generator.generate(&config()).unwrap();

        assert_eq!(
            theme.light_value("color-primary"),
            Some("oklch(0.7 0.15 250)")
        );
        assert_eq!(
            theme.light_value("color-primary-hover"),
            Some("oklch(0.75 0.17 250)")
        );
        assert_eq!(
            theme.light_value("color-primary-active"),
            Some("oklch(0.65 0.15 250)")
        );
        assert_eq!(
            theme.light_value("color-secondary-hover"),
            Some("oklch(0.7 0.14 180)")
        );
        assert_eq!(theme.light_value("color-bg"), Some("oklch(0.98 0 0)"));
    }

    #[test]
    fn test_generate_dark_palette_lifts_seeds() {
        let generator = ThemeGenerator::new().unwrap();
        let theme = generator.generate(&config()).unwrap();

        assert_eq!(
            theme.dark_value("color-primary"),
            Some("oklch(0.75 0.17 250)")
        );
        assert_eq!(theme.dark_value("color-bg"), Some("oklch(0.15 0 0)"));
        assert_eq!(theme.dark_value("color-text"), Some("oklch(0.95 0 0)"));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let generator = ThemeGenerator::new().unwrap();
        let first = generator.generate(&config()).unwrap();
        let second = generator.generate(&config()).unwrap();
        assert_eq!(first.light, second.light);
        assert_eq!(first.dark, second.dark);
    }

    #[test]
    fn test_generate_without_dark() {
        let generator = ThemeGenerator::new().unwrap();
        let mut cfg = config();
        cfg.include_dark = false;

        let theme = generator.generate(&cfg).unwrap();
        assert!(theme.dark.is_none());
    }

    #[test]
    fn test_generate_rejects_invalid_seed() {
        let generator = ThemeGenerator::new().unwrap();
        let cfg = ThemeConfig::new("#336699", "oklch(0.65 0.12 180)");
        assert!(generator.generate(&cfg).unwrap_err().is_validation_error());
    }

    #[test]
    fn test_theme_contains_all_tokens() {
        let generator = ThemeGenerator::new().unwrap();
        let theme = generator.generate(&config()).unwrap();

        // 35 base tokens + 18 semantic colors
        assert_eq!(theme.light.len(), 53);
        assert_eq!(theme.dark.as_ref().unwrap().len(), 53);
    }

    #[test]
    fn test_adjust_expression_passthrough() {
        let delta = ColorDelta::new(0.1, 0.0, 0.0);
        assert_eq!(adjust_expression("inherit", delta), "inherit");
    }

    #[test]
    fn test_emit_css() {
        let generator = ThemeGenerator::new().unwrap();
        let theme = generator.generate(&config()).unwrap();
        let css = generator.emit(&theme, EmitFormat::Css).unwrap();

        assert!(css.contains(":root {"));
        assert!(css.contains("--color-primary: oklch(0.7 0.15 250);"));
        assert!(css.contains("--spacing-md: 1rem;"));
        assert!(css.contains("@media (prefers-color-scheme: dark)"));
    }

    #[test]
    fn test_emit_json_shape() {
        let generator = ThemeGenerator::new().unwrap();
        let theme = generator.generate(&config()).unwrap();
        let json = generator.emit(&theme, EmitFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value["light"]["color-primary"],
            serde_json::json!("oklch(0.7 0.15 250)")
        );
        assert_eq!(
            value["dark"]["color-bg"],
            serde_json::json!("oklch(0.15 0 0)")
        );
    }

    #[test]
    fn test_write_theme() {
        let generator = ThemeGenerator::new().unwrap();
        let theme = generator.generate(&config()).unwrap();
        let dir = tempfile::tempdir().unwrap();

        let path = generator
            .write_theme(&theme, EmitFormat::Css, dir.path())
            .unwrap();
        assert_eq!(path.file_name().unwrap(), "default.css");
        assert!(std::fs::read_to_string(path).unwrap().contains(":root"));
    }
}
