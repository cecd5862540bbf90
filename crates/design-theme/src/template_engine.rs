//! Template engine for stylesheet rendering using Handlebars.
//!
//! Wraps Handlebars with pre-registered templates for CSS and SCSS theme
//! output. Templates are compiled into the binary with `include_str!`
//! and registered in strict mode so a missing field fails rendering
//! instead of producing a silently incomplete stylesheet.

use design_core::{Error, Result};
use handlebars::Handlebars;

use crate::types::Theme;

/// Template engine for theme stylesheet rendering.
///
/// # Examples
///
/// ```
/// use design_theme::template_engine::TemplateEngine;
///
/// let engine = TemplateEngine::new().unwrap();
/// assert!(engine.has_template("theme-css"));
/// assert!(engine.has_template("theme-scss"));
/// ```
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl TemplateEngine<'_> {
    /// Creates a new template engine with registered templates.
    ///
    /// # Errors
    ///
    /// Returns an error if template registration fails (should not happen
    /// with valid built-in templates).
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);

        Self::register_templates(&mut handlebars)?;

        Ok(Self { handlebars })
    }

    /// Registers all built-in Handlebars templates.
    fn register_templates(handlebars: &mut Handlebars<'_>) -> Result<()> {
        handlebars
            .register_template_string("theme-css", include_str!("../templates/theme.css.hbs"))
            .map_err(|e| Error::RenderError {
                message: "failed to register CSS theme template".to_string(),
                source: Some(Box::new(e)),
            })?;

        handlebars
            .register_template_string("theme-scss", include_str!("../templates/theme.scss.hbs"))
            .map_err(|e| Error::RenderError {
                message: "failed to register SCSS theme template".to_string(),
                source: Some(Box::new(e)),
            })?;

        Ok(())
    }

    /// Checks whether a template is registered.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }

    /// Renders a theme through the named template.
    ///
    /// # Errors
    ///
    /// Returns an error if the theme cannot be serialized or the template
    /// rendering fails.
    pub fn render(&self, template: &str, theme: &Theme) -> Result<String> {
        self.handlebars
            .render(template, theme)
            .map_err(|e| Error::RenderError {
                message: format!("failed to render template '{template}'"),
                source: Some(Box::new(e)),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TokenValue;

    fn sample_theme() -> Theme {
        Theme {
            name: "sample".to_string(),
            light: vec![TokenValue {
                name: "color-bg".to_string(),
                value: "oklch(0.98 0 0)".to_string(),
            }],
            dark: Some(vec![TokenValue {
                name: "color-bg".to_string(),
                value: "oklch(0.15 0 0)".to_string(),
            }]),
        }
    }

    #[test]
    fn test_engine_has_templates() {
        let engine = TemplateEngine::new().unwrap();
        assert!(engine.has_template("theme-css"));
        assert!(engine.has_template("theme-scss"));
        assert!(!engine.has_template("theme-less"));
    }

    #[test]
    fn test_render_css() {
        let engine = TemplateEngine::new().unwrap();
        let css = engine.render("theme-css", &sample_theme()).unwrap();

        assert!(css.contains("/* sample - Design Tokens */"));
        assert!(css.contains("--color-bg: oklch(0.98 0 0);"));
        assert!(css.contains("@media (prefers-color-scheme: dark)"));
        assert!(css.contains("--color-bg: oklch(0.15 0 0);"));
    }

    #[test]
    fn test_render_css_without_dark() {
        let engine = TemplateEngine::new().unwrap();
        let mut theme = sample_theme();
        theme.dark = None;

        let css = engine.render("theme-css", &theme).unwrap();
        assert!(!css.contains("prefers-color-scheme"));
    }

    #[test]
    fn test_render_scss() {
        let engine = TemplateEngine::new().unwrap();
        let scss = engine.render("theme-scss", &sample_theme()).unwrap();

        assert!(scss.contains("// sample - Design Tokens"));
        assert!(scss.contains("--color-bg: oklch(0.98 0 0);"));
    }

    #[test]
    fn test_render_unknown_template_errors() {
        let engine = TemplateEngine::new().unwrap();
        let err = engine.render("theme-less", &sample_theme()).unwrap_err();
        assert!(err.is_render_error());
    }
}
