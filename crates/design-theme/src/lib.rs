//! Design-token theme generation.
//!
//! Turns a two-seed [`ThemeConfig`] into a complete light/dark token
//! table and renders it as CSS custom properties, SCSS, or JSON. The
//! palette layout is fixed: every semantic color token is either a seed,
//! a fixed literal, or a kernel-derived variant of a seed, so a theme is
//! fully reproducible from its configuration.
//!
//! # Examples
//!
//! ```
//! use design_theme::{EmitFormat, ThemeConfig, ThemeGenerator};
//!
//! let generator = ThemeGenerator::new()?;
//! let config = ThemeConfig::new("oklch(0.7 0.15 250)", "oklch(0.65 0.12 180)");
//!
//! let theme = generator.generate(&config)?;
//! let css = generator.emit(&theme, EmitFormat::Css)?;
//! assert!(css.contains("--color-primary: oklch(0.7 0.15 250);"));
//! # Ok::<(), design_core::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod generator;
pub mod template_engine;
pub mod tokens;
pub mod types;

pub use generator::ThemeGenerator;
pub use tokens::{SemanticColorToken, ThemeMode};
pub use types::{EmitFormat, Theme, ThemeConfig, TokenValue};
