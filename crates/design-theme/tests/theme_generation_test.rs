//! Integration tests for theme generation.
//!
//! Exercises the full pipeline: configuration loading, palette
//! derivation through the color kernel, and rendering to CSS, SCSS,
//! and JSON outputs.

use design_theme::{EmitFormat, ThemeConfig, ThemeGenerator};

fn generator() -> ThemeGenerator {
    ThemeGenerator::new().expect("generator initializes")
}

fn sample_config() -> ThemeConfig {
    let mut config = ThemeConfig::new("oklch(0.55 0.2 260)", "oklch(0.6 0.1 30)");
    config.name = "acme".to_string();
    config
}

#[test]
fn test_full_pipeline_to_css() {
    let theme = generator().generate(&sample_config()).unwrap();
    let css = generator().emit(&theme, EmitFormat::Css).unwrap();

    assert!(css.contains(":root {"));
    assert!(css.contains("--color-primary: oklch(0.55 0.2 260);"));
    assert!(css.contains("--color-primary-hover: oklch(0.6 0.22 260);"));
    assert!(css.contains("--color-secondary: oklch(0.6 0.1 30);"));
    assert!(css.contains("--font-size-base: 1rem;"));
    assert!(css.contains("@media (prefers-color-scheme: dark)"));
    // Dark seeds are lifted by the fixed delta.
    assert!(css.contains("--color-primary: oklch(0.6 0.22 260);"));
}

#[test]
fn test_full_pipeline_to_scss() {
    let theme = generator().generate(&sample_config()).unwrap();
    let scss = generator().emit(&theme, EmitFormat::Scss).unwrap();

    assert!(scss.starts_with("// acme - Design Tokens"));
    assert!(scss.contains("--color-primary: oklch(0.55 0.2 260);"));
    assert!(scss.contains("--spacing-md: 1rem;"));
}

#[test]
fn test_full_pipeline_to_json() {
    let theme = generator().generate(&sample_config()).unwrap();
    let json = generator().emit(&theme, EmitFormat::Json).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let light = value["light"].as_object().unwrap();
    let dark = value["dark"].as_object().unwrap();

    assert_eq!(light.len(), dark.len());
    assert_eq!(light["color-primary"], "oklch(0.55 0.2 260)");
    assert_eq!(light["radius-md"], "0.5rem");
    assert_eq!(dark["color-bg"], "oklch(0.15 0 0)");
}

#[test]
fn test_config_from_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("theme.json");
    std::fs::write(
        &config_path,
        r#"{
  "primary_color": "oklch(0.55 0.2 260)",
  "secondary_color": "oklch(0.6 0.1 30)",
  "name": "acme",
  "include_dark": false
}"#,
    )
    .unwrap();

    let config = ThemeConfig::from_file(&config_path).unwrap();
    assert_eq!(config.name, "acme");
    assert!(!config.include_dark);

    let theme = generator().generate(&config).unwrap();
    assert!(theme.dark.is_none());

    let css = generator().emit(&theme, EmitFormat::Css).unwrap();
    assert!(!css.contains("prefers-color-scheme"));
}

#[test]
fn test_write_theme_creates_named_file() {
    let dir = tempfile::tempdir().unwrap();
    let theme = generator().generate(&sample_config()).unwrap();

    let path = generator()
        .write_theme(&theme, EmitFormat::Scss, &dir.path().join("out"))
        .unwrap();

    assert!(path.ends_with("out/acme.scss"));
    let written = std::fs::read_to_string(path).unwrap();
    assert!(written.contains("--color-primary:"));
}

#[test]
fn test_invalid_seed_is_rejected_before_rendering() {
    let config = ThemeConfig::new("oklch(0.55 0.2 260)", "rgb(0, 0, 0)");
    let err = generator().generate(&config).unwrap_err();
    assert!(err.is_validation_error());
    assert!(err.to_string().contains("secondary_color"));
}
