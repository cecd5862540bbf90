//! Theme generation command.

use anyhow::Result;
use design_core::cli::{ExitCode, OutputFormat};
use design_theme::{EmitFormat, ThemeConfig, ThemeGenerator};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::formatters::format_output;

/// Written-files summary printed when `--output` is used.
#[derive(Debug, Clone, Serialize)]
pub struct ThemeSummary {
    /// Theme name.
    pub name: String,
    /// Paths of the files written.
    pub files: Vec<PathBuf>,
}

/// Generates a theme and prints or writes it.
///
/// The seed pair comes either from a JSON config file or from the
/// `--primary`/`--secondary` flags. Without `--output` the rendered
/// stylesheets go to stdout; with it, one file per requested format is
/// written and a summary is printed instead.
///
/// # Errors
///
/// Returns an error if rendering, file writing, or output serialization
/// fails.
#[allow(clippy::too_many_arguments)]
pub fn run(
    config_file: Option<&Path>,
    primary: Option<String>,
    secondary: Option<String>,
    name: Option<String>,
    no_dark: bool,
    emit: &[EmitFormat],
    output: Option<&Path>,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let config = match build_config(config_file, primary, secondary, name, no_dark) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            return Ok(ExitCode::INVALID_INPUT);
        }
    };

    info!(theme = %config.name, formats = emit.len(), "generating theme");

    let generator = ThemeGenerator::new()?;
    let theme = match generator.generate(&config) {
        Ok(theme) => theme,
        Err(e) if e.is_validation_error() => {
            eprintln!("{e}");
            return Ok(ExitCode::INVALID_INPUT);
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(output_dir) = output {
        let mut files = Vec::with_capacity(emit.len());
        for format in emit {
            files.push(generator.write_theme(&theme, *format, output_dir)?);
        }

        let summary = ThemeSummary {
            name: theme.name,
            files,
        };
        println!("{}", format_output(&summary, output_format)?);
    } else {
        for format in emit {
            println!("{}", generator.emit(&theme, *format)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn build_config(
    config_file: Option<&Path>,
    primary: Option<String>,
    secondary: Option<String>,
    name: Option<String>,
    no_dark: bool,
) -> std::result::Result<ThemeConfig, String> {
    if let Some(path) = config_file {
        return ThemeConfig::from_file(path).map_err(|e| e.to_string());
    }

    let (Some(primary), Some(secondary)) = (primary, secondary) else {
        return Err("either --config or both --primary and --secondary are required".to_string());
    };

    let mut config = ThemeConfig::new(primary, secondary);
    if let Some(name) = name {
        config.name = name;
    }
    config.include_dark = !no_dark;
    Ok(config)
}
