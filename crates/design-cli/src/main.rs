//! Design skill tools CLI.
//!
//! Command-line interface for OKLCH theme generation, contrast
//! evaluation, and frontend accessibility/performance/token audits.
//!
//! # Architecture
//!
//! The CLI is organized around subcommands:
//! - `theme` - Generate a design-token theme from two seed colors
//! - `contrast` - Rate a color pair against WCAG thresholds
//! - `a11y` - Audit an HTML file for accessibility problems
//! - `perf` - Scan a source tree for performance problems
//! - `tokens` - Validate a JSON design-token file
//! - `completions` - Generate shell completions
//!
//! # Examples
//!
//! ```bash
//! # Generate a theme and print the CSS
//! design-cli theme --primary "oklch(0.7 0.15 250)" --secondary "oklch(0.65 0.12 180)"
//!
//! # Rate a contrast pair
//! design-cli contrast "oklch(0.95 0 0)" "oklch(0.15 0 0)"
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use design_cli::commands;
use design_core::cli::{ExitCode, OutputFormat};
use design_theme::EmitFormat;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Design skill tools - OKLCH theme generation and frontend audits.
///
/// Generates reproducible design-token themes from two seed colors and
/// audits HTML, component sources, and token files.
#[derive(Parser, Debug)]
#[command(name = "design-cli")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    format: String,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a design-token theme from two OKLCH seed colors.
    ///
    /// The full palette is derived deterministically: hover, active, and
    /// dark-mode variants are computed from the seeds with fixed deltas.
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Print CSS custom properties to stdout
    /// design-cli theme --primary "oklch(0.7 0.15 250)" --secondary "oklch(0.65 0.12 180)"
    ///
    /// # Write CSS and JSON files for a named theme
    /// design-cli theme --primary "oklch(0.7 0.15 250)" --secondary "oklch(0.65 0.12 180)" \
    ///     --name brand --emit css --emit json --output ./tokens
    ///
    /// # Load the seed pair from a config file
    /// design-cli theme --config theme.json --output ./tokens
    /// ```
    Theme {
        /// JSON config file with primary_color/secondary_color (and
        /// optional name, include_dark)
        #[arg(long, conflicts_with_all = ["primary", "secondary", "name", "no_dark"])]
        config: Option<PathBuf>,

        /// Primary seed color, e.g. "oklch(0.7 0.15 250)"
        #[arg(long, required_unless_present = "config")]
        primary: Option<String>,

        /// Secondary seed color
        #[arg(long, required_unless_present = "config")]
        secondary: Option<String>,

        /// Theme name, used for output file names (default: "default")
        #[arg(long)]
        name: Option<String>,

        /// Skip the dark-mode palette
        #[arg(long = "no-dark")]
        no_dark: bool,

        /// Output format to render (css, scss, json); repeatable
        #[arg(long = "emit", num_args = 1, default_value = "css")]
        emit: Vec<EmitFormat>,

        /// Directory to write theme files to (default: print to stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Rate a foreground/background color pair against WCAG thresholds.
    ///
    /// Colors that do not parse as oklch(L C H) rate 1.0 and fail.
    /// Exits with code 3 when the pair fails AA.
    ///
    /// # Examples
    ///
    /// ```bash
    /// design-cli contrast "oklch(0.95 0 0)" "oklch(0.15 0 0)"
    /// design-cli contrast "oklch(0.8 0 0)" "oklch(0.3 0 0)" --large
    /// ```
    Contrast {
        /// Foreground color expression
        foreground: String,

        /// Background color expression
        background: String,

        /// Use the large-text thresholds (AA 3.0, AAA 4.5)
        #[arg(long)]
        large: bool,
    },

    /// Audit an HTML file for accessibility problems.
    ///
    /// Checks images, links, form fields, headings, buttons, and inline
    /// OKLCH color pairs. Exits with code 3 on critical findings.
    A11y {
        /// HTML file to check
        html_file: PathBuf,
    },

    /// Scan a frontend source tree for performance problems.
    ///
    /// Inspects .js/.jsx/.ts/.tsx/.vue/.svelte files for bundle and
    /// rendering hazards. Exits with code 3 on critical findings.
    Perf {
        /// Project directory to scan
        directory: PathBuf,

        /// Directory names to skip; repeatable
        #[arg(long = "exclude", num_args = 1, default_values_t = [
            "node_modules".to_string(),
            "dist".to_string(),
            "build".to_string(),
        ])]
        exclude: Vec<String>,
    },

    /// Validate a JSON design-token file.
    ///
    /// Checks required categories, naming rules, OKLCH color values,
    /// and spacing units. Exits with code 3 when the table is invalid.
    Tokens {
        /// Token file to validate (flat JSON object)
        token_file: PathBuf,

        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },

    /// Generate shell completions.
    ///
    /// Prints a completion script that can be sourced or installed for
    /// the target shell.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let output_format = cli
        .format
        .parse::<OutputFormat>()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    let exit_code = execute_command(cli.command, output_format)?;

    std::process::exit(exit_code.as_i32());
}

/// Initializes tracing to stderr, honoring `RUST_LOG` unless `--verbose`
/// forces debug level.
///
/// # Errors
///
/// Returns an error if a subscriber is already installed.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

/// Routes a parsed command to its handler and returns the exit code.
///
/// # Errors
///
/// Returns an error if command execution fails.
fn execute_command(command: Commands, output_format: OutputFormat) -> Result<ExitCode> {
    match command {
        Commands::Theme {
            config,
            primary,
            secondary,
            name,
            no_dark,
            emit,
            output,
        } => commands::theme::run(
            config.as_deref(),
            primary,
            secondary,
            name,
            no_dark,
            &emit,
            output.as_deref(),
            output_format,
        ),
        Commands::Contrast {
            foreground,
            background,
            large,
        } => commands::contrast::run(&foreground, &background, large, output_format),
        Commands::A11y { html_file } => commands::a11y::run(&html_file, output_format),
        Commands::Perf { directory, exclude } => {
            commands::perf::run(&directory, &exclude, output_format)
        }
        Commands::Tokens { token_file, strict } => {
            commands::tokens::run(&token_file, strict, output_format)
        }
        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_theme_manual() {
        let cli = Cli::parse_from([
            "design-cli",
            "theme",
            "--primary",
            "oklch(0.7 0.15 250)",
            "--secondary",
            "oklch(0.65 0.12 180)",
            "--name",
            "brand",
        ]);
        if let Commands::Theme {
            primary,
            secondary,
            name,
            emit,
            ..
        } = cli.command
        {
            assert_eq!(primary, Some("oklch(0.7 0.15 250)".to_string()));
            assert_eq!(secondary, Some("oklch(0.65 0.12 180)".to_string()));
            assert_eq!(name, Some("brand".to_string()));
            assert_eq!(emit, vec![EmitFormat::Css]);
        } else {
            panic!("Expected Theme command");
        }
    }

    #[test]
    fn test_cli_parsing_theme_requires_seeds_or_config() {
        assert!(Cli::try_parse_from(["design-cli", "theme"]).is_err());
        assert!(
            Cli::try_parse_from(["design-cli", "theme", "--config", "theme.json"]).is_ok()
        );
    }

    #[test]
    fn test_cli_parsing_theme_config_conflicts_with_seeds() {
        let result = Cli::try_parse_from([
            "design-cli",
            "theme",
            "--config",
            "theme.json",
            "--primary",
            "oklch(0.7 0.15 250)",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parsing_theme_multiple_emits() {
        let cli = Cli::parse_from([
            "design-cli",
            "theme",
            "--config",
            "theme.json",
            "--emit",
            "css",
            "--emit",
            "json",
        ]);
        if let Commands::Theme { emit, .. } = cli.command {
            assert_eq!(emit, vec![EmitFormat::Css, EmitFormat::Json]);
        } else {
            panic!("Expected Theme command");
        }
    }

    #[test]
    fn test_cli_parsing_contrast() {
        let cli = Cli::parse_from([
            "design-cli",
            "contrast",
            "oklch(0.95 0 0)",
            "oklch(0.15 0 0)",
            "--large",
        ]);
        if let Commands::Contrast {
            foreground,
            background,
            large,
        } = cli.command
        {
            assert_eq!(foreground, "oklch(0.95 0 0)");
            assert_eq!(background, "oklch(0.15 0 0)");
            assert!(large);
        } else {
            panic!("Expected Contrast command");
        }
    }

    #[test]
    fn test_cli_parsing_perf_default_excludes() {
        let cli = Cli::parse_from(["design-cli", "perf", "./src"]);
        if let Commands::Perf { exclude, .. } = cli.command {
            assert_eq!(exclude, vec!["node_modules", "dist", "build"]);
        } else {
            panic!("Expected Perf command");
        }
    }

    #[test]
    fn test_cli_parsing_tokens_strict() {
        let cli = Cli::parse_from(["design-cli", "tokens", "tokens.json", "--strict"]);
        if let Commands::Tokens { strict, .. } = cli.command {
            assert!(strict);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::parse_from(["design-cli", "--verbose", "a11y", "index.html"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_output_format_default() {
        let cli = Cli::parse_from(["design-cli", "a11y", "index.html"]);
        assert_eq!(cli.format, "pretty");
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!(
            "pretty".parse::<OutputFormat>().unwrap(),
            OutputFormat::Pretty
        );
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::parse_from(["design-cli", "completions", "zsh"]);
        if let Commands::Completions { shell } = cli.command {
            assert_eq!(shell, Shell::Zsh);
        } else {
            panic!("Expected Completions command");
        }
    }

    #[test]
    fn test_init_logging_rejects_second_subscriber() {
        // The first installation in this process wins; a second must
        // surface as an error instead of panicking.
        assert!(init_logging(false).is_ok());
        assert!(init_logging(true).is_err());
    }
}
