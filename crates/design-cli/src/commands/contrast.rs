//! Contrast evaluation command.
//!
//! Rates a foreground/background OKLCH pair against the WCAG AA and AAA
//! thresholds.

use anyhow::Result;
use design_core::cli::{ExitCode, OutputFormat};
use design_core::color::{ContrastRating, TextSize};
use serde::Serialize;
use tracing::info;

use crate::formatters::format_output;

/// Result of a contrast evaluation, as printed by the command.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContrastSummary {
    /// Foreground color expression as given.
    pub foreground: String,
    /// Background color expression as given.
    pub background: String,
    /// Text size the thresholds were chosen for.
    pub text_size: String,
    /// Computed contrast ratio. Unparseable input rates 1.0.
    pub ratio: f64,
    /// Whether the pair meets WCAG AA.
    pub passes_aa: bool,
    /// Whether the pair meets WCAG AAA.
    pub passes_aaa: bool,
}

/// Evaluates a color pair and prints the rating.
///
/// Inputs that do not parse as `oklch(L C H)` are not an error: they
/// rate 1.0 and fail, which is the conservative outcome for an audit.
///
/// # Errors
///
/// Returns an error if output serialization fails.
pub fn run(
    foreground: &str,
    background: &str,
    large_text: bool,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let size = if large_text {
        TextSize::Large
    } else {
        TextSize::Normal
    };

    info!(foreground, background, ?size, "evaluating contrast");

    let rating = ContrastRating::of(foreground, background, size);
    let summary = ContrastSummary {
        foreground: foreground.to_string(),
        background: background.to_string(),
        text_size: if large_text { "large" } else { "normal" }.to_string(),
        ratio: rating.ratio,
        passes_aa: rating.passes_aa,
        passes_aaa: rating.passes_aaa,
    };

    println!("{}", format_output(&summary, output_format)?);

    if summary.passes_aa {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::CHECK_FAILED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passing_pair_succeeds() {
        let code = run(
            "oklch(0.95 0 0)",
            "oklch(0.15 0 0)",
            false,
            OutputFormat::Text,
        )
        .unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn test_failing_pair_returns_check_failed() {
        let code = run(
            "oklch(0.5 0.1 250)",
            "oklch(0.55 0.1 250)",
            false,
            OutputFormat::Text,
        )
        .unwrap();
        assert_eq!(code, ExitCode::CHECK_FAILED);
    }

    #[test]
    fn test_unparseable_input_fails_closed() {
        let code = run("#336699", "oklch(0.95 0 0)", false, OutputFormat::Text).unwrap();
        assert_eq!(code, ExitCode::CHECK_FAILED);
    }

    #[test]
    fn test_large_text_threshold() {
        // 0.95 vs 0.55 rates 1.0/0.6 = 1.666..; large-text AA needs 3.0.
        // 0.95 vs 0.25: (1.0)/(0.3) = 3.33 passes large AA, fails normal.
        let large = run(
            "oklch(0.95 0 0)",
            "oklch(0.25 0 0)",
            true,
            OutputFormat::Text,
        )
        .unwrap();
        assert_eq!(large, ExitCode::SUCCESS);

        let normal = run(
            "oklch(0.95 0 0)",
            "oklch(0.25 0 0)",
            false,
            OutputFormat::Text,
        )
        .unwrap();
        assert_eq!(normal, ExitCode::CHECK_FAILED);
    }
}
