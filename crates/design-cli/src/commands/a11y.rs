//! Accessibility audit command.

use anyhow::Result;
use design_audit::accessibility::check_html;
use design_core::cli::{ExitCode, OutputFormat};
use std::path::Path;
use tracing::info;

use crate::formatters::format_output;

/// Checks an HTML file and prints the findings.
///
/// The process exits with `CHECK_FAILED` when critical findings exist,
/// and `INVALID_INPUT` when the file cannot be read.
///
/// # Errors
///
/// Returns an error if output serialization fails.
pub fn run(html_file: &Path, output_format: OutputFormat) -> Result<ExitCode> {
    let html = match std::fs::read_to_string(html_file) {
        Ok(html) => html,
        Err(e) => {
            eprintln!("cannot read {}: {e}", html_file.display());
            return Ok(ExitCode::INVALID_INPUT);
        }
    };

    info!(file = %html_file.display(), "running accessibility checks");

    let report = check_html(&html);
    println!("{}", format_output(&report, output_format)?);

    if report.passes() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::CHECK_FAILED)
    }
}
