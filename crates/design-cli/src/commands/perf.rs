//! Performance audit command.

use anyhow::Result;
use design_audit::performance;
use design_core::cli::{ExitCode, OutputFormat};
use std::path::Path;
use tracing::info;

use crate::formatters::format_output;

/// Scans a source directory and prints the findings.
///
/// The process exits with `CHECK_FAILED` when critical findings exist,
/// and `INVALID_INPUT` when the directory does not exist.
///
/// # Errors
///
/// Returns an error if output serialization fails.
pub fn run(directory: &Path, excludes: &[String], output_format: OutputFormat) -> Result<ExitCode> {
    if !directory.is_dir() {
        eprintln!("not a directory: {}", directory.display());
        return Ok(ExitCode::INVALID_INPUT);
    }

    info!(directory = %directory.display(), "running performance scan");

    let report = performance::check_directory(directory, excludes);
    println!("{}", format_output(&report, output_format)?);

    if report.passes() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::CHECK_FAILED)
    }
}
