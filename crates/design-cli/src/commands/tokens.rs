//! Token-file validation command.

use anyhow::Result;
use design_audit::TokenReport;
use design_audit::tokens::validate_file;
use design_core::cli::{ExitCode, OutputFormat};
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::formatters::format_output;

/// Validation verdict as printed by the command.
#[derive(Debug, Clone, Serialize)]
pub struct TokenSummary {
    /// Whether the table passed under the chosen strictness.
    pub valid: bool,
    /// Whether warnings counted as failures.
    pub strict: bool,
    /// The underlying report.
    #[serde(flatten)]
    pub report: TokenReport,
}

/// Validates a JSON token file and prints the verdict.
///
/// In strict mode warnings also fail the check. Unreadable or
/// unparseable files exit with `INVALID_INPUT`.
///
/// # Errors
///
/// Returns an error if output serialization fails.
pub fn run(token_file: &Path, strict: bool, output_format: OutputFormat) -> Result<ExitCode> {
    info!(file = %token_file.display(), strict, "validating token file");

    let report = match validate_file(token_file) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{e}");
            return Ok(ExitCode::INVALID_INPUT);
        }
    };

    let summary = TokenSummary {
        valid: report.is_valid(strict),
        strict,
        report,
    };

    println!("{}", format_output(&summary, output_format)?);

    if summary.valid {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::CHECK_FAILED)
    }
}
