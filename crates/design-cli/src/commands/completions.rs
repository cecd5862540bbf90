//! Shell completion generation command.
//!
//! Generates completion scripts for bash, zsh, fish, and `PowerShell`.

use anyhow::Result;
use clap::Command;
use clap_complete::{Shell, generate};
use design_core::cli::ExitCode;
use std::io;
use tracing::info;

/// Prints the completion script for the given shell to stdout.
pub fn generate_completions(shell: Shell, cmd: &mut Command) {
    generate(shell, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

/// Runs the completions command.
///
/// # Errors
///
/// Currently infallible; returns `Result` for consistency with the
/// other commands.
pub fn run(shell: Shell, cmd: &mut Command) -> Result<ExitCode> {
    info!(%shell, "generating shell completions");
    generate_completions(shell, cmd);
    Ok(ExitCode::SUCCESS)
}
