//! Command implementations for the design CLI.
//!
//! Each command module takes its parsed arguments plus the requested
//! output format, prints its result through the shared formatters, and
//! returns the exit code for the process.

pub mod a11y;
pub mod completions;
pub mod contrast;
pub mod perf;
pub mod theme;
pub mod tokens;
