//! Output formatters for CLI commands.
//!
//! Every command serializes its result once and routes it through
//! [`format_output`], so JSON, text, and pretty modes stay consistent
//! across subcommands.

use anyhow::Result;
use colored::Colorize;
use design_core::cli::OutputFormat;
use serde::Serialize;

/// Format data according to the specified output format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Examples
///
/// ```
/// use design_cli::formatters::format_output;
/// use design_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct ContrastSummary {
///     ratio: f64,
///     passes_aa: bool,
/// }
///
/// let summary = ContrastSummary { ratio: 5.0, passes_aa: true };
/// let output = format_output(&summary, OutputFormat::Json)?;
/// assert!(output.contains("\"ratio\""));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Format data as pretty-printed JSON.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }

    /// Format data as compact single-line JSON.
    pub fn format_compact<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string(data)?)
    }
}

/// Plain text output formatting.
pub mod text {
    use super::{Result, Serialize, json};

    /// Format data as machine-friendly text without colors.
    ///
    /// Compact JSON, suitable for piping into other tools.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        json::format_compact(data)
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, Result, Serialize};
    use colored::ColoredString;
    use serde_json::Value;

    /// Format data as colorized, human-readable output.
    ///
    /// Report values are colored by meaning rather than only by JSON
    /// type: severity words render in their severity color and booleans
    /// read as pass (green) / fail (red), so `passes_aa: false` or a
    /// `"critical"` issue stands out in a long report.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        Ok(render(&value, 0))
    }

    fn render(value: &Value, depth: usize) -> String {
        match value {
            Value::Null => "null".dimmed().to_string(),
            Value::Bool(flag) => {
                if *flag {
                    "true".green().to_string()
                } else {
                    "false".red().to_string()
                }
            }
            Value::Number(number) => number.to_string().cyan().to_string(),
            Value::String(text) => format!("\"{}\"", color_text(text)),
            Value::Array(items) => {
                let rendered = items.iter().map(|item| render(item, depth + 1)).collect();
                render_block('[', ']', depth, rendered)
            }
            Value::Object(fields) => {
                let rendered = fields
                    .iter()
                    .map(|(key, val)| {
                        format!("\"{}\": {}", key.blue().bold(), render(val, depth + 1))
                    })
                    .collect();
                render_block('{', '}', depth, rendered)
            }
        }
    }

    /// Severity words get their severity color; other strings are green.
    fn color_text(text: &str) -> ColoredString {
        match text {
            "critical" | "serious" => text.red(),
            "warning" | "moderate" => text.yellow(),
            "minor" | "info" => text.dimmed(),
            _ => text.green(),
        }
    }

    fn render_block(open: char, close: char, depth: usize, rendered: Vec<String>) -> String {
        if rendered.is_empty() {
            return format!("{open}{close}");
        }

        let inner_indent = "  ".repeat(depth + 1);
        let body = rendered
            .into_iter()
            .map(|entry| format!("{inner_indent}{entry}"))
            .collect::<Vec<_>>()
            .join(",\n");
        format!("{open}\n{body}\n{}{close}", "  ".repeat(depth))
    }

}
