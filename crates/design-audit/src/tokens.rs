//! Token-table validation.
//!
//! Validates a flat JSON map of token names to values against the
//! naming rules and category requirements in `design_core::token`,
//! plus per-category value checks.

use design_core::color::is_valid_oklch;
use design_core::token::{TokenCategory, validate_token_name};
use design_core::{Error, Result};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use crate::types::{TokenIssue, TokenReport};

/// Loads a JSON token file and validates it.
///
/// # Errors
///
/// Returns an error when the file cannot be read, is not valid JSON, or
/// is not a JSON object at the top level.
pub fn validate_file(path: &Path) -> Result<TokenReport> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let value: Value = serde_json::from_str(&contents).map_err(|e| Error::SerializationError {
        message: format!("failed to parse token file '{}'", path.display()),
        source: Some(e),
    })?;

    let Value::Object(tokens) = value else {
        return Err(Error::ValidationError {
            field: "tokens".to_string(),
            reason: "token file must be a JSON object mapping names to values".to_string(),
        });
    };

    Ok(validate_tokens(&tokens))
}

/// Validates a token map.
///
/// Errors: a missing required category, or a `color-*` token whose value
/// is not valid OKLCH. Warnings: naming-rule violations and `spacing-*`
/// values without a `rem`/`px` unit.
///
/// # Examples
///
/// ```
/// use design_audit::tokens::validate_tokens;
/// use serde_json::json;
///
/// let tokens = json!({
///     "color-primary": "oklch(0.7 0.15 250)",
///     "spacing-md": "1rem",
///     "font-size-base": "1rem",
///     "shadow-sm": "0 1px 2px oklch(0 0 0 / 0.05)",
///     "radius-md": "0.5rem"
/// });
/// let report = validate_tokens(tokens.as_object().unwrap());
/// assert!(report.is_valid(true));
/// ```
#[must_use]
pub fn validate_tokens(tokens: &Map<String, Value>) -> TokenReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let found_categories: HashSet<TokenCategory> =
        tokens.keys().filter_map(|name| TokenCategory::infer(name)).collect();

    for required in TokenCategory::REQUIRED {
        if !found_categories.contains(&required) {
            errors.push(TokenIssue {
                token_name: format!("category:{required}"),
                message: format!("missing required token category: {required}"),
                suggestion: Some(format!("add {required}-* tokens")),
            });
        }
    }

    for (name, value) in tokens {
        for message in validate_token_name(name) {
            warnings.push(TokenIssue {
                token_name: name.clone(),
                message,
                suggestion: None,
            });
        }

        if let Value::String(value) = value {
            if name.starts_with("color-") && !is_valid_oklch(value) {
                errors.push(TokenIssue {
                    token_name: name.clone(),
                    message: format!("color token value is not valid OKLCH: {value}"),
                    suggestion: Some("use the oklch(L C H) form".to_string()),
                });
            } else if name.starts_with("spacing-")
                && !value.ends_with("rem")
                && !value.ends_with("px")
            {
                warnings.push(TokenIssue {
                    token_name: name.clone(),
                    message: format!("spacing token should use a rem or px unit: {value}"),
                    suggestion: Some("use rem for relative or px for absolute sizes".to_string()),
                });
            }
        }
    }

    debug!(
        tokens = tokens.len(),
        errors = errors.len(),
        warnings = warnings.len(),
        "token validation finished"
    );

    TokenReport {
        total_tokens: tokens.len(),
        errors,
        warnings,
    }
}
