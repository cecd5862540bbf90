//! Error types for design skill tooling.
//!
//! This module provides the shared error hierarchy with contextual
//! information used across all crates in the workspace.
//!
//! # Examples
//!
//! ```
//! use design_core::{Error, Result};
//!
//! fn require_seed(color: &str) -> Result<()> {
//!     if color.is_empty() {
//!         return Err(Error::ValidationError {
//!             field: "primary".to_string(),
//!             reason: "seed color cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = require_seed("").unwrap_err();
//! assert!(err.is_validation_error());
//! ```

use thiserror::Error;

/// Main error type for design skill tooling.
///
/// All fallible operations in the workspace use this type, providing
/// consistent error handling across the generator, audit, and CLI crates.
#[derive(Error, Debug)]
pub enum Error {
    /// Validation error for domain values.
    ///
    /// Raised when a seed color, token name, or other domain value does
    /// not satisfy its format or range requirements.
    #[error("Validation error in {field}: {reason}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Detailed reason for the validation failure
        reason: String,
    },

    /// Configuration error.
    ///
    /// Raised when a theme configuration file is invalid, missing
    /// required fields, or contains contradictory settings.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Stylesheet rendering failed.
    ///
    /// Raised when rendering a generated theme through a template fails.
    #[error("Render failed: {message}")]
    RenderError {
        /// Description of the rendering failure
        message: String,
        /// Optional underlying error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Serialization/deserialization error.
    ///
    /// Raised when JSON conversion of token tables or reports fails.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Description of the serialization failure
        message: String,
        /// Underlying serde error
        #[source]
        source: Option<serde_json::Error>,
    },

    /// File I/O operation failed.
    #[error("I/O error for {path:?}")]
    IoError {
        /// The path that caused the error
        path: std::path::PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid argument error.
    ///
    /// Raised when CLI arguments or function parameters are invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Returns `true` if this is a validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use design_core::Error;
    ///
    /// let err = Error::ValidationError {
    ///     field: "color-primary".to_string(),
    ///     reason: "not a valid oklch() expression".to_string(),
    /// };
    /// assert!(err.is_validation_error());
    /// ```
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }

    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use design_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "missing secondary seed".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is a render error.
    #[must_use]
    pub const fn is_render_error(&self) -> bool {
        matches!(self, Self::RenderError { .. })
    }

    /// Returns `true` if this is a serialization error.
    #[must_use]
    pub const fn is_serialization_error(&self) -> bool {
        matches!(self, Self::SerializationError { .. })
    }

    /// Returns `true` if this is an I/O error.
    ///
    /// # Examples
    ///
    /// ```
    /// use design_core::Error;
    /// use std::io;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::IoError {
    ///     path: PathBuf::from("/tmp/tokens.json"),
    ///     source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
    /// };
    /// assert!(err.is_io_error());
    /// ```
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::IoError { .. })
    }
}

/// Result type alias for design tooling operations.
///
/// This is a convenience alias for `Result<T, Error>` used throughout
/// the codebase.
///
/// # Examples
///
/// ```
/// use design_core::{Error, Result};
///
/// fn positive(value: i32) -> Result<i32> {
///     if value < 0 {
///         return Err(Error::InvalidArgument(
///             "value must be non-negative".to_string(),
///         ));
///     }
///     Ok(value)
/// }
///
/// assert!(positive(5).is_ok());
/// assert!(positive(-1).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_detection() {
        let err = Error::ValidationError {
            field: "color-primary".to_string(),
            reason: "lightness out of range".to_string(),
        };
        assert!(err.is_validation_error());
        assert!(!err.is_config_error());
    }

    #[test]
    fn test_config_error_detection() {
        let err = Error::ConfigError {
            message: "missing seed color".to_string(),
        };
        assert!(err.is_config_error());
        assert!(!err.is_io_error());
    }

    #[test]
    fn test_io_error_detection() {
        let err = Error::IoError {
            path: std::path::PathBuf::from("/tmp/missing"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.is_io_error());
        assert!(!err.is_render_error());
    }

    #[test]
    fn test_render_error_detection() {
        let err = Error::RenderError {
            message: "template not registered".to_string(),
            source: None,
        };
        assert!(err.is_render_error());
        assert!(!err.is_serialization_error());
    }

    #[test]
    fn test_error_display() {
        let err = Error::ValidationError {
            field: "spacing-md".to_string(),
            reason: "expected rem or px".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("Validation error"));
        assert!(display.contains("spacing-md"));
    }

    #[test]
    fn test_result_alias() {
        fn returns_err() -> Result<i32> {
            Err(Error::InvalidArgument("nope".to_string()))
        }

        assert!(returns_err().is_err());
    }
}
