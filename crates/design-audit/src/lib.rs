//! Accessibility, performance, and token audits for frontend projects.
//!
//! Three independent checkers share one issue/report vocabulary:
//!
//! - [`accessibility::check_html`] scans HTML text for WCAG problems,
//!   including OKLCH contrast pairs evaluated through `design_core`.
//! - [`performance::check_directory`] walks a source tree and flags
//!   patterns with a known bundle or rendering cost.
//! - [`tokens::validate_file`] validates a JSON design-token table.
//!
//! Each checker returns a serializable report; rendering and exit-code
//! policy belong to the caller.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod accessibility;
pub mod performance;
pub mod tokens;
pub mod types;

pub use types::{
    A11yCategory, A11yIssue, A11yReport, PerfCategory, PerfIssue, PerfReport, Severity,
    TokenIssue, TokenReport,
};
