//! Issue and report types shared by the audit checkers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Severity of a finding, most severe first.
///
/// The accessibility checker uses `Critical`/`Serious`/`Moderate`/`Minor`;
/// the performance checker uses `Critical`/`Warning`/`Info`. The derived
/// ordering follows declaration order, so `Critical` sorts before
/// everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks users or carries a measurable user-facing cost.
    Critical,
    /// Major barrier, workarounds exist.
    Serious,
    /// Likely cost, worth fixing.
    Warning,
    /// Degrades the experience.
    Moderate,
    /// Cosmetic or best-practice deviation.
    Minor,
    /// Advisory only.
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Critical => "critical",
            Self::Serious => "serious",
            Self::Warning => "warning",
            Self::Moderate => "moderate",
            Self::Minor => "minor",
            Self::Info => "info",
        };
        f.write_str(label)
    }
}

/// Classification of an accessibility finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum A11yCategory {
    /// Foreground/background contrast below the WCAG threshold.
    Contrast,
    /// Missing or malformed ARIA annotations.
    Aria,
    /// Non-semantic markup where a semantic element exists.
    Semantic,
}

impl fmt::Display for A11yCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Contrast => "contrast",
            Self::Aria => "aria",
            Self::Semantic => "semantic",
        };
        f.write_str(label)
    }
}

/// A single accessibility finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct A11yIssue {
    /// How severe the finding is.
    pub severity: Severity,
    /// What kind of problem it is.
    pub category: A11yCategory,
    /// The offending element name, e.g. `img` or `h3`.
    pub element: String,
    /// Explanation of the problem.
    pub message: String,
    /// How to fix it, when a concrete fix is known.
    pub suggestion: Option<String>,
    /// 1-based source line, when the finding is line-addressable.
    pub line: Option<usize>,
}

/// Aggregated result of an accessibility check run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct A11yReport {
    /// Number of check groups executed.
    pub total_checks: usize,
    /// Number of check groups that found nothing.
    pub passed: usize,
    /// All findings, in document order per check.
    pub issues: Vec<A11yIssue>,
}

impl A11yReport {
    /// Number of critical findings.
    #[must_use]
    pub fn critical_count(&self) -> usize {
        self.count(Severity::Critical)
    }

    /// Number of serious findings.
    #[must_use]
    pub fn serious_count(&self) -> usize {
        self.count(Severity::Serious)
    }

    /// A document passes when it has no critical findings.
    #[must_use]
    pub fn passes(&self) -> bool {
        self.critical_count() == 0
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == severity)
            .count()
    }
}

/// Classification of a performance finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerfCategory {
    /// Bundle size and code splitting.
    Bundle,
    /// Render efficiency.
    Rendering,
    /// Asset loading.
    Network,
    /// Code organization.
    Code,
}

impl fmt::Display for PerfCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Bundle => "bundle",
            Self::Rendering => "rendering",
            Self::Network => "network",
            Self::Code => "code",
        };
        f.write_str(label)
    }
}

/// A single performance finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerfIssue {
    /// How costly the finding is.
    pub severity: Severity,
    /// What kind of cost it is.
    pub category: PerfCategory,
    /// File the finding was made in.
    pub file: PathBuf,
    /// 1-based line of the finding; 1 for whole-file findings.
    pub line: usize,
    /// Explanation of the problem.
    pub message: String,
    /// How to fix it.
    pub suggestion: String,
}

/// Aggregated result of a performance scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerfReport {
    /// Number of source files scanned.
    pub total_files: usize,
    /// All findings across the scanned files.
    pub issues: Vec<PerfIssue>,
}

impl PerfReport {
    /// Number of critical findings.
    #[must_use]
    pub fn critical_count(&self) -> usize {
        self.count(Severity::Critical)
    }

    /// Number of warning findings.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// A scan passes when it has no critical findings.
    #[must_use]
    pub fn passes(&self) -> bool {
        self.critical_count() == 0
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == severity)
            .count()
    }
}

/// A single token-table finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenIssue {
    /// The offending token name, or `category:<name>` for a missing
    /// required category.
    pub token_name: String,
    /// Explanation of the problem.
    pub message: String,
    /// How to fix it, when a concrete fix is known.
    pub suggestion: Option<String>,
}

/// Aggregated result of a token-table validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenReport {
    /// Number of tokens examined.
    pub total_tokens: usize,
    /// Findings that make the table invalid.
    pub errors: Vec<TokenIssue>,
    /// Findings that are advisory unless strict mode is on.
    pub warnings: Vec<TokenIssue>,
}

impl TokenReport {
    /// A table is valid when it has no errors; in strict mode warnings
    /// count as errors too.
    #[must_use]
    pub fn is_valid(&self, strict: bool) -> bool {
        self.errors.is_empty() && (!strict || self.warnings.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a11y_issue(severity: Severity) -> A11yIssue {
        A11yIssue {
            severity,
            category: A11yCategory::Aria,
            element: "img".to_string(),
            message: "missing alt attribute".to_string(),
            suggestion: None,
            line: Some(3),
        }
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical < Severity::Serious);
        assert!(Severity::Serious < Severity::Warning);
        assert!(Severity::Minor < Severity::Info);
    }

    #[test]
    fn test_a11y_report_passes_without_criticals() {
        let report = A11yReport {
            total_checks: 6,
            passed: 5,
            issues: vec![a11y_issue(Severity::Serious)],
        };
        assert!(report.passes());
        assert_eq!(report.serious_count(), 1);

        let failing = A11yReport {
            total_checks: 6,
            passed: 5,
            issues: vec![a11y_issue(Severity::Critical)],
        };
        assert!(!failing.passes());
    }

    #[test]
    fn test_perf_report_counts() {
        let report = PerfReport {
            total_files: 2,
            issues: vec![
                PerfIssue {
                    severity: Severity::Warning,
                    category: PerfCategory::Bundle,
                    file: PathBuf::from("src/app.tsx"),
                    line: 1,
                    message: "whole-library import".to_string(),
                    suggestion: "import the specific module".to_string(),
                },
                PerfIssue {
                    severity: Severity::Critical,
                    category: PerfCategory::Rendering,
                    file: PathBuf::from("src/list.tsx"),
                    line: 14,
                    message: "list rendering without key".to_string(),
                    suggestion: "add a key attribute".to_string(),
                },
            ],
        };
        assert_eq!(report.critical_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert!(!report.passes());
    }

    #[test]
    fn test_token_report_strict_mode() {
        let report = TokenReport {
            total_tokens: 4,
            errors: vec![],
            warnings: vec![TokenIssue {
                token_name: "spacing-md".to_string(),
                message: "unexpected unit".to_string(),
                suggestion: None,
            }],
        };
        assert!(report.is_valid(false));
        assert!(!report.is_valid(true));
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Severity::Critical).unwrap(),
            "\"critical\""
        );
        assert_eq!(serde_json::to_string(&Severity::Info).unwrap(), "\"info\"");
    }
}
