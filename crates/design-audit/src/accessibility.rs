//! Accessibility checks over HTML text.
//!
//! Line-oriented regex scanning, not a full HTML parse: each check looks
//! for a pattern that is almost always a real problem (an `img` without
//! `alt`, an empty `button`, a low-contrast inline color pair) and
//! reports it with the source line where possible. False negatives are
//! acceptable; false positives should be rare.

use design_core::color::{AA_NORMAL, contrast_ratio_str};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::types::{A11yCategory, A11yIssue, A11yReport, Severity};

static IMG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<img[^>]*>").expect("valid regex"));
static ALT_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\balt\s*=").expect("valid regex"));
static EMPTY_ALT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\balt\s*=\s*["']["']"#).expect("valid regex"));
static DECORATIVE_HINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(decorative|bg|background)\b").expect("valid regex"));

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<a[^>]*>(.*?)</a>").expect("valid regex"));
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));
static NON_DESCRIPTIVE_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(click|here|click here|more|read more)$").expect("valid regex"));
static URL_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").expect("valid regex"));

static INPUT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<input[^>]*>").expect("valid regex"));
static ID_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\bid\s*=\s*["'][^"']+["']"#).expect("valid regex"));
static ARIA_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\baria-label\s*=").expect("valid regex"));
static ARIA_LABELLEDBY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\baria-labelledby\s*=").expect("valid regex"));
static REQUIRED_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\brequired\b").expect("valid regex"));
static ARIA_REQUIRED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\baria-required\s*=\s*["']?true["']?"#).expect("valid regex")
});

// The regex crate has no backreferences, so the closing level is
// captured separately and compared in code.
static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h([1-6])[^>]*>(.*?)</h([1-6])>").expect("valid regex"));

static BUTTON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<button[^>]*>(.*?)</button>").expect("valid regex"));
static ROLE_BUTTON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<(div|a)[^>]*role\s*=\s*["']?button["']?[^>]*>"#).expect("valid regex")
});

static INLINE_COLOR_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"color:\s*oklch\([^)]+\);\s*background(?:-color)?:\s*oklch\([^)]+\);")
        .expect("valid regex")
});
static OKLCH_ARGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"oklch\(([^)]+)\)").expect("valid regex"));

/// Runs all accessibility checks over an HTML document.
///
/// # Examples
///
/// ```
/// use design_audit::accessibility::check_html;
///
/// let report = check_html(r#"<img src="hero.png"><button></button>"#);
/// assert!(!report.passes());
/// assert_eq!(report.critical_count(), 2);
/// ```
#[must_use]
pub fn check_html(html: &str) -> A11yReport {
    let checks: [fn(&str) -> Vec<A11yIssue>; 6] = [
        check_images,
        check_links,
        check_forms,
        check_headings,
        check_buttons,
        check_contrast,
    ];

    let mut issues = Vec::new();
    let mut passed = 0;

    for check in checks {
        let found = check(html);
        if found.is_empty() {
            passed += 1;
        }
        issues.extend(found);
    }

    debug!(issues = issues.len(), passed, "accessibility check finished");

    A11yReport {
        total_checks: checks.len(),
        passed,
        issues,
    }
}

fn issue(
    severity: Severity,
    category: A11yCategory,
    element: &str,
    message: String,
    suggestion: &str,
    line: Option<usize>,
) -> A11yIssue {
    A11yIssue {
        severity,
        category,
        element: element.to_string(),
        message,
        suggestion: Some(suggestion.to_string()),
        line,
    }
}

/// Images need an `alt` attribute; an empty one is only acceptable on
/// images marked decorative.
fn check_images(html: &str) -> Vec<A11yIssue> {
    let mut issues = Vec::new();

    for (line_no, line) in html.lines().enumerate() {
        for tag_match in IMG_TAG.find_iter(line) {
            let img_tag = tag_match.as_str();
            if !ALT_ATTR.is_match(img_tag) {
                issues.push(issue(
                    Severity::Critical,
                    A11yCategory::Aria,
                    "img",
                    "image is missing an alt attribute".to_string(),
                    "add descriptive alt text, or alt=\"\" for decorative images",
                    Some(line_no + 1),
                ));
            } else if EMPTY_ALT.is_match(img_tag) && !DECORATIVE_HINT.is_match(img_tag) {
                issues.push(issue(
                    Severity::Moderate,
                    A11yCategory::Aria,
                    "img",
                    "image has an empty alt attribute but may convey information".to_string(),
                    "add descriptive alt text if the image carries meaning",
                    Some(line_no + 1),
                ));
            }
        }
    }

    issues
}

/// Link text must exist and describe the target.
fn check_links(html: &str) -> Vec<A11yIssue> {
    let mut issues = Vec::new();

    for (line_no, line) in html.lines().enumerate() {
        for captures in LINK.captures_iter(line) {
            let text = TAG.replace_all(&captures[1], "");
            let text = text.trim();

            if text.is_empty() {
                issues.push(issue(
                    Severity::Serious,
                    A11yCategory::Semantic,
                    "a",
                    "link has no text content".to_string(),
                    "add descriptive link text or an aria-label",
                    Some(line_no + 1),
                ));
            } else if NON_DESCRIPTIVE_TEXT.is_match(text) {
                issues.push(issue(
                    Severity::Moderate,
                    A11yCategory::Semantic,
                    "a",
                    "link text is not descriptive".to_string(),
                    "describe the target, e.g. \"view the user guide\" instead of \"click here\"",
                    Some(line_no + 1),
                ));
            } else if URL_TEXT.is_match(text) {
                issues.push(issue(
                    Severity::Minor,
                    A11yCategory::Semantic,
                    "a",
                    "link text is a raw URL".to_string(),
                    "use a human-readable description instead of the URL",
                    Some(line_no + 1),
                ));
            }
        }
    }

    issues
}

/// Labeled and announced form fields.
fn check_forms(html: &str) -> Vec<A11yIssue> {
    let mut issues = Vec::new();

    for (line_no, line) in html.lines().enumerate() {
        for tag_match in INPUT_TAG.find_iter(line) {
            let input_tag = tag_match.as_str();

            let has_id = ID_ATTR.is_match(input_tag);
            let has_aria = ARIA_LABEL.is_match(input_tag) || ARIA_LABELLEDBY.is_match(input_tag);
            if has_id && !has_aria {
                issues.push(issue(
                    Severity::Serious,
                    A11yCategory::Aria,
                    "input",
                    "input may be missing an associated label".to_string(),
                    "associate a label via for/id, or add an aria-label",
                    Some(line_no + 1),
                ));
            }

            if REQUIRED_ATTR.is_match(input_tag) && !ARIA_REQUIRED.is_match(input_tag) {
                issues.push(issue(
                    Severity::Moderate,
                    A11yCategory::Aria,
                    "input",
                    "required field is missing aria-required".to_string(),
                    "add aria-required=\"true\" for screen readers",
                    Some(line_no + 1),
                ));
            }
        }
    }

    issues
}

/// Headings must not skip levels and must have text.
fn check_headings(html: &str) -> Vec<A11yIssue> {
    let mut issues = Vec::new();
    let mut previous_level = 0u32;

    for captures in HEADING.captures_iter(html) {
        let open: u32 = captures[1].parse().unwrap_or(0);
        let close: u32 = captures[3].parse().unwrap_or(0);
        if open != close {
            continue;
        }

        if previous_level > 0 && open > previous_level + 1 {
            issues.push(issue(
                Severity::Moderate,
                A11yCategory::Semantic,
                &format!("h{open}"),
                format!("heading level skips from h{previous_level} to h{open}"),
                "increase heading levels one step at a time",
                None,
            ));
        }

        let text = TAG.replace_all(&captures[2], "");
        if text.trim().is_empty() {
            issues.push(issue(
                Severity::Serious,
                A11yCategory::Semantic,
                &format!("h{open}"),
                "heading has no text content".to_string(),
                "add descriptive heading text",
                None,
            ));
        }

        previous_level = open;
    }

    issues
}

/// Buttons need an accessible name, and button semantics belong on
/// `<button>`.
fn check_buttons(html: &str) -> Vec<A11yIssue> {
    let mut issues = Vec::new();

    for (line_no, line) in html.lines().enumerate() {
        for captures in BUTTON.captures_iter(line) {
            let text = TAG.replace_all(&captures[1], "");
            if text.trim().is_empty() {
                issues.push(issue(
                    Severity::Critical,
                    A11yCategory::Aria,
                    "button",
                    "button has no text content".to_string(),
                    "add button text or an aria-label",
                    Some(line_no + 1),
                ));
            }
        }

        for captures in ROLE_BUTTON.captures_iter(line) {
            issues.push(issue(
                Severity::Serious,
                A11yCategory::Semantic,
                &captures[1].to_lowercase(),
                "non-button element is used as a button".to_string(),
                "prefer <button>, or ensure the role, keyboard handlers, and aria attributes are complete",
                Some(line_no + 1),
            ));
        }
    }

    issues
}

/// Inline `color` next to `background(-color)` with OKLCH values is the
/// one place contrast is checkable without a full CSS cascade.
/// Unparseable pairs rate 1.0 and therefore fail.
fn check_contrast(html: &str) -> Vec<A11yIssue> {
    let mut issues = Vec::new();

    for pair_match in INLINE_COLOR_PAIR.find_iter(html) {
        let colors: Vec<String> = OKLCH_ARGS
            .captures_iter(pair_match.as_str())
            .map(|captures| format!("oklch({})", &captures[1]))
            .collect();

        if let [foreground, background, ..] = colors.as_slice() {
            let ratio = contrast_ratio_str(foreground, background);
            if ratio < AA_NORMAL {
                issues.push(issue(
                    Severity::Critical,
                    A11yCategory::Contrast,
                    "css",
                    format!("insufficient color contrast: {ratio:.2}:1 (requires {AA_NORMAL}:1)"),
                    "adjust the foreground or background color to raise the contrast",
                    None,
                ));
            }
        }
    }

    issues
}
