//! Performance heuristics over frontend source trees.
//!
//! Scans component source files for patterns with a known runtime or
//! bundle-size cost. Heuristic, line-oriented matching: the goal is a
//! short list of concrete findings, not a profiler replacement.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::types::{PerfCategory, PerfIssue, PerfReport, Severity};

/// Extensions of files the scanner inspects.
const CODE_EXTENSIONS: [&str; 6] = ["js", "jsx", "ts", "tsx", "vue", "svelte"];

/// Directory names skipped during the walk.
pub const DEFAULT_EXCLUDES: [&str; 3] = ["node_modules", "dist", "build"];

/// Line counts above which a file is flagged as oversized / unsplit.
const LARGE_COMPONENT_LINES: usize = 300;
const CODE_SPLIT_LINES: usize = 200;

static DEEP_RELATIVE_IMPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"from\s+['"]\.\./\.\./\.\."#).expect("valid regex"));
static WHOLE_LIBRARY_IMPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"from\s+['"](lodash|moment)['"]"#).expect("valid regex"));
static UNLAZY_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<img[^>]*src=.*\.(png|jpg|jpeg)").expect("valid regex"));

/// Scans a directory tree and reports performance findings.
///
/// Only files with a recognized frontend extension are inspected, and
/// any path containing one of `excludes` as a directory name is skipped.
/// Unreadable files produce a warning finding rather than aborting the
/// scan.
pub fn check_directory(directory: &Path, excludes: &[String]) -> PerfReport {
    let mut issues = Vec::new();
    let mut total_files = 0;

    let walker = WalkDir::new(directory).into_iter().filter_entry(|entry| {
        let name = entry.file_name().to_string_lossy();
        !(entry.file_type().is_dir() && excludes.iter().any(|excluded| excluded == &*name))
    });

    for entry in walker.filter_map(std::result::Result::ok) {
        if !entry.file_type().is_file() || !has_code_extension(entry.path()) {
            continue;
        }

        total_files += 1;
        match std::fs::read_to_string(entry.path()) {
            Ok(content) => check_file(entry.path(), &content, &mut issues),
            Err(e) => {
                warn!(path = %entry.path().display(), error = %e, "skipping unreadable file");
                issues.push(PerfIssue {
                    severity: Severity::Warning,
                    category: PerfCategory::Code,
                    file: entry.path().to_path_buf(),
                    line: 0,
                    message: format!("file could not be analyzed: {e}"),
                    suggestion: "check the file encoding".to_string(),
                });
            }
        }
    }

    debug!(total_files, issues = issues.len(), "performance scan finished");

    PerfReport {
        total_files,
        issues,
    }
}

fn has_code_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CODE_EXTENSIONS.contains(&ext))
}

fn check_file(path: &Path, content: &str, issues: &mut Vec<PerfIssue>) {
    let lines: Vec<&str> = content.lines().collect();

    check_imports(path, &lines, issues);
    check_component_size(path, &lines, issues);
    check_list_keys(path, &lines, issues);
    check_inline_styles(path, &lines, issues);
    check_memoization(path, &lines, issues);
    check_image_loading(path, &lines, issues);
    check_code_splitting(path, &lines, issues);
}

fn perf_issue(
    severity: Severity,
    category: PerfCategory,
    path: &Path,
    line: usize,
    message: String,
    suggestion: &str,
) -> PerfIssue {
    PerfIssue {
        severity,
        category,
        file: path.to_path_buf(),
        line,
        message,
        suggestion: suggestion.to_string(),
    }
}

/// Whole-library imports of lodash/moment, and deep relative paths.
fn check_imports(path: &Path, lines: &[&str], issues: &mut Vec<PerfIssue>) {
    for (index, line) in lines.iter().enumerate() {
        if let Some(captures) = WHOLE_LIBRARY_IMPORT.captures(line) {
            let library = &captures[1];
            issues.push(perf_issue(
                Severity::Warning,
                PerfCategory::Bundle,
                path,
                index + 1,
                format!("importing all of {library} inflates the bundle"),
                "import the specific module, e.g. import debounce from 'lodash/debounce'",
            ));
        }

        if DEEP_RELATIVE_IMPORT.is_match(line) {
            issues.push(perf_issue(
                Severity::Info,
                PerfCategory::Code,
                path,
                index + 1,
                "deeply nested relative import".to_string(),
                "use a path alias or absolute import",
            ));
        }
    }
}

fn check_component_size(path: &Path, lines: &[&str], issues: &mut Vec<PerfIssue>) {
    if lines.len() > LARGE_COMPONENT_LINES {
        issues.push(perf_issue(
            Severity::Warning,
            PerfCategory::Code,
            path,
            1,
            format!("component is large ({} lines)", lines.len()),
            "split into smaller subcomponents",
        ));
    }
}

/// `.map(` in a render without a `key` prop on the same line.
fn check_list_keys(path: &Path, lines: &[&str], issues: &mut Vec<PerfIssue>) {
    for (index, line) in lines.iter().enumerate() {
        if line.contains(".map(") && !line.contains("key=") && !line.contains("key:") {
            issues.push(perf_issue(
                Severity::Critical,
                PerfCategory::Rendering,
                path,
                index + 1,
                "list rendering may be missing a key attribute".to_string(),
                "give each list item a stable, unique key",
            ));
        }
    }
}

/// More than three inline `style={{` uses in one file.
fn check_inline_styles(path: &Path, lines: &[&str], issues: &mut Vec<PerfIssue>) {
    let mut count = 0;
    for (index, line) in lines.iter().enumerate() {
        if line.contains("style={{") {
            count += 1;
            if count > 3 {
                issues.push(perf_issue(
                    Severity::Info,
                    PerfCategory::Rendering,
                    path,
                    index + 1,
                    "inline styles are used in many places".to_string(),
                    "use CSS classes or styled-components",
                ));
                return;
            }
        }
    }
}

/// `useCallback`/`useMemo` without wrapping the component in `memo`.
fn check_memoization(path: &Path, lines: &[&str], issues: &mut Vec<PerfIssue>) {
    let has_hook_memoization = lines
        .iter()
        .any(|line| line.contains("useCallback") || line.contains("useMemo"));
    let has_component_memo = lines
        .iter()
        .any(|line| line.contains("React.memo") || line.contains("memo("));

    if has_hook_memoization && !has_component_memo {
        issues.push(perf_issue(
            Severity::Info,
            PerfCategory::Rendering,
            path,
            1,
            "useCallback/useMemo is used but the component is not memoized".to_string(),
            "wrap the component in React.memo to avoid needless re-renders",
        ));
    }
}

/// Raster images referenced without a `loading` attribute.
fn check_image_loading(path: &Path, lines: &[&str], issues: &mut Vec<PerfIssue>) {
    for (index, line) in lines.iter().enumerate() {
        if UNLAZY_IMAGE.is_match(line) && !line.contains("loading=") {
            issues.push(perf_issue(
                Severity::Warning,
                PerfCategory::Network,
                path,
                index + 1,
                "image may be missing lazy loading".to_string(),
                "add loading=\"lazy\" to defer offscreen images",
            ));
        }
    }
}

/// Long files with no dynamic `import(` anywhere.
fn check_code_splitting(path: &Path, lines: &[&str], issues: &mut Vec<PerfIssue>) {
    let has_dynamic_import = lines.iter().any(|line| line.contains("import("));

    if !has_dynamic_import && lines.len() > CODE_SPLIT_LINES {
        issues.push(perf_issue(
            Severity::Info,
            PerfCategory::Bundle,
            path,
            1,
            "file may be missing code splitting".to_string(),
            "use dynamic import() for route- or component-level splitting",
        ));
    }
}
