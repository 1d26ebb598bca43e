use std::sync::LazyLock;

use regex::Regex;

static PROJECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*(.+?)[ \t]+Account Details").unwrap());

/// One non-blank, non-divider line of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub raw: &'a str,
    pub text: &'a str,
}

/// Split a report into logical lines, dropping blanks and `====` / `----` rules.
pub fn scan_lines(report: &str) -> Vec<Line<'_>> {
    report
        .lines()
        .filter_map(|raw| {
            let text = raw.trim();
            if text.is_empty() || is_divider(text) {
                None
            } else {
                Some(Line { raw, text })
            }
        })
        .collect()
}

fn is_divider(text: &str) -> bool {
    text.chars().all(|c| c == '=') || text.chars().all(|c| c == '-')
}

/// `"<name> Account Details"` at the start of a line names the project.
pub fn project_name(report: &str) -> String {
    PROJECT_RE
        .captures(report)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_default()
}
