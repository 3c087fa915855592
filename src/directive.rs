//! Problem directives and problem-ID inference
//!
//! A directive is a first-line comment such as `// acmoj: 1234` that ties a
//! source file to a judge problem. When a file has no directive, the file
//! name is searched for a problem number instead.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static CONTENT_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?://|#)\s*acmoj:\s*(\d+)").expect("hardcoded directive pattern is valid")
});

static FILE_NAME_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[Pp]?(\d+)|(\d+)_").expect("hardcoded file name pattern is valid")
});

/// Format a directive line (without trailing newline)
pub fn format_directive(comment_token: &str, problem_id: u64) -> String {
    format!("{comment_token} acmoj: {problem_id}")
}

/// Parse user input as a problem or submission ID
///
/// Accepts a non-empty run of ASCII digits denoting a positive integer.
pub fn parse_numeric_id(input: &str) -> Option<u64> {
    let input = input.trim();
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    input.parse::<u64>().ok().filter(|id| *id > 0)
}

/// Problem ID from a directive on the first line of `text`
pub fn infer_from_content(text: &str) -> Option<u64> {
    let first_line = text.lines().next()?.trim();
    let caps = CONTENT_DIRECTIVE.captures(first_line)?;
    caps.get(1).and_then(|m| parse_numeric_id(m.as_str()))
}

/// Problem ID from a file name like `P42_sol.py` or `1234.cpp`
pub fn infer_from_file_name(file_name: &str) -> Option<u64> {
    let caps = FILE_NAME_ID.captures(file_name)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .and_then(|m| parse_numeric_id(m.as_str()))
}

/// Infer the problem a file belongs to
///
/// A first-line directive takes precedence over the file name.
pub fn infer_problem_id(text: &str, file_name: &str) -> Option<u64> {
    if let Some(id) = infer_from_content(text) {
        debug!("Problem {id} inferred from directive");
        return Some(id);
    }

    let id = infer_from_file_name(file_name);
    if let Some(id) = id {
        debug!("Problem {id} inferred from file name {file_name}");
    }
    id
}
