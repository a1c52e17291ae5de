//! Submission normalization for pattern-based grading.
//!
//! Submitted markup and scripts are compared against regular expressions, so
//! the text is first flattened into a single lowercase line. Formatting
//! choices (indentation, line breaks, casing) must never decide whether an
//! exercise passes.

/// Normalize submitted code before it is matched against a predicate.
///
/// Applies, in order:
/// 1. Lowercase
/// 2. Remove line feeds, carriage returns and tabs
/// 3. Collapse runs of remaining whitespace into a single space
/// 4. Trim
///
/// Removing line breaks (rather than turning them into spaces) joins the
/// last token of a line to the first token of the next, which is what the
/// exercise patterns are written against.
pub fn normalize_submission(code: &str) -> String {
    code.to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '\n' | '\r' | '\t'))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
