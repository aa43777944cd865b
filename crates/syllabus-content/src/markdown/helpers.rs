//! Content extraction helper utilities.

/// Split a comma-separated list into trimmed, non-empty strings.
///
/// Only commas separate items; phrases such as "question and answer" stay
/// whole.
///
/// # Example
///
/// ```rust
/// use syllabus_content::markdown::helpers::split_comma_list;
///
/// assert_eq!(split_comma_list("a, b , c"), vec!["a", "b", "c"]);
/// assert!(split_comma_list("  ").is_empty());
/// ```
pub fn split_comma_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
