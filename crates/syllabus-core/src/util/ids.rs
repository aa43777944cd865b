//! Slug derivation.
//!
//! A content slug is the file name with its extension stripped, taken
//! verbatim (no case folding or character replacement).

use std::path::Path;

/// Compute a slug from a file path's stem.
///
/// Returns `None` if the path has no file stem or the stem is not valid
/// UTF-8.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use syllabus_core::util::ids::slug_from_path;
///
/// assert_eq!(
///     slug_from_path(Path::new("/content/Beginner/intro-to-rag.md")),
///     Some("intro-to-rag".to_string())
/// );
/// assert_eq!(slug_from_path(Path::new("/")), None);
/// ```
pub fn slug_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(String::from)
}
