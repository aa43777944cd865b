//! Path helpers.

use std::path::{Path, PathBuf};

/// Expands a leading `~` to the user's home directory.
///
/// Paths that do not start with `~`, or hosts without a home directory,
/// get the path back unchanged.
///
/// # Example
///
/// ```
/// use syllabus_core::util::paths::expand_tilde;
///
/// assert_eq!(expand_tilde("/srv/content"), std::path::PathBuf::from("/srv/content"));
/// ```
pub fn expand_tilde<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde_absolute_unchanged() {
        assert_eq!(expand_tilde("/tmp/content"), PathBuf::from("/tmp/content"));
    }

    #[test]
    fn test_expand_tilde_relative_unchanged() {
        assert_eq!(expand_tilde("content/tutorials"), PathBuf::from("content/tutorials"));
    }

    #[test]
    fn test_expand_tilde_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/tutorials"), home.join("tutorials"));
        }
    }
}
