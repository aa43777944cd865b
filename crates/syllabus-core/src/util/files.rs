//! Async file utilities.
//!
//! Provides the directory listing and reading operations used by the
//! scanner and the catalog.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::{Error, Result};

/// Check whether `path` has one of `extensions` (case-insensitive, no dots).
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use syllabus_core::util::files::has_extension;
///
/// let exts = vec!["md".to_string()];
/// assert!(has_extension(Path::new("intro.MD"), &exts));
/// assert!(!has_extension(Path::new("intro.txt"), &exts));
/// ```
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// List the regular files directly inside `dir` that have one of
/// `extensions`.
///
/// Listing is not recursive. The result is sorted for deterministic
/// ordering.
///
/// # Errors
///
/// Returns [`Error::IoWithPath`] if the directory cannot be read. Entries
/// whose metadata cannot be read are logged and skipped.
pub async fn list_files_with_extensions(
    dir: &Path,
    extensions: &[String],
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| Error::io_with_path(e, dir))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| Error::io_with_path(e, dir))?
    {
        let path = entry.path();

        let file_type = match entry.file_type().await {
            Ok(t) => t,
            Err(e) => {
                log::warn!("Skipping {}: {e}", path.display());
                continue;
            }
        };

        // Follow symlinks so linked content files are still picked up
        let is_file = if file_type.is_symlink() {
            fs::metadata(&path).await.map(|m| m.is_file()).unwrap_or(false)
        } else {
            file_type.is_file()
        };

        if is_file && has_extension(&path, extensions) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Read a file's contents as a string.
///
/// # Errors
///
/// Returns [`Error::IoWithPath`] on I/O failure or invalid UTF-8.
pub async fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .map_err(|e| Error::io_with_path(e, path))
}

/// Check if a path exists.
pub async fn exists(path: &Path) -> bool {
    fs::try_exists(path).await.unwrap_or(false)
}
