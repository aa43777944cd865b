//! Discovery of candidate content files.
//!
//! Each difficulty level maps to one subdirectory of the content root. A
//! level whose directory is missing or unreadable contributes no files and
//! an issue instead; the other levels are scanned as usual.

use std::path::PathBuf;

use syllabus_core::{exists, list_files_with_extensions, ConfigProvider};

use crate::difficulty::Difficulty;
use crate::report::{IssueKind, LoadIssue};

/// Candidate files found for one level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelFiles {
    /// Level the directory stands for.
    pub level: Difficulty,
    /// The level's directory.
    pub dir: PathBuf,
    /// Matching files, sorted by path.
    pub files: Vec<PathBuf>,
}

/// Result of scanning every level.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Levels that could be listed, in [`Difficulty::ALL`] order.
    pub levels: Vec<LevelFiles>,
    /// Directories that could not be listed.
    pub issues: Vec<LoadIssue>,
}

impl ScanResult {
    /// Total number of candidate files.
    pub fn file_count(&self) -> usize {
        self.levels.iter().map(|l| l.files.len()).sum()
    }

    /// Flatten into `(level, path)` pairs in scan order.
    pub fn into_jobs(self) -> impl Iterator<Item = (Difficulty, PathBuf)> {
        self.levels.into_iter().flat_map(|l| {
            let level = l.level;
            l.files.into_iter().map(move |path| (level, path))
        })
    }
}

/// Scan the level directories of `config` for files with `extensions`.
///
/// Only files directly inside each level directory are considered. Level
/// order is [`Difficulty::ALL`]; within a level files are sorted by path.
pub async fn scan_levels<C: ConfigProvider>(config: &C, extensions: &[String]) -> ScanResult {
    let mut result = ScanResult::default();

    for level in Difficulty::ALL {
        let dir = match config.content_path(level.dir_name()) {
            Ok(dir) => dir,
            Err(e) => {
                let root = config.base_path().unwrap_or_default();
                result.issues.push(LoadIssue::new(
                    root.join(level.dir_name()),
                    IssueKind::UnreadableDirectory {
                        error: e.to_string(),
                    },
                ));
                continue;
            }
        };

        if !exists(&dir).await {
            result
                .issues
                .push(LoadIssue::new(dir, IssueKind::MissingDirectory));
            continue;
        }

        match list_files_with_extensions(&dir, extensions).await {
            Ok(files) => {
                log::debug!("Found {} {level} file(s) in {}", files.len(), dir.display());
                result.levels.push(LevelFiles { level, dir, files });
            }
            Err(e) => {
                result.issues.push(LoadIssue::new(
                    dir,
                    IssueKind::UnreadableDirectory {
                        error: e.to_string(),
                    },
                ));
            }
        }
    }

    result
}
