//! Structured load issues.
//!
//! A load never fails as a whole. Every directory or file that could not be
//! turned into a record is described by a [`LoadIssue`] in the
//! [`LoadReport`] returned next to the collection.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// What went wrong with one path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    /// A difficulty-level directory does not exist.
    MissingDirectory,
    /// A difficulty-level directory exists but could not be listed.
    UnreadableDirectory {
        /// Underlying error message.
        error: String,
    },
    /// A content file could not be read as UTF-8 text.
    UnreadableFile {
        /// Underlying error message.
        error: String,
    },
    /// A content file name has no usable stem.
    InvalidFileName,
    /// A content file's header could not be parsed.
    InvalidHeader {
        /// Underlying error message.
        error: String,
    },
    /// A content file's slug was already taken by an earlier file.
    DuplicateSlug {
        /// The contested slug.
        slug: String,
    },
}

/// One skipped directory or file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadIssue {
    /// Directory or file the issue is about.
    pub path: PathBuf,
    /// Issue details.
    #[serde(flatten)]
    pub kind: IssueKind,
}

impl LoadIssue {
    /// Create an issue for `path`.
    pub fn new(path: impl Into<PathBuf>, kind: IssueKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Log level the issue is reported at.
    ///
    /// Missing directories and duplicate slugs are expected in a growing
    /// content tree and log as warnings; everything else is an error.
    pub fn level(&self) -> log::Level {
        match self.kind {
            IssueKind::MissingDirectory | IssueKind::DuplicateSlug { .. } => log::Level::Warn,
            _ => log::Level::Error,
        }
    }

    /// Whether the issue cost a content file (as opposed to a directory).
    pub fn is_file_issue(&self) -> bool {
        !matches!(
            self.kind,
            IssueKind::MissingDirectory | IssueKind::UnreadableDirectory { .. }
        )
    }

    /// Emit the issue through `log` at [`level`](Self::level).
    pub fn log(&self) {
        log::log!(self.level(), "{self}");
    }
}

impl fmt::Display for LoadIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path.display();
        match &self.kind {
            IssueKind::MissingDirectory => write!(f, "Content directory not found: {path}"),
            IssueKind::UnreadableDirectory { error } => {
                write!(f, "Failed to list {path}: {error}")
            }
            IssueKind::UnreadableFile { error } => write!(f, "Failed to read {path}: {error}"),
            IssueKind::InvalidFileName => write!(f, "Skipping {path}: no usable file name"),
            IssueKind::InvalidHeader { error } => {
                write!(f, "Failed to parse header of {path}: {error}")
            }
            IssueKind::DuplicateSlug { slug } => {
                write!(f, "Skipping {path}: slug '{slug}' already loaded")
            }
        }
    }
}

/// Outcome of one catalog load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Candidate files found across all level directories.
    pub files_scanned: usize,
    /// Records that made it into the collection.
    pub records_loaded: usize,
    /// Everything that was skipped, in discovery order.
    pub issues: Vec<LoadIssue>,
}

impl LoadReport {
    /// Record an issue.
    pub fn push(&mut self, issue: LoadIssue) {
        self.issues.push(issue);
    }

    /// True when nothing was skipped.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Number of content files that were skipped.
    pub fn files_skipped(&self) -> usize {
        self.issues.iter().filter(|i| i.is_file_issue()).count()
    }

    /// Issues concerning `path`.
    pub fn issues_for<'a>(&'a self, path: &'a Path) -> impl Iterator<Item = &'a LoadIssue> + 'a {
        self.issues.iter().filter(move |i| i.path == path)
    }
}
