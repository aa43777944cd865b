//! Catalog loading.
//!
//! [`ContentCatalog::load`] runs the whole pipeline: scan the level
//! directories, read and parse each candidate file, drop what fails, and
//! assemble the survivors into a sorted [`Collection`].
//!
//! Files are processed concurrently (up to
//! [`CatalogConfig::concurrency`] at a time) but results are collected in
//! scan order, so the outcome does not depend on I/O timing.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use futures::StreamExt;
use syllabus_core::{read_file, slug_from_path, Result};

use crate::collection::Collection;
use crate::config::CatalogConfig;
use crate::difficulty::Difficulty;
use crate::record::ContentRecord;
use crate::report::{IssueKind, LoadIssue, LoadReport};
use crate::scanner::scan_levels;

/// A loaded collection together with what was skipped while loading it.
#[derive(Debug, Clone, Default)]
pub struct Loaded {
    /// Records that loaded successfully, sorted.
    pub collection: Collection,
    /// Skipped directories and files.
    pub report: LoadReport,
}

/// Loads tutorial content from a content root.
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    config: CatalogConfig,
}

impl ContentCatalog {
    /// Create a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`syllabus_core::Error::Config`] if `config` is invalid.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The catalog's configuration.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Load every record under the content root.
    ///
    /// Never fails: unreadable directories and files, bad headers and
    /// duplicate slugs are skipped, logged and listed in the report. When
    /// two files share a slug the first one in scan order is kept.
    pub async fn load(&self) -> Loaded {
        let root = self.config.content_root();
        log::info!("Loading content from {}", root.display());

        let scan = scan_levels(&self.config, &self.config.extensions).await;

        let mut report = LoadReport {
            files_scanned: scan.file_count(),
            ..LoadReport::default()
        };
        for issue in &scan.issues {
            issue.log();
        }
        report.issues.extend(scan.issues.iter().cloned());

        let outcomes: Vec<(PathBuf, std::result::Result<ContentRecord, IssueKind>)> =
            futures::stream::iter(scan.into_jobs())
                .map(|(level, path)| async move {
                    let outcome = load_file(level, &path).await;
                    (path, outcome)
                })
                .buffered(self.config.concurrency)
                .collect()
                .await;

        let mut seen = HashSet::new();
        let mut records = Vec::with_capacity(outcomes.len());
        for (path, outcome) in outcomes {
            let kind = match outcome {
                Ok(record) if seen.insert(record.slug.clone()) => {
                    records.push(record);
                    continue;
                }
                Ok(record) => IssueKind::DuplicateSlug { slug: record.slug },
                Err(kind) => kind,
            };
            let issue = LoadIssue::new(path, kind);
            issue.log();
            report.push(issue);
        }

        report.records_loaded = records.len();
        log::info!(
            "Loaded {} record(s) from {} file(s), {} issue(s)",
            report.records_loaded,
            report.files_scanned,
            report.issues.len()
        );

        Loaded {
            collection: Collection::from_records(records),
            report,
        }
    }

    /// Load and return every record, sorted newest first.
    pub async fn get_all(&self) -> Vec<ContentRecord> {
        self.load().await.collection.into_records()
    }

    /// Load and return the record with `slug`.
    pub async fn get_by_slug(&self, slug: &str) -> Option<ContentRecord> {
        self.get_all().await.into_iter().find(|r| r.slug == slug)
    }

    /// Load and return the records in `category`
    /// ([`ALL_CATEGORIES`](crate::ALL_CATEGORIES) for every record).
    pub async fn get_by_category(&self, category: &str) -> Vec<ContentRecord> {
        self.load()
            .await
            .collection
            .by_category(category)
            .into_iter()
            .cloned()
            .collect()
    }
}

/// Read, normalize and build one file.
async fn load_file(
    level: Difficulty,
    path: &Path,
) -> std::result::Result<ContentRecord, IssueKind> {
    let slug = slug_from_path(path).ok_or(IssueKind::InvalidFileName)?;

    let raw = read_file(path)
        .await
        .map_err(|e| IssueKind::UnreadableFile {
            error: e.to_string(),
        })?;

    ContentRecord::from_source(&raw, &slug, level).map_err(|e| IssueKind::InvalidHeader {
        error: e.to_string(),
    })
}
