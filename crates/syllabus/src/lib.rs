//! Tutorial content catalog.
//!
//! Scans the difficulty-level subdirectories of a content root, repairs and
//! parses each file's frontmatter, and assembles the results into a sorted
//! [`Collection`] of [`ContentRecord`]s.
//!
//! # Modules
//!
//! - [`difficulty`]: The closed set of difficulty levels
//! - [`config`]: [`CatalogConfig`], loadable from TOML
//! - [`scanner`]: Per-level discovery of candidate files
//! - [`aliases`]: Ordered metadata key aliases per field
//! - [`record`]: [`ContentRecord`] and the record builder
//! - [`dates`]: Date parsing for ordering
//! - [`report`]: Structured per-file load issues
//! - [`collection`]: Sorted collection with lookup and filtering
//! - [`catalog`]: [`ContentCatalog`], which runs the whole pipeline
//! - [`cache`]: [`CachedCatalog`], which reloads only when files change

#![doc = include_str!("../README.md")]

pub mod aliases;
pub mod cache;
pub mod catalog;
pub mod collection;
pub mod config;
pub mod dates;
pub mod difficulty;
pub mod record;
pub mod report;
pub mod scanner;

pub use cache::CachedCatalog;
pub use catalog::{ContentCatalog, Loaded};
pub use collection::{Collection, ALL_CATEGORIES};
pub use config::CatalogConfig;
pub use difficulty::Difficulty;
pub use record::{build_record, ContentRecord};
pub use report::{IssueKind, LoadIssue, LoadReport};
pub use scanner::{scan_levels, LevelFiles, ScanResult};
