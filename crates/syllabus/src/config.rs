//! Catalog configuration.
//!
//! The content root is always passed in explicitly, either built in code or
//! read from a TOML file:
//!
//! ```toml
//! content_root = "~/site/content/tutorials"
//! extensions = ["md"]
//! concurrency = 8
//! ```
//!
//! Missing keys fall back to [`CatalogConfig::default`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use syllabus_core::{expand_tilde, ConfigProvider, Error, Result};

use crate::difficulty::Difficulty;

/// Default content root, relative to the working directory.
pub const DEFAULT_CONTENT_ROOT: &str = "content/tutorials";

/// Default number of files read and parsed concurrently.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Configuration for a [`ContentCatalog`](crate::ContentCatalog).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Directory containing the `Beginner/`, `Intermediate/` and `Advanced/`
    /// subdirectories. A leading `~` is expanded.
    pub content_root: PathBuf,

    /// Recognized content file extensions, without dots (case-insensitive).
    pub extensions: Vec<String>,

    /// Maximum number of files processed at once.
    pub concurrency: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            content_root: PathBuf::from(DEFAULT_CONTENT_ROOT),
            extensions: vec!["md".to_string()],
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl CatalogConfig {
    /// Create a configuration rooted at `content_root` with default settings.
    pub fn new(content_root: impl Into<PathBuf>) -> Self {
        Self {
            content_root: content_root.into(),
            ..Self::default()
        }
    }

    /// Set the recognized extensions.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Set the per-load concurrency.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Parse a configuration from TOML text and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed TOML or invalid values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| Error::config(format!("Invalid catalog config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or
    /// [`Error::Config`] if it is invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("{}: {e}", path.display())))
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Check that the configuration can drive a load.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if no extensions are configured, an
    /// extension is empty or dotted, or concurrency is zero.
    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(Error::config("at least one content extension is required"));
        }
        if let Some(bad) = self
            .extensions
            .iter()
            .find(|e| e.is_empty() || e.starts_with('.'))
        {
            return Err(Error::config(format!(
                "extension '{bad}' must be non-empty and given without a leading dot"
            )));
        }
        if self.concurrency == 0 {
            return Err(Error::config("concurrency must be at least 1"));
        }
        Ok(())
    }

    /// Content root with `~` expanded.
    pub fn content_root(&self) -> PathBuf {
        expand_tilde(&self.content_root)
    }
}

impl ConfigProvider for CatalogConfig {
    fn project_name(&self) -> &str {
        "syllabus"
    }

    fn base_path(&self) -> Result<PathBuf> {
        Ok(self.content_root())
    }

    /// Only the difficulty-level directory names are valid sections.
    fn content_path(&self, section: &str) -> Result<PathBuf> {
        let level = Difficulty::from_dir_name(section)
            .ok_or_else(|| Error::config(format!("Unknown content section: {section}")))?;
        Ok(self.content_root().join(level.dir_name()))
    }
}
