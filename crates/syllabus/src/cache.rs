//! Change-aware caching of loaded collections.
//!
//! [`CachedCatalog`] keeps the last [`Loaded`] result together with a
//! fingerprint of the content tree. Each request recomputes the fingerprint
//! and reloads only when it differs.
//!
//! # Fingerprint
//!
//! The fingerprint is a hash of:
//! - A format version
//! - Relative paths of candidate files (sorted for determinism)
//! - Each file's modification time and length
//! - Each file's permission bits
//!
//! No file contents are read, so checking is cheap. Edits that keep both
//! the mtime and the length unchanged go unnoticed; call
//! [`CachedCatalog::invalidate`] after such edits. Permission bits are
//! hashed so a file that becomes unreadable through `chmod` triggers a
//! reload. Access lost any other way, such as a change of owner, is not
//! seen until the next invalidation.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::Path;
use std::sync::Arc;
use std::time::UNIX_EPOCH;

use async_walkdir::WalkDir;
use futures::StreamExt;
use syllabus_core::{exists, has_extension, Error, Result};
use tokio::sync::Mutex;

use crate::catalog::{ContentCatalog, Loaded};
use crate::record::ContentRecord;

/// Bumped whenever record building changes in a way that invalidates
/// previously cached results.
const FINGERPRINT_VERSION: u32 = 2;

#[derive(Debug)]
struct CacheEntry {
    fingerprint: String,
    loaded: Arc<Loaded>,
}

/// A [`ContentCatalog`] that reuses its last load while files are unchanged.
#[derive(Debug)]
pub struct CachedCatalog {
    catalog: ContentCatalog,
    state: Mutex<Option<CacheEntry>>,
}

impl CachedCatalog {
    /// Wrap `catalog`. Nothing is loaded until the first request.
    pub fn new(catalog: ContentCatalog) -> Self {
        Self {
            catalog,
            state: Mutex::new(None),
        }
    }

    /// The wrapped catalog.
    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    /// Return the current collection, reloading if files changed.
    ///
    /// Concurrent callers wait for a single reload. If the fingerprint
    /// cannot be computed the collection is loaded fresh and not cached.
    pub async fn load(&self) -> Arc<Loaded> {
        let config = self.catalog.config();
        let mut state = self.state.lock().await;

        let fingerprint = match fingerprint(&config.content_root(), &config.extensions).await {
            Ok(fp) => fp,
            Err(e) => {
                log::warn!("Content fingerprint unavailable, loading uncached: {e}");
                *state = None;
                return Arc::new(self.catalog.load().await);
            }
        };

        if let Some(entry) = state.as_ref() {
            if entry.fingerprint == fingerprint {
                log::debug!("Content unchanged ({fingerprint}), reusing cached collection");
                return Arc::clone(&entry.loaded);
            }
            log::info!("Content changed, reloading");
        }

        let loaded = Arc::new(self.catalog.load().await);
        *state = Some(CacheEntry {
            fingerprint,
            loaded: Arc::clone(&loaded),
        });
        loaded
    }

    /// Drop the cached collection so the next request reloads.
    pub async fn invalidate(&self) {
        *self.state.lock().await = None;
    }

    /// Every record, sorted newest first.
    pub async fn get_all(&self) -> Vec<ContentRecord> {
        self.load().await.collection.all().to_vec()
    }

    /// The record with `slug`.
    pub async fn get_by_slug(&self, slug: &str) -> Option<ContentRecord> {
        self.load().await.collection.get(slug).cloned()
    }

    /// Records in `category` ([`ALL_CATEGORIES`](crate::ALL_CATEGORIES)
    /// for every record).
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

/// Compute the fingerprint of the candidate files under `root`.
///
/// Walks the whole tree under `root` and considers only files with one of
/// `extensions`. Nested directories are included even though the scanner
/// skips them.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if `root` does not exist.
pub async fn fingerprint(root: &Path, extensions: &[String]) -> Result<String> {
    if !exists(root).await {
        return Err(Error::not_found(format!(
            "content directory {}",
            root.display()
        )));
    }

    let mut hasher = DefaultHasher::new();
    FINGERPRINT_VERSION.hash(&mut hasher);

    let mut file_info: Vec<(String, u64, u32, u64, u32)> = Vec::new();
    let mut walker = WalkDir::new(root);

    while let Some(entry) = walker.next().await {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("Walk error during fingerprinting: {e}");
                continue;
            }
        };

        let path = entry.path();
        if !has_extension(&path, extensions) {
            continue;
        }

        let Ok(meta) = tokio::fs::metadata(&path).await else {
            continue;
        };
        if !meta.is_file() {
            continue;
        }

        let relative = path
            .strip_prefix(root)
            .unwrap_or(&path)
            .to_string_lossy()
            .to_string();

        let (secs, nanos) = meta
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| (d.as_secs(), d.subsec_nanos()))
            .unwrap_or((0, 0));

        file_info.push((relative, secs, nanos, meta.len(), permission_bits(&meta)));
    }

    file_info.sort_by(|a, b| a.0.cmp(&b.0));
    for info in file_info {
        info.hash(&mut hasher);
    }

    Ok(format!("{:016x}", hasher.finish()))
}

#[cfg(unix)]
fn permission_bits(meta: &std::fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode()
}

#[cfg(not(unix))]
fn permission_bits(meta: &std::fs::Metadata) -> u32 {
    u32::from(meta.permissions().readonly())
}
