//! Common fixtures for catalog integration tests.

use std::fs;
use std::path::Path;

use syllabus::{CachedCatalog, CatalogConfig, ContentCatalog};
use tempfile::TempDir;

/// A content tree in a temporary directory.
///
/// The directory is removed when the fixture is dropped.
pub struct ContentTree {
    dir: TempDir,
}

impl ContentTree {
    /// Creates an empty content root with all three level directories.
    pub fn new() -> Self {
        let tree = Self::bare();
        for level in ["Beginner", "Intermediate", "Advanced"] {
            fs::create_dir(tree.root().join(level)).expect("create level dir");
        }
        tree
    }

    /// Creates an empty content root without level directories.
    pub fn bare() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// The content root.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `content` to `rel` under the root, creating parent directories.
    pub fn file(&self, rel: &str, content: impl AsRef<[u8]>) -> &Self {
        let path = self.root().join(rel);
        fs::create_dir_all(path.parent().expect("file has a parent")).expect("create parent");
        fs::write(path, content).expect("write content file");
        self
    }

    /// Writes a tutorial with the given header lines and body.
    pub fn tutorial(&self, rel: &str, header: &[&str], body: &str) -> &Self {
        let text = format!("---\n{}\n---\n{body}", header.join("\n"));
        self.file(rel, text)
    }

    /// A catalog over this tree with default settings.
    pub fn catalog(&self) -> ContentCatalog {
        ContentCatalog::new(CatalogConfig::new(self.root())).expect("valid config")
    }

    /// A cached catalog over this tree with default settings.
    pub fn cached(&self) -> CachedCatalog {
        CachedCatalog::new(self.catalog())
    }
}

impl Default for ContentTree {
    fn default() -> Self {
        Self::new()
    }
}
