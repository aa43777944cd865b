//! YAML frontmatter extraction from markdown files.
//!
//! Frontmatter is metadata at the start of a markdown file, delimited by
//! lines consisting solely of `---`:
//!
//! ```markdown
//! ---
//! title: Intro to RAG
//! keywords: rag, retrieval
//! ---
//!
//! # Intro to RAG
//!
//! The body of the document starts here.
//! ```
//!
//! # Usage
//!
//! ```rust
//! use syllabus_content::markdown::extract_frontmatter;
//!
//! let content = "---\ntitle: Test\n---\nBody";
//! let result = extract_frontmatter(content).unwrap();
//!
//! assert!(result.has_frontmatter());
//! assert_eq!(result.body(), "Body");
//! assert_eq!(result.get_str("title"), Some("Test"));
//! ```

use std::ops::Range;

use serde_yaml::{Mapping, Value};
use syllabus_core::{Error, Result};

/// Delimiter line that opens and closes a header block.
pub const DELIMITER: &str = "---";

/// UTF-8 byte order mark some editors write at the start of a file.
pub const BOM: char = '\u{feff}';

/// Byte offsets of a header block inside a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSpan {
    /// Header text between the delimiter lines (excluding both delimiters).
    pub inner: Range<usize>,
    /// Offset where the body starts (just past the closing delimiter line).
    pub body_start: usize,
}

/// Locate the header block of `content`.
///
/// The text must start with a `---` line; the header ends at the next line
/// consisting solely of `---`. Both `\n` and `\r\n` line endings are
/// accepted, and a leading byte order mark is skipped. Offsets in the
/// returned span index into `content` itself. Returns `None` when either
/// delimiter is missing.
///
/// # Example
///
/// ```rust
/// use syllabus_content::markdown::locate_header;
///
/// let content = "---\ntitle: A\n---\nBody";
/// let span = locate_header(content).unwrap();
/// assert_eq!(&content[span.inner.clone()], "title: A\n");
/// assert_eq!(&content[span.body_start..], "Body");
///
/// assert!(locate_header("# No header").is_none());
/// ```
pub fn locate_header(content: &str) -> Option<HeaderSpan> {
    let start = content.len() - strip_bom(content).len();
    let open_len = if content[start..].starts_with("---\n") {
        start + 4
    } else if content[start..].starts_with("---\r\n") {
        start + 5
    } else {
        return None;
    };

    let mut pos = open_len;
    loop {
        let rest = &content[pos..];
        let (line, next) = match rest.find('\n') {
            Some(i) => (&rest[..i], pos + i + 1),
            None => (rest, content.len()),
        };

        if line.strip_suffix('\r').unwrap_or(line) == DELIMITER {
            return Some(HeaderSpan {
                inner: open_len..pos,
                body_start: next,
            });
        }

        if next >= content.len() {
            return None;
        }
        pos = next;
    }
}

/// `content` without a leading byte order mark.
pub fn strip_bom(content: &str) -> &str {
    content.strip_prefix(BOM).unwrap_or(content)
}

/// Result of frontmatter extraction.
///
/// Contains the parsed YAML value (if a header was present) and the body
/// content after the header.
#[derive(Debug, Clone)]
pub struct FrontmatterResult<'a> {
    /// Parsed YAML frontmatter, if a header block was present.
    value: Option<Value>,
    /// Body content after the closing delimiter.
    body: &'a str,
}

impl<'a> FrontmatterResult<'a> {
    fn with_frontmatter(value: Value, body: &'a str) -> Self {
        Self {
            value: Some(value),
            body,
        }
    }

    fn without_frontmatter(body: &'a str) -> Self {
        Self { value: None, body }
    }

    /// Check if a header block was found and parsed.
    ///
    /// An empty header (`---\n---\n`) counts: its value is YAML null.
    pub fn has_frontmatter(&self) -> bool {
        self.value.is_some()
    }

    /// Get the raw YAML value, if present.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Get the header as a key/value mapping.
    ///
    /// Returns `None` if there was no header or it is not a mapping.
    pub fn mapping(&self) -> Option<&Mapping> {
        self.value.as_ref()?.as_mapping()
    }

    /// Get the body content (everything after the header).
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// Get a string field from the frontmatter.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.value.as_ref()?.get(key)?.as_str()
    }
}

/// Extract YAML frontmatter from markdown content.
///
/// # Behavior
///
/// - No header block: `Ok`, body is the whole input (minus any byte order
///   mark), `has_frontmatter() == false`
/// - Header present but YAML invalid: `Err(Error::Parse)`
/// - Valid header: parsed YAML and the body after the closing delimiter
///
/// The body is returned byte for byte; no whitespace is stripped.
///
/// # Example
///
/// ```rust
/// use syllabus_content::markdown::extract_frontmatter;
///
/// let result = extract_frontmatter("---\ntitle: Test\n---\n\n# Heading").unwrap();
/// assert_eq!(result.get_str("title"), Some("Test"));
/// assert_eq!(result.body(), "\n# Heading");
///
/// let result = extract_frontmatter("# Just Markdown").unwrap();
/// assert!(!result.has_frontmatter());
///
/// assert!(extract_frontmatter("---\ntitle: [unclosed\n---\n").is_err());
/// ```
pub fn extract_frontmatter(content: &str) -> Result<FrontmatterResult<'_>> {
    let Some(span) = locate_header(content) else {
        let content = strip_bom(content);
        if content.starts_with(DELIMITER) {
            log::debug!("Frontmatter opening delimiter found but no closing delimiter");
        }
        return Ok(FrontmatterResult::without_frontmatter(content));
    };

    let yaml = &content[span.inner];
    let body = &content[span.body_start..];

    let value = serde_yaml::from_str::<Value>(yaml)
        .map_err(|e| Error::parse(format!("Failed to parse frontmatter YAML: {e}")))?;

    Ok(FrontmatterResult::with_frontmatter(value, body))
}

// ============================================================================
// Tests
// ============================================================================
