//! Content records and the record builder.
//!
//! [`build_record`] maps one file's normalized text onto a [`ContentRecord`]:
//! every field is looked up through its alias table and falls back to a
//! fixed default, so a record can only fail to build when its header is not
//! parseable YAML.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use syllabus_content::markdown::{
    extract_first_paragraph, extract_frontmatter, normalize_frontmatter, render_html,
    split_comma_list,
};
use syllabus_core::{Error, Result};

use crate::aliases::{self, resolve, resolve_string, scalar_to_string};
use crate::dates::parse_date;
use crate::difficulty::Difficulty;

/// Title used when a file has none.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Author used when a file has none.
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// Estimated time used when a file has none.
pub const DEFAULT_ESTIMATED_TIME: &str = "30 min";

/// Category used when a file has none.
pub const DEFAULT_CATEGORY: &str = "General";

/// One tutorial, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    /// File name without extension; unique within a collection.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Short summary; empty when absent.
    pub description: String,
    /// Author name.
    pub author: String,
    /// Search keywords.
    pub keywords: Vec<String>,
    /// Raw publication date as written in the header; empty when absent.
    pub date: String,
    /// Difficulty level.
    pub difficulty_level: Difficulty,
    /// Free-text duration, e.g. `"45 min"`.
    pub estimated_time: String,
    /// Category used for filtering.
    pub category: String,
    /// Markdown body after the header, unmodified.
    pub content: String,
    /// Free-text prerequisites.
    pub prerequisites: String,
    /// Cover image path or URL.
    pub image: String,
    /// Raw last-updated date.
    pub last_updated: String,
}

impl ContentRecord {
    /// Normalize raw file text and build a record from it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the header is unparseable even after
    /// normalization.
    pub fn from_source(raw: &str, slug: &str, level: Difficulty) -> Result<Self> {
        let normalized = normalize_frontmatter(raw);
        build_record(&normalized, slug, level)
    }

    /// Parsed [`date`](Self::date), if it is in a recognized format.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        parse_date(&self.date)
    }

    /// First paragraph of the body as plain text, cut to `max_chars`.
    pub fn excerpt(&self, max_chars: usize) -> Option<String> {
        extract_first_paragraph(&self.content, max_chars)
    }

    /// Body rendered to HTML.
    pub fn render_html(&self) -> String {
        render_html(&self.content)
    }
}

/// Build a record from already-normalized file text.
///
/// `slug` comes from the file name and `level` from the directory the file
/// was found in. An explicit, recognized difficulty in the header overrides
/// `level`; an unrecognized one is ignored.
///
/// A file without a header block yields a record with every field defaulted
/// and the whole text as its content. An empty header (`---\n---\n`) behaves
/// the same way.
///
/// # Errors
///
/// Returns [`Error::Parse`] if the header is not valid YAML, or is valid
/// YAML but not a key/value mapping.
///
/// # Example
///
/// ```rust
/// use syllabus::{build_record, Difficulty};
///
/// let record = build_record("---\n---\n", "intro", Difficulty::Beginner).unwrap();
/// assert_eq!(record.title, "Untitled");
/// assert_eq!(record.difficulty_level, Difficulty::Beginner);
/// ```
pub fn build_record(normalized: &str, slug: &str, level: Difficulty) -> Result<ContentRecord> {
    let parsed = extract_frontmatter(normalized)?;

    let empty = Mapping::new();
    let meta = match parsed.value() {
        None | Some(Value::Null) => &empty,
        Some(Value::Mapping(mapping)) => mapping,
        Some(_) => {
            return Err(Error::parse(
                "Frontmatter must be a set of key: value pairs",
            ));
        }
    };

    let string_or = |aliases: &aliases::FieldAliases, default: &str| {
        resolve_string(meta, aliases).unwrap_or_else(|| default.to_string())
    };

    Ok(ContentRecord {
        slug: slug.to_string(),
        title: string_or(&aliases::TITLE, DEFAULT_TITLE),
        description: string_or(&aliases::DESCRIPTION, ""),
        author: string_or(&aliases::AUTHOR, DEFAULT_AUTHOR),
        keywords: coerce_keywords(resolve(meta, &aliases::KEYWORDS)),
        date: string_or(&aliases::DATE, ""),
        difficulty_level: resolve_difficulty(meta, slug, level),
        estimated_time: string_or(&aliases::ESTIMATED_TIME, DEFAULT_ESTIMATED_TIME),
        category: string_or(&aliases::CATEGORY, DEFAULT_CATEGORY),
        content: parsed.body().to_string(),
        prerequisites: string_or(&aliases::PREREQUISITES, ""),
        image: string_or(&aliases::IMAGE, ""),
        last_updated: string_or(&aliases::LAST_UPDATED, ""),
    })
}

/// Keywords from a comma-separated string or a list; anything else is empty.
fn coerce_keywords(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(s)) => split_comma_list(s),
        Some(Value::Sequence(items)) => items.iter().filter_map(scalar_to_string).collect(),
        _ => Vec::new(),
    }
}

fn resolve_difficulty(meta: &Mapping, slug: &str, level: Difficulty) -> Difficulty {
    match resolve_string(meta, &aliases::DIFFICULTY_LEVEL) {
        Some(explicit) => explicit.parse().unwrap_or_else(|_| {
            log::debug!("{slug}: ignoring unknown difficulty '{explicit}', using {level}");
            level
        }),
        None => level,
    }
}

// ============================================================================
// Tests
// ============================================================================
