//! Metadata key aliases.
//!
//! Tutorials written at different times spell the same header key
//! differently (`Title` vs `title`, `label` vs `category`). Each record field
//! has an explicit, ordered alias list; [`resolve`] returns the value under
//! the first alias that is present.
//!
//! Historical spellings come first, so a header with both `Title: Foo` and
//! `title: Bar` resolves to `Foo`.

use serde_yaml::{Mapping, Value};

/// Ordered header keys accepted for one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAliases {
    /// Record field name, for diagnostics.
    pub field: &'static str,
    /// Accepted header keys, highest priority first. Case-sensitive.
    pub keys: &'static [&'static str],
}

/// `title`
pub const TITLE: FieldAliases = FieldAliases {
    field: "title",
    keys: &["Title", "title"],
};

/// `description`
pub const DESCRIPTION: FieldAliases = FieldAliases {
    field: "description",
    keys: &["Description", "description"],
};

/// `author`
pub const AUTHOR: FieldAliases = FieldAliases {
    field: "author",
    keys: &["Author", "author"],
};

/// `keywords`
pub const KEYWORDS: FieldAliases = FieldAliases {
    field: "keywords",
    keys: &["Keywords", "keywords"],
};

/// `date`
pub const DATE: FieldAliases = FieldAliases {
    field: "date",
    keys: &["Date", "date"],
};

/// `difficultyLevel`
pub const DIFFICULTY_LEVEL: FieldAliases = FieldAliases {
    field: "difficultyLevel",
    keys: &["Difficulty Level", "difficultyLevel"],
};

/// `category`
pub const CATEGORY: FieldAliases = FieldAliases {
    field: "category",
    keys: &["label", "category"],
};

/// `estimatedTime`
pub const ESTIMATED_TIME: FieldAliases = FieldAliases {
    field: "estimatedTime",
    keys: &["Estimated Time", "estimatedTime", "duration"],
};

/// `prerequisites`
pub const PREREQUISITES: FieldAliases = FieldAliases {
    field: "prerequisites",
    keys: &["Prerequisites", "prerequisites"],
};

/// `image`
pub const IMAGE: FieldAliases = FieldAliases {
    field: "image",
    keys: &["image"],
};

/// `lastUpdated`
pub const LAST_UPDATED: FieldAliases = FieldAliases {
    field: "lastUpdated",
    keys: &["Last Updated", "lastUpdated"],
};

/// Every alias table, in record field order.
pub const ALL: [FieldAliases; 11] = [
    TITLE,
    DESCRIPTION,
    AUTHOR,
    KEYWORDS,
    DATE,
    DIFFICULTY_LEVEL,
    CATEGORY,
    ESTIMATED_TIME,
    PREREQUISITES,
    IMAGE,
    LAST_UPDATED,
];

/// Return the value under the first alias that holds a present value.
///
/// Null values and blank strings count as missing, so resolution moves on to
/// the next alias.
///
/// # Example
///
/// ```rust
/// use syllabus::aliases::{resolve, TITLE};
///
/// let meta: serde_yaml::Mapping = serde_yaml::from_str("title: Bar\nTitle: Foo").unwrap();
/// assert_eq!(resolve(&meta, &TITLE).and_then(|v| v.as_str()), Some("Foo"));
/// ```
pub fn resolve<'a>(meta: &'a Mapping, aliases: &FieldAliases) -> Option<&'a Value> {
    aliases
        .keys
        .iter()
        .filter_map(|key| meta.get(*key))
        .find(|value| is_present(value))
}

/// Like [`resolve`], but only accepts scalar values and renders them as a
/// string. Aliases holding lists or mappings are skipped.
pub fn resolve_string(meta: &Mapping, aliases: &FieldAliases) -> Option<String> {
    aliases
        .keys
        .iter()
        .filter_map(|key| meta.get(*key))
        .filter(|value| is_present(value))
        .find_map(scalar_to_string)
}

/// Render a scalar YAML value as a string.
///
/// Strings are returned as-is; numbers and booleans use their display form.
/// Returns `None` for null, sequences and mappings.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        _ => None,
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}
