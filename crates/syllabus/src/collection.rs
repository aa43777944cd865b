//! The assembled, sorted collection.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::dates::parse_date;
use crate::difficulty::Difficulty;
use crate::record::ContentRecord;

/// Category filter value that matches every record.
pub const ALL_CATEGORIES: &str = "all";

/// Records ordered newest first.
///
/// Ordering is by parsed [`date`](ContentRecord::date), descending. Records
/// whose date is empty or unrecognized come after all dated records. Ties
/// keep their discovery order (level order, then file name).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    records: Vec<ContentRecord>,
}

impl Collection {
    /// Sort `records` into a collection.
    pub fn from_records(records: Vec<ContentRecord>) -> Self {
        let mut keyed: Vec<(Option<DateTime<Utc>>, ContentRecord)> = records
            .into_iter()
            .map(|r| (parse_date(&r.date), r))
            .collect();

        // Stable: equal keys keep discovery order
        keyed.sort_by(|(a, _), (b, _)| newest_first(a, b));

        Self {
            records: keyed.into_iter().map(|(_, r)| r).collect(),
        }
    }

    /// Every record, in collection order.
    pub fn all(&self) -> &[ContentRecord] {
        &self.records
    }

    /// The record with `slug`, if any. Exact, case-sensitive match.
    pub fn get(&self, slug: &str) -> Option<&ContentRecord> {
        self.records.iter().find(|r| r.slug == slug)
    }

    /// Records whose category equals `category` exactly, in collection
    /// order. [`ALL_CATEGORIES`] returns every record.
    pub fn by_category(&self, category: &str) -> Vec<&ContentRecord> {
        if category == ALL_CATEGORIES {
            return self.records.iter().collect();
        }
        self.records
            .iter()
            .filter(|r| r.category == category)
            .collect()
    }

    /// Records at `level`, in collection order.
    pub fn by_difficulty(&self, level: Difficulty) -> Vec<&ContentRecord> {
        self.records
            .iter()
            .filter(|r| r.difficulty_level == level)
            .collect()
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in collection order.
    pub fn iter(&self) -> std::slice::Iter<'_, ContentRecord> {
        self.records.iter()
    }

    /// Take the records out of the collection.
    pub fn into_records(self) -> Vec<ContentRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a ContentRecord;
    type IntoIter = std::slice::Iter<'a, ContentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn newest_first(a: &Option<DateTime<Utc>>, b: &Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
