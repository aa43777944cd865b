//! Difficulty levels.
//!
//! The levels double as the names of the content subdirectories, and their
//! declaration order is the scan order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use syllabus_core::Error;

/// Tutorial difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    /// No prior knowledge assumed.
    Beginner,
    /// Builds on the beginner material.
    Intermediate,
    /// Deep dives.
    Advanced,
}

impl Difficulty {
    /// All levels, in scan order.
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    /// Name of the subdirectory holding this level's files.
    pub fn dir_name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    /// Map an exact subdirectory name back to its level.
    pub fn from_dir_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.dir_name() == name)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.dir_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::parse(format!("Unknown difficulty level: {s}")))
    }
}
