//! Syllabus Core: shared types, traits, errors, and utilities.
//!
//! This crate provides the foundational types used across all Syllabus crates.
//! It has no internal Syllabus dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`traits`]: The [`ConfigProvider`] seam for injecting content locations
//! - [`util`]: File, path, and slug utilities

#![doc = include_str!("../README.md")]

pub mod error;
pub mod traits;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use traits::ConfigProvider;

// Convenience re-exports from util
pub use util::files::{exists, has_extension, list_files_with_extensions, read_file};
pub use util::ids::slug_from_path;
pub use util::paths::expand_tilde;
