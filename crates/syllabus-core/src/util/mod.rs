//! Utility modules for file operations, path handling, and slug computation.
//!
//! # Modules
//!
//! - [`files`]: Async directory listing and file reading
//! - [`ids`]: Slug derivation from file paths
//! - [`paths`]: Tilde expansion for configured paths

pub mod files;
pub mod ids;
pub mod paths;
