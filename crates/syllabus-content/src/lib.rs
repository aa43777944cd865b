//! Frontmatter normalization, extraction, and markdown utilities.
//!
//! # Modules
//!
//! - [`markdown`]: Markdown parsing and frontmatter handling
//!   - [`markdown::frontmatter`]: Header location and YAML extraction
//!   - [`markdown::normalize`]: Repair of colon-containing header values
//!   - [`markdown::parser`]: Excerpts and HTML rendering
//!   - [`markdown::helpers`]: Comma-separated list splitting
//!
//! # Example
//!
//! ```rust
//! use syllabus_content::{extract_frontmatter, normalize_frontmatter};
//!
//! let raw = "---\ntitle: Intro: Getting Started\n---\nBody";
//! let normalized = normalize_frontmatter(raw);
//! let result = extract_frontmatter(&normalized).unwrap();
//! assert_eq!(result.get_str("title"), Some("Intro: Getting Started"));
//! assert_eq!(result.body(), "Body");
//! ```

#![doc = include_str!("../README.md")]

pub mod markdown;

// Re-export commonly used types
pub use markdown::{
    extract_first_paragraph, extract_frontmatter, locate_header, normalize_frontmatter,
    render_html, split_comma_list, strip_bom, FrontmatterResult, HeaderSpan,
};
