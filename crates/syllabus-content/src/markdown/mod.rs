//! Markdown parsing and frontmatter handling.
//!
//! - [`frontmatter`]: Header location and YAML frontmatter extraction
//! - [`normalize`]: Header line repair ahead of YAML parsing
//! - [`parser`]: Markdown structure parsing (excerpts, HTML)
//! - [`helpers`]: Small content helpers

pub mod frontmatter;
pub mod helpers;
pub mod normalize;
pub mod parser;

// Re-export key types and functions
pub use frontmatter::{
    extract_frontmatter, locate_header, strip_bom, FrontmatterResult, HeaderSpan,
};
pub use helpers::split_comma_list;
pub use normalize::normalize_frontmatter;
pub use parser::{extract_first_paragraph, render_html};
