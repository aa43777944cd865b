//! Markdown structure parsing utilities.
//!
//! Uses `pulldown-cmark` to turn a tutorial body into the two shapes
//! listing pages need: a short plain-text excerpt and rendered HTML.
//!
//! # Example
//!
//! ```rust
//! use syllabus_content::markdown::parser::{extract_first_paragraph, render_html};
//!
//! let content = "# My Title\n\nThis is the first paragraph.\n\n## Section";
//!
//! let paragraph = extract_first_paragraph(content, 100).unwrap();
//! assert_eq!(paragraph, "This is the first paragraph.");
//!
//! let html = render_html(content);
//! assert!(html.contains("<h1>My Title</h1>"));
//! ```

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};

/// Extract the first paragraph from markdown content.
///
/// Skips headings and extracts the first actual paragraph. Inline formatting
/// is stripped. Content longer than `max_chars` characters is cut at a word
/// boundary and suffixed with `...`.
///
/// Returns `None` if no non-empty paragraph is found.
///
/// # Example
///
/// ```rust
/// use syllabus_content::markdown::parser::extract_first_paragraph;
///
/// let content = "# Title\n\nThis is a **bold** introduction.\n\nMore content.";
/// let paragraph = extract_first_paragraph(content, 50).unwrap();
/// assert_eq!(paragraph, "This is a bold introduction.");
/// ```
pub fn extract_first_paragraph(content: &str, max_chars: usize) -> Option<String> {
    let parser = Parser::new(content);
    let mut in_paragraph = false;
    let mut in_heading = false;
    let mut paragraph_text = String::new();

    for event in parser {
        match event {
            Event::Start(Tag::Heading { .. }) => in_heading = true,
            Event::End(TagEnd::Heading(_)) => in_heading = false,

            Event::Start(Tag::Paragraph) if !in_heading => {
                in_paragraph = true;
                paragraph_text.clear();
            }
            Event::End(TagEnd::Paragraph) if in_paragraph => {
                let normalized = normalize_whitespace(&paragraph_text);
                if !normalized.is_empty() {
                    return Some(truncate_text(&normalized, max_chars));
                }
                in_paragraph = false;
            }

            Event::Text(text) | Event::Code(text) if in_paragraph => {
                paragraph_text.push_str(&text);
            }
            Event::SoftBreak | Event::HardBreak if in_paragraph => {
                paragraph_text.push(' ');
            }

            _ => {}
        }
    }

    None
}

/// Render markdown to HTML.
///
/// Tables, strikethrough, footnotes and task lists are enabled since
/// tutorials use them.
///
/// # Example
///
/// ```rust
/// use syllabus_content::markdown::parser::render_html;
///
/// assert_eq!(render_html("Hello *world*"), "<p>Hello <em>world</em></p>\n");
/// ```
pub fn render_html(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(content, options);
    let mut out = String::with_capacity(content.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Truncate text to at most `max_chars` characters, adding "..." if cut.
fn truncate_text(text: &str, max_chars: usize) -> String {
    let Some((cut, _)) = text.char_indices().nth(max_chars) else {
        return text.to_string();
    };

    // Prefer a word boundary before the cut
    let head = &text[..cut];
    let truncate_at = head.rfind(char::is_whitespace).unwrap_or(cut);

    format!("{}...", text[..truncate_at].trim_end())
}

/// Collapse runs of whitespace into single spaces.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ============================================================================
// Tests
// ============================================================================
