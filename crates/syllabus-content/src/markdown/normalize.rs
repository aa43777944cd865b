//! Header line repair ahead of YAML parsing.
//!
//! Tutorial authors routinely write header values that contain a colon:
//!
//! ```markdown
//! ---
//! title: Intro: Getting Started
//! ---
//! ```
//!
//! YAML rejects the unquoted `: ` inside the value. [`normalize_frontmatter`]
//! rewrites such lines to `title: "Intro: Getting Started"` so the generic
//! parser reads the whole value as one string. Nothing else is touched.

use std::borrow::Cow;

use regex::Regex;

use super::frontmatter::locate_header;

/// Quote header values that contain a colon.
///
/// Within the header block, every top-level `key: value` line whose value
/// contains `:` and does not already start with a quote character is
/// rewritten as `key: "value"`, escaping `\` and `"` inside the value.
/// Indented lines, list items, comments and lines without a `key: value`
/// shape pass through unchanged, as does everything after the header.
///
/// Text without a header block is returned unchanged. The transform is
/// idempotent, and returns a borrowed value when nothing needed rewriting.
///
/// # Example
///
/// ```rust
/// use syllabus_content::markdown::normalize_frontmatter;
///
/// let raw = "---\ntitle: Intro: Getting Started\nauthor: Dana\n---\nBody: untouched";
/// let fixed = normalize_frontmatter(raw);
/// assert_eq!(
///     fixed,
///     "---\ntitle: \"Intro: Getting Started\"\nauthor: Dana\n---\nBody: untouched"
/// );
/// assert_eq!(normalize_frontmatter(&fixed), fixed);
/// ```
pub fn normalize_frontmatter(content: &str) -> Cow<'_, str> {
    let Some(span) = locate_header(content) else {
        return Cow::Borrowed(content);
    };

    let key_value_re = Regex::new(r#"^(?P<key>[^\s:#'"\-][^:]*?):[ \t]+(?P<value>.*?)[ \t]*$"#)
        .expect("Invalid key/value line regex");

    let header = &content[span.inner.clone()];
    let mut rewritten = String::with_capacity(header.len() + 16);
    let mut changed = false;

    for raw_line in header.split_inclusive('\n') {
        let (line, ending) = split_line_ending(raw_line);

        let quoted = key_value_re.captures(line).and_then(|caps| {
            let key = caps.name("key")?.as_str();
            let value = caps.name("value")?.as_str();
            needs_quoting(value).then(|| format!("{key}: \"{}\"", escape_value(value)))
        });

        match quoted {
            Some(fixed) => {
                rewritten.push_str(&fixed);
                rewritten.push_str(ending);
                changed = true;
            }
            None => rewritten.push_str(raw_line),
        }
    }

    if !changed {
        return Cow::Borrowed(content);
    }

    let mut out = String::with_capacity(content.len() + rewritten.len() - header.len());
    out.push_str(&content[..span.inner.start]);
    out.push_str(&rewritten);
    out.push_str(&content[span.inner.end..]);
    Cow::Owned(out)
}

/// A value needs quoting when it holds a colon and is not already a single
/// complete quoted scalar.
fn needs_quoting(value: &str) -> bool {
    value.contains(':') && !is_quoted_scalar(value)
}

/// True when `value` is exactly one quoted scalar: it opens with `"` or `'`
/// and the matching close quote is its last character.
///
/// Inside double quotes `\` escapes the next character; inside single
/// quotes `''` stands for a literal quote.
fn is_quoted_scalar(value: &str) -> bool {
    let quote = match value.chars().next() {
        Some(q @ ('"' | '\'')) => q,
        _ => return false,
    };
    let Some(inner) = value[1..].strip_suffix(quote) else {
        return false;
    };

    if quote == '\'' {
        return !inner.replace("''", "").contains('\'');
    }

    let mut escaped = false;
    for c in inner.chars() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => return false,
            _ => {}
        }
    }
    !escaped
}

/// Escape a value for a YAML double-quoted scalar.
fn escape_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Split a line into its content and its terminator (`\r\n`, `\n` or none).
fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(stripped) = line.strip_suffix("\r\n") {
        (stripped, "\r\n")
    } else if let Some(stripped) = line.strip_suffix('\n') {
        (stripped, "\n")
    } else {
        (line, "")
    }
}

// ============================================================================
// Tests
// ============================================================================
