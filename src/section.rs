//! Section-scoped key lookup for TOML-style manifests.
//!
//! Lookups never parse the document. A section is the text between a header
//! line that is exactly `[name]` and the next line starting with `[`, so a key
//! belonging to another table (or to an array-of-tables entry) can never be
//! picked up by mistake, and everything outside the replaced value keeps its
//! original bytes.

use regex::Regex;

/// Boundaries of a named section within a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionMatch {
    /// Offset of the `[` that opens the header line
    pub header_start: usize,
    /// Offset just past the closing `]` of the header
    pub body_start: usize,
    /// Offset of the next header line, or the text length
    pub body_end: usize,
}

impl SectionMatch {
    pub fn body<'a>(&self, text: &'a str) -> &'a str {
        &text[self.body_start..self.body_end]
    }
}

/// A quoted string value found inside a section.
///
/// `start..end` spans the value including both quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatch {
    pub value: String,
    pub start: usize,
    pub end: usize,
}

/// Find the section whose header line is exactly `[name]`.
pub fn find_section(text: &str, name: &str) -> Option<SectionMatch> {
    let header = Regex::new(&format!(r"(?mR)^{}$", regex::escape(&format!("[{}]", name)))).ok()?;
    let found = header.find(text)?;

    let next_header = Regex::new(r"(?m)^\[").ok()?;
    let body_end = next_header
        .find_at(text, found.end())
        .map(|m| m.start())
        .unwrap_or(text.len());

    Some(SectionMatch {
        header_start: found.start(),
        body_start: found.end(),
        body_end,
    })
}

/// Locate `key = "value"` at the start of a line inside `[section]`.
///
/// When the key occurs more than once in the section the first occurrence wins.
pub fn locate_key_in_section(text: &str, section: &str, key: &str) -> Option<KeyMatch> {
    let bounds = find_section(text, section)?;
    let pattern = Regex::new(&format!(r#"(?mR)^{} = "([^"\r\n]+)""#, regex::escape(key))).ok()?;

    let captures = pattern.captures(bounds.body(text))?;
    let value = captures.get(1)?;

    Some(KeyMatch {
        value: value.as_str().to_string(),
        start: bounds.body_start + value.start() - 1,
        end: bounds.body_start + value.end() + 1,
    })
}

/// Replace the quoted value spanned by `found` with `"new_value"`.
pub fn replace_value(text: &str, found: &KeyMatch, new_value: &str) -> String {
    let mut updated = String::with_capacity(text.len() + new_value.len());
    updated.push_str(&text[..found.start]);
    updated.push('"');
    updated.push_str(new_value);
    updated.push('"');
    updated.push_str(&text[found.end..]);
    updated
}
