//! Front-matter parsing
//!
//! Content files start with a metadata block delimited by `---` lines:
//!
//! ```text
//! ---
//! title: Static Typing
//! publishedAt: 2025-01-01
//! summary: Why types matter
//! tags: ['TypeScript', 'Python']
//! ---
//!
//! Body text...
//! ```
//!
//! The block is parsed into a flat string-to-string mapping; list-valued
//! fields stay in their raw bracketed form and are reparsed on demand with
//! [`parse_string_list`].

use indexmap::IndexMap;
use thiserror::Error;

/// Raised when no `---` delimited metadata block is found
#[derive(Error, Debug)]
#[error("no frontmatter block delimited by `---` lines")]
pub struct MissingFrontmatter;

/// Parsed front-matter: flat metadata plus the document body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter {
    /// Key-value pairs in order of appearance; duplicate keys keep the
    /// later occurrence
    pub metadata: IndexMap<String, String>,
    /// Everything after the closing delimiter, trimmed
    pub body: String,
}

impl Frontmatter {
    /// Parse front-matter from raw file content
    ///
    /// The metadata block is the first pair of lines that each trim to
    /// exactly `---`. Whitespace around the delimiter lines and around the
    /// block is tolerated. A file without such a pair is an error, never
    /// silently treated as all body.
    pub fn parse(raw: &str) -> Result<Self, MissingFrontmatter> {
        let (block, body) = split_block(raw).ok_or(MissingFrontmatter)?;

        let mut metadata = IndexMap::new();
        for line in block.lines() {
            if line.trim().is_empty() {
                continue;
            }
            // Split on the first ": " only; further ": " sequences stay in
            // the value so colons inside values survive.
            let (key, value) = match line.split_once(": ") {
                Some((key, value)) => (key.trim(), unquote(value.trim())),
                None => (line.trim(), ""),
            };
            metadata.insert(key.to_string(), value.to_string());
        }

        Ok(Self {
            metadata,
            body: body.trim().to_string(),
        })
    }
}

/// Locate the first `---` ... `---` pair and return (block, rest-of-file)
fn split_block(raw: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    let mut block_start = None;
    for line in raw.split_inclusive('\n') {
        let end = offset + line.len();
        if line.trim() == "---" {
            match block_start {
                None => block_start = Some(end),
                Some(start) => return Some((&raw[start..offset], &raw[end..])),
            }
        }
        offset = end;
    }
    None
}

/// Strip one layer of matching wrapping quotes, leaving inner quotes intact
fn unquote(value: &str) -> &str {
    if value.len() >= 2 {
        let quoted = (value.starts_with('\'') && value.ends_with('\''))
            || (value.starts_with('"') && value.ends_with('"'));
        if quoted {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Parse a bracketed list value like `['a', 'b']` or `["a","b"]`
///
/// Front-matter encodes list fields in an ad hoc bracketed syntax that is
/// neither JSON nor YAML. This recognizes it natively instead of patching
/// quotes and feeding the result to a JSON parser, so items containing
/// apostrophes parse fine. Items may be single-quoted, double-quoted, or
/// bare. Returns `None` when the value is not a well-formed list.
pub fn parse_string_list(raw: &str) -> Option<Vec<String>> {
    let inner = raw.trim().strip_prefix('[')?.strip_suffix(']')?;
    let mut items = Vec::new();
    let mut chars = inner.chars().peekable();

    loop {
        while matches!(chars.peek(), Some(c) if c.is_whitespace()) {
            chars.next();
        }
        match chars.peek() {
            None => break,
            Some(&quote) if quote == '\'' || quote == '"' => {
                chars.next();
                let mut item = String::new();
                loop {
                    match chars.next() {
                        Some(c) if c == quote => break,
                        Some(c) => item.push(c),
                        None => return None, // unterminated quote
                    }
                }
                items.push(item);
                while matches!(chars.peek(), Some(c) if c.is_whitespace()) {
                    chars.next();
                }
                match chars.next() {
                    Some(',') => {}
                    None => break,
                    Some(_) => return None, // junk after closing quote
                }
            }
            Some(_) => {
                let mut item = String::new();
                loop {
                    match chars.next() {
                        Some(',') | None => break,
                        Some(c) => item.push(c),
                    }
                }
                let item = item.trim();
                if item.is_empty() {
                    return None;
                }
                items.push(item.to_string());
            }
        }
    }

    Some(items)
}
