//! Snippet expansion
//!
//! A snippet maps a trigger word to a block of text. `$0` inside the content
//! marks where the cursor lands after expansion; continuation lines are
//! indented to the column the trigger word started at.

use std::collections::HashMap;

use crate::util::is_word_byte;

const CURSOR_MARKER: &str = "$0";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetSet {
    snippets: HashMap<String, String>,
}

/// Result of expanding a snippet at a given column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// Text to insert in place of the trigger word
    pub text: Vec<u8>,
    /// Cursor offset relative to the start of `text`
    pub cursor: usize,
}

impl SnippetSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(snippets: HashMap<String, String>) -> Self {
        Self { snippets }
    }

    pub fn insert(&mut self, key: impl Into<String>, content: impl Into<String>) {
        self.snippets.insert(key.into(), content.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.snippets.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    /// Expand `key` for a trigger word starting at column `indent`
    pub fn expand(&self, key: &str, indent: usize) -> Option<Expansion> {
        self.get(key).map(|content| expand_content(content, indent))
    }
}

/// Start of the alphanumeric word ending at `cursor`, if there is one
pub fn word_left_of(data: &[u8], cursor: usize) -> Option<usize> {
    let cursor = cursor.min(data.len());
    let mut start = cursor;
    while start > 0 && is_word_byte(data[start - 1]) {
        start -= 1;
    }
    (start < cursor).then_some(start)
}

fn expand_content(content: &str, indent: usize) -> Expansion {
    let marker = content.find(CURSOR_MARKER);
    let content = match marker {
        Some(at) => {
            let mut stripped = String::with_capacity(content.len());
            stripped.push_str(&content[..at]);
            stripped.push_str(&content[at + CURSOR_MARKER.len()..]);
            stripped
        }
        None => content.to_string(),
    };

    let bytes = content.as_bytes();
    let mut text = Vec::with_capacity(bytes.len());
    let mut cursor = None;
    for (i, &byte) in bytes.iter().enumerate() {
        if marker == Some(i) {
            cursor = Some(text.len());
        }
        text.push(byte);
        // Indent continuation lines, but not an empty tail after the final newline
        if byte == b'\n' && i + 1 < bytes.len() {
            text.extend(std::iter::repeat(b' ').take(indent));
        }
    }
    if marker == Some(bytes.len()) {
        cursor = Some(text.len());
    }

    let cursor = cursor.unwrap_or(text.len());
    Expansion { text, cursor }
}
