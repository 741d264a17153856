//! Document model - the byte buffer and everything derived from it
//!
//! Every mutation re-derives the line index and the token cache before
//! returning, so readers never observe stale indices.

use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::lines::{Line, LineIndex};
use crate::syntax::{BuiltinTokenizer, FileType, Token, TokenCache, Tokenizer};

/// Document state - the text buffer and associated file metadata
#[derive(Clone)]
pub struct Document {
    data: Vec<u8>,
    lines: LineIndex,
    tokens: TokenCache,
    tokenizer: Rc<dyn Tokenizer>,

    /// Path to the file on disk (None for new/unsaved files)
    pub file_path: Option<PathBuf>,
    /// File type used for tokenizing and the status line
    pub file_type: FileType,
    /// Incremented on each mutation
    pub revision: u64,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("len", &self.data.len())
            .field("lines", &self.lines.len())
            .field("tokens", &self.tokens.len())
            .field("tokenizer", &self.tokenizer)
            .field("file_path", &self.file_path)
            .field("file_type", &self.file_type)
            .field("revision", &self.revision)
            .finish()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::with_tokenizer(Rc::new(BuiltinTokenizer))
    }

    /// Create an empty document that tokenizes with `tokenizer`
    pub fn with_tokenizer(tokenizer: Rc<dyn Tokenizer>) -> Self {
        Self {
            data: Vec::new(),
            lines: LineIndex::default(),
            tokens: TokenCache::new(),
            tokenizer,
            file_path: None,
            file_type: FileType::PlainText,
            revision: 0,
        }
    }

    /// Create a document with initial text
    pub fn with_text(text: &str) -> Self {
        let mut doc = Self::new();
        doc.load(text.as_bytes().to_vec());
        doc.revision = 0;
        doc
    }

    /// Create a document with initial text and a file path (file type is
    /// detected from the path)
    pub fn with_text_and_path(text: &str, path: impl Into<PathBuf>) -> Self {
        let mut doc = Self::new();
        doc.set_file_path(path.into());
        doc.load(text.as_bytes().to_vec());
        doc.revision = 0;
        doc
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn lines(&self) -> &LineIndex {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Line at `row`, clamped to the last line
    pub fn line(&self, row: usize) -> Line {
        self.lines.line(row)
    }

    /// Bytes of the line at `row`, without the newline
    pub fn line_bytes(&self, row: usize) -> &[u8] {
        let line = self.line(row);
        &self.data[line.begin..line.end]
    }

    pub fn tokens(&self) -> &[Token] {
        self.tokens.tokens()
    }

    pub fn token_cache(&self) -> &TokenCache {
        &self.tokens
    }

    /// Clamp an offset into `[0, len]`
    #[inline]
    pub fn clamp(&self, offset: usize) -> usize {
        offset.min(self.data.len())
    }

    /// Row containing `offset` (after clamping)
    pub fn row_containing(&self, offset: usize) -> usize {
        self.lines.row_containing(self.clamp(offset))
    }

    /// Column of `offset` within its row
    pub fn column_of(&self, offset: usize) -> usize {
        let offset = self.clamp(offset);
        offset - self.line(self.lines.row_containing(offset)).begin
    }

    /// Offset for `(row, col)`, clamping both to the document
    pub fn offset_at(&self, row: usize, col: usize) -> usize {
        let line = self.line(row);
        line.begin + col.min(line.len())
    }

    /// Bytes in `[begin, end)`, clamped
    pub fn slice(&self, begin: usize, end: usize) -> &[u8] {
        let end = self.clamp(end);
        let begin = begin.min(end);
        &self.data[begin..end]
    }

    pub fn byte_at(&self, offset: usize) -> Option<u8> {
        self.data.get(offset).copied()
    }

    /// Lossy UTF-8 view of the whole buffer
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Insert `bytes` at `at` (clamped). Returns the offset just past the
    /// inserted bytes, which is where the cursor goes.
    pub fn insert(&mut self, at: usize, bytes: &[u8]) -> usize {
        let at = self.clamp(at);
        self.data.splice(at..at, bytes.iter().copied());
        self.rederive();
        at + bytes.len()
    }

    /// Remove `[begin, end)` (clamped). Returns the number of bytes removed.
    pub fn delete_range(&mut self, begin: usize, end: usize) -> usize {
        let end = self.clamp(end);
        let begin = begin.min(end);
        if begin == end {
            return 0;
        }
        self.data.drain(begin..end);
        self.rederive();
        end - begin
    }

    /// Replace the whole buffer
    pub fn load(&mut self, bytes: Vec<u8>) {
        self.data = bytes;
        self.rederive();
    }

    /// Associate a path, re-detecting the file type
    pub fn set_file_path(&mut self, path: PathBuf) {
        let file_type = FileType::from_path(&path);
        self.file_path = Some(path);
        if file_type != self.file_type {
            self.file_type = file_type;
            self.tokens
                .rebuild(self.tokenizer.as_ref(), &self.data, self.file_type);
        }
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    fn rederive(&mut self) {
        self.revision += 1;
        self.lines.rebuild(&self.data);
        self.tokens
            .rebuild(self.tokenizer.as_ref(), &self.data, self.file_type);
    }

    // =========================================================================
    // Matching
    // =========================================================================

    /// Whether `needle` occurs at `pos`. An empty needle matches at every
    /// `pos <= len`.
    pub fn matches_at(&self, pos: usize, needle: &[u8]) -> bool {
        if pos > self.data.len() {
            return false;
        }
        self.data[pos..].starts_with(needle)
    }

    /// First offset in `[from, len)` where `needle` occurs
    pub fn find_from(&self, from: usize, needle: &[u8]) -> Option<usize> {
        (from..self.data.len()).find(|&pos| self.matches_at(pos, needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TokenKind;

    #[test]
    fn test_insert_rederives_lines() {
        let mut doc = Document::with_text("hello");
        let cursor = doc.insert(5, b"\nworld");
        assert_eq!(cursor, 11);
        assert_eq!(doc.line_count(), 2);
        assert_eq!(doc.line_bytes(1), b"world");
    }

    #[test]
    fn test_insert_clamps_offset() {
        let mut doc = Document::with_text("ab");
        let cursor = doc.insert(99, b"c");
        assert_eq!(doc.data(), b"abc");
        assert_eq!(cursor, 3);
    }

    #[test]
    fn test_delete_range_clamps_and_rederives() {
        let mut doc = Document::with_text("ab\ncd");
        assert_eq!(doc.delete_range(1, 99), 4);
        assert_eq!(doc.data(), b"a");
        assert_eq!(doc.line_count(), 1);
    }

    #[test]
    fn test_delete_empty_range_is_noop() {
        let mut doc = Document::with_text("abc");
        let revision = doc.revision;
        assert_eq!(doc.delete_range(2, 1), 0);
        assert_eq!(doc.revision, revision);
    }

    #[test]
    fn test_load_replaces_contents() {
        let mut doc = Document::with_text("old");
        doc.load(b"new\ntext".to_vec());
        assert_eq!(doc.data(), b"new\ntext");
        assert_eq!(doc.line_count(), 2);
    }

    #[test]
    fn test_tokens_follow_file_type() {
        let doc = Document::with_text_and_path("int x;", "main.c");
        assert_eq!(doc.file_type, FileType::C);
        assert_eq!(doc.tokens()[0].kind, TokenKind::Keyword);

        let plain = Document::with_text("int x;");
        assert_eq!(plain.tokens()[0].kind, TokenKind::Symbol);
    }

    #[test]
    fn test_set_file_path_retokenizes() {
        let mut doc = Document::with_text("while");
        assert_eq!(doc.tokens()[0].kind, TokenKind::Symbol);
        doc.set_file_path(PathBuf::from("loop.c"));
        assert_eq!(doc.tokens()[0].kind, TokenKind::Keyword);
    }

    #[test]
    fn test_column_and_offset_at() {
        let doc = Document::with_text("abc\nde");
        assert_eq!(doc.column_of(5), 1);
        assert_eq!(doc.offset_at(1, 9), 6);
        assert_eq!(doc.offset_at(9, 0), 4);
    }

    #[test]
    fn test_matches_at() {
        let doc = Document::with_text("abcabc");
        assert!(doc.matches_at(3, b"abc"));
        assert!(!doc.matches_at(4, b"abc"));
        assert!(doc.matches_at(6, b""));
        assert!(!doc.matches_at(7, b""));
        assert_eq!(doc.find_from(1, b"abc"), Some(3));
        assert_eq!(doc.find_from(4, b"abc"), None);
    }
}
