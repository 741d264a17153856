//! Token data structures and the tokenizer integration contract
//!
//! The token cache is rebuilt from scratch after every buffer mutation. A
//! tokenizer produces a finite stream over the whole buffer that always ends
//! with a [`TokenKind::End`] sentinel; the cache drains it until the sentinel.

use std::fmt::Debug;
use std::ops::Range;

use super::languages::FileType;

/// Token classes the renderer maps to colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End-of-stream sentinel, never stored in the cache
    End,
    Invalid,
    Preproc,
    Symbol,
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    Semicolon,
    Keyword,
    Comment,
    String,
    Number,
    Punct,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::End => "end",
            TokenKind::Invalid => "invalid",
            TokenKind::Preproc => "preproc",
            TokenKind::Symbol => "symbol",
            TokenKind::OpenParen => "open-paren",
            TokenKind::CloseParen => "close-paren",
            TokenKind::OpenCurly => "open-curly",
            TokenKind::CloseCurly => "close-curly",
            TokenKind::Semicolon => "semicolon",
            TokenKind::Keyword => "keyword",
            TokenKind::Comment => "comment",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Punct => "punct",
        }
    }
}

/// Grid position of a token's first byte (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenPosition {
    pub row: usize,
    pub col: usize,
}

/// A highlighted span of the buffer
///
/// Tokens carry a byte range into the buffer they were produced from. They are
/// invalidated by the next mutation and must not be read across one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: TokenPosition,
    /// Byte offset of the first byte
    pub start: usize,
    /// Length in bytes
    pub len: usize,
}

impl Token {
    pub fn new(kind: TokenKind, position: TokenPosition, start: usize, len: usize) -> Self {
        Self {
            kind,
            position,
            start,
            len,
        }
    }

    /// The end-of-stream sentinel at a given position
    pub fn end(position: TokenPosition, at: usize) -> Self {
        Self::new(TokenKind::End, position, at, 0)
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }

    /// Bytes of this token in `data`, empty if the range no longer fits
    pub fn text<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        data.get(self.range()).unwrap_or(&[])
    }
}

/// A finite, non-restartable stream of tokens
///
/// After the last real token, `next_token` returns a token of kind
/// [`TokenKind::End`].
pub trait TokenStream {
    fn next_token(&mut self) -> Token;
}

/// Produces a token stream over a whole buffer
pub trait Tokenizer: Debug {
    fn stream<'a>(&self, data: &'a [u8], file_type: FileType) -> Box<dyn TokenStream + 'a>;
}

/// Flat list of tokens for the current buffer contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenCache {
    tokens: Vec<Token>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-scan the whole buffer
    pub fn rebuild(&mut self, tokenizer: &dyn Tokenizer, data: &[u8], file_type: FileType) {
        self.tokens.clear();
        let mut stream = tokenizer.stream(data, file_type);
        loop {
            let token = stream.next_token();
            if token.kind == TokenKind::End {
                break;
            }
            self.tokens.push(token);
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens whose first byte lies on `row`
    pub fn tokens_on_row(&self, row: usize) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(move |t| t.position.row == row)
    }
}
