//! Token cache tests - rebuild on edit, pluggable tokenizers

mod common;

use std::rc::Rc;

use common::test_model;
use ded::messages::DocumentMsg;
use ded::model::Document;
use ded::syntax::{FileType, Token, TokenKind, TokenPosition, TokenStream, Tokenizer};
use ded::update::update;

/// Emits one `Symbol` token per line
#[derive(Debug)]
struct LineTokenizer;

struct LineStream<'a> {
    data: &'a [u8],
    pos: usize,
    row: usize,
}

impl TokenStream for LineStream<'_> {
    fn next_token(&mut self) -> Token {
        if self.pos >= self.data.len() {
            return Token::end(TokenPosition { row: self.row, col: 0 }, self.pos);
        }
        let start = self.pos;
        let len = self.data[start..]
            .iter()
            .position(|&b| b == b'\n')
            .unwrap_or(self.data.len() - start);
        let token = Token::new(
            TokenKind::Symbol,
            TokenPosition { row: self.row, col: 0 },
            start,
            len,
        );
        self.pos = start + len + 1;
        self.row += 1;
        token
    }
}

impl Tokenizer for LineTokenizer {
    fn stream<'a>(&self, data: &'a [u8], _file_type: FileType) -> Box<dyn TokenStream + 'a> {
        Box::new(LineStream { data, pos: 0, row: 0 })
    }
}

fn kinds(doc: &Document) -> Vec<TokenKind> {
    doc.tokens().iter().map(|t| t.kind).collect()
}

#[test]
fn test_tokens_rebuilt_after_insert() {
    let mut model = test_model("x", 1);
    assert_eq!(model.document.tokens().len(), 1);
    update(&mut model, DocumentMsg::InsertText(b" = 1;".to_vec()).into());
    assert_eq!(
        kinds(&model.document),
        vec![TokenKind::Symbol, TokenKind::Punct, TokenKind::Number, TokenKind::Semicolon]
    );
}

#[test]
fn test_tokens_cleared_when_buffer_emptied() {
    let mut model = test_model("abc", 3);
    update(&mut model, ded::messages::EditorMsg::SelectAll.into());
    update(&mut model, DocumentMsg::DeleteSelection.into());
    assert!(model.document.tokens().is_empty());
}

#[test]
fn test_custom_tokenizer_is_used() {
    let mut doc = Document::with_tokenizer(Rc::new(LineTokenizer));
    doc.insert(0, b"first\nsecond\nthird");
    assert_eq!(doc.tokens().len(), 3);
    assert_eq!(doc.tokens()[1].text(doc.data()), b"second");
    assert_eq!(doc.tokens()[2].position.row, 2);
}

#[test]
fn test_file_type_changes_keyword_tokens() {
    let mut doc = Document::with_text("def f(): pass");
    assert!(!kinds(&doc).contains(&TokenKind::Keyword));
    doc.set_file_path("script.py".into());
    assert_eq!(doc.file_type, FileType::Python);
    assert_eq!(doc.tokens()[0].kind, TokenKind::Keyword);
}

#[test]
fn test_tokens_on_row() {
    let doc = Document::with_text_and_path("int a;\nreturn a;", "x.c");
    let row1: Vec<_> = doc
        .token_cache()
        .tokens_on_row(1)
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        row1,
        vec![TokenKind::Keyword, TokenKind::Symbol, TokenKind::Semicolon]
    );
}
