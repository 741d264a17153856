//! Built-in C-family lexer
//!
//! Recognizes preprocessor lines, keywords from the file type's table, line
//! comments, string and char literals, numbers, identifiers and single-byte
//! punctuation. Anything else is emitted as a one-byte `Invalid` token so the
//! stream always advances.

use super::languages::FileType;
use super::tokens::{Token, TokenKind, TokenPosition, TokenStream, Tokenizer};

/// Default tokenizer used by documents
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinTokenizer;

impl Tokenizer for BuiltinTokenizer {
    fn stream<'a>(&self, data: &'a [u8], file_type: FileType) -> Box<dyn TokenStream + 'a> {
        Box::new(Lexer::new(data, file_type))
    }
}

pub struct Lexer<'a> {
    data: &'a [u8],
    file_type: FileType,
    cursor: usize,
    row: usize,
    bol: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(data: &'a [u8], file_type: FileType) -> Self {
        Self {
            data,
            file_type,
            cursor: 0,
            row: 0,
            bol: 0,
        }
    }

    fn peek(&self, ahead: usize) -> Option<u8> {
        self.data.get(self.cursor + ahead).copied()
    }

    fn starts_with(&self, prefix: &[u8]) -> bool {
        self.data[self.cursor..].starts_with(prefix)
    }

    fn position(&self) -> TokenPosition {
        TokenPosition {
            row: self.row,
            col: self.cursor - self.bol,
        }
    }

    fn advance(&mut self) {
        if let Some(byte) = self.peek(0) {
            self.cursor += 1;
            if byte == b'\n' {
                self.row += 1;
                self.bol = self.cursor;
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(0), Some(b) if b.is_ascii_whitespace() || b == 0x0b) {
            self.advance();
        }
    }

    fn advance_while(&mut self, pred: impl Fn(u8) -> bool) {
        while matches!(self.peek(0), Some(b) if pred(b)) {
            self.advance();
        }
    }

    fn skip_to_line_end(&mut self) {
        self.advance_while(|b| b != b'\n');
    }

    fn lex_string(&mut self, quote: u8) {
        self.advance();
        while let Some(byte) = self.peek(0) {
            match byte {
                b'\n' => return,
                b'\\' => {
                    self.advance();
                    if self.peek(0) != Some(b'\n') {
                        self.advance();
                    }
                }
                _ if byte == quote => {
                    self.advance();
                    return;
                }
                _ => self.advance(),
            }
        }
    }

    fn classify_word(&self, start: usize) -> TokenKind {
        let word = &self.data[start..self.cursor];
        let is_keyword = std::str::from_utf8(word)
            .map(|w| self.file_type.keywords().contains(&w))
            .unwrap_or(false);
        if is_keyword {
            TokenKind::Keyword
        } else {
            TokenKind::Symbol
        }
    }
}

fn is_symbol_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

fn is_symbol_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

impl TokenStream for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let position = self.position();
        let start = self.cursor;
        let Some(first) = self.peek(0) else {
            return Token::end(position, start);
        };

        let kind = if first == b'#' && self.file_type.hash_comments() {
            self.skip_to_line_end();
            TokenKind::Comment
        } else if first == b'#' && self.file_type.has_preprocessor() {
            self.skip_to_line_end();
            TokenKind::Preproc
        } else if self.starts_with(b"//") && !self.file_type.hash_comments() {
            self.skip_to_line_end();
            TokenKind::Comment
        } else if first == b'"' || first == b'\'' {
            self.lex_string(first);
            TokenKind::String
        } else if first.is_ascii_digit() {
            self.advance_while(|b| b.is_ascii_alphanumeric() || b == b'.');
            TokenKind::Number
        } else if is_symbol_start(first) {
            self.advance_while(is_symbol_byte);
            self.classify_word(start)
        } else {
            self.advance();
            match first {
                b'(' => TokenKind::OpenParen,
                b')' => TokenKind::CloseParen,
                b'{' => TokenKind::OpenCurly,
                b'}' => TokenKind::CloseCurly,
                b';' => TokenKind::Semicolon,
                b if b.is_ascii_punctuation() => TokenKind::Punct,
                _ => TokenKind::Invalid,
            }
        };

        Token::new(kind, position, start, self.cursor - start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str, file_type: FileType) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(src.as_bytes(), file_type);
        let mut out = Vec::new();
        loop {
            let token = lexer.next_token();
            if token.kind == TokenKind::End {
                break;
            }
            out.push(token.kind);
        }
        out
    }

    #[test]
    fn test_empty_buffer_is_just_end() {
        let mut lexer = Lexer::new(b"", FileType::C);
        assert_eq!(lexer.next_token().kind, TokenKind::End);
        assert_eq!(lexer.next_token().kind, TokenKind::End);
    }

    #[test]
    fn test_c_statement() {
        use TokenKind::*;
        assert_eq!(
            kinds("int x = 42;", FileType::C),
            vec![Keyword, Symbol, Punct, Number, Semicolon]
        );
    }

    #[test]
    fn test_preproc_and_comment() {
        use TokenKind::*;
        assert_eq!(
            kinds("#include <stdio.h>\n// hi\nf();", FileType::C),
            vec![Preproc, Comment, Symbol, OpenParen, CloseParen, Semicolon]
        );
    }

    #[test]
    fn test_python_hash_is_comment() {
        assert_eq!(
            kinds("# note", FileType::Python),
            vec![TokenKind::Comment]
        );
    }

    #[test]
    fn test_keywords_depend_on_file_type() {
        assert_eq!(kinds("while", FileType::C), vec![TokenKind::Keyword]);
        assert_eq!(kinds("while", FileType::PlainText), vec![TokenKind::Symbol]);
    }

    #[test]
    fn test_string_with_escape() {
        let src = br#""a\"b" x"#;
        let mut lexer = Lexer::new(src, FileType::C);
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.text(src), br#""a\"b""#);
    }

    #[test]
    fn test_unterminated_string_stops_at_newline() {
        let src = b"\"abc\nx";
        let mut lexer = Lexer::new(src, FileType::C);
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.len, 4);
        let next = lexer.next_token();
        assert_eq!(next.position, TokenPosition { row: 1, col: 0 });
    }

    #[test]
    fn test_positions_track_rows_and_columns() {
        let src = b"a\n  bc";
        let mut lexer = Lexer::new(src, FileType::C);
        assert_eq!(lexer.next_token().position, TokenPosition { row: 0, col: 0 });
        let second = lexer.next_token();
        assert_eq!(second.position, TokenPosition { row: 1, col: 2 });
        assert_eq!(second.range(), 4..6);
    }

    #[test]
    fn test_non_ascii_bytes_are_invalid_and_advance() {
        let kinds = kinds("\u{e9}", FileType::C);
        assert_eq!(kinds, vec![TokenKind::Invalid, TokenKind::Invalid]);
    }
}
