//! Syntax highlighting module
//!
//! Provides the token cache the renderer colors text from:
//! - File type detection from path extensions
//! - The tokenizer contract (finite stream ending in an `End` sentinel)
//! - A built-in C-family lexer used as the default tokenizer
//!
//! ## Architecture
//!
//! ```text
//! Document edit → Document::rederive → TokenCache::rebuild
//!              → Tokenizer::stream → next_token() until End
//! ```
//!
//! The whole buffer is re-scanned synchronously after every mutation.

mod languages;
mod lexer;
mod tokens;

pub use languages::FileType;
pub use lexer::{BuiltinTokenizer, Lexer};
pub use tokens::{Token, TokenCache, TokenKind, TokenPosition, TokenStream, Tokenizer};
