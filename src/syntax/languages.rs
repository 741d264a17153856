//! File type classification
//!
//! Maps file extensions to the file types the lexer knows keyword tables for.

use std::path::Path;

/// File type, derived from the path extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FileType {
    #[default]
    PlainText,
    C,
    Cpp,
    Rust,
    Python,
    Go,
    JavaScript,
}

const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "int", "long", "register", "return", "short",
    "signed", "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned", "void",
    "volatile", "while", "bool", "true", "false", "size_t",
];

const CPP_KEYWORDS: &[&str] = &[
    "auto", "bool", "break", "case", "catch", "char", "class", "const", "constexpr", "continue",
    "default", "delete", "do", "double", "else", "enum", "explicit", "extern", "false", "float",
    "for", "friend", "goto", "if", "inline", "int", "long", "namespace", "new", "nullptr",
    "operator", "private", "protected", "public", "return", "short", "signed", "sizeof",
    "static", "struct", "switch", "template", "this", "throw", "true", "try", "typedef",
    "typename", "union", "unsigned", "using", "virtual", "void", "volatile", "while",
];

const RUST_KEYWORDS: &[&str] = &[
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for",
    "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
    "self", "Self", "static", "struct", "super", "trait", "true", "type", "unsafe", "use",
    "where", "while", "async", "await", "dyn",
];

const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var", "nil", "true", "false",
];

const JAVASCRIPT_KEYWORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
    "do", "else", "export", "extends", "false", "finally", "for", "function", "if", "import",
    "in", "instanceof", "let", "new", "null", "return", "super", "switch", "this", "throw",
    "true", "try", "typeof", "undefined", "var", "void", "while", "with", "yield",
];

impl FileType {
    /// Detect file type from an extension (without the dot)
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "c" | "h" => FileType::C,
            "cpp" | "cc" | "cxx" | "hpp" | "hh" => FileType::Cpp,
            "rs" => FileType::Rust,
            "py" => FileType::Python,
            "go" => FileType::Go,
            "js" | "mjs" | "cjs" => FileType::JavaScript,
            _ => FileType::PlainText,
        }
    }

    /// Detect file type from a path
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(FileType::PlainText)
    }

    /// Short name shown in the status line
    pub fn display_name(&self) -> &'static str {
        match self {
            FileType::PlainText => "text",
            FileType::C => "c",
            FileType::Cpp => "c++",
            FileType::Rust => "rust",
            FileType::Python => "python",
            FileType::Go => "go",
            FileType::JavaScript => "javascript",
        }
    }

    /// Keyword table used by the built-in lexer
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            FileType::PlainText => &[],
            FileType::C => C_KEYWORDS,
            FileType::Cpp => CPP_KEYWORDS,
            FileType::Rust => RUST_KEYWORDS,
            FileType::Python => PYTHON_KEYWORDS,
            FileType::Go => GO_KEYWORDS,
            FileType::JavaScript => JAVASCRIPT_KEYWORDS,
        }
    }

    /// Whether `#` starts a line comment rather than a preprocessor directive
    pub fn hash_comments(&self) -> bool {
        matches!(self, FileType::Python)
    }

    /// Whether `#` at line start is a preprocessor directive
    pub fn has_preprocessor(&self) -> bool {
        matches!(self, FileType::C | FileType::Cpp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(FileType::from_extension("c"), FileType::C);
        assert_eq!(FileType::from_extension("H"), FileType::C);
        assert_eq!(FileType::from_extension("hpp"), FileType::Cpp);
        assert_eq!(FileType::from_extension("rs"), FileType::Rust);
        assert_eq!(FileType::from_extension("txt"), FileType::PlainText);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(FileType::from_path(Path::new("src/main.c")), FileType::C);
        assert_eq!(FileType::from_path(Path::new("script.py")), FileType::Python);
        assert_eq!(FileType::from_path(Path::new("Makefile")), FileType::PlainText);
    }

    #[test]
    fn test_plain_text_has_no_keywords() {
        assert!(FileType::PlainText.keywords().is_empty());
        assert!(FileType::C.keywords().contains(&"while"));
    }
}
