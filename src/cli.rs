//! Command-line argument parsing for the headless driver
//!
//! Supports:
//! - Opening a file
//! - Jump to line/column
//! - Running a search from the cursor
//! - Dumping the token stream

use clap::Parser;
use std::path::PathBuf;

/// Headless driver for the ded editing engine
#[derive(Parser, Debug)]
#[command(name = "ded", version, about = "Headless driver for the ded editing engine")]
pub struct CliArgs {
    /// File to open
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Go to line N
    #[arg(long, value_name = "N")]
    pub line: Option<usize>,

    /// Go to column N (used with --line)
    #[arg(long, value_name = "N")]
    pub column: Option<usize>,

    /// Search for TEXT starting at the cursor
    #[arg(long, value_name = "TEXT")]
    pub find: Option<String>,

    /// Print the token stream
    #[arg(long)]
    pub tokens: bool,

    /// Write the default configuration file and exit
    #[arg(long)]
    pub init_config: bool,
}

impl CliArgs {
    /// Initial cursor position, converted from 1-indexed user input to
    /// 0-indexed `(line, column)`
    pub fn initial_position(&self) -> Option<(usize, usize)> {
        self.line.map(|line| {
            let line_0 = line.saturating_sub(1);
            let col_0 = self.column.unwrap_or(1).saturating_sub(1);
            (line_0, col_0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::parse_from(std::iter::once("ded").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_args() {
        let args = parse(&[]);
        assert!(args.path.is_none());
        assert_eq!(args.initial_position(), None);
        assert!(!args.tokens);
    }

    #[test]
    fn test_line_column_conversion() {
        let args = parse(&["main.c", "--line", "42", "--column", "10"]);
        assert_eq!(args.path, Some(PathBuf::from("main.c")));
        // 1-indexed to 0-indexed: line 42 → 41, column 10 → 9
        assert_eq!(args.initial_position(), Some((41, 9)));
    }

    #[test]
    fn test_line_without_column() {
        let args = parse(&["main.c", "--line", "10"]);
        assert_eq!(args.initial_position(), Some((9, 0)));
    }

    #[test]
    fn test_find_and_tokens() {
        let args = parse(&["main.c", "--find", "return", "--tokens"]);
        assert_eq!(args.find.as_deref(), Some("return"));
        assert!(args.tokens);
    }
}
