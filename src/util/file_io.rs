//! File load/save for documents
//!
//! Loading normalizes the text the way the editor expects it:
//! - each tab expands to four spaces
//! - carriage returns are dropped
//! - reading stops at the first NUL byte
//!
//! Saving always leaves the file ending in a newline.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Maximum file size in bytes (50 MB)
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Spaces a tab expands to on load
pub const LOAD_TAB_WIDTH: usize = 4;

/// Errors from loading or saving a document
#[derive(Debug, Clone, PartialEq)]
pub enum FileError {
    /// File does not exist
    NotFound,
    /// Permission denied
    PermissionDenied,
    /// Path is a directory, not a file
    IsDirectory,
    /// File exceeds size limit
    TooLarge { size_mb: f64 },
    /// Other I/O error
    Io(String),
}

impl FileError {
    fn from_io(e: std::io::Error) -> Self {
        match e.kind() {
            ErrorKind::NotFound => FileError::NotFound,
            ErrorKind::PermissionDenied => FileError::PermissionDenied,
            _ => FileError::Io(e.to_string()),
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self, filename: &str) -> String {
        match self {
            Self::NotFound => format!("File not found: {}", filename),
            Self::PermissionDenied => format!("Permission denied: {}", filename),
            Self::IsDirectory => format!("Cannot open directory: {}", filename),
            Self::TooLarge { size_mb } => format!(
                "{} is too large ({:.1} MB, max {} MB)",
                filename,
                size_mb,
                MAX_FILE_SIZE / (1024 * 1024)
            ),
            Self::Io(msg) => format!("Error opening {}: {}", filename, msg),
        }
    }
}

impl std::fmt::Display for FileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "file not found"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::IsDirectory => write!(f, "is a directory"),
            Self::TooLarge { size_mb } => write!(f, "file too large ({:.1} MB)", size_mb),
            Self::Io(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FileError {}

/// Read a file into a normalized byte buffer
pub fn read_file(path: &Path) -> Result<Vec<u8>, FileError> {
    let metadata = fs::metadata(path).map_err(FileError::from_io)?;
    if metadata.is_dir() {
        return Err(FileError::IsDirectory);
    }
    if metadata.len() > MAX_FILE_SIZE {
        return Err(FileError::TooLarge {
            size_mb: metadata.len() as f64 / (1024.0 * 1024.0),
        });
    }

    let raw = fs::read(path).map_err(FileError::from_io)?;
    Ok(normalize(&raw))
}

/// Write bytes to a file, appending a final newline if missing
pub fn write_file(path: &Path, content: &[u8]) -> Result<(), FileError> {
    if path.is_dir() {
        return Err(FileError::IsDirectory);
    }
    let mut out = Vec::with_capacity(content.len() + 1);
    out.extend_from_slice(content);
    if out.last() != Some(&b'\n') {
        out.push(b'\n');
    }
    fs::write(path, out).map_err(FileError::from_io)
}

fn normalize(raw: &[u8]) -> Vec<u8> {
    let mut data = Vec::with_capacity(raw.len());
    for &byte in raw {
        match byte {
            0 => break,
            b'\t' => data.extend(std::iter::repeat(b' ').take(LOAD_TAB_WIDTH)),
            b'\r' => continue,
            _ => data.push(byte),
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tabs_and_crlf() {
        assert_eq!(normalize(b"a\tb\r\nc"), b"a    b\nc".to_vec());
    }

    #[test]
    fn test_normalize_stops_at_nul() {
        assert_eq!(normalize(b"abc\0def"), b"abc".to_vec());
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_file(Path::new("/definitely/not/here.txt"));
        assert_eq!(result, Err(FileError::NotFound));
    }

    #[test]
    fn test_user_message() {
        let msg = FileError::NotFound.user_message("main.c");
        assert_eq!(msg, "File not found: main.c");
    }
}
