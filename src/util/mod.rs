//! Utility modules

pub mod file_io;
pub mod text;

pub use file_io::{read_file, write_file, FileError, MAX_FILE_SIZE};
pub use text::{find_first_non_whitespace, find_last_non_whitespace, is_space, is_word_byte};
