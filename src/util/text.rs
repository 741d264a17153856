//! Byte-level helpers for word and whitespace navigation
//!
//! The buffer is byte-oriented, so word motions work on ASCII byte classes.

/// `isalnum` for a single byte
#[inline]
pub fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
}

/// `isspace` for a single byte (includes vertical tab, unlike `u8::is_ascii_whitespace`)
#[inline]
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// First offset in `[begin, end)` that is not whitespace, or `end`
pub fn find_first_non_whitespace(data: &[u8], begin: usize, end: usize) -> usize {
    let end = end.min(data.len());
    let mut pos = begin.min(end);
    while pos < end && is_space(data[pos]) {
        pos += 1;
    }
    pos
}

/// Offset just after the last non-whitespace byte in `[begin, end)`, or `begin`
pub fn find_last_non_whitespace(data: &[u8], begin: usize, end: usize) -> usize {
    let end = end.min(data.len());
    let mut pos = end;
    while pos > begin {
        if !is_space(data[pos - 1]) {
            return pos;
        }
        pos -= 1;
    }
    begin
}

/// Parse a string made only of ASCII digits
pub fn parse_number(text: &str) -> Option<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
