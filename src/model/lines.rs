//! Line index derived from the buffer
//!
//! Lines are half-open byte ranges `[begin, end)` where `end` is the offset of
//! the terminating `\n`, or the buffer length for the last line. The index
//! always holds at least one line and partitions `[0, len]`.

/// One line of the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Line {
    pub begin: usize,
    pub end: usize,
}

impl Line {
    /// Number of bytes on the line, excluding the newline
    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    lines: Vec<Line>,
}

impl Default for LineIndex {
    fn default() -> Self {
        Self {
            lines: vec![Line::default()],
        }
    }
}

impl LineIndex {
    pub fn new(data: &[u8]) -> Self {
        let mut index = Self::default();
        index.rebuild(data);
        index
    }

    /// Recompute every line boundary in a single left-to-right scan
    pub fn rebuild(&mut self, data: &[u8]) {
        self.lines.clear();
        let mut begin = 0;
        for (i, &byte) in data.iter().enumerate() {
            if byte == b'\n' {
                self.lines.push(Line { begin, end: i });
                begin = i + 1;
            }
        }
        self.lines.push(Line {
            begin,
            end: data.len(),
        });
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn get(&self, row: usize) -> Option<Line> {
        self.lines.get(row).copied()
    }

    pub fn last_row(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    /// Line at `row`, clamped to the last line
    pub fn line(&self, row: usize) -> Line {
        self.lines[row.min(self.last_row())]
    }

    /// First row whose `[begin, end]` contains `offset`, falling back to the
    /// last row for offsets past the end
    pub fn row_containing(&self, offset: usize) -> usize {
        // Lines are sorted and contiguous, so the first line with end >= offset
        // is the one containing it.
        let row = self.lines.partition_point(|line| line.end < offset);
        row.min(self.last_row())
    }
}
