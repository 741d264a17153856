//! Read-only view of the model handed to the renderer once per frame

use std::time::Instant;

use super::lines::Line;
use super::popups::Popup;
use super::ui::{InputPrompt, SearchState};
use crate::syntax::Token;

#[derive(Debug)]
pub struct Frame<'a> {
    pub data: &'a [u8],
    pub lines: &'a [Line],
    pub tokens: &'a [Token],
    /// Clamped cursor offset
    pub cursor: usize,
    pub cursor_row: usize,
    pub cursor_column: usize,
    /// Inclusive selection span
    pub selection: Option<(usize, usize)>,
    pub search: &'a SearchState,
    pub input: &'a InputPrompt,
    /// Live popups in render order
    pub popups: &'a [Popup],
    pub status: String,
    /// Time of the last keystroke, for cursor blink
    pub last_stroke: Instant,
}

impl Frame<'_> {
    /// Whether byte `offset` is inside the selection
    pub fn is_selected(&self, offset: usize) -> bool {
        self.selection
            .map(|(begin, end)| begin <= offset && offset <= end)
            .unwrap_or(false)
    }

    /// Bytes of the line at `row`
    pub fn line_bytes(&self, row: usize) -> &[u8] {
        match self.lines.get(row) {
            Some(line) => &self.data[line.begin..line.end],
            None => &[],
        }
    }
}
