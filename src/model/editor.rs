//! Editor state - cursor, selection anchor, and kill bookkeeping

use std::time::Instant;

/// Cursor and selection for the single editing view
///
/// `cursor` is a byte offset that may transiently exceed the buffer length;
/// readers go through `AppModel::clamped_cursor`.
#[derive(Debug, Clone)]
pub struct EditorState {
    /// Byte offset of the cursor
    pub cursor: usize,
    /// Whether a selection is active
    pub selection: bool,
    /// Selection anchor (valid while `selection` is set)
    pub select_begin: usize,
    /// Time of the last edit or movement, used to keep the cursor solid while typing
    pub last_stroke: Instant,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            selection: false,
            select_begin: 0,
            last_stroke: Instant::now(),
        }
    }

    /// Inclusive selection span `[min, max]` for a (clamped) cursor
    pub fn selection_span(&self, cursor: usize) -> Option<(usize, usize)> {
        if !self.selection {
            return None;
        }
        Some((
            self.select_begin.min(cursor),
            self.select_begin.max(cursor),
        ))
    }

    pub fn clear_selection(&mut self) {
        self.selection = false;
    }

    /// Anchor a selection at `at`
    pub fn start_selection(&mut self, at: usize) {
        self.selection = true;
        self.select_begin = at;
    }

    /// Apply the shift-modifier rule before a movement: extending from no
    /// selection anchors at the cursor, a plain movement clears the selection
    pub fn prepare_movement(&mut self, extend: bool, cursor: usize) {
        if extend {
            if !self.selection {
                self.start_selection(cursor);
            }
        } else {
            self.clear_selection();
        }
    }

    pub fn touch(&mut self) {
        self.last_stroke = Instant::now();
    }
}

/// Kill buffer for emacs-style kill commands
///
/// Consecutive `kill_word` invocations append to the same buffer; any other
/// message resets `repeat` to zero.
#[derive(Debug, Clone, Default)]
pub struct KillState {
    pub buffer: Vec<u8>,
    pub repeat: u32,
}

impl KillState {
    /// Record a kill, appending when it continues a kill sequence
    pub fn push(&mut self, killed: &[u8]) -> &[u8] {
        if self.repeat == 0 {
            self.buffer.clear();
        }
        self.buffer.extend_from_slice(killed);
        self.repeat += 1;
        &self.buffer
    }

    /// Record a kill that always starts a fresh buffer
    pub fn replace(&mut self, killed: &[u8]) -> &[u8] {
        self.buffer.clear();
        self.buffer.extend_from_slice(killed);
        &self.buffer
    }

    pub fn reset_sequence(&mut self) {
        self.repeat = 0;
    }
}
