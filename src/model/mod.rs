//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;
pub mod editor;
pub mod frame;
pub mod lines;
pub mod popups;
pub mod ui;

pub use document::Document;
pub use editor::{EditorState, KillState};
pub use frame::Frame;
pub use lines::{Line, LineIndex};
pub use popups::{Color, Popup, PopupId, PopupLedger};
pub use ui::{InputAction, InputPrompt, SearchState};

use std::time::Instant;

use crate::config::{
    format_template, EditorConfig, CONFIG_ERROR_COLOR, CONFIG_ERROR_DURATION,
    CONFIG_ERROR_MESSAGE, MISSING_PLACEHOLDER,
};
use crate::snippets::SnippetSet;

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    pub document: Document,
    pub editor: EditorState,
    pub search: SearchState,
    pub input: InputPrompt,
    pub popups: PopupLedger,
    pub kill: KillState,
    pub snippets: SnippetSet,
    pub config: EditorConfig,
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl AppModel {
    /// Create a model with an empty document
    pub fn new(config: EditorConfig) -> Self {
        Self::with_document(Document::new(), config)
    }

    pub fn with_document(document: Document, config: EditorConfig) -> Self {
        let snippets = SnippetSet::from_map(config.snippets.clone());
        Self {
            document,
            editor: EditorState::new(),
            search: SearchState::default(),
            input: InputPrompt::default(),
            popups: PopupLedger::new(),
            kill: KillState::default(),
            snippets,
            config,
        }
    }

    // =========================================================================
    // Cursor and selection accessors (clamp-on-read)
    // =========================================================================

    /// Cursor offset clamped into `[0, len]`
    pub fn clamped_cursor(&self) -> usize {
        self.document.clamp(self.editor.cursor)
    }

    pub fn cursor_row(&self) -> usize {
        self.document.row_containing(self.editor.cursor)
    }

    pub fn cursor_column(&self) -> usize {
        self.document.column_of(self.editor.cursor)
    }

    pub fn line_count(&self) -> usize {
        self.document.line_count()
    }

    /// Inclusive selection span, both ends clamped into `[0, len]`
    pub fn selection_span(&self) -> Option<(usize, usize)> {
        let cursor = self.clamped_cursor();
        self.editor.selection_span(cursor).map(|(begin, end)| {
            (self.document.clamp(begin), self.document.clamp(end))
        })
    }

    /// Bytes covered by the inclusive selection span
    pub fn selected_text(&self) -> Option<Vec<u8>> {
        self.selection_span()
            .map(|(begin, end)| self.document.slice(begin, end + 1).to_vec())
    }

    pub fn set_cursor(&mut self, offset: usize) {
        self.editor.cursor = self.document.clamp(offset);
    }

    // =========================================================================
    // Buffer mutation
    // =========================================================================

    /// Insert at `at`, leaving the cursor after the inserted bytes
    pub fn insert(&mut self, at: usize, bytes: &[u8]) {
        self.editor.cursor = self.document.insert(at, bytes);
        self.editor.touch();
    }

    /// Insert at the cursor
    pub fn insert_at_cursor(&mut self, bytes: &[u8]) {
        let at = self.clamped_cursor();
        self.insert(at, bytes);
    }

    /// Remove `[begin, end)`, pulling the cursor back if it sat inside or after
    /// the removed range
    pub fn delete_range(&mut self, begin: usize, end: usize) {
        let end = self.document.clamp(end);
        let begin = begin.min(end);
        let cursor = self.clamped_cursor();
        let removed = self.document.delete_range(begin, end);
        if removed == 0 {
            return;
        }
        self.editor.cursor = if cursor >= end {
            cursor - removed
        } else if cursor > begin {
            begin
        } else {
            cursor
        };
        self.editor.touch();
    }

    /// Delete the inclusive selection span and clear the selection. Returns
    /// whether there was a selection.
    pub fn delete_selection(&mut self) -> bool {
        let Some((begin, end)) = self.selection_span() else {
            return false;
        };
        self.editor.clear_selection();
        self.document.delete_range(begin, end + 1);
        self.editor.cursor = begin;
        self.editor.touch();
        true
    }

    /// Replace the buffer, resetting cursor, selection and search
    pub fn load(&mut self, bytes: Vec<u8>) {
        self.document.load(bytes);
        self.editor.cursor = 0;
        self.editor.clear_selection();
        self.search = SearchState::default();
    }

    // =========================================================================
    // Configured strings
    // =========================================================================

    /// Flash an error popup in the fixed config-error style
    pub fn flash_error(&mut self, message: &str, now: Instant) {
        self.popups
            .add(message, CONFIG_ERROR_COLOR, CONFIG_ERROR_DURATION, now);
    }

    /// Show the popup configured under `key`. A missing or malformed template
    /// is logged and replaced by the config-error popup.
    pub fn configured_popup(&mut self, key: &str, placeholders: &[(&str, &str)], now: Instant) {
        let resolved = self.config.popup_template(key).and_then(|template| {
            format_template(key, &template.text, placeholders)
                .map(|text| (text, template.color, template.duration()))
        });
        match resolved {
            Ok((text, color, duration)) => {
                self.popups.add(text, color, duration, now);
            }
            Err(e) => {
                tracing::warn!("{}", e);
                self.flash_error(CONFIG_ERROR_MESSAGE, now);
            }
        }
    }

    /// Input hint configured under `key`, or `"???"` after logging and
    /// flashing the config-error popup
    pub fn configured_hint(&mut self, key: &str) -> String {
        match self.config.input_hint(key) {
            Ok(hint) => hint.to_string(),
            Err(e) => {
                tracing::warn!("{}", e);
                self.flash_error(CONFIG_ERROR_MESSAGE, Instant::now());
                MISSING_PLACEHOLDER.to_string()
            }
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// `"<ext>  <row> / <line count>"` with a 1-based row
    pub fn status_text(&self) -> String {
        format!(
            "{}  {} / {}",
            self.document.file_type.display_name(),
            self.cursor_row() + 1,
            self.line_count()
        )
    }

    /// Expire popups, then hand out a read-only view for rendering
    pub fn frame(&mut self, now: Instant) -> Frame<'_> {
        self.popups.expire(now);
        let cursor = self.clamped_cursor();
        Frame {
            data: self.document.data(),
            lines: self.document.lines().lines(),
            tokens: self.document.tokens(),
            cursor,
            cursor_row: self.cursor_row(),
            cursor_column: self.cursor_column(),
            selection: self.selection_span(),
            search: &self.search,
            input: &self.input,
            popups: self.popups.popups(),
            status: self.status_text(),
            last_stroke: self.editor.last_stroke,
        }
    }

    /// Check derived-state invariants, returning a description of the first
    /// violation
    pub fn check_invariants(&self) -> Result<(), String> {
        let len = self.document.len();
        let lines = self.document.lines().lines();

        let newlines = self.document.data().iter().filter(|&&b| b == b'\n').count();
        if lines.len() != newlines + 1 {
            return Err(format!(
                "line count {} != newlines + 1 ({})",
                lines.len(),
                newlines + 1
            ));
        }

        let mut expected_begin = 0;
        for (row, line) in lines.iter().enumerate() {
            if line.begin != expected_begin || line.end < line.begin || line.end > len {
                return Err(format!("line {} has bad range {:?}", row, line));
            }
            expected_begin = line.end + 1;
        }
        if lines.last().map(|l| l.end) != Some(len) {
            return Err("last line does not end at buffer length".to_string());
        }

        if self.clamped_cursor() > len {
            return Err(format!("cursor {} past length {}", self.clamped_cursor(), len));
        }
        Ok(())
    }
}
