//! Editor update functions for cursor movement and selection.
//!
//! Every movement applies the selection rule first (extend anchors a
//! selection, a plain move clears it) and leaves search mode.

use crate::commands::Cmd;
use crate::messages::{Direction, EditorMsg};
use crate::model::AppModel;
use crate::util::{find_first_non_whitespace, find_last_non_whitespace, is_word_byte};

use super::search::stop_search;

/// Handle editor messages (cursor movement, selection)
pub fn update_editor(model: &mut AppModel, msg: EditorMsg) -> Option<Cmd> {
    match msg {
        EditorMsg::MoveCursor { direction, extend } => move_with(model, extend, |m| match direction {
            Direction::Left => move_char_left(m),
            Direction::Right => move_char_right(m),
            Direction::Up => move_line_up(m),
            Direction::Down => move_line_down(m),
        }),
        EditorMsg::MoveCursorWord { direction, extend } => {
            move_with(model, extend, |m| match direction {
                Direction::Left | Direction::Up => move_word_left(m),
                Direction::Right | Direction::Down => move_word_right(m),
            })
        }
        EditorMsg::MoveCursorParagraph { direction, extend } => {
            move_with(model, extend, |m| match direction {
                Direction::Up | Direction::Left => move_paragraph_up(m),
                Direction::Down | Direction::Right => move_paragraph_down(m),
            })
        }
        EditorMsg::MoveCursorLineStart { extend } => move_with(model, extend, move_line_begin),
        EditorMsg::MoveCursorLineEnd { extend } => move_with(model, extend, move_line_end),
        EditorMsg::MoveCursorDocumentStart { extend } => {
            move_with(model, extend, move_document_begin)
        }
        EditorMsg::MoveCursorDocumentEnd { extend } => move_with(model, extend, move_document_end),
        EditorMsg::SmartLineStart { extend } => move_with(model, extend, smart_line_begin),
        EditorMsg::SmartLineEnd { extend } => move_with(model, extend, smart_line_end),
        EditorMsg::BackToIndentation { extend } => move_with(model, extend, back_to_indentation),

        EditorMsg::GotoPosition { line, column } => {
            move_with(model, false, |m| goto(m, line, column))
        }
        EditorMsg::SetCursorOffset(offset) => move_with(model, false, |m| m.set_cursor(offset)),

        EditorMsg::SelectAll => select_all(model),
        EditorMsg::MarkParagraph => {
            stop_search(model);
            mark_paragraph(model);
        }
        EditorMsg::Escape { extend } => {
            stop_search(model);
            if model.input.active && !model.input.required {
                model.input.close();
            }
            let cursor = model.clamped_cursor();
            model.editor.prepare_movement(extend, cursor);
        }
    }
    Some(Cmd::Redraw)
}

/// Apply the selection rule, stop search, then run the movement
fn move_with(model: &mut AppModel, extend: bool, movement: impl FnOnce(&mut AppModel)) {
    let cursor = model.clamped_cursor();
    model.editor.prepare_movement(extend, cursor);
    stop_search(model);
    movement(model);
    model.editor.touch();
}

// =============================================================================
// Character and line movement
// =============================================================================

pub fn move_char_left(model: &mut AppModel) {
    let cursor = model.clamped_cursor();
    model.editor.cursor = cursor.saturating_sub(1);
}

pub fn move_char_right(model: &mut AppModel) {
    let cursor = model.clamped_cursor();
    if cursor < model.document.len() {
        model.editor.cursor = cursor + 1;
    } else {
        model.editor.cursor = cursor;
    }
}

/// Move up one line, clamping the column to the target line's length
pub fn move_line_up(model: &mut AppModel) {
    let row = model.cursor_row();
    if row > 0 {
        let col = model.cursor_column();
        model.editor.cursor = model.document.offset_at(row - 1, col);
    }
}

/// Move down one line, clamping the column to the target line's length
pub fn move_line_down(model: &mut AppModel) {
    let row = model.cursor_row();
    if row + 1 < model.line_count() {
        let col = model.cursor_column();
        model.editor.cursor = model.document.offset_at(row + 1, col);
    }
}

pub fn move_line_begin(model: &mut AppModel) {
    model.editor.cursor = model.document.line(model.cursor_row()).begin;
}

pub fn move_line_end(model: &mut AppModel) {
    model.editor.cursor = model.document.line(model.cursor_row()).end;
}

pub fn move_document_begin(model: &mut AppModel) {
    model.editor.cursor = 0;
}

pub fn move_document_end(model: &mut AppModel) {
    model.editor.cursor = model.document.len();
}

// =============================================================================
// Word and paragraph movement
// =============================================================================

/// Step left over non-alphanumerics, then over alphanumerics
pub fn move_word_left(model: &mut AppModel) {
    let data = model.document.data();
    let mut cursor = model.clamped_cursor();
    while cursor > 0 && !is_word_byte(data[cursor - 1]) {
        cursor -= 1;
    }
    while cursor > 0 && is_word_byte(data[cursor - 1]) {
        cursor -= 1;
    }
    model.editor.cursor = cursor;
}

/// Step right over non-alphanumerics, then over alphanumerics
pub fn move_word_right(model: &mut AppModel) {
    let data = model.document.data();
    let mut cursor = model.clamped_cursor();
    while cursor < data.len() && !is_word_byte(data[cursor]) {
        cursor += 1;
    }
    while cursor < data.len() && is_word_byte(data[cursor]) {
        cursor += 1;
    }
    model.editor.cursor = cursor;
}

fn is_blank_row(model: &AppModel, row: usize) -> bool {
    model.document.line(row).is_empty()
}

/// Move to the first row of the next paragraph: past the rest of the current
/// paragraph, then past the blank rows after it
pub fn move_paragraph_down(model: &mut AppModel) {
    let last = model.line_count() - 1;
    let mut row = model.cursor_row();
    while row < last && !is_blank_row(model, row) {
        row += 1;
    }
    while row < last && is_blank_row(model, row) {
        row += 1;
    }
    model.editor.cursor = model.document.line(row).begin;
}

/// Move to the first row of the previous paragraph (or of the current one
/// when the cursor is inside it)
pub fn move_paragraph_up(model: &mut AppModel) {
    let mut row = model.cursor_row();
    if row > 0 {
        row -= 1;
    }
    while row > 0 && is_blank_row(model, row) {
        row -= 1;
    }
    while row > 0 && !is_blank_row(model, row - 1) {
        row -= 1;
    }
    model.editor.cursor = model.document.line(row).begin;
}

// =============================================================================
// Emacs-style line movement
// =============================================================================

/// Toggle between the first non-whitespace byte and the line start
pub fn smart_line_begin(model: &mut AppModel) {
    let cursor = model.clamped_cursor();
    let line = model.document.line(model.cursor_row());
    let first = find_first_non_whitespace(model.document.data(), line.begin, line.end);
    model.editor.cursor = if cursor != first { first } else { line.begin };
}

/// Toggle between just after the last non-whitespace byte and the line end
pub fn smart_line_end(model: &mut AppModel) {
    let cursor = model.clamped_cursor();
    let line = model.document.line(model.cursor_row());
    let last = find_last_non_whitespace(model.document.data(), line.begin, line.end);
    model.editor.cursor = if cursor != last { last } else { line.end };
}

pub fn back_to_indentation(model: &mut AppModel) {
    let line = model.document.line(model.cursor_row());
    model.editor.cursor = find_first_non_whitespace(model.document.data(), line.begin, line.end);
}

/// Jump to a 0-based `(line, col)`. The line clamps to the last row, the
/// column to the last byte of the line (0 on an empty line).
pub fn goto(model: &mut AppModel, line: usize, col: usize) {
    let target = model.document.line(line);
    let col = if target.is_empty() {
        0
    } else {
        col.min(target.len() - 1)
    };
    model.editor.cursor = target.begin + col;
}

// =============================================================================
// Selection
// =============================================================================

pub fn select_all(model: &mut AppModel) {
    model.editor.start_selection(0);
    model.editor.cursor = model.document.len();
}

/// Select from the start of the current paragraph, extending by one
/// paragraph on each call
pub fn mark_paragraph(model: &mut AppModel) {
    if !model.editor.selection {
        let mut row = model.cursor_row();
        while row > 0 && !is_blank_row(model, row - 1) {
            row -= 1;
        }
        let begin = model.document.line(row).begin;
        model.editor.start_selection(begin);
        model.editor.cursor = begin;
    }
    move_paragraph_down(model);
}
