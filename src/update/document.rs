//! Document update functions: text input, deletion, kill commands, clipboard
//! and snippet expansion.

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::AppModel;
use crate::snippets::word_left_of;
use crate::util::{is_space, is_word_byte};

use super::search::{extend_query, start_search, stop_search};

/// Handle document messages (buffer modifications)
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::InsertText(bytes) => insert_text(model, &bytes),
        DocumentMsg::InsertChar(ch) => {
            let mut buf = [0u8; 4];
            insert_text(model, ch.encode_utf8(&mut buf).as_bytes());
        }
        DocumentMsg::DeleteBackward => delete_backward(model),
        DocumentMsg::DeleteForward => {
            if model.search.active {
                return None;
            }
            if !model.delete_selection() {
                let cursor = model.clamped_cursor();
                model.delete_range(cursor, cursor + 1);
            }
        }
        DocumentMsg::DeleteChar => {
            if !model.delete_selection() {
                let cursor = model.clamped_cursor();
                model.delete_range(cursor, cursor + 1);
            }
        }
        DocumentMsg::DeleteSelection => {
            model.delete_selection();
        }
        DocumentMsg::HungryDeleteBackward => {
            if !model.delete_selection() {
                hungry_delete_backward(model);
            }
        }
        DocumentMsg::Tab => tab(model),

        DocumentMsg::KillLine => return kill_line(model),
        DocumentMsg::KillWord => return kill_word(model),
        DocumentMsg::BackwardKillWord => return backward_kill_word(model),
        DocumentMsg::OpenLine => open_line(model),

        DocumentMsg::Copy => {
            return model.selected_text().map(Cmd::SetClipboard);
        }
        DocumentMsg::Cut => {
            let text = model.selected_text()?;
            model.delete_selection();
            return Some(Cmd::batch(vec![Cmd::SetClipboard(text), Cmd::Redraw]));
        }
        DocumentMsg::Paste => return Some(Cmd::RequestPaste),
        DocumentMsg::PasteText(bytes) => {
            if bytes.is_empty() {
                tracing::debug!("clipboard empty, nothing to paste");
                return None;
            }
            model.delete_selection();
            model.insert_at_cursor(&bytes);
        }
    }
    Some(Cmd::Redraw)
}

// =============================================================================
// Typing
// =============================================================================

/// Route typed bytes to the search query, the input prompt, or the buffer
pub fn insert_text(model: &mut AppModel, bytes: &[u8]) {
    if model.search.active {
        extend_query(model, bytes);
    } else if model.input.active {
        model.input.push_bytes(bytes);
    } else {
        model.delete_selection();
        model.insert_at_cursor(bytes);
    }
}

/// Backspace, routed like typed text
pub fn delete_backward(model: &mut AppModel) {
    if model.search.active {
        model.search.query.pop();
    } else if model.input.active {
        model.input.pop();
    } else if !model.delete_selection() {
        let cursor = model.clamped_cursor();
        if cursor > 0 {
            model.delete_range(cursor - 1, cursor);
        }
    }
}

/// Tab: find next while searching, expand a snippet whose key is the word
/// left of the cursor, or insert `tab_width` spaces
pub fn tab(model: &mut AppModel) {
    if model.search.active {
        start_search(model);
        return;
    }
    if model.input.active {
        return;
    }
    model.editor.clear_selection();
    if !expand_snippet(model) {
        let spaces = vec![b' '; model.config.editor.tab_width];
        model.insert_at_cursor(&spaces);
    }
}

/// Replace the word left of the cursor with its snippet. Returns false when
/// there is no word or no snippet for it.
pub fn expand_snippet(model: &mut AppModel) -> bool {
    let cursor = model.clamped_cursor();
    let Some(start) = word_left_of(model.document.data(), cursor) else {
        return false;
    };
    let key = String::from_utf8_lossy(model.document.slice(start, cursor)).into_owned();
    let indent = model.document.column_of(start);
    let Some(expansion) = model.snippets.expand(&key, indent) else {
        tracing::debug!(%key, "no snippet for word");
        return false;
    };

    tracing::debug!(%key, "expanding snippet");
    model.document.delete_range(start, cursor);
    model.document.insert(start, &expansion.text);
    model.editor.cursor = start + expansion.cursor;
    model.editor.touch();
    true
}

// =============================================================================
// Emacs-style editing
// =============================================================================

/// Delete the whitespace run before the cursor, keeping one newline when the
/// run crosses lines. Without whitespace before the cursor, delete one byte.
pub fn hungry_delete_backward(model: &mut AppModel) {
    let cursor = model.clamped_cursor();
    if model.search.active || cursor == 0 {
        return;
    }

    let data = model.document.data();
    let mut start = cursor;
    let mut newlines = 0;
    let mut first_newline = 0;
    let mut other_whitespace = false;
    while start > 0 && is_space(data[start - 1]) {
        if data[start - 1] == b'\n' {
            newlines += 1;
            first_newline = start - 1;
        } else {
            other_whitespace = true;
        }
        start -= 1;
    }

    if start == cursor {
        start = cursor - 1;
    } else if newlines > 1 || (newlines == 1 && other_whitespace) {
        start = first_newline + 1;
    }
    model.delete_range(start, cursor);
}

/// Kill to end of line, or join lines when at the end of one
///
/// - empty line or cursor at line end: remove the line break (the following
///   one, or the preceding one on the last line)
/// - cursor on whitespace: remove the whole line
/// - otherwise: kill to end of line into the kill buffer and clipboard
pub fn kill_line(model: &mut AppModel) -> Option<Cmd> {
    model.editor.clear_selection();
    let cursor = model.clamped_cursor();
    if model.search.active || cursor >= model.document.len() {
        return None;
    }

    let row = model.cursor_row();
    let line = model.document.line(row);
    let last_row = row + 1 == model.line_count();

    if line.is_empty() || cursor == line.end {
        if !last_row {
            model.delete_range(line.end, line.end + 1);
        } else if row > 0 {
            model.delete_range(line.begin - 1, line.begin);
        }
        Some(Cmd::Redraw)
    } else if model.document.byte_at(cursor).map(is_space).unwrap_or(false) {
        model.delete_range(line.begin, line.end + 1);
        model.editor.cursor = model.document.clamp(line.begin);
        Some(Cmd::Redraw)
    } else {
        let killed = model.document.slice(cursor, line.end).to_vec();
        let text = model.kill.replace(&killed).to_vec();
        model.delete_range(cursor, line.end);
        Some(Cmd::batch(vec![Cmd::SetClipboard(text), Cmd::Redraw]))
    }
}

/// Kill forward to the end of the next word, stopping at a lower→upper
/// camelCase boundary. Consecutive kills accumulate in the kill buffer.
pub fn kill_word(model: &mut AppModel) -> Option<Cmd> {
    stop_search(model);
    model.editor.clear_selection();

    let start = model.clamped_cursor();
    let data = model.document.data();
    let mut end = start;
    while end < data.len() && !is_word_byte(data[end]) {
        end += 1;
    }
    while end < data.len() && is_word_byte(data[end]) {
        end += 1;
        if end < data.len() && data[end].is_ascii_uppercase() && data[end - 1].is_ascii_lowercase()
        {
            break;
        }
    }

    if start == end {
        model.kill.reset_sequence();
        return None;
    }

    let killed = data[start..end].to_vec();
    let text = model.kill.push(&killed).to_vec();
    model.delete_range(start, end);
    model.editor.cursor = start;
    Some(Cmd::batch(vec![Cmd::SetClipboard(text), Cmd::Redraw]))
}

/// Kill backward to the start of the word, or to the last uppercase letter
/// of a camelCase word
pub fn backward_kill_word(model: &mut AppModel) -> Option<Cmd> {
    stop_search(model);
    model.editor.clear_selection();

    let end = model.clamped_cursor();
    let data = model.document.data();
    let mut start = end;
    if start > 0 && is_word_byte(data[start - 1]) {
        while start > 0 && is_word_byte(data[start - 1]) {
            start -= 1;
            if data[start].is_ascii_uppercase() && start + 1 != end {
                break;
            }
        }
    } else {
        while start > 0 && !is_word_byte(data[start - 1]) {
            start -= 1;
        }
    }

    if start == end {
        return None;
    }

    let killed = data[start..end].to_vec();
    let text = model.kill.replace(&killed).to_vec();
    model.delete_range(start, end);
    Some(Cmd::batch(vec![Cmd::SetClipboard(text), Cmd::Redraw]))
}

/// Insert a newline after the cursor, leaving the cursor on the current line
pub fn open_line(model: &mut AppModel) {
    model.editor.clear_selection();
    let cursor = model.clamped_cursor();
    model.insert(cursor, b"\n");
    model.editor.cursor = cursor;
}
